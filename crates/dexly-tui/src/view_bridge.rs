//! View bridge -- forwards [`ViewController`](dexly_core::ViewController)
//! state into TUI actions.
//!
//! Runs as a background task: watches the list and detail `FetchState`
//! channels and sends every committed transition through the action
//! channel, so screens only ever learn about data via `Action`s.

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use dexly_core::{DetailRecord, FetchState, SummaryEntry};

use crate::action::Action;

pub async fn spawn_view_bridge(
    mut list: watch::Receiver<FetchState<Vec<SummaryEntry>>>,
    mut detail: watch::Receiver<FetchState<DetailRecord>>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    // Initial snapshots so screens never render stale defaults
    let _ = action_tx.send(Action::ListState(list.borrow_and_update().clone()));
    let _ = action_tx.send(Action::DetailState(detail.borrow_and_update().clone()));

    loop {
        let action = tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = list.changed() => Action::ListState(list.borrow_and_update().clone()),

            Ok(()) = detail.changed() => Action::DetailState(detail.borrow_and_update().clone()),

            else => break,
        };

        debug!(?action, "forwarding view state");
        if action_tx.send(action).is_err() {
            break;
        }
    }

    debug!("view bridge stopped");
}
