//! Stat bar -- `Speed   90 ██████████░░░░` filled to `min(value, 100)`%.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use dexly_core::display::{capitalize, stat_fill_percent};

use crate::theme;

const LABEL_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 4;

/// One labelled stat rendered on a single line.
pub struct StatBar<'a> {
    label: &'a str,
    value: u32,
    color: Color,
}

impl<'a> StatBar<'a> {
    pub fn new(label: &'a str, value: u32, color: Color) -> Self {
        Self {
            label,
            value,
            color,
        }
    }
}

/// Filled cells for a bar `width` cells wide.
pub fn filled_cells(value: u32, width: u16) -> u16 {
    let percent = u32::from(stat_fill_percent(value));
    let cells = (percent * u32::from(width)).div_ceil(100);
    u16::try_from(cells).unwrap_or(width).min(width)
}

impl Widget for StatBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let prefix = LABEL_WIDTH + VALUE_WIDTH + 1;
        let bar_width = u16::try_from(usize::from(area.width).saturating_sub(prefix)).unwrap_or(0);
        let filled = filled_cells(self.value, bar_width);

        let line = Line::from(vec![
            Span::styled(
                format!("{:<LABEL_WIDTH$}", capitalize(self.label)),
                theme::label(),
            ),
            Span::styled(format!("{:>3} ", self.value), theme::value()),
            Span::raw(" "),
            Span::styled(
                "█".repeat(usize::from(filled)),
                Style::default().fg(self.color),
            ),
            Span::styled(
                "░".repeat(usize::from(bar_width - filled)),
                Style::default().fg(theme::BAR_TRACK),
            ),
        ]);

        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fill_is_clamped_at_full_width() {
        assert_eq!(filled_cells(150, 20), 20);
        assert_eq!(filled_cells(100, 20), 20);
        assert_eq!(filled_cells(50, 20), 10);
        assert_eq!(filled_cells(0, 20), 0);
        assert_eq!(filled_cells(35, 0), 0);
    }

    #[test]
    fn renders_label_value_and_bar() {
        let area = Rect::new(0, 0, 41, 1);
        let mut buf = Buffer::empty(area);

        StatBar::new("speed", 150, Color::Yellow).render(area, &mut buf);

        let rendered: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_owned())
            .collect();
        assert!(rendered.starts_with("Speed           150"));
        assert!(rendered.ends_with(&"█".repeat(20)));
    }
}
