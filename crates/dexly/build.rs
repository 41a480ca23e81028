use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

/// Writes `dexly.1` and a `dexly-<path>.1` page for each visible
/// subcommand, nested ones included, into `$OUT_DIR/man`.
fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is unset"))?;
    let man_dir = out_dir.join("man");
    std::fs::create_dir_all(&man_dir)?;

    let mut pending = vec![cli::Cli::command()];
    while let Some(cmd) = pending.pop() {
        let prefix = cmd.get_name().to_owned();
        pending.extend(
            cmd.get_subcommands()
                .filter(|sub| !sub.is_hide_set())
                .map(|sub| sub.clone().name(format!("{prefix}-{}", sub.get_name()))),
        );
        write_page(&cmd, &man_dir)?;
    }
    Ok(())
}

fn write_page(cmd: &clap::Command, dir: &Path) -> io::Result<()> {
    let mut file = std::fs::File::create(dir.join(format!("{}.1", cmd.get_name())))?;
    clap_mangen::Man::new(cmd.clone()).render(&mut file)
}
