mod chrome;
mod cli;
mod dist;
mod driver;
mod install;
mod report;
mod scripts;
mod verify;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Verify {} => verify::run(Path::new(".")),
        Command::Driver { dir, chrome_version } => driver::run(&dir, chrome_version),
        Command::Install { exe, into, desktop, no_shortcut } => {
            let root = match into {
                Some(root) => root,
                None => install::default_root()
                    .context("No se pudo determinar la carpeta de instalacion")?,
            };
            let shortcut = if no_shortcut {
                install::Shortcut::Omitted
            } else {
                match desktop.or_else(dirs::desktop_dir) {
                    Some(dir) => install::Shortcut::Desktop(dir),
                    None => install::Shortcut::Unavailable,
                }
            };
            install::install(&exe, &root, shortcut)
        }
        Command::Uninstall { from, desktop } => {
            let root = match from {
                Some(root) => root,
                None => install::default_root()
                    .context("No se pudo determinar la carpeta de instalacion")?,
            };
            let desktop = desktop.or_else(dirs::desktop_dir);
            install::uninstall(&root, desktop.as_deref())
        }
        Command::Dist { exe, out } => dist::assemble(&exe, &out),
    }
}

/// Trazas a stderr para no mezclarse con los mensajes del usuario.
/// `RUST_LOG` controla el nivel; sin él solo salen avisos.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
