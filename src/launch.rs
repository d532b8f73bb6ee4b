use anyhow::{bail, Context, Result};
use std::process::Command;
use tracing::{debug, warn};

/// Runs the command chosen for the selected path.
pub trait Launcher {
    fn launch(&self, argv: &[String]) -> Result<()>;
}

/// Spawns the command and waits for it, inheriting stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, argv: &[String]) -> Result<()> {
        let Some((cmd, args)) = argv.split_first() else {
            bail!("Empty command");
        };

        debug!("Launching {:?} {:?}", cmd, args);
        let status = Command::new(cmd)
            .args(args)
            .status()
            .with_context(|| format!("Failed to launch `{}`", cmd))?;

        if !status.success() {
            warn!("`{}` exited with {}", cmd, status);
        }
        Ok(())
    }
}

/// Builds the argv for opening `path`: the user's command, or the default
/// opener when none was given, followed by the full path.
pub fn build_command(command: &[String], opener: &[String], path: &str) -> Vec<String> {
    let base = if command.is_empty() { opener } else { command };

    let mut argv = base.to_vec();
    argv.push(path.to_string());
    argv
}
