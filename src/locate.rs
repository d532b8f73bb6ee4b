use anyhow::{Context, Result};
use std::process::Command;
use tracing::debug;

/// Source of candidate paths for a pattern.
pub trait Locator {
    fn locate(&self, pattern: &str) -> Result<Vec<String>>;
}

/// Runs the system `locate` database lookup, case-insensitive and in regex mode.
#[derive(Debug, Clone)]
pub struct LocateCommand {
    program: String,
}

impl LocateCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args<'a>(&self, pattern: &'a str) -> [&'a str; 3] {
        ["-i", "-r", pattern]
    }
}

impl Default for LocateCommand {
    fn default() -> Self {
        Self::new("locate")
    }
}

impl Locator for LocateCommand {
    fn locate(&self, pattern: &str) -> Result<Vec<String>> {
        debug!("Running {} -i -r {:?}", self.program, pattern);

        let output = Command::new(&self.program)
            .args(self.args(pattern))
            .output()
            .with_context(|| format!("failed to run `{}`", self.program))?;

        // locate exits non-zero when nothing matches; whatever it printed still counts.
        if !output.status.success() {
            debug!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let matches = parse_matches(&String::from_utf8_lossy(&output.stdout));
        debug!("{} match(es) for {:?}", matches.len(), pattern);
        Ok(matches)
    }
}

/// Splits locator output into one path per line, skipping blank lines.
pub fn parse_matches(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
