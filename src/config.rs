use std::path::PathBuf;

/// Number of matches listed before the rest is summarised.
pub const DEFAULT_MAX_SHOWN: usize = 32;

/// Runtime settings, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Home directory used to shorten displayed paths to `~`.
    pub home: Option<PathBuf>,
    /// Entries listed before the remainder is only counted.
    pub max_shown: usize,
    /// Command (and leading arguments) used when none is given on the command line.
    pub opener: Vec<String>,
}

impl Config {
    /// Builds a config from the current user's environment.
    pub fn from_env(max_shown: usize) -> Self {
        Self {
            home: dirs::home_dir(),
            max_shown,
            opener: default_opener(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: None,
            max_shown: DEFAULT_MAX_SHOWN,
            opener: default_opener(),
        }
    }
}

#[cfg(target_os = "windows")]
pub fn default_opener() -> Vec<String> {
    ["cmd", "/C", "start", ""].iter().map(|s| s.to_string()).collect()
}

#[cfg(target_os = "macos")]
pub fn default_opener() -> Vec<String> {
    vec!["open".to_string()]
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn default_opener() -> Vec<String> {
    vec!["xdg-open".to_string()]
}
