//! XDG Base Directory Support
//!
//! Resolves where coderag looks for its user-level configuration
//! file on Linux/Unix systems.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "coderag";

/// Non-empty directory from an environment variable
fn env_dir(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// XDG directory structure for coderag
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve the configuration directory.
    ///
    /// `CODERAG_CONFIG_DIR` is used verbatim; otherwise `coderag/` under
    /// `XDG_CONFIG_HOME`, falling back to `~/.config`.
    pub fn new() -> Self {
        let config_dir = env_dir("CODERAG_CONFIG_DIR").unwrap_or_else(|| {
            env_dir("XDG_CONFIG_HOME")
                .unwrap_or_else(|| home().join(".config"))
                .join(APP_DIR)
        });
        Self { config_dir }
    }

    /// `config.toml` inside the config directory
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Create the config directory if it doesn't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)
    }

    pub fn log_paths(&self) {
        tracing::info!(
            "Config directory {:?} (file {})",
            self.config_dir,
            if self.config_file().is_file() { "present" } else { "absent" }
        );
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
