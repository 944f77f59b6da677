use anyhow::{Context, Result};
use parthelper::ShellExecutor;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub executor: ExecutorConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutorConfig {
    /// Interpreter used to run tool command lines (`<shell> -c <line>`).
    pub shell: PathBuf,
    /// Per-command timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            shell: PathBuf::from(parthelper::exec::shell::DEFAULT_SHELL),
            timeout_secs: parthelper::exec::shell::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }
}

impl ExecutorConfig {
    pub fn build(&self) -> ShellExecutor {
        ShellExecutor::new()
            .with_shell(self.shell.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
