use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::constants::{self, gradle};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Services to build, in reporting order
    #[serde(default = "default_services")]
    pub services: Vec<String>,

    /// Gradle version pinned when generating a missing wrapper
    #[serde(default = "default_gradle_version")]
    pub gradle_version: String,

    /// Task run for each service (`:<service>:<task>`)
    #[serde(default = "default_package_task")]
    pub package_task: String,

    /// Tasks excluded with `-x`
    #[serde(default = "default_skip_tasks")]
    pub skip_tasks: Vec<String>,

    /// Maximum concurrent service builds; unbounded when unset
    pub jobs: Option<usize>,

    /// Abort before deploying when any service build fails
    #[serde(default)]
    pub fail_fast: bool,

    /// Compose invocation override, e.g. `["podman", "compose"]`
    pub compose_command: Option<Vec<String>>,
}

fn default_services() -> Vec<String> {
    constants::DEFAULT_SERVICES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_gradle_version() -> String {
    gradle::WRAPPER_VERSION.to_string()
}

fn default_package_task() -> String {
    gradle::PACKAGE_TASK.to_string()
}

fn default_skip_tasks() -> Vec<String> {
    vec![gradle::SKIP_TASK.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            services: default_services(),
            gradle_version: default_gradle_version(),
            package_task: default_package_task(),
            skip_tasks: default_skip_tasks(),
            jobs: None,
            fail_fast: false,
            compose_command: None,
        }
    }
}

impl Config {
    /// Load configuration for `project_dir`.
    ///
    /// An explicit path must exist. Otherwise `stackup.toml` in the project,
    /// then the user config file, then the defaults.
    pub fn load(explicit: Option<&Path>, project_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let project_file = project_dir.join(constants::config::PROJECT_FILE);
        if project_file.exists() {
            return Self::from_file(&project_file);
        }

        if let Some(user_file) = Self::user_config_path() {
            if user_file.exists() {
                return Self::from_file(&user_file);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::USER_DIR)
                .join(constants::config::USER_FILE)
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.services.is_empty() {
            anyhow::bail!("No services configured");
        }
        if let Some(service) = self.services.iter().find(|s| s.trim().is_empty()) {
            anyhow::bail!("Invalid service name: {:?}", service);
        }
        match self.jobs {
            Some(0) => anyhow::bail!("jobs must be at least 1"),
            Some(jobs) if jobs > Semaphore::MAX_PERMITS => {
                anyhow::bail!("jobs must be at most {}", Semaphore::MAX_PERMITS)
            }
            _ => {}
        }
        if matches!(&self.compose_command, Some(cmd) if cmd.is_empty()) {
            anyhow::bail!("compose_command must not be empty");
        }
        Ok(())
    }
}
