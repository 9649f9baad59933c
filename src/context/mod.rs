//! Host environment, resolved once at startup
//!
//! Everything the pipeline would otherwise probe ad hoc (OS family, project
//! root, which tools are on `PATH`) lives in [`HostContext`], which is handed to
//! every operation. Tests build one by hand instead of calling
//! [`HostContext::detect`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{compose, gradle};
use crate::runner::CommandSpec;


/// Operating system family, as far as the pipeline cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Unix,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }
}

#[derive(Debug, Clone)]
pub struct HostContext {
    pub os: HostOs,
    /// Absolute project root; every command runs here
    pub project_dir: PathBuf,
    /// Globally installed `gradle`, if any
    pub gradle: Option<PathBuf>,
    /// `docker` binary, if any
    pub docker: Option<PathBuf>,
    /// Standalone `docker-compose` binary, if any
    pub docker_compose: Option<PathBuf>,
}

impl HostContext {
    /// Probe the current host for the tools the pipeline drives
    pub fn detect(project_dir: impl AsRef<Path>) -> Result<Self> {
        let project_dir = project_dir.as_ref();
        let project_dir = std::fs::canonicalize(project_dir).with_context(|| {
            format!("Project directory not found: {}", project_dir.display())
        })?;

        let context = Self {
            os: HostOs::current(),
            project_dir,
            gradle: which::which(gradle::GLOBAL_BINARY).ok(),
            docker: which::which(compose::DOCKER).ok(),
            docker_compose: which::which(compose::DOCKER_COMPOSE).ok(),
        };
        debug!("Host context: {:?}", context);
        Ok(context)
    }

    /// Context for `project_dir` with no tools available
    pub fn bare(os: HostOs, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            os,
            project_dir: project_dir.into(),
            gradle: None,
            docker: None,
            docker_compose: None,
        }
    }

    pub fn wrapper_path(&self) -> PathBuf {
        let name = match self.os {
            HostOs::Windows => gradle::WINDOWS_WRAPPER,
            HostOs::Unix => gradle::UNIX_WRAPPER,
        };
        self.project_dir.join(name)
    }

    pub fn wrapper_jar_path(&self) -> PathBuf {
        gradle::WRAPPER_JAR
            .iter()
            .fold(self.project_dir.clone(), |path, part| path.join(part))
    }

    /// Engine program used for the readiness probe
    pub fn engine_program(&self) -> PathBuf {
        self.docker
            .clone()
            .unwrap_or_else(|| PathBuf::from(compose::DOCKER))
    }

    /// Base compose invocation: an explicit override, `docker compose` when
    /// docker is installed, otherwise the standalone `docker-compose`.
    pub fn compose_command(&self, configured: Option<&[String]>) -> CommandSpec {
        if let Some((program, args)) = configured.and_then(|c| c.split_first()) {
            return CommandSpec::new(program.as_str())
                .args(args.iter().cloned())
                .current_dir(&self.project_dir);
        }

        let spec = match &self.docker {
            Some(docker) => CommandSpec::new(docker).arg("compose"),
            None => CommandSpec::new(
                self.docker_compose
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(compose::DOCKER_COMPOSE)),
            ),
        };
        spec.current_dir(&self.project_dir)
    }
}
