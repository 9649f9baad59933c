//! Container engine and compose phases

use std::path::PathBuf;
use tracing::{debug, warn};

use crate::constants::compose;
use crate::context::HostContext;
use crate::runner::{CommandRunner, CommandSpec};

/// Compose operations for one project
#[derive(Debug, Clone)]
pub struct ComposeClient {
    engine: PathBuf,
    base: CommandSpec,
}

impl ComposeClient {
    pub fn new(context: &HostContext, configured: Option<&[String]>) -> Self {
        Self {
            engine: context.engine_program(),
            base: context.compose_command(configured),
        }
    }

    pub fn readiness_command(&self) -> CommandSpec {
        CommandSpec::new(&self.engine).arg("version").quiet()
    }

    pub fn down_command(&self) -> CommandSpec {
        self.base.clone().args(compose::DOWN_ARGS)
    }

    pub fn up_command(&self) -> CommandSpec {
        self.base.clone().args(compose::UP_ARGS)
    }

    /// Whether the engine answers `version`; a missing binary counts as not ready
    pub fn is_ready(&self, runner: &dyn CommandRunner) -> bool {
        match runner.run(&self.readiness_command()) {
            Ok(code) => {
                debug!("Engine readiness check exited with {}", code);
                code == 0
            }
            Err(err) => {
                debug!("Engine readiness check failed: {:#}", err);
                false
            }
        }
    }

    /// Remove the project's containers, networks and volumes, orphans included
    pub fn down(&self, runner: &dyn CommandRunner) {
        println!("Removing all containers.");
        Self::run_unchecked(runner, &self.down_command());
    }

    /// Rebuild images as needed and start the environment detached
    pub fn up(&self, runner: &dyn CommandRunner) {
        println!("Running containers!");
        Self::run_unchecked(runner, &self.up_command());
    }

    // The exit status of teardown and bring-up never affects the run.
    fn run_unchecked(runner: &dyn CommandRunner, spec: &CommandSpec) {
        match runner.run(spec) {
            Ok(0) => {}
            Ok(code) => warn!("{} exited with code {}", spec, code),
            Err(err) => warn!("{:#}", err),
        }
    }
}
