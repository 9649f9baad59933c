//! Build-and-deploy pipeline
//!
//! Phases run in a fixed order: wrapper prerequisite, parallel service builds
//! (joined), engine readiness, teardown, bring-up. Only the prerequisite can
//! abort the run, unless `fail_fast` is set.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::build::{build_all, BuildPlan, BuildReport};
use crate::compose::ComposeClient;
use crate::config::Config;
use crate::context::HostContext;
use crate::runner::CommandRunner;
use crate::wrapper::{ensure_wrapper, WrapperStatus};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    Deployed,
    /// Engine did not answer; teardown and bring-up were skipped
    EngineNotReady,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub wrapper: WrapperStatus,
    pub builds: BuildReport,
    pub deploy: DeployOutcome,
}

pub struct Pipeline {
    context: HostContext,
    runner: Arc<dyn CommandRunner>,
    config: Config,
}

impl Pipeline {
    pub fn new(context: HostContext, runner: Arc<dyn CommandRunner>, config: Config) -> Self {
        Self {
            context,
            runner,
            config,
        }
    }

    pub fn build_plan(&self) -> BuildPlan {
        BuildPlan {
            services: self.config.services.clone(),
            package_task: self.config.package_task.clone(),
            skip_tasks: self.config.skip_tasks.clone(),
            jobs: self.config.jobs,
        }
    }

    fn compose(&self) -> ComposeClient {
        ComposeClient::new(&self.context, self.config.compose_command.as_deref())
    }

    /// Run every phase in order
    pub async fn run(&self) -> Result<PipelineReport> {
        println!("Pipeline started!");
        let (wrapper, builds) = self.build().await?;
        let deploy = self.deploy();
        Ok(PipelineReport {
            wrapper,
            builds,
            deploy,
        })
    }

    /// Ensure the wrapper, then build every service.
    ///
    /// Build failures are only reported, unless `fail_fast` is set.
    pub async fn build(&self) -> Result<(WrapperStatus, BuildReport)> {
        let wrapper = ensure_wrapper(
            &self.context,
            self.runner.as_ref(),
            &self.config.gradle_version,
        )?;

        let report = build_all(&self.context, Arc::clone(&self.runner), &self.build_plan()).await;
        if report.all_succeeded() {
            info!("All {} service builds succeeded", report.outcomes.len());
        } else {
            let failed = report.failed();
            info!("{} of {} service builds failed", failed.len(), report.outcomes.len());
            if self.config.fail_fast {
                anyhow::bail!(
                    "{} of {} service builds failed: {}",
                    failed.len(),
                    report.outcomes.len(),
                    failed.join(", ")
                );
            }
        }

        Ok((wrapper, report))
    }

    /// Tear down and bring up the compose environment if the engine is ready
    pub fn deploy(&self) -> DeployOutcome {
        let compose = self.compose();
        if !compose.is_ready(self.runner.as_ref()) {
            println!("[WARN] Docker engine is not ready. Start Docker Desktop or the docker daemon and try again.");
            println!("       Hints: 'docker context ls', 'docker context use desktop-linux', 'docker ps'.");
            return DeployOutcome::EngineNotReady;
        }

        compose.down(self.runner.as_ref());
        compose.up(self.runner.as_ref());
        println!("Pipeline finished!");
        DeployOutcome::Deployed
    }
}
