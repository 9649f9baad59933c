//! Parallel service builds
//!
//! Each service gets its own task running the Gradle wrapper. Tasks are all
//! spawned before any is awaited, and [`build_all`] returns only once every one
//! of them has finished. A failing build never cancels the others.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::context::HostContext;
use crate::runner::{CommandRunner, CommandSpec};


/// How each service is built
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub services: Vec<String>,
    pub package_task: String,
    pub skip_tasks: Vec<String>,
    /// Concurrency limit; `None` runs every service at once
    pub jobs: Option<usize>,
}

impl BuildPlan {
    /// Wrapper invocation for one service
    pub fn command(&self, context: &HostContext, service: &str) -> CommandSpec {
        let mut spec = CommandSpec::new(context.wrapper_path())
            .arg(format!(":{}:{}", service, self.package_task));
        for task in &self.skip_tasks {
            spec = spec.args(["-x", task.as_str()]);
        }
        spec.current_dir(&context.project_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Succeeded,
    Failed(i32),
    /// The wrapper could not be started at all
    Errored(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub service: String,
    pub status: JobStatus,
}

impl BuildOutcome {
    fn errored(service: &str, err: impl std::fmt::Display) -> Self {
        Self {
            service: service.to_string(),
            status: JobStatus::Errored(err.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == JobStatus::Succeeded
    }

    /// Console line reported when the job finishes
    pub fn status_line(&self) -> String {
        match &self.status {
            JobStatus::Succeeded => format!("[OK] {} build", self.service),
            JobStatus::Failed(code) => {
                format!("[FAIL] {} build returned code {}", self.service, code)
            }
            JobStatus::Errored(err) => {
                format!("[FAIL] {} build could not start: {}", self.service, err)
            }
        }
    }
}

/// Outcomes of one build phase, in plan order
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub outcomes: Vec<BuildOutcome>,
}

impl BuildReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(BuildOutcome::succeeded)
    }

    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded())
            .map(|o| o.service.as_str())
            .collect()
    }
}

/// Build a single service, printing its status line
pub fn run_job(runner: &dyn CommandRunner, spec: &CommandSpec, service: &str) -> BuildOutcome {
    println!("Building {} …", service);

    let status = match runner.run(spec) {
        Ok(0) => JobStatus::Succeeded,
        Ok(code) => JobStatus::Failed(code),
        Err(err) => {
            warn!("Could not start build for {}: {:#}", service, err);
            JobStatus::Errored(err.to_string())
        }
    };

    let outcome = BuildOutcome {
        service: service.to_string(),
        status,
    };
    println!("{}", outcome.status_line());
    outcome
}

/// Build every service in `plan` concurrently and wait for all of them.
///
/// A job that panics or never completes is reported as errored; the remaining
/// jobs are still awaited.
pub async fn build_all(
    context: &HostContext,
    runner: Arc<dyn CommandRunner>,
    plan: &BuildPlan,
) -> BuildReport {
    println!("Starting to build applications!");

    let limit = plan
        .jobs
        .map(|jobs| Arc::new(Semaphore::new(jobs.clamp(1, Semaphore::MAX_PERMITS))));
    let mut set = JoinSet::new();

    for (index, service) in plan.services.iter().enumerate() {
        let spec = plan.command(context, service);
        let service = service.clone();
        let runner = Arc::clone(&runner);
        let limit = limit.clone();

        set.spawn(async move {
            let _permit = match limit {
                Some(semaphore) => match semaphore.acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(err) => return (index, BuildOutcome::errored(&service, err)),
                },
                None => None,
            };

            let name = service.clone();
            let outcome =
                tokio::task::spawn_blocking(move || run_job(runner.as_ref(), &spec, &service))
                    .await;
            match outcome {
                Ok(outcome) => (index, outcome),
                Err(err) => {
                    warn!("Build job for {} panicked: {}", name, err);
                    (index, BuildOutcome::errored(&name, err))
                }
            }
        });
    }
    debug!("Spawned {} build jobs", set.len());

    let mut finished: Vec<Option<BuildOutcome>> = vec![None; plan.services.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, outcome)) => finished[index] = Some(outcome),
            Err(err) => warn!("Build task failed: {}", err),
        }
    }

    let outcomes = finished
        .into_iter()
        .zip(&plan.services)
        .map(|(outcome, service)| {
            outcome.unwrap_or_else(|| BuildOutcome::errored(service, "build task did not complete"))
        })
        .collect();
    BuildReport { outcomes }
}
