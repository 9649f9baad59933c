use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "stackup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root containing the Gradle wrapper and compose file
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "DIRECTORY")]
    pub project_dir: PathBuf,

    /// Configuration file (defaults to stackup.toml in the project)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Abort before deploying if any service build fails
    #[arg(
        long,
        global = true,
        env = "STACKUP_FAIL_FAST",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub fail_fast: bool,

    /// Maximum number of concurrent service builds
    #[arg(
        short,
        long,
        global = true,
        env = "STACKUP_JOBS",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub jobs: Option<u16>,

    /// Build only these services
    /// Can be specified multiple times or as a comma-separated list
    #[arg(short, long = "service", global = true, value_delimiter = ',')]
    pub services: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Build all services, then tear down and bring up the compose environment
    Run,

    /// Ensure the Gradle wrapper and build all services
    Build,

    /// Tear down and bring up the compose environment without building
    Deploy,

    /// Show version information
    Version,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration
    pub fn apply(&self, config: &mut Config) {
        if self.fail_fast {
            config.fail_fast = true;
        }
        if let Some(jobs) = self.jobs {
            config.jobs = Some(usize::from(jobs));
        }
        if !self.services.is_empty() {
            config.services = self.services.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_pipeline() {
        let cli = Cli::try_parse_from(["stackup"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert!(cli.jobs.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "stackup",
            "build",
            "--fail-fast",
            "-j",
            "2",
            "--service",
            "order-service,payment-service",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Build));

        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.fail_fast);
        assert_eq!(config.jobs, Some(2));
        assert_eq!(config.services, vec!["order-service", "payment-service"]);
    }

    #[test]
    fn test_fail_fast_flag_without_env() {
        let cli = Cli::try_parse_from(["stackup", "run", "--fail-fast"]).unwrap();
        assert!(cli.fail_fast);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(Cli::try_parse_from(["stackup", "--jobs", "0"]).is_err());
    }
}
