use anyhow::Result;
use clap::Parser;
use stackup::{
    cli::{Cli, Commands},
    config::Config,
    context::HostContext,
    pipeline::Pipeline,
    runner::{CommandRunner, ProcessRunner},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr; stdout carries the pipeline status lines
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            pipeline(&cli)?.run().await?;
        }
        Commands::Build => {
            pipeline(&cli)?.build().await?;
        }
        Commands::Deploy => {
            pipeline(&cli)?.deploy();
        }
        Commands::Version => {
            println!("stackup {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn pipeline(cli: &Cli) -> Result<Pipeline> {
    let context = HostContext::detect(&cli.project_dir)?;
    let mut config = Config::load(cli.config.as_deref(), &context.project_dir)?;
    cli.apply(&mut config);
    config.validate()?;

    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessRunner::new());
    Ok(Pipeline::new(context, runner, config))
}
