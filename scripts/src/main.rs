use std::{io, process};

use clap::Parser;
use scripts::{cli::Cli, environment::RpcEnvironment, errors::ScriptError};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    tracing_subscriber::fmt().pretty().with_writer(io::stderr).init();

    let result = run(cli).await;
    if let Err(e) = &result {
        error!("{e}");
    }

    result
}

/// Resolve the configuration, connect to the node and run the command
async fn run(cli: Cli) -> Result<(), ScriptError> {
    let config = cli.config()?;
    let env = RpcEnvironment::connect(&config).await?;

    cli.command.run(&env, io::stdout().lock()).await
}
