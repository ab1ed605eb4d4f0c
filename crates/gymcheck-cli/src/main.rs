use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use gymcheck_client::{ApiClient, ClientConfig, Session, ACCESS_TOKEN_KEY};
use gymcheck_keystore::{default_keystore, Keystore, MemoryKeystore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, render_error, resolve_api_url,
    save_config, CommandContext,
};


#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config()?;

    let command = match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
            return Ok(());
        }
        command => command,
    };

    let api_url = resolve_api_url(cli.api_url, &config);
    ensure_secure_addr(&api_url, cli.insecure)?;
    debug!(api_url = %api_url, "using backend");

    let keystore = build_keystore(cli.token)?;
    let client_config = ClientConfig {
        base_url: api_url,
        accept_invalid_certs: cli.insecure,
    };
    let client = ApiClient::new(&client_config, keystore)?;

    let mut ctx = CommandContext {
        session: Session::new(Arc::new(client)),
        config: &mut config,
    };
    handle_command(command, &mut ctx).await?;
    save_config(ctx.config)?;
    Ok(())
}

/// A token given on the command line lives only in memory for this run;
/// otherwise tokens come from the system keychain.
fn build_keystore(token: Option<String>) -> anyhow::Result<Arc<dyn Keystore>> {
    match token.filter(|token| !token.trim().is_empty()) {
        Some(token) => {
            let keystore = MemoryKeystore::new();
            keystore.set(ACCESS_TOKEN_KEY, token.trim())?;
            Ok(Arc::new(keystore))
        }
        None => Ok(Arc::from(default_keystore())),
    }
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
