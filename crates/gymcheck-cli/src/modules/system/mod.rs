pub(crate) mod args;
mod config;
mod output;
mod types;

pub(crate) use config::{
    ensure_secure_addr, handle_config_command, load_config, resolve_api_url, save_config,
};
pub(crate) use output::{print_json, render_error};
pub(crate) use types::{CliConfig, CommandContext};
