use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use gymcheck_core::DEFAULT_API_URL;
use reqwest::Url;

use super::types::CliConfig;
use crate::cli_args::{ConfigArgs, ConfigCommand};

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::SetUrl(args) => {
            let url = args.url.trim().trim_end_matches('/');
            if Url::parse(url).is_err() {
                anyhow::bail!("invalid url: {}", args.url);
            }
            config.api_url = Some(url.to_string());
            println!("API URL set to {url}");
        }
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(())
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".gymcheck").join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// `--api-url` / `GYMCHECK_API_URL`, then the config file, then the default.
pub(crate) fn resolve_api_url(arg: Option<String>, config: &CliConfig) -> String {
    arg.filter(|url| !url.trim().is_empty())
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Plain http is only allowed to loopback hosts unless `--insecure` is set.
pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    let url = Url::parse(addr).map_err(|err| anyhow::anyhow!("invalid url {addr}: {err}"))?;
    if url.scheme() == "http" && !allow_insecure && !is_loopback(&url) {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}

fn is_loopback(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    host.eq_ignore_ascii_case("localhost")
        || host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback())
}
