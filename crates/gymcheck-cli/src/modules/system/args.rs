use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Store the backend base URL")]
    SetUrl(SetUrlArgs),
    #[command(about = "Print the stored configuration")]
    Show,
}

#[derive(Args)]
pub struct SetUrlArgs {
    #[arg(help = "Backend base URL, e.g. https://gym.example.com/api")]
    pub url: String,
}
