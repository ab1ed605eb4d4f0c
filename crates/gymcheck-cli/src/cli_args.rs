use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::classes::args::*;
pub use crate::modules::notifications::args::*;
pub use crate::modules::reservations::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "gymcheck")]
#[command(about = "Gymcheck class booking CLI")]
pub struct Cli {
    #[arg(long, env = "GYMCHECK_API_URL", help = "Backend base URL")]
    pub api_url: Option<String>,
    #[arg(
        long,
        env = "GYMCHECK_TOKEN",
        help = "Access token to use instead of the system keychain"
    )]
    pub token: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// to remote hosts and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Sign in with email and password")]
    Login(LoginArgs),
    #[command(about = "Create a member account")]
    Register(RegisterArgs),
    #[command(about = "Sign out and forget stored tokens")]
    Logout,
    #[command(about = "Show the signed-in user")]
    Whoami,
    #[command(about = "Request a password reset email")]
    ForgotPassword(ForgotPasswordArgs),
    #[command(about = "Set a new password with a reset token")]
    ResetPassword(ResetPasswordArgs),
    Config(ConfigArgs),
    Classes(ClassesArgs),
    Reservations(ReservationsArgs),
    Notifications(NotificationsArgs),
}
