use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, help = "Prompted for when omitted on a terminal")]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, help = "Prompted for when omitted on a terminal")]
    pub password: Option<String>,
    #[arg(long, help = "Defaults to --password")]
    pub confirm_password: Option<String>,
}

#[derive(Args)]
pub struct ForgotPasswordArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Args)]
pub struct ResetPasswordArgs {
    #[arg(long, help = "Token from the reset email")]
    pub token: String,
    #[arg(long, help = "Prompted for when omitted on a terminal")]
    pub password: Option<String>,
}
