use std::io::IsTerminal;

use gymcheck_client::auth;
use gymcheck_core::{forgot_password_email_error, validate_password, SignInForm, SignUpForm};
use tracing::info;

use crate::cli_args::{ForgotPasswordArgs, LoginArgs, RegisterArgs, ResetPasswordArgs};
use crate::modules::system::{print_json, CommandContext};

pub(crate) async fn handle_login(
    args: LoginArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = read_password(args.password, "Password: ")?;
    let form = SignInForm {
        email: args.email.trim().to_string(),
        password,
    };
    form.validate()?;
    let user = ctx.session.sign_in(&form.email, &form.password).await?;
    info!(user = %user.id, "signed in");
    ctx.config.remember_user(&user);
    print_json(&user)
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = read_password(args.password, "Password: ")?;
    let confirm_password = match args.confirm_password {
        Some(confirm) => confirm,
        None if std::io::stdin().is_terminal() => rpassword::prompt_password("Confirm password: ")?,
        None => password.clone(),
    };
    let form = SignUpForm {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        password,
        confirm_password,
    };
    form.validate()?;
    let user = ctx
        .session
        .sign_up(&form.email, &form.password, &form.name)
        .await?;
    ctx.config.remember_user(&user);
    print_json(&user)
}

pub(crate) async fn handle_logout(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    ctx.session.sign_out().await?;
    ctx.config.forget_user();
    println!("Logged out");
    Ok(())
}

pub(crate) async fn handle_whoami(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let user = auth::get_me(ctx.client()).await?;
    ctx.config.remember_user(&user);
    print_json(&user)
}

pub(crate) async fn handle_forgot_password(
    args: ForgotPasswordArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    if let Some(message) = forgot_password_email_error(&args.email) {
        anyhow::bail!("{message}");
    }
    auth::forgot_password(ctx.client(), args.email.trim()).await?;
    println!("If that account exists, a reset link is on its way");
    Ok(())
}

pub(crate) async fn handle_reset_password(
    args: ResetPasswordArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = read_password(args.password, "New password: ")?;
    if let Some(message) = validate_password(&password).first_error() {
        anyhow::bail!("{message}");
    }
    auth::reset_password(ctx.client(), &args.token, &password).await?;
    println!("Password updated");
    Ok(())
}

fn read_password(arg: Option<String>, prompt: &str) -> anyhow::Result<String> {
    if let Some(password) = arg {
        return Ok(password);
    }
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("password is required; pass --password");
    }
    Ok(rpassword::prompt_password(prompt)?)
}
