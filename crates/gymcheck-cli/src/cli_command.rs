use crate::cli_args::*;
use crate::modules::auth::{
    handle_forgot_password, handle_login, handle_logout, handle_register, handle_reset_password,
    handle_whoami,
};
use crate::modules::classes::handle_classes;
use crate::modules::notifications::handle_notifications;
use crate::modules::reservations::handle_reservations;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => handle_login(args, ctx).await?,
        Command::Register(args) => handle_register(args, ctx).await?,
        Command::Logout => handle_logout(ctx).await?,
        Command::Whoami => handle_whoami(ctx).await?,
        Command::ForgotPassword(args) => handle_forgot_password(args, ctx).await?,
        Command::ResetPassword(args) => handle_reset_password(args, ctx).await?,
        Command::Classes(args) => handle_classes(args, ctx).await?,
        Command::Reservations(args) => handle_reservations(args, ctx).await?,
        Command::Notifications(args) => handle_notifications(args, ctx).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
