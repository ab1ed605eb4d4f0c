use gymcheck_client::notifications;
use gymcheck_core::{
    is_valid_daily_summary_time, is_valid_reminder_minutes,
    UpdateCoachNotificationPreferenceRequest, UpdateCoachNotificationSettingsRequest,
    UpdateNotificationSettingsRequest,
};

use crate::cli_args::{NotificationsArgs, NotificationsCommand};
use crate::modules::system::{print_json, CommandContext};

pub(crate) async fn handle_notifications(
    args: NotificationsArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let client = ctx.client();
    match args.command {
        NotificationsCommand::List(args) => {
            let user_id = ctx.user_id(args.user.user_id)?;
            let list = notifications::user_notifications(client, &user_id, args.limit).await?;
            print_json(&list)?;
        }
        NotificationsCommand::Unread(args) => {
            let user_id = ctx.user_id(args.user_id)?;
            print_json(&notifications::unread_count(client, &user_id).await?)?;
        }
        NotificationsCommand::Read(args) => {
            notifications::mark_read(client, &args.id).await?;
            println!("Notification marked as read");
        }
        NotificationsCommand::ReadAll(args) => {
            let user_id = ctx.user_id(args.user_id)?;
            notifications::mark_all_read(client, &user_id).await?;
            println!("All notifications marked as read");
        }
        NotificationsCommand::Delete(args) => {
            notifications::delete_notification(client, &args.id).await?;
            println!("Notification deleted");
        }
        NotificationsCommand::Settings(args) => {
            let user_id = ctx.user_id(args.user_id)?;
            print_json(&notifications::user_settings(client, &user_id).await?)?;
        }
        NotificationsCommand::UpdateSettings(args) => {
            if let Some(minutes) = args.reminder_minutes {
                if !is_valid_reminder_minutes(minutes) {
                    anyhow::bail!("--reminder-minutes must be one of 15, 30, 60, 120");
                }
            }
            let user_id = ctx.user_id(args.user.user_id)?;
            let request = UpdateNotificationSettingsRequest {
                notifications_enabled: args.enabled,
                class_reminder_enabled: args.class_reminders,
                class_reminder_minutes_before: args.reminder_minutes,
            };
            let settings = notifications::update_user_settings(client, &user_id, &request).await?;
            print_json(&settings)?;
        }
        NotificationsCommand::CoachPreference(args) => {
            let user_id = ctx.user_id(args.user.user_id)?;
            let request = UpdateCoachNotificationPreferenceRequest {
                coach_id: args.coach_id,
                notifications_enabled: args.enabled,
            };
            let preference =
                notifications::update_coach_preference(client, &user_id, &request).await?;
            print_json(&preference)?;
        }
        NotificationsCommand::ResetCoachPreference(args) => {
            let user_id = ctx.user_id(args.user.user_id)?;
            notifications::delete_coach_preference(client, &user_id, &args.coach_id).await?;
            println!("Coach preference removed");
        }
        NotificationsCommand::CoachSettings(args) => {
            print_json(&notifications::coach_settings(client, &args.coach_id).await?)?;
        }
        NotificationsCommand::UpdateCoachSettings(args) => {
            if let Some(time) = args.daily_summary_time.as_deref() {
                if !is_valid_daily_summary_time(time) {
                    anyhow::bail!("--daily-summary-time must look like 08:00");
                }
            }
            let request = UpdateCoachNotificationSettingsRequest {
                reservation_notifications_enabled: args.reservations,
                cancellation_notifications_enabled: args.cancellations,
                daily_summary_enabled: args.daily_summary,
                daily_summary_time: args.daily_summary_time,
            };
            let settings =
                notifications::update_coach_settings(client, &args.coach_id, &request).await?;
            print_json(&settings)?;
        }
        NotificationsCommand::RegisterPush(args) => {
            let user_id = ctx.user_id(args.user.user_id)?;
            notifications::register_push_token(client, &user_id, &args.push_token).await?;
            println!("Push token registered");
        }
        NotificationsCommand::UnregisterPush(args) => {
            let user_id = ctx.user_id(args.user.user_id)?;
            notifications::unregister_push_token(client, &user_id, &args.push_token).await?;
            println!("Push token removed");
        }
    }
    Ok(())
}
