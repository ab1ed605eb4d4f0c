use clap::{Args, Subcommand};

#[derive(Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Subcommand)]
pub enum NotificationsCommand {
    #[command(about = "Notification history, newest first")]
    List(NotificationListArgs),
    #[command(about = "Number of unread notifications")]
    Unread(UserArg),
    #[command(about = "Mark one notification as read")]
    Read(NotificationIdArgs),
    #[command(about = "Mark every notification as read")]
    ReadAll(UserArg),
    Delete(NotificationIdArgs),
    #[command(about = "Show member notification settings")]
    Settings(UserArg),
    UpdateSettings(UpdateSettingsArgs),
    #[command(about = "Mute or unmute one coach")]
    CoachPreference(CoachPreferenceArgs),
    #[command(about = "Drop a per-coach override")]
    ResetCoachPreference(ResetCoachPreferenceArgs),
    #[command(about = "Show coach notification settings")]
    CoachSettings(CoachIdArgs),
    UpdateCoachSettings(UpdateCoachSettingsArgs),
    #[command(about = "Register a device push token")]
    RegisterPush(PushTokenArgs),
    UnregisterPush(PushTokenArgs),
}

#[derive(Args)]
pub struct UserArg {
    #[arg(long = "user", help = "Defaults to the last signed-in user")]
    pub user_id: Option<String>,
}

#[derive(Args)]
pub struct NotificationIdArgs {
    #[arg(help = "Notification ID")]
    pub id: String,
}

#[derive(Args)]
pub struct NotificationListArgs {
    #[command(flatten)]
    pub user: UserArg,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Args)]
pub struct UpdateSettingsArgs {
    #[command(flatten)]
    pub user: UserArg,
    #[arg(long)]
    pub enabled: Option<bool>,
    #[arg(long)]
    pub class_reminders: Option<bool>,
    #[arg(long, help = "15, 30, 60 or 120")]
    pub reminder_minutes: Option<u32>,
}

#[derive(Args)]
pub struct CoachPreferenceArgs {
    #[command(flatten)]
    pub user: UserArg,
    #[arg(help = "Coach ID")]
    pub coach_id: String,
    #[arg(long, help = "Receive this coach's notifications; mutes the coach when omitted")]
    pub enabled: bool,
}

#[derive(Args)]
pub struct ResetCoachPreferenceArgs {
    #[command(flatten)]
    pub user: UserArg,
    #[arg(help = "Coach ID")]
    pub coach_id: String,
}

#[derive(Args)]
pub struct CoachIdArgs {
    #[arg(help = "Coach ID")]
    pub coach_id: String,
}

#[derive(Args)]
pub struct UpdateCoachSettingsArgs {
    #[arg(help = "Coach ID")]
    pub coach_id: String,
    #[arg(long)]
    pub reservations: Option<bool>,
    #[arg(long)]
    pub cancellations: Option<bool>,
    #[arg(long)]
    pub daily_summary: Option<bool>,
    #[arg(long, help = "HH:00")]
    pub daily_summary_time: Option<String>,
}

#[derive(Args)]
pub struct PushTokenArgs {
    #[command(flatten)]
    pub user: UserArg,
    #[arg(help = "Device push token")]
    pub push_token: String,
}
