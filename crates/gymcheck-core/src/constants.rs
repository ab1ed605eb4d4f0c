/// Backend used when neither the environment nor the config file names one.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Page size for notification history requests.
pub const DEFAULT_NOTIFICATION_LIMIT: u32 = 50;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Reminder lead times offered to members, in minutes.
pub const CLASS_REMINDER_OPTIONS: [u32; 4] = [15, 30, 60, 120];
