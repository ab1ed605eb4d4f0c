use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Coach,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Attended,
    NoShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    ClassReminder,
    ReservationConfirmed,
    ReservationCancelled,
    /// Sent to coaches.
    NewReservation,
    /// Sent to coaches.
    UserCancelled,
    ClassCancelled,
    ClassUpdated,
}

#[derive(Debug)]
pub struct EnumParseError {
    enum_name: &'static str,
    value: String,
}

impl EnumParseError {
    fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

/// Accepts `in-progress`, `in_progress` and `IN_PROGRESS` alike.
fn normalize(value: &str) -> String {
    value.trim().replace('-', "_").to_ascii_uppercase()
}

impl UserRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Coach => "COACH",
            Self::Member => "MEMBER",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "ADMIN" => Ok(Self::Admin),
            "COACH" => Ok(Self::Coach),
            "MEMBER" => Ok(Self::Member),
            _ => Err(EnumParseError::new("user_role", value)),
        }
    }
}

impl ClassStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "SCHEDULED" => Ok(Self::Scheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(EnumParseError::new("class_status", value)),
        }
    }
}

impl ReservationStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Attended => "ATTENDED",
            Self::NoShow => "NO_SHOW",
        }
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            "ATTENDED" => Ok(Self::Attended),
            "NO_SHOW" => Ok(Self::NoShow),
            _ => Err(EnumParseError::new("reservation_status", value)),
        }
    }
}

impl NotificationType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClassReminder => "CLASS_REMINDER",
            Self::ReservationConfirmed => "RESERVATION_CONFIRMED",
            Self::ReservationCancelled => "RESERVATION_CANCELLED",
            Self::NewReservation => "NEW_RESERVATION",
            Self::UserCancelled => "USER_CANCELLED",
            Self::ClassCancelled => "CLASS_CANCELLED",
            Self::ClassUpdated => "CLASS_UPDATED",
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "CLASS_REMINDER" => Ok(Self::ClassReminder),
            "RESERVATION_CONFIRMED" => Ok(Self::ReservationConfirmed),
            "RESERVATION_CANCELLED" => Ok(Self::ReservationCancelled),
            "NEW_RESERVATION" => Ok(Self::NewReservation),
            "USER_CANCELLED" => Ok(Self::UserCancelled),
            "CLASS_CANCELLED" => Ok(Self::ClassCancelled),
            "CLASS_UPDATED" => Ok(Self::ClassUpdated),
            _ => Err(EnumParseError::new("notification_type", value)),
        }
    }
}
