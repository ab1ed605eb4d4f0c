use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{ClassStatus, NotificationType, ReservationStatus, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossFitClass {
    pub id: String,
    pub coach_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<Coach>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_capacity: u32,
    #[serde(default)]
    pub current_reservations: u32,
    pub status: ClassStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CrossFitClass {
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        self.max_capacity.saturating_sub(self.current_reservations)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    /// Only scheduled classes with free spots take new reservations.
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.status == ClassStatus::Scheduled && !self.is_full()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub class_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<CrossFitClass>,
    pub status: ReservationStatus,
    pub reserved_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNotificationSettings {
    pub id: String,
    pub user_id: String,
    pub notifications_enabled: bool,
    pub class_reminder_enabled: bool,
    pub class_reminder_minutes_before: u32,
    #[serde(default)]
    pub coach_notification_preferences: Vec<CoachNotificationPreference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserNotificationSettings {
    /// Coaches without an explicit preference notify by default.
    #[must_use]
    pub fn coach_notifications_enabled(&self, coach_id: &str) -> bool {
        self.coach_notification_preferences
            .iter()
            .find(|preference| preference.coach_id == coach_id)
            .map_or(true, |preference| preference.notifications_enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachNotificationPreference {
    pub id: String,
    pub user_notification_settings_id: String,
    pub coach_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<Coach>,
    pub notifications_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachNotificationSettings {
    pub id: String,
    pub coach_id: String,
    pub reservation_notifications_enabled: bool,
    pub cancellation_notifications_enabled: bool,
    pub daily_summary_enabled: bool,
    /// `HH:mm`, e.g. `08:00`.
    pub daily_summary_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
