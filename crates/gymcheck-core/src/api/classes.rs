use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ClassStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub coach_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_capacity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ClassStatus>,
}

impl UpdateClassRequest {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.max_capacity.is_none()
            && self.status.is_none()
    }
}

/// Body of the cancel endpoints. `reason` is omitted when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Query filters for `GET /classes`. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClassesRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub coach_id: Option<String>,
    pub status: Option<ClassStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAvailability {
    pub available: bool,
    pub spots_left: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cancel_request_without_reason_is_empty_object() {
        let value = serde_json::to_value(CancelRequest::default()).expect("serialize");
        assert_eq!(value, json!({}));

        let request = CancelRequest {
            reason: Some("Coach sick".to_string()),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value, json!({"reason": "Coach sick"}));
    }
}
