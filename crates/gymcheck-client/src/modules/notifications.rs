use gymcheck_core::{
    CoachNotificationPreference, CoachNotificationSettings, Notification, PushTokenRequest,
    UnreadCount, UpdateCoachNotificationPreferenceRequest, UpdateCoachNotificationSettingsRequest,
    UpdateNotificationSettingsRequest, UserNotificationSettings, DEFAULT_NOTIFICATION_LIMIT,
};
use serde_json::{json, Value};

use crate::client::{path_segment, ApiClient};
use crate::error::ClientResult;
use crate::query::{build_params, opt_param};

fn user_path(user_id: &str, rest: &str) -> String {
    format!("/users/{}{rest}", path_segment(user_id))
}

pub async fn user_settings(
    client: &ApiClient,
    user_id: &str,
) -> ClientResult<UserNotificationSettings> {
    client
        .get(&user_path(user_id, "/notification-settings"), Vec::new())
        .await
}

pub async fn update_user_settings(
    client: &ApiClient,
    user_id: &str,
    settings: &UpdateNotificationSettingsRequest,
) -> ClientResult<UserNotificationSettings> {
    client
        .patch(
            &user_path(user_id, "/notification-settings"),
            Some(serde_json::to_value(settings)?),
        )
        .await
}

pub async fn update_coach_preference(
    client: &ApiClient,
    user_id: &str,
    preference: &UpdateCoachNotificationPreferenceRequest,
) -> ClientResult<CoachNotificationPreference> {
    client
        .post(
            &user_path(user_id, "/notification-settings/coach-preferences"),
            Some(serde_json::to_value(preference)?),
        )
        .await
}

/// Falls back to the default for that coach.
pub async fn delete_coach_preference(
    client: &ApiClient,
    user_id: &str,
    coach_id: &str,
) -> ClientResult<()> {
    let rest = format!(
        "/notification-settings/coach-preferences/{}",
        path_segment(coach_id)
    );
    client.delete::<Value>(&user_path(user_id, &rest)).await?;
    Ok(())
}

pub async fn coach_settings(
    client: &ApiClient,
    coach_id: &str,
) -> ClientResult<CoachNotificationSettings> {
    client
        .get(
            &format!("/coaches/{}/notification-settings", path_segment(coach_id)),
            Vec::new(),
        )
        .await
}

pub async fn update_coach_settings(
    client: &ApiClient,
    coach_id: &str,
    settings: &UpdateCoachNotificationSettingsRequest,
) -> ClientResult<CoachNotificationSettings> {
    client
        .patch(
            &format!("/coaches/{}/notification-settings", path_segment(coach_id)),
            Some(serde_json::to_value(settings)?),
        )
        .await
}

/// `limit` defaults to 50.
pub async fn user_notifications(
    client: &ApiClient,
    user_id: &str,
    limit: Option<u32>,
) -> ClientResult<Vec<Notification>> {
    let params = build_params([opt_param(
        "limit",
        Some(limit.unwrap_or(DEFAULT_NOTIFICATION_LIMIT)),
    )]);
    client
        .get(&user_path(user_id, "/notifications"), params)
        .await
}

pub async fn unread_count(client: &ApiClient, user_id: &str) -> ClientResult<UnreadCount> {
    client
        .get(&user_path(user_id, "/notifications/unread-count"), Vec::new())
        .await
}

pub async fn mark_read(client: &ApiClient, notification_id: &str) -> ClientResult<()> {
    client
        .patch::<Value>(
            &format!("/notifications/{}/read", path_segment(notification_id)),
            Some(json!({})),
        )
        .await?;
    Ok(())
}

pub async fn mark_all_read(client: &ApiClient, user_id: &str) -> ClientResult<()> {
    client
        .post::<Value>(
            &user_path(user_id, "/notifications/mark-all-read"),
            Some(json!({})),
        )
        .await?;
    Ok(())
}

pub async fn delete_notification(client: &ApiClient, notification_id: &str) -> ClientResult<()> {
    client
        .delete::<Value>(&format!("/notifications/{}", path_segment(notification_id)))
        .await?;
    Ok(())
}

pub async fn register_push_token(
    client: &ApiClient,
    user_id: &str,
    token: &str,
) -> ClientResult<()> {
    let body = PushTokenRequest {
        token: token.to_string(),
    };
    client
        .post::<Value>(
            &user_path(user_id, "/push-tokens"),
            Some(serde_json::to_value(body)?),
        )
        .await?;
    Ok(())
}

pub async fn unregister_push_token(
    client: &ApiClient,
    user_id: &str,
    token: &str,
) -> ClientResult<()> {
    let rest = format!("/push-tokens/{}", path_segment(token));
    client.delete::<Value>(&user_path(user_id, &rest)).await?;
    Ok(())
}
