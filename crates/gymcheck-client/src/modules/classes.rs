use chrono::{SecondsFormat, Utc};
use gymcheck_core::{
    CancelRequest, ClassAvailability, ClassStatus, CreateClassRequest, CrossFitClass,
    GetClassesRequest, UpdateClassRequest,
};
use serde_json::Value;

use crate::client::{path_segment, ApiClient};
use crate::error::ClientResult;
use crate::query::query_pairs;

pub async fn list_classes(
    client: &ApiClient,
    filters: &GetClassesRequest,
) -> ClientResult<Vec<CrossFitClass>> {
    client.get("/classes", query_pairs(filters)?).await
}

pub async fn get_class(client: &ApiClient, class_id: &str) -> ClientResult<CrossFitClass> {
    client
        .get(&format!("/classes/{}", path_segment(class_id)), Vec::new())
        .await
}

pub async fn upcoming_classes(client: &ApiClient) -> ClientResult<Vec<CrossFitClass>> {
    let filters = GetClassesRequest {
        start_date: Some(now_iso()),
        status: Some(ClassStatus::Scheduled),
        ..Default::default()
    };
    list_classes(client, &filters).await
}

/// `filters.coach_id` is overridden by `coach_id`.
pub async fn coach_classes(
    client: &ApiClient,
    coach_id: &str,
    filters: &GetClassesRequest,
) -> ClientResult<Vec<CrossFitClass>> {
    let filters = GetClassesRequest {
        coach_id: Some(coach_id.to_string()),
        ..filters.clone()
    };
    list_classes(client, &filters).await
}

pub async fn classes_by_date_range(
    client: &ApiClient,
    start_date: &str,
    end_date: &str,
) -> ClientResult<Vec<CrossFitClass>> {
    let filters = GetClassesRequest {
        start_date: Some(start_date.to_string()),
        end_date: Some(end_date.to_string()),
        ..Default::default()
    };
    list_classes(client, &filters).await
}

pub async fn create_class(
    client: &ApiClient,
    request: &CreateClassRequest,
) -> ClientResult<CrossFitClass> {
    client
        .post("/classes", Some(serde_json::to_value(request)?))
        .await
}

pub async fn update_class(
    client: &ApiClient,
    class_id: &str,
    request: &UpdateClassRequest,
) -> ClientResult<CrossFitClass> {
    client
        .patch(
            &format!("/classes/{}", path_segment(class_id)),
            Some(serde_json::to_value(request)?),
        )
        .await
}

pub async fn cancel_class(
    client: &ApiClient,
    class_id: &str,
    reason: Option<&str>,
) -> ClientResult<CrossFitClass> {
    let body = CancelRequest {
        reason: reason.map(str::to_string),
    };
    client
        .patch(
            &format!("/classes/{}/cancel", path_segment(class_id)),
            Some(serde_json::to_value(body)?),
        )
        .await
}

pub async fn delete_class(client: &ApiClient, class_id: &str) -> ClientResult<()> {
    client
        .delete::<Value>(&format!("/classes/{}", path_segment(class_id)))
        .await?;
    Ok(())
}

pub async fn check_availability(
    client: &ApiClient,
    class_id: &str,
) -> ClientResult<ClassAvailability> {
    client
        .get(
            &format!("/classes/{}/availability", path_segment(class_id)),
            Vec::new(),
        )
        .await
}

pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
