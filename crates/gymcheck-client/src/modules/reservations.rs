use gymcheck_core::{
    CancelRequest, CancelReservationRequest, CreateReservationRequest, CreateReservationResponse,
    GetReservationsRequest, Reservation, ReservationStatus, UpdateReservationStatusRequest,
};
use serde_json::Value;

use crate::client::{path_segment, ApiClient};
use crate::error::ClientResult;
use crate::modules::classes::now_iso;
use crate::query::query_pairs;

pub async fn create_reservation(
    client: &ApiClient,
    request: &CreateReservationRequest,
) -> ClientResult<CreateReservationResponse> {
    client
        .post("/reservations", Some(serde_json::to_value(request)?))
        .await
}

pub async fn cancel_reservation(
    client: &ApiClient,
    request: &CancelReservationRequest,
) -> ClientResult<()> {
    let body = CancelRequest {
        reason: request.reason.clone(),
    };
    client
        .patch::<Value>(
            &format!(
                "/reservations/{}/cancel",
                path_segment(&request.reservation_id)
            ),
            Some(serde_json::to_value(body)?),
        )
        .await?;
    Ok(())
}

pub async fn get_reservation(
    client: &ApiClient,
    reservation_id: &str,
) -> ClientResult<Reservation> {
    client
        .get(
            &format!("/reservations/{}", path_segment(reservation_id)),
            Vec::new(),
        )
        .await
}

pub async fn list_reservations(
    client: &ApiClient,
    filters: &GetReservationsRequest,
) -> ClientResult<Vec<Reservation>> {
    client.get("/reservations", query_pairs(filters)?).await
}

/// Upcoming confirmed reservations of one member.
pub async fn my_reservations(client: &ApiClient, user_id: &str) -> ClientResult<Vec<Reservation>> {
    let filters = GetReservationsRequest {
        user_id: Some(user_id.to_string()),
        start_date: Some(now_iso()),
        status: Some(ReservationStatus::Confirmed),
        ..Default::default()
    };
    list_reservations(client, &filters).await
}

pub async fn class_reservations(
    client: &ApiClient,
    class_id: &str,
) -> ClientResult<Vec<Reservation>> {
    client
        .get(
            &format!("/classes/{}/reservations", path_segment(class_id)),
            Vec::new(),
        )
        .await
}

pub async fn coach_reservations(
    client: &ApiClient,
    coach_id: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> ClientResult<Vec<Reservation>> {
    let filters = GetReservationsRequest {
        coach_id: Some(coach_id.to_string()),
        start_date: start_date.map(str::to_string),
        end_date: end_date.map(str::to_string),
        ..Default::default()
    };
    list_reservations(client, &filters).await
}

pub async fn update_reservation_status(
    client: &ApiClient,
    reservation_id: &str,
    status: ReservationStatus,
) -> ClientResult<Reservation> {
    client
        .patch(
            &format!("/reservations/{}/status", path_segment(reservation_id)),
            Some(serde_json::to_value(UpdateReservationStatusRequest { status })?),
        )
        .await
}

pub async fn mark_attended(client: &ApiClient, reservation_id: &str) -> ClientResult<Reservation> {
    update_reservation_status(client, reservation_id, ReservationStatus::Attended).await
}

pub async fn mark_no_show(client: &ApiClient, reservation_id: &str) -> ClientResult<Reservation> {
    update_reservation_status(client, reservation_id, ReservationStatus::NoShow).await
}
