mod common;

use common::{class_json, client, keystore_with, reservation_json, user_json};
use gymcheck_client::{auth, classes, notifications, reservations};
use gymcheck_core::{
    CancelReservationRequest, CreateReservationRequest, GetClassesRequest, LoginRequest,
    ReservationStatus, UpdateCoachNotificationPreferenceRequest,
};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn login_stores_returned_tokens() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "member@box.gym",
            "password": "Strong123"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "user": user_json("user-1", "member@box.gym"),
                "tokens": {"accessToken": "a1", "refreshToken": "r1", "expiresIn": 900}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(None, None));
    let request = LoginRequest {
        email: "member@box.gym".to_string(),
        password: "Strong123".to_string(),
        remember_me: None,
    };
    let response = auth::login(&api, &request).await.expect("login");
    assert_eq!(response.user.id, "user-1");
    assert_eq!(api.tokens().access_token().expect("get").as_deref(), Some("a1"));
    assert_eq!(api.tokens().refresh_token().expect("get").as_deref(), Some("r1"));
}

#[tokio::test]
async fn logout_clears_tokens_even_when_backend_fails() {
    let mut server = Server::new_async().await;
    let logout = server
        .mock("POST", "/auth/logout")
        .with_status(500)
        .create_async()
        .await;
    // The 500 is not a 401, so no refresh is attempted.
    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let keystore = keystore_with(Some("a"), Some("r"));
    let api = client(&server.url(), keystore.clone());
    auth::logout(&api).await.expect("logout");
    assert!(keystore.is_empty());
    logout.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn logout_clears_tokens_when_backend_is_unreachable() {
    let keystore = keystore_with(Some("a"), Some("r"));
    let api = client("http://127.0.0.1:1", keystore.clone());
    auth::logout(&api).await.expect("logout");
    assert!(keystore.is_empty());
}

#[tokio::test]
async fn explicit_refresh_stores_new_pair() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/refresh")
        .match_body(Matcher::Json(json!({"refreshToken": "r0"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accessToken":"a1","refreshToken":"r1"}"#)
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a0"), Some("r0")));
    let tokens = auth::refresh_token(&api, "r0").await.expect("refresh");
    assert_eq!(tokens.access_token, "a1");
    assert_eq!(api.tokens().refresh_token().expect("get").as_deref(), Some("r1"));
}

#[tokio::test]
async fn forgot_password_posts_email() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/forgot-password")
        .match_body(Matcher::Json(json!({"email": "member@box.gym"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"sent"}"#)
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(None, None));
    auth::forgot_password(&api, "member@box.gym").await.expect("forgot");
    mock.assert_async().await;
}

#[tokio::test]
async fn class_filters_become_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/classes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("coachId".into(), "coach-1".into()),
            Matcher::UrlEncoded("status".into(), "CANCELLED".into()),
            Matcher::UrlEncoded("startDate".into(), "2024-05-01".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([class_json("class-1")]).to_string())
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    let filters = GetClassesRequest {
        start_date: Some("2024-05-01".to_string()),
        status: Some(gymcheck_core::ClassStatus::Cancelled),
        ..Default::default()
    };
    let list = classes::coach_classes(&api, "coach-1", &filters)
        .await
        .expect("classes");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].spots_left(), 8);
    mock.assert_async().await;
}

#[tokio::test]
async fn upcoming_classes_ask_for_scheduled_from_now() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/classes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "SCHEDULED".into()),
            Matcher::Regex("startDate=".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(None, None));
    assert!(classes::upcoming_classes(&api).await.expect("upcoming").is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn cancel_class_sends_reason() {
    let mut server = Server::new_async().await;
    let mut cancelled = class_json("class-1");
    cancelled["status"] = json!("CANCELLED");
    let mock = server
        .mock("PATCH", "/classes/class-1/cancel")
        .match_body(Matcher::Json(json!({"reason": "Coach sick"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(cancelled.to_string())
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    let class = classes::cancel_class(&api, "class-1", Some("Coach sick"))
        .await
        .expect("cancel");
    assert!(!class.is_bookable());
    mock.assert_async().await;
}

#[tokio::test]
async fn cancel_class_without_reason_sends_empty_object() {
    let mut server = Server::new_async().await;
    let mut cancelled = class_json("class-1");
    cancelled["status"] = json!("CANCELLED");
    let mock = server
        .mock("PATCH", "/classes/class-1/cancel")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(cancelled.to_string())
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    classes::cancel_class(&api, "class-1", None)
        .await
        .expect("cancel");
    mock.assert_async().await;
}

#[tokio::test]
async fn availability_reads_spots_left() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/classes/class%201/availability")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"available":true,"spotsLeft":2}"#)
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(None, None));
    let availability = classes::check_availability(&api, "class 1")
        .await
        .expect("availability");
    assert!(availability.available);
    assert_eq!(availability.spots_left, 2);
}

#[tokio::test]
async fn reservation_lifecycle_endpoints() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/reservations")
        .match_body(Matcher::Json(json!({"classId": "class-1"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "reservation": reservation_json("res-1", "CONFIRMED"),
                "message": "Reservation confirmed"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let cancel = server
        .mock("PATCH", "/reservations/res-1/cancel")
        .match_body(Matcher::Json(json!({"reason": "Travel"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reservation_json("res-1", "CANCELLED").to_string())
        .create_async()
        .await;
    let attend = server
        .mock("PATCH", "/reservations/res-2/status")
        .match_body(Matcher::Json(json!({"status": "ATTENDED"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reservation_json("res-2", "ATTENDED").to_string())
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    let created = reservations::create_reservation(
        &api,
        &CreateReservationRequest {
            class_id: "class-1".to_string(),
            notes: None,
        },
    )
    .await
    .expect("create");
    assert_eq!(created.message, "Reservation confirmed");
    assert_eq!(created.reservation.status, ReservationStatus::Confirmed);

    reservations::cancel_reservation(
        &api,
        &CancelReservationRequest {
            reservation_id: "res-1".to_string(),
            reason: Some("Travel".to_string()),
        },
    )
    .await
    .expect("cancel");

    let attended = reservations::mark_attended(&api, "res-2").await.expect("attend");
    assert_eq!(attended.status, ReservationStatus::Attended);

    create.assert_async().await;
    cancel.assert_async().await;
    attend.assert_async().await;
}

#[tokio::test]
async fn my_reservations_filter_by_user_and_confirmed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/reservations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("userId".into(), "user-1".into()),
            Matcher::UrlEncoded("status".into(), "CONFIRMED".into()),
            Matcher::Regex("startDate=".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([reservation_json("res-1", "CONFIRMED")]).to_string())
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    let mine = reservations::my_reservations(&api, "user-1").await.expect("mine");
    assert_eq!(mine.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn notification_history_defaults_to_fifty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/user-1/notifications")
        .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": "n-1",
                "userId": "user-1",
                "type": "CLASS_REMINDER",
                "title": "Class soon",
                "message": "Morning WOD starts in 30 minutes",
                "isRead": false,
                "sentAt": "2024-05-01T06:30:00Z",
                "createdAt": "2024-05-01T06:30:00Z"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    let list = notifications::user_notifications(&api, "user-1", None)
        .await
        .expect("notifications");
    assert_eq!(list.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn notification_mutations_hit_expected_paths() {
    let mut server = Server::new_async().await;
    let read = server
        .mock("PATCH", "/notifications/n-1/read")
        .with_status(200)
        .create_async()
        .await;
    let read_all = server
        .mock("POST", "/users/user-1/notifications/mark-all-read")
        .with_status(200)
        .create_async()
        .await;
    let unread = server
        .mock("GET", "/users/user-1/notifications/unread-count")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":3}"#)
        .create_async()
        .await;
    let preference = server
        .mock("DELETE", "/users/user-1/notification-settings/coach-preferences/coach-1")
        .with_status(204)
        .create_async()
        .await;
    let push = server
        .mock("POST", "/users/user-1/push-tokens")
        .match_body(Matcher::Json(json!({"token": "ExponentPushToken[x]"})))
        .with_status(201)
        .create_async()
        .await;
    let unpush = server
        .mock("DELETE", "/users/user-1/push-tokens/ExponentPushToken%5Bx%5D")
        .with_status(204)
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    notifications::mark_read(&api, "n-1").await.expect("read");
    notifications::mark_all_read(&api, "user-1").await.expect("read all");
    let count = notifications::unread_count(&api, "user-1").await.expect("unread");
    assert_eq!(count.count, 3);
    notifications::delete_coach_preference(&api, "user-1", "coach-1")
        .await
        .expect("delete preference");
    notifications::register_push_token(&api, "user-1", "ExponentPushToken[x]")
        .await
        .expect("register push");
    notifications::unregister_push_token(&api, "user-1", "ExponentPushToken[x]")
        .await
        .expect("unregister push");

    read.assert_async().await;
    read_all.assert_async().await;
    unread.assert_async().await;
    preference.assert_async().await;
    push.assert_async().await;
    unpush.assert_async().await;
}

#[tokio::test]
async fn coach_preference_is_posted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/users/user-1/notification-settings/coach-preferences")
        .match_body(Matcher::Json(json!({
            "coachId": "coach-1",
            "notificationsEnabled": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "pref-1",
                "userNotificationSettingsId": "settings-1",
                "coachId": "coach-1",
                "notificationsEnabled": false,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = client(&server.url(), keystore_with(Some("a"), Some("r")));
    let preference = notifications::update_coach_preference(
        &api,
        "user-1",
        &UpdateCoachNotificationPreferenceRequest {
            coach_id: "coach-1".to_string(),
            notifications_enabled: false,
        },
    )
    .await
    .expect("preference");
    assert!(!preference.notifications_enabled);
    mock.assert_async().await;
}
