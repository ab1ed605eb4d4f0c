#![allow(dead_code)]

use std::sync::Arc;

use gymcheck_client::{ApiClient, ClientConfig, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use gymcheck_keystore::{Keystore, MemoryKeystore};
use serde_json::{json, Value};

pub fn keystore_with(access: Option<&str>, refresh: Option<&str>) -> Arc<MemoryKeystore> {
    let mut entries = Vec::new();
    if let Some(access) = access {
        entries.push((ACCESS_TOKEN_KEY.to_string(), access.to_string()));
    }
    if let Some(refresh) = refresh {
        entries.push((REFRESH_TOKEN_KEY.to_string(), refresh.to_string()));
    }
    Arc::new(MemoryKeystore::with_entries(entries))
}

pub fn client(base_url: &str, keystore: Arc<MemoryKeystore>) -> ApiClient {
    let keystore: Arc<dyn Keystore> = keystore;
    ApiClient::new(&ClientConfig::new(base_url), keystore).expect("client")
}

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "name": "Test Member",
        "role": "MEMBER",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

pub fn class_json(id: &str) -> Value {
    json!({
        "id": id,
        "coachId": "coach-1",
        "title": "Morning WOD",
        "startTime": "2024-05-01T07:00:00Z",
        "endTime": "2024-05-01T08:00:00Z",
        "maxCapacity": 12,
        "currentReservations": 4,
        "status": "SCHEDULED",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

pub fn reservation_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "userId": "user-1",
        "classId": "class-1",
        "status": status,
        "reservedAt": "2024-04-30T10:00:00Z",
        "createdAt": "2024-04-30T10:00:00Z",
        "updatedAt": "2024-04-30T10:00:00Z"
    })
}
