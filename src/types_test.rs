use super::*;

// =============================================================================
// UserProfile roles
// =============================================================================

fn profile_with_role(role: &str) -> UserProfile {
    UserProfile {
        id: 1,
        username: "zhang.wei".into(),
        full_name: Some("Zhang Wei".into()),
        role: role.into(),
        department_id: Some(3),
        title: None,
        phone: None,
    }
}

#[test]
fn admin_role_is_admin() {
    assert!(profile_with_role(ROLE_ADMIN).is_admin());
}

#[test]
fn admin_role_is_manager() {
    assert!(profile_with_role(ROLE_ADMIN).is_manager());
}

#[test]
fn manager_role_is_manager_not_admin() {
    let profile = profile_with_role(ROLE_MANAGER);
    assert!(profile.is_manager());
    assert!(!profile.is_admin());
}

#[test]
fn doctor_role_is_neither() {
    let profile = profile_with_role(ROLE_DOCTOR);
    assert!(!profile.is_admin());
    assert!(!profile.is_manager());
}

#[test]
fn role_match_is_case_sensitive() {
    let profile = profile_with_role("Admin");
    assert!(!profile.is_admin());
    assert!(!profile.is_manager());
}

// =============================================================================
// Deserialization of backend shapes
// =============================================================================

#[test]
fn user_profile_deserialize_full() {
    let json = r#"{
        "id": 7,
        "username": "li.na",
        "full_name": "Li Na",
        "role": "manager",
        "department_id": 2,
        "title": "Attending",
        "phone": "13800000000",
        "tags": []
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, 7);
    assert_eq!(profile.role, "manager");
    assert_eq!(profile.title.as_deref(), Some("Attending"));
}

#[test]
fn user_profile_deserialize_nulls() {
    let json = r#"{"id": 8, "username": "wang.fang", "full_name": null, "role": "doctor", "department_id": null, "title": null, "phone": null}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert!(profile.full_name.is_none());
    assert!(profile.department_id.is_none());
}

#[test]
fn login_response_deserialize() {
    let json = r#"{"access_token": "tok-1", "token_type": "bearer"}"#;
    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.access_token, "tok-1");
    assert_eq!(response.token_type, "bearer");
}

#[test]
fn schedule_entry_deserialize_null_room() {
    let json = r#"{"id": 11, "date": "2024-06-01", "doctor_id": 4, "shift_type_id": 2, "room_id": null, "status": "published"}"#;
    let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.date, "2024-06-01");
    assert!(entry.room_id.is_none());
}

#[test]
fn trade_deserialize() {
    let json = r#"{"id": 5, "requester_id": 4, "request_shift_id": 11, "target_doctor_id": 9, "status": "pending", "reason": null}"#;
    let trade: Trade = serde_json::from_str(json).unwrap();
    assert_eq!(trade.status, "pending");
    assert!(trade.reason.is_none());
}

#[test]
fn preference_kind_maps_type_field() {
    let json = r#"{"id": 2, "user_id": 4, "date": "2024-06-03", "type": "avoid", "shift_type_id": null, "reason": "night shift", "created_at": "2024-05-20T08:00:00"}"#;
    let preference: Preference = serde_json::from_str(json).unwrap();
    assert_eq!(preference.kind, "avoid");
}

#[test]
fn notification_deserialize() {
    let json = r#"{"id": 3, "user_id": 4, "content": "Schedule published", "type": "schedule", "is_read": false, "created_at": "2024-05-20T08:00:00"}"#;
    let notification: Notification = serde_json::from_str(json).unwrap();
    assert!(!notification.is_read);
    assert_eq!(notification.kind, "schedule");
}

#[test]
fn unread_count_deserialize() {
    let count: UnreadCount = serde_json::from_str(r#"{"count": 12}"#).unwrap();
    assert_eq!(count.count, 12);
}

// =============================================================================
// Request body serialization
// =============================================================================

#[test]
fn trade_request_serializes_wire_fields() {
    let body = TradeRequest {
        request_shift_id: 11,
        target_doctor_id: 9,
        reason: Some("family".into()),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["request_shift_id"], 11);
    assert_eq!(value["target_doctor_id"], 9);
    assert_eq!(value["reason"], "family");
}

#[test]
fn preference_request_renames_kind_to_type() {
    let body = PreferenceRequest {
        date: "2024-06-03".into(),
        kind: "desire".into(),
        shift_type_id: Some(2),
        reason: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["type"], "desire");
    assert!(value.get("kind").is_none());
}
