//! Profile and scheduling DTOs shared by both client shells.
//!
//! Shapes mirror the backend's JSON exactly; nullable fields stay `Option`
//! so partial records deserialize without special handling.

use serde::{Deserialize, Serialize};

/// Role granting full administrative access.
pub const ROLE_ADMIN: &str = "admin";
/// Role for department managers.
pub const ROLE_MANAGER: &str = "manager";
/// Role for regular doctors.
pub const ROLE_DOCTOR: &str = "doctor";

/// Authenticated user profile, as returned by `/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: String,
    pub department_id: Option<i64>,
    pub title: Option<String>,
    pub phone: Option<String>,
}

impl UserProfile {
    /// Exact, case-sensitive match against the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Admins count as managers; everything else requires the manager role.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.role == ROLE_ADMIN || self.role == ROLE_MANAGER
    }
}

/// Response body of the authentication endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// A single rostered shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub date: String,
    pub doctor_id: i64,
    pub shift_type_id: i64,
    pub room_id: Option<i64>,
    pub status: String,
}

/// A shift-trade request between two doctors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub requester_id: i64,
    pub request_shift_id: i64,
    pub target_doctor_id: i64,
    pub status: String,
    pub reason: Option<String>,
}

/// Body for creating a trade request.
#[derive(Debug, Clone, Serialize)]
pub struct TradeRequest {
    pub request_shift_id: i64,
    pub target_doctor_id: i64,
    pub reason: Option<String>,
}

/// A doctor's scheduling preference (desired or avoided slot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub shift_type_id: Option<i64>,
    pub reason: Option<String>,
    pub created_at: String,
}

/// Body for submitting a preference.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceRequest {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub shift_type_id: Option<i64>,
    pub reason: Option<String>,
}

/// An in-app notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Response of the unread-notification counter.
#[derive(Debug, Clone, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
