//! Typed endpoint wrappers over the gateway.
//!
//! Each helper owns one endpoint: it shapes the request, hands it to the
//! gateway, and deserializes the payload into the wire DTOs. Error handling
//! and the 401 policy stay in the gateway.

use serde_json::Value;

use crate::gateway::{Gateway, GatewayError};
use crate::types::{
    Notification, Preference, PreferenceRequest, ScheduleEntry, Trade, TradeRequest, UnreadCount,
    UserProfile,
};

/// Optional filters for the schedule listing.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub doctor_id: Option<i64>,
}

impl ScheduleFilter {
    /// Render the query suffix, empty when no filter is set.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(start) = &self.start_date {
            params.push(format!("start_date={start}"));
        }
        if let Some(end) = &self.end_date {
            params.push(format!("end_date={end}"));
        }
        if let Some(doctor_id) = self.doctor_id {
            params.push(format!("doctor_id={doctor_id}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// List rostered shifts, optionally filtered.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn list_schedules(
    gateway: &Gateway,
    filter: &ScheduleFilter,
) -> Result<Vec<ScheduleEntry>, GatewayError> {
    let path = format!("/schedules/{}", filter.query_string());
    let payload = gateway.get(&path).await?;
    Ok(serde_json::from_value(payload)?)
}

/// List the caller's visible trade requests.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn list_trades(gateway: &Gateway) -> Result<Vec<Trade>, GatewayError> {
    let payload = gateway.get("/trades/").await?;
    Ok(serde_json::from_value(payload)?)
}

/// File a new trade request.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn create_trade(gateway: &Gateway, request: &TradeRequest) -> Result<Trade, GatewayError> {
    let payload = gateway.post("/trades/", serde_json::to_value(request)?).await?;
    Ok(serde_json::from_value(payload)?)
}

/// Accept or reject an incoming trade.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn respond_trade(
    gateway: &Gateway,
    trade_id: i64,
    action: &str,
) -> Result<Trade, GatewayError> {
    let path = format!("/trades/{trade_id}/respond");
    let body = serde_json::json!({ "action": action });
    let payload = gateway.put(&path, body).await?;
    Ok(serde_json::from_value(payload)?)
}

/// List the caller's own scheduling preferences.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn my_preferences(gateway: &Gateway) -> Result<Vec<Preference>, GatewayError> {
    let payload = gateway.get("/preferences/me").await?;
    Ok(serde_json::from_value(payload)?)
}

/// Submit a scheduling preference.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn create_preference(
    gateway: &Gateway,
    request: &PreferenceRequest,
) -> Result<Preference, GatewayError> {
    let payload = gateway.post("/preferences/", serde_json::to_value(request)?).await?;
    Ok(serde_json::from_value(payload)?)
}

/// List the caller's notifications, newest first.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn list_notifications(gateway: &Gateway) -> Result<Vec<Notification>, GatewayError> {
    let payload = gateway.get("/notifications/").await?;
    Ok(serde_json::from_value(payload)?)
}

/// Mark one notification as read.
///
/// # Errors
/// Gateway errors.
pub async fn mark_notification_read(gateway: &Gateway, id: i64) -> Result<(), GatewayError> {
    let path = format!("/notifications/{id}/read");
    gateway.put(&path, Value::Null).await?;
    Ok(())
}

/// Count unread notifications.
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn unread_count(gateway: &Gateway) -> Result<i64, GatewayError> {
    let payload = gateway.get("/notifications/unread-count").await?;
    let count: UnreadCount = serde_json::from_value(payload)?;
    Ok(count.count)
}

/// List all users (admin views).
///
/// # Errors
/// Gateway errors, or [`GatewayError::Decode`] on an unexpected payload.
pub async fn list_users(gateway: &Gateway) -> Result<Vec<UserProfile>, GatewayError> {
    let payload = gateway.get("/users/").await?;
    Ok(serde_json::from_value(payload)?)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
