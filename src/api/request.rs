//! Request types for the worker tracker API.
//!
//! This module defines the JSON request structures for the worker endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::models::Schedule;
use crate::store::{NewWorker, ScheduleUpdate, WorkerUpdate};

/// Deserializes a daily rate leniently.
///
/// The dashboard client historically sent the rate as a number, a numeric
/// string, or `null`; anything unparseable is treated as absent so the
/// store can fall back to the default rate instead of failing the request.
fn lenient_daily_rate<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }))
}

/// Request body for `POST /api/workers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkerRequest {
    /// The worker's name.
    pub name: String,
    /// The daily pay rate; absent or unparseable falls back to the default.
    #[serde(default, deserialize_with = "lenient_daily_rate")]
    pub daily_rate: Option<Decimal>,
    /// The initial weekly schedule; absent days default to empty.
    #[serde(default)]
    pub schedule: Schedule,
}

/// Per-day schedule patch in an update request.
///
/// Only the provided day keys are overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleUpdateRequest {
    /// New Sunday assignment, if any.
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<String>,
    /// New Monday assignment, if any.
    #[serde(rename = "M", default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<String>,
    /// New Tuesday assignment, if any.
    #[serde(rename = "T", default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<String>,
    /// New Wednesday assignment, if any.
    #[serde(rename = "W", default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<String>,
    /// New Thursday assignment, if any.
    #[serde(rename = "Th", default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<String>,
    /// New Friday assignment, if any.
    #[serde(rename = "F", default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<String>,
    /// New Saturday assignment, if any.
    #[serde(rename = "St", default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<String>,
}

/// Request body for `PUT /api/workers/{id}`.
///
/// All fields are optional; only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkerRequest {
    /// New name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New daily rate, if any; unparseable values are ignored.
    #[serde(default, deserialize_with = "lenient_daily_rate")]
    pub daily_rate: Option<Decimal>,
    /// Schedule patch, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleUpdateRequest>,
}

/// Query parameters for `GET /api/workers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWorkersQuery {
    /// Case-insensitive name search term; absent or empty matches all.
    #[serde(default)]
    pub search: Option<String>,
}

impl From<CreateWorkerRequest> for NewWorker {
    fn from(req: CreateWorkerRequest) -> Self {
        NewWorker {
            name: req.name,
            daily_rate: req.daily_rate,
            schedule: req.schedule,
        }
    }
}

impl From<ScheduleUpdateRequest> for ScheduleUpdate {
    fn from(req: ScheduleUpdateRequest) -> Self {
        ScheduleUpdate {
            sunday: req.sunday,
            monday: req.monday,
            tuesday: req.tuesday,
            wednesday: req.wednesday,
            thursday: req.thursday,
            friday: req.friday,
            saturday: req.saturday,
        }
    }
}

impl From<UpdateWorkerRequest> for WorkerUpdate {
    fn from(req: UpdateWorkerRequest) -> Self {
        WorkerUpdate {
            name: req.name,
            daily_rate: req.daily_rate,
            schedule: req.schedule.map(Into::into),
        }
    }
}
