use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TransportCategory {
    /// Chauffeured vehicle booked through the agency; sightseeing stops
    /// may carry a per-vehicle surcharge on top of the daily rate.
    #[serde(rename = "cab")]
    Cab,
    /// Client drives themselves; only the daily rate applies.
    #[serde(rename = "self_drive")]
    SelfDrive,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    #[serde(rename = "avanza")]
    Avanza,
    #[serde(rename = "hiace")]
    Hiace,
    #[serde(rename = "mini_bus")]
    MiniBus,
    #[serde(rename = "bus32")]
    Bus32,
    #[serde(rename = "bus39")]
    Bus39,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transportation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub category: TransportCategory,
    /// Matched case-sensitively against `Client::transportation_mode`.
    pub vehicle_name: String,
    pub cost_per_day: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_class: Option<VehicleClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
