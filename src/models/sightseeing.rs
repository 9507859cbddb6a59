use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::transportation::VehicleClass;

/// Per-vehicle surcharge for reaching a sightseeing spot. Missing entries
/// mean the vehicle class is not offered for that spot and costs nothing.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct VehicleCosts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avanza: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_bus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus32: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus39: Option<f64>,
}

impl VehicleCosts {
    pub fn for_class(&self, class: VehicleClass) -> Option<f64> {
        match class {
            VehicleClass::Avanza => self.avanza,
            VehicleClass::Hiace => self.hiace,
            VehicleClass::MiniBus => self.mini_bus,
            VehicleClass::Bus32 => self.bus32,
            VehicleClass::Bus39 => self.bus39,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Sightseeing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_costs: Option<VehicleCosts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
