use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Seasonal tier a nightly room rate is billed under. The engine never
/// derives this from travel dates; callers pick the tier explicitly.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Season {
    #[serde(rename = "peak")]
    Peak,
    #[default]
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "off")]
    Off,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct SeasonalRates {
    pub peak: f64,
    pub regular: f64,
    pub off: f64,
}

impl SeasonalRates {
    pub fn nightly(&self, season: Season) -> f64 {
        match season {
            Season::Peak => self.peak,
            Season::Regular => self.regular,
            Season::Off => self.off,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RoomType {
    pub id: ObjectId,
    pub name: String,
    pub rates: SeasonalRates,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Hotel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub place: String,
    pub room_types: Vec<RoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Hotel {
    pub fn room_type(&self, room_type_id: &ObjectId) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| rt.id == *room_type_id)
    }
}
