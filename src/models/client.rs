use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
pub enum TravelDates {
    #[serde(rename = "fixed")]
    Fixed {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Client hasn't committed to dates yet, only a month, e.g. "June 2027".
    #[serde(rename = "flexible")]
    FlexibleMonth { month: String },
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PartyComposition {
    pub adults: u32,
    pub children: u32,
}

/// Sales-tracking lifecycle; mutated by follow-up updates after the
/// client record is otherwise frozen.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowUpStatus {
    #[default]
    #[serde(rename = "new")]
    New,
    #[serde(rename = "contacted")]
    Contacted,
    #[serde(rename = "negotiating")]
    Negotiating,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "dropped")]
    Dropped,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Client {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub travel_dates: TravelDates,
    pub party: PartyComposition,
    pub number_of_days: u32,
    /// Free text, matched case-sensitively against
    /// `Transportation::vehicle_name` when costing.
    pub transportation_mode: String,
    #[serde(default)]
    pub status: FollowUpStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
