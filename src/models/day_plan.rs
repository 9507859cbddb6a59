use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct HotelChoice {
    pub hotel_id: ObjectId,
    pub room_type_id: ObjectId,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ActivityChoice {
    pub activity_id: ObjectId,
    pub option_id: ObjectId,
}

/// One day of an itinerary: catalog references only, no denormalized
/// pricing. Ids that no longer resolve are skipped at costing time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    /// 1-based, contiguous for a trip of N days.
    pub day: u32,
    #[serde(default)]
    pub sightseeing: Vec<ObjectId>,
    #[serde(default)]
    pub activities: Vec<ActivityChoice>,
    #[serde(default)]
    pub entry_tickets: Vec<ObjectId>,
    #[serde(default)]
    pub meals: Vec<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<HotelChoice>,
}

impl DayPlan {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            sightseeing: Vec::new(),
            activities: Vec::new(),
            entry_tickets: Vec::new(),
            meals: Vec::new(),
            hotel: None,
        }
    }
}
