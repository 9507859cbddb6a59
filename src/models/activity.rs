use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One bookable variant of an activity. `cost` buys a unit covering
/// `cost_for_how_many` people; parties book whole units.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivityOption {
    pub id: ObjectId,
    pub name: String,
    pub cost: f64,
    pub cost_for_how_many: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub place: String,
    pub options: Vec<ActivityOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn option(&self, option_id: &ObjectId) -> Option<&ActivityOption> {
        self.options.iter().find(|opt| opt.id == *option_id)
    }
}
