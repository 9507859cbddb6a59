use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::client::{Client, PartyComposition};
use crate::models::day_plan::DayPlan;
use crate::models::hotel::Season;

/// How children count toward per-person charges (activities, entry
/// tickets, meals). An operator choice, never hard-coded.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildPricing {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "half_rate")]
    HalfRate,
    #[default]
    #[serde(rename = "full_rate")]
    FullRate,
}

impl ChildPricing {
    pub fn rate_factor(self) -> f64 {
        match self {
            ChildPricing::Free => 0.0,
            ChildPricing::HalfRate => 0.5,
            ChildPricing::FullRate => 1.0,
        }
    }
}

/// Pricing decisions the costing engine consumes but never makes itself.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct CostPolicy {
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub child_pricing: ChildPricing,
}

impl CostPolicy {
    /// Head count per-person charges are billed against. Fractional for
    /// half-rate children: 2 adults + 1 child bills as 2.5 pax.
    pub fn billable_pax(&self, party: &PartyComposition) -> f64 {
        party.adults as f64 + party.children as f64 * self.child_pricing.rate_factor()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct CostBreakdown {
    pub transportation: f64,
    pub lodging: f64,
    pub sightseeing: f64,
    pub activities: f64,
    pub entry_tickets: f64,
    pub meals: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.transportation
            + self.lodging
            + self.sightseeing
            + self.activities
            + self.entry_tickets
            + self.meals
    }
}

/// Quote input: everything the costing engine needs, nothing persisted.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoteRequest {
    pub client: Client,
    pub day_plans: Vec<DayPlan>,
    #[serde(default)]
    pub policy: CostPolicy,
}

/// Create input: a quote plus the free-text terms that go on the record.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryDraft {
    pub title: String,
    pub client: Client,
    pub day_plans: Vec<DayPlan>,
    #[serde(default)]
    pub policy: CostPolicy,
    #[serde(default)]
    pub inclusions: String,
    #[serde(default)]
    pub exclusions: String,
}

/// The persisted record an agent shares with a client. Carries a snapshot
/// of the client and the computed cost so later catalog edits don't
/// silently reprice an agreed itinerary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixedItinerary {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ObjectId>,
    pub client_name: String,
    pub party: PartyComposition,
    pub number_of_days: u32,
    pub transportation_mode: String,
    pub day_plans: Vec<DayPlan>,
    pub inclusions: String,
    pub exclusions: String,
    pub policy: CostPolicy,
    pub cost_breakdown: CostBreakdown,
    pub base_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
