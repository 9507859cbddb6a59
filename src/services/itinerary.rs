use chrono::Utc;

use crate::models::itinerary::{CostBreakdown, FixedItinerary, ItineraryDraft};

/// Packages a draft and its computed cost into the persistable record.
/// Field copying only; the cost was already derived by the costing
/// service and is frozen here as-quoted.
pub fn assemble_fixed_itinerary(draft: ItineraryDraft, breakdown: CostBreakdown) -> FixedItinerary {
    let now = Utc::now();

    FixedItinerary {
        id: None,
        title: draft.title,
        client_id: draft.client.id,
        client_name: draft.client.name,
        party: draft.client.party,
        number_of_days: draft.client.number_of_days,
        transportation_mode: draft.client.transportation_mode,
        day_plans: draft.day_plans,
        inclusions: draft.inclusions,
        exclusions: draft.exclusions,
        policy: draft.policy,
        cost_breakdown: breakdown,
        base_cost: breakdown.total(),
        created_at: Some(now),
        updated_at: Some(now),
    }
}
