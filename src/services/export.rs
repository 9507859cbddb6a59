use std::fmt::Write;

use crate::models::itinerary::FixedItinerary;

/// Renders an itinerary as the plain text agents paste into email or
/// WhatsApp. Pure formatting; nothing here re-derives cost.
pub fn format_itinerary_text(itinerary: &FixedItinerary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", itinerary.title);
    let _ = writeln!(
        out,
        "Client: {} | {} adult(s), {} child(ren) | {} day(s)",
        itinerary.client_name,
        itinerary.party.adults,
        itinerary.party.children,
        itinerary.number_of_days
    );
    let _ = writeln!(out, "Transportation: {}", itinerary.transportation_mode);
    let _ = writeln!(out);

    for day in &itinerary.day_plans {
        let _ = writeln!(out, "Day {}:", day.day);
        if let Some(hotel) = &day.hotel {
            let _ = writeln!(out, "  Stay: hotel {} (room {})", hotel.hotel_id, hotel.room_type_id);
        }
        if !day.sightseeing.is_empty() {
            let _ = writeln!(out, "  Sightseeing stops: {}", day.sightseeing.len());
        }
        if !day.activities.is_empty() {
            let _ = writeln!(out, "  Activities: {}", day.activities.len());
        }
        if !day.entry_tickets.is_empty() {
            let _ = writeln!(out, "  Entry tickets: {}", day.entry_tickets.len());
        }
        if !day.meals.is_empty() {
            let _ = writeln!(out, "  Meals: {}", day.meals.len());
        }
    }

    let _ = writeln!(out);
    if !itinerary.inclusions.is_empty() {
        let _ = writeln!(out, "Inclusions: {}", itinerary.inclusions);
    }
    if !itinerary.exclusions.is_empty() {
        let _ = writeln!(out, "Exclusions: {}", itinerary.exclusions);
    }
    let _ = writeln!(out, "Total base cost: {:.2}", itinerary.base_cost);

    out
}
