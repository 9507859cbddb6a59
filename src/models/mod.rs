pub mod activity;
pub mod client;
pub mod day_plan;
pub mod entry_ticket;
pub mod hotel;
pub mod itinerary;
pub mod meal;
pub mod sightseeing;
pub mod transportation;
