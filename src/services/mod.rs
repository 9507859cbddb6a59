pub mod catalog;
pub mod costing;
pub mod export;
pub mod itinerary;
