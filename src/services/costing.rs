use crate::models::client::Client;
use crate::models::day_plan::DayPlan;
use crate::models::hotel::Season;
use crate::models::itinerary::{CostBreakdown, CostPolicy};
use crate::models::transportation::{TransportCategory, Transportation};
use crate::services::catalog::CatalogSnapshot;

/// Deterministic base-cost engine for a day-by-day itinerary.
///
/// Pure over its arguments: no database access, no mutation, no clock.
/// It never fails either. Ids that don't resolve in the snapshot, option
/// references pointing at deleted options, vehicle classes a sightseeing
/// spot doesn't price - all of those contribute zero so a half-built plan
/// still quotes. Negative catalog prices are treated as zero.
pub struct CostingService;

impl CostingService {
    /// Total base cost across all days and categories.
    pub fn calculate_itinerary_cost(
        client: &Client,
        day_plans: &[DayPlan],
        catalog: &CatalogSnapshot,
        policy: CostPolicy,
    ) -> f64 {
        Self::calculate_cost_breakdown(client, day_plans, catalog, policy).total()
    }

    /// Per-category subtotals. The quote endpoint returns this directly
    /// and it is frozen into the FixedItinerary record on create.
    pub fn calculate_cost_breakdown(
        client: &Client,
        day_plans: &[DayPlan],
        catalog: &CatalogSnapshot,
        policy: CostPolicy,
    ) -> CostBreakdown {
        let billable_pax = policy.billable_pax(&client.party);
        // Resolved once; the mode string is matched case-sensitively
        // against the catalog's vehicle names.
        let transport = catalog.transportation_by_name(&client.transportation_mode);

        let mut breakdown = CostBreakdown::default();
        for day in day_plans {
            if let Some(t) = transport {
                breakdown.transportation += t.cost_per_day.max(0.0);
            }
            breakdown.sightseeing += Self::day_sightseeing_cost(day, transport, catalog);
            breakdown.lodging += Self::day_lodging_cost(day, catalog, policy.season);
            breakdown.activities += Self::day_activity_cost(day, catalog, billable_pax);
            breakdown.entry_tickets += Self::day_entry_ticket_cost(day, catalog, billable_pax);
            breakdown.meals += Self::day_meal_cost(day, catalog, billable_pax);
        }
        breakdown
    }

    /// Booking units needed for an activity option covering
    /// `cost_for_how_many` people. Whole units only: a 4-person package
    /// for 2 billable pax is still one full unit. A zero-capacity option
    /// is malformed data and charges nothing.
    pub fn activity_units(billable_pax: f64, cost_for_how_many: u32) -> f64 {
        if cost_for_how_many == 0 || billable_pax <= 0.0 {
            return 0.0;
        }
        (billable_pax / cost_for_how_many as f64).ceil()
    }

    /// Per-vehicle surcharge at sightseeing stops. Only cab-category
    /// transportation with a known vehicle class pays it; self-drive
    /// clients already cover their vehicle through the daily rate.
    fn day_sightseeing_cost(
        day: &DayPlan,
        transport: Option<&Transportation>,
        catalog: &CatalogSnapshot,
    ) -> f64 {
        let class = match transport {
            Some(t) if t.category == TransportCategory::Cab => t.vehicle_class,
            _ => None,
        };
        let Some(class) = class else {
            return 0.0;
        };

        day.sightseeing
            .iter()
            .filter_map(|id| catalog.sightseeing(id))
            .filter_map(|spot| spot.vehicle_costs.and_then(|costs| costs.for_class(class)))
            .map(|cost| cost.max(0.0))
            .sum()
    }

    /// One night of the referenced room type at the season's rate.
    fn day_lodging_cost(day: &DayPlan, catalog: &CatalogSnapshot, season: Season) -> f64 {
        let Some(choice) = &day.hotel else {
            return 0.0;
        };
        catalog
            .hotel(&choice.hotel_id)
            .and_then(|hotel| hotel.room_type(&choice.room_type_id))
            .map(|room| room.rates.nightly(season).max(0.0))
            .unwrap_or(0.0)
    }

    fn day_activity_cost(day: &DayPlan, catalog: &CatalogSnapshot, billable_pax: f64) -> f64 {
        day.activities
            .iter()
            .filter_map(|choice| {
                catalog
                    .activity(&choice.activity_id)
                    .and_then(|activity| activity.option(&choice.option_id))
            })
            .map(|option| {
                option.cost.max(0.0) * Self::activity_units(billable_pax, option.cost_for_how_many)
            })
            .sum()
    }

    fn day_entry_ticket_cost(day: &DayPlan, catalog: &CatalogSnapshot, billable_pax: f64) -> f64 {
        day.entry_tickets
            .iter()
            .filter_map(|id| catalog.entry_ticket(id))
            .map(|ticket| ticket.cost.max(0.0) * billable_pax)
            .sum()
    }

    fn day_meal_cost(day: &DayPlan, catalog: &CatalogSnapshot, billable_pax: f64) -> f64 {
        day.meals
            .iter()
            .filter_map(|id| catalog.meal(id))
            .map(|meal| meal.cost.max(0.0) * billable_pax)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::{Activity, ActivityOption};
    use crate::models::client::{PartyComposition, TravelDates};
    use crate::models::day_plan::{ActivityChoice, HotelChoice};
    use crate::models::entry_ticket::EntryTicket;
    use crate::models::hotel::{Hotel, RoomType, SeasonalRates};
    use crate::models::itinerary::ChildPricing;
    use crate::models::meal::Meal;
    use crate::models::sightseeing::{Sightseeing, VehicleCosts};
    use crate::models::transportation::VehicleClass;
    use mongodb::bson::oid::ObjectId;

    fn test_client(adults: u32, children: u32, mode: &str) -> Client {
        Client {
            id: Some(ObjectId::new()),
            name: "Test Client".to_string(),
            email: None,
            phone: None,
            travel_dates: TravelDates::FlexibleMonth {
                month: "June".to_string(),
            },
            party: PartyComposition { adults, children },
            number_of_days: 1,
            transportation_mode: mode.to_string(),
            status: Default::default(),
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn transportation(
        name: &str,
        cost_per_day: f64,
        category: TransportCategory,
        class: Option<VehicleClass>,
    ) -> Transportation {
        Transportation {
            id: Some(ObjectId::new()),
            category,
            vehicle_name: name.to_string(),
            cost_per_day,
            vehicle_class: class,
            created_at: None,
            updated_at: None,
        }
    }

    fn meal(id: ObjectId, cost: f64) -> Meal {
        Meal {
            id: Some(id),
            name: "Dinner".to_string(),
            meal_type: "dinner".to_string(),
            cost,
            created_at: None,
            updated_at: None,
        }
    }

    fn empty_catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![], vec![], vec![], vec![], vec![], vec![])
    }

    #[test]
    fn empty_day_plans_cost_zero() {
        let client = test_client(2, 0, "cab");
        let catalog = empty_catalog();

        let total =
            CostingService::calculate_itinerary_cost(&client, &[], &catalog, CostPolicy::default());
        assert_eq!(total, 0.0);
    }

    #[test]
    fn transportation_billed_once_per_day() {
        let client = test_client(2, 0, "cab");
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![transportation("cab", 500.0, TransportCategory::Cab, None)],
        );

        let one_day = vec![DayPlan::empty(1)];
        let three_days = vec![DayPlan::empty(1), DayPlan::empty(2), DayPlan::empty(3)];

        assert_eq!(
            CostingService::calculate_itinerary_cost(
                &client,
                &one_day,
                &catalog,
                CostPolicy::default()
            ),
            500.0
        );
        assert_eq!(
            CostingService::calculate_itinerary_cost(
                &client,
                &three_days,
                &catalog,
                CostPolicy::default()
            ),
            1500.0
        );
    }

    #[test]
    fn unknown_transportation_mode_costs_zero() {
        let client = test_client(2, 0, "Cab"); // catalog has "cab", match is case-sensitive
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![transportation("cab", 500.0, TransportCategory::Cab, None)],
        );

        let total = CostingService::calculate_itinerary_cost(
            &client,
            &[DayPlan::empty(1)],
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(total, 0.0);
    }

    #[test]
    fn hotel_rate_follows_season_policy() {
        let hotel_id = ObjectId::new();
        let room_id = ObjectId::new();
        let hotel = Hotel {
            id: Some(hotel_id),
            name: "Sea View".to_string(),
            place: "Port Blair".to_string(),
            room_types: vec![RoomType {
                id: room_id,
                name: "Deluxe".to_string(),
                rates: SeasonalRates {
                    peak: 4000.0,
                    regular: 3000.0,
                    off: 2000.0,
                },
            }],
            created_at: None,
            updated_at: None,
        };
        let catalog = CatalogSnapshot::new(vec![hotel], vec![], vec![], vec![], vec![], vec![]);
        let client = test_client(2, 0, "none");
        let mut day = DayPlan::empty(1);
        day.hotel = Some(HotelChoice {
            hotel_id,
            room_type_id: room_id,
        });
        let days = vec![day];

        for (season, expected) in [
            (Season::Peak, 4000.0),
            (Season::Regular, 3000.0),
            (Season::Off, 2000.0),
        ] {
            let policy = CostPolicy {
                season,
                ..Default::default()
            };
            assert_eq!(
                CostingService::calculate_itinerary_cost(&client, &days, &catalog, policy),
                expected
            );
        }
    }

    #[test]
    fn unknown_room_type_costs_zero() {
        let hotel_id = ObjectId::new();
        let hotel = Hotel {
            id: Some(hotel_id),
            name: "Sea View".to_string(),
            place: "Port Blair".to_string(),
            room_types: vec![],
            created_at: None,
            updated_at: None,
        };
        let catalog = CatalogSnapshot::new(vec![hotel], vec![], vec![], vec![], vec![], vec![]);
        let client = test_client(2, 0, "none");
        let mut day = DayPlan::empty(1);
        day.hotel = Some(HotelChoice {
            hotel_id,
            room_type_id: ObjectId::new(),
        });

        let total = CostingService::calculate_itinerary_cost(
            &client,
            &[day],
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(total, 0.0);
    }

    #[test]
    fn activity_options_bill_whole_units() {
        // cost 300 covering 4 people: party of 2 -> 1 unit, party of 5 -> 2 units
        assert_eq!(CostingService::activity_units(2.0, 4), 1.0);
        assert_eq!(CostingService::activity_units(4.0, 4), 1.0);
        assert_eq!(CostingService::activity_units(5.0, 4), 2.0);
        assert_eq!(CostingService::activity_units(2.5, 2), 2.0);
        assert_eq!(CostingService::activity_units(0.0, 4), 0.0);
        // malformed capacity charges nothing rather than dividing by zero
        assert_eq!(CostingService::activity_units(3.0, 0), 0.0);
    }

    #[test]
    fn activity_cost_scales_by_units() {
        let activity_id = ObjectId::new();
        let option_id = ObjectId::new();
        let activity = Activity {
            id: Some(activity_id),
            name: "Scuba".to_string(),
            place: "Havelock".to_string(),
            options: vec![ActivityOption {
                id: option_id,
                name: "Boat dive".to_string(),
                cost: 300.0,
                cost_for_how_many: 4,
            }],
            created_at: None,
            updated_at: None,
        };
        let catalog = CatalogSnapshot::new(vec![], vec![], vec![activity], vec![], vec![], vec![]);
        let mut day = DayPlan::empty(1);
        day.activities.push(ActivityChoice {
            activity_id,
            option_id,
        });
        let days = vec![day];

        let small_party = test_client(2, 0, "none");
        assert_eq!(
            CostingService::calculate_itinerary_cost(
                &small_party,
                &days,
                &catalog,
                CostPolicy::default()
            ),
            300.0
        );

        let large_party = test_client(5, 0, "none");
        assert_eq!(
            CostingService::calculate_itinerary_cost(
                &large_party,
                &days,
                &catalog,
                CostPolicy::default()
            ),
            600.0
        );
    }

    #[test]
    fn child_pricing_applies_to_per_person_charges() {
        let ticket_id = ObjectId::new();
        let ticket = EntryTicket {
            id: Some(ticket_id),
            name: "Cellular Jail".to_string(),
            sightseeing_id: None,
            cost: 50.0,
            created_at: None,
            updated_at: None,
        };
        let catalog = CatalogSnapshot::new(vec![], vec![], vec![], vec![ticket], vec![], vec![]);
        let client = test_client(2, 1, "none");
        let mut day = DayPlan::empty(1);
        day.entry_tickets.push(ticket_id);
        let days = vec![day];

        for (child_pricing, expected) in [
            (ChildPricing::FullRate, 150.0),
            (ChildPricing::HalfRate, 125.0),
            (ChildPricing::Free, 100.0),
        ] {
            let policy = CostPolicy {
                child_pricing,
                ..Default::default()
            };
            assert_eq!(
                CostingService::calculate_itinerary_cost(&client, &days, &catalog, policy),
                expected
            );
        }
    }

    #[test]
    fn meals_bill_per_billable_pax_per_instance() {
        let meal_id = ObjectId::new();
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![meal(meal_id, 20.0)],
            vec![],
        );
        let client = test_client(3, 0, "none");
        let mut day = DayPlan::empty(1);
        day.meals.push(meal_id);
        day.meals.push(meal_id); // same meal twice that day

        let total = CostingService::calculate_itinerary_cost(
            &client,
            &[day],
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(total, 120.0);
    }

    #[test]
    fn sightseeing_surcharge_only_for_cab_vehicle_class() {
        let spot_id = ObjectId::new();
        let spot = Sightseeing {
            id: Some(spot_id),
            name: "Radhanagar Beach".to_string(),
            place: "Havelock".to_string(),
            vehicle_costs: Some(VehicleCosts {
                hiace: Some(250.0),
                ..Default::default()
            }),
            created_at: None,
            updated_at: None,
        };
        let transports = vec![
            transportation(
                "Hiace",
                900.0,
                TransportCategory::Cab,
                Some(VehicleClass::Hiace),
            ),
            transportation("Scooter", 100.0, TransportCategory::SelfDrive, None),
        ];
        let catalog =
            CatalogSnapshot::new(vec![], vec![spot], vec![], vec![], vec![], transports);
        let mut day = DayPlan::empty(1);
        day.sightseeing.push(spot_id);
        let days = vec![day];

        let cab_client = test_client(2, 0, "Hiace");
        let breakdown = CostingService::calculate_cost_breakdown(
            &cab_client,
            &days,
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(breakdown.transportation, 900.0);
        assert_eq!(breakdown.sightseeing, 250.0);

        let self_drive_client = test_client(2, 0, "Scooter");
        let breakdown = CostingService::calculate_cost_breakdown(
            &self_drive_client,
            &days,
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(breakdown.transportation, 100.0);
        assert_eq!(breakdown.sightseeing, 0.0);
    }

    #[test]
    fn unpriced_vehicle_class_costs_zero() {
        let spot_id = ObjectId::new();
        let spot = Sightseeing {
            id: Some(spot_id),
            name: "Ross Island".to_string(),
            place: "Port Blair".to_string(),
            // table present but bus39 not priced
            vehicle_costs: Some(VehicleCosts {
                avanza: Some(120.0),
                ..Default::default()
            }),
            created_at: None,
            updated_at: None,
        };
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![spot],
            vec![],
            vec![],
            vec![],
            vec![transportation(
                "Big Bus",
                2000.0,
                TransportCategory::Cab,
                Some(VehicleClass::Bus39),
            )],
        );
        let client = test_client(30, 0, "Big Bus");
        let mut day = DayPlan::empty(1);
        day.sightseeing.push(spot_id);

        let breakdown = CostingService::calculate_cost_breakdown(
            &client,
            &[day],
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(breakdown.sightseeing, 0.0);
    }

    #[test]
    fn unresolved_ids_match_omitting_them() {
        let meal_id = ObjectId::new();
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![meal(meal_id, 20.0)],
            vec![],
        );
        let client = test_client(2, 0, "none");

        let mut with_ghosts = DayPlan::empty(1);
        with_ghosts.meals.push(meal_id);
        with_ghosts.meals.push(ObjectId::new());
        with_ghosts.sightseeing.push(ObjectId::new());
        with_ghosts.entry_tickets.push(ObjectId::new());
        with_ghosts.activities.push(ActivityChoice {
            activity_id: ObjectId::new(),
            option_id: ObjectId::new(),
        });
        with_ghosts.hotel = Some(HotelChoice {
            hotel_id: ObjectId::new(),
            room_type_id: ObjectId::new(),
        });

        let mut without = DayPlan::empty(1);
        without.meals.push(meal_id);

        let policy = CostPolicy::default();
        assert_eq!(
            CostingService::calculate_itinerary_cost(&client, &[with_ghosts], &catalog, policy),
            CostingService::calculate_itinerary_cost(&client, &[without], &catalog, policy),
        );
    }

    #[test]
    fn adding_an_item_never_decreases_the_total() {
        let meal_id = ObjectId::new();
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![meal(meal_id, 20.0)],
            vec![transportation("cab", 500.0, TransportCategory::Cab, None)],
        );
        let client = test_client(2, 1, "cab");

        let mut day = DayPlan::empty(1);
        day.meals.push(meal_id);
        let base = CostingService::calculate_itinerary_cost(
            &client,
            std::slice::from_ref(&day),
            &catalog,
            CostPolicy::default(),
        );

        day.meals.push(meal_id);
        let extended = CostingService::calculate_itinerary_cost(
            &client,
            &[day],
            &catalog,
            CostPolicy::default(),
        );
        assert!(extended >= base);
    }

    #[test]
    fn identical_inputs_give_identical_totals() {
        let meal_id = ObjectId::new();
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![meal(meal_id, 17.35)],
            vec![transportation("cab", 499.99, TransportCategory::Cab, None)],
        );
        let client = test_client(3, 2, "cab");
        let mut day = DayPlan::empty(1);
        day.meals.push(meal_id);
        let days = vec![day];

        let first = CostingService::calculate_itinerary_cost(
            &client,
            &days,
            &catalog,
            CostPolicy::default(),
        );
        let second = CostingService::calculate_itinerary_cost(
            &client,
            &days,
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(first, second);
        assert!(first.is_finite());
        assert!(first >= 0.0);
    }

    #[test]
    fn negative_catalog_prices_are_treated_as_zero() {
        let meal_id = ObjectId::new();
        let catalog = CatalogSnapshot::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![meal(meal_id, -10.0)],
            vec![],
        );
        let client = test_client(2, 0, "none");
        let mut day = DayPlan::empty(1);
        day.meals.push(meal_id);

        let total = CostingService::calculate_itinerary_cost(
            &client,
            &[day],
            &catalog,
            CostPolicy::default(),
        );
        assert_eq!(total, 0.0);
    }
}
