use std::collections::HashMap;

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::{bson::doc, Client};

use crate::db::mongo::CATALOG_DB;
use crate::models::activity::Activity;
use crate::models::entry_ticket::EntryTicket;
use crate::models::hotel::Hotel;
use crate::models::meal::Meal;
use crate::models::sightseeing::Sightseeing;
use crate::models::transportation::Transportation;

/// Immutable, id-indexed view of the six catalog collections. The costing
/// engine only ever reads one of these; it never touches the database or
/// any ambient state. Records missing an id are dropped at indexing time
/// since day plans can't reference them anyway.
#[derive(Debug, Default, Clone)]
pub struct CatalogSnapshot {
    hotels: HashMap<ObjectId, Hotel>,
    sightseeings: HashMap<ObjectId, Sightseeing>,
    activities: HashMap<ObjectId, Activity>,
    entry_tickets: HashMap<ObjectId, EntryTicket>,
    meals: HashMap<ObjectId, Meal>,
    // Keyed by vehicle_name; the client's transportation_mode is a name.
    transportations: HashMap<String, Transportation>,
}

impl CatalogSnapshot {
    pub fn new(
        hotels: Vec<Hotel>,
        sightseeings: Vec<Sightseeing>,
        activities: Vec<Activity>,
        entry_tickets: Vec<EntryTicket>,
        meals: Vec<Meal>,
        transportations: Vec<Transportation>,
    ) -> Self {
        Self {
            hotels: hotels.into_iter().filter_map(|h| h.id.map(|id| (id, h))).collect(),
            sightseeings: sightseeings
                .into_iter()
                .filter_map(|s| s.id.map(|id| (id, s)))
                .collect(),
            activities: activities
                .into_iter()
                .filter_map(|a| a.id.map(|id| (id, a)))
                .collect(),
            entry_tickets: entry_tickets
                .into_iter()
                .filter_map(|t| t.id.map(|id| (id, t)))
                .collect(),
            meals: meals.into_iter().filter_map(|m| m.id.map(|id| (id, m))).collect(),
            transportations: transportations
                .into_iter()
                .map(|t| (t.vehicle_name.clone(), t))
                .collect(),
        }
    }

    /// Fetch all six collections in one go. Called once per quote; the
    /// resulting snapshot is then handed to the engine by value.
    pub async fn load(client: &Client) -> mongodb::error::Result<Self> {
        let db = client.database(CATALOG_DB);

        let hotels: Vec<Hotel> = db
            .collection::<Hotel>("Hotels")
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        let sightseeings: Vec<Sightseeing> = db
            .collection::<Sightseeing>("Sightseeings")
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        let activities: Vec<Activity> = db
            .collection::<Activity>("Activities")
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        let entry_tickets: Vec<EntryTicket> = db
            .collection::<EntryTicket>("EntryTickets")
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        let meals: Vec<Meal> = db
            .collection::<Meal>("Meals")
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        let transportations: Vec<Transportation> = db
            .collection::<Transportation>("Transportations")
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(Self::new(
            hotels,
            sightseeings,
            activities,
            entry_tickets,
            meals,
            transportations,
        ))
    }

    pub fn hotel(&self, id: &ObjectId) -> Option<&Hotel> {
        self.hotels.get(id)
    }

    pub fn sightseeing(&self, id: &ObjectId) -> Option<&Sightseeing> {
        self.sightseeings.get(id)
    }

    pub fn activity(&self, id: &ObjectId) -> Option<&Activity> {
        self.activities.get(id)
    }

    pub fn entry_ticket(&self, id: &ObjectId) -> Option<&EntryTicket> {
        self.entry_tickets.get(id)
    }

    pub fn meal(&self, id: &ObjectId) -> Option<&Meal> {
        self.meals.get(id)
    }

    pub fn transportation_by_name(&self, vehicle_name: &str) -> Option<&Transportation> {
        self.transportations.get(vehicle_name)
    }
}
