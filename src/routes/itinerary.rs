use actix_web::{web, HttpResponse, Responder};
use bson::{doc, oid::ObjectId};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo::ITINERARIES_DB;
use crate::models::itinerary::{FixedItinerary, ItineraryDraft, QuoteRequest};
use crate::services::catalog::CatalogSnapshot;
use crate::services::costing::CostingService;
use crate::services::export::format_itinerary_text;
use crate::services::itinerary::assemble_fixed_itinerary;

/*
    /api/itineraries/quote

    Runs the costing engine against the current catalog. Persists nothing;
    the wizard calls this on every review step.
*/
pub async fn quote(data: web::Data<Arc<Client>>, input: web::Json<QuoteRequest>) -> impl Responder {
    let client = data.into_inner();
    let catalog = match CatalogSnapshot::load(&client).await {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Failed to load catalog: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to load catalog.");
        }
    };

    let request = input.into_inner();
    let breakdown = CostingService::calculate_cost_breakdown(
        &request.client,
        &request.day_plans,
        &catalog,
        request.policy,
    );

    HttpResponse::Ok().json(serde_json::json!({
        "breakdown": breakdown,
        "base_cost": breakdown.total(),
        "policy": request.policy,
    }))
}

/*
    /api/itineraries (POST) - quote, assemble and persist in one step
*/
pub async fn create(
    data: web::Data<Arc<Client>>,
    input: web::Json<ItineraryDraft>,
) -> impl Responder {
    let client = data.into_inner();
    let draft = input.into_inner();

    if draft.title.trim().is_empty() {
        return HttpResponse::BadRequest().body("Title is required");
    }

    let catalog = match CatalogSnapshot::load(&client).await {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Failed to load catalog: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to load catalog.");
        }
    };

    let breakdown = CostingService::calculate_cost_breakdown(
        &draft.client,
        &draft.day_plans,
        &catalog,
        draft.policy,
    );
    let mut itinerary = assemble_fixed_itinerary(draft, breakdown);

    let collection: mongodb::Collection<FixedItinerary> =
        client.database(ITINERARIES_DB).collection("Fixed");

    match collection.insert_one(&itinerary).await {
        Ok(result) => {
            itinerary.id = result.inserted_id.as_object_id();
            HttpResponse::Ok().json(itinerary)
        }
        Err(err) => {
            eprintln!("Failed to insert document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save itinerary.")
        }
    }
}

/*
    /api/itineraries (GET)
*/
pub async fn get_all(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<FixedItinerary> =
        client.database(ITINERARIES_DB).collection("Fixed");

    let sort_options = doc! { "created_at": -1 };
    match collection.find(doc! {}).sort(sort_options).limit(100).await {
        Ok(cursor) => match cursor.try_collect::<Vec<FixedItinerary>>().await {
            Ok(itineraries) => HttpResponse::Ok().json(itineraries),
            Err(err) => {
                eprintln!("Failed to collect itineraries: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to process itineraries")
            }
        },
        Err(err) => {
            eprintln!("Failed to retrieve itineraries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve itineraries")
        }
    }
}

/*
    /api/itineraries/{id}
*/
pub async fn get_by_id(path: web::Path<String>, data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<FixedItinerary> =
        client.database(ITINERARIES_DB).collection("Fixed");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(doc)) => HttpResponse::Ok().json(doc),
        Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            eprintln!("Failed to retrieve itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve itinerary")
        }
    }
}

/*
    /api/itineraries/{id} (PUT) - last write wins, no version check
*/
pub async fn update(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<FixedItinerary>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<FixedItinerary> =
        client.database(ITINERARIES_DB).collection("Fixed");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut itinerary = input.into_inner();
    itinerary.id = Some(id);
    itinerary.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &itinerary).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Itinerary not found")
        }
        Ok(_) => HttpResponse::Ok().json(itinerary),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update itinerary.")
        }
    }
}

/*
    /api/itineraries/{id} (DELETE) - idempotent, deleting a missing
    record is still a success
*/
pub async fn delete(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<FixedItinerary> =
        client.database(ITINERARIES_DB).collection("Fixed");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Itinerary deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete itinerary.")
        }
    }
}

/*
    /api/itineraries/{id}/export - clipboard-ready plain text
*/
pub async fn export(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<FixedItinerary> =
        client.database(ITINERARIES_DB).collection("Fixed");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(itinerary)) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(format_itinerary_text(&itinerary)),
        Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            eprintln!("Failed to retrieve itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve itinerary")
        }
    }
}
