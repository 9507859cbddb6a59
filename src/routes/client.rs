use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient,
};
use std::sync::Arc;

use crate::db::mongo::AGENCY_DB;
use crate::models::client::{Client, FollowUpStatus};

/// Boundary validation per the intake form rules. The costing engine
/// itself never validates; a bad record just quotes low.
fn validate_client(client: &Client) -> Result<(), &'static str> {
    if client.name.trim().is_empty() {
        return Err("Client name is required");
    }
    if client.party.adults == 0 {
        return Err("Party must include at least one adult");
    }
    if client.number_of_days == 0 {
        return Err("Trip must be at least one day");
    }
    Ok(())
}

/*
    /api/clients
*/
pub async fn get_clients(data: web::Data<Arc<MongoClient>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Client> = client.database(AGENCY_DB).collection("Clients");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Client>>().await {
            Ok(clients) => HttpResponse::Ok().json(clients),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect clients.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find clients.")
        }
    }
}

pub async fn get_client_by_id(
    data: web::Data<Arc<MongoClient>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Client> = client.database(AGENCY_DB).collection("Clients");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(doc)) => HttpResponse::Ok().json(doc),
        Ok(None) => HttpResponse::NotFound().body("Client not found"),
        Err(err) => {
            eprintln!("Failed to retrieve client: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve client")
        }
    }
}

pub async fn add_client(
    data: web::Data<Arc<MongoClient>>,
    input: web::Json<Client>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Client> = client.database(AGENCY_DB).collection("Clients");

    let mut submission = input.into_inner();
    if let Err(msg) = validate_client(&submission) {
        return HttpResponse::BadRequest().body(msg);
    }

    let curr_time = Utc::now();
    submission.id = None;
    submission.status = FollowUpStatus::New;
    submission.created_at = Some(curr_time);
    submission.updated_at = Some(curr_time);

    match collection.insert_one(&submission).await {
        Ok(result) => {
            submission.id = result.inserted_id.as_object_id();
            HttpResponse::Ok().json(submission)
        }
        Err(err) => {
            eprintln!("Failed to insert document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to add client.")
        }
    }
}

#[derive(serde::Deserialize)]
pub struct FollowUpUpdate {
    pub status: FollowUpStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Clients are frozen once an itinerary is built from them; only the
/// sales-tracking fields stay mutable.
pub async fn update_follow_up(
    data: web::Data<Arc<MongoClient>>,
    path: web::Path<String>,
    input: web::Json<FollowUpUpdate>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Client> = client.database(AGENCY_DB).collection("Clients");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let update = input.into_inner();
    let status = match mongodb::bson::to_bson(&update.status) {
        Ok(bson) => bson,
        Err(err) => {
            eprintln!("Failed to serialize status: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to update client.");
        }
    };

    let mut set = doc! {
        "status": status,
        "updated_at": Utc::now().to_rfc3339(),
    };
    if let Some(notes) = update.notes {
        set.insert("notes", notes);
    }

    match collection
        .update_one(doc! { "_id": id }, doc! { "$set": set })
        .await
    {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Client not found")
        }
        Ok(_) => HttpResponse::Ok().body("Follow-up updated"),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update client.")
        }
    }
}
