use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::FindOptions,
    Client,
};
use std::sync::Arc;

use crate::db::mongo::CATALOG_DB;
use crate::models::sightseeing::Sightseeing;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/catalog/sightseeings
*/
pub async fn get_sightseeings(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Sightseeing> =
        client.database(CATALOG_DB).collection("Sightseeings");

    let mut options = FindOptions::default();
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }
    // Agents search by spot name or place interchangeably.
    let filter = match &params.search {
        Some(search_text) if !search_text.is_empty() => {
            let pattern = format!("^{}", regex::escape(search_text));
            doc! {
                "$or": [
                    { "name": { "$regex": pattern.clone(), "$options": "i" } },
                    { "place": { "$regex": pattern, "$options": "i" } },
                ]
            }
        }
        _ => doc! {},
    };
    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Sightseeing>>().await {
            Ok(sightseeings) => HttpResponse::Ok().json(sightseeings),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect sightseeings.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find sightseeings.")
        }
    }
}

pub async fn add_sightseeing(
    data: web::Data<Arc<Client>>,
    input: web::Json<Sightseeing>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Sightseeing> =
        client.database(CATALOG_DB).collection("Sightseeings");

    let curr_time = Utc::now();
    let mut submission = input.into_inner();
    submission.id = None;
    submission.created_at = Some(curr_time);
    submission.updated_at = Some(curr_time);

    match collection.insert_one(&submission).await {
        Ok(result) => {
            submission.id = result.inserted_id.as_object_id();
            HttpResponse::Ok().json(submission)
        }
        Err(err) => {
            eprintln!("Failed to insert document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to add sightseeing.")
        }
    }
}

pub async fn update_sightseeing(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Sightseeing>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Sightseeing> =
        client.database(CATALOG_DB).collection("Sightseeings");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut sightseeing = input.into_inner();
    sightseeing.id = Some(id);
    sightseeing.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &sightseeing).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Sightseeing not found")
        }
        Ok(_) => HttpResponse::Ok().json(sightseeing),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update sightseeing.")
        }
    }
}

pub async fn delete_sightseeing(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Sightseeing> =
        client.database(CATALOG_DB).collection("Sightseeings");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Sightseeing deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete sightseeing.")
        }
    }
}
