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
use crate::models::transportation::Transportation;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/catalog/transportations
*/
pub async fn get_transportations(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Transportation> =
        client.database(CATALOG_DB).collection("Transportations");

    let mut options = FindOptions::default();
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }
    let filter = match &params.search {
        Some(search_text) if !search_text.is_empty() => {
            doc! {
                "vehicle_name": {
                    "$regex": format!("^{}", regex::escape(search_text)),
                    "$options": "i"
                }
            }
        }
        _ => doc! {},
    };
    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Transportation>>().await {
            Ok(transportations) => HttpResponse::Ok().json(transportations),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect transportations.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find transportations.")
        }
    }
}

pub async fn add_transportation(
    data: web::Data<Arc<Client>>,
    input: web::Json<Transportation>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Transportation> =
        client.database(CATALOG_DB).collection("Transportations");

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
            HttpResponse::InternalServerError().body("Failed to add transportation.")
        }
    }
}

pub async fn update_transportation(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Transportation>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Transportation> =
        client.database(CATALOG_DB).collection("Transportations");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut transportation = input.into_inner();
    transportation.id = Some(id);
    transportation.updated_at = Some(Utc::now());

    match collection
        .replace_one(doc! { "_id": id }, &transportation)
        .await
    {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Transportation not found")
        }
        Ok(_) => HttpResponse::Ok().json(transportation),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update transportation.")
        }
    }
}

pub async fn delete_transportation(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Transportation> =
        client.database(CATALOG_DB).collection("Transportations");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Transportation deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete transportation.")
        }
    }
}
