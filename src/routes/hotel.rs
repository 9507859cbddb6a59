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
use crate::models::hotel::Hotel;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

/*
    /api/catalog/hotels
*/
pub async fn get_hotels(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Hotel> = client.database(CATALOG_DB).collection("Hotels");

    let mut options = FindOptions::default();
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }
    let filter = match &params.search {
        Some(search_text) if !search_text.is_empty() => {
            doc! {
                "place": {
                    "$regex": format!("^{}", regex::escape(search_text)),
                    "$options": "i"
                }
            }
        }
        _ => doc! {},
    };
    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Hotel>>().await {
            Ok(hotels) => HttpResponse::Ok().json(hotels),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect hotels.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find hotels.")
        }
    }
}

pub async fn add_hotel(data: web::Data<Arc<Client>>, input: web::Json<Hotel>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Hotel> = client.database(CATALOG_DB).collection("Hotels");

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
            HttpResponse::InternalServerError().body("Failed to add hotel.")
        }
    }
}

pub async fn update_hotel(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Hotel>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Hotel> = client.database(CATALOG_DB).collection("Hotels");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut hotel = input.into_inner();
    hotel.id = Some(id);
    hotel.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &hotel).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Hotel not found")
        }
        Ok(_) => HttpResponse::Ok().json(hotel),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update hotel.")
        }
    }
}

pub async fn delete_hotel(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Hotel> = client.database(CATALOG_DB).collection("Hotels");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Hotel deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete hotel.")
        }
    }
}
