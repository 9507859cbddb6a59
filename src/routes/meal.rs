use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use std::sync::Arc;

use crate::db::mongo::CATALOG_DB;
use crate::models::meal::Meal;

/*
    /api/catalog/meals
*/
pub async fn get_meals(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Meal> = client.database(CATALOG_DB).collection("Meals");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Meal>>().await {
            Ok(meals) => HttpResponse::Ok().json(meals),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect meals.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find meals.")
        }
    }
}

pub async fn add_meal(data: web::Data<Arc<Client>>, input: web::Json<Meal>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Meal> = client.database(CATALOG_DB).collection("Meals");

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
            HttpResponse::InternalServerError().body("Failed to add meal.")
        }
    }
}

pub async fn update_meal(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Meal>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Meal> = client.database(CATALOG_DB).collection("Meals");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut meal = input.into_inner();
    meal.id = Some(id);
    meal.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &meal).await {
        Ok(result) if result.matched_count == 0 => HttpResponse::NotFound().body("Meal not found"),
        Ok(_) => HttpResponse::Ok().json(meal),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update meal.")
        }
    }
}

pub async fn delete_meal(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Meal> = client.database(CATALOG_DB).collection("Meals");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Meal deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete meal.")
        }
    }
}
