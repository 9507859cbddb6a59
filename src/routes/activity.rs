use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use std::sync::Arc;

use crate::db::mongo::CATALOG_DB;
use crate::models::activity::Activity;

/*
    /api/catalog/activities
*/
pub async fn get_activities(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Activity> =
        client.database(CATALOG_DB).collection("Activities");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Activity>>().await {
            Ok(activities) => HttpResponse::Ok().json(activities),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect activities.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find activities.")
        }
    }
}

pub async fn add_activity(
    data: web::Data<Arc<Client>>,
    input: web::Json<Activity>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Activity> =
        client.database(CATALOG_DB).collection("Activities");

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
            HttpResponse::InternalServerError().body("Failed to add activity.")
        }
    }
}

pub async fn update_activity(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Activity>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Activity> =
        client.database(CATALOG_DB).collection("Activities");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut activity = input.into_inner();
    activity.id = Some(id);
    activity.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &activity).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Activity not found")
        }
        Ok(_) => HttpResponse::Ok().json(activity),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update activity.")
        }
    }
}

pub async fn delete_activity(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Activity> =
        client.database(CATALOG_DB).collection("Activities");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Activity deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete activity.")
        }
    }
}
