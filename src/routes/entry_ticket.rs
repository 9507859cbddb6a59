use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use std::sync::Arc;

use crate::db::mongo::CATALOG_DB;
use crate::models::entry_ticket::EntryTicket;

/*
    /api/catalog/entry-tickets
*/
pub async fn get_entry_tickets(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<EntryTicket> =
        client.database(CATALOG_DB).collection("EntryTickets");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<EntryTicket>>().await {
            Ok(tickets) => HttpResponse::Ok().json(tickets),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect entry tickets.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find entry tickets.")
        }
    }
}

pub async fn add_entry_ticket(
    data: web::Data<Arc<Client>>,
    input: web::Json<EntryTicket>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<EntryTicket> =
        client.database(CATALOG_DB).collection("EntryTickets");

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
            HttpResponse::InternalServerError().body("Failed to add entry ticket.")
        }
    }
}

pub async fn update_entry_ticket(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<EntryTicket>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<EntryTicket> =
        client.database(CATALOG_DB).collection("EntryTickets");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut ticket = input.into_inner();
    ticket.id = Some(id);
    ticket.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &ticket).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Entry ticket not found")
        }
        Ok(_) => HttpResponse::Ok().json(ticket),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update entry ticket.")
        }
    }
}

pub async fn delete_entry_ticket(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<EntryTicket> =
        client.database(CATALOG_DB).collection("EntryTickets");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(_) => HttpResponse::Ok().body("Entry ticket deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete entry ticket.")
        }
    }
}
