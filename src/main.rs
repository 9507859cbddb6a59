use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripdesk_api::{db, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    println!("Got MongoDB URI, attempting connection...");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(client.clone()))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/catalog")
                            .route("/hotels", web::get().to(routes::hotel::get_hotels))
                            .route("/hotels", web::post().to(routes::hotel::add_hotel))
                            .route("/hotels/{id}", web::put().to(routes::hotel::update_hotel))
                            .route("/hotels/{id}", web::delete().to(routes::hotel::delete_hotel))
                            .route(
                                "/sightseeings",
                                web::get().to(routes::sightseeing::get_sightseeings),
                            )
                            .route(
                                "/sightseeings",
                                web::post().to(routes::sightseeing::add_sightseeing),
                            )
                            .route(
                                "/sightseeings/{id}",
                                web::put().to(routes::sightseeing::update_sightseeing),
                            )
                            .route(
                                "/sightseeings/{id}",
                                web::delete().to(routes::sightseeing::delete_sightseeing),
                            )
                            .route(
                                "/activities",
                                web::get().to(routes::activity::get_activities),
                            )
                            .route(
                                "/activities",
                                web::post().to(routes::activity::add_activity),
                            )
                            .route(
                                "/activities/{id}",
                                web::put().to(routes::activity::update_activity),
                            )
                            .route(
                                "/activities/{id}",
                                web::delete().to(routes::activity::delete_activity),
                            )
                            .route(
                                "/entry-tickets",
                                web::get().to(routes::entry_ticket::get_entry_tickets),
                            )
                            .route(
                                "/entry-tickets",
                                web::post().to(routes::entry_ticket::add_entry_ticket),
                            )
                            .route(
                                "/entry-tickets/{id}",
                                web::put().to(routes::entry_ticket::update_entry_ticket),
                            )
                            .route(
                                "/entry-tickets/{id}",
                                web::delete().to(routes::entry_ticket::delete_entry_ticket),
                            )
                            .route("/meals", web::get().to(routes::meal::get_meals))
                            .route("/meals", web::post().to(routes::meal::add_meal))
                            .route("/meals/{id}", web::put().to(routes::meal::update_meal))
                            .route("/meals/{id}", web::delete().to(routes::meal::delete_meal))
                            .route(
                                "/transportations",
                                web::get().to(routes::transportation::get_transportations),
                            )
                            .route(
                                "/transportations",
                                web::post().to(routes::transportation::add_transportation),
                            )
                            .route(
                                "/transportations/{id}",
                                web::put().to(routes::transportation::update_transportation),
                            )
                            .route(
                                "/transportations/{id}",
                                web::delete().to(routes::transportation::delete_transportation),
                            ),
                    )
                    .service(
                        web::scope("/clients")
                            .route("", web::get().to(routes::client::get_clients))
                            .route("", web::post().to(routes::client::add_client))
                            .route("/{id}", web::get().to(routes::client::get_client_by_id))
                            .route(
                                "/{id}/follow-up",
                                web::put().to(routes::client::update_follow_up),
                            ),
                    )
                    .service(
                        web::scope("/itineraries")
                            .route("/quote", web::post().to(routes::itinerary::quote))
                            .route("", web::get().to(routes::itinerary::get_all))
                            .route("", web::post().to(routes::itinerary::create))
                            .route("/{id}", web::get().to(routes::itinerary::get_by_id))
                            .route("/{id}", web::put().to(routes::itinerary::update))
                            .route("/{id}", web::delete().to(routes::itinerary::delete))
                            .route("/{id}/export", web::get().to(routes::itinerary::export)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
