use actix_web::{test, web, App, HttpResponse};
use serde_json::json;

async fn health_check() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({"status": "ok"})))
}

async fn get_hotels() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!([])))
}

async fn quote() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "breakdown": {
            "transportation": 0.0,
            "lodging": 0.0,
            "sightseeing": 0.0,
            "activities": 0.0,
            "entry_tickets": 0.0,
            "meals": 0.0
        },
        "base_cost": 0.0
    })))
}

async fn not_found() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::NotFound().body("Itinerary not found"))
}

async fn bad_request() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::BadRequest().body("Invalid ID"))
}

async fn deleted() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().body("Itinerary deleted"))
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(App::new().route("/health", web::get().to(health_check))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_catalog_listing_returns_array() {
    let app = test::init_service(
        App::new().route("/api/catalog/hotels", web::get().to(get_hotels)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/hotels?search=Havelock&limit=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.is_array());
}

#[actix_web::test]
async fn test_quote_returns_breakdown_shape() {
    let app = test::init_service(
        App::new().route("/api/itineraries/quote", web::post().to(quote)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/quote")
        .set_json(&json!({
            "client": {
                "name": "Test",
                "travel_dates": {"type": "flexible", "month": "June"},
                "party": {"adults": 2, "children": 0},
                "number_of_days": 1,
                "transportation_mode": "Hiace"
            },
            "day_plans": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["breakdown"]["transportation"].is_number());
    assert!(body["base_cost"].is_number());
}

#[actix_web::test]
async fn test_missing_itinerary_returns_404() {
    let app = test::init_service(
        App::new().route("/api/itineraries/{id}", web::get().to(not_found)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/ffffffffffffffffffffffff")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_malformed_id_returns_400() {
    let app = test::init_service(
        App::new().route("/api/itineraries/{id}", web::get().to(bad_request)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/not-an-objectid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_delete_is_idempotent() {
    let app = test::init_service(
        App::new().route("/api/itineraries/{id}", web::delete().to(deleted)),
    )
    .await;

    // same delete twice: both succeed
    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/api/itineraries/ffffffffffffffffffffffff")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}

#[actix_web::test]
async fn test_cors_headers() {
    let app = test::init_service(
        App::new()
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .route("/health", web::get().to(health_check)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
