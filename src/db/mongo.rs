use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_POOL_SIZE: u32 = 10;

/// Databases this service writes to. The startup ping targets the
/// first one; /health pings it again on every call.
pub const CATALOG_DB: &str = "Catalog";
pub const AGENCY_DB: &str = "Agency";
pub const ITINERARIES_DB: &str = "Itineraries";

fn configure(mut options: ClientOptions) -> ClientOptions {
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.connect_timeout = Some(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    options.server_selection_timeout = Some(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.min_pool_size = Some(1);
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options
}

/// Builds the shared client that every catalog, client and itinerary
/// route receives through `web::Data`. A malformed URI fails startup; an
/// unreachable server only logs a warning, since quotes and catalog
/// edits will surface the error themselves and the database may come up
/// after we do.
pub async fn create_mongo_client(uri: &str) -> Arc<Client> {
    let options = ClientOptions::parse(uri)
        .await
        .expect("MONGODB_URI is not a valid connection string");

    let client =
        Client::with_options(configure(options)).expect("Failed to build MongoDB client");

    match client
        .database(CATALOG_DB)
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => println!("MongoDB connection verified"),
        Err(e) => {
            eprintln!("WARNING: MongoDB ping failed at startup: {}", e);
            eprintln!("Catalog and itinerary routes will error until the database is reachable");
        }
    }

    Arc::new(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn options_carry_service_identity_and_pool_bounds() {
        let options = ClientOptions::parse("mongodb://localhost:27017")
            .await
            .unwrap();
        let options = configure(options);

        assert_eq!(options.app_name.as_deref(), Some("tripdesk-api"));
        assert_eq!(options.max_pool_size, Some(MAX_POOL_SIZE));
        assert_eq!(options.min_pool_size, Some(1));
        assert_eq!(
            options.connect_timeout,
            Some(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        );
        assert!(options.server_api.is_some());
    }

    #[actix_web::test]
    #[should_panic(expected = "MONGODB_URI is not a valid connection string")]
    async fn malformed_uri_fails_startup() {
        create_mongo_client("not a mongodb uri").await;
    }
}
