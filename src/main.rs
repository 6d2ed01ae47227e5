//! Hotel Concierge server binary.
//!
//! Serves the booking CRUD API and the chat endpoint from one process.
//! The conversation engine reaches the booking data either through the
//! local repositories (default) or through a remote backend over HTTP,
//! depending on configuration.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hotel_concierge::adapters::assistant::{GigaChatBridge, GigaChatConfig};
use hotel_concierge::adapters::booking_api::{
    HttpBookingApi, HttpBookingApiConfig, LocalBookingApi,
};
use hotel_concierge::adapters::http::{
    api_router, BookingHandlers, CatalogHandlers, ChatHandlers,
};
use hotel_concierge::adapters::postgres::{PostgresBookingRepository, PostgresCatalog};
use hotel_concierge::adapters::retrieval::{ChromaConfig, ChromaKnowledgeSearch};
use hotel_concierge::adapters::storage::InMemorySessionStore;
use hotel_concierge::application::handlers::booking::CreateBookingHandler;
use hotel_concierge::application::handlers::catalog::{
    GetRoomHandler, ListHotelsHandler, ListRoomsHandler,
};
use hotel_concierge::application::handlers::chat::ProcessChatEventHandler;
use hotel_concierge::config::{AppConfig, BookingApiMode};
use hotel_concierge::domain::conversation::ConversationEngine;
use hotel_concierge::ports::BookingApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    let catalog = Arc::new(PostgresCatalog::new(pool.clone()));
    let bookings = Arc::new(PostgresBookingRepository::new(pool));

    let booking_api: Arc<dyn BookingApi> = match config.booking_api.mode {
        BookingApiMode::Local => Arc::new(LocalBookingApi::new(
            catalog.clone(),
            catalog.clone(),
            bookings.clone(),
        )),
        BookingApiMode::Remote => {
            let base_url = config
                .booking_api
                .base_url
                .clone()
                .expect("validated: remote mode has a base URL");
            Arc::new(HttpBookingApi::new(
                HttpBookingApiConfig::new(base_url)
                    .with_timeout(Duration::from_secs(config.booking_api.timeout_secs)),
            )?)
        }
    };

    let assistant = Arc::new(GigaChatBridge::new(
        GigaChatConfig::new(
            config.assistant.auth_key.expose_secret().clone(),
            config.assistant.auth_url.clone(),
            config.assistant.api_url.clone(),
        )
        .with_model(config.assistant.model.clone())
        .with_temperature(config.assistant.temperature)
        .with_timeout(Duration::from_secs(config.assistant.timeout_secs)),
    )?);

    let knowledge = Arc::new(ChromaKnowledgeSearch::new(
        ChromaConfig::new(config.retrieval.base_url.clone())
            .with_collection(config.retrieval.collection.clone())
            .with_top_k(config.retrieval.top_k)
            .with_timeout(Duration::from_secs(config.retrieval.timeout_secs)),
    )?);

    let engine = Arc::new(ConversationEngine::new(booking_api, assistant, knowledge));
    let sessions = Arc::new(InMemorySessionStore::new());

    let catalog_handlers = CatalogHandlers::new(
        Arc::new(ListHotelsHandler::new(catalog.clone())),
        Arc::new(ListRoomsHandler::new(catalog.clone())),
        Arc::new(GetRoomHandler::new(catalog)),
    );
    let booking_handlers =
        BookingHandlers::new(Arc::new(CreateBookingHandler::new(bookings)));
    let chat_handlers = ChatHandlers::new(Arc::new(ProcessChatEventHandler::new(
        sessions, engine,
    )));

    let app = api_router(
        catalog_handlers,
        booking_handlers,
        chat_handlers,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    info!(%addr, "hotel-concierge listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
