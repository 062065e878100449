//! In-process stand-in for the marketplace API, served on an ephemeral port.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use super::connection::RemoteApiConnection;
use super::wire::{RemotePeriod, RemoteProperty};

#[derive(Default)]
struct Listing {
    property: Option<RemoteProperty>,
    periods: Vec<RemotePeriod>,
}

type Listings = Arc<Mutex<HashMap<String, Listing>>>;

pub struct MockMarketplace {
    addr: SocketAddr,
}

impl MockMarketplace {
    /// Every request about this property answers 500
    pub const FAILING_PROPERTY: &'static str = "broken";

    pub async fn start() -> Self {
        let listings: Listings = Arc::default();
        let app = Router::new()
            .route("/api/v1/properties/:id", get(get_property).put(put_property))
            .route(
                "/api/v1/properties/:id/availability",
                get(list_periods).post(create_period),
            )
            .route(
                "/api/v1/properties/:id/availability/:period_id",
                put(update_period).delete(delete_period),
            )
            .with_state(listings);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr }
    }

    pub fn connection(&self) -> RemoteApiConnection {
        RemoteApiConnection::new(&format!("http://{}/api/v1", self.addr)).unwrap()
    }
}

async fn get_property(State(listings): State<Listings>, Path(id): Path<String>) -> Response {
    if id == MockMarketplace::FAILING_PROPERTY {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let listings = listings.lock().unwrap();
    match listings.get(&id).and_then(|l| l.property.clone()) {
        Some(property) => Json(property).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn put_property(
    State(listings): State<Listings>,
    Path(id): Path<String>,
    Json(property): Json<RemoteProperty>,
) -> StatusCode {
    listings.lock().unwrap().entry(id).or_default().property = Some(property);
    StatusCode::NO_CONTENT
}

async fn list_periods(State(listings): State<Listings>, Path(id): Path<String>) -> Response {
    if id == MockMarketplace::FAILING_PROPERTY {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let listings = listings.lock().unwrap();
    match listings.get(&id) {
        Some(listing) => Json(listing.periods.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_period(
    State(listings): State<Listings>,
    Path(id): Path<String>,
    Json(period): Json<RemotePeriod>,
) -> StatusCode {
    listings.lock().unwrap().entry(id).or_default().periods.push(period);
    StatusCode::CREATED
}

async fn update_period(
    State(listings): State<Listings>,
    Path((id, period_id)): Path<(String, String)>,
    Json(period): Json<RemotePeriod>,
) -> StatusCode {
    let mut listings = listings.lock().unwrap();
    let existing = listings
        .get_mut(&id)
        .and_then(|l| l.periods.iter_mut().find(|p| p.id == period_id));
    match existing {
        Some(existing) => {
            *existing = period;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_period(
    State(listings): State<Listings>,
    Path((id, period_id)): Path<(String, String)>,
) -> StatusCode {
    let mut listings = listings.lock().unwrap();
    let Some(listing) = listings.get_mut(&id) else {
        return StatusCode::NOT_FOUND;
    };
    let before = listing.periods.len();
    listing.periods.retain(|p| p.id != period_id);
    if listing.periods.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}
