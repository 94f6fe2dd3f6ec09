//! HTTP front end.
//!
//! ## Endpoints
//!
//! - `GET /` - Month overview page (`?month=YYYY-MM`, `&saved=1`)
//! - `POST /budget` - Save the month form, then redirect to the overview
//! - `GET /api/budget` - Month overview as JSON (`?month=YYYY-MM`)
//! - `GET /health` - Liveness check

mod error;
mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::trace::TraceLayer;

use crate::db::Database;
use error::ApiError;

/// One store for the whole process. Each request holds the lock for a single
/// read or write; concurrent saves to one month are last-write-wins.
#[derive(Clone)]
pub(crate) struct AppState {
    db: Arc<Mutex<Database>>,
}

impl AppState {
    pub(crate) fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    fn lock_db(&self) -> Result<MutexGuard<'_, Database>, ApiError> {
        self.db.lock().map_err(|_| ApiError::StoreUnavailable)
    }
}

pub(crate) fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::overview))
        .route("/budget", post(handlers::save_budget))
        .route("/api/budget", get(handlers::month_json))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests;
