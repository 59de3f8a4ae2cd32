use crate::api::views::Views;
use crate::error::Result;
use crate::observability::AppMetrics;
use crate::services::accounts::{AccountService, InMemoryAccountService};
use crate::services::front_desk::FrontDeskService;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Intent store and session log owner
    pub front_desk: Arc<dyn FrontDeskService>,
    /// External registration / login / per-user appointments
    pub accounts: Arc<dyn AccountService>,
    /// Request and domain counters
    pub metrics: Arc<AppMetrics>,
    /// HTML page templates
    pub views: Arc<Views>,
    /// Build version reported by /health
    pub version: String,
    /// Process start, shared with the observability endpoints for uptime
    pub started_at: DateTime<Utc>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("front_desk", &"Arc<dyn FrontDeskService>")
            .field("accounts", &"Arc<dyn AccountService>")
            .field("version", &self.version)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        front_desk: Box<dyn FrontDeskService>,
        accounts: Box<dyn AccountService>,
        metrics: Arc<AppMetrics>,
    ) -> Result<Self> {
        Ok(Self {
            front_desk: Arc::from(front_desk),
            accounts: Arc::from(accounts),
            metrics,
            views: Arc::new(Views::new()?),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        })
    }

    /// Create development application state with in-memory accounts
    pub fn development(front_desk: Box<dyn FrontDeskService>) -> Result<Self> {
        Self::new(
            front_desk,
            Box::new(InMemoryAccountService::new("example.com")),
            Arc::new(AppMetrics::default()),
        )
    }
}
