use sqlx::PgPool;
use std::sync::Arc;

use sitebloom::services::BlobStore;
use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub rate_limiter: Arc<RateLimiter>,
    pub blob_store: Arc<dyn BlobStore>,
}
