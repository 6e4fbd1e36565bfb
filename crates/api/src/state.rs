use std::sync::Arc;

use examcat_store::DynStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Injected document-store client (Firestore in production, the
    /// in-memory store in tests).
    pub store: DynStore,
    /// Server configuration (admin secret, bind address, CORS origins).
    pub config: Arc<ServerConfig>,
}
