//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolutionService, ShorteningService};
use crate::config::Credentials;
use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::AliasGenerator;

/// Services and settings shared across requests.
///
/// Both services hold the same store handle; nothing else is shared between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<dyn UrlRepository>>,
    pub resolution_service: Arc<ResolutionService<dyn UrlRepository>>,
    /// Basic auth credentials for write routes; `None` leaves them open.
    pub credentials: Option<Arc<Credentials>>,
}

impl AppState {
    /// Wires both services around one store.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: AliasGenerator,
        alias_length: usize,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            shortening_service: Arc::new(ShorteningService::new(
                repository.clone(),
                generator,
                alias_length,
            )),
            resolution_service: Arc::new(ResolutionService::new(repository)),
            credentials: credentials.map(Arc::new),
        }
    }
}
