use crate::error::ApiError;
use application::AdminApp;
use domain::DomainError;
use std::sync::Arc;

/// Shared by every handler. Holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub admin_app: Arc<AdminApp>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(admin_app: Arc<AdminApp>, expose_error_details: bool) -> Self {
        Self {
            admin_app,
            expose_error_details,
        }
    }

    /// Turn a domain failure into the response for this operation
    pub fn fail(&self, error: DomainError, context: &str) -> ApiError {
        ApiError::from_domain(error, context, self.expose_error_details)
    }
}
