//! Health-check response shared by the REST API and any future surfaces.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health status of the stockboard service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    /// True when the service is up and able to serve data.
    pub ok: bool,
    /// Human-readable status message.
    pub message: String,
}

impl HealthRes {
    /// The canonical "service is alive" response.
    pub fn alive() -> Self {
        Self {
            ok: true,
            message: "stockboard is alive".into(),
        }
    }
}
