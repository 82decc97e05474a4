//! Image update acknowledgements.
//!
//! Images are hosted outside this service. The update endpoints only echo the
//! URL back; nothing is persisted.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Image Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImageUpdatedResponse {
    /// Always true
    pub success: bool,

    /// Which record the acknowledgement refers to
    pub message: String,

    /// The URL supplied by the caller
    pub image_url: String,
}

impl ImageUpdatedResponse {
    pub(crate) fn acknowledge(subject: &str, id: i64, image_url: String) -> Self {
        Self {
            success: true,
            message: format!("{subject} {id} image updated"),
            image_url,
        }
    }
}
