//! Map surface port
//!
//! The third-party map provider sits behind this boundary: markers in,
//! renderable scene out. Nothing here names a concrete mapping widget, so
//! the provider can be swapped without touching overlay logic.

use compass_domain::{LawyerRecord, MapViewport};
use thiserror::Error;

/// Errors raised by the map provider boundary
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Map provider credential is not configured")]
    NotConfigured,

    #[error("Map surface failed to initialize: {0}")]
    InitFailed(String),
}

/// A renderable description of the map for the current overlay.
///
/// The shipped adapter produces a static-map image URL; other adapters may
/// fill `url` differently as long as one marker per record is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub url: String,
    pub marker_count: usize,
}

/// Surface that turns a viewport plus markers into a scene
///
/// Callers pass only records with finite coordinates; the adapter may
/// assume every marker is placeable. A failed initialization (missing
/// credential, provider error) is reported once; there is no retry path.
pub trait MapSurface: Send + Sync {
    fn scene(&self, viewport: &MapViewport, markers: &[LawyerRecord])
    -> Result<MapScene, MapError>;
}
