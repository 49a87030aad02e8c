//! Static-map provider.
//!
//! Builds a static-map image URL with one marker per record. The provider
//! credential comes from `[map]` config; an empty credential surfaces as
//! [`MapError::NotConfigured`] so the view renders a placeholder instead of
//! a map. Initialization is checked once per scene; there is no retry.

use compass_application::{MapError, MapScene, MapSurface};
use compass_domain::{LawyerRecord, MapViewport};

/// Default static-map endpoint.
pub const DEFAULT_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Map surface rendering to a static image URL.
pub struct StaticMapProvider {
    endpoint: String,
    api_key: String,
    width: u32,
    height: u32,
}

impl StaticMapProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            width,
            height,
        }
    }
}

impl MapSurface for StaticMapProvider {
    fn scene(
        &self,
        viewport: &MapViewport,
        markers: &[LawyerRecord],
    ) -> Result<MapScene, MapError> {
        if self.endpoint.trim().is_empty() {
            return Err(MapError::InitFailed("map endpoint is empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(MapError::NotConfigured);
        }

        let mut url = format!(
            "{}?center={:.4},{:.4}&zoom={}&size={}x{}",
            self.endpoint,
            viewport.latitude,
            viewport.longitude,
            viewport.zoom,
            self.width,
            self.height
        );
        for marker in markers {
            url.push_str(&format!(
                "&markers={:.6},{:.6}",
                marker.latitude, marker.longitude
            ));
        }
        url.push_str(&format!("&key={}", self.api_key));

        Ok(MapScene {
            url,
            marker_count: markers.len(),
        })
    }
}
