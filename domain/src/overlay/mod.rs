//! Map overlay selection state
//!
//! Pure state machine over the displayed subset: markers in, selection
//! out. Rendering against a concrete map provider happens behind the
//! `MapSurface` port in the application layer, so the contract here is
//! independent of any mapping library.

use crate::directory::entities::LawyerRecord;

/// Camera position for the map scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl MapViewport {
    /// Default camera: greater Los Angeles.
    pub const LOS_ANGELES: MapViewport = MapViewport {
        latitude: 34.0522,
        longitude: -118.2437,
        zoom: 10,
    };
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::LOS_ANGELES
    }
}

/// Overlay over a displayed subset of lawyer records.
///
/// At most one detail popup is open at a time: selecting a marker replaces
/// the current selection, closing clears it. The subset is fixed at open
/// time; re-opening the overlay builds a fresh `OverlayState` from a new
/// sample. Callers must only pass records with finite coordinates; that
/// validation belongs to the sampler boundary, not here.
#[derive(Debug, Clone)]
pub struct OverlayState {
    lawyers: Vec<LawyerRecord>,
    selected: Option<String>,
}

impl OverlayState {
    pub fn open(lawyers: Vec<LawyerRecord>) -> Self {
        Self {
            lawyers,
            selected: None,
        }
    }

    pub fn lawyers(&self) -> &[LawyerRecord] {
        &self.lawyers
    }

    pub fn is_empty(&self) -> bool {
        self.lawyers.is_empty()
    }

    /// Open the detail popup for the given record id.
    ///
    /// Returns false when the id is not part of the displayed subset; the
    /// current selection is kept in that case.
    pub fn select(&mut self, id: &str) -> bool {
        if self.lawyers.iter().any(|l| l.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Close the detail popup, if any.
    pub fn close_popup(&mut self) {
        self.selected = None;
    }

    /// The record whose popup is currently open.
    pub fn selected(&self) -> Option<&LawyerRecord> {
        let id = self.selected.as_deref()?;
        self.lawyers.iter().find(|l| l.id == id)
    }
}
