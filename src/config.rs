use eframe::egui::Color32;

use crate::data::model::UserLocation;

// ---------------------------------------------------------------------------
// Fixed application settings
// ---------------------------------------------------------------------------

/// Hospital dataset loaded at startup, relative to the working directory.
pub const DATA_PATH: &str = "data/hospital-data-with-geocodes-clean.csv";

pub const WINDOW_TITLE: &str = "Hospital Finder";
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 480.0];

/// New York City.
pub const DEFAULT_LOCATION: UserLocation = UserLocation {
    latitude: 40.7128,
    longitude: -74.0060,
};

/// Map camera used whenever the view is re-centred.
pub const VIEW: ViewConfig = ViewConfig {
    zoom: 10.0,
    pitch_degrees: 50.0,
};

pub const USER_MARKER: MarkerStyle = MarkerStyle {
    radius: 8.0,
    color: Color32::from_rgb(0, 0, 255),
};

pub const HOSPITAL_MARKER: MarkerStyle = MarkerStyle {
    radius: 4.0,
    color: Color32::from_rgb(255, 0, 0),
};

/// Pointer distance (screen pixels) within which a hospital marker is hovered.
pub const HOVER_RADIUS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Map camera
// ---------------------------------------------------------------------------

/// Number of 256-px web-mercator tiles spanned horizontally by the view.
const VIEWPORT_TILES: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub zoom: f64,
    pub pitch_degrees: f64,
}

impl ViewConfig {
    /// Longitude degrees visible across the map at this zoom level.
    pub fn span_degrees(&self) -> f64 {
        360.0 / 2f64.powf(self.zoom) * VIEWPORT_TILES
    }

    /// Plot bounds `(min, max)` as `[lon, lat]` centred on `center`.
    pub fn bounds(&self, center: UserLocation) -> ([f64; 2], [f64; 2]) {
        let half_lon = self.span_degrees() / 2.0;
        let half_lat = half_lon * center.latitude.to_radians().cos().abs().max(0.01);
        (
            [center.longitude - half_lon, center.latitude - half_lat],
            [center.longitude + half_lon, center.latitude + half_lat],
        )
    }

    /// Plot aspect (x units per pixel over y units per pixel).
    ///
    /// Longitude degrees shrink with `cos(latitude)`; the camera pitch
    /// foreshortens the vertical axis by `cos(pitch)`.
    pub fn data_aspect(&self, latitude: f64) -> f64 {
        let lat_scale = latitude.to_radians().cos().abs().max(0.01);
        self.pitch_degrees.to_radians().cos() / lat_scale
    }
}

// ---------------------------------------------------------------------------
// Marker styling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct MarkerStyle {
    /// Radius in screen pixels.
    pub radius: f32,
    pub color: Color32,
}
