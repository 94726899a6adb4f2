use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub map_zoom: u8,
}
