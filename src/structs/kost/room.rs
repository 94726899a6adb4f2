use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub available: u32,
}
