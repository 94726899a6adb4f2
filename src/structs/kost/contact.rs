use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
}
