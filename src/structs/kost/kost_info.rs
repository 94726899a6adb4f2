use serde::Serialize;
use crate::structs::kost::contact::Contact;
use crate::structs::kost::location::Location;
use crate::structs::kost::room::Room;

/// Everything the site and the assistant are allowed to say about the business.
#[derive(Debug, Clone, Serialize)]
pub struct KostInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub location: Location,
    pub contact: Contact,
    pub highlights: &'static [&'static str],
    pub rooms: Vec<Room>,
}
