pub mod contact;
pub mod kost_info;
pub mod location;
pub mod room;
