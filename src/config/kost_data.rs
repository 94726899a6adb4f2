use once_cell::sync::Lazy;
use crate::structs::kost::contact::Contact;
use crate::structs::kost::kost_info::KostInfo;
use crate::structs::kost::location::Location;
use crate::structs::kost::room::Room;

pub static KOST_INFO: Lazy<KostInfo> = Lazy::new(|| KostInfo {
    name: "Kost Citra & Tiara",
    tagline: "Comfortable & Secure Living for Undip Female Students",
    description: "Located just 5 minutes from Universitas Diponegoro, Kost Citra & Tiara \
        offers a premium, female-only environment designed for academic success. Clean, \
        modern, and fully managed.",
    location: Location {
        address: "Jl. Tembalang Selatan No. 12, Semarang, Jawa Tengah",
        lat: -7.0530,
        lng: 110.4375,
        map_zoom: 14,
    },
    contact: Contact {
        whatsapp: "+6281234567890",
        email: "info@kostcitratiara.com",
        instagram: "@kostcitratiara_undip",
    },
    highlights: &[
        "5 Min to Undip Campus",
        "24/7 CCTV Security",
        "Free High-Speed WiFi",
        "Cleaning Service Included",
    ],
    rooms: vec![
        Room {
            id: "standard",
            name: "Citra Standard",
            price: "Rp 1.200.000 / month",
            image: "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?auto=format&fit=crop&q=80&w=600",
            features: &["Single Bed", "Shared Bathroom", "Study Desk", "Wardrobe", "Fan"],
            available: 3,
        },
        Room {
            id: "deluxe",
            name: "Tiara Deluxe",
            price: "Rp 1.800.000 / month",
            image: "https://images.unsplash.com/photo-1598928506311-c55ded91a20c?auto=format&fit=crop&q=80&w=600",
            features: &["Queen Bed", "Ensuite Bathroom", "AC", "Smart TV", "Water Heater"],
            available: 2,
        },
        Room {
            id: "vip",
            name: "Sultan VIP",
            price: "Rp 2.500.000 / month",
            image: "https://images.unsplash.com/photo-1522771753033-6a586b911b18?auto=format&fit=crop&q=80&w=600",
            features: &["King Bed", "Ensuite + Bathtub", "Private Balcony", "Fridge", "Netflix Included"],
            available: 1,
        },
    ],
});
