//! Canned hotel booking

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::response::ToolResponse;
use crate::text::title_case;

/// Hotel type assumed when the caller gives no preference
pub const DEFAULT_HOTEL_TYPE: &str = "standard hotel";

/// Selected when no table entry matches the hint
pub const FALLBACK_HOTEL_TYPE: &str = "city center hotel";

pub const CHECK_IN: &str = "3:00 PM";
pub const CHECK_OUT: &str = "11:00 AM";

/// Amenities and price band of one hotel type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelOption {
    pub name: &'static str,
    pub amenities: &'static [&'static str],
    pub price_range: &'static str,
}

/// Match order matters: the first entry that fits the hint wins
const HOTEL_OPTIONS: &[HotelOption] = &[
    HotelOption {
        name: "beachfront resort",
        amenities: &["private beach access", "outdoor pool", "spa services", "water sports"],
        price_range: "$200-400/night",
    },
    HotelOption {
        name: "luxury spa hotel",
        amenities: &["full-service spa", "indoor pool", "fine dining", "room service"],
        price_range: "$180-350/night",
    },
    HotelOption {
        name: FALLBACK_HOTEL_TYPE,
        amenities: &["central location", "business center", "fitness center", "restaurant"],
        price_range: "$120-250/night",
    },
    HotelOption {
        name: "business hotel",
        amenities: &["meeting rooms", "wifi", "fitness center", "airport shuttle"],
        price_range: "$100-200/night",
    },
    HotelOption {
        name: "outdoor pool hotel",
        amenities: &["outdoor pool", "sun deck", "poolside service", "garden area"],
        price_range: "$150-280/night",
    },
    HotelOption {
        name: "boutique hotel",
        amenities: &["unique design", "personalized service", "local art", "gourmet breakfast"],
        price_range: "$140-300/night",
    },
];

impl HotelOption {
    fn matches(&self, hint: &str) -> bool {
        hint.contains(self.name) || self.name.split_whitespace().any(|word| hint.contains(word))
    }
}

/// Pick the hotel type for a free-text hint
///
/// An entry matches when its full name, or any single word of it, occurs in
/// the lowercase hint. Since most names end in "hotel", any hint containing
/// that word matches at the latest on the second entry.
pub fn select_hotel(hint: &str) -> &'static HotelOption {
    let hint = hint.to_lowercase();
    let selected = HOTEL_OPTIONS
        .iter()
        .find(|option| option.matches(&hint))
        .or_else(|| HOTEL_OPTIONS.iter().find(|o| o.name == FALLBACK_HOTEL_TYPE))
        .unwrap_or(&HOTEL_OPTIONS[0]);
    debug!(hint = %hint, hotel = selected.name, "Selected hotel type");
    selected
}

/// 32-bit FNV-1a
///
/// Confirmation codes must not depend on the process, so the hash is fixed
/// rather than taken from the standard library's randomized hasher.
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(PRIME)
    })
}

/// `HTL-` plus four zero-padded digits derived from city and hotel type
///
/// Not unique: different bookings can share a code.
pub fn confirmation_code(city: &str, hotel_type: &str) -> String {
    let key = format!("{}-{}", city.to_lowercase(), hotel_type);
    format!("HTL-{:04}", fnv1a32(key.as_bytes()) % 10_000)
}

/// Booking details returned to the traveller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelBooking {
    pub destination: String,
    pub hotel_type: String,
    pub amenities: Vec<String>,
    pub price_range: String,
    pub booking_confirmation: String,
    pub check_in: String,
    pub check_out: String,
}

/// Payload of `book_hotel`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub booking: HotelBooking,
}

/// `book_hotel` tool body; never fails
pub fn book_hotel(city: &str, hotel_type: &str) -> ToolResponse<BookingConfirmation> {
    let option = select_hotel(hotel_type);
    let booking = HotelBooking {
        destination: title_case(city),
        hotel_type: option.name.to_string(),
        amenities: option.amenities.iter().map(|a| (*a).to_string()).collect(),
        price_range: option.price_range.to_string(),
        booking_confirmation: confirmation_code(city, option.name),
        check_in: CHECK_IN.to_string(),
        check_out: CHECK_OUT.to_string(),
    };
    info!(
        city = %booking.destination,
        hotel = %booking.hotel_type,
        confirmation = %booking.booking_confirmation,
        "Hotel booked"
    );

    ToolResponse::success(BookingConfirmation {
        message: format!(
            "{} successfully booked in {}!",
            title_case(option.name),
            booking.destination
        ),
        booking,
    })
}
