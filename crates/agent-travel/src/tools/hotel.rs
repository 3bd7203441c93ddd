//! Tool for booking a hotel

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::parse_params;
use crate::hotel::{DEFAULT_HOTEL_TYPE, book_hotel};

/// Tool wrapping [`book_hotel`]
pub struct HotelBookingTool;

#[derive(Debug, Deserialize)]
struct HotelParams {
    city: String,
    #[serde(default = "default_hotel_type")]
    hotel_type: String,
}

fn default_hotel_type() -> String {
    DEFAULT_HOTEL_TYPE.to_string()
}

#[async_trait]
impl Tool for HotelBookingTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: HotelParams = parse_params(params)?;
        Ok(book_hotel(&params.city, &params.hotel_type).to_value()?)
    }

    fn name(&self) -> &'static str {
        "book_hotel"
    }

    fn description(&self) -> &'static str {
        "Book hotel accommodation in a city. Returns the booked hotel type, \
         amenities, price range, confirmation code and check-in/out times."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "city": schema::string("The destination city for hotel booking"),
                "hotel_type": schema::string_with_default(
                    "Type of hotel to book (e.g., 'luxury spa hotel', 'beachfront resort')",
                    DEFAULT_HOTEL_TYPE,
                ),
            }),
            &["city"],
        )
    }
}
