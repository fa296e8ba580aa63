pub mod api_key;
pub mod confirmation;
pub mod upstream;
pub mod uploads;
