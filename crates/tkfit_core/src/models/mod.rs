//! Session data types

pub mod hot_spot;
pub mod sample;
pub mod session;

pub use hot_spot::{HotSpot, HotSpotSpec};
pub use sample::{GeoPoint, TimeSeriesSample};
pub use session::SessionData;
