//! Session analysis: headline metrics and key events

pub mod events;
pub mod summary;

pub use events::{detect_key_events, EventDetectionConfig, KeyEvent};
pub use summary::{HeartRateZone, SessionSummary, SummaryConfig};
