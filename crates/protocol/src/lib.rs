pub mod config;
pub mod shared_str;
pub mod types;

pub use config::LayoutConfig;
pub use shared_str::SharedStr;
pub use types::{Comment, OverlayInterval, ScheduledSegment};
