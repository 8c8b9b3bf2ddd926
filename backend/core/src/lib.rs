pub mod error;
pub mod types;

pub use error::GateError;
pub use types::{CommandType, DetectionResult, SHOW_GALLERY};
