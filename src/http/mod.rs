//! HTTP protocol layer module
//!
//! MIME detection and response builders, kept apart from the file lookup logic.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use mime::MimeTable;
pub use response::{build_405_response, build_500_response, build_file_response};
