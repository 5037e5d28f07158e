//! Presentation of highlighted markup as complete documents

mod document;
mod stylesheet;

pub use document::document;
pub use stylesheet::stylesheet;
