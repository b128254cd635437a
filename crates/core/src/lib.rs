//! Core domain types and lecture markdown extraction
//! for course deck generation.

pub mod error;
pub mod extract;
pub mod types;

pub use error::{Error, Result};
pub use extract::LectureExtractor;
pub use types::{LectureRecord, SlideRecord};
