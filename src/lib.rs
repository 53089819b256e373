pub mod config;
pub mod core;
pub mod dict;
pub mod segment;

pub use dict::{DictError, Dictionary, DictionaryStats};
pub use segment::{SegmentationStrategy, Segmenter};
