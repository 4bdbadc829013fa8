//! solepulse-detect
//!
//! Regex-backed detectors that turn free text into canonical signals: brand
//! and model mentions (with character spans and context windows), retail
//! channels from URLs and keywords, and purchase-intent categories. All
//! patterns are compiled once at construction and only read afterwards.
pub mod brands;
pub mod channels;
pub mod intent;
pub mod models;
pub mod offset;
pub mod pattern;

pub use brands::BrandDetector;
pub use channels::{extract_urls, ChannelDetector};
pub use intent::IntentClassifier;
pub use models::{ModelDetector, ModelInfo};
