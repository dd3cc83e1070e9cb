//! Request and response bodies for the classifier endpoint.

pub mod classification;

pub use classification::{ClassificationRequest, ClassificationResult, Confidence, ErrorBody};
