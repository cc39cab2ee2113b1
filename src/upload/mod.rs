mod client;
mod types;

pub use client::{Classifier, HttpClassifier};
pub use types::{Classification, ClassifyOutcome, ImageFile, Label, UploadError, GENERIC_FAILURE};
