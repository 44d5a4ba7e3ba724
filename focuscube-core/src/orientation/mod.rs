//! Orientation classification
//!
//! Turns a raw acceleration sample into a discrete face label. The label is
//! instantaneous; debouncing into a committed mode happens in [`crate::timer`].

pub mod classifier;
pub mod sample;

pub use classifier::{ClassifierConfig, FaceLabel, OrientationClassifier};
pub use sample::AccelSample;
