//! Face-up classification from a single acceleration sample

use super::sample::AccelSample;

/// Instantaneous orientation of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceLabel {
    /// Top face up (work side)
    Top,
    /// Bottom face up (personal side)
    Bottom,
    /// On an edge, in hand, or otherwise not resting on a timing face
    #[default]
    Unknown,
}

impl FaceLabel {
    /// Short lowercase name for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceLabel::Top => "top",
            FaceLabel::Bottom => "bottom",
            FaceLabel::Unknown => "unknown",
        }
    }
}

/// Classification thresholds on the z axis (in g)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassifierConfig {
    /// `z` must be strictly above this for `Top`
    pub top_threshold: f32,
    /// `z` must be strictly below this for `Bottom`
    pub bottom_threshold: f32,
}

impl ClassifierConfig {
    /// Factory thresholds: about 37° of tilt either way still counts as flat
    pub const DEFAULT: Self = Self {
        top_threshold: 0.8,
        bottom_threshold: -0.8,
    };
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Stateless threshold classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationClassifier {
    config: ClassifierConfig,
}

impl OrientationClassifier {
    /// Create a classifier with the given thresholds
    pub const fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Get the thresholds in use
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one sample
    ///
    /// Comparisons are strict, so a reading exactly on a threshold is
    /// `Unknown`. A NaN `z` fails both comparisons and is `Unknown` too.
    pub fn classify(&self, sample: AccelSample) -> FaceLabel {
        if sample.z > self.config.top_threshold {
            FaceLabel::Top
        } else if sample.z < self.config.bottom_threshold {
            FaceLabel::Bottom
        } else {
            FaceLabel::Unknown
        }
    }
}
