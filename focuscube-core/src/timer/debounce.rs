//! Consecutive-tick debounce for face labels

use crate::orientation::FaceLabel;

/// Counts how many consecutive ticks the same label has been observed
///
/// A label is reported once its count reaches the threshold, after which the
/// count restarts from zero. Holding a face therefore reports it once per
/// full window, never on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelDebouncer {
    label: FaceLabel,
    count: u32,
    threshold: u32,
}

impl LabelDebouncer {
    /// Create a debouncer that reports after `threshold` identical labels
    ///
    /// A threshold of zero is treated as one.
    pub const fn new(threshold: u32) -> Self {
        Self {
            label: FaceLabel::Unknown,
            count: 0,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Feed one observed label
    ///
    /// Returns the label when it has just completed a full stable window.
    pub fn observe(&mut self, label: FaceLabel) -> Option<FaceLabel> {
        if label == self.label {
            self.count = self.count.saturating_add(1);
        } else {
            self.label = label;
            self.count = 1;
        }

        if self.count >= self.threshold {
            self.count = 0;
            Some(label)
        } else {
            None
        }
    }

    /// Label currently being counted
    pub fn label(&self) -> FaceLabel {
        self.label
    }

    /// Consecutive observations of [`Self::label`] since the last report
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Observations needed to report
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
