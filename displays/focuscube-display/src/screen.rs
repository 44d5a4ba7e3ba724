//! Screen layout types
//!
//! A screen is a short list of text items at pixel positions, plus an
//! optional full-width horizontal rule.

use heapless::{String, Vec};

/// Maximum text items on one screen
pub const MAX_ITEMS: usize = 6;

/// Maximum bytes per text item (one line of the small font)
pub const TEXT_CAPACITY: usize = 21;

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Labels and hints
    Small,
    /// Splash title and idle clock
    Medium,
    /// Running clock
    Large,
}

/// Text placed with its top-left corner at (`x`, `y`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub x: i32,
    pub y: i32,
    pub size: TextSize,
    pub text: String<TEXT_CAPACITY>,
}

/// Layout for one frame on the panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    items: Vec<TextItem, MAX_ITEMS>,
    rule: Option<i32>,
}

impl Screen {
    /// Create an empty screen
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            rule: None,
        }
    }

    /// Remove all items and the rule
    pub fn clear(&mut self) {
        self.items.clear();
        self.rule = None;
    }

    /// Add text at a position
    ///
    /// Text longer than [`TEXT_CAPACITY`] is cut at a character boundary.
    /// Returns `false` if the screen already holds [`MAX_ITEMS`] items.
    pub fn push_text(&mut self, x: i32, y: i32, size: TextSize, text: &str) -> bool {
        let mut owned = String::new();
        for ch in text.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }
        self.items
            .push(TextItem {
                x,
                y,
                size,
                text: owned,
            })
            .is_ok()
    }

    /// Draw a horizontal rule across the panel at row `y`
    pub fn set_rule(&mut self, y: i32) {
        self.rule = Some(y);
    }

    /// Row of the horizontal rule, if any
    pub fn rule(&self) -> Option<i32> {
        self.rule
    }

    /// All text items in drawing order
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// First item with exactly this text
    pub fn find(&self, text: &str) -> Option<&TextItem> {
        self.items.iter().find(|item| item.text == text)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", item.text.as_str());
        }
        defmt::write!(f, "]");
    }
}
