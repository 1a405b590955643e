//! Category pairs and deck handling
//!
//! A category is a pair of opposing concepts spanning the dial. The editor
//! list is freely editable before a game; starting a game filters it down to
//! playable pairs and shuffles it once.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_ROUNDS;

/// Two opposing labels, left end and right end of the spectrum
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Category {
    pub left: String,
    pub right: String,
}

impl Category {
    /// Build a category from raw input, trimming both labels
    ///
    /// Returns `None` if either label is blank after trimming.
    pub fn new(left: &str, right: &str) -> Option<Self> {
        let (left, right) = (left.trim(), right.trim());
        if left.is_empty() || right.is_empty() {
            return None;
        }
        Some(Self {
            left: left.to_string(),
            right: right.to_string(),
        })
    }

    /// Both labels non-empty after trimming
    pub fn is_playable(&self) -> bool {
        !self.left.trim().is_empty() && !self.right.trim().is_empty()
    }
}

/// Built-in opposing pairs
pub const DEFAULT_PAIRS: [(&str, &str); 20] = [
    ("Classic", "Modern"),
    ("Sweet", "Salty"),
    ("Natural", "Artificial"),
    ("Risky", "Safe"),
    ("Minimalist", "Ornate"),
    ("Fast", "Slow"),
    ("Mainstream", "Niche"),
    ("Realistic", "Abstract"),
    ("Quiet", "Loud"),
    ("Cheap", "Expensive"),
    ("Vintage", "Futuristic"),
    ("Work", "Leisure"),
    ("Hot", "Cold"),
    ("Land", "Sea"),
    ("Introvert", "Extrovert"),
    ("Simple", "Complex"),
    ("Mountains", "Beach"),
    ("Science", "Art"),
    ("Optimistic", "Pessimistic"),
    ("Spontaneous", "Planned"),
];

/// The default deck as owned categories
pub fn default_categories() -> Vec<Category> {
    DEFAULT_PAIRS
        .iter()
        .map(|&(left, right)| Category {
            left: left.to_string(),
            right: right.to_string(),
        })
        .collect()
}

/// Uniformly shuffled copy of `items` (Fisher-Yates); the input is untouched
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Playable subset of `categories`, or the default deck if none survive
pub fn playable_deck(categories: &[Category]) -> Vec<Category> {
    let playable: Vec<Category> = categories
        .iter()
        .filter(|c| c.is_playable())
        .cloned()
        .collect();

    if playable.is_empty() {
        log::warn!("No playable categories, falling back to the default deck");
        default_categories()
    } else {
        playable
    }
}

/// Pre-game category list editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEditor {
    entries: Vec<Category>,
}

impl Default for CategoryEditor {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

impl CategoryEditor {
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a pair; rejected (returns false) if either label is blank
    pub fn add(&mut self, left: &str, right: &str) -> bool {
        match Category::new(left, right) {
            Some(category) => {
                log::debug!("Added category {} ↔ {}", category.left, category.right);
                self.entries.push(category);
                true
            }
            None => false,
        }
    }

    /// Remove the entry at `index` (out-of-range is a no-op)
    pub fn remove(&mut self, index: usize) -> Option<Category> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Replace the list with a shuffled copy
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries = shuffle(&self.entries, rng);
    }

    /// Restore the built-in pairs
    pub fn reset(&mut self) {
        self.entries = default_categories();
    }

    /// Rounds a game would have with the list as it stands
    pub fn preview_rounds(&self) -> u32 {
        MAX_ROUNDS.min(self.entries.len() as u32)
    }
}
