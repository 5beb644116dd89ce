//! Transient label previews surfaced on long press.
//!
//! The toolbar only queues previews; presenting them (and dismissing them
//! once their duration expires) is up to the host, much like a toast.
//!
//! ```
//! use ayah_toolbar_widget::preview::{Preview, Previews};
//!
//! let mut previews = Previews::new();
//! let id = previews.push(Preview::new("Bookmark"));
//!
//! assert_eq!(previews.latest().map(|preview| preview.label.as_str()), Some("Bookmark"));
//!
//! previews.remove(id);
//! assert!(previews.is_empty());
//! ```
use slotmap::{SlotMap, new_key_type};
use std::collections::VecDeque;
use std::time::Duration;

new_key_type! {
    /// A unique identifier for a preview.
    pub struct Id;
}

/// How long a preview stays up when no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// A short, non-blocking text preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// The text to display.
    pub label: String,
    /// How long the preview should be displayed.
    pub duration: Duration,
}

impl Preview {
    /// Creates a new preview of the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Sets the duration for this preview.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A bounded queue of previews, oldest evicted first.
#[derive(Debug)]
pub struct Previews {
    previews: SlotMap<Id, Preview>,
    queue: VecDeque<Id>,
    limit: usize,
}

impl Default for Previews {
    fn default() -> Self {
        let limit = 1;
        Self {
            previews: SlotMap::with_capacity_and_key(limit),
            queue: VecDeque::new(),
            limit,
        }
    }
}

impl Previews {
    /// Creates an empty queue that holds a single preview at a time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of previews kept at once.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Adds a preview, evicting the oldest ones beyond the limit.
    pub fn push(&mut self, preview: Preview) -> Id {
        while self.previews.len() >= self.limit {
            match self.queue.pop_front() {
                Some(oldest) => {
                    let _ = self.previews.remove(oldest);
                }
                None => break,
            }
        }

        let id = self.previews.insert(preview);
        self.queue.push_back(id);
        id
    }

    /// Removes a preview by its id.
    pub fn remove(&mut self, id: Id) {
        let _ = self.previews.remove(id);
        if let Some(pos) = self.queue.iter().position(|key| *key == id) {
            let _ = self.queue.remove(pos);
        }
    }

    /// Removes every preview.
    pub fn clear(&mut self) {
        self.previews.clear();
        self.queue.clear();
    }

    /// Returns `true` if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Returns the number of queued previews.
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    /// Returns the most recently pushed preview.
    pub fn latest(&self) -> Option<&Preview> {
        self.queue
            .back()
            .and_then(|id| self.previews.get(*id))
    }

    /// Iterates over the previews, newest first.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &Preview)> {
        self.queue
            .iter()
            .rev()
            .filter_map(|id| self.previews.get(*id).map(|preview| (*id, preview)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preview_replaces_old_one() {
        let mut previews = Previews::new();
        let first = previews.push(Preview::new("Bookmark"));
        let _ = previews.push(Preview::new("Share"));

        assert_eq!(previews.len(), 1);
        assert_eq!(previews.latest().map(|p| p.label.as_str()), Some("Share"));

        previews.remove(first);
        assert_eq!(previews.len(), 1);
    }

    #[test]
    fn test_limit_keeps_newest_first() {
        let mut previews = Previews::new().limit(2);
        let _ = previews.push(Preview::new("a"));
        let _ = previews.push(Preview::new("b"));
        let _ = previews.push(Preview::new("c"));

        let labels: Vec<_> = previews.iter().map(|(_, p)| p.label.clone()).collect();
        assert_eq!(labels, vec!["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut previews = Previews::new().limit(0);
        let _ = previews.push(Preview::new("a"));

        assert_eq!(previews.len(), 1);
    }

    #[test]
    fn test_custom_duration() {
        let preview = Preview::new("Play").duration(Duration::from_secs(5));

        assert_eq!(preview.duration, Duration::from_secs(5));
        assert_eq!(Preview::new("Play").duration, DEFAULT_DURATION);
    }
}
