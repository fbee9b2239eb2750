//! Press/release recognition on display surfaces
//!
//! A press followed by a release on the same entry is a click unless the
//! pointer travelled further than the swipe threshold horizontally.

use super::carousel::SwipeDirection;
use super::data::EntryId;

/// Minimum horizontal travel for a swipe, in logical pixels
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Swipe(SwipeDirection),
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    last_x: f32,
    pressed: Option<(EntryId, f32)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, x: f32) {
        self.last_x = x;
    }

    pub fn press(&mut self, entry: EntryId) {
        self.pressed = Some((entry, self.last_x));
    }

    /// Finish a gesture. Releases on a different entry than the press are dropped.
    pub fn release(&mut self, entry: EntryId, threshold: f32) -> Option<Gesture> {
        let (pressed_entry, start_x) = self.pressed.take()?;
        if pressed_entry != entry {
            return None;
        }

        let travel = start_x - self.last_x;
        if travel.abs() <= threshold {
            return Some(Gesture::Click);
        }

        // Finger moving left reveals the next image
        Some(Gesture::Swipe(if travel > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Prev
        }))
    }
}
