//! Bounded linear undo/redo history.

use std::collections::VecDeque;
use std::fmt;

use crate::geometry::{Axis, Direction};
use crate::layers::LayerMask;

/// Number of twists remembered by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// One fully specified slice twist, enough to replay or invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Twist {
    pub axis: Axis,
    pub layers: LayerMask,
    pub direction: Direction,
}

impl Twist {
    /// Returns the twist that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            Direction::CounterClockwise => "+",
            Direction::Clockwise => "-",
        };
        write!(f, "{}{arrow}[{}]", self.axis, self.layers)
    }
}

/// Recorded twists plus a cursor marking the undo/redo boundary.
///
/// Entries before the cursor have been applied; entries at or after it have
/// been undone and can be redone. Recording a new twist discards everything
/// after the cursor. When full, the oldest entry is dropped and the cursor
/// stays at capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<Twist>,
    cursor: usize,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates an empty history holding at most `capacity` twists.
    ///
    /// A capacity of zero records nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Records a newly applied twist.
    pub fn record(&mut self, twist: Twist) {
        if self.capacity == 0 {
            return;
        }

        // drop the redo branch
        self.entries.truncate(self.cursor);

        if self.cursor == self.capacity {
            self.entries.pop_front();
        } else {
            self.cursor += 1;
        }
        self.entries.push_back(twist);
    }

    /// Steps the cursor back and returns the twist to invert, if any.
    pub fn step_back(&mut self) -> Option<Twist> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).copied()
    }

    /// Returns the twist to replay and steps the cursor forward, if any.
    pub fn step_forward(&mut self) -> Option<Twist> {
        let twist = self.entries.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(twist)
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Iterates over all entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Twist> + '_ {
        self.entries.iter()
    }
}
