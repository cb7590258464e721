//! Edit history with undo/redo
//!
//! Past/present/future stacks over any cloneable state. Setting an
//! unchanged value is a no-op; setting after an undo discards the redo
//! branch; history is capped and trimmed oldest-first.

/// Maximum number of past states retained.
pub const MAX_HISTORY: usize = 50;

/// Undo/redo history around a single present value.
#[derive(Debug, Clone)]
pub struct EditHistory<T> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
}

impl<T: Clone + PartialEq> EditHistory<T> {
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
        }
    }

    /// The current state.
    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Replace the present state, recording the old one.
    ///
    /// No-op when `next` equals the present state. Clears the redo
    /// branch.
    pub fn set(&mut self, next: T) {
        if next == self.present {
            return;
        }
        if self.past.len() == MAX_HISTORY {
            self.past.remove(0);
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
    }

    /// Replace the present state via an updater closure.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.present);
        self.set(next);
    }

    /// Step back one state. No-op when there is nothing to undo.
    pub fn undo(&mut self) {
        if let Some(previous) = self.past.pop() {
            let current = std::mem::replace(&mut self.present, previous);
            self.future.insert(0, current);
        }
    }

    /// Step forward one state. No-op when there is nothing to redo.
    pub fn redo(&mut self) {
        if self.future.is_empty() {
            return;
        }
        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
    }

    /// Jump back to a given state, keeping it reachable via undo.
    pub fn reset(&mut self, initial: T) {
        let current = std::mem::replace(&mut self.present, initial);
        self.past.push(current);
        self.future.clear();
    }
}
