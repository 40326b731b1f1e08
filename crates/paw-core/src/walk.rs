//! Counting guard for callback-driven OS walks.
//!
//! The OS window walk invokes a callback per item with no built-in cap.
//! [`VisitBudget`] turns that open-ended iteration into a bounded pass:
//! every call site admits each visit through the budget, and the walk
//! ends once the cap is reached. [`WalkControl`] carries the visitor's
//! stop-on-first-match decision back to the walk.

/// Visitor decision after inspecting one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Keep walking.
    Continue,
    /// End the walk (e.g. first eligible match found).
    Stop,
}

/// Hard cap on callback invocations for one walk.
#[derive(Debug)]
pub struct VisitBudget {
    cap: u32,
    visited: u32,
}

impl VisitBudget {
    pub fn new(cap: u32) -> Self {
        Self { cap, visited: 0 }
    }

    /// Admit one visit. Returns `false` once the cap is reached; the
    /// caller must then end the walk without inspecting the item.
    pub fn admit(&mut self) -> bool {
        if self.visited >= self.cap {
            return false;
        }
        self.visited += 1;
        true
    }

    /// Visits admitted so far.
    pub fn visited(&self) -> u32 {
        self.visited
    }

    /// Whether the cap has been reached.
    pub fn exhausted(&self) -> bool {
        self.visited >= self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_admits_up_to_cap() {
        let mut budget = VisitBudget::new(3);
        assert!(budget.admit());
        assert!(budget.admit());
        assert!(budget.admit());
        assert!(!budget.admit());
        assert!(!budget.admit());
        assert_eq!(budget.visited(), 3);
        assert!(budget.exhausted());
    }

    #[test]
    fn test_zero_cap_admits_nothing() {
        let mut budget = VisitBudget::new(0);
        assert!(!budget.admit());
        assert_eq!(budget.visited(), 0);
        assert!(budget.exhausted());
    }
}
