//! Complexity counter with a changed flag.

/// Counts how often complexity was increased.
///
/// `changed` flips to true on the first increment and never goes back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityTracker {
    complexity: u32,
    changed: bool,
}

impl ComplexityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.complexity = self.complexity.saturating_add(1);
        self.changed = true;
    }

    pub fn complexity(&self) -> u32 {
        self.complexity
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }
}
