//! Growth policy and accounting
//!
//! Sizing decides how large each buffer is; the tracker records every
//! reallocation so tests and callers can check the growth bound.

mod sizing;
mod tracker;

pub use sizing::{
    capacity_for, fits, grown_for_append, grown_for_insert, DEFAULT_CAPACITY, MAX_CAPACITY,
};
pub use tracker::GrowthTracker;

/// Detailed growth profile (if enabled)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrowthProfile {
    /// Largest capacity ever allocated
    pub peak_capacity: usize,

    /// One snapshot per reallocation
    pub timeline: Vec<(usize, usize)>, // (length_at_growth, new_capacity)

    /// Capacity of the first buffer
    pub initial_capacity: usize,
}

impl GrowthProfile {
    /// Number of reallocations recorded
    pub fn reallocations(&self) -> usize {
        self.timeline.len()
    }

    /// Every recorded capacity is a power of two and never shrinks
    pub fn is_monotonic(&self) -> bool {
        let mut previous = self.initial_capacity;
        for &(_, capacity) in &self.timeline {
            if !capacity.is_power_of_two() || capacity < previous {
                return false;
            }
            previous = capacity;
        }
        true
    }

    /// Generate report
    pub fn report(&self) -> String {
        let mut out = format!(
            "Initial capacity: {}\nPeak capacity: {}\nReallocations: {}",
            self.initial_capacity,
            self.peak_capacity,
            self.reallocations()
        );
        for (len, capacity) in &self.timeline {
            out.push_str(&format!("\n  len {len} -> capacity {capacity}"));
        }
        out
    }
}
