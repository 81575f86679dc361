//! Reallocation tracking

use super::GrowthProfile;

/// Tracks buffer growth over the lifetime of one list
#[derive(Debug, Clone)]
pub struct GrowthTracker {
    /// Number of reallocations so far
    reallocations: usize,

    /// Maximum capacity seen
    peak: usize,

    /// Profile data (if enabled)
    profile: Option<GrowthProfile>,
}

impl GrowthTracker {
    /// Create a tracker for a list whose first buffer has `initial_capacity` slots
    pub fn new(initial_capacity: usize, profile_enabled: bool) -> Self {
        Self {
            reallocations: 0,
            peak: initial_capacity,
            profile: profile_enabled.then(|| GrowthProfile {
                peak_capacity: initial_capacity,
                timeline: Vec::new(),
                initial_capacity,
            }),
        }
    }

    /// Record a reallocation that happened while the list held `len` elements
    pub fn record_growth(&mut self, len: usize, new_capacity: usize) {
        self.reallocations += 1;
        self.peak = self.peak.max(new_capacity);

        if let Some(ref mut p) = self.profile {
            p.timeline.push((len, new_capacity));
            p.peak_capacity = self.peak;
        }
    }

    /// Number of reallocations so far
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Largest capacity ever allocated
    pub fn peak_capacity(&self) -> usize {
        self.peak
    }

    /// Borrow the profile (if enabled)
    pub fn profile(&self) -> Option<&GrowthProfile> {
        self.profile.as_ref()
    }

    /// Take the profile, leaving profiling disabled
    pub fn take_profile(&mut self) -> Option<GrowthProfile> {
        self.profile.take()
    }
}
