//! Vote accumulation and leader tracking.

use std::collections::HashMap;

use crate::color::Rgb;

/// Running vote counts per bucket with an incrementally tracked leader.
///
/// The leader changes only when a bucket's count strictly exceeds the
/// current leading count. Among buckets that end up tied, the first one to
/// reach that count keeps the lead, which makes the outcome deterministic
/// for a given vote order. Recomputing the leader afterwards by iterating
/// the map would not be: map iteration order is unspecified.
///
/// A tally is scoped to one extraction; nothing persists across scans.
#[derive(Debug, Clone, Default)]
pub struct VoteTally {
    counts: HashMap<Rgb, u32>,
    leader: Option<(Rgb, u32)>,
}

impl VoteTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one vote for `bucket`.
    pub fn cast(&mut self, bucket: Rgb) {
        let count = {
            let entry = self.counts.entry(bucket).or_insert(0);
            *entry += 1;
            *entry
        };
        let takes_lead = match self.leader {
            Some((_, leading)) => count > leading,
            None => true,
        };
        if takes_lead {
            self.leader = Some((bucket, count));
        }
    }

    /// The bucket currently in the lead, if any vote has been cast.
    #[inline]
    pub fn leader(&self) -> Option<Rgb> {
        self.leader.map(|(bucket, _)| bucket)
    }

    /// Vote count of the current leader (0 before the first vote).
    #[inline]
    pub fn leading_count(&self) -> u32 {
        self.leader.map_or(0, |(_, count)| count)
    }

    /// Votes recorded for one bucket so far.
    #[inline]
    pub fn count(&self, bucket: Rgb) -> u32 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Number of distinct buckets that received at least one vote.
    #[inline]
    pub fn distinct_buckets(&self) -> usize {
        self.counts.len()
    }

    /// True before the first vote.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
