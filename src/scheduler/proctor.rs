//! Least-loaded proctor assignment.
//!
//! # Algorithm
//!
//! 1. Order candidates by current proctoring load, ascending. The sort is
//!    stable, so equally loaded teachers keep their input order.
//! 2. Walk that order, skipping anyone busy during the window.
//! 3. Each free teacher is recorded busy for the window and has their load
//!    bumped at once, until `count_needed` are picked.
//!
//! When fewer free teachers exist than rooms, fewer proctors are returned.
//! The shortfall is not an error.
//!
//! Load balancing is greedy per slot: fair over many slots, not optimal.

use log::warn;

use super::RunContext;
use crate::models::{ProctorAssignment, Teacher, TimeWindow};

/// Assigns least-loaded, conflict-free proctors to a slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProctorBalancer;

impl ProctorBalancer {
    /// Creates a balancer.
    pub fn new() -> Self {
        Self
    }

    /// Picks up to `count_needed` proctors for `window`.
    ///
    /// Returned assignments are unpaired and ordered by selection.
    pub fn assign(
        &self,
        candidates: &[Teacher],
        count_needed: usize,
        window: &TimeWindow,
        ctx: &mut RunContext,
    ) -> Vec<ProctorAssignment> {
        let mut order: Vec<&Teacher> = candidates.iter().collect();
        order.sort_by_key(|t| ctx.load(&t.id));

        // Picks are recorded as they are made; a repeated ID sees its own pick.
        let mut chosen: Vec<ProctorAssignment> = Vec::with_capacity(count_needed);
        for teacher in order {
            if chosen.len() == count_needed {
                break;
            }
            if ctx.is_busy(&teacher.id, window) {
                continue;
            }
            ctx.record_proctoring(&teacher.id, *window);
            chosen.push(ProctorAssignment::new(teacher));
        }

        if chosen.len() < count_needed {
            warn!(
                "only {} of {} proctors available for {} {}",
                chosen.len(),
                count_needed,
                window.date(),
                window.start.time()
            );
        }

        chosen
    }
}
