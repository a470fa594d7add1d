//! Lane dispatcher.
//!
//! Runs [`mix_lane`] over every lane of the work buffer on a short-lived pool
//! of scoped worker threads. Lane indices are handed out by a single atomic
//! counter; the calling thread works as one of the pool members.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use log::trace;

use super::lane::mix_lane;
use crate::params::MemoryLayout;

/// Mixes all `layout.lanes` lanes of `words` and returns once every lane is done.
///
/// Each lane is an exclusive `&mut` sub-slice parked in its own slot. A worker
/// claims index `j` with `fetch_add`, takes the borrow out of slot `j` and
/// mixes it. The counter alone decides which worker owns a lane. The slot
/// mutex only moves the `&mut` borrow to the claiming thread without
/// `unsafe`, and every slot is locked exactly once, so it never blocks.
/// There is no cancellation. A panic in any worker is re-raised here after
/// all workers have stopped.
pub(crate) fn mix_lanes(words: &mut [u32], layout: &MemoryLayout) {
    let slots: Vec<Mutex<Option<&mut [u32]>>> = words
        .chunks_exact_mut(layout.lane_words)
        .map(|lane| Mutex::new(Some(lane)))
        .collect();
    let next = AtomicUsize::new(0);

    let worker = || loop {
        let j = next.fetch_add(1, Ordering::Relaxed);
        let Some(slot) = slots.get(j) else {
            break;
        };

        let claimed = slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(lane) = claimed {
            trace!("mixing lane {j} on {:?}", thread::current().id());
            mix_lane(lane, layout.cost, layout.block_size);
        }
    };

    thread::scope(|scope| {
        for _ in 1..layout.workers {
            scope.spawn(&worker);
        }
        worker();
    });
}
