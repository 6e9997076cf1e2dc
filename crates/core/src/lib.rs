//! Ford-Johnson merge-insertion sort, instrumented to count its own
//! comparisons.
//!
//! The sort works in place on any [`Sequence`] (implemented for `Vec` and
//! `VecDeque`) and reports how many element comparisons it made, which for
//! every input stays within [`theoretical_minimum`].

mod chain;
mod counter;
mod insert;
mod jacobsthal;
mod plan;
mod sequence;
mod verify;

use log::debug;

pub use counter::Comparisons;
pub use jacobsthal::jacobsthal;
pub use plan::insertion_order;
pub use sequence::Sequence;
pub use verify::{is_sorted, theoretical_minimum};

/// A sorted sequence together with the comparisons it took to sort it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted<S> {
    pub sequence: S,
    pub comparisons: usize,
}

/// Sorts `sequence` with the Ford-Johnson merge-insertion algorithm.
///
/// Sequences of zero or one element are returned untouched with zero
/// comparisons.
///
/// # Panics
///
/// Cannot panic for any input. Internal `expect`s guard invariants that hold
/// by construction.
#[must_use]
pub fn sort<S: Sequence>(mut sequence: S) -> Sorted<S> {
    let mut counter = Comparisons::new();
    sort_in_place(&mut sequence, &mut counter);
    Sorted {
        sequence,
        comparisons: counter.count(),
    }
}

/// Same as [`sort`], but sorts through a borrow and adds the comparisons to
/// `counter`.
pub fn sort_in_place<S: Sequence>(sequence: &mut S, counter: &mut Comparisons) {
    let len = sequence.len();
    if len <= 1 {
        return;
    }

    // Step 1: order block pairs level by level, remembering how deep we went.
    let mut level = chain::reduce_chain(sequence, 1, counter);

    // Step 2: one Jacobsthal sequence covers the pending count of every level;
    // level 1 has the most, ceil(len / 2).
    let jacobsthal_seq = jacobsthal(len / 2 + 1);
    debug!("sorting {len} elements: {level} levels, jacobsthal {jacobsthal_seq:?}");

    // Step 3: unwind the levels, inserting each level's pending blocks.
    while level > 0 {
        let block_size = 1usize << (level - 1);
        let num_blocks = len / block_size;
        let num_pending = num_blocks / 2 + num_blocks % 2;
        // A single pending block is b1 and already sits in front of a1.
        if num_pending > 1 {
            insert::insert_pending(sequence, block_size, num_pending, &jacobsthal_seq, counter);
        }
        level -= 1;
    }
}
