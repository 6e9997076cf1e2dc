use log::{debug, trace};

use crate::counter::Comparisons;
use crate::sequence::Sequence;

/// Pairs up blocks of `2^(level - 1)` elements, orders each pair by its last
/// element, then recurses with doubled blocks until at most one block fits.
///
/// Returns the deepest level at which blocks were compared (0 when the
/// sequence has fewer than two elements). A trailing run too short to form a
/// full pair is never touched here; it is handled during insertion.
///
/// One comparison is counted per compared pair. Swapping two blocks costs
/// O(block size) element moves.
pub(crate) fn reduce_chain<S: Sequence>(
    seq: &mut S,
    level: u32,
    counter: &mut Comparisons,
) -> u32 {
    let block_size = 1usize << (level - 1);
    let num_blocks = seq.len() / block_size;
    if num_blocks <= 1 {
        return level - 1;
    }

    let stride = 2 * block_size;
    let mut start = 0;
    while start + stride <= seq.len() {
        let left_last = start + block_size - 1;
        let right_last = start + stride - 1;
        if counter.greater(seq.at(left_last), seq.at(right_last)) {
            trace!("level {level}: swapping blocks at {start} and {}", start + block_size);
            seq.swap_blocks(start, start + block_size, block_size);
        }
        start += stride;
    }
    debug!(
        "level {level}: compared {} block pairs of size {block_size}",
        num_blocks / 2
    );

    reduce_chain(seq, level + 1, counter)
}
