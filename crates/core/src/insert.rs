use log::{debug, trace};

use crate::counter::Comparisons;
use crate::plan::insertion_order;
use crate::sequence::Sequence;

/// Inserts the pending blocks of one level into the main chain.
///
/// The sequence is first rearranged into `[main chain | pending | leftover]`,
/// then each pending block is binary searched into the main chain in
/// Jacobsthal order. The search for pending block `p` only looks at the first
/// `2^k - 1` main-chain blocks, where `k` is the position of the first
/// Jacobsthal value `>= p`.
///
/// # Panics
///
/// Panics if `jacobsthal` has no value `>= num_pending`. The sort builds it
/// from a bound larger than any pending count, so this only fires on a bug.
pub(crate) fn insert_pending<S: Sequence>(
    seq: &mut S,
    block_size: usize,
    num_pending: usize,
    jacobsthal: &[usize],
    counter: &mut Comparisons,
) {
    let total = seq.len();
    let mut pos_pending = seq.stable_partition(|i| is_main_chain(i, block_size, total));
    debug!(
        "block size {block_size}: {} main-chain blocks, {num_pending} pending",
        pos_pending / block_size
    );

    let order = insertion_order(num_pending, jacobsthal);
    for (done, &pend) in order.iter().enumerate() {
        let moved_before = count_smaller_inserted(&order[..done], pend);
        let start = pos_pending + (pend - 1 - moved_before) * block_size;
        let end = start + block_size;

        let window = pending_window(pend, jacobsthal, pos_pending, block_size);
        let dest = search_blocks(seq, end - 1, block_size, window, counter);
        trace!("pending block {pend} at {start}..{end}: window {window} blocks, goes to {dest}");

        if dest < start {
            seq.rotate_block(dest, start, end);
        }
        pos_pending += block_size;
    }
}

/// A block belongs to the main chain when it is complete and odd-numbered,
/// i.e. the larger half of a compared pair.
fn is_main_chain(index: usize, block_size: usize, total: usize) -> bool {
    let block_num = index / block_size;
    (block_num + 1) * block_size <= total && block_num % 2 == 1
}

/// Pending blocks with a smaller index that were inserted before `pend`.
/// Each of them left the pending area, shifting `pend` one block left.
fn count_smaller_inserted(inserted: &[usize], pend: usize) -> usize {
    inserted.iter().filter(|&&p| p < pend).count()
}

/// Main-chain blocks pending block `pend` is searched against. Block 1 is
/// known to precede a1, the smallest main-chain block, so it gets none.
fn pending_window(
    pend: usize,
    jacobsthal: &[usize],
    pos_pending: usize,
    block_size: usize,
) -> usize {
    if pend == 1 {
        return 0;
    }
    search_window(window_exponent(pend, jacobsthal), pos_pending, block_size)
}

fn window_exponent(pend: usize, jacobsthal: &[usize]) -> usize {
    jacobsthal
        .iter()
        .position(|&j| pend <= j)
        .expect("jacobsthal sequence must reach every pending index")
}

/// Number of main-chain blocks the search for a pending block may look at.
fn search_window(k: usize, pos_pending: usize, block_size: usize) -> usize {
    let useful = (1usize << k) - 1;
    useful.min(pos_pending / block_size)
}

/// Binary searches the first `num_blocks` blocks by their last element for
/// the element at `value_at`. Returns the element offset of the first block
/// whose representative is greater, so equal values land after existing ones.
fn search_blocks<S: Sequence>(
    seq: &S,
    value_at: usize,
    block_size: usize,
    num_blocks: usize,
    counter: &mut Comparisons,
) -> usize {
    let value = seq.at(value_at);
    let (mut lo, mut hi) = (0, num_blocks);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if counter.less(value, seq.at(mid * block_size + block_size - 1)) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo * block_size
}
