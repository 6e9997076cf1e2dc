/// Jacobsthal numbers `0, 1, 3, 5, 11, 21, ...` up to `bound`.
///
/// Generation stops at the first value `>= bound`, which is kept as the last
/// element so that every pending index below `bound` has a Jacobsthal value
/// at or above it. The repeated `1` (J(1) = J(2) = 1) appears only once.
/// If the next value would overflow, `usize::MAX` ends the sequence instead.
#[must_use]
pub fn jacobsthal(bound: usize) -> Vec<usize> {
    if bound == 0 {
        return Vec::new();
    }

    let mut seq = vec![0];
    let (mut prev, mut curr) = (0usize, 1usize);
    if curr < bound {
        seq.push(curr);
    }
    loop {
        // Past usize::MAX nothing can exceed the bound, so saturate and stop.
        let Some(next) = prev.checked_mul(2).and_then(|twice| twice.checked_add(curr)) else {
            seq.push(usize::MAX);
            break;
        };
        seq.push(next);
        if next >= bound {
            break;
        }
        prev = curr;
        curr = next;
    }

    if seq.len() > 2 {
        seq.remove(1);
    }
    seq
}
