/// Order in which pending blocks `1..=num_pending` are inserted.
///
/// Each Jacobsthal value `j <= num_pending` is emitted first, followed by the
/// indices between it and the previous Jacobsthal value in descending order.
/// Indices above the last usable Jacobsthal value follow, again descending.
/// Inserting in this order keeps every binary search inside a window of
/// `2^k - 1` blocks.
#[must_use]
pub fn insertion_order(num_pending: usize, jacobsthal: &[usize]) -> Vec<usize> {
    if num_pending == 0 || jacobsthal.is_empty() {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(num_pending);
    let mut prev = 0;
    for &j in jacobsthal.iter().filter(|&&j| j > 0 && j <= num_pending) {
        order.push(j);
        order.extend((prev + 1..j).rev());
        prev = j;
    }
    order.extend((prev + 1..=num_pending).rev());
    order
}
