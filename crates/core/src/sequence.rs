use std::collections::VecDeque;

/// An index-addressable container the sort engine can work on.
///
/// The engine only ever reads single elements by position and moves whole
/// blocks around, so these operations are all a backing container needs.
pub trait Sequence {
    type Item: Ord;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn at(&self, index: usize) -> &Self::Item;

    /// Exchanges `[left, left + len)` with `[right, right + len)` element for
    /// element. The ranges must not overlap and `left` must come first.
    /// Costs O(len).
    fn swap_blocks(&mut self, left: usize, right: usize, len: usize);

    /// Moves `[start, end)` so that it begins at `dest`, shifting
    /// `[dest, start)` right by `end - start`. Requires `dest <= start <= end`.
    fn rotate_block(&mut self, dest: usize, start: usize, end: usize);

    /// Moves every element whose index satisfies `front` ahead of the others,
    /// keeping the relative order within both groups. Returns how many
    /// elements ended up in front.
    fn stable_partition<F>(&mut self, front: F) -> usize
    where
        F: FnMut(usize) -> bool;
}

impl<T: Ord> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_blocks(&mut self, left: usize, right: usize, len: usize) {
        debug_assert!(left + len <= right, "blocks overlap");
        let (head, tail) = self.split_at_mut(right);
        head[left..left + len].swap_with_slice(&mut tail[..len]);
    }

    fn rotate_block(&mut self, dest: usize, start: usize, end: usize) {
        debug_assert!(dest <= start && start <= end);
        self[dest..end].rotate_right(end - start);
    }

    fn stable_partition<F>(&mut self, mut front: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let total = self.as_slice().len();
        let mut head = Vec::with_capacity(total);
        let mut tail = Vec::with_capacity(total);
        for (i, item) in std::mem::take(self).into_iter().enumerate() {
            if front(i) {
                head.push(item);
            } else {
                tail.push(item);
            }
        }
        let split = head.len();
        head.append(&mut tail);
        *self = head;
        split
    }
}

impl<T: Ord> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_blocks(&mut self, left: usize, right: usize, len: usize) {
        debug_assert!(left + len <= right, "blocks overlap");
        for offset in 0..len {
            self.swap(left + offset, right + offset);
        }
    }

    fn rotate_block(&mut self, dest: usize, start: usize, end: usize) {
        debug_assert!(dest <= start && start <= end);
        self.make_contiguous()[dest..end].rotate_right(end - start);
    }

    fn stable_partition<F>(&mut self, mut front: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let mut head = VecDeque::with_capacity(VecDeque::len(self));
        let mut tail = VecDeque::new();
        for (i, item) in std::mem::take(self).into_iter().enumerate() {
            if front(i) {
                head.push_back(item);
            } else {
                tail.push_back(item);
            }
        }
        let split = head.len();
        head.append(&mut tail);
        *self = head;
        split
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::Sequence;

    #[test]
    fn vec_swaps_disjoint_blocks() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7];
        v.swap_blocks(1, 4, 2);
        assert_eq!(v, vec![1, 5, 6, 4, 2, 3, 7]);
    }

    #[test]
    fn deque_swaps_disjoint_blocks() {
        let mut d: VecDeque<_> = (1..=7).collect();
        d.swap_blocks(0, 2, 2);
        assert_eq!(d, VecDeque::from(vec![3, 4, 1, 2, 5, 6, 7]));
    }

    #[test]
    fn rotate_moves_block_left() {
        let mut v = vec![10, 20, 30, 40, 1, 2, 50];
        v.rotate_block(1, 4, 6);
        assert_eq!(v, vec![10, 1, 2, 20, 30, 40, 50]);

        let mut d: VecDeque<_> = VecDeque::from(vec![10, 20, 30, 40, 1, 2, 50]);
        d.rotate_block(1, 4, 6);
        assert_eq!(d, VecDeque::from(vec![10, 1, 2, 20, 30, 40, 50]));
    }

    #[test]
    fn rotate_in_place_is_noop() {
        let mut v = vec![1, 2, 3];
        v.rotate_block(1, 1, 3);
        assert_eq!(v, vec![1, 2, 3]);

        let mut d = VecDeque::from(vec![1, 2, 3]);
        d.rotate_block(1, 1, 3);
        assert_eq!(d, VecDeque::from(vec![1, 2, 3]));
    }

    #[test]
    fn rotate_across_deque_wraparound() {
        // Push to the front so the ring buffer's contents wrap.
        let mut d = VecDeque::with_capacity(8);
        d.extend([30, 40, 1, 2, 50]);
        d.push_front(20);
        d.push_front(10);
        d.rotate_block(1, 4, 6);
        assert_eq!(d, VecDeque::from(vec![10, 1, 2, 20, 30, 40, 50]));
    }

    #[test]
    fn partition_keeps_relative_order() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e', 'f'];
        let split = v.stable_partition(|i| i % 2 == 1);
        assert_eq!(split, 3);
        assert_eq!(v, vec!['b', 'd', 'f', 'a', 'c', 'e']);

        let mut d: VecDeque<_> = "abcdef".chars().collect();
        let split = d.stable_partition(|i| i >= 4);
        assert_eq!(split, 2);
        assert_eq!(d.into_iter().collect::<String>(), "efabcd");
    }

    #[test]
    fn works_without_clone() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Token(u8);

        let mut v = vec![Token(3), Token(1), Token(2)];
        v.swap_blocks(0, 1, 1);
        v.rotate_block(0, 2, 3);
        assert_eq!(v, vec![Token(2), Token(1), Token(3)]);
    }
}
