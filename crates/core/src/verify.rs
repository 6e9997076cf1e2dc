use crate::sequence::Sequence;

/// Worst-case comparisons Ford-Johnson needs for `n` elements:
/// `sum(k = 1..=n) ceil(log2(3k / 4))` (Knuth, TAOCP vol. 3, 5.3.1).
#[must_use]
pub fn theoretical_minimum(n: usize) -> usize {
    (1..=n).map(|k| ceil_log2(3 * k).saturating_sub(2)).sum()
}

/// Whether `seq` is in non-decreasing order.
#[must_use]
pub fn is_sorted<S: Sequence>(seq: &S) -> bool {
    (1..seq.len()).all(|i| seq.at(i - 1) <= seq.at(i))
}

fn ceil_log2(value: usize) -> usize {
    if value <= 1 {
        return 0;
    }
    (usize::BITS - (value - 1).leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{ceil_log2, is_sorted, theoretical_minimum};

    #[test]
    fn ceil_log2_matches_powers() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(1024), 10);
        assert_eq!(ceil_log2(1025), 11);
    }

    #[test]
    fn known_values() {
        let expected = [0, 0, 1, 3, 5, 7, 10, 13, 16, 19, 22, 26];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(theoretical_minimum(n), want, "n={n}");
        }
        assert_eq!(theoretical_minimum(21), 66);
    }

    #[test]
    fn at_least_information_bound() {
        // ceil(log2(n!)) never exceeds the Ford-Johnson worst case.
        let mut log2_factorial = 0.0f64;
        for n in 1..=200usize {
            #[allow(clippy::cast_precision_loss)]
            let term = (n as f64).log2();
            log2_factorial += term;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let lower = (log2_factorial - 1e-9).ceil() as usize;
            assert!(theoretical_minimum(n) >= lower, "n={n}");
        }
    }

    #[test]
    fn detects_order() {
        assert!(is_sorted(&Vec::<u32>::new()));
        assert!(is_sorted(&vec![7]));
        assert!(is_sorted(&vec![1, 2, 2, 3]));
        assert!(!is_sorted(&vec![1, 3, 2]));
        assert!(is_sorted(&VecDeque::from(vec![0, 0, 5])));
        assert!(!is_sorted(&VecDeque::from(vec![5, 0])));
    }
}
