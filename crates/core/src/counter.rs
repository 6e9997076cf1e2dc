/// Number of element comparisons performed by one sort invocation.
///
/// Every routine that compares elements takes the counter by `&mut` and bumps
/// it exactly once per comparison, so independent sorts never share state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Comparisons(usize);

impl Comparisons {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparisons recorded so far.
    #[must_use]
    pub fn count(self) -> usize {
        self.0
    }

    /// Returns `a > b`, counting one comparison.
    pub(crate) fn greater<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.0 += 1;
        a > b
    }

    /// Returns `a < b`, counting one comparison.
    pub(crate) fn less<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.0 += 1;
        a < b
    }
}
