//! Owned storage for committed entries, and the allocation seam the parser
//! grows its buffers through.
use std::slice;
use std::vec;

use thiserror::Error;

/// A buffer could not be grown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("failed to reserve {requested} additional element(s)")]
pub struct AllocError {
    /// Number of additional elements that were requested.
    pub requested: usize,
}

/// Fallible growth for the buffers owned by the line reader and the parser.
///
/// The global allocator aborts the process on exhaustion, so every growth
/// step goes through this trait instead of `Vec::reserve`. A refusal is
/// handled locally: the reader truncates the line, the parser drops the
/// entry. [`SystemAllocator`] is the production implementation.
#[cfg_attr(test, mockall::automock)]
pub trait Allocator {
    /// Reserve room for `additional` more bytes in a line buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow.
    fn grow_line(&self, buf: &mut Vec<u8>, additional: usize) -> Result<(), AllocError>;

    /// Reserve room for `additional` more committed pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the backing storage cannot grow.
    fn grow_pairs(&self, pairs: &mut Vec<Pair>, additional: usize) -> Result<(), AllocError>;
}

/// [`Allocator`] backed by `Vec::try_reserve_exact`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn grow_line(&self, buf: &mut Vec<u8>, additional: usize) -> Result<(), AllocError> {
        buf.try_reserve_exact(additional)
            .map_err(|_| AllocError {
                requested: additional,
            })
    }

    fn grow_pairs(&self, pairs: &mut Vec<Pair>, additional: usize) -> Result<(), AllocError> {
        pairs
            .try_reserve_exact(additional)
            .map_err(|_| AllocError {
                requested: additional,
            })
    }
}

/// One committed entry.
///
/// # Examples
///
/// ```
/// use arcus_cli::config::arcus::Pair;
///
/// let pair = Pair::new("neovim", "sudo pacman -S neovim");
/// assert_eq!(pair.key, "neovim");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Entry key (package or variable name).
    pub key: String,
    /// Entry value (install command or variable value).
    pub value: String,
}

impl Pair {
    /// Build a pair from anything string-like.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of committed pairs, in file order.
///
/// The list owns every pair and both strings inside it. Its length is the
/// entry count; there is no separate counter to keep in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList {
    pairs: Vec<Pair>,
}

impl PairList {
    /// An empty list with no backing storage.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Number of committed pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when nothing was committed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of slots currently allocated.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// The pair at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// Iterate pairs in file order.
    pub fn iter(&self) -> slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Borrow the pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Pair] {
        &self.pairs
    }

    /// Free every pair, both strings of each, and the backing storage.
    ///
    /// The list is empty afterwards and may be reused. Calling this on a
    /// list that never held anything is a no-op.
    pub fn release(&mut self) {
        self.pairs = Vec::new();
    }

    /// Append `pair`, growing storage by exactly one slot first.
    ///
    /// On refusal the pair is handed back untouched and the list is
    /// unchanged.
    pub(super) fn try_push(
        &mut self,
        pair: Pair,
        alloc: &dyn Allocator,
    ) -> Result<(), (AllocError, Pair)> {
        if let Err(err) = alloc.grow_pairs(&mut self.pairs, 1) {
            return Err((err, pair));
        }
        self.pairs.push(pair);
        Ok(())
    }
}

impl IntoIterator for PairList {
    type Item = Pair;
    type IntoIter = vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a Pair;
    type IntoIter = slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl FromIterator<Pair> for PairList {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
