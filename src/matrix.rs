use std::ops::{Index, IndexMut};

/// Square matrix with one entry per ordered pair of particles.
///
/// Entries are stored row-major in a flat vector: the entry for the pair `(i, j)` lives at
/// `i * n + j`. Row `i` holds the values computed for particle `i` against every other particle.
/// The diagonal is allocated but never written by the simulation.
///
/// ```
/// # use nbody::matrix::PairMatrix;
/// let mut matrix = PairMatrix::new(3, 0.0);
/// matrix[(1, 2)] = 4.0;
///
/// assert_eq!(matrix.index_of(1, 2), 5);
/// assert_eq!(matrix.as_slice()[5], 4.0);
/// assert_eq!(matrix.row(1), &[0.0, 0.0, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PairMatrix<T> {
    n: usize,
    entries: Vec<T>,
}

impl<T: Copy> PairMatrix<T> {
    /// Creates an `n × n` matrix with every entry set to `value`.
    #[inline]
    pub fn new(n: usize, value: T) -> Self {
        Self {
            n,
            entries: vec![value; n * n],
        }
    }

    /// Returns the entry for the pair `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T> PairMatrix<T> {
    /// Number of rows, which is also the number of columns.
    #[inline]
    pub const fn dim(&self) -> usize {
        self.n
    }

    /// Flat index of the pair `(i, j)`.
    ///
    /// # Panics
    ///
    /// In debug builds, if `i` or `j` is out of bounds.
    #[inline]
    pub fn index_of(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n, "pair ({i}, {j}) out of bounds");
        i * self.n + j
    }

    /// Returns the entries of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.entries[i * self.n..(i + 1) * self.n]
    }

    /// Returns the entries of row `i` mutably.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.entries[i * self.n..(i + 1) * self.n]
    }

    /// Iterates mutably over the rows in order.
    #[inline]
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.entries.chunks_exact_mut(self.n.max(1))
    }

    /// Returns the flat, row-major entries.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    #[cfg(feature = "parallel")]
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.entries
    }
}

impl<T> Index<(usize, usize)> for PairMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.entries[self.index_of(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for PairMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let index = self.index_of(i, j);
        &mut self.entries[index]
    }
}
