//! Validated destination-to-source tile orderings

use bitvec::prelude::*;

/// A validated rearrangement ordering
///
/// Position `i` holds the source tile index that occupies destination grid
/// cell `i`. A value can only be constructed from a sequence that is a
/// permutation of `[0, tile_count)`: exact length, no duplicates, every
/// element in range. Orderings that would read outside the extracted tile
/// set are therefore unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePermutation {
    indices: Vec<usize>,
}

impl TilePermutation {
    /// Validate an ordering against the expected tile count
    ///
    /// Returns `None` unless `ordering` has exactly `tile_count` elements,
    /// contains no duplicate, and every element lies in `[0, tile_count)`.
    pub fn new(ordering: &[usize], tile_count: usize) -> Option<Self> {
        if ordering.len() != tile_count {
            return None;
        }

        let mut seen = bitvec![0; tile_count];
        for &source in ordering {
            if source >= tile_count {
                return None;
            }
            if seen.get(source).as_deref() == Some(&true) {
                return None;
            }
            seen.set(source, true);
        }

        Some(Self {
            indices: ordering.to_vec(),
        })
    }

    /// The ordering that leaves every tile in place
    pub fn identity(tile_count: usize) -> Self {
        Self {
            indices: (0..tile_count).collect(),
        }
    }

    /// Source tile index for a destination cell
    pub fn source_for(&self, destination: usize) -> Option<usize> {
        self.indices.get(destination).copied()
    }

    /// Number of tiles covered by the ordering
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Test whether the ordering covers zero tiles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate source indices in destination order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Ordering equivalent to applying `self` first and then `next`
    ///
    /// Permutations are closed under composition, so the result needs no
    /// re-validation. Returns `None` when the two orderings cover different
    /// tile counts.
    pub fn then(&self, next: &Self) -> Option<Self> {
        if self.len() != next.len() {
            return None;
        }
        let indices = next
            .iter()
            .map(|intermediate| self.source_for(intermediate))
            .collect::<Option<Vec<usize>>>()?;
        Some(Self { indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_permutation() {
        let permutation = TilePermutation::new(&[3, 2, 1, 0], 4);
        assert!(permutation.is_some());
    }

    #[test]
    fn test_rejects_duplicates_and_out_of_range() {
        assert!(TilePermutation::new(&[0, 1, 2, 2], 4).is_none());
        assert!(TilePermutation::new(&[0, 1, 2, 4], 4).is_none());
        assert!(TilePermutation::new(&[0, 1, 2], 4).is_none());
        assert!(TilePermutation::new(&[0, 1, 2, 3, 4], 4).is_none());
    }

    #[test]
    fn test_composition_applies_first_then_second() {
        let Some(first) = TilePermutation::new(&[1, 0, 2, 3], 4) else {
            unreachable!("valid permutation");
        };
        let Some(second) = TilePermutation::new(&[3, 2, 1, 0], 4) else {
            unreachable!("valid permutation");
        };
        let Some(composed) = first.then(&second) else {
            unreachable!("matching lengths");
        };

        // composed[i] = first[second[i]]
        let collected: Vec<usize> = composed.iter().collect();
        assert_eq!(collected, vec![3, 2, 0, 1]);
    }
}
