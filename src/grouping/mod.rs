//! Arranging a level's signups into groups of four.
//!
//! Groups are never stored. They are recomputed from the ordered signup list
//! of a level every time they are needed.

mod resolver;

pub use resolver::*;

use std::num::NonZeroUsize;

/// Number of players in a complete group.
pub const GROUP_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(size) => size,
    None => unreachable!(),
};

/// Result of splitting an ordered list into groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Consecutive groups of exactly `size` items, in input order.
    pub full_groups: Vec<Vec<T>>,
    /// Trailing remainder with fewer than `size` items, if any.
    pub forming_group: Option<Vec<T>>,
}

impl<T> Partition<T> {
    /// Concatenate all groups back into the original order.
    pub fn into_groups(self) -> Vec<T> {
        self.full_groups
            .into_iter()
            .flatten()
            .chain(self.forming_group.into_iter().flatten())
            .collect()
    }
}

/// Split `items` into full groups of `size` plus an optional forming group.
pub fn partition<T: Clone>(items: &[T], size: NonZeroUsize) -> Partition<T> {
    let size = size.get();
    let chunks = items.chunks(size);

    let mut full_groups = Vec::with_capacity(items.len() / size);
    let mut forming_group = None;

    for chunk in chunks {
        if chunk.len() == size {
            full_groups.push(chunk.to_vec());
        } else {
            // only the last chunk can be short
            forming_group = Some(chunk.to_vec());
        }
    }

    Partition {
        full_groups,
        forming_group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let result = partition::<u32>(&[], GROUP_SIZE);
        assert!(result.full_groups.is_empty());
        assert_eq!(result.forming_group, None);
    }

    #[test]
    fn test_fewer_than_four_is_forming() {
        for n in 1..4 {
            let items: Vec<u32> = (0..n).collect();
            let result = partition(&items, GROUP_SIZE);
            assert!(result.full_groups.is_empty());
            assert_eq!(result.forming_group, Some(items));
        }
    }

    #[test]
    fn test_exact_multiple_has_no_forming_group() {
        let items: Vec<u32> = (0..8).collect();
        let result = partition(&items, GROUP_SIZE);
        assert_eq!(result.full_groups, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
        assert_eq!(result.forming_group, None);
    }

    #[test]
    fn test_five_players() {
        let result = partition(&["A", "B", "C", "D", "E"], GROUP_SIZE);
        assert_eq!(result.full_groups, vec![vec!["A", "B", "C", "D"]]);
        assert_eq!(result.forming_group, Some(vec!["E"]));
    }

    #[test]
    fn test_group_counts_for_many_sizes() {
        for n in 0..50usize {
            let items: Vec<usize> = (0..n).collect();
            let result = partition(&items, GROUP_SIZE);

            assert_eq!(result.full_groups.len(), n / 4, "n = {}", n);
            assert!(result.full_groups.iter().all(|g| g.len() == 4));
            match n % 4 {
                0 => assert!(result.forming_group.is_none(), "n = {}", n),
                rem => assert_eq!(result.forming_group.as_ref().map(Vec::len), Some(rem)),
            }
        }
    }

    #[test]
    fn test_partition_is_lossless() {
        for n in 0..30usize {
            let items: Vec<usize> = (100..100 + n).collect();
            assert_eq!(partition(&items, GROUP_SIZE).into_groups(), items);
        }
    }

    #[test]
    fn test_other_group_sizes() {
        let items: Vec<u8> = (0..7).collect();

        let pairs = partition(&items, size(2));
        assert_eq!(pairs.full_groups.len(), 3);
        assert_eq!(pairs.forming_group, Some(vec![6]));

        let singles = partition(&items, size(1));
        assert_eq!(singles.full_groups.len(), 7);
        assert_eq!(singles.forming_group, None);
    }
}
