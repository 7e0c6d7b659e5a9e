// largest universe the counters accept; keeps every 2^k enumeration and the
// u64 count accumulators comfortably in range (the driver stays at 8 nodes)
pub const MAX_UNIVERSE: usize = 32;

// lazy enumeration of all 2^k subsets of {0..k-1} in ascending bitmask order:
// the empty subset comes first, the full subset last, and the order is the
// same on every run for a given k
#[derive(Clone)]
pub struct Subsets {
    universe: usize,
    next_mask: u64,
    end: u64,
}

impl Subsets {
    pub fn new(universe: usize) -> Self {
        assert!(
            universe <= MAX_UNIVERSE,
            "subset universe of {universe} indices exceeds the supported {MAX_UNIVERSE}"
        );
        Self {
            universe,
            next_mask: 0,
            end: 1 << universe,
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_mask == self.end {
            return None;
        }
        let mask = self.next_mask;
        self.next_mask += 1;

        let mut subset = Vec::with_capacity(mask.count_ones() as usize);
        for i in 0..self.universe {
            if mask & (1 << i) != 0 {
                subset.push(i);
            }
        }
        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_universe() {
        let all = Subsets::new(0).collect::<Vec<_>>();
        assert_eq!(vec![Vec::<usize>::new()], all);
    }

    #[test]
    fn test_two_element_universe() {
        let all = Subsets::new(2).collect::<Vec<_>>();
        assert_eq!(vec![vec![], vec![0], vec![1], vec![0, 1]], all);
    }

    #[test]
    fn test_counts_and_bounds() {
        let all = Subsets::new(4).collect::<Vec<_>>();
        assert_eq!(16, all.len());
        assert!(all[0].is_empty());
        assert_eq!(vec![0, 1, 2, 3], all[15]);

        let distinct = all.iter().collect::<HashSet<_>>();
        assert_eq!(16, distinct.len());
    }

    #[test]
    fn test_indices_ascending() {
        for subset in Subsets::new(5) {
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_restartable() {
        let first = Subsets::new(3).collect::<Vec<_>>();
        let second = Subsets::new(3).collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn test_universe_cap() {
        Subsets::new(MAX_UNIVERSE + 1);
    }
}
