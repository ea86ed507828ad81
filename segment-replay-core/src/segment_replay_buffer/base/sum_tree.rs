//! Sum tree for prioritized sampling.
//!
//! The tree is a complete binary tree stored in an array of `2 * capacity - 1`
//! nodes. Leaves hold the weights of the slots, internal nodes the sums of
//! their subtrees, so the root holds the total mass.
use rand::Rng;

/// Fixed-capacity map from slots to non-negative weights with proportional sampling.
#[derive(Debug, Clone)]
pub struct SumTree {
    capacity: usize,
    tree: Vec<f64>,
}

impl SumTree {
    /// Creates a tree of `capacity` slots, all with zero weight.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "SumTree needs a positive capacity");
        Self {
            capacity,
            tree: vec![0f64; 2 * capacity - 1],
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn leaf(&self, slot: usize) -> usize {
        assert!(
            slot < self.capacity,
            "slot {} out of range for capacity {}",
            slot,
            self.capacity
        );
        slot + self.capacity - 1
    }

    /// Sets the weight of `slot`.
    ///
    /// Ancestors are recomputed from their children rather than shifted by the
    /// change, so [`total`](Self::total) is exactly the sum of the leaves.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range, `weight` is negative or not finite,
    /// or the total overflows `f64`.
    pub fn set(&mut self, slot: usize, weight: f64) {
        let mut ix = self.leaf(slot);
        assert!(
            weight >= 0.0 && weight.is_finite(),
            "invalid weight {} at slot {}",
            weight,
            slot
        );

        self.tree[ix] = weight;
        while ix > 0 {
            ix = (ix - 1) / 2;
            self.tree[ix] = self.tree[2 * ix + 1] + self.tree[2 * ix + 2];
        }
        assert!(
            self.total().is_finite(),
            "total weight overflows after setting {} at slot {}",
            weight,
            slot
        );
    }

    /// Weight of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn get(&self, slot: usize) -> f64 {
        self.tree[self.leaf(slot)]
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.tree[0]
    }

    /// Iterates over the weights of all slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.tree[self.capacity - 1..].iter().copied()
    }

    /// Slot in which the cumulative mass `mass` falls.
    ///
    /// Never returns a zero-weight slot while [`total`](Self::total) is positive.
    pub fn find(&self, mass: f64) -> usize {
        let mut ix = 0;
        let mut mass = mass;

        loop {
            let left = 2 * ix + 1;
            let right = left + 1;

            if left >= self.tree.len() {
                break;
            }

            if mass < self.tree[left] || self.tree[right] <= 0.0 {
                ix = left;
            } else {
                mass -= self.tree[left];
                ix = right;
            }
        }

        ix + 1 - self.capacity
    }

    /// Draws a slot with probability proportional to its weight.
    ///
    /// When all weights are zero, the slot is drawn uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total = self.total();
        if total <= 0.0 {
            rng.gen_range(0..self.capacity)
        } else {
            self.find(rng.gen::<f64>() * total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SumTree;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sum_tree_find() {
        let data = vec![0.5f64, 0.2, 0.8, 0.3, 1.1, 2.5, 3.9];
        let mut sum_tree = SumTree::new(8);
        for (ix, &p) in data.iter().enumerate() {
            sum_tree.set(ix, p);
        }

        assert_eq!(sum_tree.find(0.0), 0);
        assert_eq!(sum_tree.find(0.4), 0);
        assert_eq!(sum_tree.find(0.5), 1);
        assert_eq!(sum_tree.find(0.6), 1);
        assert_eq!(sum_tree.find(1.2), 2);
        assert_eq!(sum_tree.find(1.6), 3);
        assert_eq!(sum_tree.find(2.0), 4);
        assert_eq!(sum_tree.find(2.8), 4);
        assert_eq!(sum_tree.find(5.0), 5);
        assert_eq!(sum_tree.find(9.0), 6);

        // mass beyond the total falls into the last non-empty slot
        assert_eq!(sum_tree.find(100.0), 6);
    }

    #[test]
    fn test_total_matches_leaves() {
        let mut sum_tree = SumTree::new(7);
        assert_eq!(sum_tree.total(), 0.0);

        let mut rng = StdRng::seed_from_u64(42);
        for k in 0..1000 {
            let slot = sum_tree.sample(&mut rng);
            sum_tree.set(slot, (k % 13) as f64 * 0.37);
            sum_tree.set(k % 7, 1.0 / (k + 1) as f64);
        }

        let sum = sum_tree.iter().sum::<f64>();
        assert!((sum_tree.total() - sum).abs() < 1e-9);

        (0..7).for_each(|slot| sum_tree.set(slot, 0.0));
        assert_eq!(sum_tree.total(), 0.0);
    }

    #[test]
    fn test_get_and_overwrite() {
        let mut sum_tree = SumTree::new(4);
        sum_tree.set(2, 3.0);
        sum_tree.set(2, 1.5);
        sum_tree.set(0, 2.0);

        assert_eq!(sum_tree.get(2), 1.5);
        assert_eq!(sum_tree.get(1), 0.0);
        assert_eq!(sum_tree.total(), 3.5);
        assert_eq!(sum_tree.iter().collect::<Vec<_>>(), vec![2.0, 0.0, 1.5, 0.0]);
    }

    #[test]
    fn test_sampling_ratio() {
        let mut sum_tree = SumTree::new(5);
        sum_tree.set(1, 1.0);
        sum_tree.set(3, 3.0);

        let mut rng = StdRng::seed_from_u64(42);
        let n_samples = 100_000;
        let mut counts = vec![0usize; 5];
        for _ in 0..n_samples {
            counts[sum_tree.sample(&mut rng)] += 1;
        }

        assert_eq!(counts[0] + counts[2] + counts[4], 0);
        let ratio = counts[3] as f64 / counts[1] as f64;
        assert!((ratio - 3.0).abs() < 0.15, "ratio = {}", ratio);
    }

    #[test]
    fn test_sampling_non_power_of_two() {
        let mut sum_tree = SumTree::new(3);
        sum_tree.set(0, 1.0);
        sum_tree.set(1, 2.0);
        sum_tree.set(2, 3.0);

        let mut rng = StdRng::seed_from_u64(7);
        let n_samples = 60_000;
        let mut counts = vec![0usize; 3];
        for _ in 0..n_samples {
            counts[sum_tree.sample(&mut rng)] += 1;
        }

        for (slot, &n) in counts.iter().enumerate() {
            let expected = (slot + 1) as f64 / 6.0;
            let freq = n as f64 / n_samples as f64;
            assert!((freq - expected).abs() < 0.01, "slot {}: {}", slot, freq);
        }
    }

    #[test]
    fn test_zero_total_falls_back_to_uniform() {
        let sum_tree = SumTree::new(4);
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = vec![false; 4];
        for _ in 0..200 {
            seen[sum_tree.sample(&mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic]
    fn test_negative_weight() {
        SumTree::new(2).set(0, -1.0);
    }

    #[test]
    #[should_panic]
    fn test_slot_out_of_range() {
        SumTree::new(2).set(2, 1.0);
    }

    #[test]
    #[should_panic(expected = "slot 4 out of range for capacity 4")]
    fn test_get_out_of_range() {
        SumTree::new(4).get(4);
    }

    #[test]
    #[should_panic(expected = "invalid weight")]
    fn test_infinite_weight() {
        SumTree::new(2).set(0, f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "invalid weight")]
    fn test_nan_weight() {
        SumTree::new(2).set(1, f64::NAN);
    }

    #[test]
    #[should_panic(expected = "total weight overflows")]
    fn test_total_overflow() {
        let mut sum_tree = SumTree::new(3);
        sum_tree.set(0, 1e308);
        sum_tree.set(1, 1e308);
    }
}
