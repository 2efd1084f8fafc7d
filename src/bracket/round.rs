use rand::{seq::SliceRandom, Rng};
use std::fmt;

pub const MIN_ROUND_SIZE: usize = 2;

/// Nominal size of a round entering with `count` candidates: the smallest
/// power of two not below `count`, and never below [`MIN_ROUND_SIZE`].
/// Pairing never depends on it, it only labels the round.
pub fn round_size_for(count: usize) -> usize {
    count.max(MIN_ROUND_SIZE).next_power_of_two()
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle_pool<T, R: Rng + ?Sized>(pool: &mut [T], rng: &mut R) {
    pool.shuffle(rng);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundLabel {
    Final,
    Of(usize),
}

impl RoundLabel {
    pub fn from_round_size(round_size: usize) -> Self {
        if round_size <= MIN_ROUND_SIZE {
            Self::Final
        } else {
            Self::Of(round_size)
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Final => write!(f, "final"),
            Self::Of(size) => write!(f, "{size}-way"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{round_size_for, shuffle_pool, RoundLabel};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_round_size_examples() {
        assert_eq!(round_size_for(2), 2);
        assert_eq!(round_size_for(3), 4);
        assert_eq!(round_size_for(11), 16);
        assert_eq!(round_size_for(16), 16);
        assert_eq!(round_size_for(17), 32);
        assert_eq!(round_size_for(1), 2);
    }

    #[test]
    fn test_round_size_is_smallest_power_of_two() {
        for n in 2..=1000usize {
            let size = round_size_for(n);
            assert!(size.is_power_of_two());
            assert!(size >= n);
            assert!(size / 2 < n, "{size} is not the smallest power of two >= {n}");
        }
    }

    #[test]
    fn test_round_label() {
        assert_eq!(RoundLabel::from_round_size(2).to_string(), "final");
        assert_eq!(RoundLabel::from_round_size(4).to_string(), "4-way");
        assert_eq!(RoundLabel::from_round_size(16).to_string(), "16-way");
        assert!(RoundLabel::from_round_size(2).is_final());
    }

    #[test]
    fn test_shuffle_first_position_is_uniform() {
        const SAMPLES: usize = 40_000;
        let rng = &mut ChaCha8Rng::seed_from_u64(11);
        let mut first_counts = [0usize; 4];
        for _ in 0..SAMPLES {
            let mut pool = [0usize, 1, 2, 3];
            shuffle_pool(&mut pool, rng);
            first_counts[pool[0]] += 1;
        }

        let expected = SAMPLES / first_counts.len();
        for count in first_counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 20,
                "first position counts are skewed: {first_counts:?}"
            );
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let rng = &mut ChaCha8Rng::seed_from_u64(3);
        let mut pool = (0..33).collect::<Vec<u32>>();
        shuffle_pool(&mut pool, rng);
        pool.sort();
        assert_eq!(pool, (0..33).collect::<Vec<u32>>());
    }
}
