//! Sorting and median estimation over small sample buffers
//!
//! Everything here works in place on the caller's slice and never allocates,
//! so it is usable on targets without a heap.

/// Number of elements per group in [`median_of_medians`]
pub const GROUP_SIZE: usize = 5;

/// Largest number of group medians that is finished with a full sort
///
/// Above this, [`median_of_medians`] recurses on the group medians instead.
pub const MAX_MEDIANS: usize = 25;

/// How a buffer of samples is reduced to one representative value
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MedianStrategy {
    /// Fully sort the buffer and take the middle element (exact)
    #[default]
    Sort,
    /// Median of medians over groups of [`GROUP_SIZE`] (approximate, fewer comparisons)
    MedianOfMedians,
}

impl MedianStrategy {
    /// Reduces `samples` to a single value, reordering the slice in the process
    ///
    /// Returns [`None`] if `samples` is empty.
    pub fn representative<T: PartialOrd + Copy>(self, samples: &mut [T]) -> Option<T> {
        match self {
            Self::Sort => median(samples),
            Self::MedianOfMedians => median_of_medians(samples),
        }
    }
}

/// Sorts `a` ascending with a bubble sort that stops after the first pass without swaps
///
/// Returns the number of passes made. Already sorted input takes a single pass,
/// and slices shorter than two elements take none.
pub fn sort<T: PartialOrd>(a: &mut [T]) -> usize {
    let len = a.len();
    let mut passes = 0;

    for i in 0..len.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;

        for o in 0..len - (i + 1) {
            if a[o] > a[o + 1] {
                a.swap(o, o + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    passes
}

/// Sorts only the inclusive index range `[min, max]` of `a`, like [`sort`]
///
/// Elements outside the range are left where they are.
/// Returns the number of passes made; an empty or single-element range makes none.
///
/// # Panics
///
/// Panics if `min < max` and `max` is out of bounds for `a`.
pub fn partial_sort<T: PartialOrd>(a: &mut [T], min: usize, max: usize) -> usize {
    if min >= max {
        return 0;
    }

    sort(&mut a[min..=max])
}

/// Exact median of `a`: the element at `len / 2` after sorting
///
/// For even lengths this picks the upper of the two middle elements,
/// which is the convention used throughout this crate.
/// Returns [`None`] if `a` is empty.
pub fn median<T: PartialOrd + Copy>(a: &mut [T]) -> Option<T> {
    if a.is_empty() {
        return None;
    }

    sort(a);
    Some(a[a.len() / 2])
}

/// Approximate median of `a` using the median of medians
///
/// The slice is split into consecutive groups of [`GROUP_SIZE`], each group is sorted
/// and its middle element is moved to the front of the slice. While there are more than
/// [`MAX_MEDIANS`] group medians, the same step repeats on them; the remaining medians are
/// then fully sorted and their middle element returned.
///
/// A trailing group shorter than [`GROUP_SIZE`] is its own group, so every sample takes part.
/// Returns [`None`] if `a` is empty.
pub fn median_of_medians<T: PartialOrd + Copy>(a: &mut [T]) -> Option<T> {
    if a.is_empty() {
        return None;
    }

    let len = a.len();
    let groups = len.div_ceil(GROUP_SIZE);

    for g in 0..groups {
        let start = g * GROUP_SIZE;
        let end = (start + GROUP_SIZE).min(len);

        partial_sort(a, start, end - 1);

        // Slots below `start` belong to groups that are already done
        a.swap(g, start + (end - start) / 2);
    }

    let medians = &mut a[..groups];
    if groups > MAX_MEDIANS {
        median_of_medians(medians)
    } else {
        median(medians)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    /// Number of randomized trials for the approximate median tests
    const TRIALS: usize = 200;

    /// Reference median computed with the standard library sort
    fn true_median(data: &[i32]) -> i32 {
        let mut sorted = data.to_vec();
        sorted.sort_unstable();
        sorted[sorted.len() / 2]
    }

    fn random_data(rng: &mut StdRng, len: usize) -> Vec<i32> {
        (0..len).map(|_| rng.gen_range(0..4096)).collect()
    }

    #[test]
    fn sort_orders_ascending() {
        let mut data = [5, 1, 4, 2, 3, 9, 0];
        sort(&mut data);
        assert_eq!(data, [0, 1, 2, 3, 4, 5, 9]);
    }

    #[test]
    fn sort_sorted_is_single_pass() {
        let mut data = [1, 2, 2, 3, 7, 8, 10];
        let passes = sort(&mut data);

        assert_eq!(passes, 1);
        assert_eq!(data, [1, 2, 2, 3, 7, 8, 10]);
    }

    #[test]
    fn sort_reversed_takes_every_pass() {
        let mut data = [6, 5, 4, 3, 2, 1];
        let passes = sort(&mut data);

        assert_eq!(passes, 5);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sort_trivial_slices() {
        let mut empty: [i32; 0] = [];
        assert_eq!(sort(&mut empty), 0);

        let mut one = [42];
        assert_eq!(sort(&mut one), 0);
        assert_eq!(one, [42]);
    }

    #[test]
    fn partial_sort_leaves_outside_untouched() {
        let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        partial_sort(&mut data, 5, 9);
        assert_eq!(data, [9, 8, 7, 6, 5, 0, 1, 2, 3, 4]);

        partial_sort(&mut data, 1, 3);
        assert_eq!(data, [9, 6, 7, 8, 5, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn partial_sort_degenerate_range() {
        let mut data = [3, 2, 1];
        assert_eq!(partial_sort(&mut data, 1, 1), 0);
        assert_eq!(partial_sort(&mut data, 2, 0), 0);
        assert_eq!(data, [3, 2, 1]);
    }

    #[test]
    fn median_matches_reference_on_odd_lengths() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for len in (1..=101).step_by(2) {
            let data = random_data(&mut rng, len);
            let mut scratch = data.clone();

            assert_eq!(median(&mut scratch), Some(true_median(&data)), "len {len}");
        }
    }

    #[test]
    fn median_even_length_takes_upper_middle() {
        let mut data = [4, 1, 3, 2];
        assert_eq!(median(&mut data), Some(3));
    }

    #[test]
    fn median_empty() {
        let mut empty: [u16; 0] = [];
        assert_eq!(median(&mut empty), None);
        assert_eq!(median_of_medians(&mut empty), None);
    }

    #[test]
    fn median_of_medians_small_inputs() {
        assert_eq!(median_of_medians(&mut [7]), Some(7));
        assert_eq!(median_of_medians(&mut [3, 1, 2]), Some(2));
        assert_eq!(median_of_medians(&mut [5, 1, 4, 2, 3]), Some(3));
    }

    #[test]
    fn median_of_medians_default_sample_count() {
        // Five groups whose medians are 30, 10, 50, 20, 40
        let mut data = [
            30, 31, 29, 0, 99, //
            10, 11, 9, 0, 99, //
            50, 51, 49, 0, 99, //
            20, 21, 19, 0, 99, //
            40, 41, 39, 0, 99,
        ];
        assert_eq!(median_of_medians(&mut data), Some(30));
    }

    #[test]
    fn median_of_medians_keeps_trailing_group() {
        // Group medians are 1, 2, 0 and 100 for the two trailing samples.
        // Without the trailing group the result would be 1.
        let mut data = [
            1, 1, 1, 1, 1, //
            2, 2, 2, 2, 2, //
            0, 0, 0, 0, 0, //
            100, 100,
        ];
        assert_eq!(median_of_medians(&mut data), Some(2));
    }

    #[test]
    fn median_of_medians_recurses_on_large_inputs() {
        // 1000 samples -> 200 group medians -> 40 -> final sort
        let mut data: Vec<i32> = (0..1000).rev().collect();
        let m = median_of_medians(&mut data).unwrap();
        assert!((300..700).contains(&m), "got {m}");
    }

    #[test]
    fn median_of_medians_within_middle_percentiles() {
        let mut rng = StdRng::seed_from_u64(0xdecafbad);

        for _ in 0..TRIALS {
            let len = rng.gen_range(500..2000);
            let data = random_data(&mut rng, len);
            let mut scratch = data.clone();
            let m = median_of_medians(&mut scratch).unwrap();

            let below = data.iter().filter(|&&v| v < m).count();
            let at_or_below = data.iter().filter(|&&v| v <= m).count();

            // Duplicates make the rank a range, which only has to overlap [30%, 70%]
            assert!(at_or_below * 10 >= len * 3, "rank too low for len {len}");
            assert!(below * 10 <= len * 7, "rank too high for len {len}");
        }
    }

    #[test]
    fn strategy_dispatch() {
        let mut a = [9, 3, 7, 1, 5];
        let mut b = a;

        assert_eq!(MedianStrategy::Sort.representative(&mut a), Some(5));
        assert_eq!(MedianStrategy::MedianOfMedians.representative(&mut b), Some(5));
        assert_eq!(MedianStrategy::default(), MedianStrategy::Sort);
    }
}
