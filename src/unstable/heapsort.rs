//! Heapsort over an implicit binary max-heap.
//!
//! Two sift-down strategies are available. [`SiftMode::Early`] is the textbook one and the
//! default. [`SiftMode::Exhaustive`] keeps descending along the greater child even when the heap
//! invariant already holds at the current node, which is wasted work, but it reproduces the
//! step count of the classic recursive `adjustHeap` formulation exactly. Both produce the same
//! output with the same swaps.

use std::cmp::Ordering;
use std::mem;

sort_impl!("heapsort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heap_sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, |a, b| compare(a, b) == Ordering::Less, SiftMode::Early);
}

/// Sorts `v` in place, guaranteeing *O*(*n* \* log(*n*)) worst-case and no extra storage.
#[inline]
pub fn heap_sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, |a, b| a.lt(b), SiftMode::Early);
}

/// Sorts `v` in place using the given sift-down strategy and reports how much work was done.
pub fn heap_sort_with_mode<T>(v: &mut [T], mode: SiftMode) -> SiftStats
where
    T: Ord,
{
    heapsort(v, |a, b| a.lt(b), mode)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SiftMode {
    /// Continue down the greater-child path until a leaf, even without a swap.
    Exhaustive,
    /// Stop as soon as the node is not less than its greater child.
    #[default]
    Early,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SiftStats {
    /// Sift-down steps, counted the way a recursive sift counts its invocations. The final step
    /// that finds no child in range is included.
    pub sift_calls: usize,
    pub swaps: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn heapsort<T, F>(v: &mut [T], mut is_less: F, mode: SiftMode) -> SiftStats
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stats = SiftStats::default();

    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return stats;
    }

    let len = v.len();

    // Build the heap. `len / 2` is never a parent, the exhaustive mode still visits it so that
    // its step count matches the recursive formulation.
    let heapify_end = match mode {
        SiftMode::Exhaustive => len / 2 + 1,
        SiftMode::Early => len / 2,
    };
    for i in (0..heapify_end).rev() {
        sift_down(v, i, &mut is_less, mode, &mut stats);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, &mut is_less, mode, &mut stats);
    }

    stats
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(
    v: &mut [T],
    mut node: usize,
    is_less: &mut F,
    mode: SiftMode,
    stats: &mut SiftStats,
) where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        stats.sift_calls += 1;

        // Children of `node`.
        let mut child = 2 * node + 1;

        // Choose the greater child.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if child >= len {
            break;
        }

        if is_less(&v[node], &v[child]) {
            v.swap(node, child);
            stats.swaps += 1;
        } else if mode == SiftMode::Early {
            // The invariant holds at `node`, and below it by construction.
            break;
        }

        node = child;
    }
}
