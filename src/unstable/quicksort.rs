//! Basic quicksort, first element as pivot and a two-pointer partition that moves elements into
//! the hole left by the pivot.

use std::cmp::Ordering;
use std::mem;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quick_sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn quick_sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the inclusive range `lo..=hi` of `v` in place. Elements outside of it are not touched.
///
/// Does nothing if `lo >= hi`. Panics if the range is non-empty and `hi >= v.len()`.
#[inline]
pub fn sort_range<T>(v: &mut [T], lo: usize, hi: usize)
where
    T: Ord,
{
    if lo >= hi {
        return;
    }

    unstable_sort(&mut v[lo..=hi], |a, b| a.lt(b));
}

/// Same as [`sort_range`], with a comparator.
#[inline]
pub fn sort_range_by<T, F>(v: &mut [T], lo: usize, hi: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if lo >= hi {
        return;
    }

    unstable_sort(&mut v[lo..=hi], |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = partition(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one, so the stack depth stays
        // within O(log(n)) even for the already sorted worst case.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its first element and returns the final position of that element.
/// Nothing left of it is greater, nothing right of it is less.
///
/// The pivot is never copied out. It sits in the hole and every move into the hole is a swap, so
/// the slice holds the original set of elements at all times, even if `is_less` panics.
///
/// `v.len()` must be at least 2.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = 0;
    let mut j = v.len() - 1;

    while i < j {
        // The pivot is at `i`.
        while j > i && is_less(&v[i], &v[j]) {
            j -= 1;
        }
        if i < j {
            v.swap(i, j);
            i += 1;
        }

        // The pivot is at `j`.
        while i < j && is_less(&v[i], &v[j]) {
            i += 1;
        }
        if i < j {
            v.swap(i, j);
            j -= 1;
        }
    }

    i
}
