//! Sorts the classic sample input with each algorithm and prints the result, one value per line.

use classic_sort::unstable::{heapsort, quicksort};
use classic_sort::Sort;

use sort_test_tools::patterns::DEMO_INPUT;

fn print_sorted<S: Sort>(sort_fn: impl FnOnce(&mut [i32])) {
    let mut v = DEMO_INPUT;
    sort_fn(&mut v[..]);

    println!("{}:", S::name());
    for val in v {
        println!("{val}");
    }
}

fn main() {
    print_sorted::<heapsort::SortImpl>(heapsort::heap_sort::<i32>);
    print_sorted::<quicksort::SortImpl>(|v| quicksort::sort_range(v, 0, DEMO_INPUT.len() - 1));
}
