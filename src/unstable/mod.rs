pub mod heapsort;
pub mod quicksort;
