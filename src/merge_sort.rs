use crate::error::SortError;
use crate::merge_sort_builder::MergeSortBuilder;

pub trait MergeSort<T> {
    /// merge_sort_unstable sorts the `Vec<T>` or `[T]` into non-decreasing
    /// order with a partitioned multi-threaded merge sort: the sequence is
    /// split into one contiguous chunk per worker, each chunk is sorted
    /// independently, and the sorted runs are k-way merged back together.
    ///
    /// Equal elements are not kept in their original order, hence
    /// `_unstable`.
    ///
    /// ```
    /// use parmsort::MergeSort;
    ///
    /// let mut values = [3, 1, 2];
    /// values.merge_sort_unstable().unwrap();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn merge_sort_unstable(&mut self) -> Result<(), SortError>;

    fn merge_sort_builder(&'_ mut self) -> MergeSortBuilder<'_, T>;
}

impl<T> MergeSort<T> for Vec<T>
where
    T: Ord + Copy + Send + Sync,
{
    fn merge_sort_unstable(&mut self) -> Result<(), SortError> {
        self.merge_sort_builder().sort()
    }

    fn merge_sort_builder(&'_ mut self) -> MergeSortBuilder<'_, T> {
        MergeSortBuilder::new(self)
    }
}

impl<T> MergeSort<T> for [T]
where
    T: Ord + Copy + Send + Sync,
{
    fn merge_sort_unstable(&mut self) -> Result<(), SortError> {
        self.merge_sort_builder().sort()
    }

    fn merge_sort_builder(&'_ mut self) -> MergeSortBuilder<'_, T> {
        MergeSortBuilder::new(self)
    }
}
