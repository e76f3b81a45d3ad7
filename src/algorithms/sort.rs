/// Return a new ascending copy of `arr` using Quick Sort.
///
/// The middle element is the pivot; values are split into less, equal and
/// greater partitions and the outer two are sorted recursively. Recursion
/// depth is at most `arr.len()` (reached when every pivot is an extreme).
pub fn quick_sort(arr: &[i64]) -> Vec<i64> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let pivot = arr[arr.len() / 2];
    let left: Vec<i64> = arr.iter().copied().filter(|&x| x < pivot).collect();
    let middle = arr.iter().copied().filter(|&x| x == pivot);
    let right: Vec<i64> = arr.iter().copied().filter(|&x| x > pivot).collect();

    let mut sorted = quick_sort(&left);
    sorted.extend(middle);
    sorted.extend(quick_sort(&right));
    sorted
}
