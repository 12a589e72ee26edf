/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place, without auxiliary storage.
///
/// The merge is stable: elements of the left run precede equivalent elements of the right
/// run. Should `is_less` panic, `v` is left holding some permutation of its elements.
pub(crate) fn merge_sorted_runs<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid >= len {
        return;
    }
    // already in order, the common case when appending keys beyond the current maximum
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }
    if len == 2 {
        v.swap(0, 1);
        return;
    }

    // Split the longer run in half and find where its middle element falls in the other
    // run, then rotate the two inner pieces past one another and merge each side.
    let (left_cut, right_cut) = if mid > len - mid {
        let left_cut = mid / 2;
        let pivot = &v[left_cut];
        let right_cut = mid + v[mid..].partition_point(|x| is_less(x, pivot));
        (left_cut, right_cut)
    } else {
        let right_cut = mid + (len - mid) / 2;
        let pivot = &v[right_cut];
        let left_cut = v[..mid].partition_point(|x| !is_less(pivot, x));
        (left_cut, right_cut)
    };

    v[left_cut..right_cut].rotate_left(mid - left_cut);
    let new_mid = left_cut + (right_cut - mid);

    let (front, back) = v.split_at_mut(new_mid);
    merge_sorted_runs(front, left_cut, is_less);
    merge_sorted_runs(back, right_cut - new_mid, is_less);
}
