//! Jersey size ordering.

/// Canonical display order for jersey sizes.
pub const SIZE_ORDER: &[&str] = &["S", "M", "L", "XL", "XXL"];

/// Position of `size` in [`SIZE_ORDER`].
///
/// Matching is exact (case-sensitive). Sizes outside the sequence rank after
/// every known size.
pub fn size_rank(size: &str) -> usize {
    SIZE_ORDER
        .iter()
        .position(|known| *known == size)
        .unwrap_or(SIZE_ORDER.len())
}

/// Sort items by their size label in display order.
///
/// The sort is stable, so unknown sizes keep the order they arrived in.
pub fn sort_by_size<T, F>(items: &mut [T], size_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_key(|item| size_rank(size_of(item)));
}
