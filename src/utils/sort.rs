/// Sorts `ids` in ascending order and removes duplicates.
#[inline]
pub fn sort_dedup(ids: &mut Vec<u32>) {
    ids.sort_unstable();
    ids.dedup();
}

/// Is `ids` sorted in strictly ascending order (hence without duplicates)?
#[inline]
pub fn is_strictly_sorted(ids: &[u32]) -> bool {
    ids.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod test {
    #[test]
    fn sort_dedup_ids() {
        let mut ids = vec![5, 1, 3, 1, 5, 2];
        super::sort_dedup(&mut ids);
        assert_eq!(ids, [1, 2, 3, 5]);
        assert!(super::is_strictly_sorted(&ids));
        assert!(!super::is_strictly_sorted(&[1, 1]));
    }
}
