//! Pagination Math
//!
//! Pure functions behind the pagination display and the target-page
//! decisions after mutations. Pages are 1-based.

/// Number of pages needed for `total` entries; 0 when the collection is empty
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

pub fn is_first_page(page: usize) -> bool {
    page == 1
}

pub fn is_last_page(page: usize, total: usize, page_size: usize) -> bool {
    let pages = total_pages(total, page_size);
    page == pages && pages > 0
}

/// 1-based index of the first entry on the current page
pub fn first_result(page: usize, page_size: usize) -> usize {
    (page - 1) * page_size + 1
}

/// 1-based index of the last entry on the current page
pub fn last_result(page: usize, page_size: usize, total: usize) -> usize {
    (page * page_size).min(total)
}

/// Keep a requested page inside `[1, total_pages]`
pub fn clamp_page(target: usize, total: usize, page_size: usize) -> usize {
    target.min(total_pages(total, page_size)).max(1)
}

/// Page to show after a create: the new pod sorts to the top under
/// newest-first, to the end of the last page otherwise.
pub fn page_after_add(sort_preference: &str, new_total: usize, page_size: usize) -> usize {
    if sort_preference == "newestFirst" {
        1
    } else {
        total_pages(new_total, page_size).max(1)
    }
}

/// Page to show after a delete: stay put unless the current page fell off
/// the end of the shrunken collection.
pub fn page_after_delete(current_page: usize, new_total: usize, page_size: usize) -> usize {
    current_page.min(total_pages(new_total, page_size)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(15, 5), 3);
        assert_eq!(total_pages(16, 5), 4);
        assert_eq!(total_pages(0, 5), 0);
    }

    #[test]
    fn test_results_range_on_first_page() {
        // 15 entries at size 5 on page 1 reads "1-5 of 15"
        assert_eq!(first_result(1, 5), 1);
        assert_eq!(last_result(1, 5, 15), 5);
    }

    #[test]
    fn test_results_range_advances_with_the_page() {
        // page 2 reads "6-10 of 15"
        assert_eq!(first_result(2, 5), 6);
        assert_eq!(last_result(2, 5, 15), 10);
    }

    #[test]
    fn test_results_range_is_cut_short_on_the_last_page() {
        assert_eq!(first_result(3, 5), 11);
        assert_eq!(last_result(3, 5, 12), 12);
    }

    #[test]
    fn test_page_boundaries() {
        assert!(is_first_page(1));
        assert!(!is_first_page(2));
        assert!(is_last_page(3, 15, 5));
        assert!(!is_last_page(2, 15, 5));
        // an empty collection has no last page
        assert!(!is_last_page(1, 0, 5));
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(7, 15, 5), 3);
        assert_eq!(clamp_page(2, 15, 5), 2);
        assert_eq!(clamp_page(0, 15, 5), 1);
    }

    #[test]
    fn test_page_after_add_newest_first_jumps_to_top() {
        assert_eq!(page_after_add("newestFirst", 16, 5), 1);
    }

    #[test]
    fn test_page_after_add_oldest_first_jumps_to_last_page() {
        assert_eq!(page_after_add("oldestFirst", 16, 5), 4);
        assert_eq!(page_after_add("oldestFirst", 15, 5), 3);
    }

    #[test]
    fn test_page_after_delete_stays_on_current_page() {
        assert_eq!(page_after_delete(2, 14, 5), 2);
    }

    #[test]
    fn test_page_after_delete_leaves_vanished_trailing_page() {
        // deleting the only entry of page 4 lands on the new last page
        assert_eq!(page_after_delete(4, 15, 5), 3);
    }

    #[test]
    fn test_page_after_delete_of_last_pod_lands_on_page_one() {
        assert_eq!(page_after_delete(1, 0, 5), 1);
    }
}
