//! Client-side pagination of fetched tables.

/// One page of a larger list. Pages are 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first row on this page, 0 when empty.
    pub fn first_index(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    pub fn last_index(&self) -> usize {
        self.first_index() + self.items.len().saturating_sub(1)
    }
}

/// Slice `items` into the requested page. `page` is clamped into
/// `1..=total_pages` and an empty list still has one (empty) page.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_and_last_page() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert!(page.has_prev() && page.has_next());
        assert_eq!(page.total_pages, 3);

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert!(!last.has_next());
        assert_eq!((last.first_index(), last.last_index()), (21, 23));
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 0, 2).page, 1);
        let page = paginate(&items, 99, 2);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![5]);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let page = paginate::<u32>(&[], 4, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.first_index(), 0);
        assert!(!page.has_prev() && !page.has_next());
    }

    #[test]
    fn test_zero_per_page_is_treated_as_one() {
        let page = paginate(&[1, 2, 3], 2, 0);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, vec![2]);
    }
}
