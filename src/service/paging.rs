//! Offset-based paging over an already sorted list.

/// Publishers returned per page by the listing endpoint.
pub const PUBLISHER_PAGE_SIZE: usize = 3;

pub struct PaginatedList;

impl PaginatedList {
    /// Skip `(page_number - 1) * page_size` items and keep the next `page_size`.
    /// Pages below 1 are read as page 1; pages past the end are empty.
    pub fn create<T>(items: Vec<T>, page_number: i32, page_size: usize) -> Vec<T> {
        let page = page_number.max(1) as usize;
        let skip = (page - 1).saturating_mul(page_size);
        items.into_iter().skip(skip).take(page_size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Vec<i32> {
        (1..=7).collect()
    }

    #[test]
    fn first_page_is_full() {
        assert_eq!(PaginatedList::create(seven(), 1, 3), vec![1, 2, 3]);
    }

    #[test]
    fn last_page_holds_remainder() {
        assert_eq!(PaginatedList::create(seven(), 3, 3), vec![7]);
    }

    #[test]
    fn page_past_end_is_empty() {
        assert!(PaginatedList::create(seven(), 4, 3).is_empty());
    }

    #[test]
    fn zero_and_negative_pages_read_as_first() {
        assert_eq!(PaginatedList::create(seven(), 0, 3), vec![1, 2, 3]);
        assert_eq!(PaginatedList::create(seven(), -5, 3), vec![1, 2, 3]);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        assert!(PaginatedList::create(seven(), i32::MAX, usize::MAX).is_empty());
    }
}
