//! Fixed-size, 1-indexed pagination

/// One window over a result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number actually shown
    pub number: usize,
    /// Always at least 1, even for empty input
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// 1-indexed position of the first item on this page, 0 when empty
    #[must_use]
    pub fn first_position(&self, page_size: usize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * page_size.max(1) + 1
        }
    }
}

/// Number of pages needed for `total` items
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Cut one page out of `items`
///
/// Page numbers are clamped into `1..=total_pages`; a zero page size is treated
/// as one.
///
/// # Examples
/// ```
/// use affix_drill::browse::paginate;
///
/// let items: Vec<u32> = (1..=250).collect();
/// let page = paginate(&items, 3, 100);
/// assert_eq!(page.items.len(), 50);
/// assert_eq!(page.items[0], 201);
/// assert_eq!(page.total_pages, 3);
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = page_count(items.len(), page_size);
    let number = page.clamp(1, total_pages);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let window = items.get(start..end).unwrap_or_default();

    Page {
        items: window.to_vec(),
        number,
        total_pages,
        total_items: items.len(),
    }
}
