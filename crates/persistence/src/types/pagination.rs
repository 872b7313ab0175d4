//! Page-number pagination over an already filtered and sorted sequence.
//!
//! [`PageComputer`] clamps the requested page size, counts the sequence once,
//! and takes a single slice out of it. The resulting [`Page`] carries the
//! items together with count metadata derived from the same sequence, so the
//! two can never drift apart.

/// A bounded slice of an ordered result set plus the counts needed to reach
/// the other pages.
///
/// Fields are private so the derived values (`total_pages`, `has_next`,
/// `has_previous`) always agree with the counts they come from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    total_count: usize,
    page_size: usize,
    current_page: i64,
    total_pages: usize,
    has_next: bool,
    has_previous: bool,
}

impl<T> Page<T> {
    /// The items on this page, in sequence order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of elements in the full sequence.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Page size after clamping.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The requested page number, as given.
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// `ceil(total_count / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True when `current_page < total_pages`.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// True when `current_page > 1`.
    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Returns true if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slices sequences into pages for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageComputer {
    max_page_size: usize,
}

impl PageComputer {
    /// Creates a computer that never returns more than `max_page_size` items.
    ///
    /// A maximum of zero is treated as one.
    pub fn new(max_page_size: usize) -> Self {
        Self {
            max_page_size: max_page_size.max(1),
        }
    }

    /// The upper bound on page size.
    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    /// Clamps a requested page size into `[1, max_page_size]`.
    pub fn clamp_page_size(&self, requested: i64) -> usize {
        let max = i64::try_from(self.max_page_size).unwrap_or(i64::MAX);
        // Bounded to [1, max], so the conversion back cannot fail.
        usize::try_from(requested.clamp(1, max)).unwrap_or(1)
    }

    /// Builds the page `page` of `sequence`.
    ///
    /// Page numbers below 1 produce an empty item list while the counts still
    /// describe the whole sequence.
    pub fn create<T>(&self, sequence: Vec<T>, page: i64, page_size: i64) -> Page<T> {
        let page_size = self.clamp_page_size(page_size);
        let total_count = sequence.len();
        let total_pages = total_count.div_ceil(page_size);

        let items = if page < 1 {
            Vec::new()
        } else {
            let skip = usize::try_from(page - 1)
                .unwrap_or(usize::MAX)
                .saturating_mul(page_size);
            sequence.into_iter().skip(skip).take(page_size).collect()
        };

        let has_next = i128::from(page) < total_pages as i128;

        Page {
            items,
            total_count,
            page_size,
            current_page: page,
            total_pages,
            has_next,
            has_previous: page > 1,
        }
    }
}
