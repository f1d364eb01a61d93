//! Offset based pagination of list results.

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Limits for page requests
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// A 1-based page number with its size.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Fills in missing parameters and clamps the page size.
    ///
    /// The page number is taken as is, an invalid number is
    /// detected when the page is assembled.
    pub fn new(page: Option<u64>, page_size: Option<u64>, limits: PageLimits) -> Self {
        let max_page_size = limits.max_page_size.max(1);
        let page_size = page_size
            .unwrap_or(limits.default_page_size)
            .clamp(1, max_page_size);
        Self {
            page: page.unwrap_or(1),
            page_size,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            offset: Some(self.page.saturating_sub(1).saturating_mul(self.page_size)),
            limit: Some(self.page_size),
        }
    }

    /// The number of pages for a total count of items.
    ///
    /// An empty result still has a single (empty) page.
    pub fn page_count(&self, count: u64) -> u64 {
        count.div_ceil(self.page_size).max(1)
    }

    pub fn is_valid_for(&self, count: u64) -> bool {
        self.page >= 1 && self.page <= self.page_count(count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, count: u64, items: Vec<T>) -> Self {
        let PageRequest { page, page_size } = request;
        Self {
            count,
            page,
            page_size,
            items,
        }
    }

    fn page_count(&self) -> u64 {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
        }
        .page_count(self.count)
    }

    pub fn next(&self) -> Option<u64> {
        (self.page < self.page_count()).then(|| self.page + 1)
    }

    pub fn previous(&self) -> Option<u64> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        let Self {
            count,
            page,
            page_size,
            items,
        } = self;
        Page {
            count,
            page,
            page_size,
            items: items.into_iter().map(f).collect(),
        }
    }
}
