//! Page requests and pages of results.

/// Fixed number of posts on a listing page.
pub const PER_PAGE: u64 = 15;

/// Highest page number served. Offsets up to this page stay within the
/// `BIGINT` range databases accept for `OFFSET`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PER_PAGE;

/// A normalized request for one page of a listing. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u64,
    per_page: u64,
}

impl PageRequest {
    /// Request page `number`, clamped to `1..=MAX_PAGE`.
    pub fn new(number: u64) -> Self {
        Self {
            number: number.clamp(1, MAX_PAGE),
            per_page: PER_PAGE,
        }
    }

    /// Build a request from a raw `page` query value.
    ///
    /// Missing, non-numeric, zero and negative values all mean page 1.
    /// Numbers past [`MAX_PAGE`] mean the last page.
    pub fn from_param(raw: Option<&str>) -> Self {
        let number = match raw.map(str::trim) {
            Some(value) if is_huge_page(value) => MAX_PAGE,
            Some(value) => value.parse::<u64>().unwrap_or(1),
            None => 1,
        };
        Self::new(number)
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of records to skip before this page.
    pub fn offset(&self) -> u64 {
        (self.number - 1).saturating_mul(self.per_page)
    }
}

/// All-digit values too large for `u64`.
fn is_huge_page(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) && value.parse::<u64>().is_err()
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of results plus the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest) -> Self {
        Self {
            items,
            number: request.number(),
            per_page: request.per_page(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A full page may be followed by more results.
    pub fn has_next(&self) -> bool {
        self.items.len() as u64 >= self.per_page
    }

    pub fn next_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }
}
