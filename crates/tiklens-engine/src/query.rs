use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tiklens_types::Relationship;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ListOrder {
    /// `-date`
    #[default]
    DateDesc,
    /// `date`
    DateAsc,
    /// `username`
    UsernameAsc,
    /// `-username`
    UsernameDesc,
}

impl ListOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOrder::DateDesc => "-date",
            ListOrder::DateAsc => "date",
            ListOrder::UsernameAsc => "username",
            ListOrder::UsernameDesc => "-username",
        }
    }
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-date" => Ok(ListOrder::DateDesc),
            "date" => Ok(ListOrder::DateAsc),
            "username" => Ok(ListOrder::UsernameAsc),
            "-username" => Ok(ListOrder::UsernameDesc),
            other => Err(format!(
                "unknown order '{}' (expected -date, date, username or -username)",
                other
            )),
        }
    }
}

/// Filter, sort and page a relationship list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub order: ListOrder,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            since: None,
            until: None,
            order: ListOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn matches<T: Relationship>(&self, record: &T) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !record.username().to_lowercase().contains(&needle) {
                return false;
            }
        }

        let date = record.relationship_date();
        if self.since.is_some_and(|since| date < since) {
            return false;
        }
        if self.until.is_some_and(|until| date > until) {
            return false;
        }
        true
    }

    pub fn apply<T: Relationship + Clone>(&self, records: &[T]) -> Page<T> {
        let mut matched: Vec<T> = records.iter().filter(|r| self.matches(*r)).cloned().collect();

        match self.order {
            ListOrder::DateDesc => matched.sort_by(|a, b| {
                b.relationship_date()
                    .cmp(&a.relationship_date())
                    .then_with(|| a.username().cmp(b.username()))
            }),
            ListOrder::DateAsc => matched.sort_by(|a, b| {
                a.relationship_date()
                    .cmp(&b.relationship_date())
                    .then_with(|| a.username().cmp(b.username()))
            }),
            ListOrder::UsernameAsc => matched.sort_by(|a, b| a.username().cmp(b.username())),
            ListOrder::UsernameDesc => matched.sort_by(|a, b| b.username().cmp(a.username())),
        }

        Page::paginate(matched, self.page, self.page_size)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Total matching items across all pages
    pub count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Slice already ordered items. Page 0 is treated as page 1; a page past
    /// the end comes back empty.
    pub fn paginate(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let count = items.len();
        let total_pages = count.div_ceil(page_size);

        let start = (page - 1).saturating_mul(page_size);
        let items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

        Self {
            count,
            page,
            total_pages,
            has_next: page < total_pages,
            items,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            page: self.page,
            total_pages: self.total_pages,
            has_next: self.has_next,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
