//! Page-number pagination with orphan merging.
//!
//! `Paginator` decides how a result set of `count` items splits into pages. A trailing
//! page holding `orphans` items or fewer is folded into the page before it, so a listing
//! never ends on a tiny page. Requested page numbers are clamped rather than rejected.

use std::num::IntErrorKind;

use crate::model::api::PageDto;

/// Trailing items merged into the previous page for every public phone listing.
pub const PAGE_ORPHANS: u64 = 5;

/// Splits `count` items into pages of `per_page`, merging small trailing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u64,
    orphans: u64,
}

/// Offset/limit slice of the underlying result set for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number.
    pub number: u64,
    pub offset: u64,
    pub limit: u64,
}

impl Paginator {
    /// Creates a paginator. A `per_page` of 0 is treated as 1.
    pub fn new(count: u64, per_page: u64, orphans: u64) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
            orphans,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Total number of pages, always at least 1 so an empty listing still has a page.
    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            return 1;
        }
        let hits = self.count.saturating_sub(self.orphans).max(1);
        hits.div_ceil(self.per_page)
    }

    /// Resolves a raw `page` query value into a valid page number.
    ///
    /// Missing or non-numeric values give page 1, values below 1 give page 1, and values
    /// past the end give the last page.
    pub fn clamp(&self, requested: Option<&str>) -> u64 {
        let raw = match requested {
            Some(raw) => raw.trim(),
            None => return 1,
        };

        match raw.parse::<i64>() {
            Ok(number) if number < 1 => 1,
            Ok(number) => (number as u64).min(self.num_pages()),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => self.num_pages(),
            Err(_) => 1,
        }
    }

    /// Offset and limit for the given page. `number` must already be clamped.
    pub fn window(&self, number: u64) -> PageWindow {
        let number = number.clamp(1, self.num_pages());
        let bottom = (number - 1) * self.per_page;
        let mut top = bottom + self.per_page;
        if top + self.orphans >= self.count {
            top = self.count;
        }

        PageWindow {
            number,
            offset: bottom,
            limit: top.saturating_sub(bottom),
        }
    }
}

/// One page of items plus the metadata needed to render pagination links.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow, paginator: &Paginator) -> Self {
        Self {
            items,
            number: window.number,
            num_pages: paginator.num_pages(),
            count: paginator.count(),
            per_page: paginator.per_page(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// 1-based index of the first item on this page, 0 for an empty listing.
    pub fn start_index(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        self.per_page * (self.number - 1) + 1
    }

    /// 1-based index of the last item on this page, 0 for an empty listing.
    pub fn end_index(&self) -> u64 {
        if self.number == self.num_pages {
            return self.count;
        }
        self.number * self.per_page
    }

    /// Converts the item type while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            per_page: self.per_page,
        }
    }

    /// Splits the page into its items and the pagination metadata DTO.
    pub fn into_parts(self) -> (Vec<T>, PageDto) {
        let meta = PageDto {
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            per_page: self.per_page,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        };
        (self.items, meta)
    }
}
