// src/domain/pagination.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
const PAGINATION_BAR_LENGTH: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Article fields a caller may sort by. Anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSortProperty {
    Id,
    Title,
    Hashtag,
    UserId,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
}

impl ArticleSortProperty {
    const ALL: [ArticleSortProperty; 7] = [
        ArticleSortProperty::Id,
        ArticleSortProperty::Title,
        ArticleSortProperty::Hashtag,
        ArticleSortProperty::UserId,
        ArticleSortProperty::CreatedAt,
        ArticleSortProperty::CreatedBy,
        ArticleSortProperty::ModifiedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleSortProperty::Id => "id",
            ArticleSortProperty::Title => "title",
            ArticleSortProperty::Hashtag => "hashtag",
            ArticleSortProperty::UserId => "user_id",
            ArticleSortProperty::CreatedAt => "created_at",
            ArticleSortProperty::CreatedBy => "created_by",
            ArticleSortProperty::ModifiedAt => "modified_at",
        }
    }
}

impl FromStr for ArticleSortProperty {
    type Err = DomainError;

    /// Accepts both `created_at` and `createdAt` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|property| property.as_str().replace('_', "") == normalized)
            .ok_or_else(|| DomainError::validation(format!("unsupported sort property: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub property: ArticleSortProperty,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(property: ArticleSortProperty, direction: Direction) -> Self {
        Self::unsorted().and(property, direction)
    }

    pub fn and(mut self, property: ArticleSortProperty, direction: Direction) -> Self {
        self.orders.push(Order {
            property,
            direction,
        });
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Zero-based page index, page size and sort order supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Sort,
}

impl PageRequest {
    pub fn of(page: u32, size: u32) -> Self {
        Self::with_sort(page, size, Sort::unsorted())
    }

    pub fn of_size(size: u32) -> Self {
        Self::of(0, size)
    }

    /// Sizes outside `1..=MAX_PAGE_SIZE` are clamped.
    pub fn with_sort(page: u32, size: u32, sort: Sort) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::of(0, DEFAULT_PAGE_SIZE)
    }
}

/// One slice of a query result plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: pageable.page(),
            size: pageable.size(),
            total_elements,
        }
    }

    pub fn empty(pageable: &PageRequest) -> Self {
        Self::new(Vec::new(), pageable, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        let pages = self.total_elements.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

/// Page numbers for a pagination bar: a fixed-width window around `current_page`,
/// cut off at `total_pages`.
pub fn pagination_bar_numbers(current_page: u32, total_pages: u32) -> Vec<u32> {
    let start = current_page.saturating_sub(PAGINATION_BAR_LENGTH / 2);
    let end = start.saturating_add(PAGINATION_BAR_LENGTH).min(total_pages);
    (start..end).collect()
}
