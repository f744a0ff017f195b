use std::fmt::Display;

use serde::Serialize;

/// Number of blogs shown on one listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Number of pages needed for `total_items`; zero when there is nothing to show.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}

/// One entry of the page-number strip.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

/// Page-number controls for `current_page` out of `total_pages`.
///
/// The first page, the last page and the neighbours of the current page are
/// shown; pages exactly two steps away collapse into an ellipsis and anything
/// further out is omitted.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageControl> {
    let mut controls = Vec::new();

    for page in 1..=total_pages {
        if page == 1 || page == total_pages || page.abs_diff(current_page) <= 1 {
            controls.push(PageControl::Page(page));
        } else if page + 2 == current_page || page == current_page + 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls
}

/// Footer metadata: "Showing X - Y of Z blogs".
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PageSummary {
    pub first_index_shown: usize,
    pub last_index_shown: usize,
    pub total_items: usize,
}

impl Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} - {} of {} blogs",
            self.first_index_shown, self.last_index_shown, self.total_items
        )
    }
}

/// One page sliced out of an already filtered sequence.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T: Clone> Paginated<T> {
    /// Slices `items[(page - 1) * per_page .. page * per_page]`.
    ///
    /// The requested page is not clamped: a page outside `1..=total_pages`
    /// produces an empty slice with the same metadata.
    pub fn paginate(items: &[T], page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();

        let slice: &[T] = if page == 0 {
            &[]
        } else {
            let start = (page - 1).saturating_mul(per_page).min(total_items);
            let end = page.saturating_mul(per_page).min(total_items);
            &items[start..end]
        };

        Self {
            items: slice.to_vec(),
            page,
            per_page,
            total_items,
            total_pages: total_pages(total_items, per_page),
        }
    }
}

impl<T> Paginated<T> {
    /// Footer metadata, `None` when nothing matched.
    pub fn summary(&self) -> Option<PageSummary> {
        if self.total_items == 0 {
            return None;
        }
        let last_index = self.page.saturating_mul(self.per_page);
        Some(PageSummary {
            first_index_shown: last_index.saturating_sub(self.per_page) + 1,
            last_index_shown: last_index.min(self.total_items),
            total_items: self.total_items,
        })
    }

    pub fn pages(&self) -> Vec<PageControl> {
        page_window(self.total_pages, self.page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
