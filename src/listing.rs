//! Public blog listing: filtering, pagination state and the page view.
//!
//! Every mutation recomputes the whole pipeline (source, filter, paginate)
//! from the shared [`AppContext`] and hands the result to the render
//! observer. Nothing is cached between renders.

use serde::Serialize;

use crate::context::AppContext;
use crate::domain::blog::Blog;
use crate::domain::category::CategoryFilter;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageControl, PageSummary, Paginated};
use crate::ui::{DEFAULT_HEADER_OFFSET, ListingObserver, Scroller};

/// Element id of the results grid, target of scroll requests.
pub const BLOG_GRID_ANCHOR: &str = "blog-grid";

pub const NO_BLOGS_MESSAGE: &str = "No blogs found. Try a different category or search term.";

/// Case-insensitive substring match on title or category; an empty term matches everything.
pub fn matches_search(blog: &Blog, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    blog.title.to_lowercase().contains(&term)
        || blog.category.as_str().to_lowercase().contains(&term)
}

/// Keeps the blogs passing both the text and the category predicate, in source order.
pub fn filter_blogs(blogs: &[Blog], term: &str, category: &CategoryFilter) -> Vec<Blog> {
    blogs
        .iter()
        .filter(|blog| matches_search(blog, term))
        .filter(|blog| category.matches(&blog.category))
        .cloned()
        .collect()
}

/// Filters selected by the reader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingSettings {
    pub per_page: usize,
    pub header_offset: u32,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_ITEMS_PER_PAGE,
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

/// Everything the render stage needs for one frame of the listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlogListView {
    pub blogs: Vec<Blog>,
    pub category: CategoryFilter,
    pub categories: Vec<CategoryFilter>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Page strip, empty when pagination is hidden.
    pub controls: Vec<PageControl>,
    pub show_pagination: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub summary: Option<PageSummary>,
    pub empty_message: Option<&'static str>,
}

/// Owns the category selection and the current page of the public listing.
///
/// The blog collection and the search term are read from the [`AppContext`]
/// on every recomputation. Changing the category resets the page to 1;
/// changing the search term does not.
pub struct BlogListController<'a> {
    ctx: AppContext,
    settings: ListingSettings,
    scroller: &'a dyn Scroller,
    observer: &'a dyn ListingObserver,
    category: CategoryFilter,
    current_page: usize,
}

impl<'a> BlogListController<'a> {
    pub fn new(
        ctx: AppContext,
        settings: ListingSettings,
        scroller: &'a dyn Scroller,
        observer: &'a dyn ListingObserver,
    ) -> Self {
        Self {
            ctx,
            settings,
            scroller,
            observer,
            category: CategoryFilter::All,
            current_page: 1,
        }
    }

    /// Starts on `category` without rendering.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn filter_state(&self) -> FilterState {
        FilterState {
            category: self.category.clone(),
            search: self.ctx.input(),
        }
    }

    fn filtered(&self) -> Vec<Blog> {
        let blogs = self.ctx.blogs();
        filter_blogs(&blogs, &self.ctx.input(), &self.category)
    }

    pub fn total_pages(&self) -> usize {
        crate::pagination::total_pages(self.filtered().len(), self.settings.per_page)
    }

    /// Selects a category and unconditionally returns to the first page.
    pub fn select_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
        self.current_page = 1;
        self.refresh();
    }

    /// Updates the shared search term. The current page is kept as is.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.ctx.set_input(term);
        self.refresh();
    }

    /// Moves to `page` when it lies in `1..=total_pages`; returns whether it moved.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        self.scroller
            .scroll_to(BLOG_GRID_ANCHOR, self.settings.header_offset);
        self.refresh();
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages() {
            return false;
        }
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.go_to_page(self.current_page - 1)
    }

    /// Pushes the current view to the observer, e.g. after new data arrived.
    pub fn refresh(&self) {
        self.observer.render(&self.view());
    }

    pub fn view(&self) -> BlogListView {
        let filtered = self.filtered();
        let page = Paginated::paginate(&filtered, self.current_page, self.settings.per_page);
        let show_pagination = page.total_pages > 1;

        BlogListView {
            category: self.category.clone(),
            categories: CategoryFilter::options(),
            current_page: self.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            controls: if show_pagination {
                page.pages()
            } else {
                Vec::new()
            },
            show_pagination,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            summary: page.summary(),
            empty_message: (page.total_items == 0).then_some(NO_BLOGS_MESSAGE),
            blogs: page.items,
        }
    }
}
