//! Contracts of the presentation collaborators.
//!
//! Rendering, toasts, routing and scrolling live outside this crate. The core
//! talks to them through the fire-and-forget traits below.

use crate::listing::BlogListView;

/// Height of the sticky header kept above the blog grid after scrolling.
pub const DEFAULT_HEADER_OFFSET: u32 = 100;

pub const HOME_ROUTE: &str = "/";
pub const ADMIN_ROUTE: &str = "/admin";
pub const ADMIN_ADD_BLOG_ROUTE: &str = "/admin/addBlog";
pub const ADMIN_BLOG_LIST_ROUTE: &str = "/admin/listBlog";
pub const ADMIN_COMMENTS_ROUTE: &str = "/admin/comments";

/// Admin sidebar entries as `(label, route)`.
pub const ADMIN_SIDEBAR: [(&str, &str); 4] = [
    ("Dashboard", ADMIN_ROUTE),
    ("Add Blog", ADMIN_ADD_BLOG_ROUTE),
    ("Blog List", ADMIN_BLOG_LIST_ROUTE),
    ("Comments", ADMIN_COMMENTS_ROUTE),
];

/// User-visible toast notifications.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Client-side router.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Scrolls the element with id `anchor` into view, `offset` pixels below the top.
pub trait Scroller {
    fn scroll_to(&self, anchor: &str, offset: u32);
}

/// Render stage of the public listing; receives every recomputed view.
pub trait ListingObserver {
    fn render(&self, view: &BlogListView);
}

/// Label of the navbar button: `Dashboard` once logged in, `Login` otherwise.
pub fn nav_action_label(is_authenticated: bool) -> &'static str {
    if is_authenticated { "Dashboard" } else { "Login" }
}

/// Footer link scrolling to a category section.
pub fn category_anchor(category: &str) -> String {
    format!("/#{}", category.to_lowercase())
}

/// Collaborators that report through the `log` facade, used by the CLI.
#[cfg(feature = "app")]
pub mod console {
    use super::{ListingObserver, Navigator, Notifier, Scroller};
    use crate::listing::BlogListView;
    use crate::pagination::PageControl;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct LogNotifier;

    impl Notifier for LogNotifier {
        fn success(&self, message: &str) {
            log::info!("{message}");
        }

        fn error(&self, message: &str) {
            log::error!("{message}");
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct LogNavigator;

    impl Navigator for LogNavigator {
        fn navigate(&self, route: &str) {
            log::info!("Navigate to {route}");
        }
    }

    impl Scroller for LogNavigator {
        fn scroll_to(&self, anchor: &str, offset: u32) {
            log::debug!("Scroll to #{anchor} with {offset}px offset");
        }
    }

    /// Prints the listing to stdout.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StdoutRenderer;

    impl ListingObserver for StdoutRenderer {
        fn render(&self, view: &BlogListView) {
            println!("[{}]", view.category);
            for blog in &view.blogs {
                println!("  {} | {} | {}", blog.id, blog.category, blog.title);
            }
            if let Some(message) = view.empty_message {
                println!("  {message}");
            }
            if view.show_pagination {
                let strip: Vec<String> = view
                    .controls
                    .iter()
                    .map(|control| match control {
                        PageControl::Page(page) if *page == view.current_page => {
                            format!("[{page}]")
                        }
                        PageControl::Page(page) => page.to_string(),
                        PageControl::Ellipsis => "...".to_string(),
                    })
                    .collect();
                println!("  {}", strip.join(" "));
            }
            if let Some(summary) = &view.summary {
                println!("  {summary}");
            }
        }
    }
}
