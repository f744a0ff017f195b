//! Application-wide state shared by the listing, navbar and admin screens.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::domain::blog::Blog;
use crate::domain::types::AuthToken;

#[derive(Debug, Default)]
struct AppState {
    blogs: Vec<Blog>,
    input: String,
    token: Option<AuthToken>,
}

/// Cheaply clonable handle to the shared state.
///
/// The client runs on a single UI thread, so every clone observes the same
/// state and mutations are serialized by the caller.
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    state: Rc<RefCell<AppState>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published blogs as last fetched from the data source.
    pub fn blogs(&self) -> Ref<'_, Vec<Blog>> {
        Ref::map(self.state.borrow(), |state| &state.blogs)
    }

    pub fn set_blogs(&self, blogs: Vec<Blog>) {
        self.state.borrow_mut().blogs = blogs;
    }

    /// Free-text search term typed in the header.
    pub fn input(&self) -> String {
        self.state.borrow().input.clone()
    }

    pub fn set_input(&self, input: impl Into<String>) {
        self.state.borrow_mut().input = input.into();
    }

    pub fn token(&self) -> Option<AuthToken> {
        self.state.borrow().token.clone()
    }

    pub fn set_token(&self, token: AuthToken) {
        self.state.borrow_mut().token = Some(token);
    }

    pub fn clear_token(&self) {
        self.state.borrow_mut().token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().token.is_some()
    }
}
