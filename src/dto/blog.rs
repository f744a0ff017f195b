//! DTOs shaped for the blog reader and the admin blog screens.

use serde::Serialize;

use crate::domain::blog::Blog;
use crate::domain::comment::Comment;
use crate::domain::types::BlogId;
use crate::forms::blog::EditBlogForm;

/// Aggregated data required to render a single blog with its approved comments.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPageData {
    pub blog: Blog,
    pub comments: Vec<Comment>,
}

/// Prefilled editor for an existing blog.
#[derive(Debug, Clone)]
pub struct EditBlogPageData {
    pub id: BlogId,
    pub form: EditBlogForm,
    /// Thumbnail shown until a new one is picked.
    pub existing_image: Option<String>,
}

/// One numbered row of the admin blog table.
#[derive(Debug, Clone, Serialize)]
pub struct AdminBlogRow {
    pub index: usize,
    pub blog: Blog,
}
