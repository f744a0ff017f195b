use serde::Serialize;

use crate::domain::comment::{Comment, CommentStatus};

#[derive(Debug, Clone, Serialize)]
pub struct CommentRow {
    /// 1-based position in the filtered table.
    pub index: usize,
    pub comment: Comment,
}

/// Data required to render the moderation table.
#[derive(Debug, Clone, Serialize)]
pub struct CommentsPageData {
    pub filter: CommentStatus,
    pub comments: Vec<CommentRow>,
}
