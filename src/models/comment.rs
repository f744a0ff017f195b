//! Wire representation of reader comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::comment::Comment as DomainComment;
use crate::domain::types::{BlogId, CommentId, TypeConstraintError};

/// The API returns the blog either as a bare id or populated with its title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentBlog {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        title: Option<String>,
    },
}

impl CommentBlog {
    pub fn id(&self) -> &str {
        match self {
            CommentBlog::Id(id) => id,
            CommentBlog::Populated { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub blog: CommentBlog,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<Comment> for DomainComment {
    type Error = TypeConstraintError;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        let (blog_id, blog_title) = match comment.blog {
            CommentBlog::Id(id) => (id, None),
            CommentBlog::Populated { id, title } => (id, title),
        };

        Ok(DomainComment {
            id: CommentId::new(comment.id)?,
            blog_id: BlogId::new(blog_id)?,
            blog_title,
            name: comment.name,
            content: comment.content,
            is_approved: comment.is_approved,
            created_at: comment.created_at.naive_utc(),
        })
    }
}
