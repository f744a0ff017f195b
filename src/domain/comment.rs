use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BlogId, CommentContent, CommentId, CommenterName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub blog_id: BlogId,
    /// Title of the commented blog when the source resolved it.
    pub blog_title: Option<String>,
    pub name: String,
    pub content: String,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewComment {
    pub blog_id: BlogId,
    pub name: CommenterName,
    pub content: CommentContent,
}

/// Moderation filter of the admin comments table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CommentStatus {
    Approved,
    #[default]
    NotApproved,
}

impl CommentStatus {
    pub fn matches(self, comment: &Comment) -> bool {
        match self {
            CommentStatus::Approved => comment.is_approved,
            CommentStatus::NotApproved => !comment.is_approved,
        }
    }
}

impl Display for CommentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentStatus::Approved => write!(f, "Approved"),
            CommentStatus::NotApproved => write!(f, "Not Approved"),
        }
    }
}
