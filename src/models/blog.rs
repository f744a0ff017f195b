//! Wire representation of blog posts exchanged with the blog API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::blog::{Blog as DomainBlog, NewBlog, UpdateBlog};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// JSON document sent as the `blog` part of create/update requests.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub category: String,
    pub is_published: bool,
}

impl TryFrom<Blog> for DomainBlog {
    type Error = TypeConstraintError;

    fn try_from(blog: Blog) -> Result<Self, Self::Error> {
        DomainBlog::try_new(
            blog.id,
            blog.title,
            blog.sub_title,
            blog.description,
            blog.category,
            blog.image,
            blog.is_published,
            blog.created_at.naive_utc(),
        )
    }
}

impl From<&UpdateBlog> for BlogPayload {
    fn from(update: &UpdateBlog) -> Self {
        Self {
            title: update.title.to_string(),
            sub_title: update.sub_title.to_string(),
            description: update.description.to_string(),
            category: update.category.to_string(),
            is_published: update.is_published,
        }
    }
}

impl From<&NewBlog> for BlogPayload {
    fn from(new_blog: &NewBlog) -> Self {
        Self {
            title: new_blog.title.to_string(),
            sub_title: new_blog.sub_title.to_string(),
            description: new_blog.description.to_string(),
            category: new_blog.category.to_string(),
            is_published: new_blog.is_published,
        }
    }
}
