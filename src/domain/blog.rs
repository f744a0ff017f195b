use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{
    BlogDescription, BlogId, BlogSubTitle, BlogTitle, ImageUpload, TypeConstraintError,
};

/// One blog post as supplied by the data source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    pub id: BlogId,
    pub title: BlogTitle,
    pub sub_title: Option<String>,
    pub description: String,
    pub category: Category,
    /// Thumbnail URL.
    pub image: Option<String>,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
}

impl Blog {
    /// Builds a blog from raw values coming across the data-source boundary.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        sub_title: Option<String>,
        description: impl Into<String>,
        category: impl Into<Category>,
        image: Option<String>,
        is_published: bool,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: BlogId::new(id)?,
            title: BlogTitle::new(title)?,
            sub_title: sub_title
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            description: description.into(),
            category: category.into(),
            image: image.filter(|s| !s.trim().is_empty()),
            is_published,
            created_at,
        })
    }
}

/// Data required to publish a new [`Blog`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewBlog {
    pub title: BlogTitle,
    pub sub_title: BlogSubTitle,
    pub description: BlogDescription,
    pub category: Category,
    pub is_published: bool,
    pub image: Option<ImageUpload>,
}

/// Replacement values for an existing [`Blog`].
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBlog {
    pub title: BlogTitle,
    pub sub_title: BlogSubTitle,
    pub description: BlogDescription,
    pub category: Category,
    pub is_published: bool,
    /// New thumbnail; `None` keeps the existing one.
    pub image: Option<ImageUpload>,
}

impl From<UpdateBlog> for NewBlog {
    fn from(update: UpdateBlog) -> Self {
        Self {
            title: update.title,
            sub_title: update.sub_title,
            description: update.description,
            category: update.category,
            is_published: update.is_published,
            image: update.image,
        }
    }
}
