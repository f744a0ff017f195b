use serde::Deserialize;
use validator::Validate;

use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::category::Category;
use crate::domain::types::{BlogDescription, BlogSubTitle, BlogTitle, ImageUpload};
use crate::forms::FormError;

fn default_category() -> String {
    Category::default().to_string()
}

/// Thumbnail picked in the file input.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUploadForm {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

impl TryFrom<&ImageUploadForm> for ImageUpload {
    type Error = FormError;

    fn try_from(form: &ImageUploadForm) -> Result<Self, Self::Error> {
        ImageUpload::new(form.file_name.as_str(), form.content_type.as_str(), form.size)
            .map_err(FormError::Image)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for creating or editing a blog post.
pub struct EditBlogForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub sub_title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// One of the fixed categories.
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub is_published: bool,
    /// New thumbnail; keeps the existing one when absent.
    #[serde(default)]
    pub image: Option<ImageUploadForm>,
}

impl Default for EditBlogForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            sub_title: String::new(),
            description: String::new(),
            category: default_category(),
            is_published: false,
            image: None,
        }
    }
}

impl From<&Blog> for EditBlogForm {
    /// Prefills the editor with the stored blog.
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.to_string(),
            sub_title: blog.sub_title.clone().unwrap_or_default(),
            description: blog.description.clone(),
            category: blog.category.to_string(),
            is_published: blog.is_published,
            image: None,
        }
    }
}

impl TryFrom<EditBlogForm> for UpdateBlog {
    type Error = FormError;

    fn try_from(form: EditBlogForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let category = Category::from(form.category);
        if !category.is_known() {
            return Err(FormError::InvalidCategory);
        }

        let image = form.image.as_ref().map(ImageUpload::try_from).transpose()?;

        Ok(UpdateBlog {
            title: BlogTitle::new(form.title).map_err(|_| FormError::InvalidTitle)?,
            sub_title: BlogSubTitle::new(form.sub_title).map_err(|_| FormError::InvalidSubTitle)?,
            description: BlogDescription::new(form.description)
                .map_err(|_| FormError::InvalidDescription)?,
            category,
            is_published: form.is_published,
            image,
        })
    }
}

impl TryFrom<EditBlogForm> for NewBlog {
    type Error = FormError;

    fn try_from(form: EditBlogForm) -> Result<Self, Self::Error> {
        UpdateBlog::try_from(form).map(NewBlog::from)
    }
}
