use serde::Deserialize;
use validator::Validate;

use crate::domain::comment::NewComment;
use crate::domain::types::{BlogId, CommentContent, CommenterName};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for commenting on a blog.
pub struct AddCommentForm {
    /// Identifier of the commented blog.
    pub blog: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub content: String,
}

impl TryFrom<AddCommentForm> for NewComment {
    type Error = FormError;

    fn try_from(form: AddCommentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewComment {
            blog_id: BlogId::new(form.blog).map_err(|_| FormError::InvalidBlogId)?,
            name: CommenterName::new(form.name).map_err(|_| FormError::InvalidName)?,
            content: CommentContent::new(form.content).map_err(|_| FormError::InvalidContent)?,
        })
    }
}
