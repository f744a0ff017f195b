use crate::context::AppContext;
use crate::domain::comment::{Comment, NewComment};
use crate::domain::types::BlogId;
use crate::dto::blog::BlogPageData;
use crate::forms::comment::AddCommentForm;
use crate::repository::{BlogReader, CommentReader, CommentWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::ui::Notifier;

/// Fetches the published blogs into the shared context and returns how many arrived.
pub fn fetch_blogs<R>(ctx: &AppContext, repo: &R, notifier: &dyn Notifier) -> ServiceResult<usize>
where
    R: BlogReader + ?Sized,
{
    let blogs = repo.list_blogs().map_err(|err| {
        log::error!("Failed to fetch blogs: {err}");
        notifier.error(err.user_message("Failed to fetch blogs"));
        err
    })?;

    let count = blogs.len();
    ctx.set_blogs(blogs);
    Ok(count)
}

/// Loads a published blog together with its approved comments.
pub fn load_blog_page<R>(repo: &R, id: &str) -> ServiceResult<BlogPageData>
where
    R: BlogReader + CommentReader + ?Sized,
{
    let id = BlogId::new(id).map_err(|_| ServiceError::NotFound)?;

    let blog = repo
        .get_blog(&id)?
        .filter(|blog| blog.is_published)
        .ok_or(ServiceError::NotFound)?;

    let comments = repo.list_blog_comments(&id).map_err(|err| {
        log::error!("Failed to load comments of blog {id}: {err}");
        err
    })?;

    Ok(BlogPageData { blog, comments })
}

/// Submits a reader comment; it stays hidden until approved.
pub fn add_comment<R>(
    repo: &R,
    notifier: &dyn Notifier,
    form: AddCommentForm,
) -> ServiceResult<Comment>
where
    R: CommentWriter + ?Sized,
{
    let new_comment = NewComment::try_from(form).map_err(|err| {
        log::error!("Failed to validate comment form: {err}");
        notifier.error(&err.to_string());
        err
    })?;

    match repo.add_comment(&new_comment) {
        Ok(comment) => {
            notifier.success("Comment added for review");
            Ok(comment)
        }
        Err(err) => {
            log::error!("Failed to add comment: {err}");
            notifier.error(err.user_message("Failed to add comment"));
            Err(err.into())
        }
    }
}
