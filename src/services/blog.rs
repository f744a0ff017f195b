use crate::context::AppContext;
use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::types::BlogId;
use crate::dto::blog::{AdminBlogRow, EditBlogPageData};
use crate::forms::blog::EditBlogForm;
use crate::repository::{BlogReader, BlogWriter};
use crate::services::{ServiceError, ServiceResult, ensure_authenticated};
use crate::ui::{ADMIN_BLOG_LIST_ROUTE, Navigator, Notifier};

fn parse_blog_id(id: &str) -> ServiceResult<BlogId> {
    BlogId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Every blog, drafts included, numbered from 1 for the admin table.
pub fn list_blogs<R>(ctx: &AppContext, repo: &R) -> ServiceResult<Vec<AdminBlogRow>>
where
    R: BlogReader + ?Sized,
{
    ensure_authenticated(ctx)?;

    let blogs = repo.list_all_blogs().map_err(|err| {
        log::error!("Failed to list blogs: {err}");
        err
    })?;

    Ok(blogs
        .into_iter()
        .enumerate()
        .map(|(i, blog)| AdminBlogRow { index: i + 1, blog })
        .collect())
}

/// Prefills the editor; a missing blog sends the admin back to the list.
pub fn load_blog_for_edit<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    id: &str,
) -> ServiceResult<EditBlogPageData>
where
    R: BlogReader + ?Sized,
{
    ensure_authenticated(ctx)?;

    let loaded = parse_blog_id(id).and_then(|blog_id| {
        repo.get_blog(&blog_id)
            .map_err(ServiceError::from)
            .and_then(|blog| blog.ok_or(ServiceError::NotFound))
    });

    match loaded {
        Ok(blog) => Ok(EditBlogPageData {
            id: blog.id.clone(),
            form: EditBlogForm::from(&blog),
            existing_image: blog.image,
        }),
        Err(err) => {
            log::error!("Failed to load blog {id}: {err}");
            let message = match &err {
                ServiceError::NotFound => "Blog not found",
                ServiceError::Repository(repo_err) => repo_err.user_message("Failed to load blog"),
                _ => "Failed to load blog",
            };
            notifier.error(message);
            navigator.navigate(ADMIN_BLOG_LIST_ROUTE);
            Err(err)
        }
    }
}

pub fn update_blog<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    id: &str,
    form: EditBlogForm,
) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    ensure_authenticated(ctx)?;
    let blog_id = parse_blog_id(id)?;

    let updates = UpdateBlog::try_from(form).map_err(|err| {
        log::error!("Failed to validate blog form: {err}");
        notifier.error(&err.to_string());
        err
    })?;

    match repo.update_blog(&blog_id, &updates) {
        Ok(blog) => {
            notifier.success("Blog updated successfully");
            navigator.navigate(ADMIN_BLOG_LIST_ROUTE);
            Ok(blog)
        }
        Err(err) => {
            log::error!("Failed to update blog {blog_id}: {err}");
            notifier.error(err.user_message("Failed to update blog"));
            Err(err.into())
        }
    }
}

pub fn add_blog<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    form: EditBlogForm,
) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    ensure_authenticated(ctx)?;

    let new_blog = NewBlog::try_from(form).map_err(|err| {
        log::error!("Failed to validate blog form: {err}");
        notifier.error(&err.to_string());
        err
    })?;

    match repo.create_blog(&new_blog) {
        Ok(blog) => {
            notifier.success("Blog added successfully");
            navigator.navigate(ADMIN_BLOG_LIST_ROUTE);
            Ok(blog)
        }
        Err(err) => {
            log::error!("Failed to add blog: {err}");
            notifier.error(err.user_message("Failed to add blog"));
            Err(err.into())
        }
    }
}

/// Flips the published flag of a blog.
pub fn toggle_publish<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    id: &str,
) -> ServiceResult<Blog>
where
    R: BlogWriter + ?Sized,
{
    ensure_authenticated(ctx)?;
    let blog_id = parse_blog_id(id)?;

    match repo.toggle_publish(&blog_id) {
        Ok(blog) => {
            notifier.success("Blog status updated");
            Ok(blog)
        }
        Err(err) => {
            log::error!("Failed to toggle blog {blog_id}: {err}");
            notifier.error(err.user_message("Failed to update blog status"));
            Err(err.into())
        }
    }
}

pub fn delete_blog<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    id: &str,
) -> ServiceResult<()>
where
    R: BlogWriter + ?Sized,
{
    ensure_authenticated(ctx)?;
    let blog_id = parse_blog_id(id)?;

    match repo.delete_blog(&blog_id) {
        Ok(()) => {
            notifier.success("Blog deleted successfully");
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to delete blog {blog_id}: {err}");
            notifier.error(err.user_message("Failed to delete blog"));
            Err(err.into())
        }
    }
}
