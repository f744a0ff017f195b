//! Data-fetch contracts of the blog API and their adapters.

use crate::{
    domain::{
        auth::Credentials,
        blog::{Blog, NewBlog, UpdateBlog},
        comment::{Comment, NewComment},
        types::{AuthToken, BlogId, CommentId, SubscriberEmail},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryRepository;

pub trait BlogReader {
    /// Published blogs in source order.
    fn list_blogs(&self) -> RepositoryResult<Vec<Blog>>;
    /// Every blog, drafts included, for the admin panel.
    fn list_all_blogs(&self) -> RepositoryResult<Vec<Blog>>;
    fn get_blog(&self, id: &BlogId) -> RepositoryResult<Option<Blog>>;
}

pub trait BlogWriter {
    fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog>;
    fn update_blog(&self, id: &BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog>;
    fn toggle_publish(&self, id: &BlogId) -> RepositoryResult<Blog>;
    fn delete_blog(&self, id: &BlogId) -> RepositoryResult<()>;
}

pub trait CommentReader {
    /// All comments for moderation.
    fn list_comments(&self) -> RepositoryResult<Vec<Comment>>;
    /// Approved comments of one blog.
    fn list_blog_comments(&self, blog_id: &BlogId) -> RepositoryResult<Vec<Comment>>;
}

pub trait CommentWriter {
    fn add_comment(&self, comment: &NewComment) -> RepositoryResult<Comment>;
    fn approve_comment(&self, id: &CommentId) -> RepositoryResult<()>;
    fn delete_comment(&self, id: &CommentId) -> RepositoryResult<()>;
}

pub trait AuthGateway {
    fn login(&self, credentials: &Credentials) -> RepositoryResult<AuthToken>;
}

pub trait SubscriberWriter {
    /// Returns the confirmation message shown to the subscriber.
    fn subscribe(&self, email: &SubscriberEmail) -> RepositoryResult<String>;
}
