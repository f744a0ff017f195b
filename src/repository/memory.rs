//! Data source kept in memory, seeded from a JSON snapshot.
//!
//! Records are stored in their wire shape and converted to domain values on
//! every read, the same way responses of the blog API are handled.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::auth::Credentials;
use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::types::{AuthToken, BlogId, CommentId, ImageUpload, SubscriberEmail};
use crate::models::blog::{Blog as BlogRecord, BlogPayload};
use crate::models::comment::{Comment as CommentRecord, CommentBlog};
use crate::models::data_file::{AdminAccount, DataFile};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AuthGateway, BlogReader, BlogWriter, CommentReader, CommentWriter, SubscriberWriter,
};

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    blogs: RefCell<Vec<BlogRecord>>,
    comments: RefCell<Vec<CommentRecord>>,
    subscribers: RefCell<Vec<SubscriberEmail>>,
    admin: Option<AdminAccount>,
}

fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn upload_url(image: &ImageUpload) -> String {
    log::info!(
        "Storing thumbnail {} ({}, {} bytes)",
        image.file_name(),
        image.content_type(),
        image.size()
    );
    format!("/uploads/{}", image.file_name())
}

/// Readable blog, or `None` with a warning when the record is malformed.
fn readable_blog(record: &BlogRecord) -> Option<Blog> {
    match Blog::try_from(record.clone()) {
        Ok(blog) => Some(blog),
        Err(err) => {
            log::warn!("Skipping blog {:?}: {err}", record.id);
            None
        }
    }
}

fn apply_payload(record: &mut BlogRecord, payload: BlogPayload) {
    record.title = payload.title;
    record.sub_title = Some(payload.sub_title);
    record.description = payload.description;
    record.category = payload.category;
    record.is_published = payload.is_published;
}

impl InMemoryRepository {
    pub fn new(data: DataFile) -> Self {
        Self {
            blogs: RefCell::new(data.blogs),
            comments: RefCell::new(data.comments),
            subscribers: RefCell::new(Vec::new()),
            admin: data.admin,
        }
    }

    /// Reads a [`DataFile`] JSON document from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let data: DataFile = serde_json::from_str(&raw)?;
        log::info!(
            "Loaded {} blogs and {} comments from {}",
            data.blogs.len(),
            data.comments.len(),
            path.as_ref().display()
        );
        Ok(Self::new(data))
    }

    pub fn subscribers(&self) -> Vec<SubscriberEmail> {
        self.subscribers.borrow().clone()
    }

    fn blog_title(&self, id: &str) -> Option<String> {
        self.blogs
            .borrow()
            .iter()
            .find(|record| record.id == id)
            .map(|record| record.title.clone())
    }

    fn to_comment(&self, record: &CommentRecord) -> RepositoryResult<Comment> {
        let mut comment = Comment::try_from(record.clone())?;
        if comment.blog_title.is_none() {
            comment.blog_title = self.blog_title(comment.blog_id.as_str());
        }
        Ok(comment)
    }

    /// Readable comment, or `None` with a warning when the record is malformed.
    fn readable_comment(&self, record: &CommentRecord) -> Option<Comment> {
        match self.to_comment(record) {
            Ok(comment) => Some(comment),
            Err(err) => {
                log::warn!("Skipping comment {}: {err}", record.id);
                None
            }
        }
    }

    fn with_blog<T>(
        &self,
        id: &BlogId,
        f: impl FnOnce(&mut BlogRecord) -> T,
    ) -> RepositoryResult<T> {
        let mut blogs = self.blogs.borrow_mut();
        let record = blogs
            .iter_mut()
            .find(|record| record.id == id.as_str())
            .ok_or(RepositoryError::NotFound)?;
        Ok(f(record))
    }
}

impl BlogReader for InMemoryRepository {
    fn list_blogs(&self) -> RepositoryResult<Vec<Blog>> {
        Ok(self
            .blogs
            .borrow()
            .iter()
            .filter(|record| record.is_published)
            .filter_map(readable_blog)
            .collect())
    }

    fn list_all_blogs(&self) -> RepositoryResult<Vec<Blog>> {
        Ok(self.blogs.borrow().iter().filter_map(readable_blog).collect())
    }

    fn get_blog(&self, id: &BlogId) -> RepositoryResult<Option<Blog>> {
        self.blogs
            .borrow()
            .iter()
            .find(|record| record.id == id.as_str())
            .map(|record| Blog::try_from(record.clone()).map_err(RepositoryError::from))
            .transpose()
    }
}

impl BlogWriter for InMemoryRepository {
    fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog> {
        let payload = BlogPayload::from(new_blog);
        let record = BlogRecord {
            id: new_record_id(),
            title: payload.title,
            sub_title: Some(payload.sub_title),
            description: payload.description,
            category: payload.category,
            image: new_blog.image.as_ref().map(upload_url),
            is_published: payload.is_published,
            created_at: Utc::now(),
        };
        self.blogs.borrow_mut().push(record.clone());
        Ok(Blog::try_from(record)?)
    }

    fn update_blog(&self, id: &BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog> {
        let record = self.with_blog(id, |record| {
            apply_payload(record, BlogPayload::from(updates));
            if let Some(image) = &updates.image {
                record.image = Some(upload_url(image));
            }
            record.clone()
        })?;
        Ok(Blog::try_from(record)?)
    }

    fn toggle_publish(&self, id: &BlogId) -> RepositoryResult<Blog> {
        let record = self.with_blog(id, |record| {
            record.is_published = !record.is_published;
            record.clone()
        })?;
        Ok(Blog::try_from(record)?)
    }

    fn delete_blog(&self, id: &BlogId) -> RepositoryResult<()> {
        let mut blogs = self.blogs.borrow_mut();
        let before = blogs.len();
        blogs.retain(|record| record.id != id.as_str());
        if blogs.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.comments
            .borrow_mut()
            .retain(|comment| comment.blog.id() != id.as_str());
        Ok(())
    }
}

impl CommentReader for InMemoryRepository {
    fn list_comments(&self) -> RepositoryResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter_map(|record| self.readable_comment(record))
            .collect())
    }

    fn list_blog_comments(&self, blog_id: &BlogId) -> RepositoryResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|record| record.is_approved && record.blog.id() == blog_id.as_str())
            .filter_map(|record| self.readable_comment(record))
            .collect())
    }
}

impl CommentWriter for InMemoryRepository {
    fn add_comment(&self, comment: &NewComment) -> RepositoryResult<Comment> {
        if self.blog_title(comment.blog_id.as_str()).is_none() {
            return Err(RepositoryError::NotFound);
        }
        let record = CommentRecord {
            id: new_record_id(),
            blog: CommentBlog::Id(comment.blog_id.to_string()),
            name: comment.name.to_string(),
            content: comment.content.to_string(),
            is_approved: false,
            created_at: Utc::now(),
        };
        self.comments.borrow_mut().push(record.clone());
        self.to_comment(&record)
    }

    fn approve_comment(&self, id: &CommentId) -> RepositoryResult<()> {
        let mut comments = self.comments.borrow_mut();
        let record = comments
            .iter_mut()
            .find(|record| record.id == id.as_str())
            .ok_or(RepositoryError::NotFound)?;
        record.is_approved = true;
        Ok(())
    }

    fn delete_comment(&self, id: &CommentId) -> RepositoryResult<()> {
        let mut comments = self.comments.borrow_mut();
        let before = comments.len();
        comments.retain(|record| record.id != id.as_str());
        if comments.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl AuthGateway for InMemoryRepository {
    fn login(&self, credentials: &Credentials) -> RepositoryResult<AuthToken> {
        let accepted = self.admin.as_ref().is_some_and(|admin| {
            admin.email.trim().eq_ignore_ascii_case(credentials.email.as_str())
                && admin.password == credentials.password
        });
        if !accepted {
            return Err(RepositoryError::Api("Invalid Credentials".to_string()));
        }
        Ok(AuthToken::new(Uuid::new_v4().to_string())?)
    }
}

impl SubscriberWriter for InMemoryRepository {
    fn subscribe(&self, email: &SubscriberEmail) -> RepositoryResult<String> {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.contains(email) {
            return Err(RepositoryError::Api("Email already subscribed".to_string()));
        }
        subscribers.push(email.clone());
        Ok("Subscribed successfully".to_string())
    }
}
