//! Mock repository and collaborator implementations for isolating services in tests.

use mockall::mock;

use crate::domain::auth::Credentials;
use crate::domain::blog::{Blog, NewBlog, UpdateBlog};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::types::{AuthToken, BlogId, CommentId, SubscriberEmail};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AuthGateway, BlogReader, BlogWriter, CommentReader, CommentWriter, SubscriberWriter,
};
use crate::ui::{Navigator, Notifier};

mock! {
    pub Repository {}

    impl BlogReader for Repository {
        fn list_blogs(&self) -> RepositoryResult<Vec<Blog>>;
        fn list_all_blogs(&self) -> RepositoryResult<Vec<Blog>>;
        fn get_blog(&self, id: &BlogId) -> RepositoryResult<Option<Blog>>;
    }

    impl BlogWriter for Repository {
        fn create_blog(&self, new_blog: &NewBlog) -> RepositoryResult<Blog>;
        fn update_blog(&self, id: &BlogId, updates: &UpdateBlog) -> RepositoryResult<Blog>;
        fn toggle_publish(&self, id: &BlogId) -> RepositoryResult<Blog>;
        fn delete_blog(&self, id: &BlogId) -> RepositoryResult<()>;
    }

    impl CommentReader for Repository {
        fn list_comments(&self) -> RepositoryResult<Vec<Comment>>;
        fn list_blog_comments(&self, blog_id: &BlogId) -> RepositoryResult<Vec<Comment>>;
    }

    impl CommentWriter for Repository {
        fn add_comment(&self, comment: &NewComment) -> RepositoryResult<Comment>;
        fn approve_comment(&self, id: &CommentId) -> RepositoryResult<()>;
        fn delete_comment(&self, id: &CommentId) -> RepositoryResult<()>;
    }

    impl AuthGateway for Repository {
        fn login(&self, credentials: &Credentials) -> RepositoryResult<AuthToken>;
    }

    impl SubscriberWriter for Repository {
        fn subscribe(&self, email: &SubscriberEmail) -> RepositoryResult<String>;
    }
}

mock! {
    pub Notifier {}

    impl Notifier for Notifier {
        fn success(&self, message: &str);
        fn error(&self, message: &str);
    }
}

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn navigate(&self, route: &str);
    }
}
