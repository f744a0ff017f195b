use pushkind_blog::context::AppContext;
use pushkind_blog::domain::auth::Credentials;
use pushkind_blog::domain::blog::{NewBlog, UpdateBlog};
use pushkind_blog::domain::category::Category;
use pushkind_blog::domain::comment::NewComment;
use pushkind_blog::domain::types::{
    BlogDescription, BlogId, BlogSubTitle, BlogTitle, CommentContent, CommentId, CommenterName,
    ImageUpload, SubscriberEmail,
};
use pushkind_blog::repository::errors::RepositoryError;
use pushkind_blog::repository::{
    AuthGateway, BlogReader, BlogWriter, CommentReader, CommentWriter, InMemoryRepository,
    SubscriberWriter,
};
use pushkind_blog::services::listing::fetch_blogs;
use pushkind_blog::ui::console::LogNotifier;
use serde_json::json;

mod common;

fn seeded_repo() -> (common::TestDataFile, InMemoryRepository) {
    let data = json!({
        "blogs": [
            common::blog_record("b1", "Rust in production", "Technology", true),
            common::blog_record("b2", "Draft notes", "Finance", false),
        ],
        "comments": [
            common::comment_record("c1", "b1", true),
            common::comment_record("c2", "b1", false),
            common::comment_record("c3", "b2", true),
        ],
        "admin": { "email": "Admin@Example.com", "password": "secret" },
    });
    let file = common::TestDataFile::new("blogs.json", &data);
    let repo = InMemoryRepository::from_path(file.path()).unwrap();
    (file, repo)
}

fn blog_id(id: &str) -> BlogId {
    BlogId::new(id).unwrap()
}

#[test]
fn test_loads_data_file() {
    let (_file, repo) = seeded_repo();

    let published = repo.list_blogs().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title.as_str(), "Rust in production");
    assert_eq!(published[0].category, Category::Technology);

    assert_eq!(repo.list_all_blogs().unwrap().len(), 2);
    assert!(repo.get_blog(&blog_id("missing")).unwrap().is_none());
}

#[test]
fn test_missing_or_malformed_file() {
    assert!(matches!(
        InMemoryRepository::from_path("/nonexistent/blogs.json"),
        Err(RepositoryError::Transport(_))
    ));

    let file = common::TestDataFile::new("broken.json", &json!({ "blogs": "nope" }));
    assert!(matches!(
        InMemoryRepository::from_path(file.path()),
        Err(RepositoryError::ValidationError(_))
    ));
}

#[test]
fn test_blog_crud() {
    let (_file, repo) = seeded_repo();

    let new_blog = NewBlog {
        title: BlogTitle::new("Fresh post").unwrap(),
        sub_title: BlogSubTitle::new("Sub").unwrap(),
        description: BlogDescription::new("<p>Hello</p>").unwrap(),
        category: Category::Lifestyle,
        is_published: false,
        image: Some(ImageUpload::new("cover.png", "image/png", 2048).unwrap()),
    };
    let created = repo.create_blog(&new_blog).unwrap();
    assert_eq!(created.image.as_deref(), Some("/uploads/cover.png"));
    assert!(!created.is_published);
    assert_eq!(repo.list_all_blogs().unwrap().len(), 3);

    let updates = UpdateBlog {
        title: BlogTitle::new("Renamed post").unwrap(),
        sub_title: BlogSubTitle::new("Sub").unwrap(),
        description: BlogDescription::new("Body").unwrap(),
        category: Category::Finance,
        is_published: true,
        image: None,
    };
    let updated = repo.update_blog(&created.id, &updates).unwrap();
    assert_eq!(updated.title.as_str(), "Renamed post");
    assert_eq!(updated.category, Category::Finance);
    assert_eq!(updated.image.as_deref(), Some("/uploads/cover.png"));
    assert_eq!(repo.list_blogs().unwrap().len(), 2);

    let toggled = repo.toggle_publish(&created.id).unwrap();
    assert!(!toggled.is_published);

    repo.delete_blog(&created.id).unwrap();
    assert!(repo.get_blog(&created.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_blog(&created.id),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_blog(&blog_id("missing"), &updates),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_comment_moderation() {
    let (_file, repo) = seeded_repo();

    let visible = repo.list_blog_comments(&blog_id("b1")).unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "c1");

    let all = repo.list_comments().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].blog_title.as_deref(), Some("Rust in production"));

    let added = repo
        .add_comment(&NewComment {
            blog_id: blog_id("b1"),
            name: CommenterName::new("Bo").unwrap(),
            content: CommentContent::new("Thanks").unwrap(),
        })
        .unwrap();
    assert!(!added.is_approved);
    assert_eq!(repo.list_blog_comments(&blog_id("b1")).unwrap().len(), 1);

    repo.approve_comment(&added.id).unwrap();
    assert_eq!(repo.list_blog_comments(&blog_id("b1")).unwrap().len(), 2);

    repo.delete_comment(&CommentId::new("c2").unwrap()).unwrap();
    assert_eq!(repo.list_comments().unwrap().len(), 3);

    let orphan = NewComment {
        blog_id: blog_id("missing"),
        name: CommenterName::new("Bo").unwrap(),
        content: CommentContent::new("Hi").unwrap(),
    };
    assert!(matches!(
        repo.add_comment(&orphan),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_deleting_blog_drops_its_comments() {
    let (_file, repo) = seeded_repo();

    repo.delete_blog(&blog_id("b2")).unwrap();

    let remaining = repo.list_comments().unwrap();
    assert!(remaining.iter().all(|c| c.blog_id.as_str() == "b1"));
}

#[test]
fn test_login_and_subscribe() {
    let (_file, repo) = seeded_repo();

    let token = repo
        .login(&Credentials::new("admin@example.com", "secret").unwrap())
        .unwrap();
    assert!(!token.as_str().is_empty());

    let rejected = repo.login(&Credentials::new("admin@example.com", "wrong").unwrap());
    assert_eq!(
        rejected.unwrap_err().user_message("Login failed"),
        "Invalid Credentials"
    );

    let email = SubscriberEmail::new("reader@example.com").unwrap();
    assert_eq!(repo.subscribe(&email).unwrap(), "Subscribed successfully");
    assert!(matches!(
        repo.subscribe(&email),
        Err(RepositoryError::Api(_))
    ));
    assert_eq!(repo.subscribers(), vec![email]);
}

#[test]
fn test_malformed_records_are_skipped() {
    let data = json!({
        "blogs": [
            common::blog_record("a", "Good post", "Technology", true),
            common::blog_record("b", "", "Finance", true),
            common::blog_record(" ", "No id", "Startup", false),
        ],
        "comments": [
            common::comment_record("c1", "a", true),
            common::comment_record("", "a", true),
        ],
    });
    let file = common::TestDataFile::new("blogs.json", &data);
    let repo = InMemoryRepository::from_path(file.path()).unwrap();

    let published = repo.list_blogs().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title.as_str(), "Good post");
    assert_eq!(repo.list_all_blogs().unwrap().len(), 1);

    assert_eq!(repo.list_comments().unwrap().len(), 1);
    assert_eq!(repo.list_blog_comments(&blog_id("a")).unwrap().len(), 1);

    let ctx = AppContext::new();
    assert_eq!(fetch_blogs(&ctx, &repo, &LogNotifier).unwrap(), 1);
    assert_eq!(ctx.blogs()[0].id.as_str(), "a");
}
