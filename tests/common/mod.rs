use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// JSON data file written into a temporary directory removed on drop.
pub struct TestDataFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TestDataFile {
    pub fn new(name: &str, contents: &Value) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, contents.to_string()).expect("failed to write data file");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn blog_record(id: &str, title: &str, category: &str, is_published: bool) -> Value {
    json!({
        "_id": id,
        "title": title,
        "subTitle": format!("About {title}"),
        "description": "<p>Body</p>",
        "category": category,
        "image": format!("/uploads/{id}.png"),
        "isPublished": is_published,
        "createdAt": "2024-03-01T09:00:00Z",
    })
}

pub fn comment_record(id: &str, blog_id: &str, is_approved: bool) -> Value {
    json!({
        "_id": id,
        "blog": blog_id,
        "name": "Ann",
        "content": "Nice post",
        "isApproved": is_approved,
        "createdAt": "2024-03-02T09:00:00Z",
    })
}
