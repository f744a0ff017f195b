//! Snapshot document used to seed the in-memory data source.

use serde::{Deserialize, Serialize};

use crate::models::blog::Blog;
use crate::models::comment::Comment;

/// Admin account accepted by the in-memory auth gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub admin: Option<AdminAccount>,
}
