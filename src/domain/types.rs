//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., non-empty identifiers,
//! normalized/validated email, sanitized rich text) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Largest accepted thumbnail upload, in bytes.
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types accepted for blog thumbnails.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Uploaded file is not one of the accepted image formats.
    #[error("Invalid file type. Only JPEG, PNG, WebP and GIF images are allowed.")]
    InvalidImageType,
    /// Uploaded file exceeds [`MAX_IMAGE_SIZE`].
    #[error("File too large. Maximum size is 5MB")]
    ImageTooLarge,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(BlogId, "Opaque identifier of a blog post.");
non_empty_string_newtype!(CommentId, "Opaque identifier of a comment.");
non_empty_string_newtype!(BlogTitle, "Blog title wrapper enforcing non-empty values.");
non_empty_string_newtype!(
    BlogSubTitle,
    "Blog subtitle wrapper enforcing trimmed, non-empty values."
);
non_empty_string_newtype!(
    CommenterName,
    "Display name of a reader leaving a comment."
);
non_empty_string_newtype!(AuthToken, "Bearer token issued after admin login.");

macro_rules! sanitized_text_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a sanitized, trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let sanitized = ammonia::clean(&value.into());
                let inner = NonEmptyString::new(sanitized)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

sanitized_text_newtype!(
    BlogDescription,
    "Rich-text blog body with unsafe markup stripped."
);
sanitized_text_newtype!(CommentContent, "Comment body with unsafe markup stripped.");

macro_rules! email_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validates and normalizes an email string.
            pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
                let normalized = normalize_email(email)?;
                Ok(Self(normalized))
            }

            /// Borrow the email as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the owned inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

email_newtype!(AdminEmail, "Lower-cased and validated admin login email.");
email_newtype!(
    SubscriberEmail,
    "Lower-cased and validated newsletter subscriber email."
);

/// Metadata of a thumbnail picked for upload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    size: u64,
}

impl ImageUpload {
    /// Accepts the upload only when its MIME type is allowed and it fits in
    /// [`MAX_IMAGE_SIZE`].
    pub fn new<S: Into<String>, C: Into<String>>(
        file_name: S,
        content_type: C,
        size: u64,
    ) -> Result<Self, TypeConstraintError> {
        let content_type = content_type.into().trim().to_lowercase();
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(TypeConstraintError::InvalidImageType);
        }
        if size > MAX_IMAGE_SIZE {
            return Err(TypeConstraintError::ImageTooLarge);
        }
        Ok(Self {
            file_name: file_name.into(),
            content_type,
            size,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_blank_values() {
        assert_eq!(BlogId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(BlogId::new(" 64f0 ").unwrap().as_str(), "64f0");
    }

    #[test]
    fn emails_are_normalized() {
        let email = AdminEmail::new("  Admin@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "admin@example.com");
        assert_eq!(
            SubscriberEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn description_is_sanitized() {
        let description =
            BlogDescription::new("<p>Hello</p><script>alert('x')</script>").unwrap();
        assert_eq!(description.as_str(), "<p>Hello</p>");
        assert_eq!(
            CommentContent::new("<script>alert('x')</script>"),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn image_upload_checks_type_and_size() {
        assert!(ImageUpload::new("cover.png", "image/png", 1024).is_ok());
        assert_eq!(
            ImageUpload::new("cover.bmp", "image/bmp", 1024),
            Err(TypeConstraintError::InvalidImageType)
        );
        assert_eq!(
            ImageUpload::new("cover.jpg", "image/jpeg", MAX_IMAGE_SIZE + 1),
            Err(TypeConstraintError::ImageTooLarge)
        );
        let gif = ImageUpload::new("cover.gif", " IMAGE/GIF ", MAX_IMAGE_SIZE).unwrap();
        assert_eq!(gif.content_type(), "image/gif");
        assert_eq!(gif.size(), MAX_IMAGE_SIZE);
    }
}
