use crate::context::AppContext;
use crate::domain::comment::CommentStatus;
use crate::domain::types::CommentId;
use crate::dto::comments::{CommentRow, CommentsPageData};
use crate::repository::{CommentReader, CommentWriter};
use crate::services::{ServiceError, ServiceResult, ensure_authenticated};
use crate::ui::Notifier;

/// Comments whose approval flag matches `filter`, numbered from 1.
pub fn load_comments<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    filter: CommentStatus,
) -> ServiceResult<CommentsPageData>
where
    R: CommentReader + ?Sized,
{
    ensure_authenticated(ctx)?;

    let comments = repo.list_comments().map_err(|err| {
        log::error!("Failed to list comments: {err}");
        notifier.error(err.user_message("Failed to load comments"));
        err
    })?;

    let comments = comments
        .into_iter()
        .filter(|comment| filter.matches(comment))
        .enumerate()
        .map(|(i, comment)| CommentRow {
            index: i + 1,
            comment,
        })
        .collect();

    Ok(CommentsPageData { filter, comments })
}

/// Approves a comment and returns the refreshed table.
pub fn approve_comment<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    id: &str,
    filter: CommentStatus,
) -> ServiceResult<CommentsPageData>
where
    R: CommentReader + CommentWriter + ?Sized,
{
    ensure_authenticated(ctx)?;
    let comment_id = CommentId::new(id).map_err(|_| ServiceError::NotFound)?;

    if let Err(err) = repo.approve_comment(&comment_id) {
        log::error!("Failed to approve comment {comment_id}: {err}");
        notifier.error(err.user_message("Failed to approve comment"));
        return Err(err.into());
    }
    notifier.success("Comment approved");

    load_comments(ctx, repo, notifier, filter)
}

/// Deletes a comment and returns the refreshed table.
pub fn delete_comment<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    id: &str,
    filter: CommentStatus,
) -> ServiceResult<CommentsPageData>
where
    R: CommentReader + CommentWriter + ?Sized,
{
    ensure_authenticated(ctx)?;
    let comment_id = CommentId::new(id).map_err(|_| ServiceError::NotFound)?;

    if let Err(err) = repo.delete_comment(&comment_id) {
        log::error!("Failed to delete comment {comment_id}: {err}");
        notifier.error(err.user_message("Failed to delete comment"));
        return Err(err.into());
    }
    notifier.success("Comment deleted");

    load_comments(ctx, repo, notifier, filter)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::comment::{Comment, NewComment};
    use crate::domain::types::{AuthToken, BlogId};
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for Recorder {
        fn success(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(format!("error: {message}"));
        }
    }

    struct MockRepo {
        comments: RefCell<Vec<Comment>>,
    }

    impl MockRepo {
        fn seeded() -> Self {
            let comment = |id: &str, is_approved: bool| Comment {
                id: CommentId::new(id).unwrap(),
                blog_id: BlogId::new("b1").unwrap(),
                blog_title: Some("Post".to_string()),
                name: "Ann".to_string(),
                content: "Hi".to_string(),
                is_approved,
                created_at: NaiveDateTime::default(),
            };
            Self {
                comments: RefCell::new(vec![
                    comment("c1", false),
                    comment("c2", true),
                    comment("c3", false),
                ]),
            }
        }
    }

    impl CommentReader for MockRepo {
        fn list_comments(&self) -> RepositoryResult<Vec<Comment>> {
            Ok(self.comments.borrow().clone())
        }

        fn list_blog_comments(&self, blog_id: &BlogId) -> RepositoryResult<Vec<Comment>> {
            Ok(self
                .comments
                .borrow()
                .iter()
                .filter(|c| &c.blog_id == blog_id && c.is_approved)
                .cloned()
                .collect())
        }
    }

    impl CommentWriter for MockRepo {
        fn add_comment(&self, _comment: &NewComment) -> RepositoryResult<Comment> {
            Err(RepositoryError::Unexpected("not used".to_string()))
        }

        fn approve_comment(&self, id: &CommentId) -> RepositoryResult<()> {
            let mut comments = self.comments.borrow_mut();
            let comment = comments
                .iter_mut()
                .find(|c| &c.id == id)
                .ok_or(RepositoryError::NotFound)?;
            comment.is_approved = true;
            Ok(())
        }

        fn delete_comment(&self, id: &CommentId) -> RepositoryResult<()> {
            self.comments.borrow_mut().retain(|c| &c.id != id);
            Ok(())
        }
    }

    fn admin_ctx() -> AppContext {
        let ctx = AppContext::new();
        ctx.set_token(AuthToken::new("token").unwrap());
        ctx
    }

    #[test]
    fn pending_comments_are_numbered_from_one() {
        let repo = MockRepo::seeded();
        let recorder = Recorder::default();

        let page =
            load_comments(&admin_ctx(), &repo, &recorder, CommentStatus::default()).unwrap();

        let rows: Vec<(usize, &str)> = page
            .comments
            .iter()
            .map(|row| (row.index, row.comment.id.as_str()))
            .collect();
        assert_eq!(rows, vec![(1, "c1"), (2, "c3")]);
        assert_eq!(page.filter, CommentStatus::NotApproved);
    }

    #[test]
    fn approving_moves_comment_out_of_pending() {
        let repo = MockRepo::seeded();
        let recorder = Recorder::default();
        let ctx = admin_ctx();

        let page =
            approve_comment(&ctx, &repo, &recorder, "c1", CommentStatus::NotApproved).unwrap();
        assert_eq!(page.comments.len(), 1);
        assert_eq!(page.comments[0].comment.id.as_str(), "c3");

        let approved = load_comments(&ctx, &repo, &recorder, CommentStatus::Approved).unwrap();
        assert_eq!(approved.comments.len(), 2);
        assert_eq!(recorder.messages.borrow().as_slice(), ["Comment approved".to_string()]);
    }

    #[test]
    fn approving_unknown_comment_reports_error() {
        let repo = MockRepo::seeded();
        let recorder = Recorder::default();

        let result = approve_comment(
            &admin_ctx(),
            &repo,
            &recorder,
            "missing",
            CommentStatus::NotApproved,
        );

        assert!(matches!(result, Err(ServiceError::NotFound)));
        assert_eq!(
            recorder.messages.borrow().as_slice(),
            ["error: Failed to approve comment".to_string()]
        );
    }

    #[test]
    fn delete_refreshes_table() {
        let repo = MockRepo::seeded();
        let recorder = Recorder::default();

        let page =
            delete_comment(&admin_ctx(), &repo, &recorder, "c3", CommentStatus::NotApproved)
                .unwrap();

        assert_eq!(page.comments.len(), 1);
        assert_eq!(repo.comments.borrow().len(), 2);
    }

    #[test]
    fn moderation_requires_token() {
        let repo = MockRepo::seeded();
        let recorder = Recorder::default();

        assert!(matches!(
            load_comments(&AppContext::new(), &repo, &recorder, CommentStatus::Approved),
            Err(ServiceError::Unauthorized)
        ));
    }
}
