// User Directory
// Owns the client's copy of the user collection and the row in edit mode.
// Every successful mutation is followed by a full re-fetch; failures are
// logged and leave state untouched.

use crate::api::UserApi;
use crate::error::{ApiError, ApiResult};
use crate::events::{Action, DirectoryEvent, EventSender};
use crate::models::{BioJob, User, UserDraft, UserId};

use std::sync::Arc;

pub struct UserDirectory {
    api: Arc<dyn UserApi>,
    users: Vec<User>,
    editing: Option<UserId>,
    events: Option<EventSender>,
}

impl UserDirectory {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            users: Vec::new(),
            editing: None,
            events: None,
        }
    }

    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    /// Result of the last successful fetch
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn editing(&self) -> Option<UserId> {
        self.editing
    }

    pub fn is_editing(&self, id: UserId) -> bool {
        self.editing == Some(id)
    }

    /// The user currently in edit mode, if it is still in the list
    pub fn editing_user(&self) -> Option<&User> {
        self.editing.and_then(|id| self.user(id))
    }

    // =========================================================================
    // Edit mode
    // =========================================================================

    /// Put a row into edit mode. Any other row leaves edit mode.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        if self.user(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // =========================================================================
    // Backend calls
    // =========================================================================

    /// Replace the list with the server's current collection
    pub async fn refresh(&mut self) -> ApiResult<()> {
        tracing::debug!("GET /users");
        let result = self.api.list_users().await;
        match result {
            Ok(users) => {
                let count = users.len();
                self.users = users;
                if self.editing.is_some_and(|id| self.user(id).is_none()) {
                    self.editing = None;
                }
                self.emit(DirectoryEvent::Fetched { count });
                Ok(())
            }
            Err(e) => Err(self.report(Action::Fetch, e)),
        }
    }

    pub async fn create(&mut self, draft: &UserDraft) -> ApiResult<User> {
        tracing::debug!(username = %draft.username, "POST /users");
        let result = self.api.create_user(draft).await;
        match result {
            Ok(user) => {
                tracing::info!(id = user.id, username = %user.username, "user created");
                self.emit(DirectoryEvent::Created {
                    id: user.id,
                    username: user.username.clone(),
                });
                let _ = self.refresh().await;
                Ok(user)
            }
            Err(e) => Err(self.report(Action::Create, e)),
        }
    }

    /// Send the edited fields; edit mode ends only if the server accepts them
    pub async fn save_edit(&mut self, id: UserId, draft: &UserDraft) -> ApiResult<User> {
        tracing::debug!(id, "PUT /users/{}", id);
        let result = self.api.update_user(id, draft).await;
        match result {
            Ok(user) => {
                tracing::info!(id, "user updated");
                self.editing = None;
                self.emit(DirectoryEvent::Updated { id });
                let _ = self.refresh().await;
                Ok(user)
            }
            Err(e) => Err(self.report(Action::Update(id), e)),
        }
    }

    pub async fn delete(&mut self, id: UserId) -> ApiResult<()> {
        tracing::debug!(id, "DELETE /users/{}", id);
        let result = self.api.delete_user(id).await;
        match result {
            Ok(()) => {
                tracing::info!(id, "user deleted");
                if self.is_editing(id) {
                    self.editing = None;
                }
                self.emit(DirectoryEvent::Deleted { id });
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.report(Action::Delete(id), e)),
        }
    }

    /// Queue server-side bio generation. The list is not touched.
    pub async fn request_bio(&mut self, id: UserId) -> ApiResult<BioJob> {
        tracing::debug!(id, "POST /users/{}/bio", id);
        let result = self.api.request_bio(id).await;
        match result {
            Ok(job) => {
                tracing::info!(id, task_id = %job.task_id, "bio generation queued");
                self.emit(DirectoryEvent::BioQueued {
                    id,
                    task_id: job.task_id.clone(),
                });
                Ok(job)
            }
            Err(e) => Err(self.report(Action::Bio(id), e)),
        }
    }

    fn report(&self, action: Action, error: ApiError) -> ApiError {
        tracing::error!(%error, "error {}", action);
        self.emit(DirectoryEvent::Failed {
            action,
            error: error.to_string(),
        });
        error
    }

    fn emit(&self, event: DirectoryEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_channel;
    use crate::testing::{Call, CallKind, RecordingApi};

    fn ann() -> User {
        User::new(1, "ann", "a@x.com")
    }

    async fn mounted(api: &Arc<RecordingApi>) -> UserDirectory {
        let mut directory = UserDirectory::new(api.clone());
        directory.refresh().await.unwrap();
        api.clear_calls();
        directory
    }

    #[tokio::test]
    async fn test_refresh_replaces_list() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = UserDirectory::new(api.clone());
        assert!(directory.users().is_empty());

        directory.refresh().await.unwrap();
        assert_eq!(directory.users(), &[ann()]);
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;

        api.fail(CallKind::List);
        assert!(directory.refresh().await.is_err());
        assert_eq!(directory.users(), &[ann()]);
    }

    #[tokio::test]
    async fn test_edit_then_save_puts_then_refetches() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;

        assert!(directory.begin_edit(1));
        let mut draft = directory.editing_user().unwrap().draft();
        draft.username = "annie".to_string();

        directory.save_edit(1, &draft).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::Update(1, UserDraft::new("annie", "a@x.com")),
                Call::List,
            ]
        );
        assert_eq!(directory.editing(), None);
        assert_eq!(directory.users(), &[User::new(1, "annie", "a@x.com")]);
    }

    #[tokio::test]
    async fn test_failed_save_stays_in_edit_mode() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;
        api.fail(CallKind::Update);

        directory.begin_edit(1);
        let result = directory.save_edit(1, &UserDraft::new("annie", "a@x.com")).await;

        assert!(result.is_err());
        assert!(directory.is_editing(1));
        assert_eq!(api.count(CallKind::List), 0);
        assert_eq!(directory.users(), &[ann()]);
    }

    #[tokio::test]
    async fn test_cancel_makes_no_call() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;

        directory.begin_edit(1);
        directory.cancel_edit();

        assert_eq!(directory.editing(), None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_single_row_in_edit_mode() {
        let api = Arc::new(RecordingApi::with_users(vec![
            ann(),
            User::new(2, "bob", "b@x.com"),
        ]));
        let mut directory = mounted(&api).await;

        directory.begin_edit(1);
        directory.begin_edit(2);
        assert!(!directory.is_editing(1));
        assert!(directory.is_editing(2));

        assert!(!directory.begin_edit(99));
        assert!(directory.is_editing(2));
    }

    #[tokio::test]
    async fn test_delete_sends_one_request_and_refetches() {
        let api = Arc::new(RecordingApi::with_users(vec![
            ann(),
            User::new(2, "bob", "b@x.com"),
        ]));
        let mut directory = mounted(&api).await;

        directory.delete(2).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Delete(2), Call::List]);
        assert_eq!(directory.users(), &[ann()]);
    }

    #[tokio::test]
    async fn test_deleting_edited_row_leaves_edit_mode() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;

        directory.begin_edit(1);
        directory.delete(1).await.unwrap();
        assert_eq!(directory.editing(), None);
    }

    #[tokio::test]
    async fn test_failed_delete_does_not_refetch() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;
        api.fail(CallKind::Delete);

        assert!(directory.delete(1).await.is_err());
        assert_eq!(api.calls(), vec![Call::Delete(1)]);
    }

    #[tokio::test]
    async fn test_create_then_refetch() {
        let api = Arc::new(RecordingApi::new());
        let mut directory = mounted(&api).await;

        let created = directory
            .create(&UserDraft::new("carl", "c@x.com"))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(
            api.calls(),
            vec![Call::Create(UserDraft::new("carl", "c@x.com")), Call::List]
        );
        assert_eq!(directory.users(), &[created]);
    }

    #[tokio::test]
    async fn test_bio_request_does_not_refetch() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let mut directory = mounted(&api).await;

        let job = directory.request_bio(1).await.unwrap();
        assert_eq!(job.task_id, "task-1");
        assert_eq!(api.calls(), vec![Call::Bio(1)]);
    }

    #[tokio::test]
    async fn test_events_are_emitted() {
        let api = Arc::new(RecordingApi::with_users(vec![ann()]));
        let (tx, mut rx) = event_channel();
        let mut directory = UserDirectory::new(api.clone()).with_events(tx);

        directory.refresh().await.unwrap();
        api.fail(CallKind::Delete);
        let _ = directory.delete(1).await;

        assert_eq!(rx.try_recv().unwrap(), DirectoryEvent::Fetched { count: 1 });
        let failure = rx.try_recv().unwrap();
        assert_eq!(
            failure,
            DirectoryEvent::Failed {
                action: Action::Delete(1),
                error: "transport error: connection refused".to_string(),
            }
        );
        assert!(rx.try_recv().is_err());
    }
}
