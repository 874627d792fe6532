// In-memory stand-in for the users backend.
// Records every call so tests can assert on exactly what was sent.

use crate::api::UserApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{BioJob, User, UserDraft, UserId};

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

/// A request as the backend would have seen it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(UserId),
    Create(UserDraft),
    Update(UserId, UserDraft),
    Delete(UserId),
    Bio(UserId),
}

impl Call {
    pub fn kind(&self) -> CallKind {
        match self {
            Call::List => CallKind::List,
            Call::Get(_) => CallKind::Get,
            Call::Create(_) => CallKind::Create,
            Call::Update(..) => CallKind::Update,
            Call::Delete(_) => CallKind::Delete,
            Call::Bio(_) => CallKind::Bio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    List,
    Get,
    Create,
    Update,
    Delete,
    Bio,
}

struct Store {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

pub struct RecordingApi {
    store: Mutex<Store>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<CallKind>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Seed the backend; new ids continue after the highest seeded id
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            store: Mutex::new(Store { users, next_id }),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }

    /// Make every call of this kind fail with a transport error
    pub fn fail(&self, kind: CallKind) {
        self.failing.lock().unwrap().insert(kind);
    }

    pub fn recover(&self, kind: CallKind) {
        self.failing.lock().unwrap().remove(&kind);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.kind() == kind)
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Current server-side contents
    pub fn users(&self) -> Vec<User> {
        self.with_store(|s| s.users.values().cloned().collect())
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        let kind = call.kind();
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&kind) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        f(&mut self.store.lock().unwrap())
    }
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserApi for RecordingApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.record(Call::List)?;
        Ok(self.users())
    }

    async fn get_user(&self, id: UserId) -> ApiResult<User> {
        self.record(Call::Get(id))?;
        self.with_store(|s| s.users.get(&id).cloned())
            .ok_or(ApiError::NotFound(id))
    }

    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User> {
        self.record(Call::Create(draft.clone()))?;
        Ok(self.with_store(|s| {
            let user = User::new(s.next_id, draft.username.clone(), draft.email.clone());
            s.users.insert(user.id, user.clone());
            s.next_id += 1;
            user
        }))
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> ApiResult<User> {
        self.record(Call::Update(id, draft.clone()))?;
        self.with_store(|s| {
            s.users.get_mut(&id).map(|user| {
                user.username = draft.username.clone();
                user.email = draft.email.clone();
                user.clone()
            })
        })
        .ok_or(ApiError::NotFound(id))
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        self.record(Call::Delete(id))?;
        self.with_store(|s| s.users.remove(&id))
            .map(|_| ())
            .ok_or(ApiError::NotFound(id))
    }

    async fn request_bio(&self, id: UserId) -> ApiResult<BioJob> {
        self.record(Call::Bio(id))?;
        Ok(BioJob {
            message: "Bio generation started.".to_string(),
            task_id: format!("task-{}", id),
        })
    }
}
