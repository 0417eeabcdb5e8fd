//! Global Application Store
//!
//! Single state container for the session user and the todo list. All
//! mutation goes through the five operations below; each one commits a fresh
//! immutable snapshot, writes the todo slice back to storage and notifies
//! subscribers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::models::{PersistedState, Todo, User};
use crate::storage::KeyValueStorage;

/// Storage key for the persisted todo slice
pub const STORAGE_KEY: &str = "global-storage";

/// Author recorded on todos added without a session
const GUEST_AUTHOR: &str = "Guest";

/// Full in-memory state; only `todos` survives a reload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalState {
    pub user: Option<User>,
    pub todos: Vec<Todo>,
}

/// Handle returned by `subscribe`, accepted by `unsubscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Millisecond clock used for todo ids
pub type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

type Subscriber = Arc<dyn Fn() + Send + Sync>;

/// State container with subscription-based change notification
///
/// The current state is held as an `Arc<GlobalState>` snapshot; every
/// mutation builds a new snapshot and swaps it, so readers relying on
/// referential identity observe the change.
pub struct GlobalStore {
    state: RwLock<Arc<GlobalState>>,
    storage: Arc<dyn KeyValueStorage>,
    clock: Clock,
    subscribers: RwLock<Vec<(u64, Subscriber)>>,
    next_subscriber_id: AtomicU64,
}

impl GlobalStore {
    /// Build a store hydrated from `storage`; the user always starts absent.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_clock(storage, Box::new(now_ms))
    }

    /// Same as `new` with an injected id clock, for deterministic tests.
    pub fn with_clock(storage: Arc<dyn KeyValueStorage>, clock: Clock) -> Self {
        let todos = hydrate(storage.as_ref());
        Self {
            state: RwLock::new(Arc::new(GlobalState { user: None, todos })),
            storage,
            clock,
            subscribers: RwLock::new(Vec::new()),
            next_subscriber_id: AtomicU64::new(0),
        }
    }

    /// Current snapshot; its identity changes on every mutation.
    pub fn snapshot(&self) -> Arc<GlobalState> {
        self.state.read().unwrap().clone()
    }

    /// Set the mock session identity. Idempotent.
    pub fn login(&self) {
        self.commit(|state| {
            state.user = Some(User {
                email: "yngrid@mail.com.br".to_string(),
                name: "Yngrid Souza".to_string(),
            });
        });
    }

    /// Clear the session. Idempotent.
    pub fn logout(&self) {
        self.commit(|state| state.user = None);
    }

    /// Append a todo with the current timestamp as id.
    ///
    /// The `author` argument is accepted but never honored; the recorded
    /// author always comes from the current session, or "Guest" without one.
    /// Empty titles are accepted as-is.
    pub fn add_todo(&self, title: &str, author: Option<&str>) {
        let _ = author;
        let id = (self.clock)();
        self.commit(|state| {
            let author = state
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_else(|| GUEST_AUTHOR.to_string());
            state.todos.push(Todo {
                id,
                title: title.to_string(),
                author,
                done: false,
            });
        });
    }

    /// Flip `done` on the matching todo; missing ids are ignored.
    pub fn toggle_todo_done(&self, id: i64) {
        self.commit(|state| {
            if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) {
                todo.done = !todo.done;
            }
        });
    }

    /// Drop the matching todo; missing ids are ignored.
    pub fn remove_todo(&self, id: i64) {
        self.commit(|state| state.todos.retain(|todo| todo.id != id));
    }

    /// Register `callback` to run after every committed mutation.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .write()
            .unwrap()
            .push((id, Arc::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a subscription; unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .write()
            .unwrap()
            .retain(|(sid, _)| *sid != id.0);
    }

    fn commit<F: FnOnce(&mut GlobalState)>(&self, mutate: F) {
        {
            let mut state = self.state.write().unwrap();
            let mut next = (**state).clone();
            mutate(&mut next);
            *state = Arc::new(next);
        }
        self.persist();
        self.notify();
    }

    /// Write the persisted view back to storage; failures are swallowed.
    fn persist(&self) {
        let view = PersistedState {
            todos: self.state.read().unwrap().todos.clone(),
        };
        if let Ok(json) = serde_json::to_string(&view) {
            self.storage.set(STORAGE_KEY, &json);
        }
    }

    fn notify(&self) {
        // Clone the list out of the lock so a callback may (un)subscribe.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in subscribers {
            subscriber();
        }
    }
}

/// Read the persisted slice; anything missing or unparseable hydrates empty.
fn hydrate(storage: &dyn KeyValueStorage) -> Vec<Todo> {
    storage
        .get(STORAGE_KEY)
        .and_then(|raw| serde_json::from_str::<PersistedState>(&raw).ok())
        .map(|view| view.todos)
        .unwrap_or_default()
}

/// Wall-clock milliseconds. Two adds within the same millisecond collide;
/// this matches the original behavior and is a known limitation.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::AtomicI64;
    use std::sync::Mutex;

    /// Shared in-memory storage; clones see the same map.
    #[derive(Clone, Default)]
    struct MemoryStorage {
        entries: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        fn raw(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    fn test_clock() -> Clock {
        let next = AtomicI64::new(0);
        Box::new(move || next.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn make_store() -> (GlobalStore, MemoryStorage) {
        let storage = MemoryStorage::default();
        let store = GlobalStore::with_clock(Arc::new(storage.clone()), test_clock());
        (store, storage)
    }

    #[test]
    fn test_add_todo_grows_list_with_unique_ids() {
        let (store, _) = make_store();

        for i in 0..5 {
            store.add_todo(&format!("Item {}", i), None);
        }

        let state = store.snapshot();
        assert_eq!(state.todos.len(), 5);
        let ids: HashSet<i64> = state.todos.iter().map(|todo| todo.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_add_todo_preserves_insertion_order() {
        let (store, _) = make_store();

        store.add_todo("Milk", None);
        store.add_todo("Eggs", None);
        store.add_todo("Bread", None);

        let state = store.snapshot();
        let titles: Vec<&str> = state
            .todos
            .iter()
            .map(|todo| todo.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Milk", "Eggs", "Bread"]);
    }

    #[test]
    fn test_add_todo_author_follows_session() {
        let (store, _) = make_store();

        store.add_todo("Eggs", None);
        store.login();
        store.add_todo("Bread", None);

        let state = store.snapshot();
        assert_eq!(state.todos[0].author, "Guest");
        assert!(!state.todos[0].done);
        assert_eq!(state.todos[0].title, "Eggs");
        assert_eq!(state.todos[1].author, "Yngrid Souza");
    }

    #[test]
    fn test_add_todo_ignores_author_argument() {
        let (store, _) = make_store();

        store.add_todo("Milk", Some("Mallory"));

        assert_eq!(store.snapshot().todos[0].author, "Guest");
    }

    #[test]
    fn test_add_todo_accepts_empty_title() {
        let (store, _) = make_store();

        store.add_todo("", None);

        assert_eq!(store.snapshot().todos[0].title, "");
    }

    #[test]
    fn test_toggle_done_is_involution() {
        let (store, _) = make_store();
        store.add_todo("Milk", None);
        let id = store.snapshot().todos[0].id;

        store.toggle_todo_done(id);
        assert!(store.snapshot().todos[0].done);

        store.toggle_todo_done(id);
        assert!(!store.snapshot().todos[0].done);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let (store, _) = make_store();
        store.add_todo("Milk", None);

        let before = store.snapshot();
        store.toggle_todo_done(9999);

        assert_eq!(*before, *store.snapshot());
    }

    #[test]
    fn test_remove_todo_is_idempotent() {
        let (store, _) = make_store();
        store.add_todo("Milk", None);
        store.add_todo("Eggs", None);
        let id = store.snapshot().todos[0].id;

        store.remove_todo(id);
        assert_eq!(store.snapshot().todos.len(), 1);

        store.remove_todo(id);
        assert_eq!(store.snapshot().todos.len(), 1);
        assert_eq!(store.snapshot().todos[0].title, "Eggs");
    }

    #[test]
    fn test_login_logout() {
        let (store, _) = make_store();
        assert!(store.snapshot().user.is_none());

        store.login();
        let user = store.snapshot().user.clone().expect("logged in");
        assert_eq!(user.name, "Yngrid Souza");
        assert_eq!(user.email, "yngrid@mail.com.br");

        // Repeated login keeps the same identity
        store.login();
        assert_eq!(store.snapshot().user.as_ref().map(|u| u.name.as_str()), Some("Yngrid Souza"));

        store.logout();
        assert!(store.snapshot().user.is_none());
        store.logout();
        assert!(store.snapshot().user.is_none());
    }

    #[test]
    fn test_mutation_swaps_snapshot_identity() {
        let (store, _) = make_store();

        let before = store.snapshot();
        let unchanged = store.snapshot();
        assert!(Arc::ptr_eq(&before, &unchanged));

        store.add_todo("Milk", None);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_persists_only_the_todo_slice() {
        let (store, storage) = make_store();

        store.login();
        store.add_todo("Milk", None);

        let raw = storage.raw(STORAGE_KEY).expect("persisted after mutation");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["todos"]);
        assert_eq!(value["todos"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_round_trip_into_fresh_store() {
        let storage = MemoryStorage::default();
        storage.set(
            STORAGE_KEY,
            r#"{"todos":[{"id":1,"title":"Milk","author":"Guest","done":false}]}"#,
        );

        let first = GlobalStore::with_clock(Arc::new(storage.clone()), test_clock());
        first.login();

        // A fresh store sees the persisted todos but never a session.
        let second = GlobalStore::with_clock(Arc::new(storage.clone()), test_clock());
        let state = second.snapshot();
        assert!(state.user.is_none());
        assert_eq!(
            state.todos,
            vec![Todo {
                id: 1,
                title: "Milk".to_string(),
                author: "Guest".to_string(),
                done: false,
            }]
        );
    }

    #[test]
    fn test_unparseable_storage_hydrates_empty() {
        let storage = MemoryStorage::default();
        storage.set(STORAGE_KEY, "not json");

        let store = GlobalStore::with_clock(Arc::new(storage), test_clock());
        assert!(store.snapshot().todos.is_empty());
    }

    #[test]
    fn test_subscribers_notified_until_unsubscribed() {
        let (store, _) = make_store();
        let calls = Arc::new(AtomicU64::new(0));

        let observed = calls.clone();
        let id = store.subscribe(move || {
            observed.fetch_add(1, Ordering::Relaxed);
        });

        store.add_todo("Milk", None);
        store.login();
        assert_eq!(calls.load(Ordering::Relaxed), 2);

        store.unsubscribe(id);
        store.logout();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }
}
