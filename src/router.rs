//! Path based client side routing.
//!
//! The router does not talk to the browser directly. It is handed a
//! [`History`], which is [`MemoryHistory`] natively and on the server, and
//! `web::BrowserHistory` in the hydrated client.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

pub const ROOT: &str = "/";

pub type Handler = Arc<dyn Fn() + Send + Sync>;
pub type PopListener = Arc<dyn Fn() + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Session history as seen by the router.
pub trait History: Send + Sync {
    fn current_path(&self) -> String;
    /// Adds an entry for `path` without emitting a pop event.
    fn push(&self, path: &str);
    /// Called on every back/forward traversal.
    fn on_pop(&self, listener: PopListener);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route for {0} and no root route to fall back to")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(String),
    /// The path was not registered and the root handler ran instead.
    Fallback { requested: String },
}

#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<String, Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<F>(mut self, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.routes.insert(path.into(), Arc::new(handler));
        self
    }

    fn lookup(&self, path: &str) -> Result<(Handler, Resolution), RouteError> {
        if let Some(handler) = self.routes.get(path) {
            return Ok((Arc::clone(handler), Resolution::Matched(path.to_string())));
        }
        self.routes
            .get(ROOT)
            .map(|handler| {
                (
                    Arc::clone(handler),
                    Resolution::Fallback {
                        requested: path.to_string(),
                    },
                )
            })
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }
}

pub struct Router {
    routes: RouteTable,
    history: Arc<dyn History>,
    current_path: Mutex<String>,
}

impl Router {
    /// Hooks the router up to `history` and resolves the current path.
    ///
    /// A miss on this first resolution is logged; later misses are returned
    /// from [`Router::navigate`] and [`Router::resolve`].
    pub fn new(routes: RouteTable, history: Arc<dyn History>) -> Arc<Self> {
        let router = Arc::new(Self {
            routes,
            history: Arc::clone(&history),
            current_path: Mutex::new(String::new()),
        });

        let weak = Arc::downgrade(&router);
        history.on_pop(Arc::new(move || {
            let Some(router) = weak.upgrade() else {
                return;
            };
            if let Err(e) = router.resolve() {
                log::warn!("history traversal: {e}");
            }
        }));

        if let Err(e) = router.resolve() {
            log::warn!("initial route: {e}");
        }
        router
    }

    pub fn navigate(&self, path: &str) -> Result<Resolution, RouteError> {
        self.history.push(path);
        self.resolve()
    }

    /// Runs the handler for the history's current path.
    pub fn resolve(&self) -> Result<Resolution, RouteError> {
        let path = self.history.current_path();
        *lock(&self.current_path) = path.clone();

        let (handler, resolution) = self.routes.lookup(&path)?;
        if let Resolution::Fallback { requested } = &resolution {
            log::debug!("no route for {requested}, using {ROOT}");
        }
        handler();
        Ok(resolution)
    }

    /// The last path handed to [`Router::resolve`].
    pub fn current_path(&self) -> String {
        lock(&self.current_path).clone()
    }
}

struct Entries {
    stack: Vec<String>,
    index: usize,
}

/// In-memory history with browser-like push/back/forward behaviour.
pub struct MemoryHistory {
    entries: Mutex<Entries>,
    listeners: Mutex<Vec<PopListener>>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(Entries {
                stack: vec![initial.into()],
                index: 0,
            }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn back(&self) -> bool {
        self.traverse(-1)
    }

    pub fn forward(&self) -> bool {
        self.traverse(1)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        lock(&self.entries).stack.len()
    }

    fn traverse(&self, delta: isize) -> bool {
        {
            let mut entries = lock(&self.entries);
            let Some(next) = entries.index.checked_add_signed(delta) else {
                return false;
            };
            if next >= entries.stack.len() {
                return false;
            }
            entries.index = next;
        }
        let listeners = lock(&self.listeners).clone();
        for listener in listeners.iter() {
            listener();
        }
        true
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        let entries = lock(&self.entries);
        entries.stack[entries.index].clone()
    }

    fn push(&self, path: &str) {
        let mut entries = lock(&self.entries);
        let keep = entries.index + 1;
        entries.stack.truncate(keep);
        entries.stack.push(path.to_string());
        entries.index = keep;
    }

    fn on_pop(&self, listener: PopListener) {
        lock(&self.listeners).push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_resolves_initial_path_on_construction() {
        let (home, home_handler) = counted();
        let (about, about_handler) = counted();
        let routes = RouteTable::new()
            .route("/", home_handler)
            .route("/about", about_handler);
        let history = Arc::new(MemoryHistory::new("/about"));

        let router = Router::new(routes, history);

        assert_eq!(home.load(Ordering::SeqCst), 0);
        assert_eq!(about.load(Ordering::SeqCst), 1);
        assert_eq!(router.current_path(), "/about");
    }

    #[test]
    fn test_unknown_path_falls_back_to_root() {
        let (home, home_handler) = counted();
        let (about, about_handler) = counted();
        let routes = RouteTable::new()
            .route("/", home_handler)
            .route("/about", about_handler);
        let history = Arc::new(MemoryHistory::new("/contact"));

        let router = Router::new(routes, history);

        assert_eq!(home.load(Ordering::SeqCst), 1);
        assert_eq!(about.load(Ordering::SeqCst), 0);
        assert_eq!(router.current_path(), "/contact");
        assert_eq!(
            router.resolve(),
            Ok(Resolution::Fallback {
                requested: "/contact".to_string()
            })
        );
    }

    #[test]
    fn test_navigate_then_back() {
        let (home, home_handler) = counted();
        let (about, about_handler) = counted();
        let routes = RouteTable::new()
            .route("/", home_handler)
            .route("/about", about_handler);
        let history = Arc::new(MemoryHistory::new("/"));
        let router = Router::new(routes, history.clone());
        assert_eq!(home.load(Ordering::SeqCst), 1);

        let res = router.navigate("/about");
        assert_eq!(res, Ok(Resolution::Matched("/about".to_string())));
        assert_eq!(history.current_path(), "/about");
        assert_eq!(about.load(Ordering::SeqCst), 1);
        assert_eq!(home.load(Ordering::SeqCst), 1);

        assert!(history.back());
        assert_eq!(router.current_path(), "/");
        assert_eq!(home.load(Ordering::SeqCst), 2);
        assert_eq!(about.load(Ordering::SeqCst), 1);

        assert!(history.forward());
        assert_eq!(about.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let (about, about_handler) = counted();
        let routes = RouteTable::new().route("/about", about_handler);
        let history = Arc::new(MemoryHistory::new("/nowhere"));

        let router = Router::new(routes, history);

        assert_eq!(about.load(Ordering::SeqCst), 0);
        assert_eq!(
            router.navigate("/still-nowhere"),
            Err(RouteError::NotFound("/still-nowhere".to_string()))
        );
        assert_eq!(router.navigate("/about"), Ok(Resolution::Matched("/about".into())));
        assert_eq!(about.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/about");
        history.push("/portfolio");
        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());
        history.push("/contact");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_path(), "/contact");
        assert!(!history.forward());
    }

    #[test]
    fn test_pop_after_router_dropped_is_ignored() {
        let (home, home_handler) = counted();
        let history = Arc::new(MemoryHistory::new("/"));
        history.push("/about");
        let router = Router::new(RouteTable::new().route("/", home_handler), history.clone());
        assert_eq!(home.load(Ordering::SeqCst), 1);
        drop(router);

        assert!(history.back());
        assert_eq!(home.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_may_navigate() {
        let history = Arc::new(MemoryHistory::new("/old"));
        let slot: Arc<Mutex<Option<Arc<Router>>>> = Arc::new(Mutex::new(None));
        let (home, home_handler) = counted();
        let redirect_slot = Arc::clone(&slot);
        let routes = RouteTable::new().route("/", home_handler).route("/old", move || {
            let router = redirect_slot.lock().unwrap().clone();
            if let Some(router) = router {
                router.navigate("/").unwrap();
            }
        });
        let router = Router::new(routes, history.clone());
        *slot.lock().unwrap() = Some(Arc::clone(&router));

        router.resolve().unwrap();
        assert_eq!(history.current_path(), "/");
        assert_eq!(home.load(Ordering::SeqCst), 1);
    }
}
