use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::router::RouteTable;
use crate::store::{State, Store};

/// Store key holding the active [`Section`].
pub const CURRENT_SECTION: &str = "currentSection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::About => "/about",
            Section::Portfolio => "/portfolio",
            Section::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.path() == path)
    }

    /// Reads the active section out of a store snapshot.
    pub fn from_state(state: &State) -> Option<Self> {
        state
            .get(CURRENT_SECTION)
            .and_then(Value::as_str)
            .and_then(Self::from_key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One route per section. Each handler records the section in the store and
/// then calls `after`, which is where page swaps hook in.
pub fn section_routes(store: Store, after: Arc<dyn Fn(Section) + Send + Sync>) -> RouteTable {
    Section::ALL
        .into_iter()
        .fold(RouteTable::new(), |table, section| {
            let store = store.clone();
            let after = Arc::clone(&after);
            table.route(section.path(), move || {
                store.set(CURRENT_SECTION, section.key());
                after(section);
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{History, MemoryHistory, Resolution, Router};
    use std::sync::Mutex;

    #[test]
    fn test_section_keys_and_paths() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
            assert_eq!(Section::from_path(section.path()), Some(section));
        }
        assert_eq!(Section::from_path("/blog"), None);
        assert_eq!(Section::Home.path(), "/");
        assert_eq!(Section::Portfolio.to_string(), "portfolio");
        assert_eq!(
            serde_json::to_value(Section::About).unwrap(),
            serde_json::json!("about")
        );
    }

    #[test]
    fn test_routes_drive_store() {
        let store = Store::new([(CURRENT_SECTION, Section::Home.key())]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in = Arc::clone(&seen);
        let _sub = store.subscribe(Arc::new(move |state: &State| {
            seen_in.lock().unwrap().push(Section::from_state(state));
        }));
        let swapped = Arc::new(Mutex::new(Vec::new()));
        let swapped_in = Arc::clone(&swapped);
        let after: Arc<dyn Fn(Section) + Send + Sync> =
            Arc::new(move |s| swapped_in.lock().unwrap().push(s));

        let history = Arc::new(MemoryHistory::new("/"));
        let router = Router::new(section_routes(store.clone(), after), history.clone());
        router.navigate(Section::Contact.path()).unwrap();
        assert_eq!(
            router.navigate("/nope"),
            Ok(Resolution::Fallback {
                requested: "/nope".to_string()
            })
        );
        history.back();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Some(Section::Home),
                Some(Section::Contact),
                Some(Section::Home),
                Some(Section::Contact),
            ]
        );
        assert_eq!(
            *swapped.lock().unwrap(),
            vec![
                Section::Home,
                Section::Contact,
                Section::Home,
                Section::Contact
            ]
        );
        assert_eq!(
            Section::from_state(&store.snapshot()),
            Some(Section::Contact)
        );
    }
}
