use std::sync::Arc;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::content::site_content;
use crate::nav::{Section, CURRENT_SECTION};
use crate::router::Router;
use crate::store::{State, Store};
use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<Store>();
    let router = expect_context::<Arc<Router>>();

    let initial = store
        .get(CURRENT_SECTION)
        .and_then(|v| v.as_str().and_then(Section::from_key))
        .unwrap_or_default();
    let active = RwSignal::new(initial);
    let subscription = store.subscribe(Arc::new(move |state: &State| {
        if let Some(s) = Section::from_state(state) {
            active.set(s);
        }
    }));
    on_cleanup(move || subscription.unsubscribe());

    let (menu_open, set_menu_open) = signal(false);

    // the server always renders the default theme; read storage only once hydrated
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| crate::web::set_root_attribute(THEME_ATTRIBUTE, theme.get().as_str()));

    let go = move |router: &Router, section: Section| {
        if let Err(e) = router.navigate(section.path()) {
            log::warn!("navigation: {e}");
        }
        set_menu_open.set(false);
    };

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            let router = Arc::clone(&router);
            view! {
                <li class="nav-item">
                    <a
                        href=section.path()
                        data-section=section.key()
                        class=move || {
                            if active.get() == section {
                                "nav-link px-3 py-2 active"
                            } else {
                                "nav-link px-3 py-2"
                            }
                        }
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(&router, section);
                        }
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let logo = site_content()
        .map(|c| c.profile.logo.as_str())
        .unwrap_or_default();
    let home_router = Arc::clone(&router);

    view! {
        <nav class="navbar navbar-expand-lg fixed-top shadow-sm bg-body-tertiary">
            <div class="container">
                <a
                    class="navbar-brand d-flex align-items-center"
                    href="/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(&home_router, Section::Home);
                    }
                >
                    <img src=logo alt="Logo" class="d-inline-block" height="32" />
                </a>

                <button
                    class=move || {
                        if menu_open.get() { "navbar-toggler" } else { "navbar-toggler collapsed" }
                    }
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded=move || menu_open.get().to_string()
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="navbar-toggler-icon"></span>
                </button>

                <div
                    id="navbarNav"
                    class=move || {
                        if menu_open.get() {
                            "collapse navbar-collapse show"
                        } else {
                            "collapse navbar-collapse"
                        }
                    }
                >
                    <ul class="navbar-nav ms-auto align-items-center">
                        {links}
                        <li class="nav-item ms-2">
                            <button
                                class="btn btn-link nav-link px-2 theme-toggle d-flex align-items-center"
                                aria-label="Toggle theme"
                                on:click=move |_| set_theme.set(theme.get_untracked().toggled())
                            >
                                <i class=move || theme.get().icon_class()></i>
                            </button>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
