mod about;
mod contact;
mod download;
mod home;
mod host;
mod navbar;
mod portfolio;

use std::sync::Arc;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;

use crate::assets::{FAVICON, STYLESHEETS};
use crate::config::SiteConfig;
use crate::content::{site_content, ContentError};
use crate::nav::{section_routes, Section, CURRENT_SECTION};
use crate::router::{History, Router};
use crate::store::{State, Store};

use about::AboutPage;
use contact::ContactPage;
use home::HomePage;
use navbar::Navbar;
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-bs-theme="light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                {STYLESHEETS
                    .into_iter()
                    .map(|href| view! { <link rel="stylesheet" href=href /> })
                    .collect_view()}
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[cfg(feature = "hydrate")]
fn initial_history() -> Arc<dyn History> {
    Arc::new(crate::web::BrowserHistory)
}

#[cfg(not(feature = "hydrate"))]
fn initial_history() -> Arc<dyn History> {
    let path = use_context::<http::request::Parts>()
        .map(|parts| parts.uri.path().to_string())
        .unwrap_or_else(|| Section::Home.path().to_string());
    Arc::new(crate::router::MemoryHistory::new(path))
}

fn on_section_change(section: Section) {
    log::debug!("showing {section}");
    #[cfg(feature = "hydrate")]
    crate::web::scroll_to_top();
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    let store = Store::new([(CURRENT_SECTION, Section::Home.key())]);
    let section = RwSignal::new(Section::Home);
    let subscription = store.subscribe(Arc::new(move |state: &State| {
        if let Some(s) = Section::from_state(state) {
            section.set(s);
        }
    }));
    on_cleanup(move || subscription.unsubscribe());

    let router = Router::new(
        section_routes(store.clone(), Arc::new(on_section_change)),
        initial_history(),
    );
    provide_context(store);
    provide_context(router);

    view! {
        <Title formatter=|title| format!("Mohammed Rezk - {title}") />
        <Navbar />
        <main class="pt-5">
            {move || match section.get() {
                Section::Home => view! { <HomePage /> }.into_any(),
                Section::About => view! { <AboutPage /> }.into_any(),
                Section::Portfolio => view! { <PortfolioPage /> }.into_any(),
                Section::Contact => view! { <ContactPage /> }.into_any(),
            }}
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let name = site_content()
        .map(|c| c.profile.name.as_str())
        .unwrap_or_default();
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();
    let year = built.map(|b| b.year().to_string()).unwrap_or_default();
    let stamp = built
        .map(|b| format!("Last built {}", b.format("%Y-%m-%d")))
        .unwrap_or_default();

    view! {
        <footer class="py-4 text-center text-secondary small">
            <div>{format!("© {year} {name}")}</div>
            <div class="text-muted">{stamp}</div>
        </footer>
    }
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    log::error!("{error}");
    view! {
        <div class="container py-5 text-center text-danger">
            "This section couldn't be loaded."
        </div>
    }
}
