use std::sync::Arc;

use leptos::prelude::*;

use super::host::ComponentHost;
use crate::config::{CvConfig, SiteConfig};
use crate::sections::DownloadCv;

#[cfg(feature = "hydrate")]
fn start_download(cv: CvConfig) {
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::download::download_cv(&cv).await {
            log::error!("downloading CV: {e}");
            crate::web::alert(e.user_message());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_download(_cv: CvConfig) {}

#[component]
pub fn DownloadCvButton(#[prop(into)] class: String) -> impl IntoView {
    let cv = expect_context::<SiteConfig>().cv;
    let href = cv.path.clone();
    let link = DownloadCv::new(href, class, Arc::new(move || start_download(cv.clone())));
    view! { <ComponentHost component=link class="d-inline-block" /> }
}
