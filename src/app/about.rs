use leptos::prelude::*;
use leptos_meta::Title;

use super::download::DownloadCvButton;
use super::ContentUnavailable;
use crate::content::site_content;

#[component]
pub fn AboutPage() -> impl IntoView {
    let profile = match site_content() {
        Ok(content) => &content.profile,
        Err(error) => return view! { <ContentUnavailable error=error /> }.into_any(),
    };

    let bio = profile
        .bio
        .iter()
        .map(|p| view! { <p class="mb-4">{p.as_str()}</p> })
        .collect_view();

    view! {
        <Title text="About" />
        <section class="container py-5 mt-4">
            <h1 class="text-center mb-5">"About Me"</h1>
            <div class="row align-items-center g-5">
                <div class="col-lg-5 text-center">
                    <img
                        src=profile.portrait.as_str()
                        alt=profile.name.as_str()
                        class="img-fluid rounded shadow"
                    />
                </div>
                <div class="col-lg-7">
                    {bio}
                    <DownloadCvButton class="btn btn-primary d-inline-flex align-items-center" />
                </div>
            </div>
        </section>
    }
    .into_any()
}
