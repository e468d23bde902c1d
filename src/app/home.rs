use leptos::prelude::*;
use leptos_meta::Title;

use super::download::DownloadCvButton;
use super::host::ComponentHost;
use super::ContentUnavailable;
use crate::content::{site_content, Job, Profile};
use crate::sections::{ContactInfo, TechnologySection};

#[component]
pub fn HomePage() -> impl IntoView {
    let content = match site_content() {
        Ok(content) => content,
        Err(error) => return view! { <ContentUnavailable error=error /> }.into_any(),
    };

    view! {
        <Title text="Home" />
        <HeroSection profile=&content.profile />
        <section class="container py-5">
            <h2 class="text-center mb-5">"Get In Touch"</h2>
            <ComponentHost component=ContactInfo::new(content.profile.contact.clone()) />
        </section>
        <WorkExperience jobs=content.experience.as_slice() />
        <ComponentHost component=TechnologySection::new(content.skills.clone()) />
    }
    .into_any()
}

#[component]
fn HeroSection(profile: &'static Profile) -> impl IntoView {
    let banner = format!(
        "background: url('{}') no-repeat center center/cover; filter: brightness(0.5); z-index: 0;",
        profile.banner
    );
    let social = profile
        .social
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.url.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-light rounded mx-2"
                    aria-label=link.label.as_str()
                >
                    <i class=format!("fab fa-{} fa-2x text-primary", link.icon)></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="position-relative min-vh-100 d-flex align-items-center mb-5">
            <div class="position-absolute top-0 start-0 w-100 h-100" style=banner></div>
            <div class="container position-relative" style="z-index: 1;">
                <div class="text-center">
                    <h1 class="display-4 fw-bold mb-4 text-white">
                        "Hi, I'm " <span class="text-primary">{profile.name.as_str()}</span>
                    </h1>
                    <div class="fs-3 text-white mb-4">{profile.role.as_str()}</div>
                    <p class="fs-5 text-white mx-auto mb-5" style="max-width: 42rem;">
                        {profile.tagline.as_str()}
                    </p>
                    <div class="d-flex justify-content-center mb-4">{social}</div>
                    <DownloadCvButton class="btn btn-outline-light d-inline-flex align-items-center" />
                </div>
            </div>
            <div class="position-absolute bottom-0 start-50 translate-middle-x mb-4 text-white text-center">
                <span class="d-block small">"Scroll Down"</span>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}

/// Accordion of past roles. The first entry starts open and opening one
/// closes the rest.
#[component]
fn WorkExperience(jobs: &'static [Job]) -> impl IntoView {
    let (open, set_open) = signal(Some(0usize));

    let items = jobs
        .iter()
        .enumerate()
        .map(|(index, job)| {
            let is_open = move || open.get() == Some(index);
            let toggle = move |_: leptos::ev::MouseEvent| {
                set_open.update(|o| *o = if *o == Some(index) { None } else { Some(index) })
            };
            let responsibilities = job
                .responsibilities
                .iter()
                .map(|r| view! { <li class="mb-1">{r.as_str()}</li> })
                .collect_view();

            view! {
                <div class="mb-4">
                    <button
                        class="experience-toggle w-100 p-4 rounded shadow-sm d-flex justify-content-between align-items-center"
                        aria-expanded=move || is_open().to_string()
                        on:click=toggle
                    >
                        <div class="text-start">
                            <h3 class="fs-5 fw-semibold mb-1">{job.company.as_str()}</h3>
                            <p class="text-secondary mb-0">
                                {format!("{} | {}", job.position, job.period)}
                            </p>
                        </div>
                        <i class=move || {
                            if is_open() { "fas fa-chevron-down rotate-180" } else { "fas fa-chevron-down" }
                        }></i>
                    </button>
                    <div class=move || {
                        if is_open() { "experience-body p-4" } else { "experience-body p-4 d-none" }
                    }>
                        <ul class="mb-3">{responsibilities}</ul>
                        <p class="small text-secondary mb-0">
                            <strong>"Stack: "</strong>
                            {job.stack.as_str()}
                        </p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="container py-5">
            <h2 class="text-center mb-5">"Work Experience"</h2>
            <div class="mx-auto" style="max-width: 48rem;">{items}</div>
        </section>
    }
}
