use leptos::prelude::*;
use leptos_meta::Title;

use super::ContentUnavailable;
use crate::content::{site_content, Project, ALL_CATEGORIES};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let portfolio = match site_content() {
        Ok(content) => &content.portfolio,
        Err(error) => return view! { <ContentUnavailable error=error /> }.into_any(),
    };
    let (filter, set_filter) = signal(ALL_CATEGORIES.to_string());

    let buttons = portfolio
        .categories
        .iter()
        .map(|category| {
            let id = category.id.as_str();
            view! {
                <button
                    class=move || {
                        if filter.get() == id {
                            "filter-button btn btn-primary active mx-1 mb-2"
                        } else {
                            "filter-button btn btn-outline-primary mx-1 mb-2"
                        }
                    }
                    data-filter=id
                    on:click=move |_| set_filter.set(id.to_string())
                >
                    {category.name.as_str()}
                </button>
            }
        })
        .collect_view();

    let cards = portfolio
        .projects
        .iter()
        .map(|project| {
            let category = portfolio.category_name(&project.category).unwrap_or_default();
            view! {
                <div class=move || {
                    let base = format!("col-md-6 col-lg-4 gallery-grid {}", project.category);
                    if filter.with(|f| project.matches(f)) { base } else { base + " d-none" }
                }>
                    <ProjectCard project=project category=category />
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="Portfolio" />
        <section class="container py-5 mt-4">
            <h1 class="text-center mb-4">"My Work"</h1>
            <div class="text-center mb-5">{buttons}</div>
            <div class="row g-4">{cards}</div>
        </section>
    }
    .into_any()
}

#[component]
fn ProjectCard(project: &'static Project, category: &'static str) -> impl IntoView {
    view! {
        <div class="card h-100 shadow-sm">
            <img src=project.image.as_str() class="card-img-top" alt=project.title.as_str() />
            <div class="card-body">
                <span class="badge text-bg-secondary mb-2">{category}</span>
                <h3 class="card-title fs-5">{project.title.as_str()}</h3>
                <p class="card-text text-secondary">{project.description.as_str()}</p>
            </div>
            <div class="card-footer bg-transparent border-0 d-flex gap-2">
                <a
                    href=project.github.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-sm btn-outline-secondary"
                >
                    <i class="fab fa-github me-1"></i>
                    "Code"
                </a>
                <a
                    href=project.live.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-sm btn-primary"
                >
                    <i class="fas fa-external-link-alt me-1"></i>
                    "Live"
                </a>
            </div>
        </div>
    }
}
