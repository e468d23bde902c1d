//! Home page blocks written against the element builder.

use std::sync::Arc;

use crate::component::{create_element, on, AttrValue, Component, Element, Node};
use crate::content::{ContactItem, SkillCategory};

fn no_attrs() -> Vec<(&'static str, AttrValue)> {
    Vec::new()
}

fn heading(text: &str) -> Node {
    create_element("h2", [("class", "text-3xl font-bold mb-3".into())], [text.into()]).into()
}

#[derive(Debug, Clone)]
pub struct ContactInfo {
    items: Vec<ContactItem>,
}

impl ContactInfo {
    pub fn new(items: Vec<ContactItem>) -> Self {
        Self { items }
    }

    fn row(index: usize, item: &ContactItem) -> Node {
        let class = if index == 0 {
            "d-flex align-items-center".to_string()
        } else {
            "d-flex align-items-center mt-4".to_string()
        };
        create_element(
            "div",
            [("class", class.into())],
            [
                create_element(
                    "div",
                    [("class", "rounded-circle me-3 p-3 bg-primary bg-opacity-10".into())],
                    [create_element(
                        "i",
                        [("class", format!("fas fa-{} text-primary", item.icon).into())],
                        Vec::new(),
                    )
                    .into()],
                )
                .into(),
                create_element(
                    "span",
                    [("class", "text-secondary".into())],
                    [item.text.as_str().into()],
                )
                .into(),
            ],
        )
        .into()
    }
}

impl Component for ContactInfo {
    fn render(&self) -> Element {
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::row(i, item));
        create_element(
            "section",
            [("class", "py-16 mb-5".into()), ("id", "contact-info".into())],
            [create_element(
                "div",
                [("class", "container mx-auto px-4".into())],
                [
                    heading("Contact"),
                    create_element(
                        "div",
                        [("class", "max-w-xl mx-auto p-6 rounded-lg shadow-sm".into())],
                        rows.collect::<Vec<_>>(),
                    )
                    .into(),
                ],
            )
            .into()],
        )
    }
}

#[derive(Debug, Clone)]
pub struct TechnologySection {
    categories: Vec<SkillCategory>,
}

impl TechnologySection {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    fn category(skills: &SkillCategory) -> Node {
        let chips = skills.items.iter().map(|tech| {
            Node::from(create_element(
                "span",
                [("class", "px-2 rounded-full text-primary font-bold text-2xl".into())],
                [tech.as_str().into()],
            ))
        });
        create_element(
            "div",
            [("class", "d-flex align-items-center mb-4".into())],
            [
                create_element(
                    "h6",
                    [("class", "mb-0 text-secondary font-normal".into())],
                    [format!("{} :", skills.category).into()],
                )
                .into(),
                create_element(
                    "div",
                    [("class", "flex flex-wrap gap-2".into())],
                    chips.collect::<Vec<_>>(),
                )
                .into(),
            ],
        )
        .into()
    }
}

impl Component for TechnologySection {
    fn render(&self) -> Element {
        create_element(
            "section",
            [("class", "py-16".into()), ("id", "technologies".into())],
            [create_element(
                "div",
                [("class", "container mx-auto px-4".into())],
                [
                    heading("Technologies & Skills"),
                    create_element(
                        "div",
                        [("class", "max-w-4xl mx-auto p-4".into())],
                        self.categories.iter().map(Self::category).collect::<Vec<_>>(),
                    )
                    .into(),
                ],
            )
            .into()],
        )
    }
}

/// "Download CV" link. Clicking it runs `action` instead of following the
/// link, so the caller decides how the file is fetched.
#[derive(Clone)]
pub struct DownloadCv {
    href: String,
    class: String,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl DownloadCv {
    pub fn new(
        href: impl Into<String>,
        class: impl Into<String>,
        action: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            href: href.into(),
            class: class.into(),
            action,
        }
    }
}

impl Component for DownloadCv {
    fn render(&self) -> Element {
        let action = Arc::clone(&self.action);
        create_element(
            "a",
            [
                ("href", self.href.as_str().into()),
                ("class", format!("{} download-cv", self.class).into()),
                (
                    "onClick",
                    on(move |ev| {
                        ev.prevent_default();
                        action();
                    }),
                ),
            ],
            [create_element("span", no_attrs(), ["Download CV".into()]).into()],
        )
    }
}
