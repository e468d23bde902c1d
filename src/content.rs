use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Filter id that matches every project.
pub const ALL_CATEGORIES: &str = "*";

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} is missing")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactItem {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub banner: String,
    pub logo: String,
    pub portrait: String,
    pub bio: Vec<String>,
    pub social: Vec<SocialLink>,
    pub contact: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub position: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub stack: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub github: String,
    pub live: String,
}

impl Project {
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_CATEGORIES || self.category == filter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub categories: Vec<ProjectCategory>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn filtered<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects.iter().filter(move |p| p.matches(filter))
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub experience: Vec<Job>,
    pub skills: Vec<SkillCategory>,
    pub portfolio: Portfolio,
}

fn load_file<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentFiles::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

impl SiteContent {
    fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: load_file("profile.json")?,
            experience: load_file("experience.json")?,
            skills: load_file("skills.json")?,
            portfolio: load_file("projects.json")?,
        })
    }
}

/// Parsed once per process; later calls share the cached result.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert_eq!(content.profile.contact.len(), 3);
        assert_eq!(content.experience.len(), 3);
        assert_eq!(content.experience[0].company, "Meem Development");
        assert!(content.skills.iter().all(|s| !s.items.is_empty()));
        assert_eq!(content.portfolio.categories[0].id, ALL_CATEGORIES);
    }

    #[test]
    fn test_portfolio_filter() {
        let portfolio = &site_content().unwrap().portfolio;
        assert_eq!(portfolio.filtered(ALL_CATEGORIES).count(), portfolio.projects.len());
        assert!(portfolio.filtered("nextjs").all(|p| p.category == "nextjs"));
        assert_eq!(portfolio.filtered("nodejs").count(), 1);
        assert_eq!(portfolio.filtered("rust").count(), 0);
        assert_eq!(portfolio.category_name("nodejs"), Some("NodeJS"));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load_file::<Profile>("nope.json"),
            Err(ContentError::Missing("nope.json".to_string()))
        );
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = load_file::<Profile>("skills.json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { file, .. } if file == "skills.json"));
    }
}
