use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_email, validate_non_empty_list, validate_non_empty_string, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The icons a social link may use. Each one has a glyph in
/// [`crate::core::glyph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
}

impl Icon {
    pub const ALL: [Icon; 3] = [Icon::Github, Icon::Linkedin, Icon::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Github => "Github",
            Icon::Linkedin => "Linkedin",
            Icon::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Icon::ALL.iter().map(Icon::as_str).collect();
                format!("unknown icon `{}` (known: {})", s, known.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub location: String,
    /// Kept with the contact details; the site header does not show it.
    pub phone: Option<String>,
}

impl Contact {
    pub fn phone_number(&self) -> Option<&str> {
        present(&self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl Project {
    pub fn live_link(&self) -> Option<&str> {
        present(&self.live_url)
    }

    pub fn source_link(&self) -> Option<&str> {
        present(&self.github_url)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: Vec<String>,
}

/// Root of all displayable content. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub about: String,
    pub avatar: String,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
}

pub(crate) fn social_entity(platform: &str) -> String {
    format!("social `{}`", platform)
}

pub(crate) fn skill_entity(category: &str) -> String {
    format!("skill group `{}`", category)
}

pub(crate) fn project_entity(title: &str) -> String {
    format!("project `{}`", title)
}

pub(crate) fn experience_entity(company: &str) -> String {
    format!("experience `{}`", company)
}

impl Validate for Contact {
    fn validate(&self) -> Result<()> {
        validate_email("contact", "email", &self.email)?;
        validate_non_empty_string("contact", "location", &self.location)
    }
}

impl Validate for SocialLink {
    fn validate(&self) -> Result<()> {
        let entity = social_entity(&self.platform);
        validate_non_empty_string(&entity, "platform", &self.platform)?;
        validate_non_empty_string(&entity, "url", &self.url)
    }
}

impl Validate for SkillGroup {
    fn validate(&self) -> Result<()> {
        let entity = skill_entity(&self.category);
        validate_non_empty_string(&entity, "category", &self.category)?;
        validate_non_empty_list(&entity, "items", &self.items)?;
        for item in &self.items {
            validate_non_empty_string(&entity, "items", item)?;
        }
        validate_unique(&entity, "items", self.items.iter().map(String::as_str))
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<()> {
        let entity = project_entity(&self.title);
        validate_non_empty_string(&entity, "title", &self.title)?;
        validate_non_empty_string(&entity, "description", &self.description)?;
        validate_non_empty_string(&entity, "image_url", &self.image_url)?;
        validate_non_empty_list(&entity, "technologies", &self.technologies)?;
        for tech in &self.technologies {
            validate_non_empty_string(&entity, "technologies", tech)?;
        }
        validate_unique(
            &entity,
            "technologies",
            self.technologies.iter().map(String::as_str),
        )
    }
}

impl Validate for Experience {
    fn validate(&self) -> Result<()> {
        let entity = experience_entity(&self.company);
        validate_non_empty_string(&entity, "company", &self.company)?;
        validate_non_empty_string(&entity, "position", &self.position)?;
        validate_non_empty_string(&entity, "duration", &self.duration)?;
        validate_non_empty_list(&entity, "description", &self.description)?;
        for bullet in &self.description {
            validate_non_empty_string(&entity, "description", bullet)?;
        }
        Ok(())
    }
}

impl Validate for Portfolio {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("portfolio", "name", &self.name)?;
        validate_non_empty_string("portfolio", "title", &self.title)?;
        validate_non_empty_string("portfolio", "about", &self.about)?;
        validate_non_empty_string("portfolio", "avatar", &self.avatar)?;
        self.contact.validate()?;

        for social in &self.socials {
            social.validate()?;
        }
        validate_unique(
            "portfolio",
            "socials.platform",
            self.socials.iter().map(|s| s.platform.as_str()),
        )?;

        for group in &self.skills {
            group.validate()?;
        }
        validate_unique(
            "portfolio",
            "skills.category",
            self.skills.iter().map(|s| s.category.as_str()),
        )?;

        for project in &self.projects {
            project.validate()?;
        }
        validate_unique(
            "portfolio",
            "projects.title",
            self.projects.iter().map(|p| p.title.as_str()),
        )?;

        for experience in &self.experiences {
            experience.validate()?;
        }
        validate_unique(
            "portfolio",
            "experiences.company",
            self.experiences.iter().map(|e| e.company.as_str()),
        )
    }
}

impl Portfolio {
    /// Validates and hands the value back, for call sites that build and
    /// check in one expression.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// Output of the render stage, ready to be written by a [`Storage`].
///
/// [`Storage`]: crate::domain::ports::Storage
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub file_name: String,
    pub contents: String,
    pub section_count: usize,
}

/// Resolves a raw icon identifier for the social link named `platform`.
pub(crate) fn parse_icon(platform: &str, raw: &str) -> Result<Icon> {
    raw.parse::<Icon>()
        .map_err(|reason| SiteError::config(social_entity(platform), "icon", reason))
}
