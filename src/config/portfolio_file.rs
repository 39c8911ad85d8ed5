use crate::domain::model::{
    experience_entity, parse_icon, project_entity, social_entity, Contact,
    Experience, Portfolio, Project, SkillGroup, SocialLink,
};
use crate::domain::ports::PortfolioSource;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{normalize_optional, validate_required_field};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// `.json` selects JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Toml => "TOML",
            DocumentFormat::Json => "JSON",
        }
    }
}

/// A portfolio document as written by hand. Every field is optional here so
/// that a missing one is reported by name instead of as a parser error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioFile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub about: Option<String>,
    pub avatar: Option<String>,
    pub contact: Option<ContactFile>,
    #[serde(default)]
    pub socials: Vec<SocialFile>,
    #[serde(default)]
    pub skills: Vec<SkillFile>,
    #[serde(default)]
    pub projects: Vec<ProjectFile>,
    #[serde(default)]
    pub experiences: Vec<ExperienceFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFile {
    pub email: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialFile {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillFile {
    pub category: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(alias = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(alias = "githubUrl")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceFile {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

impl PortfolioFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&content, DocumentFormat::from_path(path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, DocumentFormat::Toml)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, DocumentFormat::Json)
    }

    pub fn from_str_with_format(content: &str, format: DocumentFormat) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        let parse_error = |message: String| SiteError::ParseError {
            format: format.name().to_string(),
            message,
        };

        match format {
            DocumentFormat::Toml => {
                toml::from_str(&processed).map_err(|e| parse_error(e.to_string()))
            }
            DocumentFormat::Json => {
                serde_json::from_str(&processed).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ParseError {
            format: "placeholder".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks presence of required fields and icon names, then runs the
    /// full [`Portfolio`] validation.
    pub fn into_portfolio(self) -> Result<Portfolio> {
        let name = required("portfolio", "name", self.name)?;
        let title = required("portfolio", "title", self.title)?;
        let about = required("portfolio", "about", self.about)?;
        let avatar = required("portfolio", "avatar", self.avatar)?;

        let contact_file = validate_required_field("portfolio", "contact", &self.contact)?.clone();
        let contact = Contact {
            email: required("contact", "email", contact_file.email)?,
            location: required("contact", "location", contact_file.location)?,
            phone: normalize_optional(contact_file.phone),
        };

        let socials = self
            .socials
            .into_iter()
            .enumerate()
            .map(|(index, social)| {
                let platform = required(&nth("social", index), "platform", social.platform)?;
                let entity = social_entity(&platform);
                let url = required(&entity, "url", social.url)?;
                let icon = required(&entity, "icon", social.icon)?;
                let icon = parse_icon(&platform, &icon)?;
                Ok(SocialLink {
                    platform,
                    url,
                    icon,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let skills = self
            .skills
            .into_iter()
            .enumerate()
            .map(|(index, skill)| {
                let category = required(&nth("skill group", index), "category", skill.category)?;
                Ok(SkillGroup {
                    category,
                    items: skill.items,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let projects = self
            .projects
            .into_iter()
            .enumerate()
            .map(|(index, project)| {
                let title = required(&nth("project", index), "title", project.title)?;
                let entity = project_entity(&title);
                Ok(Project {
                    description: required(&entity, "description", project.description)?,
                    image_url: required(&entity, "image_url", project.image_url)?,
                    technologies: project.technologies,
                    live_url: normalize_optional(project.live_url),
                    github_url: normalize_optional(project.github_url),
                    title,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let experiences = self
            .experiences
            .into_iter()
            .enumerate()
            .map(|(index, experience)| {
                let company = required(&nth("experience", index), "company", experience.company)?;
                let entity = experience_entity(&company);
                Ok(Experience {
                    position: required(&entity, "position", experience.position)?,
                    duration: required(&entity, "duration", experience.duration)?,
                    description: experience.description,
                    company,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Portfolio {
            name,
            title,
            about,
            avatar,
            contact,
            socials,
            skills,
            projects,
            experiences,
        }
        .validated()
    }
}

fn required(entity: &str, field: &str, value: Option<String>) -> Result<String> {
    let value = validate_required_field(entity, field, &value)?;
    if value.trim().is_empty() {
        return Err(SiteError::config(
            entity,
            field,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(value.clone())
}

fn nth(kind: &str, index: usize) -> String {
    format!("{} #{}", kind, index + 1)
}

/// Reads a portfolio document from disk each time it is asked.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl PortfolioSource for FileSource {
    fn load(&self) -> Result<Portfolio> {
        tracing::debug!("Reading portfolio document {}", self.path.display());
        PortfolioFile::from_file(&self.path)?.into_portfolio()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
