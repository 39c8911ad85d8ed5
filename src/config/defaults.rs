use crate::domain::model::{Contact, Experience, Icon, Portfolio, Project, SkillGroup, SocialLink};
use crate::domain::ports::PortfolioSource;
use crate::utils::error::Result;

/// The portfolio compiled into the binary.
pub fn portfolio() -> Portfolio {
    Portfolio {
        name: "John Doe".to_string(),
        title: "Full Stack Developer".to_string(),
        about: "Passionate developer with expertise in building modern web applications. \
                I love turning complex problems into simple, beautiful, and intuitive solutions."
            .to_string(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&q=80"
            .to_string(),
        contact: Contact {
            email: "john.doe@example.com".to_string(),
            location: "San Francisco, CA".to_string(),
            phone: None,
        },
        socials: vec![
            social("GitHub", "https://github.com", Icon::Github),
            social("LinkedIn", "https://linkedin.com", Icon::Linkedin),
            social("Twitter", "https://twitter.com", Icon::Twitter),
        ],
        skills: vec![
            skill("Frontend", &["React", "TypeScript", "Tailwind CSS", "Next.js"]),
            skill("Backend", &["Node.js", "Python", "PostgreSQL", "Redis"]),
            skill("Tools", &["Git", "Docker", "AWS", "Linux"]),
        ],
        projects: vec![
            Project {
                title: "E-commerce Platform".to_string(),
                description: "A full-stack e-commerce solution with real-time inventory \
                              management and payment processing."
                    .to_string(),
                technologies: strings(&["React", "Node.js", "PostgreSQL", "Stripe"]),
                image_url: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=400&fit=crop&q=80"
                    .to_string(),
                live_url: Some("https://example.com".to_string()),
                github_url: Some("https://github.com".to_string()),
            },
            Project {
                title: "Task Management App".to_string(),
                description: "A collaborative task management application with real-time \
                              updates and team features."
                    .to_string(),
                technologies: strings(&["React", "Firebase", "Tailwind CSS"]),
                image_url: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&h=400&fit=crop&q=80"
                    .to_string(),
                live_url: Some("https://example.com".to_string()),
                github_url: Some("https://github.com".to_string()),
            },
        ],
        experiences: vec![
            Experience {
                company: "Tech Corp".to_string(),
                position: "Senior Developer".to_string(),
                duration: "2020 - Present".to_string(),
                description: strings(&[
                    "Led a team of 5 developers in building enterprise applications",
                    "Improved application performance by 40%",
                    "Implemented CI/CD pipelines reducing deployment time by 60%",
                ]),
            },
            Experience {
                company: "Startup Inc".to_string(),
                position: "Full Stack Developer".to_string(),
                duration: "2018 - 2020".to_string(),
                description: strings(&[
                    "Developed and maintained multiple client applications",
                    "Implemented responsive designs and optimized for mobile",
                    "Collaborated with design team to improve user experience",
                ]),
            },
        ],
    }
}

fn social(platform: &str, url: &str, icon: Icon) -> SocialLink {
    SocialLink {
        platform: platform.to_string(),
        url: url.to_string(),
        icon,
    }
}

fn skill(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: strings(items),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl PortfolioSource for BuiltinSource {
    fn load(&self) -> Result<Portfolio> {
        Ok(portfolio())
    }

    fn describe(&self) -> String {
        "built-in portfolio".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_collections_keep_source_order() {
        let portfolio = portfolio();

        let platforms: Vec<&str> = portfolio.socials.iter().map(|s| s.platform.as_str()).collect();
        assert_eq!(platforms, vec!["GitHub", "LinkedIn", "Twitter"]);

        let categories: Vec<&str> = portfolio.skills.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Frontend", "Backend", "Tools"]);

        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.experiences[0].company, "Tech Corp");
    }

    #[test]
    fn test_builtin_source_loads_the_same_value() {
        assert_eq!(BuiltinSource.load().unwrap(), portfolio());
        assert_eq!(portfolio(), portfolio());
    }
}
