use folio::core::motion::MotionTheme;
use folio::core::render::{current_year, CODE_LABEL, LIVE_DEMO_LABEL};
use folio::core::tree::{Element, SectionKind, Tag};
use folio::domain::model::{Contact, Experience, Icon, Portfolio, Project, SkillGroup, SocialLink};
use folio::utils::validation::Validate;
use folio::{render, render_now, to_document, PortfolioFile, RenderContext, SiteError};
use pretty_assertions::assert_eq;

fn fixture() -> Portfolio {
    Portfolio {
        name: "Test Person".to_string(),
        title: "Engineer".to_string(),
        about: "Builds things.".to_string(),
        avatar: "avatar.png".to_string(),
        contact: Contact {
            email: "test@example.com".to_string(),
            location: "Remote".to_string(),
            phone: None,
        },
        socials: vec![
            SocialLink {
                platform: "Twitter".to_string(),
                url: "https://twitter.com/test".to_string(),
                icon: Icon::Twitter,
            },
            SocialLink {
                platform: "GitHub".to_string(),
                url: "https://github.com/test".to_string(),
                icon: Icon::Github,
            },
        ],
        skills: vec![
            SkillGroup {
                category: "Frontend".to_string(),
                items: vec!["React".to_string(), "TypeScript".to_string()],
            },
            SkillGroup {
                category: "Backend".to_string(),
                items: vec!["Rust".to_string()],
            },
        ],
        projects: vec![
            Project {
                title: "Both Links".to_string(),
                description: "Has everything.".to_string(),
                technologies: vec!["Rust".to_string(), "Wasm".to_string()],
                image_url: "both.png".to_string(),
                live_url: Some("https://both.example.com".to_string()),
                github_url: Some("https://github.com/test/both".to_string()),
            },
            Project {
                title: "No Links".to_string(),
                description: "Private work.".to_string(),
                technologies: vec!["Go".to_string()],
                image_url: "none.png".to_string(),
                live_url: None,
                github_url: None,
            },
            Project {
                title: "Source Only".to_string(),
                description: "Library.".to_string(),
                technologies: vec!["C".to_string()],
                image_url: "src.png".to_string(),
                live_url: Some(String::new()),
                github_url: Some("https://github.com/test/src".to_string()),
            },
        ],
        experiences: vec![Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            duration: "2021 - Present".to_string(),
            description: vec![
                "Shipped the thing".to_string(),
                "Fixed the other thing".to_string(),
                "Wrote the docs".to_string(),
            ],
        }],
    }
}

fn ctx() -> RenderContext {
    RenderContext::new(2025, MotionTheme::enabled())
}

fn section(portfolio: &Portfolio, kind: SectionKind) -> Element {
    render(portfolio, &ctx())
        .section(kind)
        .map(|s| s.root.clone())
        .expect("section is always rendered")
}

fn project_card<'a>(projects: &'a Element, title: &str) -> &'a Element {
    projects
        .find_by_class("project")
        .into_iter()
        .find(|card| card.key.as_deref() == Some(title))
        .expect("project card present")
}

fn texts(elements: &[&Element]) -> Vec<String> {
    elements.iter().map(|el| el.text_content()).collect()
}

#[test]
fn test_fixture_is_valid() {
    assert!(fixture().validate().is_ok());
}

#[test]
fn test_rendering_twice_is_identical() {
    let portfolio = fixture();

    assert_eq!(render(&portfolio, &ctx()), render(&portfolio, &ctx()));
    assert_eq!(
        to_document(&render(&portfolio, &ctx())),
        to_document(&render(&portfolio, &ctx()))
    );
}

#[test]
fn test_every_collection_keeps_source_order() {
    let portfolio = fixture();

    let header = section(&portfolio, SectionKind::Header);
    let socials: Vec<String> = header
        .find_by_class("social")
        .iter()
        .map(|el| el.get_attr("aria-label").unwrap_or_default().to_string())
        .collect();
    assert_eq!(socials, vec!["Twitter", "GitHub"]);

    let skills = section(&portfolio, SectionKind::Skills);
    let categories = texts(&skills.find_by_class("card-title"));
    assert_eq!(categories, vec!["Frontend", "Backend"]);

    let projects = section(&portfolio, SectionKind::Projects);
    let titles = texts(&projects.find_by_class("card-title"));
    assert_eq!(titles, vec!["Both Links", "No Links", "Source Only"]);
    let techs = texts(&project_card(&projects, "Both Links").find_by_class("tag"));
    assert_eq!(techs, vec!["Rust", "Wasm"]);

    let experience = section(&portfolio, SectionKind::Experience);
    let bullets = texts(&experience.find_by_class("bullet"));
    assert_eq!(
        bullets,
        vec!["Shipped the thing", "Fixed the other thing", "Wrote the docs"]
    );
}

#[test]
fn test_project_with_both_links_has_live_demo_and_code() {
    let projects = section(&fixture(), SectionKind::Projects);
    let card = project_card(&projects, "Both Links");

    let links = card.find_by_class("action");
    assert_eq!(links.len(), 2);
    assert_eq!(texts(&links), vec![LIVE_DEMO_LABEL, CODE_LABEL]);
    assert_eq!(texts(&links), vec!["Live Demo", "Code"]);
    assert_eq!(links[0].get_attr("href"), Some("https://both.example.com"));
    assert_eq!(links[1].get_attr("href"), Some("https://github.com/test/both"));
}

#[test]
fn test_project_without_links_has_no_action_links() {
    let projects = section(&fixture(), SectionKind::Projects);
    let card = project_card(&projects, "No Links");

    assert!(card.find_by_class("action").is_empty());
    assert!(card.find_by_tag(Tag::A).is_empty());
}

#[test]
fn test_empty_live_url_renders_code_link_only() {
    let projects = section(&fixture(), SectionKind::Projects);
    let card = project_card(&projects, "Source Only");

    let links = card.find_by_class("action");
    assert_eq!(texts(&links), vec!["Code"]);
}

#[test]
fn test_skill_group_renders_tags_in_order_under_heading() {
    let skills = section(&fixture(), SectionKind::Skills);
    let group = skills
        .find_by_class("skill-group")
        .into_iter()
        .find(|g| g.key.as_deref() == Some("Frontend"))
        .unwrap();

    let heading = group.find_by_tag(Tag::H3);
    assert_eq!(texts(&heading), vec!["Frontend"]);

    let tags = group.find_by_class("tag");
    assert_eq!(tags.len(), 2);
    assert_eq!(texts(&tags), vec!["React", "TypeScript"]);
    let keys: Vec<&str> = tags.iter().filter_map(|t| t.key.as_deref()).collect();
    assert_eq!(keys, vec!["React", "TypeScript"]);
}

#[test]
fn test_unknown_icon_fails_before_rendering() {
    let json = serde_json::json!({
        "name": "Test Person",
        "title": "Engineer",
        "about": "Builds things.",
        "avatar": "avatar.png",
        "contact": {"email": "test@example.com", "location": "Remote"},
        "socials": [
            {"platform": "GitHub", "url": "https://github.com", "icon": "Github"},
            {"platform": "Fediverse", "url": "https://example.social", "icon": "Mastodon"}
        ]
    });

    let err = PortfolioFile::from_json_str(&json.to_string())
        .unwrap()
        .into_portfolio()
        .unwrap_err();

    match &err {
        SiteError::ConfigError { entity, field, .. } => {
            assert!(entity.contains("Fediverse"));
            assert_eq!(field, "icon");
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_footer_year_is_current_year() {
    let tree = render_now(&fixture());
    let footer = &tree.section(SectionKind::Footer).unwrap().root;

    assert_eq!(
        footer.text_content(),
        format!("\u{a9} {} Test Person. All rights reserved.", current_year())
    );
}

#[test]
fn test_html_contains_sections_in_order() {
    let doc = to_document(&render(&fixture(), &ctx()));

    let positions: Vec<usize> = [
        "class=\"site-header\"",
        "id=\"about\"",
        "id=\"skills\"",
        "id=\"projects\"",
        "id=\"experience\"",
        "class=\"site-footer\"",
    ]
    .iter()
    .map(|marker| doc.find(marker).expect("section marker present"))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
