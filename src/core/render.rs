//! Projection of a [`Portfolio`] into a [`VisualTree`].
//!
//! `render` is a pure function of its two arguments. Every collection is
//! walked in source order and every keyed element takes its key from the
//! data (platform, category, item, title, technology, company; bullets use
//! their position). The portfolio is assumed valid: run
//! [`Validate::validate`](crate::utils::validation::Validate) first.

use crate::core::glyph::{self, Glyph};
use crate::core::motion::{MotionTheme, Trigger, HOVER_SCALE, SOCIAL_HOVER_SCALE};
use crate::core::tree::{Element, Node, Section, SectionKind, Tag, VisualTree};
use crate::domain::model::{Contact, Experience, Portfolio, Project, SkillGroup, SocialLink};
use chrono::Datelike;
use serde::Serialize;

pub const LIVE_DEMO_LABEL: &str = "Live Demo";
pub const CODE_LABEL: &str = "Code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub year: i32,
    pub motion: MotionTheme,
}

impl RenderContext {
    pub fn new(year: i32, motion: MotionTheme) -> Self {
        Self { year, motion }
    }

    /// Current local calendar year with motion on.
    pub fn now() -> Self {
        Self::new(current_year(), MotionTheme::enabled())
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn render(portfolio: &Portfolio, ctx: &RenderContext) -> VisualTree {
    let sections = vec![
        Section {
            kind: SectionKind::Header,
            root: header(portfolio, &ctx.motion),
        },
        Section {
            kind: SectionKind::About,
            root: about(&portfolio.about, &ctx.motion),
        },
        Section {
            kind: SectionKind::Skills,
            root: skills(&portfolio.skills, &ctx.motion),
        },
        Section {
            kind: SectionKind::Projects,
            root: projects(&portfolio.projects, &ctx.motion),
        },
        Section {
            kind: SectionKind::Experience,
            root: experiences(&portfolio.experiences, &ctx.motion),
        },
        Section {
            kind: SectionKind::Footer,
            root: footer(&portfolio.name, ctx),
        },
    ];

    VisualTree {
        title: format!("{} - {}", portfolio.name, portfolio.title),
        sections,
    }
}

pub fn render_now(portfolio: &Portfolio) -> VisualTree {
    render(portfolio, &RenderContext::now())
}

fn container() -> Element {
    Element::new(Tag::Div).class("container")
}

fn external_link(href: &str) -> Element {
    Element::new(Tag::A)
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

fn icon_row(glyph: &Glyph, size: u32, text: &str) -> Vec<Node> {
    vec![glyph.element(size).into(), text.into()]
}

/// Section shell shared by About, Skills, Projects and Experience.
fn content_section(id: &str, tone: &str, heading: &str, motion: &MotionTheme) -> (Element, Element) {
    let section = Element::new(Tag::Section)
        .class(&format!("section {}", tone))
        .attr("id", id)
        .motion(motion.section_fade(Trigger::InView));
    let inner = container().child(
        Element::new(Tag::H2)
            .class("section-title")
            .motion(motion.rise(Trigger::InView))
            .text(heading),
    );
    (section, inner)
}

fn header(portfolio: &Portfolio, motion: &MotionTheme) -> Element {
    let avatar = Element::new(Tag::Img)
        .class("avatar img")
        .attr("src", portfolio.avatar.as_str())
        .attr("alt", portfolio.name.as_str())
        .motion(motion.hover(HOVER_SCALE));

    let identity = Element::new(Tag::Div)
        .class("identity")
        .child(
            Element::new(Tag::H1)
                .class("name")
                .motion(motion.slide_in(Trigger::Mount, 200))
                .text(portfolio.name.as_str()),
        )
        .child(
            Element::new(Tag::P)
                .class("headline")
                .motion(motion.slide_in(Trigger::Mount, 300))
                .text(portfolio.title.as_str()),
        )
        .child(socials(&portfolio.socials, motion))
        .child(contact(&portfolio.contact, motion));

    Element::new(Tag::Header)
        .class("site-header")
        .motion(motion.section_fade(Trigger::Mount))
        .child(
            container().child(
                Element::new(Tag::Div)
                    .class("hero")
                    .motion(motion.lift_in())
                    .child(avatar)
                    .child(identity),
            ),
        )
}

fn socials(socials: &[SocialLink], motion: &MotionTheme) -> Element {
    Element::new(Tag::Div)
        .class("socials")
        .children(socials.iter().enumerate().map(|(index, social)| {
            external_link(&social.url)
                .class("social")
                .key(social.platform.as_str())
                .attr("aria-label", social.platform.as_str())
                .motion(motion.link(Trigger::Mount, index, SOCIAL_HOVER_SCALE))
                .child(glyph::social_glyph(social.icon).element(24))
        }))
}

fn contact(contact: &Contact, motion: &MotionTheme) -> Element {
    Element::new(Tag::Div)
        .class("contact")
        .child(
            Element::new(Tag::A)
                .class("contact-item contact-email")
                .key("email")
                .attr("href", format!("mailto:{}", contact.email))
                .motion(motion.link(Trigger::Mount, 0, HOVER_SCALE))
                .children(icon_row(&glyph::MAIL, 18, &contact.email)),
        )
        .child(
            Element::new(Tag::Div)
                .class("contact-item contact-location")
                .key("location")
                .motion(motion.staggered(Trigger::Mount, 1))
                .children(icon_row(&glyph::MAP_PIN, 18, &contact.location)),
        )
}

fn about(about: &str, motion: &MotionTheme) -> Element {
    let (section, inner) = content_section("about", "section-light", "About Me", motion);
    section.child(
        inner.child(
            Element::new(Tag::P)
                .class("about")
                .motion(motion.rise(Trigger::InView))
                .text(about),
        ),
    )
}

fn tag_list<'a, I>(values: I, motion: &MotionTheme) -> Element
where
    I: IntoIterator<Item = &'a String>,
{
    Element::new(Tag::Div)
        .class("tags")
        .children(values.into_iter().map(|value| {
            Element::new(Tag::Span)
                .class("tag")
                .key(value.as_str())
                .motion(motion.hover(HOVER_SCALE))
                .text(value.as_str())
        }))
}

fn skills(groups: &[SkillGroup], motion: &MotionTheme) -> Element {
    let (section, inner) = content_section("skills", "section-muted", "Skills", motion);
    let grid = Element::new(Tag::Div)
        .class("grid grid-3")
        .children(groups.iter().enumerate().map(|(index, group)| {
            Element::new(Tag::Div)
                .class("card skill-group")
                .key(group.category.as_str())
                .motion(motion.card(index))
                .child(
                    Element::new(Tag::H3)
                        .class("card-title")
                        .text(group.category.as_str()),
                )
                .child(tag_list(&group.items, motion))
        }));
    section.child(inner.child(grid))
}

/// Live Demo and Code links, each present only when its URL is. The
/// container is always emitted.
fn project_actions(project: &Project, motion: &MotionTheme) -> Element {
    let live = project.live_link().map(|href| {
        external_link(href)
            .class("action action-live")
            .key("live")
            .children(icon_row(&glyph::EXTERNAL_LINK, 18, LIVE_DEMO_LABEL))
    });
    let code = project.source_link().map(|href| {
        external_link(href)
            .class("action action-code")
            .key("code")
            .children(icon_row(&glyph::GITHUB, 18, CODE_LABEL))
    });

    Element::new(Tag::Div).class("actions").children(
        live.into_iter()
            .chain(code)
            .enumerate()
            .map(|(index, link)| link.motion(motion.link(Trigger::Mount, index, HOVER_SCALE))),
    )
}

fn project_card(index: usize, project: &Project, motion: &MotionTheme) -> Element {
    let body = Element::new(Tag::Div)
        .class("card-body")
        .child(
            Element::new(Tag::H3)
                .class("card-title")
                .text(project.title.as_str()),
        )
        .child(
            Element::new(Tag::P)
                .class("description")
                .text(project.description.as_str()),
        )
        .child(tag_list(&project.technologies, motion))
        .child(project_actions(project, motion));

    Element::new(Tag::Div)
        .class("card project")
        .key(project.title.as_str())
        .motion(motion.card(index))
        .child(
            Element::new(Tag::Img)
                .class("project-image img")
                .attr("src", project.image_url.as_str())
                .attr("alt", project.title.as_str())
                .attr("loading", "lazy")
                .motion(motion.hover(HOVER_SCALE)),
        )
        .child(body)
}

fn projects(projects: &[Project], motion: &MotionTheme) -> Element {
    let (section, inner) = content_section("projects", "section-light", "Projects", motion);
    let grid = Element::new(Tag::Div).class("grid grid-2").children(
        projects
            .iter()
            .enumerate()
            .map(|(index, project)| project_card(index, project, motion)),
    );
    section.child(inner.child(grid))
}

fn experience_card(index: usize, experience: &Experience, motion: &MotionTheme) -> Element {
    let head = Element::new(Tag::Div)
        .class("experience-head")
        .child(
            Element::new(Tag::Div)
                .child(
                    Element::new(Tag::H3)
                        .class("card-title")
                        .text(experience.position.as_str()),
                )
                .child(
                    Element::new(Tag::P)
                        .class("company")
                        .text(experience.company.as_str()),
                ),
        )
        .child(
            Element::new(Tag::P)
                .class("duration")
                .text(experience.duration.as_str()),
        );

    let bullets = Element::new(Tag::Ul).class("bullets").children(
        experience
            .description
            .iter()
            .enumerate()
            .map(|(position, bullet)| {
                Element::new(Tag::Li)
                    .class("bullet")
                    .key(position.to_string())
                    .motion(motion.bullet(position))
                    .text(bullet.as_str())
            }),
    );

    Element::new(Tag::Div)
        .class("card experience")
        .key(experience.company.as_str())
        .motion(motion.card(index))
        .child(head)
        .child(bullets)
}

fn experiences(experiences: &[Experience], motion: &MotionTheme) -> Element {
    let (section, inner) = content_section("experience", "section-muted", "Experience", motion);
    let stack = Element::new(Tag::Div).class("stack").children(
        experiences
            .iter()
            .enumerate()
            .map(|(index, experience)| experience_card(index, experience, motion)),
    );
    section.child(inner.child(stack))
}

fn footer(name: &str, ctx: &RenderContext) -> Element {
    Element::new(Tag::Footer)
        .class("site-footer")
        .motion(ctx.motion.section_fade(Trigger::InView))
        .child(
            container().child(
                Element::new(Tag::P)
                    .class("copyright")
                    .text(format!("\u{a9} {} {}. All rights reserved.", ctx.year, name)),
            ),
        )
}
