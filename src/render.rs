//! Content collections → view nodes.
//!
//! Every render replaces the container's children entirely. A collection
//! missing from the document leaves its container untouched; an empty one
//! follows the collection's [`CollectionPolicy`].

use crate::content::{ProjectEntry, ServiceEntry, SkillCategory, SkillItem};
use crate::dom::{Element, Node};
use crate::i18n::Localizer;
use crate::template::{slots, Page};
use tracing::debug;

/// Icon class shown on every service card.
pub const SERVICE_ICON: &str = "fas fa-chart-line";

/// Icon class for skill categories without one.
pub const DEFAULT_SKILL_ICON: &str = "fas fa-star";

/// Text shown in place of an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    SkillsLoading,
    ProjectsLoading,
}

impl Placeholder {
    fn text(&self, localizer: &Localizer<'_>) -> &'static str {
        let strings = localizer.strings();
        match self {
            Placeholder::SkillsLoading => strings.skills_loading,
            Placeholder::ProjectsLoading => strings.projects_loading,
        }
    }
}

/// How a collection renders when its list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionPolicy {
    /// `None` renders zero nodes.
    pub empty_placeholder: Option<Placeholder>,
}

impl CollectionPolicy {
    pub fn placeholder(placeholder: Placeholder) -> Self {
        Self {
            empty_placeholder: Some(placeholder),
        }
    }

    pub fn bare() -> Self {
        Self {
            empty_placeholder: None,
        }
    }
}

/// Per-collection policies.
///
/// The default keeps services bare while skills and projects show a
/// loading placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub services: CollectionPolicy,
    pub skills: CollectionPolicy,
    pub projects: CollectionPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            services: CollectionPolicy::bare(),
            skills: CollectionPolicy::placeholder(Placeholder::SkillsLoading),
            projects: CollectionPolicy::placeholder(Placeholder::ProjectsLoading),
        }
    }
}

/// Result of rendering one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Container now holds this many entry nodes.
    Rendered(usize),
    /// Collection was empty; container holds the placeholder node.
    Placeholder,
    /// Container slot is not on the page.
    MissingSlot,
    /// Document has no such collection; container left untouched.
    MissingSection,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Re-render all three containers.
    pub fn refresh(&self, page: &mut Page, localizer: &Localizer<'_>) {
        let services = self.render_services(page, localizer);
        let skills = self.render_skills(page, localizer);
        let projects = self.render_projects(page, localizer);
        debug!(
            "Rendered [{}]: services={:?} skills={:?} projects={:?}",
            localizer.language(),
            services,
            skills,
            projects
        );
    }

    // ==================== Services ====================

    pub fn render_services(&self, page: &mut Page, localizer: &Localizer<'_>) -> RenderOutcome {
        let Some(services) = localizer.services() else {
            return RenderOutcome::MissingSection;
        };
        let nodes = services.iter().map(service_card).collect();
        fill(page, slots::SERVICES, nodes, self.options.services, localizer)
    }

    // ==================== Skills ====================

    pub fn render_skills(&self, page: &mut Page, localizer: &Localizer<'_>) -> RenderOutcome {
        let Some(skills) = localizer.document().skills.as_ref() else {
            return RenderOutcome::MissingSection;
        };
        let nodes = skills
            .iter()
            .map(|(_, category)| skill_category(category, localizer))
            .collect();
        fill(page, slots::SKILLS, nodes, self.options.skills, localizer)
    }

    // ==================== Projects ====================

    pub fn render_projects(&self, page: &mut Page, localizer: &Localizer<'_>) -> RenderOutcome {
        let Some(projects) = localizer.document().projects.as_ref() else {
            return RenderOutcome::MissingSection;
        };
        let nodes = projects
            .iter()
            .map(|project| project_card(project, localizer))
            .collect();
        fill(page, slots::PROJECTS, nodes, self.options.projects, localizer)
    }
}

fn fill(
    page: &mut Page,
    slot: &str,
    nodes: Vec<Node>,
    policy: CollectionPolicy,
    localizer: &Localizer<'_>,
) -> RenderOutcome {
    let Some(container) = page.slot_mut(slot) else {
        return RenderOutcome::MissingSlot;
    };

    if nodes.is_empty() {
        if let Some(placeholder) = policy.empty_placeholder {
            container.replace_children(vec![placeholder_node(placeholder.text(localizer))]);
            return RenderOutcome::Placeholder;
        }
    }

    let count = nodes.len();
    container.replace_children(nodes);
    RenderOutcome::Rendered(count)
}

fn placeholder_node(text: &str) -> Node {
    Element::new("p")
        .with_class("loading-placeholder")
        .with_text(text)
        .into()
}

fn icon(class: &str) -> Element {
    Element::new("i").with_class(class)
}

fn service_card(service: &ServiceEntry) -> Node {
    Element::new("div")
        .with_class("service-card")
        .with_child(
            Element::new("div")
                .with_class("service-icon")
                .with_child(icon(SERVICE_ICON)),
        )
        .with_child(Element::new("h4").with_text(service.title.as_str()))
        .with_child(Element::new("p").with_text(service.description.as_str()))
        .into()
}

fn skill_category(category: &SkillCategory, localizer: &Localizer<'_>) -> Node {
    let icon_class = category
        .icon
        .as_deref()
        .filter(|icon| !icon.is_empty())
        .unwrap_or(DEFAULT_SKILL_ICON);

    let header = Element::new("h3")
        .with_child(icon(icon_class))
        .with_text(format!(" {}", localizer.field_or_empty(category, "title")));

    Element::new("div")
        .with_class("skill-category")
        .with_child(header)
        .with_children(category.items.iter().map(|item| skill_row(item, localizer)))
        .into()
}

fn skill_row(item: &SkillItem, localizer: &Localizer<'_>) -> Node {
    Element::new("div")
        .with_class("skill-item")
        .with_child(
            Element::new("span")
                .with_class("skill-name")
                .with_text(item.name.as_str()),
        )
        .with_child(
            Element::new("span")
                .with_class("skill-desc")
                .with_text(localizer.field_or_empty(item, "desc")),
        )
        .into()
}

/// Secondary project link: the project's own repository, else the owner's profile.
pub fn secondary_url<'a>(project: &'a ProjectEntry, localizer: &Localizer<'a>) -> Option<&'a str> {
    project
        .github_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .or_else(|| {
            localizer
                .document()
                .user
                .github
                .as_deref()
                .filter(|url| !url.is_empty())
        })
}

fn link(class: &str, href: Option<&str>, label: &str) -> Element {
    let mut anchor = Element::new("a")
        .with_attr("target", "_blank")
        .with_class(class);
    if let Some(href) = href {
        anchor.set_attr("href", href);
    }
    anchor.with_text(label)
}

fn project_card<'a>(project: &'a ProjectEntry, localizer: &Localizer<'a>) -> Node {
    let strings = localizer.strings();

    let mut card = Element::new("div")
        .with_class("project-card")
        .with_child(
            Element::new("div")
                .with_class("project-icon")
                .with_text(project.icon.as_deref().unwrap_or("")),
        )
        .with_child(Element::new("h4").with_text(localizer.field_or_empty(project, "title")))
        .with_child(Element::new("p").with_text(localizer.field_or_empty(project, "desc")));

    if !project.tags.is_empty() {
        card.append(
            Element::new("div")
                .with_class("project-tags")
                .with_children(project.tags.iter().map(|tag| {
                    Node::from(
                        Element::new("span")
                            .with_class("project-tag")
                            .with_text(tag.as_str()),
                    )
                })),
        );
    }

    card.append(
        Element::new("div")
            .with_class("project-links")
            .with_child(link(
                "project-link primary",
                project.url.as_deref().filter(|url| !url.is_empty()),
                localizer.translate_or("view_live", strings.view_live),
            ))
            .with_child(link(
                "project-link secondary",
                secondary_url(project, localizer),
                localizer.translate_or("view_code", strings.view_code),
            )),
    );

    card.into()
}
