//! Line-oriented rendering of a page for text surfaces (terminal, markdown)
//!
//! The outline respects navigator state: collapsed sections contribute only
//! their header line. Callers style lines by [`LineKind`] and use
//! [`Outline::section_line`] to resolve scroll requests.

use crate::config::FolioConfig;
use crate::navigator::{Navigator, SectionState};
use crate::page::{Feature, Page};
use crate::records::{DSA_COURSE, FAQ, PROJECTS, SERVICES, SKILLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Summary,
    SectionHeader { id: &'static str, state: SectionState },
    Body,
    CardTitle,
    CardBody,
    Link,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Outline {
    pub lines: Vec<OutlineLine>,
}

impl Outline {
    /// Build the outline of `page`. `nav` is `None` for flat pages.
    pub fn build(page: &Page, nav: Option<&Navigator>, config: &FolioConfig) -> Self {
        let mut out = Outline::default();
        out.push(LineKind::Title, page.title);
        out.push(LineKind::Summary, page.summary);
        out.blank();

        for section in page.sections {
            let state = nav
                .map(|n| n.state_of(section.id))
                .unwrap_or(SectionState::Expanded);
            let marker = match (nav.is_some(), state) {
                (false, _) => "",
                (true, SectionState::Collapsed) => "▸ ",
                (true, SectionState::Expanded) => "▾ ",
                (true, SectionState::ExpandedActive) => "▾ ● ",
            };
            out.push(
                LineKind::SectionHeader {
                    id: section.id,
                    state,
                },
                format!("{marker}{}", section.title),
            );
            if state != SectionState::Collapsed {
                for para in section.body {
                    out.push(LineKind::Body, *para);
                }
                out.blank();
            }
        }

        if let Some(feature) = page.feature {
            out.feature(feature, config);
        }

        out
    }

    /// Index of the header line for section `id`, if it was laid out
    pub fn section_line(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|line| {
            matches!(&line.kind, LineKind::SectionHeader { id: sid, .. } if *sid == id)
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Markdown rendering, used by `folio show`
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        for line in &self.lines {
            let text = match &line.kind {
                LineKind::Title => format!("# {}", line.text),
                LineKind::Summary => format!("_{}_", line.text),
                LineKind::SectionHeader { .. } => format!("## {}", line.text),
                LineKind::CardTitle => format!("### {}", line.text),
                LineKind::CardBody | LineKind::Body => line.text.clone(),
                LineKind::Link => format!("- <{}>", line.text),
                LineKind::Blank => String::new(),
            };
            md.push_str(&text);
            md.push('\n');
        }
        md
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(OutlineLine {
            kind,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(LineKind::Blank, "");
    }

    fn feature(&mut self, feature: Feature, config: &FolioConfig) {
        match feature {
            Feature::Services => {
                for service in SERVICES {
                    self.push(LineKind::CardTitle, service.name);
                    self.push(LineKind::CardBody, service.summary);
                    for item in service.deliverables {
                        self.push(LineKind::CardBody, format!("  • {item}"));
                    }
                    self.blank();
                }
            }
            Feature::Skills => {
                for group in SKILLS {
                    self.push(LineKind::CardTitle, group.category);
                    for skill in group.skills {
                        self.push(
                            LineKind::CardBody,
                            format!("  {} {}", skill.level.dots(), skill.name),
                        );
                    }
                    self.blank();
                }
            }
            Feature::Projects => {
                for project in PROJECTS {
                    self.push(LineKind::CardTitle, project.name);
                    self.push(LineKind::CardBody, project.summary);
                    self.push(LineKind::CardBody, format!("  [{}]", project.stack.join(", ")));
                    for url in project.repo.iter().chain(project.demo.iter()) {
                        self.push(LineKind::Link, *url);
                    }
                    self.blank();
                }
            }
            Feature::Course => {
                let course = &DSA_COURSE;
                self.push(
                    LineKind::CardTitle,
                    format!("{} ({})", course.title, course.level),
                );
                self.push(LineKind::CardBody, course.summary);
                for (n, lesson) in course.lessons.iter().enumerate() {
                    self.push(
                        LineKind::CardBody,
                        format!("  {:>2}. {} ({} min)", n + 1, lesson.title, lesson.minutes),
                    );
                }
                self.push(
                    LineKind::CardBody,
                    format!("  Total: {} min", course.total_minutes()),
                );
                if let Some(url) = course.practice {
                    self.push(LineKind::Link, url);
                }
                self.blank();
            }
            Feature::Faq => {
                for faq in FAQ {
                    self.push(LineKind::CardTitle, faq.question);
                    self.push(LineKind::CardBody, faq.answer);
                    self.blank();
                }
            }
            Feature::Contact => {
                self.push(LineKind::CardTitle, config.site.owner.as_str());
                match config.contact_links() {
                    Ok(links) => {
                        for link in links {
                            self.push(LineKind::Link, link.href());
                        }
                    }
                    Err(e) => tracing::warn!("skipping contact links: {e:#}"),
                }
                self.blank();
            }
            Feature::Resume => {
                if let Ok(link) = config.resume_link() {
                    self.push(LineKind::Link, link.href());
                }
            }
        }
    }
}
