//! HTML rendering for site pages
//!
//! Accordion state travels in the query string: `x` lists expanded ids,
//! `a` is the active id. Every header link encodes the state that results
//! from toggling that section, so the pages work without scripts.

use folio_core::records::{DSA_COURSE, FAQ, PROJECTS, SERVICES, SKILLS};
use folio_core::{
    Feature, FolioConfig, Navigator, Page, PageKind, ScrollHost, ScrollRequest, Site,
};

/// Scroll host for server-rendered pages: remembers the requested anchor
/// when the page actually renders that section.
#[derive(Debug)]
pub struct AnchorHost<'a> {
    page: &'a Page,
    target: Option<ScrollRequest>,
}

impl<'a> AnchorHost<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self { page, target: None }
    }

    pub fn target(&self) -> Option<&ScrollRequest> {
        self.target.as_ref()
    }
}

impl ScrollHost for AnchorHost<'_> {
    fn request_scroll(&mut self, request: ScrollRequest) {
        if self.page.section(&request.id).is_some() {
            self.target = Some(request);
        } else {
            tracing::trace!(page = self.page.slug, id = %request.id, "no anchor for scroll target");
        }
    }
}

/// Query string carrying navigator state, without the leading `?`
pub fn state_query(expanded: &[&str], active: Option<&str>) -> String {
    let mut parts = vec![format!("x={}", urlencoding::encode(&expanded.join(",")))];
    if let Some(active) = active {
        parts.push(format!("a={}", urlencoding::encode(active)));
    }
    parts.join("&")
}

/// Split the `x` parameter into ids, dropping empty items
pub fn parse_expanded(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

/// Render a complete HTML document for `page`
pub fn render_page(
    site: &Site,
    page: &Page,
    nav: Option<&Navigator>,
    anchor: Option<&ScrollRequest>,
    config: &FolioConfig,
) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    escape_into(&mut out, page.title);
    out.push_str(" · ");
    escape_into(&mut out, &config.site.owner);
    out.push_str("</title>\n<link rel=\"stylesheet\" href=\"/assets/site.css\">\n</head>\n");

    match anchor {
        Some(target) => {
            out.push_str("<body data-scroll-target=\"");
            escape_into(&mut out, &target.id);
            out.push_str("\">\n");
        }
        None => out.push_str("<body>\n"),
    }

    header(&mut out, site, page);

    out.push_str("<main class=\"page page-");
    out.push_str(page.kind.as_str());
    out.push_str("\">\n<h1>");
    escape_into(&mut out, page.title);
    out.push_str("</h1>\n<p class=\"summary\">");
    escape_into(&mut out, page.summary);
    out.push_str("</p>\n");

    match nav {
        Some(nav) => disclosure(&mut out, page, nav),
        None => flat_sections(&mut out, page),
    }

    if let Some(feature) = page.feature {
        cards(&mut out, feature, config);
    }

    out.push_str("</main>\n");
    footer(&mut out, site, config);
    out.push_str("</body>\n</html>\n");
    out
}

fn header(out: &mut String, site: &Site, current: &Page) {
    out.push_str("<header class=\"site-header\"><nav>\n");
    for page in site.pages().filter(|p| p.kind != PageKind::Legal) {
        let class = if page.slug == current.slug { " class=\"current\"" } else { "" };
        out.push_str(&format!("<a href=\"{}\"{}>", page.path, class));
        escape_into(out, page.title);
        out.push_str("</a>\n");
    }
    out.push_str("</nav></header>\n");
}

fn footer(out: &mut String, site: &Site, config: &FolioConfig) {
    out.push_str("<footer class=\"site-footer\">\n");
    for page in site.pages().filter(|p| p.kind == PageKind::Legal) {
        out.push_str(&format!("<a href=\"{}\">", page.path));
        escape_into(out, page.title);
        out.push_str("</a>\n");
    }
    out.push_str("<p>© ");
    escape_into(out, &config.site.owner);
    out.push_str("</p>\n</footer>\n");
}

fn flat_sections(out: &mut String, page: &Page) {
    for section in page.sections {
        out.push_str(&format!("<section id=\"{}\">\n<h2>", section.id));
        escape_into(out, section.title);
        out.push_str("</h2>\n");
        paragraphs(out, section.body);
        out.push_str("</section>\n");
    }
}

fn disclosure(out: &mut String, page: &Page, nav: &Navigator) {
    let expanded: Vec<&str> = nav.expanded().collect();
    let active = nav.active();
    let current = state_query(&expanded, active);

    out.push_str("<nav class=\"section-index\"><ol>\n");
    for section in page.sections {
        let class = if nav.is_active(section.id) { " class=\"active\"" } else { "" };
        out.push_str(&format!(
            "<li{class}><a href=\"?{}&amp;open={id}#{id}\">",
            escape(&current),
            id = section.id
        ));
        escape_into(out, section.title);
        out.push_str("</a></li>\n");
    }
    out.push_str("</ol></nav>\n");

    for section in page.sections {
        let is_open = nav.is_expanded(section.id);
        let mut classes = vec!["disclosure"];
        if is_open {
            classes.push("open");
        }
        if nav.is_active(section.id) {
            classes.push("active");
        }

        out.push_str(&format!(
            "<section id=\"{}\" class=\"{}\" style=\"scroll-margin-top: {}px\">\n",
            section.id,
            classes.join(" "),
            nav.margin()
        ));
        out.push_str(&format!(
            "<h2><a href=\"?{}&amp;toggle={}\" aria-expanded=\"{}\" aria-controls=\"{}-body\">",
            escape(&current),
            section.id,
            is_open,
            section.id
        ));
        escape_into(out, section.title);
        out.push_str("</a></h2>\n");

        if is_open {
            out.push_str(&format!("<div id=\"{}-body\">\n", section.id));
            paragraphs(out, section.body);
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
    }
}

fn paragraphs(out: &mut String, body: &[&str]) {
    for para in body {
        out.push_str("<p>");
        escape_into(out, para);
        out.push_str("</p>\n");
    }
}

fn link(out: &mut String, href: &str, label: &str, external: bool) {
    out.push_str("<a href=\"");
    escape_into(out, href);
    if external {
        out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer");
    }
    out.push_str("\">");
    escape_into(out, label);
    out.push_str("</a>");
}

fn cards(out: &mut String, feature: Feature, config: &FolioConfig) {
    out.push_str("<div class=\"cards\">\n");
    match feature {
        Feature::Services => {
            for service in SERVICES {
                out.push_str("<article class=\"card\"><h3>");
                escape_into(out, service.name);
                out.push_str("</h3><p>");
                escape_into(out, service.summary);
                out.push_str("</p><ul>");
                for item in service.deliverables {
                    out.push_str("<li>");
                    escape_into(out, item);
                    out.push_str("</li>");
                }
                out.push_str("</ul></article>\n");
            }
        }
        Feature::Skills => {
            for group in SKILLS {
                out.push_str("<article class=\"card\"><h3>");
                escape_into(out, group.category);
                out.push_str("</h3><ul>");
                for skill in group.skills {
                    out.push_str("<li>");
                    escape_into(out, skill.name);
                    out.push_str(&format!(
                        " <span class=\"level\" title=\"{:?}\">{}</span></li>",
                        skill.level,
                        skill.level.dots()
                    ));
                }
                out.push_str("</ul></article>\n");
            }
        }
        Feature::Projects => {
            for project in PROJECTS {
                out.push_str("<article class=\"card\"><h3>");
                escape_into(out, project.name);
                out.push_str("</h3><p>");
                escape_into(out, project.summary);
                out.push_str("</p><p class=\"stack\">");
                escape_into(out, &project.stack.join(" · "));
                out.push_str("</p>");
                if let Some(repo) = project.repo {
                    link(out, repo, "Source", true);
                }
                if let Some(demo) = project.demo {
                    link(out, demo, "Live demo", true);
                }
                out.push_str("</article>\n");
            }
        }
        Feature::Course => {
            let course = &DSA_COURSE;
            out.push_str("<article class=\"card course\"><h3>");
            escape_into(out, course.title);
            out.push_str("</h3><p>");
            escape_into(out, course.summary);
            out.push_str("</p><ol>");
            for lesson in course.lessons {
                out.push_str("<li>");
                escape_into(out, lesson.title);
                out.push_str(&format!(" <small>{} min</small></li>", lesson.minutes));
            }
            out.push_str(&format!(
                "</ol><p>{} lessons, {} minutes</p>",
                course.lessons.len(),
                course.total_minutes()
            ));
            if let Some(practice) = course.practice {
                link(out, practice, "Practice problems", true);
            }
            out.push_str("</article>\n");
        }
        Feature::Faq => {
            for faq in FAQ {
                out.push_str("<details class=\"faq\"><summary>");
                escape_into(out, faq.question);
                out.push_str("</summary><p>");
                escape_into(out, faq.answer);
                out.push_str("</p></details>\n");
            }
        }
        Feature::Contact => match config.contact_links() {
            Ok(links) => {
                out.push_str("<ul class=\"contact\">");
                for l in links {
                    out.push_str("<li>");
                    link(out, &l.href(), l.label(), l.opens_externally());
                    out.push_str("</li>");
                }
                out.push_str("</ul>\n");
            }
            Err(e) => tracing::warn!("contact links unavailable: {e:#}"),
        },
        Feature::Resume => match config.resume_link() {
            Ok(resume) => {
                out.push_str("<p class=\"download\">");
                out.push_str("<a href=\"");
                escape_into(out, &resume.href());
                out.push_str("\" download>Download PDF</a></p>\n");
            }
            Err(e) => tracing::warn!("resume link unavailable: {e:#}"),
        },
    }
    out.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn privacy() -> &'static Page {
        Site::new().by_slug("privacy").unwrap()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn parse_expanded_skips_blanks() {
        assert_eq!(parse_expanded("introduction,, rights,"), vec!["introduction", "rights"]);
        assert!(parse_expanded("").is_empty());
    }

    #[test]
    fn state_query_encodes_ids() {
        assert_eq!(state_query(&["a", "b"], Some("b")), "x=a%2Cb&a=b");
        assert_eq!(state_query(&[], None), "x=");
    }

    #[test]
    fn anchor_host_ignores_missing_sections() {
        let page = privacy();
        let mut nav = page.navigator(100);
        let mut host = AnchorHost::new(page);

        nav.navigate_to("nonexistent-id", &mut host);
        assert!(host.target().is_none());
        assert!(nav.is_active("nonexistent-id"));

        nav.navigate_to("rights", &mut host);
        assert_eq!(host.target().unwrap().id, "rights");
    }

    #[test]
    fn collapsed_sections_omit_body() {
        let site = Site::new();
        let page = privacy();
        let nav = page.navigator(100);
        let html = render_page(&site, page, Some(&nav), None, &FolioConfig::default());

        assert!(html.contains("id=\"introduction-body\""));
        assert!(!html.contains("id=\"rights-body\""));
        assert!(html.contains("scroll-margin-top: 100px"));
        assert!(html.contains("href=\"?x=introduction&amp;toggle=rights\""));
    }

    #[test]
    fn active_section_is_marked() {
        let site = Site::new();
        let page = privacy();
        let mut nav = page.navigator(100);
        let mut host = AnchorHost::new(page);
        nav.navigate_to("rights", &mut host);

        let html = render_page(&site, page, Some(&nav), host.target(), &FolioConfig::default());
        assert!(html.contains("class=\"disclosure open active\""));
        assert!(html.contains("data-scroll-target=\"rights\""));
        assert!(html.contains("id=\"rights-body\""));
    }

    #[test]
    fn flat_page_renders_cards() {
        let site = Site::new();
        let page = site.by_slug("dsa").unwrap();
        let html = render_page(&site, page, None, None, &FolioConfig::default());
        assert!(html.contains("Trees and traversal"));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(!html.contains("section-index"));
    }
}
