//! Page catalogue and route table

use crate::error::{FolioError, Result};
use crate::page::{Feature, Page, PageKind, Section};

static HOME: Page = Page {
    slug: "home",
    path: "/",
    title: "Home",
    kind: PageKind::Landing,
    summary: "Developer, mentor and writer.",
    sections: &[Section {
        id: "welcome",
        title: "Welcome",
        body: &[
            "I build web applications and teach the fundamentals behind them.",
            "Browse the projects, read about the services on offer, or start the free course.",
        ],
    }],
    default_open: None,
    feature: None,
};

static ABOUT: Page = Page {
    slug: "about",
    path: "/about",
    title: "About",
    kind: PageKind::Info,
    summary: "Background and what I work on.",
    sections: &[
        Section {
            id: "story",
            title: "Story",
            body: &[
                "I started programming by rebuilding small tools I used every day.",
                "Today I split my time between client work and teaching.",
            ],
        },
        Section {
            id: "values",
            title: "How I work",
            body: &[
                "Small increments, written decisions, and code that the next person can read.",
            ],
        },
    ],
    default_open: None,
    feature: None,
};

static SKILLS: Page = Page {
    slug: "skills",
    path: "/skills",
    title: "Skills",
    kind: PageKind::Info,
    summary: "Languages and tools I use.",
    sections: &[],
    default_open: None,
    feature: Some(Feature::Skills),
};

static SERVICES: Page = Page {
    slug: "services",
    path: "/services",
    title: "Services",
    kind: PageKind::Info,
    summary: "What I can help with.",
    sections: &[],
    default_open: None,
    feature: Some(Feature::Services),
};

static PROJECTS: Page = Page {
    slug: "projects",
    path: "/projects",
    title: "Projects",
    kind: PageKind::Info,
    summary: "Selected work.",
    sections: &[],
    default_open: None,
    feature: Some(Feature::Projects),
};

static RESUME: Page = Page {
    slug: "resume",
    path: "/resume",
    title: "Resume",
    kind: PageKind::Info,
    summary: "Experience and education. A PDF copy is available for download.",
    sections: &[
        Section {
            id: "experience",
            title: "Experience",
            body: &[
                "Freelance developer: web applications and APIs for small businesses.",
                "Teaching assistant: data structures and algorithms.",
            ],
        },
        Section {
            id: "education",
            title: "Education",
            body: &["B.Tech in Computer Science."],
        },
    ],
    default_open: None,
    feature: Some(Feature::Resume),
};

static DSA: Page = Page {
    slug: "dsa",
    path: "/dsa",
    title: "DSA Course",
    kind: PageKind::Landing,
    summary: "A free course on data structures and algorithms.",
    sections: &[Section {
        id: "overview",
        title: "Overview",
        body: &[
            "Short lessons, each followed by practice problems on a public judge.",
        ],
    }],
    default_open: None,
    feature: Some(Feature::Course),
};

static CONTACT: Page = Page {
    slug: "contact",
    path: "/contact",
    title: "Contact",
    kind: PageKind::Info,
    summary: "Get in touch.",
    sections: &[Section {
        id: "reach",
        title: "Reach me",
        body: &["Email is the fastest way to reach me. I reply within two working days."],
    }],
    default_open: None,
    feature: Some(Feature::Contact),
};

static PRIVACY: Page = Page {
    slug: "privacy",
    path: "/privacy",
    title: "Privacy Policy",
    kind: PageKind::Legal,
    summary: "How this site handles personal data.",
    sections: &[
        Section {
            id: "introduction",
            title: "Introduction",
            body: &[
                "This policy explains what information this site collects and how it is used.",
            ],
        },
        Section {
            id: "collection",
            title: "Information collected",
            body: &[
                "The site itself stores nothing about you.",
                "If you email me, I keep the message and your address to reply.",
            ],
        },
        Section {
            id: "cookies",
            title: "Cookies",
            body: &["No tracking cookies are set. See the cookie policy for details."],
        },
        Section {
            id: "third-parties",
            title: "Third-party services",
            body: &[
                "Links to external platforms (video, practice problems, social networks) are governed by their own policies.",
            ],
        },
        Section {
            id: "rights",
            title: "Your rights",
            body: &[
                "You may ask for a copy of any correspondence I hold, or for its deletion.",
            ],
        },
        Section {
            id: "contact",
            title: "Contact",
            body: &["Privacy questions can be sent to the address on the contact page."],
        },
    ],
    default_open: Some("introduction"),
    feature: None,
};

static TERMS: Page = Page {
    slug: "terms",
    path: "/terms",
    title: "Terms of Use",
    kind: PageKind::Legal,
    summary: "Conditions for using this site and its course material.",
    sections: &[
        Section {
            id: "introduction",
            title: "Introduction",
            body: &["By using this site you agree to these terms."],
        },
        Section {
            id: "content",
            title: "Use of content",
            body: &[
                "Course material is for personal study. Do not republish it without permission.",
            ],
        },
        Section {
            id: "links",
            title: "External links",
            body: &["I am not responsible for the content of linked third-party sites."],
        },
        Section {
            id: "liability",
            title: "Limitation of liability",
            body: &["The site is provided as-is, without warranty of any kind."],
        },
        Section {
            id: "changes",
            title: "Changes",
            body: &["These terms may change. The date at the top of the page reflects the latest revision."],
        },
    ],
    default_open: Some("introduction"),
    feature: None,
};

static ACCESS: Page = Page {
    slug: "access",
    path: "/access",
    title: "Accessibility",
    kind: PageKind::Legal,
    summary: "Accessibility statement.",
    sections: &[
        Section {
            id: "introduction",
            title: "Introduction",
            body: &["I want this site to be usable by everyone."],
        },
        Section {
            id: "measures",
            title: "Measures taken",
            body: &[
                "Semantic markup, keyboard navigation, and sufficient colour contrast.",
                "Every page can also be read from a terminal.",
            ],
        },
        Section {
            id: "limitations",
            title: "Known limitations",
            body: &["Some embedded third-party videos may lack captions."],
        },
        Section {
            id: "feedback",
            title: "Feedback",
            body: &["Report accessibility problems through the contact page."],
        },
    ],
    default_open: Some("introduction"),
    feature: None,
};

static COOKIES: Page = Page {
    slug: "cookies",
    path: "/cookies",
    title: "Cookie Policy",
    kind: PageKind::Legal,
    summary: "Which cookies this site uses.",
    sections: &[
        Section {
            id: "introduction",
            title: "Introduction",
            body: &["Cookies are small files stored by your browser."],
        },
        Section {
            id: "usage",
            title: "Cookies used",
            body: &["This site sets no cookies of its own."],
        },
        Section {
            id: "embedded",
            title: "Embedded content",
            body: &["Embedded videos may set cookies from their provider once played."],
        },
        Section {
            id: "control",
            title: "Managing cookies",
            body: &["You can block or delete cookies in your browser settings."],
        },
    ],
    default_open: Some("introduction"),
    feature: Some(Feature::Faq),
};

static PAGES: &[&Page] = &[
    &HOME, &ABOUT, &SKILLS, &SERVICES, &PROJECTS, &RESUME, &DSA, &CONTACT, &PRIVACY, &TERMS,
    &ACCESS, &COOKIES,
];

/// Immutable registry of every page on the site
#[derive(Debug, Clone, Copy)]
pub struct Site {
    pages: &'static [&'static Page],
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl Site {
    pub fn new() -> Self {
        Self { pages: PAGES }
    }

    /// Pages in navigation order
    pub fn pages(&self) -> impl Iterator<Item = &'static Page> + '_ {
        self.pages.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&'static Page> {
        self.pages().find(|p| p.slug == slug)
    }

    /// Resolve a route path. A trailing slash is ignored.
    pub fn by_path(&self, path: &str) -> Option<&'static Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        self.pages().find(|p| p.path == normalized)
    }

    /// Lookup by slug, then by path
    pub fn resolve(&self, key: &str) -> Result<&'static Page> {
        self.by_slug(key)
            .or_else(|| self.by_path(key))
            .ok_or_else(|| FolioError::unknown_page(key))
    }

    pub fn index_of(&self, slug: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.slug == slug)
    }

    /// Page after `slug`, wrapping around
    pub fn next(&self, slug: &str) -> &'static Page {
        let idx = self.index_of(slug).map(|i| (i + 1) % self.len()).unwrap_or(0);
        self.pages[idx]
    }

    /// Page before `slug`, wrapping around
    pub fn prev(&self, slug: &str) -> &'static Page {
        let idx = self
            .index_of(slug)
            .map(|i| (i + self.len() - 1) % self.len())
            .unwrap_or(0);
        self.pages[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_and_paths_are_unique() {
        let site = Site::new();
        let slugs: HashSet<_> = site.pages().map(|p| p.slug).collect();
        let paths: HashSet<_> = site.pages().map(|p| p.path).collect();
        assert_eq!(slugs.len(), site.len());
        assert_eq!(paths.len(), site.len());
    }

    #[test]
    fn section_ids_unique_per_page() {
        for page in Site::new().pages() {
            let ids: HashSet<_> = page.section_ids().collect();
            assert_eq!(ids.len(), page.sections.len(), "duplicate id on {}", page.slug);
            if let Some(open) = page.default_open {
                assert!(page.section(open).is_some(), "{} default_open missing", page.slug);
            }
        }
    }

    #[test]
    fn resolves_static_paths() {
        let site = Site::new();
        for path in ["/privacy", "/terms", "/access", "/dsa", "/contact"] {
            assert_eq!(site.by_path(path).unwrap().path, path);
        }
        assert_eq!(site.by_path("/privacy/").unwrap().slug, "privacy");
        assert_eq!(site.by_path("").unwrap().slug, "home");
        assert!(site.by_path("/nope").is_none());
    }

    #[test]
    fn resolve_accepts_slug_or_path() {
        let site = Site::new();
        assert_eq!(site.resolve("terms").unwrap().slug, "terms");
        assert_eq!(site.resolve("/access").unwrap().slug, "access");
        assert!(matches!(
            site.resolve("blog"),
            Err(FolioError::UnknownPage { .. })
        ));
    }

    #[test]
    fn next_and_prev_wrap() {
        let site = Site::new();
        assert_eq!(site.next("cookies").slug, "home");
        assert_eq!(site.prev("home").slug, "cookies");
        assert_eq!(site.next("home").slug, "about");
    }
}
