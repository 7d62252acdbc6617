//! Static record lists rendered as cards (services, skills, projects, ...)

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub summary: &'static str,
    pub deliverables: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Familiar,
    Proficient,
    Expert,
}

impl Proficiency {
    /// Filled dots out of three, for compact display
    pub fn dots(&self) -> &'static str {
        match self {
            Proficiency::Familiar => "●○○",
            Proficiency::Proficient => "●●○",
            Proficiency::Expert => "●●●",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: Proficiency,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Lesson {
    pub title: &'static str,
    pub minutes: u16,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub level: &'static str,
    pub summary: &'static str,
    pub lessons: &'static [Lesson],
    /// Practice problem list or playlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice: Option<&'static str>,
}

impl Course {
    pub fn total_minutes(&self) -> u32 {
        self.lessons.iter().map(|l| u32::from(l.minutes)).sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        name: "Web development",
        summary: "Responsive sites and web applications built from scratch or on top of an existing codebase.",
        deliverables: &["Component library", "Accessible markup", "Deployment pipeline"],
    },
    Service {
        name: "Backend & APIs",
        summary: "HTTP services, data models and integrations with third-party platforms.",
        deliverables: &["REST/JSON API", "Database schema", "Monitoring hooks"],
    },
    Service {
        name: "Mentoring",
        summary: "One-on-one sessions on data structures, algorithms and interview preparation.",
        deliverables: &["Study plan", "Weekly problem sets", "Mock interviews"],
    },
    Service {
        name: "Technical writing",
        summary: "Tutorials, documentation and course material for developer audiences.",
        deliverables: &["Outline", "Drafts with code samples", "Review rounds"],
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &[
            Skill { name: "Rust", level: Proficiency::Proficient },
            Skill { name: "TypeScript", level: Proficiency::Expert },
            Skill { name: "Python", level: Proficiency::Proficient },
            Skill { name: "C++", level: Proficiency::Familiar },
        ],
    },
    SkillGroup {
        category: "Frontend",
        skills: &[
            Skill { name: "HTML & CSS", level: Proficiency::Expert },
            Skill { name: "React", level: Proficiency::Expert },
            Skill { name: "Accessibility", level: Proficiency::Proficient },
        ],
    },
    SkillGroup {
        category: "Backend",
        skills: &[
            Skill { name: "Node.js", level: Proficiency::Proficient },
            Skill { name: "PostgreSQL", level: Proficiency::Proficient },
            Skill { name: "Docker", level: Proficiency::Familiar },
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        name: "Course platform",
        summary: "Landing pages and lesson player for a data structures course.",
        stack: &["TypeScript", "React"],
        repo: None,
        demo: Some("https://example.com/dsa"),
    },
    Project {
        name: "Link shortener",
        summary: "Small HTTP service with click statistics and expiring links.",
        stack: &["Rust", "PostgreSQL"],
        repo: Some("https://github.com/example/shortener"),
        demo: None,
    },
    Project {
        name: "Terminal portfolio",
        summary: "This site, browsable from a terminal as well as a browser.",
        stack: &["Rust", "ratatui", "axum"],
        repo: Some("https://github.com/example/folio"),
        demo: None,
    },
];

pub static DSA_COURSE: Course = Course {
    title: "Data Structures & Algorithms",
    level: "Beginner to intermediate",
    summary: "A guided path through the core data structures with daily practice problems.",
    lessons: &[
        Lesson { title: "Complexity and arrays", minutes: 45 },
        Lesson { title: "Linked lists", minutes: 40 },
        Lesson { title: "Stacks and queues", minutes: 35 },
        Lesson { title: "Trees and traversal", minutes: 60 },
        Lesson { title: "Graphs", minutes: 70 },
        Lesson { title: "Dynamic programming", minutes: 80 },
    ],
    practice: Some("https://leetcode.com/problemset/"),
};

pub static FAQ: &[Faq] = &[
    Faq {
        question: "Do I need prior experience?",
        answer: "Basic familiarity with one programming language is enough.",
    },
    Faq {
        question: "Which language are the solutions in?",
        answer: "Solutions are given in C++ and Python; the ideas carry over to any language.",
    },
    Faq {
        question: "How long do I keep access?",
        answer: "Access to lessons does not expire.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_minutes_sum_lessons() {
        assert_eq!(DSA_COURSE.total_minutes(), 330);
    }

    #[test]
    fn proficiency_orders_by_level() {
        assert!(Proficiency::Expert > Proficiency::Familiar);
        assert_eq!(Proficiency::Proficient.dots(), "●●○");
    }
}
