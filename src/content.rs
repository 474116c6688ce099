//! Site content records
//!
//! Core abstractions:
//! - `SiteContent`: the whole page's copy, one immutable record per section
//! - `SkillGroup` / `Project` / highlight strings: ordered lists whose order
//!   is display order
//! - `Portrait`: the profile image with its primary and fallback sources
//!
//! Everything here is fixed at compile time. Nothing is ever mutated; the
//! renderer reads these records and the audit checks the rendered page
//! against them.

use serde::Serialize;

/// Stable anchor names for the five navigable sections
pub mod anchor {
    /// Hero section anchor
    pub const HOME: &str = "home";
    /// About section anchor
    pub const ABOUT: &str = "about";
    /// Skills section anchor
    pub const SKILLS: &str = "skills";
    /// Projects section anchor
    pub const PROJECTS: &str = "projects";
    /// Contact section anchor
    pub const CONTACT: &str = "contact";

    /// All anchors in document order
    pub const ALL: [&str; 5] = [HOME, ABOUT, SKILLS, PROJECTS, CONTACT];
}

/// A navigation bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible link text
    pub label: &'static str,
    /// Anchor the link jumps to (without the leading `#`)
    pub anchor: &'static str,
}

/// The fixed navigation bar, one link per section, in document order
pub const NAV: [NavLink; 5] = [
    NavLink {
        label: "Home",
        anchor: anchor::HOME,
    },
    NavLink {
        label: "About",
        anchor: anchor::ABOUT,
    },
    NavLink {
        label: "Skills",
        anchor: anchor::SKILLS,
    },
    NavLink {
        label: "Projects",
        anchor: anchor::PROJECTS,
    },
    NavLink {
        label: "Contact",
        anchor: anchor::CONTACT,
    },
];

/// Tag line and title shown at the top of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeading {
    /// Short uppercase-styled tag (e.g. "Portfolio")
    pub tag: &'static str,
    /// Section title
    pub title: &'static str,
}

/// A call-to-action button in the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Button text
    pub label: &'static str,
    /// Destination: an external URL or an in-page `#anchor`
    pub href: &'static str,
    /// Whether the destination leaves the page (opens a new context)
    pub external: bool,
}

/// A quick-stats figure in the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Headline figure (e.g. "20+")
    pub value: &'static str,
    /// Caption under the figure
    pub label: &'static str,
}

/// The profile image with its fallback chain (of length one)
///
/// The primary source is tried first; if it fails to load, the fallback is
/// substituted exactly once and never retried or reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portrait {
    /// Primary image path (site-root relative)
    pub primary: &'static str,
    /// Fallback image path substituted on load failure
    pub fallback: &'static str,
    /// Alternative text
    pub alt: &'static str,
}

/// Hero section copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    /// Small eyebrow line above the title
    pub eyebrow: &'static str,
    /// Main headline
    pub title: &'static str,
    /// Lead paragraph
    pub lead: &'static str,
    /// Call-to-action buttons, in order
    pub actions: &'static [Action],
    /// Quick-stats figures, in order
    pub stats: &'static [Stat],
    /// Profile image
    pub portrait: Portrait,
}

/// About section copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct About {
    /// Section heading
    pub heading: SectionHeading,
    /// Intro paragraph
    pub intro: &'static str,
    /// Bullet-list highlights, in order
    pub highlights: &'static [&'static str],
}

/// A titled group of skills (e.g. "Frontend")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    /// Group heading
    pub title: &'static str,
    /// Skills listed under the heading, in order
    pub items: &'static [&'static str],
}

/// Skills section copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skills {
    /// Section heading
    pub heading: SectionHeading,
    /// Skill groups, in display order
    pub groups: &'static [SkillGroup],
}

/// A project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Technology stack line (e.g. "React | Firebase")
    pub stack: &'static str,
    /// Outbound link to the live site or repository
    pub link: &'static str,
}

/// Projects section copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projects {
    /// Section heading
    pub heading: SectionHeading,
    /// Project cards, in display order
    pub entries: &'static [Project],
}

/// Contact section copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Section heading
    pub heading: SectionHeading,
    /// Availability pitch
    pub pitch: &'static str,
    /// Contact email address (rendered as a `mailto:` link)
    pub email: &'static str,
}

/// The whole page's content, one field per section, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    /// Brand name shown in the navigation bar
    pub brand: &'static str,
    /// Hero section
    pub hero: Hero,
    /// About section
    pub about: About,
    /// Skills section
    pub skills: Skills,
    /// Projects section
    pub projects: Projects,
    /// Contact section
    pub contact: Contact,
}

impl SiteContent {
    /// Total number of individual skills across all groups
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.skills.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Every outbound (external) link on the page, in document order
    #[must_use]
    pub fn external_links(&self) -> Vec<&'static str> {
        let mut links: Vec<&'static str> =
            self.hero.actions.iter().filter(|a| a.external).map(|a| a.href).collect();
        links.extend(self.projects.entries.iter().map(|p| p.link));
        links
    }
}

/// The portfolio content
pub const SITE: SiteContent = SiteContent {
    brand: "Mohamed Khayal",
    hero: Hero {
        eyebrow: "FULL STACK MERN DEVELOPER",
        title: "Building modern, fast, and scalable web applications.",
        lead: "I design and develop end-to-end products using MongoDB, Express, \
               React, and Node.js with a strong focus on performance and user \
               experience.",
        actions: &[
            Action {
                label: "View Projects",
                href: "https://github.com/MohamedKhayyal",
                external: true,
            },
            Action {
                label: "Hire Me",
                href: "#contact",
                external: false,
            },
        ],
        stats: &[
            Stat {
                value: "20+",
                label: "Completed Projects",
            },
            Stat {
                value: "1+",
                label: "Years Experience",
            },
            Stat {
                value: "100%",
                label: "Client Focus",
            },
        ],
        portrait: Portrait {
            primary: "/profile.jpg",
            fallback: "/user-2.jpeg",
            alt: "Developer portrait",
        },
    },
    about: About {
        heading: SectionHeading {
            tag: "About",
            title: "About Me",
        },
        intro: "I am Mohamed Khayal, a full stack developer specialized in MERN \
                stack applications. I enjoy building products that solve real \
                problems with solid architecture and a modern user experience.",
        highlights: &[
            "Build full-stack web apps from idea to deployment.",
            "Focus on clean UI, performance, and scalable backend design.",
            "Comfortable with MERN, Firebase integrations, and SQL data modeling.",
        ],
    },
    skills: Skills {
        heading: SectionHeading {
            tag: "Skills",
            title: "MERN + Modern Tooling",
        },
        groups: &[
            SkillGroup {
                title: "Frontend",
                items: &[
                    "React",
                    "Next.js",
                    "TypeScript",
                    "Tailwind CSS",
                    "HTML/CSS",
                    "JavaScript",
                ],
            },
            SkillGroup {
                title: "Backend",
                items: &["Node.js", "Express.js", "REST APIs", "JWT Auth"],
            },
            SkillGroup {
                title: "Database",
                items: &["MongoDB", "Mongoose", "Firebase", "SQL"],
            },
            SkillGroup {
                title: "Workflow",
                items: &["Git/GitHub"],
            },
        ],
    },
    projects: Projects {
        heading: SectionHeading {
            tag: "Portfolio",
            title: "Selected Full Stack Work",
        },
        entries: &[
            Project {
                name: "Medico",
                description: "Medical web application focused on clean UI and \
                              practical healthcare workflows.",
                stack: "React | Firebase",
                link: "https://medico-brown-six.vercel.app/",
            },
            Project {
                name: "Games4U",
                description: "Gaming platform with complete MERN architecture and \
                              dynamic full-stack features.",
                stack: "MongoDB | Express | React | Node.js",
                link: "https://github.com/MohamedKhayyal/Games4U",
            },
            Project {
                name: "CLYNK",
                description: "Graduation project with backend services and \
                              relational data management.",
                stack: "Express | SQL",
                link: "https://github.com/MohamedKhayyal/CLYNK",
            },
        ],
    },
    contact: Contact {
        heading: SectionHeading {
            tag: "Contact",
            title: "Let's build your next product",
        },
        pitch: "Available for freelance and full-time roles in frontend, backend, \
                and complete MERN web app development.",
        email: "khayyalmohamed5@gmail.com",
    },
};
