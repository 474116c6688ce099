//! Tests for the content records
//!
//! The content is compiled in and immutable; these tests pin the exact
//! records the page is built from, including list order.

use folio::content::{NAV, SITE, anchor};

// =============================================================================
// Section and navigation shape
// =============================================================================

#[test]
fn five_sections_in_document_order() {
    assert_eq!(anchor::ALL, ["home", "about", "skills", "projects", "contact"]);
}

#[test]
fn nav_covers_every_anchor_in_order() {
    assert_eq!(NAV.len(), anchor::ALL.len());
    for (link, name) in NAV.iter().zip(anchor::ALL) {
        assert_eq!(link.anchor, name);
    }
    let labels: Vec<_> = NAV.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Home", "About", "Skills", "Projects", "Contact"]);
}

// =============================================================================
// Skills
// =============================================================================

#[test]
fn four_skill_groups_in_fixed_order() {
    let titles: Vec<_> = SITE.skills.groups.iter().map(|g| g.title).collect();
    assert_eq!(titles, ["Frontend", "Backend", "Database", "Workflow"]);
}

#[test]
fn frontend_group_lists_its_six_skills_in_order() {
    let frontend = &SITE.skills.groups[0];
    assert_eq!(
        frontend.items,
        ["React", "Next.js", "TypeScript", "Tailwind CSS", "HTML/CSS", "JavaScript"]
    );
}

#[test]
fn skill_count_sums_all_groups() {
    assert_eq!(SITE.skill_count(), 6 + 4 + 4 + 1);
}

// =============================================================================
// Projects
// =============================================================================

#[test]
fn three_projects_in_fixed_order_with_links() {
    let names: Vec<_> = SITE.projects.entries.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Medico", "Games4U", "CLYNK"]);

    let links: Vec<_> = SITE.projects.entries.iter().map(|p| p.link).collect();
    assert_eq!(
        links,
        [
            "https://medico-brown-six.vercel.app/",
            "https://github.com/MohamedKhayyal/Games4U",
            "https://github.com/MohamedKhayyal/CLYNK",
        ]
    );
}

#[test]
fn project_stacks_match_their_cards() {
    let stacks: Vec<_> = SITE.projects.entries.iter().map(|p| p.stack).collect();
    assert_eq!(
        stacks,
        ["React | Firebase", "MongoDB | Express | React | Node.js", "Express | SQL"]
    );
}

// =============================================================================
// Hero, about, contact
// =============================================================================

#[test]
fn hero_carries_actions_stats_and_portrait() {
    assert_eq!(SITE.hero.eyebrow, "FULL STACK MERN DEVELOPER");
    assert_eq!(SITE.hero.actions.len(), 2);
    assert!(SITE.hero.actions[0].external);
    assert!(!SITE.hero.actions[1].external);
    assert_eq!(SITE.hero.actions[1].href, "#contact");

    let values: Vec<_> = SITE.hero.stats.iter().map(|s| s.value).collect();
    assert_eq!(values, ["20+", "1+", "100%"]);

    assert_eq!(SITE.hero.portrait.primary, "/profile.jpg");
    assert_eq!(SITE.hero.portrait.fallback, "/user-2.jpeg");
    assert_eq!(SITE.hero.portrait.alt, "Developer portrait");
}

#[test]
fn about_lists_three_highlights() {
    assert_eq!(SITE.about.highlights.len(), 3);
    assert!(SITE.about.intro.starts_with("I am Mohamed Khayal"));
}

#[test]
fn contact_address_is_fixed() {
    assert_eq!(SITE.contact.email, "khayyalmohamed5@gmail.com");
    assert_eq!(SITE.contact.heading.title, "Let's build your next product");
}

#[test]
fn external_links_are_hero_github_plus_projects() {
    let links = SITE.external_links();
    assert_eq!(
        links,
        [
            "https://github.com/MohamedKhayyal",
            "https://medico-brown-six.vercel.app/",
            "https://github.com/MohamedKhayyal/Games4U",
            "https://github.com/MohamedKhayyal/CLYNK",
        ]
    );
}

#[test]
fn content_serializes_for_json_output() {
    let json = serde_json::to_string(&SITE).unwrap();
    assert!(json.contains("\"brand\":\"Mohamed Khayal\""));
    assert!(json.contains("\"Medico\""));
}
