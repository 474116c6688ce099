//! Section renderers
//!
//! One function per page region, each a pure transform from its content
//! record to a markup fragment. Ordered records become ordered fragments;
//! list order is display order. Reveal tagging goes through the shared
//! `RevealTagger` so every tagged element lands in the observer's key list.

use crate::content::{About, Contact, Hero, NAV, Project, Projects, SectionHeading, Skills};
use crate::page::markup::{RevealTagger, anchor_link, escape, external_link, mailto_link};

/// The fixed navigation bar: brand link plus one jump link per section
#[must_use]
pub fn navbar(brand: &str) -> String {
    let mut out = String::new();
    out.push_str("  <header class=\"navbar\">\n");
    let brand_link = anchor_link(NAV[0].anchor, "brand", brand);
    out.push_str(&format!("    {brand_link}\n"));
    out.push_str("    <nav>\n");
    for link in NAV {
        let jump = anchor_link(link.anchor, "", link.label);
        out.push_str(&format!("      {jump}\n"));
    }
    out.push_str("    </nav>\n");
    out.push_str("  </header>\n");
    out
}

/// The hero section: eyebrow, headline, lead, actions, quick stats, portrait
#[must_use]
pub fn hero(hero: &Hero, anchor: &str, tagger: &mut RevealTagger) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    <section id=\"{}\" class=\"hero section\">\n",
        escape(anchor)
    ));
    out.push_str("      <div class=\"hero-copy\">\n");

    let eyebrow_class = tagger.tag_step("hero-eyebrow", 1);
    out.push_str(&format!(
        "        <p class=\"eyebrow {eyebrow_class}\">{}</p>\n",
        escape(hero.eyebrow)
    ));
    let title_class = tagger.tag_step("hero-title", 2);
    out.push_str(&format!(
        "        <h1 class=\"hero-title {title_class}\">{}</h1>\n",
        escape(hero.title)
    ));
    let lead_class = tagger.tag_step("hero-lead", 3);
    out.push_str(&format!(
        "        <p class=\"lead {lead_class}\">{}</p>\n",
        escape(hero.lead)
    ));

    let actions_class = tagger.tag_step("hero-actions", 3);
    out.push_str(&format!("        <div class=\"hero-actions {actions_class}\">\n"));
    for (index, action) in hero.actions.iter().enumerate() {
        let button = if index == 0 { "btn btn-primary" } else { "btn btn-secondary" };
        let link = if action.external {
            external_link(action.href, button, action.label)
        } else {
            anchor_link(action.href.trim_start_matches('#'), button, action.label)
        };
        out.push_str(&format!("          {link}\n"));
    }
    out.push_str("        </div>\n");

    out.push_str("        <div class=\"quick-stats\">\n");
    for (index, stat) in hero.stats.iter().enumerate() {
        let key = format!("stat-{}", index + 1);
        let class = tagger.tag_cycling(&key, index);
        out.push_str(&format!("          <article class=\"{class}\">\n"));
        out.push_str(&format!("            <h3>{}</h3>\n", escape(stat.value)));
        out.push_str(&format!("            <p>{}</p>\n", escape(stat.label)));
        out.push_str("          </article>\n");
    }
    out.push_str("        </div>\n");
    out.push_str("      </div>\n");

    let visual_class = tagger.tag_step("hero-visual", 2);
    out.push_str(&format!("      <div class=\"hero-visual {visual_class}\">\n"));
    out.push_str("        <div class=\"image-shell\">\n");
    // One-shot fallback: the handler clears itself before swapping, so a
    // broken fallback cannot loop.
    out.push_str(&format!(
        "          <img src=\"{}\" alt=\"{}\" \
         onerror=\"this.onerror=null;this.src='{}';\">\n",
        escape(hero.portrait.primary),
        escape(hero.portrait.alt),
        escape(hero.portrait.fallback)
    ));
    out.push_str("        </div>\n");
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out
}

/// The about section: intro paragraph plus the highlights list
#[must_use]
pub fn about(about: &About, anchor: &str, tagger: &mut RevealTagger) -> String {
    let mut out = String::new();
    out.push_str(&format!("    <section id=\"{}\" class=\"section\">\n", escape(anchor)));
    out.push_str(&section_heading(&about.heading, "about", tagger));

    let panel_class = tagger.tag_step("about-panel", 2);
    out.push_str(&format!("      <div class=\"about-panel {panel_class}\">\n"));
    out.push_str(&format!("        <p>{}</p>\n", escape(about.intro)));
    out.push_str("        <ul class=\"about-list\">\n");
    for (index, item) in about.highlights.iter().enumerate() {
        let key = format!("about-item-{}", index + 1);
        let class = tagger.tag_cycling(&key, index);
        out.push_str(&format!("          <li class=\"{class}\">{}</li>\n", escape(item)));
    }
    out.push_str("        </ul>\n");
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out
}

/// The skills section: one card per skill group, in order
#[must_use]
pub fn skills(skills: &Skills, anchor: &str, tagger: &mut RevealTagger) -> String {
    let mut out = String::new();
    out.push_str(&format!("    <section id=\"{}\" class=\"section\">\n", escape(anchor)));
    out.push_str(&section_heading(&skills.heading, "skills", tagger));

    out.push_str("      <div class=\"skills-grid\">\n");
    for (index, group) in skills.groups.iter().enumerate() {
        let key = format!("skill-{}", group.title.to_lowercase());
        let class = tagger.tag_cycling(&key, index);
        out.push_str(&format!("        <article class=\"skill-card {class}\">\n"));
        out.push_str(&format!("          <h3>{}</h3>\n", escape(group.title)));
        out.push_str("          <ul>\n");
        for item in group.items {
            out.push_str(&format!("            <li>{}</li>\n", escape(item)));
        }
        out.push_str("          </ul>\n");
        out.push_str("        </article>\n");
    }
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out
}

/// The projects section: one card per project, in order, each with an
/// outbound link
#[must_use]
pub fn projects(projects: &Projects, anchor: &str, tagger: &mut RevealTagger) -> String {
    let mut out = String::new();
    out.push_str(&format!("    <section id=\"{}\" class=\"section\">\n", escape(anchor)));
    out.push_str(&section_heading(&projects.heading, "projects", tagger));

    out.push_str("      <div class=\"projects-grid\">\n");
    for (index, project) in projects.entries.iter().enumerate() {
        out.push_str(&project_card(project, index, tagger));
    }
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out
}

fn project_card(project: &Project, index: usize, tagger: &mut RevealTagger) -> String {
    let mut out = String::new();
    let key = format!("project-{}", project.name.to_lowercase());
    let class = tagger.tag_cycling(&key, index);
    out.push_str(&format!(
        "        <article class=\"project-card project-live {class}\">\n"
    ));
    out.push_str(&format!("          <h3>{}</h3>\n", escape(project.name)));
    out.push_str(&format!("          <p>{}</p>\n", escape(project.description)));
    out.push_str(&format!("          <span>{}</span>\n", escape(project.stack)));
    let link = external_link(project.link, "project-link btn btn-secondary", "View Project");
    out.push_str(&format!("          <p>\n            {link}\n          </p>\n"));
    out.push_str("        </article>\n");
    out
}

/// The contact section: pitch plus the `mailto:` action
#[must_use]
pub fn contact(contact: &Contact, anchor: &str, tagger: &mut RevealTagger) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    <section id=\"{}\" class=\"section contact\">\n",
        escape(anchor)
    ));
    out.push_str(&section_heading(&contact.heading, "contact", tagger));

    let pitch_class = tagger.tag_step("contact-pitch", 2);
    out.push_str(&format!(
        "      <p class=\"{pitch_class}\">{}</p>\n",
        escape(contact.pitch)
    ));
    let email_class = tagger.tag_step("contact-email", 3);
    let email = mailto_link(contact.email, &format!("btn btn-primary {email_class}"));
    out.push_str(&format!("      {email}\n"));
    out.push_str("    </section>\n");
    out
}

fn section_heading(
    heading: &SectionHeading,
    key_prefix: &str,
    tagger: &mut RevealTagger,
) -> String {
    let tag_class = tagger.tag(&format!("{key_prefix}-tag"));
    let title_class = tagger.tag_step(&format!("{key_prefix}-title"), 1);
    format!(
        "      <p class=\"section-tag {tag_class}\">{}</p>\n      \
         <h2 class=\"section-title {title_class}\">{}</h2>\n",
        escape(heading.tag),
        escape(heading.title)
    )
}
