//! The page stylesheet
//!
//! Shipped verbatim as `style.css`. The `.reveal` / `.in-view` pair carries
//! the transition contract the observer drives: elements are hidden until
//! revealed, then transition in once and stay visible. `delay-1`..`delay-3`
//! stagger the transitions of list-derived elements.

/// The complete stylesheet
pub const STYLE_CSS: &str = r#":root {
    --bg: #0b1020;
    --surface: #121a33;
    --surface-soft: #18224226;
    --border: #223059;
    --accent: #4f8cff;
    --accent-soft: #4f8cff29;
    --text: #e8ecf8;
    --text-dim: #93a0c4;
}

* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: 'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif;
    background: radial-gradient(circle at 20% 0%, #14204a 0%, var(--bg) 45%);
    color: var(--text);
    line-height: 1.6;
}

.navbar {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 6vw;
    background: #0b1020cc;
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
}

.brand {
    color: var(--text);
    font-weight: 700;
    font-size: 1.1rem;
    text-decoration: none;
}

.navbar nav {
    display: flex;
    gap: 1.4rem;
}

.navbar nav a {
    color: var(--text-dim);
    text-decoration: none;
    font-size: 0.95rem;
    transition: color 0.2s ease;
}

.navbar nav a:hover {
    color: var(--text);
}

.section {
    padding: 5rem 6vw;
    max-width: 1120px;
    margin: 0 auto;
}

.hero {
    display: grid;
    grid-template-columns: 1.2fr 0.8fr;
    gap: 3rem;
    align-items: center;
    min-height: 82vh;
}

.eyebrow {
    color: var(--accent);
    letter-spacing: 0.22em;
    font-size: 0.8rem;
    font-weight: 600;
}

.hero-title {
    font-size: clamp(2.1rem, 4.5vw, 3.4rem);
    line-height: 1.15;
    margin: 1rem 0;
}

.lead {
    color: var(--text-dim);
    max-width: 46ch;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    margin: 1.8rem 0;
}

.btn {
    display: inline-block;
    padding: 0.7rem 1.5rem;
    border-radius: 999px;
    font-weight: 600;
    text-decoration: none;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.btn:hover {
    transform: translateY(-2px);
}

.btn-primary {
    background: var(--accent);
    color: #fff;
    box-shadow: 0 8px 24px var(--accent-soft);
}

.btn-secondary {
    color: var(--text);
    border: 1px solid var(--border);
    background: var(--surface-soft);
}

.quick-stats {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    margin-top: 2.2rem;
}

.quick-stats article {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 1rem;
    text-align: center;
}

.quick-stats h3 {
    color: var(--accent);
    font-size: 1.4rem;
}

.quick-stats p {
    color: var(--text-dim);
    font-size: 0.85rem;
}

.hero-visual {
    display: flex;
    justify-content: center;
}

.image-shell {
    width: min(320px, 80%);
    aspect-ratio: 4 / 5;
    border-radius: 18px;
    overflow: hidden;
    border: 1px solid var(--border);
    box-shadow: 0 24px 60px #05081599;
}

.image-shell img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    display: block;
}

.section-tag {
    color: var(--accent);
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.78rem;
    font-weight: 600;
}

.section-title {
    font-size: clamp(1.6rem, 3vw, 2.2rem);
    margin: 0.6rem 0 2rem;
}

.about-panel {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 16px;
    padding: 2rem;
}

.about-panel > p {
    color: var(--text-dim);
    max-width: 70ch;
}

.about-list {
    list-style: none;
    margin-top: 1.4rem;
    display: grid;
    gap: 0.8rem;
}

.about-list li {
    padding-left: 1.4rem;
    position: relative;
    color: var(--text);
}

.about-list li::before {
    content: '';
    position: absolute;
    left: 0;
    top: 0.55em;
    width: 0.55rem;
    height: 0.55rem;
    border-radius: 50%;
    background: var(--accent);
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
    gap: 1.2rem;
}

.skill-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 1.4rem;
}

.skill-card h3 {
    color: var(--accent);
    margin-bottom: 0.8rem;
    font-size: 1rem;
}

.skill-card ul {
    list-style: none;
    display: grid;
    gap: 0.45rem;
}

.skill-card li {
    color: var(--text-dim);
    font-size: 0.95rem;
}

.projects-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.2rem;
}

.project-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.7rem;
    transition: border-color 0.2s ease, transform 0.2s ease;
}

.project-card:hover {
    border-color: var(--accent);
    transform: translateY(-4px);
}

.project-card h3 {
    font-size: 1.15rem;
}

.project-card p {
    color: var(--text-dim);
    font-size: 0.95rem;
}

.project-card span {
    color: var(--accent);
    font-size: 0.8rem;
    letter-spacing: 0.06em;
}

.project-link {
    align-self: flex-start;
    font-size: 0.85rem;
    padding: 0.5rem 1.1rem;
}

.contact {
    text-align: center;
    padding-bottom: 7rem;
}

.contact .section-title {
    margin-bottom: 1rem;
}

.contact p {
    color: var(--text-dim);
    max-width: 56ch;
    margin: 0 auto 2rem;
}

/* Reveal contract: hidden until the observer adds .in-view, then a one-way
   transition in. */
.reveal {
    opacity: 0;
    transform: translateY(26px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.in-view {
    opacity: 1;
    transform: none;
}

.delay-1 {
    transition-delay: 0.1s;
}

.delay-2 {
    transition-delay: 0.22s;
}

.delay-3 {
    transition-delay: 0.34s;
}

@media (prefers-reduced-motion: reduce) {
    html {
        scroll-behavior: auto;
    }

    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}

@media (max-width: 860px) {
    .navbar {
        flex-direction: column;
        gap: 0.8rem;
    }

    .hero {
        grid-template-columns: 1fr;
        min-height: auto;
        padding-top: 3.5rem;
    }

    .hero-visual {
        order: -1;
    }

    .quick-stats {
        grid-template-columns: 1fr;
    }
}
"#;
