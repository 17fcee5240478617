//! CSS and client script for the landing page.
//!
//! Both are inlined into the document head, so the rendered page is a single
//! self-contained file apart from images.
//!
//! # Customization
//!
//! ```rust
//! use datamaster_site::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains(".hero"));
//! ```

/// Complete CSS for the page - dark theme, responsive grids, CSS-only marquee.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #000000;
    --bg-raised: #0a0a0a;
    --border: #262626;
    --border-hover: #404040;
    --text: #f5f5f5;
    --text-muted: #a3a3a3;
    --accent: #60a5fa;
    --accent-strong: #3b82f6;
    --radius: 16px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 24px;
}

section { padding: 96px 0; }

.section-title {
    font-size: 2.25rem;
    font-weight: 500;
    text-align: center;
    margin: 0 0 48px;
}

.section-eyebrow {
    text-align: center;
    color: var(--text-muted);
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.12em;
}

/* Hero */
.hero {
    position: relative;
    min-height: 80vh;
    display: flex;
    align-items: center;
    overflow: hidden;
}

.hero-waves {
    position: absolute;
    inset: 0;
    background: radial-gradient(ellipse at 50% 120%, rgba(59, 130, 246, 0.35), transparent 60%);
    animation: waves 12s ease-in-out infinite alternate;
}

@keyframes waves {
    from { transform: translateY(0) scale(1); }
    to { transform: translateY(-4%) scale(1.08); }
}

.hero-content { position: relative; text-align: center; }

.hero-eyebrow { color: var(--accent); font-weight: 600; }

.hero-title {
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    line-height: 1.1;
    margin: 16px auto;
    max-width: 14ch;
}

.hero-description {
    color: var(--text-muted);
    font-size: 1.125rem;
    max-width: 40rem;
    margin: 0 auto 32px;
}

.hero-actions { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }

.btn {
    padding: 12px 28px;
    border-radius: 999px;
    font-weight: 600;
    transition: background 0.2s, border-color 0.2s;
}

.btn-primary { background: var(--accent-strong); }
.btn-primary:hover { background: var(--accent); }
.btn-secondary { border: 1px solid var(--border); }
.btn-secondary:hover { border-color: var(--border-hover); }

/* Deferred placeholders */
.deferred-placeholder {
    text-align: center;
    color: var(--text-muted);
    font-size: 0.875rem;
    padding: 32px 0;
}

.deferred[data-state=failed] { display: none; }

/* Logo slider */
.logo-slider {
    overflow: hidden;
    mask-image: linear-gradient(to right, transparent, #000 15%, #000 85%, transparent);
}

.logo-track {
    display: flex;
    width: max-content;
    animation: marquee 40s linear infinite;
}

.logo-slider:hover .logo-track { animation-play-state: paused; }

.logo-row {
    display: flex;
    align-items: center;
    gap: 64px;
    padding: 0 32px;
    margin: 0;
    list-style: none;
}

.logo-item img { opacity: 0.6; filter: grayscale(1) invert(1); }

@keyframes marquee {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}

/* Bento grid */
.bento-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
}

.bento-item {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg-raised);
    padding: 16px;
    transition: transform 0.2s;
}

.bento-item:hover { transform: translateX(4px); }
.bento-item.wide { grid-column: span 2; }

.bento-header {
    min-height: 6rem;
    border-radius: 12px;
    background: linear-gradient(135deg, #171717, #262626);
}

.bento-body h3 { margin: 12px 0 4px; font-size: 1rem; }
.bento-body p { margin: 0; color: var(--text-muted); font-size: 0.875rem; }
.bento-icon { color: var(--text-muted); }

/* Sticky scroll */
.sticky-step {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
    min-height: 60vh;
    align-items: center;
}

.sticky-visual {
    position: sticky;
    top: 20vh;
    height: 240px;
    border-radius: var(--radius);
    background: linear-gradient(135deg, #0ea5e9, #6366f1);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 16px;
}

.sticky-label { font-size: 1.125rem; font-weight: 500; }
.sticky-copy p { color: var(--text-muted); }

/* Testimonials */
.testimonial { display: none; margin: 0; text-align: center; }
.testimonial.active { display: block; animation: fade-in 0.5s ease; }

.testimonial-photo {
    width: 160px;
    height: 160px;
    object-fit: cover;
    border-radius: 24px;
}

.testimonial-quote {
    font-size: 1.25rem;
    max-width: 42rem;
    margin: 24px auto;
}

.testimonial-name { display: block; font-weight: 600; }
.testimonial-role { display: block; color: var(--text-muted); font-size: 0.875rem; }

.carousel-controls { display: flex; justify-content: center; gap: 12px; margin-top: 24px; }

.carousel-btn {
    width: 40px;
    height: 40px;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--bg-raised);
    color: var(--text);
    cursor: pointer;
}

@keyframes fade-in {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: translateY(0); }
}

/* Services */
.services { padding-top: 0; }

.services-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
    max-width: 64rem;
    margin: 0 auto;
}

.service-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 32px;
    background: var(--bg);
    transition: border-color 0.2s;
}

.service-card:hover { border-color: var(--border-hover); }
.service-card h4 { font-size: 1.25rem; margin: 0 0 16px; }
.service-card p { margin: 0; color: var(--text-muted); }

/* Pin */
.pin { display: flex; flex-direction: column; align-items: center; perspective: 1000px; }

.pin-card {
    width: 20rem;
    padding: 24px;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg-raised);
    transform: rotateX(40deg) scale(0.9);
    transition: transform 0.7s;
}

.pin:hover .pin-card { transform: rotateX(0deg) scale(1); }
.pin-href { font-size: 0.75rem; color: var(--accent); }
.pin-beam { width: 1px; height: 80px; background: linear-gradient(var(--accent), transparent); }

/* FAQ */
.faq { max-width: 48rem; margin: 0 auto; }
.faq-item { border-bottom: 1px solid var(--border); padding: 16px 0; }
.faq-item summary { cursor: pointer; font-weight: 500; }
.faq-item p { color: var(--text-muted); }

/* Developed by */
.developed-by { text-align: center; padding-bottom: 48px; }
.developed-by-label { color: var(--text-muted); font-size: 0.875rem; margin-bottom: 8px; }

.link-preview { position: relative; display: inline-block; }
.link-preview-trigger { color: var(--accent); font-weight: 500; }

.link-preview-card {
    position: absolute;
    left: 50%;
    bottom: 150%;
    transform: translateX(-50%);
    display: none;
    align-items: center;
    justify-content: center;
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--bg-raised);
    font-size: 0.75rem;
}

.link-preview:hover .link-preview-card { display: flex; }

/* Footer */
.footer { border-top: 1px solid var(--border); padding: 32px 0; }

.footer-inner {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    align-items: center;
    justify-content: space-between;
}

.footer-links { display: flex; gap: 16px; color: var(--text-muted); }
.footer-links a:hover { color: var(--text); }
.footer-note { width: 100%; color: var(--text-muted); font-size: 0.75rem; }

@media (max-width: 900px) {
    .bento-grid, .services-grid { grid-template-columns: repeat(2, 1fr); }
    .sticky-step { grid-template-columns: 1fr; }
}

@media (max-width: 600px) {
    .bento-grid, .services-grid { grid-template-columns: 1fr; }
    .bento-item.wide { grid-column: auto; }
    section { padding: 64px 0; }
}

@media (prefers-reduced-motion: reduce) {
    .hero-waves, .logo-track, .testimonial.active { animation: none; }
}
"#;

/// Testimonial autoplay and prev/next controls.
pub const LANDING_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('[data-carousel]').forEach(function (carousel) {
        var slides = carousel.querySelectorAll('.testimonial');
        if (slides.length === 0) return;
        var current = 0;

        function show(next) {
            slides[current].classList.remove('active');
            current = (next + slides.length) % slides.length;
            slides[current].classList.add('active');
        }

        carousel.querySelectorAll('[data-carousel-step]').forEach(function (button) {
            button.addEventListener('click', function () {
                show(current + Number(button.dataset.carouselStep));
            });
        });

        if (carousel.dataset.autoplay === 'true') {
            setInterval(function () { show(current + 1); }, 5000);
        }
    });
});
"#;
