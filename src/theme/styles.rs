//! Global CSS styles for Folio.
//!
//! Injected once from the root component. Section tracking depends on a
//! few structural rules here: `.page-scroll` is the one scrolling
//! element, `.nav-links` anchors the underline indicator, and every
//! section carries a `scroll-margin-top` matching the fixed header so
//! programmatic smooth scrolls land below it.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink-black: #0b0d10;
  --ink-raised: #12151a;
  --ink-border: #1e232b;

  /* ACCENT */
  --accent: #e8a33d;
  --accent-glow: rgba(232, 163, 61, 0.35);

  /* TEXT */
  --text-primary: #f2f3f5;
  --text-secondary: rgba(242, 243, 245, 0.72);
  --text-muted: rgba(242, 243, 245, 0.45);

  /* SEMANTIC */
  --danger: #ff4d5e;
  --success: #53c27a;

  /* Layout */
  --nav-height: 72px;
  --content-width: 1040px;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
  --transition-slow: 400ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--ink-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.6;
}

a {
  color: var(--accent);
  text-decoration: none;
}

ul {
  list-style: none;
}

button {
  font-family: inherit;
  cursor: pointer;
}

img {
  display: block;
  max-width: 100%;
}

/* === Page Scroll Container === */
.page-scroll {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scrollbar-width: thin;
  scrollbar-color: var(--ink-border) transparent;
}

/* === Site Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--nav-height);
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.site-header.scrolled {
  background: rgba(11, 13, 16, 0.72);
  backdrop-filter: blur(14px);
  -webkit-backdrop-filter: blur(14px);
  box-shadow: 0 1px 0 var(--ink-border);
}

.site-nav {
  max-width: var(--content-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 24px;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  color: var(--text-primary);
  font-weight: 700;
  font-size: 1.1rem;
  letter-spacing: 0.02em;
}

.brand:hover {
  color: var(--accent);
}

/* === Nav Links + Underline Indicator === */
.nav-links {
  position: relative;
  display: flex;
  align-items: center;
  gap: 8px;
}

.nav-link {
  display: inline-block;
  padding: 8px 14px;
  color: var(--text-secondary);
  font-size: 0.95rem;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

/* Geometry (left/width/opacity) is set inline by the publisher. */
.nav-underline {
  position: absolute;
  bottom: 2px;
  height: 2px;
  border-radius: 1px;
  background: var(--accent);
  box-shadow: 0 0 8px var(--accent-glow);
  transition: left var(--transition-normal), width var(--transition-normal),
    opacity var(--transition-fast);
  pointer-events: none;
}

/* === Hamburger Toggle (mobile only) === */
.menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  padding: 10px;
}

.menu-toggle .menu-bar {
  width: 22px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.menu-toggle.active .menu-bar:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.menu-toggle.active .menu-bar:nth-child(2) {
  opacity: 0;
}

.menu-toggle.active .menu-bar:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

/* === Sections === */
.page-section, .hero-section {
  scroll-margin-top: var(--nav-height);
}

.page-section {
  padding: 96px 24px;
}

.section-inner {
  max-width: var(--content-width);
  margin: 0 auto;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 32px;
}

.section-title::after {
  content: "";
  display: block;
  width: 48px;
  height: 3px;
  margin-top: 10px;
  border-radius: 2px;
  background: var(--accent);
}

/* === Hero === */
.hero-section {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: var(--nav-height) 24px 48px;
  background:
    radial-gradient(ellipse at 20% 10%, rgba(232, 163, 61, 0.08), transparent 50%),
    radial-gradient(ellipse at 80% 80%, rgba(83, 194, 122, 0.05), transparent 50%);
}

.hero-inner {
  max-width: var(--content-width);
  margin: 0 auto;
  width: 100%;
}

.hero-eyebrow {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.95rem;
  margin-bottom: 12px;
}

.hero-name {
  font-size: clamp(2.4rem, 6vw, 4rem);
  line-height: 1.1;
  margin-bottom: 16px;
}

.reveal-word {
  display: inline-block;
  opacity: 0;
  transform: translateY(14px);
  animation: word-rise 600ms cubic-bezier(0.22, 1, 0.36, 1) forwards;
}

@keyframes word-rise {
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.hero-headline {
  font-size: clamp(1.2rem, 3vw, 1.7rem);
  font-weight: 500;
  color: var(--text-secondary);
  min-height: 2.4em;
  margin-bottom: 20px;
}

.hero-description {
  max-width: 640px;
  color: var(--text-secondary);
  min-height: 6em;
  margin-bottom: 32px;
}

.highlight {
  color: var(--accent);
  font-weight: 600;
}

.hero-actions {
  display: flex;
  gap: 14px;
}

/* === Buttons === */
.btn {
  padding: 12px 22px;
  border-radius: 8px;
  border: 1px solid transparent;
  font-size: 0.95rem;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    background var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: var(--ink-black);
}

.btn-primary:hover {
  box-shadow: 0 6px 20px var(--accent-glow);
  transform: translateY(-1px);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
  transform: none;
}

.btn-ghost {
  background: transparent;
  border-color: var(--ink-border);
  color: var(--text-primary);
}

.btn-ghost:hover {
  border-color: var(--accent);
  color: var(--accent);
}

/* === About === */
.about-columns {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 48px;
}

.about-text p + p {
  margin-top: 16px;
}

.about-text p {
  color: var(--text-secondary);
}

.skills-title {
  font-size: 1.05rem;
  margin-bottom: 14px;
}

.skills-list {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.skill-chip {
  padding: 6px 12px;
  border: 1px solid var(--ink-border);
  border-radius: 999px;
  background: var(--ink-raised);
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-secondary);
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 24px;
}

.project-card {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  border-color: var(--accent);
}

.project-cover {
  aspect-ratio: 16 / 9;
  background: var(--ink-black);
  overflow: hidden;
}

.project-cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-body {
  padding: 18px;
}

.project-title {
  margin-bottom: 8px;
}

.project-summary {
  color: var(--text-secondary);
  font-size: 0.92rem;
  margin-bottom: 14px;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
}

.project-tag {
  padding: 3px 10px;
  border-radius: 999px;
  background: rgba(232, 163, 61, 0.12);
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.72rem;
}

/* === Modals === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 200;
  background: rgba(5, 6, 8, 0.75);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
}

.modal {
  position: relative;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 14px;
  max-width: 720px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-close {
  position: absolute;
  top: 10px;
  right: 14px;
  z-index: 1;
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.6rem;
  line-height: 1;
}

.modal-close:hover {
  color: var(--text-primary);
}

/* === Carousel === */
.carousel {
  position: relative;
  background: var(--ink-black);
}

.carousel-image {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: contain;
}

.carousel-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: none;
  background: rgba(11, 13, 16, 0.65);
  color: var(--text-primary);
  font-size: 1.4rem;
  transition: background var(--transition-fast);
}

.carousel-arrow:hover {
  background: var(--accent);
  color: var(--ink-black);
}

.carousel-arrow.prev { left: 12px; }
.carousel-arrow.next { right: 12px; }

.carousel-dots {
  position: absolute;
  bottom: 10px;
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
  gap: 7px;
}

.carousel-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--text-muted);
  transition: background var(--transition-fast);
}

.carousel-dot.active {
  background: var(--accent);
}

.modal-body {
  padding: 20px 24px 24px;
}

.modal-title {
  margin-bottom: 10px;
}

.modal-summary {
  color: var(--text-secondary);
  margin-bottom: 14px;
}

.modal-repo-link {
  display: inline-block;
  margin-top: 14px;
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

/* === Status Modal === */
.status-modal {
  max-width: 420px;
  padding: 28px;
  text-align: center;
  border-top: 3px solid var(--success);
}

.status-modal.error {
  border-top-color: var(--danger);
}

.status-message {
  margin-bottom: 20px;
}

/* === Contact === */
.contact-lead {
  color: var(--text-secondary);
  margin-bottom: 32px;
}

.contact-form {
  max-width: 640px;
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 18px;
}

.dial-field {
  max-width: 260px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.form-field label {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.form-field input,
.form-field select,
.form-field textarea {
  padding: 11px 13px;
  border-radius: 8px;
  border: 1px solid var(--ink-border);
  background: var(--ink-raised);
  color: var(--text-primary);
  font-family: inherit;
  font-size: 0.95rem;
  transition: border-color var(--transition-fast);
}

.form-field input:focus,
.form-field select:focus,
.form-field textarea:focus {
  outline: none;
  border-color: var(--accent);
}

.field-error {
  color: var(--danger);
  font-size: 0.8rem;
}

/* === Scroll-to-top === */
.scroll-top {
  position: fixed;
  right: 22px;
  bottom: 22px;
  z-index: 90;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--ink-border);
  background: var(--ink-raised);
  color: var(--text-primary);
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  transform: translateY(8px);
  pointer-events: none;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.scroll-top.visible {
  opacity: 1;
  transform: translateY(0);
  pointer-events: auto;
}

.scroll-top:hover {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Mobile Quick Nav (bottom overlay) === */
.mobile-nav {
  display: none;
}

/* === Footer === */
.site-footer {
  padding: 40px 24px 56px;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
  border-top: 1px solid var(--ink-border);
}

/* === Responsive === */
@media (max-width: 768px) {
  .menu-toggle {
    display: flex;
  }

  .nav-links {
    position: fixed;
    top: var(--nav-height);
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: stretch;
    gap: 0;
    padding: 12px 0;
    background: rgba(11, 13, 16, 0.96);
    backdrop-filter: blur(14px);
    border-bottom: 1px solid var(--ink-border);
    transform: translateY(-120%);
    transition: transform var(--transition-normal);
  }

  .nav-links.active {
    transform: translateY(0);
  }

  .nav-link {
    display: block;
    padding: 14px 24px;
  }

  /* The sliding underline only makes sense in the horizontal rail. */
  .nav-underline {
    display: none;
  }

  .about-columns,
  .form-row {
    grid-template-columns: 1fr;
  }

  .dial-field {
    max-width: none;
  }

  .mobile-nav {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    z-index: 95;
    display: flex;
    justify-content: space-around;
    padding: 8px 0 10px;
    background: rgba(11, 13, 16, 0.92);
    backdrop-filter: blur(14px);
    border-top: 1px solid var(--ink-border);
  }

  .mobile-nav-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 3px;
    background: none;
    border: none;
    color: var(--text-muted);
    font-size: 0.65rem;
  }

  .mobile-nav-item.active {
    color: var(--accent);
  }

  .scroll-top {
    bottom: 76px;
  }

  .page-section {
    padding: 72px 18px;
  }
}
"#;
