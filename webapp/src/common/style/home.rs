// styles for the page sections, top to bottom
pub const HOME_STYLES: &str = r#"
/* Navigation bar */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 20;
  height: var(--header-height);
  background-color: transparent;
  color: white;
  transition: all var(--transition-normal);
}

.app-header.scrolled {
  background-color: var(--bar);
  color: var(--text-primary);
  box-shadow: var(--shadow-sm);
  backdrop-filter: blur(10px);
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.brand {
  flex-grow: 1;
  font-size: var(--font-h6);
  font-weight: var(--heading-weight);
  cursor: pointer;
  background: white;
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.app-header.scrolled .brand,
.app.dark .brand {
  background: var(--accent-gradient);
  -webkit-background-clip: text;
}

.nav-links {
  display: flex;
  gap: var(--space-1);
}

.nav-link {
  background: none;
  border: none;
  color: inherit;
  font-family: inherit;
  font-size: var(--font-small);
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.02em;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-sm);
  cursor: pointer;
  transition: background-color var(--transition-fast), transform var(--transition-fast);
}

.nav-link:hover {
  background-color: rgba(255, 255, 255, 0.1);
  transform: scale(1.05);
}

.app.dark .nav-link:hover {
  background-color: var(--tint);
}

.nav-actions {
  display: flex;
  align-items: center;
  margin-left: var(--space-4);
}

.menu-toggle {
  display: none;
}

/* Drawer */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 30;
  background-color: rgba(0, 0, 0, 0.5);
}

.drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 31;
  width: var(--drawer-width);
  background-color: var(--paper);
  color: var(--text-primary);
  box-shadow: var(--shadow-lg);
  text-align: center;
}

.drawer h6 {
  font-size: var(--font-h6);
  margin: var(--space-4) 0;
}

.drawer-item {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  width: 100%;
  padding: var(--space-3) var(--space-4);
  background: none;
  border: none;
  color: inherit;
  font-family: inherit;
  font-size: var(--font-body);
  cursor: pointer;
}

.drawer-item:hover {
  background-color: var(--tint);
}

@media (max-width: 899px) {
  .nav-links {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
    margin-left: var(--space-2);
  }
}

@media (min-width: 900px) {
  .drawer,
  .drawer-backdrop {
    display: none;
  }
}

/* Shared section layout */
.section {
  padding: var(--space-20) 0;
  background-color: var(--background);
}

.section.alt {
  background-color: var(--paper);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section-title {
  text-align: center;
  font-size: var(--font-h2);
  font-weight: var(--heading-weight);
  margin-bottom: var(--space-4);
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.section-subtitle {
  text-align: center;
  font-size: var(--font-h6);
  color: var(--text-secondary);
  max-width: 800px;
  margin: 0 auto var(--space-12);
}

.grid {
  display: grid;
  gap: var(--space-6);
}

.grid.thirds {
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
}

.grid.halves {
  grid-template-columns: repeat(auto-fill, minmax(420px, 1fr));
}

@media (max-width: 599px) {
  .grid.halves,
  .grid.thirds {
    grid-template-columns: 1fr;
  }
}

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
  min-height: 100vh;
  display: flex;
  align-items: center;
  background: var(--hero-gradient);
  color: white;
  text-align: center;
}

.hero-dots {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  background-image: radial-gradient(circle, white 1px, transparent 1px);
  background-size: 50px 50px;
}

.particle {
  position: absolute;
  border-radius: var(--radius-full);
  background-color: rgba(255, 255, 255, 0.15);
  pointer-events: none;
  animation-name: drift;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes drift {
  0%, 100% { transform: translate(0, 0); opacity: 0.2; }
  50% { transform: translate(15px, -30px); opacity: 0.6; }
}

.hero-content {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-6);
  animation: rise 800ms var(--easing-standard) both;
}

@keyframes rise {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: none; }
}

.hero-greeting {
  font-size: var(--font-h6);
  font-weight: 300;
  letter-spacing: 2px;
  text-transform: uppercase;
}

.hero-name {
  font-size: var(--font-h1);
  font-weight: var(--heading-weight);
  line-height: 1.15;
  text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
  text-transform: uppercase;
}

.hero-role {
  font-size: var(--font-h3);
  font-weight: 500;
  color: rgba(255, 255, 255, 0.95);
}

.hero-role::after {
  content: "|";
  margin-left: 2px;
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

.hero-summary {
  max-width: 800px;
  font-size: var(--font-h5);
  font-weight: 300;
  color: rgba(255, 255, 255, 0.85);
}

.hero-contacts,
.hero-actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
}

.hero-contacts a {
  color: white;
}

.hero-actions {
  margin-top: var(--space-4);
}

/* About */
.summary-card {
  background: var(--card-gradient);
  margin-bottom: var(--space-12);
  padding: var(--space-8);
}

.summary-card h3 {
  font-size: var(--font-h5);
  margin-bottom: var(--space-6);
}

.summary-card p + p {
  margin-top: var(--space-4);
}

.highlight-head {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.highlight-head h4 {
  font-size: var(--font-h6);
}

.muted {
  color: var(--text-secondary);
  font-size: var(--font-small);
}

/* Skills */
.skill-card {
  height: 100%;
  border-top: 4px solid var(--chip-color);
}

.skill-card h3 {
  font-size: var(--font-h6);
  margin-bottom: var(--space-4);
  color: var(--chip-color);
}

/* Experience */
.timeline {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 2px;
  background-color: var(--divider);
}

.timeline-item {
  position: relative;
  display: grid;
  grid-template-columns: 1fr 48px 1fr;
  align-items: start;
}

.timeline-dot {
  grid-column: 2;
  justify-self: center;
  width: 40px;
  height: 40px;
  margin-top: var(--space-6);
  border-radius: var(--radius-full);
  background: var(--accent-gradient);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1;
}

.timeline-when {
  padding: var(--space-8) var(--space-4);
  text-align: right;
}

.timeline-when h4 {
  color: var(--primary);
  font-size: var(--font-h6);
}

.timeline-item.flip .timeline-when {
  grid-column: 3;
  grid-row: 1;
  text-align: left;
}

.timeline-item.flip .role-card {
  grid-column: 1;
  grid-row: 1;
}

.role-card h3 {
  font-size: var(--font-h6);
  margin-bottom: var(--space-1);
}

.role-card .company {
  color: var(--primary);
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.role-card ul {
  list-style: none;
  margin-bottom: var(--space-4);
}

.role-card li {
  display: flex;
  gap: var(--space-2);
  margin-bottom: var(--space-2);
  font-size: var(--font-small);
}

.role-card li::before {
  content: "↗";
  color: var(--secondary);
}

@media (max-width: 899px) {
  .timeline::before {
    left: 20px;
  }

  .timeline-item,
  .timeline-item.flip {
    grid-template-columns: 40px 1fr;
    column-gap: var(--space-4);
  }

  .timeline-dot {
    grid-column: 1;
    grid-row: 1 / span 2;
    margin-top: 0;
  }

  .timeline-when,
  .timeline-item.flip .timeline-when {
    grid-column: 2;
    grid-row: 1;
    text-align: left;
    padding: 0 0 var(--space-2);
  }

  .role-card,
  .timeline-item.flip .role-card {
    grid-column: 2;
    grid-row: 2;
  }
}

/* Education */
.degree-card {
  display: flex;
  gap: var(--space-6);
  align-items: flex-start;
}

.degree-card .badge {
  width: 64px;
  height: 64px;
  font-size: 2rem;
}

.degree-card h3 {
  font-size: var(--font-h6);
  margin-bottom: var(--space-2);
}

.degree-card .university {
  color: var(--primary);
  font-weight: 500;
  margin-bottom: var(--space-3);
}

/* Projects */
.project-card {
  display: flex;
  flex-direction: column;
  height: 100%;
}

.project-card h3 {
  font-size: var(--font-h5);
  margin-bottom: var(--space-3);
}

.project-card .description {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.project-card h4 {
  font-size: var(--font-small);
  margin: var(--space-2) 0;
}

.project-card ul {
  list-style: none;
  margin-bottom: var(--space-4);
  font-size: var(--font-small);
}

.project-card li::before {
  content: "✓ ";
  color: var(--primary);
}

.project-links {
  display: flex;
  gap: var(--space-2);
  margin-top: auto;
  padding-top: var(--space-4);
}

/* Contact */
.contact-layout {
  display: grid;
  grid-template-columns: 5fr 7fr;
  gap: var(--space-8);
}

@media (max-width: 899px) {
  .contact-layout {
    grid-template-columns: 1fr;
  }
}

.contact-layout h3 {
  font-size: var(--font-h5);
  margin-bottom: var(--space-6);
}

.channels {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.channel {
  display: block;
  color: inherit;
  text-decoration: none;
}

.channel:hover {
  text-decoration: none;
}

.channel .card {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.channel .value {
  font-weight: 500;
}

.form-card {
  background: var(--card-gradient);
  padding: var(--space-8);
}

/* Footer */
.site-footer {
  position: relative;
  padding: var(--space-12) 0;
  background-color: var(--footer);
  color: white;
}

.footer-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.footer-row h6 {
  font-size: var(--font-h6);
}

.footer-row .btn-icon:hover {
  color: #90caf9;
}

.footer-rule {
  border: none;
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  margin: var(--space-8) 0;
}

.footer-note {
  font-size: var(--font-small);
  color: rgba(255, 255, 255, 0.7);
}

.back-to-top {
  position: fixed;
  right: var(--space-8);
  bottom: var(--space-8);
  z-index: 15;
  width: 48px;
  height: 48px;
  background-color: var(--primary);
  color: white;
  box-shadow: var(--shadow-lg);
}

.back-to-top:hover {
  background-color: var(--primary-dark);
  transform: translateY(-4px);
}

/* Load failure */
.load-error {
  max-width: 720px;
  margin: var(--space-16) auto;
  padding: var(--space-8);
  font-family: system-ui, sans-serif;
}

.load-error pre {
  white-space: pre-wrap;
  margin-top: var(--space-4);
}
"#;
