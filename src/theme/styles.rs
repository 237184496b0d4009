//! Global CSS styles for Eldritch Eclipse.
//!
//! Landing page chrome, the designer layout, the utility tokens the scene
//! palettes put on the designer, and the gravestone appearance classes.

pub const GLOBAL_STYLES: &str = r##"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0a0a0a;
  --night-raised: #1a1a1a;
  --night-border: #333333;

  /* ECLIPSE (Accents) */
  --corona: #ffc000;
  --corona-glow: rgba(255, 192, 0, 0.35);
  --ember: #ff6b00;
  --blood: #8b0000;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-display: 'Cinzel', 'Trajan Pro', Georgia, serif;
  --font-body: 'Cormorant Garamond', Georgia, serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 900ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-family: var(--font-body);
  background: var(--night);
  color: var(--text-primary);
}

button {
  font-family: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.6;
}

.hidden {
  display: none !important;
}

/* === Landing Themes === */
.landing {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
}

.theme-dark {
  --page-bg: var(--night);
  --page-fg: var(--text-primary);
  --page-raised: var(--night-raised);
  --page-border: var(--night-border);
  background: var(--page-bg);
  color: var(--page-fg);
}

.theme-light {
  --page-bg: #f4efe6;
  --page-fg: #1a1a1a;
  --page-raised: #ffffff;
  --page-border: #d8cfc0;
  background: var(--page-bg);
  color: var(--page-fg);
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 2rem;
  background: color-mix(in srgb, var(--page-bg) 85%, transparent);
  border-bottom: 1px solid var(--page-border);
  backdrop-filter: blur(6px);
}

.nav-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  letter-spacing: 0.15em;
  color: var(--corona);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: inherit;
  text-decoration: none;
  letter-spacing: 0.05em;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--corona);
}

.nav-actions {
  display: flex;
  gap: 0.5rem;
}

.theme-toggle,
.menu-toggle {
  background: transparent;
  border: 1px solid var(--page-border);
  border-radius: 6px;
  color: inherit;
  font-size: 1.1rem;
  padding: 0.25rem 0.6rem;
}

.menu-toggle {
  display: none;
}

@media (max-width: 720px) {
  .menu-toggle {
    display: inline-block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 2rem;
    background: var(--page-raised);
    border-bottom: 1px solid var(--page-border);
  }

  .nav-links.open {
    display: flex;
  }
}

/* === Hero === */
.hero-bg {
  position: relative;
  min-height: 80vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.hero {
  position: relative;
  z-index: 2;
  text-align: center;
  padding: 2rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 4rem;
  letter-spacing: 0.2em;
  color: var(--corona);
  text-shadow: 0 0 30px var(--corona-glow);
}

.hero-tagline {
  margin-top: 1rem;
  font-size: 1.4rem;
  font-style: italic;
}

.btn-cta {
  display: inline-block;
  margin-top: 2rem;
  padding: 0.8rem 2.2rem;
  border: 1px solid var(--corona);
  color: var(--corona);
  text-decoration: none;
  letter-spacing: 0.1em;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.btn-cta:hover {
  background: var(--corona);
  color: var(--night);
}

/* === Ambient + Particles === */
.particle-field {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 1;
}

.ambient-eclipse {
  position: absolute;
  inset: -25%;
  background: radial-gradient(circle at 50% 40%, rgba(255, 192, 0, 0.18), transparent 35%),
    radial-gradient(circle at 30% 70%, rgba(139, 0, 0, 0.25), transparent 45%),
    radial-gradient(circle at 70% 20%, rgba(80, 0, 120, 0.25), transparent 40%);
  animation: ambient-drift linear infinite;
}

@keyframes ambient-drift {
  0% { transform: rotate(0deg) scale(1); }
  50% { transform: rotate(180deg) scale(1.1); }
  100% { transform: rotate(360deg) scale(1); }
}

.particle {
  position: absolute;
  bottom: -2rem;
  opacity: 0;
  animation-iteration-count: infinite;
  animation-timing-function: linear;
}

.particle.ember {
  color: var(--ember);
  animation-name: rise;
}

.particle.bat {
  animation-name: flutter;
}

.particle.spirit {
  opacity: 0.4;
  animation-name: drift;
}

@keyframes rise {
  0% { transform: translateY(0); opacity: 0; }
  10% { opacity: 1; }
  100% { transform: translateY(-110vh); opacity: 0; }
}

@keyframes flutter {
  0% { transform: translate(0, 0); opacity: 0; }
  10% { opacity: 0.9; }
  50% { transform: translate(6vw, -50vh) rotate(8deg); }
  100% { transform: translate(-4vw, -105vh) rotate(-8deg); opacity: 0; }
}

@keyframes drift {
  0% { transform: translateY(0) scale(0.9); opacity: 0; }
  30% { opacity: 0.45; }
  100% { transform: translateY(-100vh) scale(1.2); opacity: 0; }
}

/* === Scroll Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.revealed {
  opacity: 1;
  transform: none;
}

/* === Sections === */
.landing-section {
  max-width: 760px;
  margin: 0 auto;
  padding: 5rem 2rem;
}

.section-header {
  font-family: var(--font-display);
  font-size: 2rem;
  letter-spacing: 0.1em;
  color: var(--corona);
  margin-bottom: 1.5rem;
}

.body-text {
  font-size: 1.2rem;
  line-height: 1.7;
}

.schedule-list {
  list-style: none;
  margin-bottom: 1.5rem;
}

.schedule-list li {
  padding: 0.6rem 0;
  border-bottom: 1px solid var(--page-border);
  font-size: 1.15rem;
}

.schedule-time {
  font-family: var(--font-display);
  color: var(--corona);
}

.inline-link {
  color: var(--corona);
}

.landing-footer {
  padding: 3rem 2rem;
  text-align: center;
  color: var(--text-muted);
  letter-spacing: 0.1em;
}

/* === Registration Form === */
.registration-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.form-field input {
  padding: 0.7rem 0.9rem;
  background: var(--page-raised);
  border: 1px solid var(--page-border);
  border-radius: 6px;
  color: inherit;
  font-size: 1rem;
}

.form-field input:focus {
  outline: none;
  border-color: var(--corona);
  box-shadow: 0 0 0 2px var(--corona-glow);
}

.field-error {
  color: #ff4d4d;
  font-size: 0.9rem;
}

.btn-submit {
  padding: 0.8rem;
  background: var(--blood);
  border: none;
  border-radius: 6px;
  color: var(--text-primary);
  font-size: 1rem;
  letter-spacing: 0.1em;
}

.success-message {
  padding: 1rem;
  border: 1px solid var(--corona);
  border-radius: 6px;
}

/* === Designer Layout === */
.designer-page {
  min-height: 100vh;
  padding: 2rem;
  overflow-y: auto;
}

.designer-header {
  text-align: center;
  margin-bottom: 2rem;
}

.back-link {
  display: inline-block;
  margin-bottom: 1rem;
  color: inherit;
  opacity: 0.7;
}

.designer-title {
  font-family: var(--font-display);
  font-size: 2.5rem;
  letter-spacing: 0.1em;
}

.designer-subtitle {
  margin-top: 0.5rem;
  font-size: 1.2rem;
}

.designer-layout {
  display: grid;
  grid-template-columns: minmax(280px, 360px) 1fr;
  gap: 2rem;
}

@media (max-width: 900px) {
  .designer-layout {
    grid-template-columns: 1fr;
  }
}

.designer-panel {
  padding: 1.5rem;
}

.section-heading {
  font-family: var(--font-display);
  font-size: 1.1rem;
  margin: 1.25rem 0 0.75rem;
  padding-bottom: 0.35rem;
}

.control-group {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-bottom: 0.9rem;
}

.control-group.toggle {
  flex-direction: row;
  align-items: center;
  gap: 0.6rem;
}

.designer-label {
  font-size: 0.95rem;
}

.designer-input {
  padding: 0.5rem 0.7rem;
  border-width: 1px;
  border-style: solid;
  font-family: inherit;
  font-size: 1rem;
}

.designer-input:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--ring-color, transparent);
}

.designer-actions {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.btn-export,
.btn-share {
  padding: 0.75rem;
  border: none;
  border-radius: 6px;
  font-size: 1rem;
  letter-spacing: 0.05em;
}

.btn-export {
  background: var(--corona);
  color: var(--night);
}

.btn-share {
  background: #4b2a6b;
  color: var(--text-primary);
}

.export-path {
  margin-top: 0.4rem;
  font-size: 0.8rem;
  word-break: break-all;
  opacity: 0.7;
}

.designer-preview {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: flex-end;
  min-height: 720px;
  padding: 2rem 2rem 0;
  overflow: hidden;
}

.ground {
  width: 100%;
  height: 60px;
}

.designer-caption {
  padding: 0.75rem;
  text-align: center;
}

/* === Welcome Banner === */
.welcome-banner {
  position: fixed;
  top: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  padding: 0.9rem 1.6rem;
  background: var(--corona);
  color: var(--night);
  border-radius: 8px;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
  animation: banner-in 400ms ease-out;
}

@keyframes banner-in {
  from { opacity: 0; transform: translate(-50%, -20px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

/* === Share Dialog === */
.share-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
}

.share-dialog {
  width: min(480px, 90vw);
  padding: 1.5rem;
  background: var(--night-raised);
  color: var(--text-primary);
  border: 1px solid var(--night-border);
  border-radius: 10px;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.share-hint {
  color: var(--text-secondary);
}

.share-text {
  width: 100%;
  padding: 0.6rem;
  background: var(--night);
  color: inherit;
  border: 1px solid var(--night-border);
  font-family: inherit;
}

.btn-close {
  align-self: flex-end;
  padding: 0.4rem 1rem;
  background: transparent;
  color: inherit;
  border: 1px solid var(--night-border);
  border-radius: 6px;
}

/* === Scene Palette Tokens === */
.min-h-screen { min-height: 100vh; }
.rounded-md { border-radius: 0.375rem; }
.rounded-xl { border-radius: 0.75rem; }
.border { border-width: 1px; border-style: solid; }
.border-b { border-bottom-width: 1px; border-bottom-style: solid; }
.border-t-4 { border-top-width: 4px; border-top-style: solid; }
.text-sm { font-size: 0.875rem; }
.shadow-lg { box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1); }
.shadow-2xl { box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6); }

.bg-white { background-color: #ffffff; }
.bg-\[\#0A0A0A\] { background-color: #0a0a0a; }
.bg-\[\#1a1a1a\] { background-color: #1a1a1a; }
.bg-\[\#1a1a1a\]\/50 { background-color: rgba(26, 26, 26, 0.5); }
.bg-\[\#FFF8F0\] { background-color: #fff8f0; }
.bg-green-400 { background-color: #4ade80; }
.bg-green-700 { background-color: #15803d; }
.bg-gradient-to-br { background-image: linear-gradient(to bottom right, var(--gradient-from), var(--gradient-to)); }
.from-\[\#E8E8E8\] { --gradient-from: #e8e8e8; }
.to-\[\#C8C8C8\] { --gradient-to: #c8c8c8; }

.border-\[\#333333\] { border-color: #333333; }
.border-\[\#555555\] { border-color: #555555; }
.border-\[\#999\] { border-color: #999999; }
.border-\[\#FFB380\] { border-color: #ffb380; }
.border-\[\#FFD7B5\] { border-color: #ffd7b5; }
.border-green-500 { border-color: #22c55e; }
.border-green-800 { border-color: #166534; }

.text-white { color: #ffffff; }
.text-gray-100 { color: #f3f4f6; }
.text-gray-300 { color: #d1d5db; }
.text-gray-500 { color: #6b7280; }
.text-gray-600 { color: #4b5563; }
.text-gray-700 { color: #374151; }
.text-gray-900 { color: #111827; }

.focus\:ring-\[\#FFC000\] { --ring-color: #ffc000; }
.focus\:ring-\[\#FF6B00\] { --ring-color: #ff6b00; }
.focus\:border-\[\#FFC000\]:focus { border-color: #ffc000; }
.focus\:border-\[\#FF6B00\]:focus { border-color: #ff6b00; }

/* === Gravestone === */
.gravestone-container {
  position: relative;
  display: flex;
  justify-content: center;
  align-items: flex-end;
  width: 100%;
  min-height: 620px;
}

.gravestone {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  width: 320px;
  height: 440px;
  padding: 2.5rem 1.5rem;
  text-align: center;
  box-shadow: inset 0 -20px 40px rgba(0, 0, 0, 0.35), 0 20px 40px rgba(0, 0, 0, 0.5);
  overflow: hidden;
}

.shape-rectangle { border-radius: 6px; }
.shape-arched { border-radius: 160px 160px 6px 6px; }
.shape-oval { border-radius: 50%; }
.shape-cross {
  clip-path: polygon(35% 0, 65% 0, 65% 25%, 100% 25%, 100% 45%, 65% 45%, 65% 100%, 35% 100%, 35% 45%, 0 45%, 0 25%, 35% 25%);
}
.shape-heart {
  clip-path: path('M160 430 C 40 330, 0 230, 0 140 C 0 60, 60 0, 130 0 C 145 0, 155 10, 160 20 C 165 10, 175 0, 190 0 C 260 0, 320 60, 320 140 C 320 230, 280 330, 160 430 Z');
}

.color-granite-gray { background: linear-gradient(160deg, #8a8a8a, #5a5a5a); }
.color-granite-black { background: linear-gradient(160deg, #3a3a3a, #151515); }
.color-marble-white { background: linear-gradient(160deg, #fafafa, #d6d6d6); }
.color-rose-red { background: linear-gradient(160deg, #b76e79, #7d3b45); }
.color-green-jade { background: linear-gradient(160deg, #4f9a7a, #24594a); }
.color-blue-pearl { background: linear-gradient(160deg, #6f8fb3, #34506e); }
.color-obsidian-black { background: linear-gradient(160deg, #1b1b24, #050507); }
.color-sandstone-tan { background: linear-gradient(160deg, #d2b48c, #a0825a); }
.color-purple-amethyst { background: linear-gradient(160deg, #8e6bb3, #4d3570); }

.font-serif-classic { font-family: 'Times New Roman', Georgia, serif; }
.font-sans-modern { font-family: 'Helvetica Neue', Arial, sans-serif; }
.font-script-elegant { font-family: 'Great Vibes', 'Brush Script MT', cursive; }
.font-creepster { font-family: 'Creepster', 'Chiller', fantasy; }
.font-cinzel { font-family: 'Cinzel', 'Trajan Pro', serif; }
.font-typewriter { font-family: 'Special Elite', 'Courier New', monospace; }

.engraving-gold { color: #d4af37; text-shadow: 0 1px 0 rgba(0, 0, 0, 0.6); }
.engraving-silver { color: #c0c0c0; text-shadow: 0 1px 0 rgba(0, 0, 0, 0.6); }
.engraving-white { color: #ffffff; text-shadow: 0 1px 0 rgba(0, 0, 0, 0.6); }

.stone-icon { font-size: 3rem; }
.stone-name { font-size: 1.7rem; letter-spacing: 0.08em; }
.stone-dates { font-size: 1.1rem; }
.stone-epitaph { font-size: 1.05rem; font-style: italic; }

.mossy-effect::after {
  content: '';
  position: absolute;
  inset: auto 0 0 0;
  height: 35%;
  background: radial-gradient(ellipse at 20% 100%, rgba(60, 110, 40, 0.7), transparent 60%),
    radial-gradient(ellipse at 80% 100%, rgba(70, 120, 45, 0.6), transparent 55%);
  pointer-events: none;
}

.cracked::before {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(115deg, transparent 48%, rgba(0, 0, 0, 0.55) 49%, transparent 51%),
    linear-gradient(60deg, transparent 62%, rgba(0, 0, 0, 0.45) 63%, transparent 64%);
  pointer-events: none;
}

.blood-drip {
  position: absolute;
  top: 0;
  left: 50%;
  width: 10px;
  height: 0;
  background: linear-gradient(var(--blood), #5a0000);
  border-radius: 0 0 5px 5px;
  opacity: 0;
}

.blood-drip.active {
  opacity: 1;
  animation: drip 3s ease-in infinite;
}

@keyframes drip {
  0% { height: 0; }
  60% { height: 90px; }
  100% { height: 110px; opacity: 0; }
}

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  .particle,
  .ambient-eclipse,
  .blood-drip.active {
    animation: none;
  }

  .reveal {
    transition: none;
  }
}
"##;
