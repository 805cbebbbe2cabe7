//! Global CSS styles for the intake questionnaire.
//!
//! Calm, light card layout: one question per card, a segmented progress
//! strip along the top, and full-width choice buttons.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --page-bg: #f6f4f1;
  --card-bg: #ffffff;
  --border: #e2ddd6;

  /* Brand */
  --accent: #2f6f62;
  --accent-hover: #25594e;
  --accent-soft: rgba(47, 111, 98, 0.12);

  /* Text */
  --text-primary: #1f2a28;
  --text-secondary: #5b6664;
  --text-muted: #98a09e;

  /* Semantic */
  --danger: #c0392b;
  --danger-soft: rgba(192, 57, 43, 0.08);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.app {
  max-width: 640px;
  margin: 0 auto;
  padding: 1.5rem 1.25rem 3rem;
}

/* === Progress Indicator === */
.progress-indicator {
  display: flex;
  gap: 0.375rem;
  margin-bottom: 2rem;
}

.progress-bar {
  flex: 1;
  height: 6px;
  border-radius: 3px;
  background: var(--border);
  transition: background var(--transition-normal);
}

.progress-bar.active {
  background: var(--accent);
}

/* === Header === */
.header {
  text-align: center;
  margin-bottom: 2rem;
}

.header h1 {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.subheading {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Card === */
.card {
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 12px;
  box-shadow: 0 4px 18px rgba(0, 0, 0, 0.05);
}

.card-content {
  padding: 2rem 1.75rem;
}

.card-content h2 {
  font-size: var(--text-lg);
  font-weight: 500;
  margin-bottom: 1.5rem;
}

.question-position {
  display: block;
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

/* === Inputs === */
.input-container {
  margin-bottom: 1.5rem;
}

.text-input {
  width: 100%;
  padding: 0.75rem 1rem;
  font: inherit;
  color: var(--text-primary);
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.text-input:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.text-input::placeholder {
  color: var(--text-muted);
}

/* Phone input: country picker, dial code, number */
.phone-input {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.country-select {
  padding: 0.75rem 0.5rem;
  font: inherit;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--card-bg);
  max-width: 11rem;
}

.dial-code {
  color: var(--text-secondary);
  white-space: nowrap;
}

.phone-input .text-input {
  flex: 1;
}

/* === Choice Buttons === */
.buttons-container {
  margin-bottom: 1.5rem;
}

.buttons-group {
  display: flex;
  flex-direction: column;
  gap: 0.625rem;
}

.option-button {
  width: 100%;
  padding: 0.875rem 1rem;
  font: inherit;
  text-align: left;
  color: var(--text-primary);
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.option-button:hover {
  border-color: var(--accent);
}

.option-button.selected {
  border-color: var(--accent);
  background: var(--accent-soft);
  font-weight: 500;
}

/* === Error === */
.error-message {
  margin-bottom: 1.25rem;
  padding: 0.75rem 1rem;
  color: var(--danger);
  background: var(--danger-soft);
  border-radius: 8px;
  font-size: var(--text-sm);
}

/* === Navigation === */
.button-container {
  display: flex;
  gap: 0.75rem;
}

.dual-buttons {
  justify-content: space-between;
}

.next-button,
.submit-button,
.previous-button {
  padding: 0.75rem 1.75rem;
  font: inherit;
  font-weight: 500;
  border-radius: 8px;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.next-button,
.submit-button {
  margin-left: auto;
  color: #fff;
  background: var(--accent);
  border: 1px solid var(--accent);
}

.next-button:hover:not(:disabled),
.submit-button:hover:not(:disabled) {
  background: var(--accent-hover);
}

.previous-button {
  color: var(--text-secondary);
  background: transparent;
  border: 1px solid var(--border);
}

.previous-button:hover {
  color: var(--text-primary);
  border-color: var(--text-muted);
}

button:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

/* === Small Screens === */
@media (max-width: 480px) {
  .card-content {
    padding: 1.5rem 1.125rem;
  }

  .header h1 {
    font-size: var(--text-lg);
  }
}
"#;
