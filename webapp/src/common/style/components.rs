pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-md);
  font-family: inherit;
  font-size: var(--font-body);
  font-weight: 500;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:hover {
  text-decoration: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-accent {
  background: var(--accent-gradient);
  color: white;
}

.btn-accent:hover {
  background: var(--accent-gradient-hover);
}

.btn-light {
  background-color: white;
  color: var(--primary);
}

.btn-light:hover {
  background-color: rgba(255, 255, 255, 0.9);
}

.btn-outline {
  background: transparent;
  color: white;
  border: 1px solid white;
}

.btn-outline:hover {
  background-color: rgba(255, 255, 255, 0.1);
}

.btn-text {
  background: transparent;
  color: var(--primary);
  padding: var(--space-2) var(--space-3);
  font-size: var(--font-small);
}

.btn-text:hover {
  background-color: var(--tint);
}

.btn-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: none;
  background: transparent;
  color: inherit;
  font-size: 1.15rem;
  cursor: pointer;
  text-decoration: none;
  transition: transform var(--transition-normal), color var(--transition-normal);
}

.btn-icon:hover {
  transform: translateY(-2px);
  text-decoration: none;
}

.btn-close {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.25rem;
  line-height: 1;
  cursor: pointer;
  padding: 0 var(--space-2);
}

/* Cards */
.card {
  background-color: var(--paper);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  padding: var(--space-6);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card.lift:hover {
  transform: translateY(-8px);
  box-shadow: var(--glow);
}

.card.slide:hover {
  transform: translateX(8px);
  box-shadow: var(--glow);
}

/* Chips */
.chips {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.chip {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: var(--font-small);
  font-weight: 500;
  background-color: var(--tint);
  color: var(--primary);
}

.chip.outlined {
  background: transparent;
  border: 1px solid var(--chip-color, var(--primary));
  color: var(--chip-color, var(--primary));
}

/* Round icon badge */
.badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 50px;
  height: 50px;
  border-radius: var(--radius-full);
  background-color: var(--tint);
  color: var(--primary);
  font-size: 1.25rem;
  font-weight: 700;
}

/* Forms */
.form-stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.field {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.field label {
  font-size: var(--font-small);
  color: var(--text-secondary);
}

.field input,
.field textarea {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--divider);
  border-radius: var(--radius-sm);
  background-color: transparent;
  color: var(--text-primary);
  font-family: inherit;
  font-size: var(--font-body);
  transition: border-color var(--transition-fast);
}

.field input:focus,
.field textarea:focus {
  outline: none;
  border-color: var(--primary);
}

.field.invalid input,
.field.invalid textarea {
  border-color: #f44336;
}

.field-error {
  font-size: 0.75rem;
  color: #f44336;
}

/* Snackbar */
.snackbar {
  position: fixed;
  bottom: var(--space-6);
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  display: flex;
  align-items: center;
  gap: var(--space-4);
  min-width: 320px;
  max-width: 90vw;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-sm);
  box-shadow: var(--shadow-lg);
  color: white;
  animation: snackbar-in var(--transition-normal) var(--easing-standard);
}

.snackbar span {
  flex: 1;
}

.snackbar.success {
  background-color: #2e7d32;
}

.snackbar.error {
  background-color: #d32f2f;
}

@keyframes snackbar-in {
  from { opacity: 0; transform: translate(-50%, 20px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

/* Entrance animation */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.reveal.entered {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .reveal {
    opacity: 1;
    transform: none;
    transition: none;
  }
}
"#;
