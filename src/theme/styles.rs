//! Global CSS styles for the Livimmo desktop UI.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f6f7f9;
  --border: #e5e7eb;

  /* Primary (brand, prices, links) */
  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --primary-soft: rgba(37, 99, 235, 0.1);

  /* Live accents */
  --live-red: #ea384c;
  --badge-red: #ef4444;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #6b7280;
  --text-on-primary: #ffffff;

  /* Semantic */
  --destructive: #dc2626;
  --success: #16a34a;

  --radius: 0.5rem;
  --shadow-card: 0 1px 3px rgba(0, 0, 0, 0.1), 0 1px 2px rgba(0, 0, 0, 0.06);
  --shadow-modal: 0 10px 25px rgba(0, 0, 0, 0.15);
}

/* === Base === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.5;
}

button {
  font: inherit;
  cursor: pointer;
}

input {
  font: inherit;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* === Site header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 4rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  z-index: 50;
}

.site-header-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--primary);
  cursor: pointer;
}

.brand-video-icon {
  color: var(--live-red);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.icon-btn {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 9999px;
  background: transparent;
  color: var(--text-primary);
}

.icon-btn:hover {
  background: var(--surface-muted);
}

.unread-badge {
  position: absolute;
  top: -0.25rem;
  right: -0.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background: var(--badge-red);
  color: var(--text-on-primary);
  font-size: 0.625rem;
}

/* === Page scaffolding === */
.page {
  max-width: 72rem;
  margin: 0 auto;
  padding: 5.5rem 1rem 2rem;
}

.page-centered {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.section-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.muted {
  color: var(--text-secondary);
}

/* === Property grid / carousel === */
.property-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1rem;
}

.property-carousel {
  display: flex;
  gap: 1rem;
  overflow-x: auto;
  padding-bottom: 0.5rem;
}

.property-carousel .property-card {
  flex: 0 0 18rem;
}

/* === Property card === */
.property-card {
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  overflow: hidden;
}

.property-card-media {
  position: relative;
}

.property-card-media img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
  display: block;
  background: var(--border);
}

.property-card-badges {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  display: flex;
  gap: 0.5rem;
}

.media-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 9999px;
  background: var(--surface);
  color: var(--text-secondary);
  box-shadow: var(--shadow-card);
}

.media-badge.live {
  background: var(--primary);
  color: var(--text-on-primary);
}

.property-card-body {
  padding: 1rem;
}

.property-card-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.property-card-price {
  color: var(--primary);
  font-weight: 700;
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.property-card-location {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: 0.5rem;
}

.property-card-specs {
  display: flex;
  justify-content: space-between;
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.property-card-actions {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  width: 100%;
  padding: 0.625rem 1rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  background: var(--primary);
  color: var(--text-on-primary);
  font-weight: 500;
}

.btn:hover {
  background: var(--primary-hover);
}

.btn-outline {
  background: var(--surface);
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover {
  background: var(--surface-muted);
}

.btn-big {
  padding: 1rem;
  font-size: 1.125rem;
}

/* === View-mode toggles === */
.favorites-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.view-toggles {
  display: flex;
  gap: 0.5rem;
}

.view-toggle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
}

.view-toggle:hover {
  background: var(--surface-muted);
}

.view-toggle.active {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--text-on-primary);
}

/* === Map panel === */
.map-panel {
  position: relative;
  height: 28rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background:
    linear-gradient(rgba(37, 99, 235, 0.04) 1px, transparent 1px),
    linear-gradient(90deg, rgba(37, 99, 235, 0.04) 1px, transparent 1px);
  background-size: 2rem 2rem;
  background-color: #eef2f7;
  overflow: hidden;
}

.map-pin {
  position: absolute;
  transform: translate(-50%, -100%);
  display: flex;
  flex-direction: column;
  align-items: center;
  color: var(--primary);
}

.map-pin-label {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 0.125rem 0.5rem;
  font-size: 0.75rem;
  white-space: nowrap;
}

/* === Live cards === */
.live-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1rem;
}

.live-card {
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  overflow: hidden;
}

.live-card-media {
  position: relative;
}

.live-card-media img {
  width: 100%;
  height: 10rem;
  object-fit: cover;
  display: block;
  background: var(--border);
}

.live-badge {
  position: absolute;
  top: 0.5rem;
  left: 0.5rem;
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
  background: var(--live-red);
  color: var(--text-on-primary);
  font-size: 0.75rem;
  font-weight: 600;
}

.live-card-body {
  padding: 0.75rem 1rem 1rem;
}

.live-card-title {
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.live-card-meta {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.live-card-price {
  color: var(--primary);
  font-weight: 700;
  margin-top: 0.25rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-content {
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-modal);
  width: min(28rem, calc(100vw - 2rem));
  padding: 1.5rem;
}

.modal-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.modal-description {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

/* === Forms === */
.form-stack {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  width: 100%;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.form-field label {
  font-size: 0.875rem;
  font-weight: 500;
}

.form-field input[type="text"],
.form-field input[type="email"],
.form-field input[type="password"],
.form-field input[type="tel"],
.form-field input[type="number"] {
  padding: 0.625rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
}

.form-field input:focus {
  outline: 2px solid var(--primary-soft);
  border-color: var(--primary);
}

.field-hint {
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.password-wrap {
  position: relative;
}

.password-wrap input {
  width: 100%;
}

.password-toggle {
  position: absolute;
  right: 0.5rem;
  top: 50%;
  transform: translateY(-50%);
  border: none;
  background: transparent;
  color: var(--text-secondary);
  display: inline-flex;
}

.checkbox-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
}

.auth-panel {
  width: min(36rem, 100%);
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.auth-heading {
  text-align: center;
}

.auth-heading h1 {
  font-size: 1.875rem;
  font-weight: 700;
}

.auth-heading p {
  color: var(--text-secondary);
  font-size: 1.125rem;
  margin-top: 0.5rem;
}

.auth-footer {
  text-align: center;
  font-size: 0.875rem;
}

/* === Role selector === */
.role-selector {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.role-option {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1.5rem 1rem;
  border: 2px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  text-align: center;
}

.role-option:hover {
  border-color: var(--primary);
}

.role-option.selected {
  border-color: var(--primary);
  background: var(--primary-soft);
}

.role-option-title {
  font-weight: 600;
}

.role-option-hint {
  font-size: 0.8125rem;
  color: var(--text-secondary);
}

/* === Toasts === */
.toast-host {
  position: fixed;
  bottom: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 200;
}

.toast {
  width: 22rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-modal);
  padding: 0.875rem 2.25rem 0.875rem 1rem;
  position: relative;
}

.toast.destructive {
  border-color: var(--destructive);
  background: var(--destructive);
  color: var(--text-on-primary);
}

.toast-title {
  font-weight: 600;
  font-size: 0.9375rem;
}

.toast-description {
  font-size: 0.875rem;
  opacity: 0.85;
}

.toast-close {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  border: none;
  background: transparent;
  color: inherit;
  opacity: 0.6;
}

.toast-close:hover {
  opacity: 1;
}

/* === Notifications page === */
.notification-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.notification-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.875rem 1rem;
}

/* === Profile page === */
.profile-card {
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-width: 28rem;
}

.profile-row {
  display: flex;
  justify-content: space-between;
  font-size: 0.9375rem;
}

/* === Legal pages === */
.legal-body {
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 1.5rem;
  max-width: 48rem;
}

.legal-body h2 {
  font-size: 1.125rem;
  margin: 1rem 0 0.5rem;
}

.legal-body p {
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}
"#;
