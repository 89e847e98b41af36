use constcat::concat;

const BASE_STYLES: &str = r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: #4d6f80;
  background-color: #ebf2f5;
  line-height: 1.5;
}

a {
  color: #15c3d6;
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

.app-header {
  background-color: #ffffff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: 56px;
  align-items: center;
  justify-content: space-between;
  padding: 0 24px;
}

.nav-links {
  display: flex;
  gap: 16px;
}

.nav-link {
  color: #8fa7b3;
  font-weight: 500;
  padding: 8px 12px;
  border-radius: 8px;
}

.nav-link:hover {
  color: #4d6f80;
  background-color: #f2f5f8;
  text-decoration: none;
}

.nav-link.active {
  color: #15c3d6;
  background-color: rgba(21, 195, 214, 0.1);
}

.container {
  max-width: 960px;
  margin: 0 auto;
  padding: 24px;
}

.btn {
  display: inline-block;
  padding: 10px 16px;
  border: none;
  border-radius: 8px;
  font-size: 1rem;
  cursor: pointer;
}

.btn-primary {
  background-color: #15c3d6;
  color: #ffffff;
}

.error-state {
  text-align: center;
  padding: 48px 24px;
}

.empty-state {
  color: #8fa7b3;
  padding: 24px;
  text-align: center;
}

.skeleton {
  background-color: #dde3ea;
  border-radius: 8px;
  animation: pulse 1.5s ease-in-out infinite;
}

@keyframes pulse {
  50% { opacity: 0.5; }
}
"#;

const DETAIL_STYLES: &str = r#"
/* Detail view */
.orphanage-detail {
  background-color: #ffffff;
  border-radius: 16px;
  overflow: hidden;
  border: 1px solid #d3e2e5;
}

.photo-full {
  width: 100%;
  height: 300px;
  object-fit: cover;
  display: block;
}

.photo-thumbnails {
  display: grid;
  grid-template-columns: repeat(6, 1fr);
  gap: 16px;
  padding: 16px 40px;
}

.photo-thumbnails button {
  border: 0;
  height: 88px;
  background: none;
  cursor: pointer;
  border-radius: 16px;
  overflow: hidden;
  opacity: 0.6;
  outline: none;
}

.photo-thumbnails button.active {
  opacity: 1;
  border: 2px solid #15c3d6;
}

.photo-thumbnails button img {
  width: 100%;
  height: 88px;
  object-fit: cover;
}

.no-photos {
  height: 300px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #8fa7b3;
}

.orphanage-detail-content {
  padding: 40px;
}

.map-container {
  margin-top: 24px;
  border: 1px solid #b3dae2;
  border-radius: 16px;
  overflow: hidden;
}

.static-map {
  width: 100%;
  height: 280px;
  object-fit: cover;
  display: block;
}

.map-container footer {
  padding: 16px 0;
  text-align: center;
}

.open-details {
  margin-top: 24px;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 16px;
}

.open-details div {
  padding: 24px;
  border-radius: 16px;
  line-height: 1.6;
}

.open-details .hour {
  background: #e6f7fb;
  border: 1px solid #b3dae2;
  color: #5c8599;
}

.open-details .open-on-weekends {
  background: #edfff6;
  border: 1px solid #a1e9c5;
  color: #37c77f;
}

.open-details .open-on-weekends.not-open {
  background: #fef6f9;
  border: 1px solid #ffbcd4;
  color: #ff669d;
}

.contact-button {
  margin-top: 40px;
  display: block;
  width: 100%;
  padding: 16px;
  text-align: center;
  background-color: #3cdc8c;
  color: #ffffff;
  border-radius: 16px;
  font-weight: 700;
}

.contact-button:hover {
  background-color: #36cf82;
  text-decoration: none;
}
"#;

const FORM_STYLES: &str = r#"
/* Map overview and registration form */
.orphanage-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 24px;
  margin-top: 24px;
}

.orphanage-card {
  background-color: #ffffff;
  border: 1px solid #d3e2e5;
  border-radius: 16px;
  overflow: hidden;
}

.orphanage-card img {
  width: 100%;
  height: 160px;
  object-fit: cover;
  display: block;
}

.orphanage-card .card-info {
  padding: 16px;
}

.orphanage-form {
  background-color: #ffffff;
  border: 1px solid #d3e2e5;
  border-radius: 16px;
  padding: 40px;
  display: grid;
  gap: 16px;
}

.orphanage-form label {
  color: #5c8599;
  font-weight: 600;
}

.orphanage-form input[type=text],
.orphanage-form textarea {
  width: 100%;
  padding: 12px;
  border: 1px solid #d3e2e5;
  border-radius: 8px;
  font-size: 1rem;
}
"#;

pub const APP_STYLES: &str = concat!(BASE_STYLES, DETAIL_STYLES, FORM_STYLES);
