//! Stylesheets and static files the page shell links.
//!
//! Page markup uses Bootstrap 5.3 classes (`d-none`, `collapse`/`show`,
//! `data-bs-theme`), so Bootstrap must load before the site stylesheet.

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
/// Built by cargo-leptos from `style/main.css`.
pub const SITE_CSS: &str = "/pkg/portfolio-site.css";
pub const FAVICON: &str = "/favicon.svg";

/// Linked in this order; later sheets override earlier ones.
pub const STYLESHEETS: [&str; 4] = [BOOTSTRAP_CSS, BOOTSTRAP_ICONS_CSS, FONT_AWESOME_CSS, SITE_CSS];
