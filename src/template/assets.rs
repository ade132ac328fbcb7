//! Embedded page skeleton and the CDN references it carries. The URLs are
//! emitted as literal text in the output document, never fetched.

/// Page skeleton with named fragment slots.
pub const PAGE_SKELETON: &str = include_str!("../../templates/page.html");

pub const BOOTSTRAP_CSS_URL: &str =
    "https://stackpath.bootstrapcdn.com/bootstrap/4.3.1/css/bootstrap.min.css";
pub const JQUERY_JS_URL: &str = "https://code.jquery.com/jquery-3.2.1.min.js";
pub const CHARTJS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";
pub const DATALABELS_URL: &str = "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels";
