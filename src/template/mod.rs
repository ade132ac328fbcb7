pub mod assets;

pub use assets::{BOOTSTRAP_CSS_URL, CHARTJS_URL, DATALABELS_URL, JQUERY_JS_URL, PAGE_SKELETON};

/// Substitute the three fragments, verbatim and unescaped, into the page
/// skeleton. Empty fragments leave their slot empty; the CDN link and
/// script lines are part of the skeleton and always present.
pub fn assemble(section: &str, styles: &str, script: &str) -> String {
    PAGE_SKELETON
        .replace("{{bootstrap_css}}", BOOTSTRAP_CSS_URL)
        .replace("{{jquery_js}}", JQUERY_JS_URL)
        .replace("{{chartjs_js}}", CHARTJS_URL)
        .replace("{{datalabels_js}}", DATALABELS_URL)
        .replace("{{styles}}", styles)
        .replace("{{section}}", section)
        .replace("{{script}}", script)
}
