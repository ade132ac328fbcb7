use std::sync::LazyLock;

use regex::Regex;

use super::anchors::{CHART_ID_FROM, CHART_ID_TO, SECTION_CLOSE, SECTION_OPEN};
use super::FragmentOutcome;

// Non-greedy across newlines: first opening tag through the first close
// that follows it.
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(SECTION_OPEN),
        regex::escape(SECTION_CLOSE)
    ))
    .unwrap()
});

/// Locate the profile `<section>` block and rename its chart canvas id so
/// the chart script in the assembled page binds to it.
pub fn extract_section(document: &str) -> FragmentOutcome {
    match SECTION_RE.find(document) {
        Some(m) => FragmentOutcome::found(m.as_str().replacen(CHART_ID_FROM, CHART_ID_TO, 1)),
        None => FragmentOutcome::missing("section not found: no <section class=\"perfil \"> block"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_block_and_renames_chart_id() {
        let document = concat!(
            "<p>before</p>\n",
            "<section class=\"perfil \">\n",
            "  <canvas id=\"myChart0\"></canvas>\n",
            "</section>\n",
            "<p>after</p>"
        );
        let outcome = extract_section(document);
        assert!(outcome.is_found());
        assert!(outcome.text.starts_with("<section class=\"perfil \">"));
        assert!(outcome.text.ends_with("</section>"));
        assert!(outcome.text.contains("id=\"myChart\""));
        assert!(!outcome.text.contains("id=\"myChart0\""));
    }

    #[test]
    fn renames_only_the_first_occurrence() {
        let document = "<section class=\"perfil \">\
                        <canvas id=\"myChart0\"></canvas>\
                        <canvas id=\"myChart0\"></canvas>\
                        </section>";
        let outcome = extract_section(document);
        // The closing quote keeps the untouched id from matching the renamed one.
        assert_eq!(outcome.text.matches("id=\"myChart\"").count(), 1);
        assert_eq!(outcome.text.matches("id=\"myChart0\"").count(), 1);
    }

    #[test]
    fn content_is_otherwise_verbatim() {
        let body = "\n  <div class=\"row\">\n    <h2>Perfil</h2>\n  </div>\n";
        let document = format!("<section class=\"perfil \">{}</section>", body);
        let outcome = extract_section(&document);
        assert_eq!(outcome.text, document);
    }

    #[test]
    fn stops_at_the_first_closing_tag() {
        let document = "<section class=\"perfil \">one</section><section>two</section>";
        let outcome = extract_section(document);
        assert_eq!(outcome.text, "<section class=\"perfil \">one</section>");
    }

    #[test]
    fn missing_section_yields_empty_fragment_with_warning() {
        let outcome = extract_section("<div>no section here</div>");
        assert!(!outcome.is_found());
        assert!(outcome.text.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("section not found"));
    }

    #[test]
    fn class_attribute_must_match_exactly() {
        // The trailing space in the class attribute is part of the anchor.
        let outcome = extract_section("<section class=\"perfil\">x</section>");
        assert!(!outcome.is_found());
    }
}
