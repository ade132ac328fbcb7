pub mod anchors;
pub mod report;
pub mod script;
pub mod section;
pub mod styles;

pub use report::{ExtractionReport, FragmentStatus};
pub use script::extract_script;
pub use section::extract_section;
pub use styles::{extract_styles, StylePolicy};

/// Outcome of locating a single fragment. A missing anchor is not an error:
/// the fragment degrades to an empty string and the reason is kept as a
/// warning for the caller to print.
#[derive(Debug, Clone, Default)]
pub struct FragmentOutcome {
    pub text: String,
    pub warnings: Vec<String>,
}

impl FragmentOutcome {
    pub fn found(text: String) -> Self {
        Self {
            text,
            warnings: Vec::new(),
        }
    }

    pub fn missing<S: Into<String>>(warning: S) -> Self {
        Self {
            text: String::new(),
            warnings: vec![warning.into()],
        }
    }

    pub fn is_found(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// The three fragments extracted from one document, each possibly empty.
#[derive(Debug, Clone)]
pub struct ExtractedFragments {
    pub section: FragmentOutcome,
    pub styles: FragmentOutcome,
    pub script: FragmentOutcome,
}

impl ExtractedFragments {
    pub fn warnings(&self) -> Vec<&str> {
        self.section
            .warnings
            .iter()
            .chain(self.styles.warnings.iter())
            .chain(self.script.warnings.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn statuses(&self) -> Vec<FragmentStatus> {
        vec![
            FragmentStatus::of("section", &self.section),
            FragmentStatus::of("styles", &self.styles),
            FragmentStatus::of("script", &self.script),
        ]
    }
}

/// Run all three fragment searches over the document. Never fails: missing
/// anchors surface as warnings on the individual outcomes.
pub fn extract_all(document: &str, policy: StylePolicy) -> ExtractedFragments {
    ExtractedFragments {
        section: extract_section(document),
        styles: extract_styles(document, policy),
        script: extract_script(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<html><head>
<style media="screen" type="text/css">
.perfil { color: red; }
</style>
</head><body>
<section class="perfil "><canvas id="myChart0"></canvas></section>
<script>(() => { draw(); })();</script>
</body></html>"#;

    #[test]
    fn extract_all_finds_every_fragment() {
        let fragments = extract_all(DOCUMENT, StylePolicy::TagFirst);
        assert!(fragments.section.is_found());
        assert!(fragments.styles.is_found());
        assert!(fragments.script.is_found());
        assert!(fragments.warnings().is_empty());
    }

    #[test]
    fn extract_all_collects_warnings_per_fragment() {
        let fragments = extract_all("<html></html>", StylePolicy::TagFirst);
        assert!(!fragments.section.is_found());
        assert!(!fragments.styles.is_found());
        assert!(!fragments.script.is_found());
        assert_eq!(fragments.warnings().len(), 3);
    }

    #[test]
    fn statuses_report_byte_lengths() {
        let fragments = extract_all(DOCUMENT, StylePolicy::TagFirst);
        let statuses = fragments.statuses();
        assert_eq!(statuses.len(), 3);
        assert!(statuses.iter().all(|s| s.found && s.bytes > 0));
    }
}
