pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod template;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, ExtractionConfig, IoConfig};
pub use error::{FragexError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    extract_all, extract_script, extract_section, extract_styles, ExtractedFragments,
    ExtractionReport, FragmentOutcome, FragmentStatus, StylePolicy,
};
pub use template::assemble;
pub use ui::{OutputFormatter, OutputMode};

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Main library interface: reads the source document, locates the three
/// fragments, assembles the standalone page and writes it out.
pub struct Fragex {
    config: Config,
    output_formatter: OutputFormatter,
}

impl Fragex {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create a Fragex instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            cli::OutputFormat::Human => OutputMode::Human,
            cli::OutputFormat::Json => OutputMode::Json,
            cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Read the full source document. An absent or unreadable input is
    /// fatal; no output file is touched.
    pub fn read_document(&self) -> Result<String> {
        let input = &self.config.io.input;
        fs::read_to_string(input).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FragexError::InputNotFound {
                path: input.display().to_string(),
            },
            _ => FragexError::Io(e),
        })
    }

    /// Locate the three fragments in the document, printing a diagnostic
    /// line for each missing anchor. Missing anchors never fail the run.
    pub fn extract_fragments(&self, document: &str) -> ExtractedFragments {
        let fragments = extractor::extract_all(document, self.config.extraction.style_policy);

        for warning in fragments.warnings() {
            self.output_formatter.diagnostic(warning);
        }

        fragments
    }

    /// Full pipeline: read, extract, assemble, write. Returns the report;
    /// fatal only for I/O and configuration failures.
    pub fn extract_page(&self) -> Result<ExtractionReport> {
        let start_time = Instant::now();

        self.output_formatter.start_operation("Extracting fragments");

        let document = self.read_document()?;
        let fragments = self.extract_fragments(&document);

        let page = template::assemble(
            &fragments.section.text,
            &fragments.styles.text,
            &fragments.script.text,
        );

        let output = &self.config.io.output;
        fs::write(output, &page)?;

        self.output_formatter
            .success(&format!("Created output file: {}", output.display()));

        Ok(ExtractionReport::new(
            &self.config.io.input,
            output,
            &fragments,
            page.len(),
            start_time.elapsed(),
        ))
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        fs::write(output_path.as_ref(), sample_config).map_err(FragexError::Io)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &FragexError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract a page with default settings
pub fn extract_page_simple(input: &Path, output: &Path) -> Result<ExtractionReport> {
    let mut config = Config::default();
    config.io.input = input.to_path_buf();
    config.io.output = output.to_path_buf();

    let fragex = Fragex::new(config, OutputMode::Plain, 0, true);
    fragex.extract_page()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
<style media="screen" type="text/css">
.perfil { margin: 0; }
</style>
</head>
<body>
<section class="perfil ">
  <canvas id="myChart0"></canvas>
</section>
<script>(() => { new Chart('myChart'); })();</script>
</body>
</html>"#;

    fn test_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.io.input = dir.path().join("simulador.html");
        config.io.output = dir.path().join("out.html");
        config
    }

    #[test]
    fn test_extract_page_end_to_end() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("simulador.html"), DOCUMENT).unwrap();

        let fragex = Fragex::new(test_config(&dir), OutputMode::Plain, 0, true);
        let report = fragex.extract_page().unwrap();

        assert!(report.all_found());
        assert!(report.warnings.is_empty());

        let page = fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(page.contains("id=\"myChart\""));
        assert!(!page.contains("id=\"myChart0\""));
        assert!(page.contains(".perfil { margin: 0; }"));
        assert!(page.contains("new Chart('myChart')"));
        assert!(page.contains(template::BOOTSTRAP_CSS_URL));
        assert_eq!(report.output_bytes, page.len());
    }

    #[test]
    fn test_missing_fragments_still_produce_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("simulador.html"), "<html></html>").unwrap();

        let fragex = Fragex::new(test_config(&dir), OutputMode::Plain, 0, true);
        let report = fragex.extract_page().unwrap();

        assert!(!report.all_found());
        assert_eq!(report.warnings.len(), 3);
        assert!(dir.path().join("out.html").exists());

        let page = fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(page.contains(template::JQUERY_JS_URL));
    }

    #[test]
    fn test_missing_input_is_fatal_and_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let fragex = Fragex::new(test_config(&dir), OutputMode::Plain, 0, true);
        let result = fragex.extract_page();

        assert!(matches!(result, Err(FragexError::InputNotFound { .. })));
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("simulador.html"), DOCUMENT).unwrap();

        let fragex = Fragex::new(test_config(&dir), OutputMode::Plain, 0, true);
        fragex.extract_page().unwrap();
        let first = fs::read(dir.path().join("out.html")).unwrap();

        fragex.extract_page().unwrap();
        let second = fs::read(dir.path().join("out.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_page_simple() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.html");
        let output = dir.path().join("out.html");
        fs::write(&input, DOCUMENT).unwrap();

        let report = extract_page_simple(&input, &output).unwrap();
        assert!(report.all_found());
        assert!(output.exists());
    }

    #[test]
    fn test_sample_config_generation() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("sample.toml");

        Fragex::generate_sample_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[io]"));
        assert!(content.contains("[extraction]"));
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }

    #[test]
    fn test_from_cli_maps_output_mode() {
        use clap::Parser;
        let cli = Cli::parse_from(["fragex", "in.html", "--output", "out.html"]);
        let fragex = Fragex::from_cli(&cli).unwrap();
        assert_eq!(fragex.config().io.input, PathBuf::from("in.html"));
    }
}
