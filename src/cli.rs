use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::extractor::StylePolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fragex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract an HTML section, its styles and its chart script into a standalone page")]
#[command(
    long_about = "Fragex locates the profile <section>, its matching <style> block and the \
                  trailing inline chart <script> in a static HTML document, and repackages \
                  them into a minimal standalone page with fixed CDN references."
)]
#[command(after_help = "EXAMPLES:\n  \
    fragex\n  \
    fragex simulador.html --output perfil.html\n  \
    fragex page.html --style-policy rule-first --output-format json\n  \
    fragex --config fragex.toml --dry-run")]
pub struct Cli {
    /// Source HTML document (defaults to simulador.html)
    pub input: Option<PathBuf>,

    /// Output file path (defaults to simulador_perfil_extracto.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Anchor strategy for locating the styles block
    #[arg(long, value_enum)]
    pub style_policy: Option<StylePolicy>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show what would be extracted without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a sample configuration file
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_input(self.input.clone())
            .with_output(self.output.clone())
            .with_style_policy(self.style_policy)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("fragex").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_come_from_config_not_cli() {
        let cli = parse(&[]);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());

        let config = cli.load_config().unwrap();
        assert_eq!(config.io.input, PathBuf::from("simulador.html"));
        assert_eq!(
            config.io.output,
            PathBuf::from("simulador_perfil_extracto.html")
        );
    }

    #[test]
    fn test_positional_input_and_output_flag() {
        let cli = parse(&["page.html", "--output", "out.html"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.io.input, PathBuf::from("page.html"));
        assert_eq!(config.io.output, PathBuf::from("out.html"));
    }

    #[test]
    fn test_style_policy_flag() {
        let cli = parse(&["--style-policy", "rule-first"]);
        assert_eq!(cli.style_policy, Some(StylePolicy::RuleFirst));

        let config = cli.load_config().unwrap();
        assert_eq!(config.extraction.style_policy, StylePolicy::RuleFirst);
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let cli = parse(&["page.html", "--output", "page.html"]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = parse(&["-vv"]);
        assert!(cli.is_verbose());
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = parse(&["--quiet"]);
        assert!(!quiet.is_verbose());
        assert_eq!(quiet.verbosity_level(), 0);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["fragex", "-q", "-v"]);
        assert!(result.is_err());
    }
}
