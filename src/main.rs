use clap::Parser;
use fragex::{Cli, Fragex, FragexError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let fragex = match Fragex::from_cli(&cli) {
        Ok(fragex) => fragex,
        Err(e) => {
            print_startup_error(&e);
            return 2;
        }
    };

    if cli.dry_run {
        return handle_dry_run(&fragex);
    }

    // Missing anchors are diagnostics, not failures; the process exits
    // zero as long as the output file was written.
    match fragex.extract_page() {
        Ok(report) => {
            fragex.output_formatter().print_extraction_report(&report);
            0
        }
        Err(e) => {
            fragex.handle_error(&e);

            match e {
                FragexError::InputNotFound { .. } => 3,
                FragexError::Config { .. } => 2,
                FragexError::InvalidPath { .. } => 4,
                _ => 1,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "fragex.toml".to_string());

    match Fragex::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  fragex --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(fragex: &Fragex) -> i32 {
    let formatter = fragex.output_formatter();

    formatter.info("DRY RUN MODE - No output file will be written");
    formatter.print_separator();

    let config = fragex.config();
    println!("  Input:        {}", config.io.input.display());
    println!("  Output:       {}", config.io.output.display());
    println!("  Style policy: {:?}", config.extraction.style_policy);

    let document = match fragex.read_document() {
        Ok(document) => document,
        Err(e) => {
            fragex.handle_error(&e);
            return 3;
        }
    };

    let fragments = fragex.extract_fragments(&document);

    formatter.print_separator();
    for status in fragments.statuses() {
        println!(
            "  {:<8} {} ({} bytes)",
            status.name,
            if status.found { "found" } else { "missing" },
            status.bytes
        );
    }

    formatter.print_separator();
    formatter.success("Dry run completed");

    0
}

fn print_startup_error(error: &FragexError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
