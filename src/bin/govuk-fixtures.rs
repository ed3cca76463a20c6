use clap::Parser;
use govuk_components::fixtures::{FixtureSuite, Outcome};
use govuk_components::{ComponentError, ComponentResult, Config, HtmlContext};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Render every fixture in the given files and compare it with its expected HTML.
#[derive(Parser, Debug)]
#[command(name = "govuk-fixtures", version, about, long_about = None)]
struct Cli {
    /// Fixture files (or directories of `*.json` fixture files)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// YAML configuration with the brand prefix and default texts
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the expected and rendered markup for mismatches
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::ERROR
        })
        .init();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ configuration has errors:");
            print_error(&e);
            process::exit(1);
        }
    };
    let ctx = HtmlContext::new(config);

    let mut exit_code = 0;
    for path in &cli.files {
        let suites = if path.is_dir() {
            FixtureSuite::load_dir(path)
        } else {
            FixtureSuite::load_file(path).map(|suite| vec![suite])
        };
        let suites = match suites {
            Ok(suites) => suites,
            Err(e) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&e);
                exit_code = 1;
                continue;
            }
        };

        for suite in suites {
            if !check_suite(&ctx, &suite, cli.verbose) {
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn load_config(path: Option<&PathBuf>) -> ComponentResult<Config> {
    match path {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .map_err(|e| ComponentError::Config(format!("Failed to read file: {}", e)))?;
            Config::from_yaml(&yaml)
        }
        None => Ok(Config::default()),
    }
}

fn check_suite(ctx: &HtmlContext, suite: &FixtureSuite, verbose: bool) -> bool {
    let results = suite.verify(ctx);
    let failures: Vec<_> = results.iter().filter(|r| !r.passed()).collect();

    if failures.is_empty() {
        println!(
            "✓ {} ({}, {} fixtures)",
            suite.path.display(),
            suite.component,
            results.len()
        );
        return true;
    }

    eprintln!(
        "✗ {} ({}): {} of {} fixtures failed:",
        suite.path.display(),
        suite.component,
        failures.len(),
        results.len()
    );
    for result in failures {
        match &result.outcome {
            Outcome::Mismatch { expected, actual } => {
                eprintln!("  Markup mismatch in '{}'", result.name);
                if verbose {
                    eprintln!("    expected: {}", expected);
                    eprintln!("    actual:   {}", actual);
                }
            }
            Outcome::Failed(e) => {
                eprintln!("  Render error in '{}':", result.name);
                print_error(e);
            }
            Outcome::Passed => {}
        }
    }
    false
}

fn print_error(error: &ComponentError) {
    match error {
        ComponentError::MissingField { component, field } => {
            eprintln!("  Missing field '{}' for component '{}'", field, component);
        }
        ComponentError::InvalidOptions { component, reason } => {
            eprintln!("  Invalid options for '{}':", component);
            eprintln!("    {}", reason);
        }
        ComponentError::Fixture { path, reason } => {
            eprintln!("  Fixture file '{}':", path);
            eprintln!("    {}", reason);
        }
        other => {
            eprintln!("    {}", other);
        }
    }
}
