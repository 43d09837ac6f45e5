//! Framework Hub CLI
//!
//! Usage:
//!   framework-hub [OPTIONS] [DESCRIPTION]...
//!
//! Options:
//!   -l, --language <LANG>    Target language (default: javascript)
//!   -t, --type <TYPE>        Code type (default: function)
//!   -c, --config <FILE>      Settings file (TOML format)
//!   -o, --output-dir <DIR>   Export every generated artifact into DIR
//!   --json                   Print history as JSON
//!   --list                   Show the template catalog
//!   -h, --help               Print help

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use framework_hub::controller::NoLatency;
use framework_hub::{
    write_artifact, CodeType, Controller, GeneratedArtifact, HubConfig, Language, TemplateCatalog,
};

#[derive(Parser)]
#[command(name = "framework-hub")]
#[command(about = "Generate example code from a short description")]
struct Cli {
    /// Descriptions to generate code for (reads lines from stdin if not provided)
    descriptions: Vec<String>,

    /// Target language
    #[arg(short, long, default_value = "javascript")]
    language: Language,

    /// Kind of code to generate
    #[arg(short = 't', long = "type", default_value = "function")]
    code_type: CodeType,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export every artifact in history into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print history as JSON instead of plain code
    #[arg(long)]
    json: bool,

    /// Show the template catalog
    #[arg(long)]
    list: bool,

    /// Skip the simulated request latency
    #[arg(long)]
    no_delay: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        print_catalog();
        return;
    }

    // If no descriptions and stdin is a terminal (interactive), show intro help
    if cli.descriptions.is_empty() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let config = match &cli.config {
        Some(path) => match HubConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => HubConfig::default(),
    };

    let descriptions = if cli.descriptions.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        cli.descriptions.clone()
    };

    let mut controller = Controller::from_config(&config);
    if cli.no_delay {
        controller = controller.with_scheduler(Arc::new(NoLatency));
    }

    let handles: Vec<_> = descriptions
        .into_iter()
        .map(|d| controller.submit(cli.language, cli.code_type, d))
        .collect();

    let mut failed = false;
    for handle in handles {
        match handle.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                eprintln!("Skipped request: {}", e.user_message());
                failed = true;
            }
            Err(e) => {
                eprintln!("Error: generation task failed: {}", e);
                failed = true;
            }
        }
    }

    let history = controller.history().await;

    if let Some(dir) = &cli.output_dir {
        for artifact in &history {
            match write_artifact(artifact, dir) {
                Ok(path) => eprintln!("Wrote {}", path.display()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&history) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_history(&history);
    }

    if failed {
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}

fn print_history(history: &[GeneratedArtifact]) {
    for (i, artifact) in history.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "=== {} {} | {} | {} ===",
            artifact.language().label(),
            artifact.code_type().label(),
            artifact.id(),
            artifact.created_at().format("%Y-%m-%d %H:%M:%S UTC")
        );
        print!("{}", artifact.code());
    }
}

fn print_catalog() {
    let catalog = TemplateCatalog::builtin();
    println!("TEMPLATE CATALOG ({} templates)", catalog.len());
    println!("================");
    for language in Language::ALL {
        let types: Vec<&str> = catalog.code_types_for(language).map(CodeType::as_str).collect();
        let listed = if types.is_empty() {
            "(generic skeleton only)".to_string()
        } else {
            types.join(", ")
        };
        println!("{:<12} {}", language.as_str(), listed);
    }
    println!();
    println!("Other combinations render a generic skeleton that embeds the description.");
}

fn print_intro() {
    println!(
        r#"Framework Hub - example code from a short description

USAGE:
    framework-hub [OPTIONS] [DESCRIPTION]...
    echo '<description>' | framework-hub

OPTIONS:
    -l, --language     javascript, python, java, typescript, go, rust, cpp, csharp
    -t, --type         function, class, api, component, algorithm, test, config, script
    -c, --config       Settings file (TOML)
    -o, --output-dir   Export generated code as files
    --json             Print history as JSON
    --list             Show which combinations have templates
    --no-delay         Skip the simulated request latency
    -v, --verbose      Debug logging
    -h, --help         Print help

SETTINGS:
    [history]
    max_entries = {max_entries}

    [generation]
    latency_ms = {latency_ms}

QUICK START:
    framework-hub -l python -t class "Shopping cart with totals"

Each description becomes one generated artifact; the most recent is printed first.
Blank descriptions are skipped and make the exit status 1."#,
        max_entries = framework_hub::config::DEFAULT_MAX_ENTRIES,
        latency_ms = framework_hub::config::DEFAULT_LATENCY_MS
    );
}
