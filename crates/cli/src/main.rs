use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use referent_core::{
    Action, FetchConfig, GenerateConfig, Generator, PromptBuilder, Session, extract, fetch_url,
    label_for_translation,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract an article, translate it to Russian, and derive summaries or posts
#[derive(Parser, Debug)]
#[command(name = "referent")]
#[command(version = VERSION)]
#[command(about = "Extract, translate, and analyze articles", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Stop after extraction and print the extracted fields as JSON
    #[arg(long)]
    extract_only: bool,

    /// Derive an artifact from the translation (summary, theses, telegram)
    #[arg(short, long, value_name = "ACTION")]
    action: Option<Action>,

    /// Source link for the telegram post (defaults to the input URL)
    #[arg(long, value_name = "URL")]
    source_url: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Model identifier for the generation service
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Enable progress logging
    #[arg(short, long)]
    verbose: bool,
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Referent".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Extract, translate, and analyze articles".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Reads HTML from a file or stdin. URLs are handled by the pipeline itself.
fn read_local(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

fn generate_config(args: &Args) -> GenerateConfig {
    let mut config = GenerateConfig::new(std::env::var("OPENROUTER_API_KEY").unwrap_or_default());
    config.timeout = args.timeout;
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    config
}

fn write_output(output: Option<&PathBuf>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args
            .user_agent
            .clone()
            .unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    // Extraction needs no credentials; everything past it does.
    if args.extract_only {
        let total = 2;
        if args.verbose {
            print_step(1, total, &format!("Loading {}", args.input.bright_white()));
        }
        let html = if is_url(&args.input) {
            fetch_url(&args.input, &fetch_config).await?
        } else {
            read_local(&args.input)?
        };

        if args.verbose {
            print_step(2, total, "Extracting article fields");
        }
        let article = extract(&html);
        return write_output(args.output.as_ref(), &serde_json::to_string_pretty(&article)?);
    }

    let generator = Generator::new(generate_config(&args))?;
    let total = if args.action.is_some() { 3 } else { 2 };

    let result = if is_url(&args.input) {
        if args.verbose {
            print_step(1, total, &format!("Fetching {}", args.input.bright_white().underline()));
            print_step(2, total, "Translating to Russian");
        }
        let mut session = Session::with_configs(generator, fetch_config, PromptBuilder::new());
        let translated = session
            .fetch_and_translate(&args.input)
            .await?
            .context("Pipeline is busy")?;

        match args.action {
            Some(action) => {
                if args.verbose {
                    print_step(3, total, &format!("Generating {}", action.label().bright_white()));
                }
                let source = args.source_url.as_deref().or(Some(args.input.as_str()));
                session.artifact(action, source).await?
            }
            None => translated,
        }
    } else {
        if args.verbose {
            print_step(1, total, &format!("Reading {}", args.input.bright_white()));
        }
        let article = extract(&read_local(&args.input)?);

        if args.verbose {
            print_step(2, total, "Translating to Russian");
        }
        let prompts = PromptBuilder::new();
        let translated = generator
            .complete(&prompts.translation(&label_for_translation(&article)))
            .await?;

        match args.action {
            Some(action) => {
                if args.verbose {
                    print_step(3, total, &format!("Generating {}", action.label().bright_white()));
                }
                let prompt = prompts.artifact(action, &translated, args.source_url.as_deref());
                generator.complete(&prompt).await?
            }
            None => translated,
        }
    };

    write_output(args.output.as_ref(), &result)
}
