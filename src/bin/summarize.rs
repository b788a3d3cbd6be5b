//! Command-line front end for the summarizer API.
//!
//! Reads content from a file or stdin, submits it once and prints the summary with its metadata.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use smart_summarizer::client::SummarizerClient;
use smart_summarizer::models::{
    ContentType, DEFAULT_FOCUS_POINTS, DEFAULT_SUMMARY_LENGTH, SummaryRequest, SummaryResponse,
    SummaryStyle,
};

#[derive(Parser, Debug)]
#[command(name = "summarize", version, about = "Summarize text with the Smart Summarizer API")]
struct Cli {
    /// File to summarize; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Kind of content: general, article, email, report, technical, research
    #[arg(short = 't', long, default_value_t = ContentType::General)]
    content_type: ContentType,

    /// Target summary length in words (20-500)
    #[arg(short, long, default_value_t = DEFAULT_SUMMARY_LENGTH)]
    length: i64,

    /// Writing style: professional, casual, technical, academic
    #[arg(short, long, default_value_t = SummaryStyle::Professional)]
    style: SummaryStyle,

    /// Aspects the summary should emphasize
    #[arg(short, long, default_value = DEFAULT_FOCUS_POINTS)]
    focus: String,

    /// API base URL (defaults to SUMMARIZER_API_URL or http://127.0.0.1:8000)
    #[arg(long)]
    api_url: Option<String>,

    /// Only check that the API is reachable
    #[arg(long)]
    health: bool,

    /// Print the raw JSON response instead of formatted output
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = match &cli.api_url {
        Some(url) => SummarizerClient::new(url.as_str()),
        None => SummarizerClient::from_env(),
    };

    if cli.health {
        let health = client
            .health()
            .await
            .with_context(|| format!("Health check against {} failed", client.base_url()))?;
        println!("{} {}", health.status.green().bold(), health.message);
        return Ok(());
    }

    let content = read_input(cli.input.as_ref())?;
    let request = SummaryRequest {
        content,
        content_type: cli.content_type,
        summary_length: cli.length,
        style: cli.style,
        focus_points: cli.focus,
    };

    let response = client.summarize(&request).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&response);
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_summary(resp: &SummaryResponse) {
    println!("{}", "Summary".cyan().bold());
    println!("{}\n", resp.summary);

    let params = &resp.parameters_used;
    println!("{}", "Details".cyan().bold());
    println!("  {:<14} {}", "Words:".dimmed(), resp.word_count);
    println!("  {:<14} {}", "Characters:".dimmed(), resp.char_count);
    println!("  {:<14} {}", "Content type:".dimmed(), params.content_type);
    println!("  {:<14} {}", "Style:".dimmed(), params.style);
    println!(
        "  {:<14} {} words",
        "Target length:".dimmed(),
        params.summary_length
    );
    println!("  {:<14} {}", "Focus:".dimmed(), params.focus_points);
}
