use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use nlp_processor::config::Settings;
use nlp_processor::export::{self, TextStats};
use nlp_processor::pipeline::{self, PipelineResult, Stage};
use nlp_processor::resources::{self, ResourceSource};
use nlp_processor::Extractor;

#[derive(Parser)]
#[command(name = "nlp_processor", about = "Text preprocessing and webpage content extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process text given on the command line (reads stdin when omitted)
    Text {
        text: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Process a UTF-8 text file
    File {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Scrape a webpage and process its main content
    Scrape {
        /// Page URL; https:// is assumed when no scheme is given
        url: String,
        /// Print the extracted page before processing
        #[arg(long)]
        show_content: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write processed_text.txt and tokens.txt into this directory
    #[arg(long)]
    export: Option<PathBuf>,
    /// Print the full result as JSON instead of the stage report
    #[arg(long)]
    json: bool,
    /// Sample tokens shown per stage
    #[arg(long)]
    preview: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load_or_default();
    if let Some(dir) = &settings.resources.dir {
        if resources::configure(ResourceSource::Directory(dir.clone())) {
            info!(dir = %dir.display(), "using linguistic resources from directory");
        } else {
            warn!(dir = %dir.display(), "resource directory ignored; embedded data already loaded");
        }
    }

    let (corpus, output) = match cli.command {
        Commands::Text { text, output } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };
            (vec![text], output)
        }
        Commands::File { path, output } => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let text = match String::from_utf8(bytes) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{} is not valid UTF-8 text: {}", path.display(), e);
                    return Ok(());
                }
            };
            println!("File loaded ({} characters)", text.chars().count());
            (vec![text], output)
        }
        Commands::Scrape {
            url,
            show_content,
            output,
        } => {
            let extractor = Extractor::new(&settings.fetch)?;
            let spinner = spinner("Scraping webpage content...");
            let page = extractor.extract(&url).await;
            spinner.finish_and_clear();

            let page = match page {
                Ok(page) => page,
                Err(e) => {
                    eprintln!("Could not scrape {}: {}", url, e);
                    return Ok(());
                }
            };
            println!("Scraped {} ({} blocks)", page.url, page.blocks.len());
            let rendered = page.render();
            if show_content {
                println!("\n--- Scraped content ---\n{}\n", rendered);
            }
            (vec![rendered], output)
        }
    };

    if corpus.iter().all(|d| d.trim().is_empty()) {
        println!("No input text to process.");
        return Ok(());
    }

    let stats = TextStats::of(&corpus[0]);
    if !output.json {
        println!(
            "Characters: {} | Words: {} | Lines: {} | Unique words: {}",
            stats.characters, stats.words, stats.lines, stats.unique_words
        );
    }

    let spinner = spinner("Running NLP pipeline...");
    let result = pipeline::process_corpus(&corpus);
    spinner.finish_and_clear();

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let preview = output.preview.unwrap_or(settings.display.preview_tokens);
        print_report(&result, preview);
    }

    if let Some(dir) = &output.export {
        let paths = export::write_exports(&result, dir)?;
        println!(
            "\nExported {} and {}",
            paths.processed_text.display(),
            paths.tokens.display()
        );
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_report(result: &PipelineResult, preview: usize) {
    for (i, stage) in Stage::ALL.iter().enumerate() {
        println!("\n{}. {}", i + 1, stage.label());
        println!("{}", "-".repeat(40));
        if *stage == Stage::Cleaned {
            println!("{}", result.cleaned.first().map(String::as_str).unwrap_or(""));
            continue;
        }
        let tokens = result.tokens(*stage, 0).unwrap_or_default();
        let shown: Vec<&str> = tokens.iter().take(preview).copied().collect();
        println!("Sample tokens: {:?}", shown);
        println!("Total {} tokens: {}", stage.name(), tokens.len());
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
