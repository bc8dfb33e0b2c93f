//! CLI for brand sentiment tracking
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- track "acme cola"
//! cargo run -- analyze --text "Loving the new flavor!"
//! cargo run -- demo --term acme
//! ```

use anyhow::Result;
use brand_pulse::{
    pipeline, report, Credentials, MockFeed, PolarityScorer, SentimentClassifier, TrackerError,
    TwitterClient,
};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "brand-pulse")]
#[command(version)]
#[command(about = "Track brand sentiment over recent Twitter posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, classify, and summarize posts for one or more search terms
    Track {
        /// Brand names, hashtags, or products to track
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Score and classify a single text
    Analyze {
        /// Text to analyze
        #[arg(short, long)]
        text: String,
    },

    /// Run the pipeline against the built-in mock feed (no credentials)
    Demo {
        /// Search term to interpolate into the mock posts
        #[arg(short, long, default_value = "acme")]
        term: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Track { terms } => run_track(&terms).await?,
        Commands::Analyze { text } => run_analyze(&text),
        Commands::Demo { term } => run_demo(&term).await?,
    }

    Ok(())
}

async fn run_track(terms: &[String]) -> Result<()> {
    // Missing credentials end the whole run before anything is fetched.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("{}", report::render_error(&err));
            anyhow::bail!("cannot start without credentials");
        }
    };
    let client = TwitterClient::new(credentials);

    for term in terms {
        println!("\n🔍 Scanning posts for '{}'...\n", term);

        // Each term is an independent run; a failed term does not stop
        // the ones after it.
        match pipeline::run_search(&client, term).await {
            Ok(result) => {
                println!("{}", report::render_summary(&result));
                println!("Analysis complete! ✅");
            }
            Err(err) => {
                if err.is_warning() {
                    println!("{}", report::render_error(&err));
                } else {
                    eprintln!("{}", report::render_error(&err));
                }
            }
        }
    }

    Ok(())
}

fn run_analyze(text: &str) {
    let scorer = PolarityScorer::new();
    let classifier = SentimentClassifier::with_scorer(scorer);

    println!("\n📝 Analyzing text...\n");
    let (score, label) = classifier.score_and_classify(text);

    println!("Text: {}", text);
    println!("Polarity: {:.3}", score);
    println!("Label: {}", label.display_label());
}

async fn run_demo(term: &str) -> Result<()> {
    info!("Running against the mock feed, nothing is fetched remotely");
    let feed = MockFeed::new();

    println!("\n🔍 Scanning mock posts for '{}'...\n", term);

    match pipeline::run_search(&feed, term).await {
        Ok(result) => {
            for classified in &result.posts {
                println!(
                    "{:12} [{:+.2}] {}",
                    classified.label.as_str(),
                    classified.score,
                    classified.post.text
                );
            }
            println!("\n{}", report::render_summary(&result));
            println!("Analysis complete! ✅");
        }
        Err(err @ TrackerError::NoResults { .. }) => {
            println!("{}", report::render_error(&err));
        }
        Err(err) => eprintln!("{}", report::render_error(&err)),
    }

    Ok(())
}
