//! # Mock Tracking Demo
//!
//! Runs the full pipeline against the built-in mock feed and prints the
//! same summary the `track` command renders.

use brand_pulse::{pipeline, report, MockFeed};

#[tokio::main]
async fn main() {
    let feed = MockFeed::new();
    let term = "acme cola";

    println!("=== Brand Tracking Demo (mock feed) ===\n");
    println!("🔍 Scanning mock posts for '{}'...\n", term);

    match pipeline::run_search(&feed, term).await {
        Ok(result) => {
            for classified in &result.posts {
                println!(
                    "{:8} [{:+.2}] {}",
                    classified.label.as_str(),
                    classified.score,
                    classified.post.text
                );
            }
            println!("\n{}", report::render_summary(&result));
        }
        Err(err) => println!("{}", report::render_error(&err)),
    }
}
