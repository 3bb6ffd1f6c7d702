use clap::Parser;
use sgcarmart_crawler::{CrawlError, CrawlResult, Listings};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting crawl for listing: {}", args.url);

    let result = match run(&args).await {
        Ok(result) => result,
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            std::process::exit(1);
        }
    };

    let json = if args.compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<CrawlResult, CrawlError> {
    let mut listings = Listings::new();
    if let Some(path) = &args.config {
        listings = listings.with_config_file(path)?;
    }
    if let Some(timeout) = args.timeout {
        listings = listings.with_timeout(timeout);
    }
    if let Some(path) = &args.html {
        ::log::info!("Reading page from {} instead of fetching", path.display());
        listings = listings.with_html_file(path);
    }

    let start_time = std::time::Instant::now();
    let result = listings.crawl(&args.url).await?;
    ::log::info!(
        "Crawl finished in {:.2} seconds (success: {})",
        start_time.elapsed().as_secs_f64(),
        result.success
    );
    Ok(result)
}
