mod cli;
mod models;
mod scrapers;

use cli::Args;
use scrapers::{ListingScraper, OtomotoScraper, ScrapeConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    let config = ScrapeConfig {
        base_url: args.base_url,
        page_count: args.page_count,
        ..ScrapeConfig::default()
    };
    let scraper = OtomotoScraper::with_params(config)?;

    info!(
        "Scraping {} page(s) from {} ({})",
        scraper.config().page_count,
        scraper.config().base_url,
        scraper.source_name()
    );

    let report = scraper.scrape().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, record) in report.records.iter().enumerate() {
        println!("{}. {} ({})", i + 1, record.name, record.price);
        println!(
            "   {} | {} | {}",
            record.year,
            record.fuel.as_deref().unwrap_or("-"),
            record.gearbox.as_deref().unwrap_or("-")
        );
        if let (Some(engine), Some(power)) = (&record.engine, &record.power) {
            println!("   {}, {}", engine, power);
        }
        if let Some(description) = &record.description {
            println!("   {}", description);
        }
        if let Some(mileage) = &record.mileage {
            println!("   Mileage: {}", mileage);
        }
        if let Some(location) = &record.location {
            println!("   Location: {}", location);
        }
        println!("   Image: {}", record.image_url);
        println!("   URL: {}", record.product_url);
        println!();
    }

    Ok(())
}
