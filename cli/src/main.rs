use std::io::Write;

use anyhow::Context;
use catalog_cli::{logging, render_outcome, Args, FetchResult, Fetcher};
use catalog_core::CatalogClient;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, args.log_format)?;

    let catalog = CatalogClient::new(&args.base_url);
    let fetcher = Fetcher::new(catalog.clone()).context("building HTTP client")?;

    let handles: Vec<_> = args
        .queries()
        .iter()
        .map(|params| fetcher.fetch(catalog.build_search_cards(params), print_outcome))
        .collect();

    for handle in handles {
        handle.await.context("lookup task panicked")?;
    }
    Ok(())
}

fn print_outcome(result: FetchResult) {
    let out = render_outcome(&result);
    if out.is_empty() {
        return;
    }
    let mut stdout = std::io::stdout().lock();
    let written = stdout.write_all(out.as_bytes());
    if let Err(e) = written.and_then(|()| stdout.flush()) {
        tracing::error!(error = %e, "could not write to stdout");
    }
}
