use anyhow::{bail, Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use ranking::PageEntry;
use server::{SearchHit, SearchOrchestrator, SearchResponse};
use sources::{Candidate, Session, SnapshotClient};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Starchart - SpaceTraders search engine
#[derive(Parser)]
#[command(name = "starchart")]
#[command(about = "Search systems, waypoints, factions, ships and contracts", long_about = None)]
struct Cli {
    /// Directory holding systems.json and factions.json
    #[arg(short, long, default_value = "data/sample")]
    data_dir: PathBuf,

    /// Ships/contracts snapshot standing in for the game API
    /// (default: <data-dir>/snapshot.json)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Bearer token passed to the game client
    #[arg(long, default_value = "local")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search, e.g. `starchart search sol is:waypoint`
    Search {
        /// Free text mixed with key:value filters
        query: Vec<String>,

        /// 1-based result page
        #[arg(long, default_value = "1")]
        page: usize,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show catalog statistics
    Catalog,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of searches to run
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of searches in flight at once
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_files(&cli.data_dir).with_context(|| {
            format!("Failed to load catalog from {}", cli.data_dir.display())
        })?,
    );
    info!("Loaded catalog in {:?}", start.elapsed());

    let snapshot = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| cli.data_dir.join("snapshot.json"));
    let session = Session::new(cli.token.clone());
    let orchestrator = SearchOrchestrator::new(catalog.clone(), SnapshotClient::new(snapshot));

    match cli.command {
        Commands::Search { query, page, json } => {
            handle_search(&orchestrator, &session, query, page, json).await?
        }
        Commands::Catalog => handle_catalog(&catalog),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(Arc::new(orchestrator), session, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    orchestrator: &SearchOrchestrator<SnapshotClient>,
    session: &Session,
    query: Vec<String>,
    page: usize,
    json: bool,
) -> Result<()> {
    let raw = query.join(" ");
    let query = if raw.is_empty() { None } else { Some(raw.as_str()) };

    let response = orchestrator.search(session, query, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&raw, &response, orchestrator.config().page_size);
    }
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: &Catalog) {
    let (systems, waypoints, factions) = catalog.counts();

    println!("{}", "Catalog:".bold().blue());
    println!("{}Systems: {}", "• ".green(), systems);
    println!("{}Waypoints: {}", "• ".green(), waypoints);
    println!("{}Factions: {}", "• ".green(), factions);
    println!("{}Validation: {}", "• ".green(), "ok".green());

    let mut waypoint_types: BTreeMap<&str, usize> = BTreeMap::new();
    for waypoint in catalog.systems().iter().flat_map(|s| &s.waypoints) {
        *waypoint_types.entry(waypoint.waypoint_type.as_str()).or_insert(0) += 1;
    }
    println!("Waypoint types:");
    for (waypoint_type, count) in waypoint_types {
        println!("  - {}: {}", waypoint_type, count);
    }

    let recruiting = catalog.factions().iter().filter(|f| f.is_recruiting).count();
    println!("Recruiting factions: {} of {}", recruiting, factions);
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: Arc<SearchOrchestrator<SnapshotClient>>,
    session: Session,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    // Random system and waypoint symbols, trimmed to a fuzzy prefix
    let symbols: Vec<String> = orchestrator
        .catalog()
        .systems()
        .iter()
        .flat_map(|s| std::iter::once(&s.symbol).chain(s.waypoints.iter().map(|w| &w.symbol)))
        .filter(|symbol| !symbol.is_empty())
        .cloned()
        .collect();
    if symbols.is_empty() {
        bail!("Catalog is empty, nothing to search for");
    }
    let queries: Vec<String> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| {
                let symbol = &symbols[rng.random_range(0..symbols.len())];
                let keep = rng.random_range(1..=symbol.chars().count());
                symbol.chars().take(keep).collect()
            })
            .collect()
    };

    let wall_clock = Instant::now();
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for batch in queries.chunks(concurrent.max(1)) {
        let mut handles = vec![];
        for query in batch {
            let orchestrator = orchestrator.clone();
            let session = session.clone();
            let query = query.clone();
            handles.push(tokio::spawn(async move {
                let start = Instant::now();
                orchestrator.search(&session, Some(&query), 1).await?;
                Ok::<_, anyhow::Error>(start.elapsed())
            }));
        }
        for handle in handles {
            timings.push(handle.await??);
        }
    }
    let total_time = wall_clock.elapsed();

    let total_latency: Duration = timings.iter().sum();
    let avg_latency = total_latency / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Format and print one page of results
fn print_response(raw: &str, response: &SearchResponse, page_size: usize) {
    println!("{}", format!("Search results for '{}':", raw).bold().blue());

    if response.results.is_empty() {
        println!("  {}", "no results".dimmed());
    }
    let offset = response.page.saturating_sub(1) * page_size;
    for (i, hit) in response.results.iter().enumerate() {
        println!(
            "{}. {} {} - Score: {:.3}  {}",
            (offset + i + 1).to_string().green(),
            format!("[{}]", hit.candidate.kind()).cyan(),
            hit.candidate.key().bold(),
            hit.score,
            describe(hit).dimmed()
        );
    }

    let strip: Vec<String> = response
        .page_index
        .iter()
        .map(|entry| match entry {
            PageEntry::Page(n) if *n == response.page => format!("[{}]", n).bold().to_string(),
            other => other.to_string(),
        })
        .collect();
    println!("Pages: {}", strip.join(" "));
    println!(
        "{} matches, {} pages, {:.2?}",
        response.total_matches, response.total_pages, response.elapsed
    );
}

fn describe(hit: &SearchHit) -> String {
    match &hit.candidate {
        Candidate::System(s) => format!("{} in sector {}", s.system_type, s.sector_symbol),
        Candidate::Waypoint(w) => format!("{} in {}", w.waypoint_type, w.system_symbol),
        Candidate::Faction(f) => f.name.clone(),
        Candidate::Ship(s) => format!(
            "{} {} at {}",
            s.registration.role, s.nav.status, s.nav.waypoint_symbol
        ),
        Candidate::Contract(c) => format!(
            "{} for {} ({})",
            c.contract_type,
            c.faction_symbol,
            c.status()
        ),
    }
}
