use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use repo_search::config::SearchConfig;
use repo_search::formatter::{ResultsView, SearchInput, search_page_markdown};
use repo_search::github::{GitHubClient, QueryExecutor};
use repo_search::navigation::{Route, resolve};
use repo_search::services::SearchSession;
use repo_search::types::SearchTerm;

#[derive(Parser)]
#[command(name = "repo-search-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Search GitHub repositories by name, most starred first, loading 25 results at a time"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Output format for results - markdown for reading, json for programmatic use
    #[arg(long, global = true, default_value = "markdown")]
    format: OutputFormat,
    /// GitHub personal access token (can also be set via REPO_SEARCH_GITHUB_TOKEN or GITHUB_TOKEN)
    #[arg(long, global = true)]
    github_token: Option<String>,
    /// GitHub API base URI (can also be set via REPO_SEARCH_API_BASE_URI)
    #[arg(long, global = true)]
    api_base_uri: Option<String>,
    /// Request timeout in seconds for GitHub API calls
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Search repositories whose name matches the term
    Search {
        /// Search term - appended with "in:name sort:stars-desc"
        term: String,
        /// Number of pages to load (25 repositories per page)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,
    },
    /// Open a results route such as "/repositories?q=react"
    Open {
        route: String,
        /// Number of pages to load (25 repositories per page)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,
    },
    /// Interactive search: "more" (or an empty line) loads more, "/search <text>" runs a new search, "quit" exits
    Interactive {
        /// Initial route, e.g. "/repositories?q=react"
        #[arg(short, long, default_value = "/repositories")]
        route: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("repo_search=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SearchConfig::from_env()
        .with_api_token(cli.github_token)
        .with_api_base_uri(cli.api_base_uri)
        .with_request_timeout(cli.request_timeout.map(Duration::from_secs));

    let github_client = GitHubClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create GitHub client: {}", e))?;

    match cli.command {
        Commands::Search { term, pages } => {
            let route = resolve(&repo_search::navigation::results_path(&SearchTerm::new(term)))?;
            handle_search_command(github_client, route, pages, &cli.format).await?;
        }
        Commands::Open { route, pages } => {
            let route = resolve(&route)?;
            handle_search_command(github_client, route, pages, &cli.format).await?;
        }
        Commands::Interactive { route } => {
            let route = resolve(&route)?;
            handle_interactive_command(github_client, route, &cli.format).await?;
        }
    }

    Ok(())
}

/// Loads up to `pages` pages for the route's term and prints the page once
async fn handle_search_command(
    github_client: GitHubClient,
    route: Route,
    pages: u64,
    format: &OutputFormat,
) -> Result<()> {
    let input = SearchInput::from_route(&route);
    let mut session = SearchSession::new(github_client, route.search_term().clone());
    session.settle().await;

    let mut loaded_pages = 1;
    while loaded_pages < pages && session.fetch_more() {
        session.settle().await;
        loaded_pages += 1;
    }

    print_page(&route, &input, &session, format)?;
    Ok(())
}

async fn handle_interactive_command(
    github_client: GitHubClient,
    route: Route,
    format: &OutputFormat,
) -> Result<()> {
    let mut route = route;
    let mut input = SearchInput::from_route(&route);
    let mut session = SearchSession::new(github_client, route.search_term().clone());
    print_page(&route, &input, &session, format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            outcome = session.next_event(), if session.in_flight() > 0 => {
                tracing::debug!("Search event: {:?}", outcome);
                print_page(&route, &input, &session, format)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match InteractiveCommand::parse(&line) {
                    InteractiveCommand::Quit => break,
                    InteractiveCommand::More => {
                        if !session.fetch_more() {
                            eprintln!("Nothing more to load");
                            continue;
                        }
                    }
                    InteractiveCommand::Search(text) => {
                        input.set_value(text);
                        route = input.submit()?;
                        session.set_search_term(route.search_term().clone());
                    }
                    InteractiveCommand::Unknown => {
                        eprintln!("Commands: more, /search <text>, quit");
                        continue;
                    }
                }
                print_page(&route, &input, &session, format)?;
            }
        }
    }

    Ok(())
}

/// One line of input in interactive mode
#[derive(Debug, PartialEq, Eq)]
enum InteractiveCommand {
    More,
    Search(String),
    Quit,
    Unknown,
}

impl InteractiveCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "quit" | "exit" => Self::Quit,
            "" | "more" => Self::More,
            "/search" => Self::Search(String::new()),
            _ => match line.strip_prefix("/search ") {
                Some(text) => Self::Search(text.trim().to_string()),
                None => Self::Unknown,
            },
        }
    }
}

fn print_page<E: QueryExecutor + 'static>(
    route: &Route,
    input: &SearchInput,
    session: &SearchSession<E>,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json_output = serde_json::json!({
                "route": route.path(),
                "search_term": session.search_term().as_str(),
                "phase": session.phase().to_string(),
                "state": session.state(),
                "results": ResultsView::from_state(session.state()),
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        }
        OutputFormat::Markdown => {
            println!("{}", search_page_markdown(input, session.state()));
        }
    }
    Ok(())
}
