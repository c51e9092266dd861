//! FriendGraph CLI
//!
//! Loads a social graph (a seed file or the built-in sample cast) and prints
//! ranked friend suggestions.
//!
//! # Commands
//!
//! - `suggest <USER_ID>`: rank friends-of-friends for a user
//! - `visit <VISITOR> <VISITED>`: record a profile visit, then re-rank for the visitor
//! - `users`: list users and their friends

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use friendgraph::config::{LogFormat, LoggingConfig};
use friendgraph::{seed, Config, RankingMode, RecommendationEngine, SocialGraph, Suggestion};

#[derive(Parser)]
#[command(name = "friendgraph", version, about = "Friend-of-friend suggestions", long_about = None)]
struct Cli {
    /// TOML or JSON graph file (defaults to GRAPH_SEED_FILE, then the sample cast)
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Print suggestions as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Ranking mode: weighted or jaccard
    #[arg(long, global = true)]
    mode: Option<RankingMode>,

    /// Maximum suggestions to print (at least 1)
    #[arg(long, global = true)]
    limit: Option<NonZeroUsize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank friend suggestions for a user
    Suggest { user_id: String },
    /// Record a profile visit, then show the visitor's suggestions
    Visit { visitor: String, visited: String },
    /// List users and their friends
    Users,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config.logging);
    config.log_summary();

    let graph_file = cli.graph.clone().or_else(|| config.seed.graph_file.clone());
    let mut graph = match graph_file {
        Some(path) => seed::load_graph(&path)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?,
        None => seed::sample_graph(),
    };

    let mut engine = RecommendationEngine::from_config(&config.recommendation);
    if let Some(mode) = cli.mode {
        engine = engine.with_mode(mode);
    }
    if let Some(limit) = cli.limit {
        engine = engine.with_limit(Some(limit.get()));
    }

    match cli.command {
        Commands::Suggest { user_id } => {
            let suggestions = engine.try_suggest_friends(&graph, &user_id)?;
            print_suggestions(&graph, &user_id, &suggestions, cli.json)?;
        }
        Commands::Visit { visitor, visited } => {
            graph.try_record_visit(&visitor, &visited)?;
            info!(
                visitor = visitor.as_str(),
                visited = visited.as_str(),
                count = graph.visit_count(&visitor, &visited),
                "Visit recorded"
            );
            let suggestions = engine.try_suggest_friends(&graph, &visitor)?;
            print_suggestions(&graph, &visitor, &suggestions, cli.json)?;
        }
        Commands::Users => print_users(&graph),
    }

    Ok(())
}

/// Initialize structured logging with tracing
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.default_filter));

    // stdout is reserved for command output
    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(logging.ansi)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn print_suggestions(
    graph: &SocialGraph,
    user_id: &str,
    suggestions: &[Suggestion],
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions for {}", user_id);
        return Ok(());
    }

    println!("Suggestions for {}:", user_id);
    for s in suggestions {
        let name = graph
            .user(&s.friend_id)
            .map(|u| u.name())
            .unwrap_or(s.friend_id.as_str());
        println!(
            "  {} ({}): score={:.2} jaccard={:.2} mutual={} visits={}",
            name,
            s.friend_id,
            s.combined_score,
            s.jaccard_similarity,
            s.mutual_friends_count,
            s.visits_count
        );
    }
    Ok(())
}

fn print_users(graph: &SocialGraph) {
    let mut users: Vec<_> = graph.users().collect();
    users.sort_by(|a, b| a.id().cmp(b.id()));
    for user in users {
        println!(
            "{}\t{}\tfriends={}",
            user.id(),
            user.name(),
            graph.friends_of(user.id()).join(",")
        );
    }
}
