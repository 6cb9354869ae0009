//! salone-interests - browse the Salone Culture catalogs and selections
//!
//! A thin consumer of `libsalone`: lists the catalogs and runs a short
//! selection walkthrough over the observation streams. Catalog fetch
//! failures degrade to an empty listing with a logged warning.

use clap::{Parser, Subcommand};
use futures::StreamExt;
use libsalone::logging::{self, LogFormat};
use libsalone::{Config, InterestsService, Result, TopicSelection};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "salone-interests")]
#[command(about = "Browse the Salone Culture catalogs and selections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the topic catalog
    Topics,
    /// List the people catalog
    People,
    /// List the publication catalog
    Publications,
    /// Toggle a few selections and print each observed snapshot
    Demo,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init(LogFormat::Text, "debug");
    } else {
        logging::init_default();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::default_config());
    let service = InterestsService::from_config(&config)?;

    match cli.command {
        Command::Topics => {
            let sections = service.get_topics().await.unwrap_or_else(|e| {
                warn!("topic catalog unavailable: {}", e);
                Vec::new()
            });

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&sections).unwrap());
            } else {
                for section in sections {
                    println!("{}", section.name);
                    for topic in section.topics {
                        println!("  {}", topic);
                    }
                }
            }
        }
        Command::People => print_catalog(
            service.get_people().await.unwrap_or_else(|e| {
                warn!("people catalog unavailable: {}", e);
                Vec::new()
            }),
            &cli.format,
        ),
        Command::Publications => print_catalog(
            service.get_publications().await.unwrap_or_else(|e| {
                warn!("publication catalog unavailable: {}", e);
                Vec::new()
            }),
            &cli.format,
        ),
        Command::Demo => demo(&service).await,
    }

    Ok(())
}

fn print_catalog(items: Vec<String>, format: &str) {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&items).unwrap());
    } else {
        for item in items {
            println!("{}", item);
        }
    }
}

/// Walk through a few toggles, printing the snapshot each observer sees.
async fn demo(service: &InterestsService) {
    let mut topics = service.observe_topics();
    let mut people = service.observe_people();

    let snapshot = topics.next().await.unwrap_or_default();
    println!("topics selected: {}", describe_topics(&snapshot));

    let bunce_island = TopicSelection::new("Heritage", "Bunce Island");

    println!("> toggle Heritage / Bunce Island");
    service.toggle_topic(bunce_island.clone());
    let snapshot = topics.next().await.unwrap_or_default();
    println!("topics selected: {}", describe_topics(&snapshot));

    println!("> toggle Heritage / Bunce Island again");
    service.toggle_topic(bunce_island);
    let snapshot = topics.next().await.unwrap_or_default();
    println!("topics selected: {}", describe_topics(&snapshot));

    let snapshot = people.next().await.unwrap_or_default();
    println!("people selected: {}", describe_items(&snapshot));

    println!("> toggle Community Storytellers");
    service.toggle_person("Community Storytellers".to_string());
    let snapshot = people.next().await.unwrap_or_default();
    println!("people selected: {}", describe_items(&snapshot));
}

fn describe_topics(snapshot: &std::collections::HashSet<TopicSelection>) -> String {
    if snapshot.is_empty() {
        return "(none)".to_string();
    }
    let mut entries: Vec<String> = snapshot
        .iter()
        .map(|s| format!("{} / {}", s.section, s.topic))
        .collect();
    entries.sort();
    entries.join(", ")
}

fn describe_items(snapshot: &std::collections::HashSet<String>) -> String {
    if snapshot.is_empty() {
        return "(none)".to_string();
    }
    let mut entries: Vec<String> = snapshot.iter().cloned().collect();
    entries.sort();
    entries.join(", ")
}
