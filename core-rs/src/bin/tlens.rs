//! tlens - Triple Lens CLI
//!
//! Browse an RDF graph one entity at a time, against a local RDF file or a
//! REST graph backend.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, Level};

use triple_lens::{
    Completion, HttpBackend, LabelForm, MemoryStore, NavigationState, Navigator, NavigatorConfig,
    PrefixSource, QueryService, Triple, TripleService, View,
};

#[derive(Parser)]
#[command(name = "tlens")]
#[command(version = triple_lens::VERSION)]
#[command(about = "Entity-centric navigation over RDF triple stores", long_about = None)]
struct Cli {
    /// Load this RDF file into an in-memory store
    #[arg(long, global = true, conflicts_with = "endpoint")]
    data: Option<PathBuf>,
    /// Base URL of a REST graph backend
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Navigator configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Graph to operate on (overrides graphId from the config)
    #[arg(long, global = true)]
    graph: Option<String>,
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the read query a focus would issue
    Query {
        #[arg(long)]
        focus: Option<String>,
    },
    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that run against a graph source
#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Show the view for a focus (class discovery when omitted)
    Show {
        #[arg(long)]
        focus: Option<String>,
    },
    /// Create a triple
    Add {
        subject: String,
        predicate: String,
        object: String,
    },
    /// Delete a triple by its exact values
    Delete {
        subject: String,
        predicate: String,
        object: String,
    },
    /// Attach an rdfs:label to an entity
    Label {
        #[arg(long)]
        focus: String,
        #[arg(long)]
        value: String,
        /// Language tag, e.g. en or en-GB
        #[arg(long, conflicts_with = "datatype")]
        lang: Option<String>,
        /// Datatype IRI or CURIE, e.g. xsd:string
        #[arg(long)]
        datatype: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => NavigatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => NavigatorConfig::default(),
    };
    if let Some(graph) = &cli.graph {
        config.graph_id = graph.clone();
    }
    if cli.endpoint.is_some() {
        config.endpoint = cli.endpoint.clone();
    }

    // Query printing needs no backend
    let command = match cli.command {
        Commands::Query { focus } => {
            print_query(&config, focus.as_deref());
            return Ok(());
        }
        Commands::Session(command) => command,
    };

    if let Some(path) = &cli.data {
        let store = MemoryStore::with_prefixes(config.prefix_registry())?;
        store
            .load_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        debug!("Loaded {} triples from {}", store.len()?, path.display());
        run(Arc::new(store), &config, command).await
    } else if let Some(endpoint) = &config.endpoint {
        let backend = HttpBackend::new(endpoint.as_str()).with_graph(config.graph_id.as_str());
        run(backend, &config, command).await
    } else {
        bail!("No graph source: pass --data FILE or --endpoint URL (or set endpoint in the config)")
    }
}

async fn run<S>(service: S, config: &NavigatorConfig, command: SessionCommand) -> anyhow::Result<()>
where
    S: QueryService + TripleService + PrefixSource + Clone,
{
    let mut nav = Navigator::new(service.clone(), service.clone(), config.navigation_state());
    if config.prefixes.is_none() {
        nav.sync_prefixes(&service, Some(config.priority_predicates.as_str())).await?;
    }

    let completion = match command {
        SessionCommand::Show { focus } => match focus {
            Some(term) => nav.focus(&term).await,
            None => nav.clear_focus().await,
        },
        SessionCommand::Add {
            subject,
            predicate,
            object,
        } => {
            nav.focus(&subject).await;
            let completion = nav.add_triple(&subject, &predicate, &object).await?;
            println!("{} Created triple", "✓".green());
            completion
        }
        SessionCommand::Delete {
            subject,
            predicate,
            object,
        } => {
            nav.focus(&subject).await;
            let triple = Triple::new(subject, predicate, object);
            let completion = nav.delete_triple(&triple).await?;
            println!("{} Deleted triple", "✓".green());
            completion
        }
        SessionCommand::Label {
            focus,
            value,
            lang,
            datatype,
        } => {
            nav.focus(&focus).await;
            let mut form = LabelForm::new(value);
            if let Some(lang) = lang {
                form = form.lang(lang);
            }
            if let Some(datatype) = datatype {
                form = form.datatype(datatype);
            }
            let completion = nav.add_label(&form).await?;
            println!("{} Added label", "✓".green());
            completion
        }
    };

    let state = nav.into_state();
    if completion == Completion::Failed {
        bail!(state.error().unwrap_or("Query failed").to_string());
    }
    print_view(&state);
    Ok(())
}

fn print_query(config: &NavigatorConfig, focus: Option<&str>) {
    let mut state = config.navigation_state();
    let ticket = state.begin_focus(focus);
    debug!("{:?} query for '{}'", ticket.kind(), state.focus().label());
    println!("{}", ticket.query());
}

/// Print the current view as a table
fn print_view(state: &NavigationState) {
    println!("\n{}", state.focus().label().bold());

    match state.view() {
        View::Empty => println!("{}", "(no results)".dimmed()),
        View::Classes(classes) => {
            println!("\n{}", "CLASS".bold());
            println!("{}", "-".repeat(60));
            for class in classes {
                println!("{}", class.display);
            }
        }
        View::Triples(rows) => {
            let header = format!("{:<40} {:<32} {}", "SUBJECT", "PREDICATE", "OBJECT");
            println!("\n{}", header.bold());
            println!("{}", "-".repeat(110));
            for row in rows {
                let object = if row.object.is_literal() {
                    row.object.display.as_str().green()
                } else {
                    row.object.display.as_str().cyan()
                };
                println!("{:<40} {:<32} {}", row.subject.display, row.predicate.display, object);
            }
        }
    }

    println!("\n{} rows", state.view().len());
}
