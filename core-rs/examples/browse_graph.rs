/// Example: Walk a small graph one focus at a time
///
/// Loads an inline Turtle document into the in-memory store, lands on the
/// class view, then follows cells the way a user clicking through the table
/// would.
///
/// Usage:
///   cargo run --example browse_graph

use std::sync::Arc;

use triple_lens::{Column, MemoryStore, Navigator, NavigatorConfig, Prefix, View};

const DATA: &str = r#"
    @prefix ex: <http://ex.org/> .
    @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

    ex:Bob a ex:Person ;
        rdfs:label "Bob" ;
        ex:worksFor ex:Acme .

    ex:Acme a ex:Company ;
        rdfs:label "Acme Corp"@en .
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NavigatorConfig::default();
    let mut prefixes = config.prefix_registry().prefixes().to_vec();
    prefixes.push(Prefix::new("ex", "http://ex.org/"));
    config.prefixes = Some(prefixes);

    let store = MemoryStore::with_prefixes(config.prefix_registry())?;
    store.load_turtle(DATA)?;
    let store = Arc::new(store);
    let mut nav = Navigator::new(store.clone(), store, config.navigation_state());

    nav.clear_focus().await;
    print(nav.state().focus().label(), nav.state().view());

    // Class view: click the first class
    nav.select(0, Column::Class).await;
    print(nav.state().focus().label(), nav.state().view());

    // Entity focus: click the subject of the first row
    nav.select(0, Column::Subject).await;
    print(nav.state().focus().label(), nav.state().view());

    Ok(())
}

fn print(label: &str, view: &View) {
    println!("═══════════════════════════════════════════");
    println!("FOCUS: {}", label);
    println!("═══════════════════════════════════════════");
    match view {
        View::Empty => println!("(empty)"),
        View::Classes(classes) => {
            for class in classes {
                println!("  {}", class.display);
            }
        }
        View::Triples(rows) => {
            for row in rows {
                println!(
                    "  {:<16} {:<16} {}",
                    row.subject.display, row.predicate.display, row.object.display
                );
            }
        }
    }
    println!();
}
