use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tourex::{collate, merge_same_street, Route};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct DataLoadError(PathBuf, #[source] tourex::data::DataError);

#[derive(Parser)]
struct Cli {
    /// Path to the vertex list JSON file
    vertices: PathBuf,

    /// Path to the edge list JSON file
    edges: PathBuf,

    /// Vertex id to start walking from
    start: String,

    /// Ids of the stops to visit
    targets: Vec<String>,

    /// Merge consecutive same-street steps into single directions
    #[arg(long)]
    brief: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let graph = tourex::data::graph_from_files(&cli.vertices, &cli.edges)
        .map_err(|e| DataLoadError(cli.vertices.clone(), e))?;

    let targets: Vec<&str> = cli.targets.iter().map(String::as_str).collect();
    let mut route = Route::plan(&graph, &targets, &cli.start)?;

    println!("Planned order:");
    for waypoint in route.waypoints() {
        match &waypoint.group_name {
            Some(group) => println!(
                "  {} ({}) - {} ft",
                waypoint.name, group, waypoint.distance as i64
            ),
            None => println!("  {} - {} ft", waypoint.name, waypoint.distance as i64),
        }
    }

    // Narrate the full walk, assuming the walker reaches each stop.
    let mut position = cli.start.clone();
    while !route.reached_end() {
        let next = &route.waypoints()[route.next_index()?];
        let (next_id, next_name) = (next.id.clone(), next.name.clone());

        let mut steps = route.advance(&position)?;
        if cli.brief {
            steps = merge_same_street(steps);
        }

        println!();
        println!("Next stop: {}", next_name);
        println!("{}", collate(&steps));
        position = next_id;
    }

    Ok(())
}
