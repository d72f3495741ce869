use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use routeplanner_cli::config::Config;
use routeplanner_cli::prompt::resolve_point;
use routeplanner_cli::render;
use routeplanner_core::{DiscoveryPolicy, MapData, RouteGraph, RouteModel, RoutePlanner, SearchOptions};

#[derive(Parser, Debug)]
#[command(name = "routeplanner", version, about = "Find the shortest road route between two points of a map")]
struct Args {
    /// Map file (JSON nodes and ways); falls back to ROUTEPLANNER_MAP
    #[arg(long = "map", value_name = "PATH")]
    map: Option<PathBuf>,

    /// Start point as percentages of the map extent; prompted for when omitted
    #[arg(long = "start", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    start: Option<Vec<f64>>,

    /// End point as percentages of the map extent; prompted for when omitted
    #[arg(long = "end", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    end: Option<Vec<f64>>,

    /// Re-open nodes when a cheaper path is found after discovery
    #[arg(long = "relax")]
    relax: bool,

    /// Print the route as JSON
    #[arg(long = "json")]
    json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cfg = Config::from_env()?;
    init_tracing(cfg.log_json);

    let args = Args::parse();
    info!(core_version = routeplanner_core::version(), ?args, "starting routeplanner");

    let map_path = args
        .map
        .clone()
        .or_else(|| cfg.map_path.clone())
        .context("no map file given; pass --map or set ROUTEPLANNER_MAP")?;
    let map = MapData::from_path(&map_path).with_context(|| format!("failed to read map {:?}", map_path))?;
    let model = RouteModel::from_map(&map).with_context(|| format!("failed to build graph from {:?}", map_path))?;
    info!(nodes = model.node_count(), roads = model.roads().len(), metric_scale = model.metric_scale(), "map loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    // Prompts go to stderr so stdout carries only the route.
    let mut out = io::stderr();
    let (start_x, start_y) = resolve_point(args.start.as_deref(), "start", &mut input, &mut out)?;
    let (end_x, end_y) = resolve_point(args.end.as_deref(), "end", &mut input, &mut out)?;

    let policy = if args.relax || cfg.relax { DiscoveryPolicy::Relax } else { DiscoveryPolicy::FirstDiscovery };
    let options = SearchOptions { policy, ..SearchOptions::default() };
    let mut planner = RoutePlanner::with_options(&model, start_x, start_y, end_x, end_y, options)?;
    let route = match planner.search() {
        Ok(route) => route,
        Err(e) => {
            error!(error = %e, start = %planner.start_node(), end = %planner.end_node(), "route search failed");
            return Err(e.into());
        }
    };
    info!(distance = route.distance, path_len = route.nodes.len(), expanded = route.expanded, "route found");

    if args.json {
        println!("{}", render::json(&route)?);
    } else {
        println!("{}", render::summary(&route));
    }
    Ok(())
}
