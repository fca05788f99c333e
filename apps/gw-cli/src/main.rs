use clap::{Parser, Subcommand};
use gw_app::{AppConfig, AppError, AppResult, PathStatus, Session};
use gw_client::ServiceClient;
use gw_core::EdgeId;
use gw_graph::{Graph, parse_edge_lines};
use gw_layout::{LayoutProgress, SeedPolicy, solve_layout_with_progress};
use gw_traverse::{Algorithm, StepOutcome};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(about = "graphwalk - step through graph traversals from an edge list", long_about = None)]
struct Cli {
    /// Optional YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print node positions
    Layout {
        /// Edge list file, one `from to [weight]` per line
        edges_path: PathBuf,
        /// Fix the layout seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Step through a BFS or DFS traversal
    Traverse {
        /// Edge list file
        edges_path: PathBuf,
        /// Root node name
        #[arg(long)]
        root: String,
        /// bfs or dfs
        #[arg(long, default_value = "dfs")]
        algorithm: Algorithm,
        /// Drive steps from a timer instead of immediately
        #[arg(long)]
        auto: bool,
        /// Auto-play period in milliseconds (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this many steps
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Ask the backend for the shortest path between two nodes
    ShortestPath {
        /// Edge list file
        edges_path: PathBuf,
        start: String,
        end: String,
    },
    /// Ask the backend to classify the graph
    Classify {
        /// Edge list file
        edges_path: PathBuf,
    },
    /// Check that the backend is reachable
    Health,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default().with_env_overrides(),
    };

    match cli.command {
        Commands::Layout { edges_path, seed } => cmd_layout(&config, &edges_path, seed),
        Commands::Traverse {
            edges_path,
            root,
            algorithm,
            auto,
            interval_ms,
            max_steps,
        } => {
            let mut config = config;
            if let Some(ms) = interval_ms {
                config.auto_play_interval_ms = ms;
            }
            cmd_traverse(&config, &edges_path, &root, algorithm, auto, max_steps).await
        }
        Commands::ShortestPath {
            edges_path,
            start,
            end,
        } => cmd_shortest_path(&config, &edges_path, &start, &end).await,
        Commands::Classify { edges_path } => cmd_classify(&config, &edges_path).await,
        Commands::Health => cmd_health(&config).await,
    }
}

fn cmd_layout(config: &AppConfig, edges_path: &Path, seed: Option<u64>) -> AppResult<()> {
    let text = std::fs::read_to_string(edges_path).map_err(|e| AppError::EdgeFileRead {
        path: edges_path.to_path_buf(),
        source: e,
    })?;
    let graph = Graph::from_records(&parse_edge_lines(&text)?)?;

    let mut layout_config = config.layout.clone();
    if let Some(seed) = seed {
        layout_config.seed = SeedPolicy::Fixed(seed);
    }
    layout_config.validate()?;

    let iterations = layout_config.iterations;
    let layout = solve_layout_with_progress(
        &graph,
        &layout_config,
        Some(&mut |p: LayoutProgress| {
            if p.iteration % 10 == 0 || p.iteration + 1 == iterations {
                print!(
                    "\riteration {:>4}/{}  max move {:>8.3}",
                    p.iteration + 1,
                    iterations,
                    p.max_displacement
                );
                let _ = io::stdout().flush();
            }
        }),
    );
    clear_progress_line();

    println!(
        "Layout of {} nodes in {}x{}:",
        layout.len(),
        layout_config.width,
        layout_config.height
    );
    for (id, p) in layout.iter() {
        println!("  {:<12} {:>8.2} {:>8.2}", graph.name(id), p.x, p.y);
    }
    Ok(())
}

async fn cmd_traverse(
    config: &AppConfig,
    edges_path: &Path,
    root: &str,
    algorithm: Algorithm,
    auto: bool,
    max_steps: Option<usize>,
) -> AppResult<()> {
    let mut session = Session::new(config)?;
    session.load_edge_file(edges_path)?;
    session.set_algorithm(algorithm);
    session.set_root(Some(root))?;

    println!("{} from {}", algorithm, root);
    let limit = max_steps.unwrap_or(usize::MAX);
    let mut steps = 0;

    if auto {
        println!("  auto-play every {} ms", session.auto_play_interval().as_millis());
        session.start_auto_play();
        while steps < limit {
            let Some(outcome) = session.tick().await else {
                break;
            };
            steps += 1;
            print_step(&session, steps, outcome);
        }
        session.stop_auto_play();
    } else {
        session.start_traversal();
        while steps < limit {
            let outcome = session.step();
            if outcome == StepOutcome::Ignored {
                break;
            }
            steps += 1;
            print_step(&session, steps, outcome);
        }
    }

    let state = session.traversal();
    if state.is_complete() {
        println!("✓ Complete after {} steps", steps);
    } else {
        println!("Stopped after {} steps", steps);
    }
    println!("  Visit order: {}", state.visit_path(session.graph()));
    Ok(())
}

fn print_step(session: &Session, n: usize, outcome: StepOutcome) {
    let g = session.graph();
    let edge = |e: Option<EdgeId>| {
        e.and_then(|id| g.edge(id))
            .map(|e| e.key.as_str())
            .unwrap_or("-")
    };
    let line = match outcome {
        StepOutcome::Ignored => return,
        StepOutcome::Visited { node, via } => format!("visit {} via {}", g.name(node), edge(via)),
        StepOutcome::Skipped { node } => format!("skip {}", g.name(node)),
        StepOutcome::Descended { from, to, edge: e } => {
            format!("descend {} -> {} along {}", g.name(from), g.name(to), edge(e))
        }
        StepOutcome::ChildrenExhausted { node } => format!("done with {}", g.name(node)),
        StepOutcome::Backtracked { from, to, edge: e } => format!(
            "back {} -> {} along {}",
            g.name(from),
            to.map(|t| g.name(t)).unwrap_or("(root)"),
            edge(e)
        ),
        StepOutcome::Completed => "complete".to_string(),
    };
    println!("  {:>3}. {}", n, line);
}

async fn cmd_shortest_path(
    config: &AppConfig,
    edges_path: &Path,
    start: &str,
    end: &str,
) -> AppResult<()> {
    let client = ServiceClient::new(config.client_config())?;
    let mut session = Session::new(config)?;
    session.load_edge_file(edges_path)?;
    session.set_path_endpoints(Some(start), Some(end));
    session.calculate_shortest_path(&client).await;

    match session.shortest_path().status() {
        PathStatus::Found(p) => {
            println!("✓ Shortest path ({} edges): {}", p.length, p.path.join(" → "));
            Ok(())
        }
        PathStatus::Failed(msg) => {
            println!("✗ {}", msg);
            Ok(())
        }
        PathStatus::NotCalculated => Ok(()),
    }
}

async fn cmd_classify(config: &AppConfig, edges_path: &Path) -> AppResult<()> {
    let client = ServiceClient::new(config.client_config())?;
    let mut session = Session::new(config)?;
    session.load_edge_file(edges_path)?;
    session.classify(&client).await;

    let state = session.classification();
    if let Some(c) = state.classification() {
        match c.confidence {
            Some(conf) => println!("✓ {} (confidence {:.1}%)", c.kind, conf * 100.0),
            None => println!("✓ {}", c.kind),
        }
        for (label, p) in &c.probabilities {
            println!("  {:<8} {:.3}", label, p);
        }
    } else if let Some(err) = state.error() {
        println!("✗ {}", err);
    }
    Ok(())
}

async fn cmd_health(config: &AppConfig) -> AppResult<()> {
    let client = ServiceClient::new(config.client_config())?;
    let url = client.config().endpoint("health");
    if client.health().await? {
        println!("✓ Backend healthy: {}", url);
    } else {
        println!("✗ Backend unhealthy: {}", url);
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(60));
    let _ = io::stdout().flush();
}
