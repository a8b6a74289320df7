use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tc_app::{AppError, AppResult, Session, SolveState, load_matrix_file};
use tc_client::{ClientConfig, HttpTopologyClient};
use tc_core::parse_dimension;
use tc_graph::GraphView;
use tc_matrix::IncidenceMatrix;
use tc_results::{LabeledTable, PartitionSummary, Precision};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "Topology Calculator CLI - spanning tree, tie-set and cut-set matrices from an incidence matrix", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the incidence matrix after applying input, resize and edits
    Show {
        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Submit the matrix to the topology service and print the results
    Solve {
        #[command(flatten)]
        matrix: MatrixArgs,
        #[command(flatten)]
        service: ServiceArgs,
        /// Decimals shown for result values
        #[arg(long, conflicts_with = "integer")]
        decimals: Option<usize>,
        /// Show result values as integers
        #[arg(long)]
        integer: bool,
        /// Emit a JSON report instead of text tables
        #[arg(long)]
        json: bool,
    },
    /// Emit the reconstructed network graph
    Graph {
        #[command(flatten)]
        matrix: MatrixArgs,
        #[command(flatten)]
        service: ServiceArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = GraphFormat::Dot)]
        format: GraphFormat,
        /// Skip the service; edges stay unclassified
        #[arg(long)]
        preview: bool,
    },
}

#[derive(Args)]
struct MatrixArgs {
    /// YAML or JSON document with a `matrixA` entry (defaults to the built-in 3x6 network)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Number of independent nodes (rows); non-numeric or negative input counts as 0
    #[arg(long, allow_hyphen_values = true)]
    rows: Option<String>,
    /// Number of branches (columns); non-numeric or negative input counts as 0
    #[arg(long, allow_hyphen_values = true)]
    cols: Option<String>,
    /// Cell edit with 1-based coordinates, e.g. `2,4=-1` (repeatable)
    #[arg(long = "set", value_name = "ROW,COL=VALUE", allow_hyphen_values = true)]
    edits: Vec<String>,
}

#[derive(Args)]
struct ServiceArgs {
    /// Base URL of the topology service (overrides TOPOLOGY_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphFormat {
    Dot,
    Json,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    partition: PartitionSummary,
    tables: &'a [LabeledTable],
    graph: GraphView<'a>,
}

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Show { matrix } => cmd_show(&matrix),
        Commands::Solve {
            matrix,
            service,
            decimals,
            integer,
            json,
        } => {
            let precision = match (integer, decimals) {
                (true, _) => Precision::Integer,
                (false, Some(d)) => Precision::Fixed(d),
                (false, None) => Precision::default(),
            };
            cmd_solve(&matrix, &service, precision, json)
        }
        Commands::Graph {
            matrix,
            service,
            format,
            preview,
        } => cmd_graph(&matrix, &service, format, preview),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_show(args: &MatrixArgs) -> AppResult<()> {
    let session = build_session(args)?;
    let matrix = session.matrix();
    println!(
        "{} node(s) + reference, {} branch(es)",
        matrix.rows(),
        matrix.cols()
    );
    print!("{}", matrix_table(matrix).render(matrix_precision(matrix)));
    Ok(())
}

fn cmd_solve(
    args: &MatrixArgs,
    service: &ServiceArgs,
    precision: Precision,
    json: bool,
) -> AppResult<()> {
    let mut session = build_session(args)?;
    solve(&mut session, service)?;

    let Some(result) = session.result() else {
        return Err(AppError::InvalidInput("solve produced no result".to_string()));
    };
    let partition = PartitionSummary::of(result);
    let tables: Vec<LabeledTable> = session.tables().map(Vec::from).unwrap_or_default();
    let graph = session.graph()?;

    if json {
        let report = SolveReport {
            partition,
            tables: &tables,
            graph: graph.view(),
        };
        let text =
            serde_json::to_string_pretty(&report).map_err(|e| AppError::Encode(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    println!("Tree branches: {}", partition.tree.join(", "));
    println!("Link branches: {}", partition.links.join(", "));
    for table in &tables {
        println!();
        print!("{}", table.render(precision));
    }
    println!();
    println!(
        "Graph: {} nodes ({} = reference), {} edges ({} tree, {} link)",
        graph.nodes().len(),
        graph.reference_node().label,
        graph.edges().len(),
        graph.tree_edges().count(),
        graph.link_edges().count()
    );
    Ok(())
}

fn cmd_graph(
    args: &MatrixArgs,
    service: &ServiceArgs,
    format: GraphFormat,
    preview: bool,
) -> AppResult<()> {
    let mut session = build_session(args)?;
    if preview {
        debug!("preview requested, skipping the topology service");
    } else {
        solve(&mut session, service)?;
    }
    let graph = session.graph()?;

    match format {
        GraphFormat::Dot => print!("{}", graph.to_dot()),
        GraphFormat::Json => {
            let text = serde_json::to_string_pretty(&graph.view())
                .map_err(|e| AppError::Encode(e.to_string()))?;
            println!("{text}");
        }
    }
    Ok(())
}

/// Run one solve; a failed computation becomes the command's error.
fn solve(session: &mut Session, service: &ServiceArgs) -> AppResult<()> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &service.api_url {
        config = config.with_base_url(url.as_str());
    }
    let client = HttpTopologyClient::new(&config)?;
    info!(endpoint = client.endpoint(), "solving topology");

    match session.solve_with(&client)? {
        SolveState::Failed(message) => Err(AppError::SolveFailed(message.clone())),
        _ => {
            info!("topology solved");
            Ok(())
        }
    }
}

fn build_session(args: &MatrixArgs) -> AppResult<Session> {
    let mut session = match &args.input {
        Some(path) => Session::with_matrix(load_matrix_file(path)?),
        None => Session::new(),
    };

    if args.rows.is_some() || args.cols.is_some() {
        let rows = args
            .rows
            .as_deref()
            .map_or(session.matrix().rows(), parse_dimension);
        let cols = args
            .cols
            .as_deref()
            .map_or(session.matrix().cols(), parse_dimension);
        if rows.checked_mul(cols).is_none() {
            return Err(AppError::InvalidInput(format!(
                "matrix shape {rows}x{cols} is too large"
            )));
        }
        session.set_dimensions(rows, cols);
    }

    for edit in &args.edits {
        let (i, j, raw) = parse_edit(edit)?;
        session.try_set_cell(i, j, raw)?;
    }
    debug!(
        rows = session.matrix().rows(),
        cols = session.matrix().cols(),
        edits = args.edits.len(),
        "matrix prepared"
    );
    Ok(session)
}

/// Split `ROW,COL=VALUE` into 0-based coordinates and the raw value.
fn parse_edit(spec: &str) -> AppResult<(usize, usize, &str)> {
    let invalid = || AppError::InvalidInput(format!("expected ROW,COL=VALUE, got '{spec}'"));
    let (coords, value) = spec.split_once('=').ok_or_else(invalid)?;
    let (row, col) = coords.split_once(',').ok_or_else(invalid)?;
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;
    if row == 0 || col == 0 {
        return Err(AppError::InvalidInput(format!(
            "cell coordinates are 1-based, got '{spec}'"
        )));
    }
    Ok((row - 1, col - 1, value))
}

fn matrix_table(matrix: &IncidenceMatrix) -> LabeledTable {
    LabeledTable::new(
        "Incidence Matrix A",
        matrix.branch_labels(),
        matrix.node_labels(),
        matrix.to_rows(),
    )
}

fn matrix_precision(matrix: &IncidenceMatrix) -> Precision {
    let all_integral = matrix
        .to_rows()
        .iter()
        .flatten()
        .all(|v| v.fract() == 0.0);
    if all_integral {
        Precision::Integer
    } else {
        Precision::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_edit_accepts_negative_values() {
        assert_eq!(parse_edit("2,4=-1").unwrap(), (1, 3, "-1"));
        assert_eq!(parse_edit(" 1 , 1 =abc").unwrap(), (0, 0, "abc"));
    }

    #[test]
    fn parse_edit_rejects_malformed() {
        assert!(parse_edit("2,4").is_err());
        assert!(parse_edit("2=1").is_err());
        assert!(parse_edit("0,1=1").is_err());
        assert!(parse_edit("x,1=1").is_err());
    }

    #[test]
    fn matrix_precision_detects_fractions() {
        assert_eq!(matrix_precision(&IncidenceMatrix::seed()), Precision::Integer);
        let m = IncidenceMatrix::from_rows(vec![vec![0.5]]).unwrap();
        assert_eq!(matrix_precision(&m), Precision::Fixed(4));
    }

    #[test]
    fn cli_parses_solve_flags() {
        let cli = Cli::try_parse_from([
            "tc-cli", "solve", "--rows", "2", "--cols=-3", "--set", "1,1=-1", "--integer",
        ])
        .unwrap();
        match cli.command {
            Commands::Solve {
                matrix, integer, ..
            } => {
                assert_eq!(matrix.rows.as_deref(), Some("2"));
                assert_eq!(matrix.cols.as_deref(), Some("-3"));
                assert_eq!(matrix.edits, ["1,1=-1"]);
                assert!(integer);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn build_session_applies_resize_then_edits() {
        let args = MatrixArgs {
            input: None,
            rows: Some("2".into()),
            cols: Some("-4".into()),
            edits: vec![],
        };
        let session = build_session(&args).unwrap();
        assert_eq!(session.matrix().rows(), 2);
        assert_eq!(session.matrix().cols(), 0);

        let args = MatrixArgs {
            input: None,
            rows: None,
            cols: Some("4".into()),
            edits: vec!["3,4=1".into()],
        };
        let session = build_session(&args).unwrap();
        assert_eq!(session.matrix().rows(), 3);
        assert_eq!(session.matrix().get(2, 3), Some(1.0));
    }

    #[test]
    fn build_session_rejects_oversized_shape() {
        let args = MatrixArgs {
            input: None,
            rows: Some(usize::MAX.to_string()),
            cols: Some("2".into()),
            edits: vec![],
        };
        let err = build_session(&args).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "{err}");
    }
}
