mod input;
mod render;

use render::{Orientation, Report};
use spanwood::graphlib::{VertexIndex, alg};
use spanwood::{Arborescence, Edge, kruskal, total_weight};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Input(input::InputError),
    Solve(spanwood::Error),
    Verify(alg::Violation),
    Json(serde_json::Error),
    Infeasible { unreachable: usize },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Input(err) => write!(f, "{err}"),
            CliError::Solve(err) => write!(f, "{err}"),
            CliError::Verify(err) => write!(f, "result is not an arborescence: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Infeasible { unreachable } => write!(
                f,
                "{unreachable} vertices are unreachable from the root without synthetic edges"
            ),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<input::InputError> for CliError {
    fn from(value: input::InputError) -> Self {
        Self::Input(value)
    }
}

impl From<spanwood::Error> for CliError {
    fn from(value: spanwood::Error) -> Self {
        Self::Solve(value)
    }
}

impl From<alg::Violation> for CliError {
    fn from(value: alg::Violation) -> Self {
        Self::Verify(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Edmonds,
    Kruskal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Dot,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    root: Option<String>,
    inputs: Vec<String>,
    format: OutputFormat,
    pretty: bool,
    no_weights: bool,
    out: Option<String>,
    strict: bool,
    verify: bool,
    verbosity: u8,
}

fn usage() -> &'static str {
    "spanwood-cli\n\
\n\
USAGE:\n\
  spanwood-cli [edmonds] <root> <path>... [--format dot|json] [--pretty] [--no-weights] [--out <path>] [--strict] [--verify] [-v|-vv|-vvv]\n\
  spanwood-cli kruskal <path>... [--format dot|json] [--pretty] [--no-weights] [--out <path>] [-v|-vv|-vvv]\n\
\n\
NOTES:\n\
  - Each input line is `<source> <destination> <weight>`; lines with fewer tokens are skipped.\n\
  - A path of '-' reads stdin. Multiple paths are concatenated into one edge list.\n\
  - edmonds prints the minimum spanning arborescence rooted at <root>.\n\
  - kruskal prints the minimum spanning forest, ignoring edge direction.\n\
  - --strict exits with status 3 when some vertex is unreachable from the root.\n\
  - Logs go to stderr; RUST_LOG overrides the default level when no -v flag is given.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut positional: Vec<String> = Vec::new();

    let mut it = argv.iter().skip(1).peekable();
    if let Some(first) = it.peek() {
        match first.as_str() {
            "edmonds" => {
                args.command = Command::Edmonds;
                it.next();
            }
            "kruskal" => {
                args.command = Command::Kruskal;
                it.next();
            }
            _ => {}
        }
    }

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--no-weights" => args.no_weights = true,
            "--strict" => args.strict = true,
            "--verify" => args.verify = true,
            "-v" | "--verbose" => args.verbosity = args.verbosity.saturating_add(1),
            "-vv" => args.verbosity = args.verbosity.saturating_add(2),
            "-vvv" => args.verbosity = args.verbosity.saturating_add(3),
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => positional.extend(it.by_ref().cloned()),
            "-" => positional.push(a.clone()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => positional.push(value.to_string()),
        }
    }

    match args.command {
        Command::Edmonds => {
            if positional.len() < 2 {
                return Err(CliError::Usage(
                    "Need at least the root name and one file (see --help)",
                ));
            }
            args.root = Some(positional.remove(0));
        }
        Command::Kruskal => {
            if positional.is_empty() {
                return Err(CliError::Usage("Need at least one file (see --help)"));
            }
        }
    }
    args.inputs = positional;

    Ok(args)
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn render_output<'a, E: Edge>(
    args: &Args,
    report: impl FnOnce() -> Report<'a>,
    edges: &[E],
    orientation: Orientation,
) -> Result<String, CliError> {
    Ok(match args.format {
        OutputFormat::Dot => render::dot(edges, orientation, !args.no_weights),
        OutputFormat::Json => render::json(&report(), args.pretty)?,
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    let edges = input::read_edges(&args.inputs)?;
    let input_weight = total_weight(&edges);

    match args.command {
        Command::Edmonds => {
            let root = args.root.as_deref().unwrap_or_default();
            tracing::info!(
                "calling Edmonds' algorithm with root {root} and {} edges, total weight {input_weight}",
                edges.len()
            );
            let solved = Arborescence::solve(root, &edges)?;
            tracing::info!(
                "got {} edges out, total weight {}",
                solved.edges().len(),
                solved.total_weight()
            );

            let unreachable = solved.unreachable();
            if !unreachable.is_empty() {
                tracing::warn!(
                    "no path from {root} to {}; synthetic edges were used",
                    unreachable.join(", ")
                );
            }

            if args.verify {
                let index = VertexIndex::from_edges(&edges);
                let others = index.labels().iter().copied().filter(|v| *v != root);
                alg::verify_arborescence(root, others, solved.edges())?;
            }

            let text = render_output(
                args,
                || Report::new("edmonds", Some(root), solved.edges(), |e| e.is_synthetic()),
                solved.edges(),
                Orientation::Directed,
            )?;
            write_text(&text, args.out.as_deref())?;

            if args.strict && !solved.is_spanning() {
                return Err(CliError::Infeasible {
                    unreachable: unreachable.len(),
                });
            }
        }
        Command::Kruskal => {
            tracing::info!(
                "calling Kruskal's algorithm with {} edges, total weight {input_weight}",
                edges.len()
            );
            let forest = kruskal(&edges);
            tracing::info!(
                "got {} edges out, total weight {}",
                forest.len(),
                total_weight(&forest)
            );

            let text = render_output(
                args,
                || Report::new("kruskal", None, &forest, |_| false),
                &forest,
                Orientation::Undirected,
            )?;
            write_text(&text, args.out.as_deref())?;
        }
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbosity);

    match run(&args) {
        Ok(()) => {}
        Err(err @ CliError::Infeasible { .. }) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
