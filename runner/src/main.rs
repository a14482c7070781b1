extern crate mst_algorithm;

use mst_algorithm::graph::read_graph;
use mst_algorithm::report::write_result;
use mst_algorithm::{Coverage, Graph, KruskalBuilder, MstBuilder, PrimBuilder};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

const USAGE: &str = "usage: runner <input> <output> [kruskal|prim|prim-forest|all]";

/// Which builders to run, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Kruskal,
    Prim,
    PrimForest,
    All,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            "prim-forest" => Ok(Algorithm::PrimForest),
            "all" => Ok(Algorithm::All),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

impl Algorithm {
    fn builders(self) -> Vec<Box<dyn MstBuilder>> {
        match self {
            Algorithm::Kruskal => vec![Box::new(KruskalBuilder)],
            Algorithm::Prim => vec![Box::new(PrimBuilder::default())],
            Algorithm::PrimForest => vec![Box::new(PrimBuilder::forest())],
            Algorithm::All => vec![Box::new(KruskalBuilder), Box::new(PrimBuilder::default())],
        }
    }
}

struct Args {
    input: String,
    output: String,
    algorithm: Algorithm,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or(USAGE)?;
    let output = args.next().ok_or(USAGE)?;
    let algorithm = match args.next() {
        Some(name) => name.parse()?,
        None => Algorithm::All,
    };
    if args.next().is_some() {
        return Err(USAGE.to_string());
    }
    Ok(Args {
        input,
        output,
        algorithm,
    })
}

/// Runs every selected builder on `graph` and writes their blocks to `out`, in order.
fn write_report<W: Write>(graph: &Graph, algorithm: Algorithm, out: &mut W) -> io::Result<()> {
    for builder in algorithm.builders() {
        let now = Instant::now();
        let result = builder.build(graph);
        let elapsed = now.elapsed();

        match result.coverage {
            Coverage::Spanning => {}
            Coverage::Forest { components } => log::warn!(
                "{}: graph is disconnected, built a forest of {components} trees",
                builder.name()
            ),
            Coverage::Partial { reached, total } => log::warn!(
                "{}: only {reached} of {total} vertices are reachable from the root",
                builder.name()
            ),
        }
        log::info!(
            "{}: cost {}, {} edges in {:.6}s",
            builder.name(),
            result.total_cost,
            result.edge_count(),
            elapsed.as_secs_f64()
        );

        write_result(out, &result)?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let graph: Graph = read_graph(BufReader::new(File::open(&args.input)?))?;

    let out_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&args.output)?;
    let mut out = BufWriter::new(out_file);

    write_report(&graph, args.algorithm, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            log::error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
