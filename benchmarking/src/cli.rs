use crate::BenchmarkParams;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Throughput of vector construction, duplication, dot products and distance measures
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Args {
    /// Cardinality of the vector
    #[arg(long = "vectorSize", visible_alias = "vs", value_name = "vs", default_value_t = 1000)]
    pub vector_size: usize,

    /// Number of vectors to create
    #[arg(long = "numVectors", visible_alias = "nv", value_name = "nv", default_value_t = 100)]
    pub num_vectors: usize,

    /// Number of times to loop
    #[arg(short = 'l', long = "loop", value_name = "loop", default_value_t = 200)]
    pub loop_count: usize,

    /// Number of operations to do per timer. E.g. in distance measure, the distance is
    /// calculated numOps times and the total time is measured
    #[arg(long = "numOps", visible_alias = "no", value_name = "numOps", default_value_t = 10)]
    pub num_ops: usize,

    /// Seed for the random corpus, drawn at random when absent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn params(&self) -> BenchmarkParams {
        BenchmarkParams {
            cardinality: self.vector_size,
            num_vectors: self.num_vectors,
            loop_count: self.loop_count,
            ops_per_unit: self.num_ops,
        }
    }
}

/// What the front end should do with a command line.
#[derive(Debug)]
pub enum Command {
    Run { params: BenchmarkParams, seed: Option<u64> },
    /// Print `text` and stop without benchmarking.
    Usage { text: String, is_error: bool },
    /// A value that could not be parsed; the run must fail.
    Fatal(clap::Error),
}

// clap shorts are single characters, so the two letter forms become longs
const TWO_LETTER_SHORTS: [(&str, &str); 3] = [
    ("-vs", "--vectorSize"),
    ("-nv", "--numVectors"),
    ("-no", "--numOps"),
];

fn expand_two_letter_shorts<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            TWO_LETTER_SHORTS
                .iter()
                .find(|(short, _)| arg == **short)
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}

/// Parses a full command line, program name first.
pub fn parse_command<I, T>(args: I) -> Command
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match Args::try_parse_from(expand_two_letter_shorts(args)) {
        Ok(args) => Command::Run {
            params: args.params(),
            seed: args.seed,
        },
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => Command::Usage {
                text: err.to_string(),
                is_error: false,
            },
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => Command::Fatal(err),
            _ => Command::Usage {
                text: format!("{err}\n{}", Args::command().render_help()),
                is_error: true,
            },
        },
    }
}
