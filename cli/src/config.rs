use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use degrees_core::{Discipline, SearchOptions};

/// Find the degrees of separation between two people in a collaboration dataset.
#[derive(Parser, Debug)]
#[command(name = "degrees", version)]
pub struct Args {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(env = "DEGREES_DATA_DIR", default_value = "large")]
    pub directory: PathBuf,

    /// Name of the first person. Prompted for on stdin when omitted.
    #[arg(long)]
    pub source: Option<String>,

    /// Name of the second person. Prompted for on stdin when omitted.
    #[arg(long)]
    pub target: Option<String>,

    /// Give up beyond this many degrees of separation
    #[arg(
        long,
        env = "DEGREES_MAX_DEGREES",
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    pub max_degrees: Option<u32>,

    /// Frontier discipline. Only `queue` guarantees a shortest path.
    #[arg(long, value_enum, default_value_t = FrontierKind::Queue)]
    pub frontier: FrontierKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// FIFO, breadth-first
    Queue,
    /// LIFO, depth-first
    Stack,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            discipline: match self.frontier {
                FrontierKind::Queue => Discipline::Breadth,
                FrontierKind::Stack => Discipline::Depth,
            },
            max_degrees: self.max_degrees,
        }
    }
}
