//! degrees-core: In-memory collaboration graph and degrees-of-separation search.
//!
//! People are connected when they are credited in the same work. The engine
//! finds the shortest (work, person) hop sequence between two people with a
//! breadth-first search over a pluggable frontier.
//!
//! No I/O: this crate compiles standalone. Loading, name prompts and output
//! live in the `degrees-cli` crate; synthetic benchmarks in `degrees-bench`.

mod error;
mod frontier;
mod graph;
mod neighbors;
mod traversal;

pub use error::{FrontierError, GraphError, SearchError};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use graph::{GraphStore, Person, Work};
pub use neighbors::Collaborations;
pub use traversal::{
    find_shortest_path, search, search_with, Discipline, Hop, NodeIndex, Path, SearchOptions,
    SearchReport,
};
