use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::SearchError;
use crate::frontier::{Frontier, QueueFrontier, StackFrontier};
use crate::neighbors::Collaborations;

/// Index of a node in the search tree arena.
pub type NodeIndex = usize;

/// One state in the search tree.
///
/// `parent` always points at an earlier arena slot, so the parent chain is
/// acyclic by construction. The root has neither parent nor action.
#[derive(Debug, Clone, Copy)]
struct SearchNode<'a> {
    state: &'a str,
    parent: Option<NodeIndex>,
    /// Work used to reach `state` from the parent.
    action: Option<&'a str>,
    depth: u32,
}

/// Arena of search nodes for one search invocation.
#[derive(Debug, Default)]
struct SearchTree<'a> {
    nodes: Vec<SearchNode<'a>>,
}

impl<'a> SearchTree<'a> {
    fn push(&mut self, node: SearchNode<'a>) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// A single step in a path: the shared work, and the person it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hop {
    pub work_id: String,
    pub person_id: String,
}

/// Forward-ordered hops from source to target. An empty path means source == target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    pub hops: Vec<Hop>,
}

impl Path {
    /// Degrees of separation.
    pub fn degrees(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// (work_id, person_id) pairs, borrowed.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.hops
            .iter()
            .map(|h| (h.work_id.as_str(), h.person_id.as_str()))
            .collect()
    }
}

/// Frontier discipline used by [`search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Discipline {
    /// FIFO. Returns a shortest path.
    #[default]
    Breadth,
    /// LIFO. Returns some path, usually found with less memory, not necessarily the shortest.
    Depth,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub discipline: Discipline,
    /// Maximum degrees of separation to consider. `None` searches the whole component.
    pub max_degrees: Option<u32>,
}

/// Result of a search: the path (if any) plus traversal statistics.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// `None` when source and target are not connected.
    pub path: Option<Path>,
    /// Nodes removed from the frontier and expanded.
    pub nodes_explored: usize,
    /// Largest number of pending nodes held by the frontier at once.
    pub frontier_peak: usize,
}

/// Shortest path from `source` to `target`.
///
/// `Ok(None)` means no path exists; `Ok(Some(path))` with zero hops means
/// `source == target`.
pub fn find_shortest_path<G>(
    graph: &G,
    source: &str,
    target: &str,
) -> Result<Option<Path>, SearchError>
where
    G: Collaborations + ?Sized,
{
    search(graph, source, target, &SearchOptions::default()).map(|report| report.path)
}

/// Search with an explicit discipline and depth limit.
pub fn search<G>(
    graph: &G,
    source: &str,
    target: &str,
    options: &SearchOptions,
) -> Result<SearchReport, SearchError>
where
    G: Collaborations + ?Sized,
{
    match options.discipline {
        Discipline::Breadth => {
            search_with(graph, source, target, options.max_degrees, QueueFrontier::new())
        }
        Discipline::Depth => {
            search_with(graph, source, target, options.max_degrees, StackFrontier::new())
        }
    }
}

/// Search driver, generic over the frontier.
///
/// A popped node marks both its person and the work that reached it as
/// explored. Any later (work, person) pair using an explored person or an
/// explored work is skipped. Skipping explored works never loses a shorter
/// path: every member of that work was already discovered from the node that
/// first expanded through it.
///
/// The goal test runs when a child is generated, not when it is popped.
pub fn search_with<'a, G, F>(
    graph: &'a G,
    source: &'a str,
    target: &str,
    max_degrees: Option<u32>,
    mut frontier: F,
) -> Result<SearchReport, SearchError>
where
    G: Collaborations + ?Sized,
    F: Frontier<NodeIndex>,
{
    if !graph.contains_person(source) || !graph.contains_person(target) {
        debug!(source, target, "source or target not in graph");
        return Ok(SearchReport::default());
    }

    if source == target {
        return Ok(SearchReport {
            path: Some(Path::default()),
            ..SearchReport::default()
        });
    }

    if max_degrees == Some(0) {
        return Ok(SearchReport::default());
    }

    debug!(source, target, ?max_degrees, "starting search");

    let mut tree = SearchTree::default();
    let mut explored_people: HashSet<&'a str> = HashSet::new();
    let mut explored_works: HashSet<&'a str> = HashSet::new();
    let mut nodes_explored = 0usize;

    frontier.add(tree.push(SearchNode {
        state: source,
        parent: None,
        action: None,
        depth: 0,
    }));
    let mut frontier_peak = frontier.len();

    loop {
        if frontier.is_empty() {
            debug!(source, target, nodes_explored, "frontier exhausted, not connected");
            return Ok(SearchReport {
                path: None,
                nodes_explored,
                frontier_peak,
            });
        }

        let current = frontier.remove()?;
        let node = tree.nodes[current];
        nodes_explored += 1;

        explored_people.insert(node.state);
        if let Some(work) = node.action {
            explored_works.insert(work);
        }

        if max_degrees.is_some_and(|max| node.depth >= max) {
            continue;
        }

        trace!(person = node.state, depth = node.depth, "expanding");

        for (work, person) in graph.neighbors(node.state) {
            if explored_people.contains(person) || explored_works.contains(work) {
                continue;
            }

            let child = tree.push(SearchNode {
                state: person,
                parent: Some(current),
                action: Some(work),
                depth: node.depth + 1,
            });

            if person == target {
                let path = reconstruct_path(&tree, child)?;
                debug!(
                    source,
                    target,
                    degrees = path.degrees(),
                    nodes_explored,
                    "path found"
                );
                return Ok(SearchReport {
                    path: Some(path),
                    nodes_explored,
                    frontier_peak,
                });
            }

            frontier.add(child);
        }

        frontier_peak = frontier_peak.max(frontier.len());
    }
}

/// Walk parent links from `goal` back to the root and return the hops in forward order.
fn reconstruct_path(tree: &SearchTree<'_>, goal: NodeIndex) -> Result<Path, SearchError> {
    let mut hops = Vec::new();
    let mut current = goal;

    loop {
        let node = tree
            .nodes
            .get(current)
            .ok_or(SearchError::BrokenParentChain { node: current })?;

        match (node.parent, node.action) {
            (None, _) => break,
            (Some(parent), Some(work)) if parent < current => {
                hops.push(Hop {
                    work_id: work.to_string(),
                    person_id: node.state.to_string(),
                });
                current = parent;
            }
            _ => return Err(SearchError::BrokenParentChain { node: current }),
        }
    }

    hops.reverse();
    Ok(Path { hops })
}
