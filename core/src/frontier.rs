use std::collections::VecDeque;

use crate::error::FrontierError;

/// Worklist of discovered but not yet expanded search nodes.
///
/// `add` never deduplicates; the search driver filters through its explored
/// sets instead of scanning the frontier.
pub trait Frontier<T> {
    fn add(&mut self, item: T);

    /// Remove the next node in this frontier's discipline.
    fn remove(&mut self) -> Result<T, FrontierError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// LIFO frontier: depth-first expansion. Finds a path, not necessarily the shortest.
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.items.pop().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// FIFO frontier: breadth-first expansion. First discovery of a node is at its
/// minimum hop count, which is what makes the search return shortest paths.
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.items.pop_front().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
