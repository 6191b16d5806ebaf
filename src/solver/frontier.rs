use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::best_first::SearchNode;

/// Decides in which order the search loop pops nodes.
pub(crate) trait Frontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>);

    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;

    fn len(&self) -> usize;
}

/// First in, first out - breadth-first search.
pub(crate) struct FifoFrontier<'a> {
    queue: VecDeque<&'a SearchNode<'a>>,
}

impl<'a> FifoFrontier<'a> {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<'a> Frontier<'a> for FifoFrontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Lowest key first, ties are popped in insertion order.
pub(crate) struct PriorityFrontier<'a, Key>
where
    Key: Fn(&SearchNode<'a>) -> u32,
{
    heap: BinaryHeap<Entry<'a>>,
    key: Key,
    pushed: u64,
}

impl<'a, Key> PriorityFrontier<'a, Key>
where
    Key: Fn(&SearchNode<'a>) -> u32,
{
    pub(crate) fn new(key: Key) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            pushed: 0,
        }
    }
}

impl<'a, Key> Frontier<'a> for PriorityFrontier<'a, Key>
where
    Key: Fn(&SearchNode<'a>) -> u32,
{
    fn push(&mut self, node: &'a SearchNode<'a>) {
        let priority = (self.key)(node);
        self.heap.push(Entry {
            priority,
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

struct Entry<'a> {
    priority: u32,
    seq: u64,
    node: &'a SearchNode<'a>,
}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}
