//! Directed acyclic graph structure for a Bayesian network.
//!
//! A [`Network`] maps each node to its parent set. Arcs point from a parent
//! (tail) to a child (head); the structure stays acyclic because every arc
//! addition goes through [`Network::legal_to_add`], which combines the
//! self-loop, duplicate-arc, parent-bound, and cycle checks in one query.
//!
//! Parent sets use inline small-vector storage: most nodes in learned
//! networks have only a handful of parents, so lookups stay allocation-free
//! in the common case.

pub mod snapshot;

use smallvec::SmallVec;

use crate::search::errors::SearchError;

/// Inline capacity of a parent set before it spills to the heap.
const INLINE_PARENTS: usize = 8;

/// Parent list of one node, insertion-ordered.
type ParentVec = SmallVec<[usize; INLINE_PARENTS]>;

/// A mutable DAG over a fixed set of nodes `0..num_nodes`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Network {
    parents: Vec<ParentVec>,
    max_parents: usize,
}

impl Network {
    /// Creates an empty structure (no arcs) over `num_nodes` nodes.
    ///
    /// `max_parents` bounds the size of every parent set; pass `usize::MAX`
    /// for an effectively unbounded structure.
    pub fn new(num_nodes: usize, max_parents: usize) -> Self {
        Self {
            parents: vec![ParentVec::new(); num_nodes],
            max_parents,
        }
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.parents.len()
    }

    /// Configured upper bound on parent-set size.
    pub fn max_parents(&self) -> usize {
        self.max_parents
    }

    /// Parents of `node`, in insertion order.
    pub fn parents(&self, node: usize) -> &[usize] {
        &self.parents[node]
    }

    /// Total number of arcs in the structure.
    pub fn num_arcs(&self) -> usize {
        self.parents.iter().map(|p| p.len()).sum()
    }

    /// Whether the arc `tail -> head` is present.
    pub fn has_arc(&self, tail: usize, head: usize) -> bool {
        self.parents[head].contains(&tail)
    }

    /// Whether `tail -> head` can be added without breaking any invariant.
    ///
    /// False if the arc would be a self-loop, already exists, would exceed
    /// `head`'s parent bound, or would close a directed cycle. The cycle
    /// check walks parent edges breadth-first from `tail`: the new arc
    /// closes a cycle exactly when `head` is an ancestor of `tail`.
    pub fn legal_to_add(&self, tail: usize, head: usize) -> bool {
        if tail == head || self.has_arc(tail, head) {
            return false;
        }
        if self.parents[head].len() >= self.max_parents {
            return false;
        }
        !self.is_ancestor(head, tail)
    }

    /// Whether `candidate` is `node` itself or a (transitive) ancestor of it.
    fn is_ancestor(&self, candidate: usize, node: usize) -> bool {
        if candidate == node {
            return true;
        }
        let mut visited = vec![false; self.parents.len()];
        let mut queue = std::collections::VecDeque::new();
        visited[node] = true;
        queue.push_back(node);
        while let Some(current) = queue.pop_front() {
            for &parent in &self.parents[current] {
                if parent == candidate {
                    return true;
                }
                if !visited[parent] {
                    visited[parent] = true;
                    queue.push_back(parent);
                }
            }
        }
        false
    }

    /// Adds `tail` to `head`'s parent set.
    ///
    /// The caller is responsible for checking [`Network::legal_to_add`]
    /// first; this method only guards against self-loops and duplicates in
    /// debug builds.
    pub fn add_parent(&mut self, head: usize, tail: usize) {
        debug_assert_ne!(head, tail, "self-loop");
        debug_assert!(!self.has_arc(tail, head), "duplicate arc");
        self.parents[head].push(tail);
    }

    /// Removes `tail` from `head`'s parent set, if present.
    pub fn remove_parent(&mut self, head: usize, tail: usize) {
        self.parents[head].retain(|&mut p| p != tail);
    }

    /// Replaces the arc `tail -> head` with `head -> tail`.
    ///
    /// The caller must have verified the reversal stays acyclic (remove the
    /// arc, check [`Network::legal_to_add`] for the reverse, restore).
    pub fn reverse_arc(&mut self, tail: usize, head: usize) {
        self.remove_parent(head, tail);
        self.add_parent(tail, head);
    }

    /// Deep-copies all parent sets from `other`.
    pub fn copy_from(&mut self, other: &Network) {
        self.parents.clear();
        self.parents.extend(other.parents.iter().cloned());
    }

    /// Removes every arc, returning to the empty structure.
    pub fn clear(&mut self) {
        for p in &mut self.parents {
            p.clear();
        }
    }

    /// Whether the structure contains no directed cycle.
    ///
    /// Kahn-style elimination over parent counts. All structures built
    /// through [`Network::legal_to_add`] pass this; it exists for snapshot
    /// validation and tests.
    pub fn is_acyclic(&self) -> bool {
        let n = self.parents.len();
        let mut remaining: Vec<usize> = (0..n).map(|v| self.parents[v].len()).collect();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (head, parents) in self.parents.iter().enumerate() {
            for &tail in parents {
                children[tail].push(head);
            }
        }
        let mut queue: std::collections::VecDeque<usize> =
            (0..n).filter(|&v| remaining[v] == 0).collect();
        let mut removed = 0;
        while let Some(v) = queue.pop_front() {
            removed += 1;
            for &child in &children[v] {
                remaining[child] -= 1;
                if remaining[child] == 0 {
                    queue.push_back(child);
                }
            }
        }
        removed == n
    }

    /// Validates basic structural invariants, for use at trust boundaries
    /// such as snapshot restore.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (head, parents) in self.parents.iter().enumerate() {
            for &tail in parents {
                if tail >= self.parents.len() {
                    return Err(SearchError::Internal(format!(
                        "node {} has out-of-range parent {}",
                        head, tail
                    )));
                }
                if tail == head {
                    return Err(SearchError::Internal(format!("node {} is its own parent", head)));
                }
            }
            if parents.len() > self.max_parents {
                return Err(SearchError::Internal(format!(
                    "node {} has {} parents, bound is {}",
                    head,
                    parents.len(),
                    self.max_parents
                )));
            }
        }
        if !self.is_acyclic() {
            return Err(SearchError::Internal("structure contains a cycle".into()));
        }
        Ok(())
    }
}
