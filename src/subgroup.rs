//! Subgroup membership through Stallings folding.
//!
//! A finite generating set is turned into a "flower": one closed path per
//! freely reduced generator, all sharing a base vertex. Folding identifies
//! the targets of any two equally-labelled edges leaving the same vertex
//! until each vertex has at most one outgoing edge per symbol. A reduced word
//! lies in the subgroup exactly when reading it from the base vertex succeeds
//! and ends back at the base.

use crate::error::NielsenError;
use crate::group::FreeGroup;
use crate::reduce::freely_reduced;
use crate::symbol::{Label, Symbol};
use crate::word::Word;
use ahash::AHashMap as HashMap;
use std::collections::hash_map::Entry;

/// Index of a vertex in the folding union-find.
type Vertex = usize;

const BASE: Vertex = 0;

/// The folded core graph of a finitely generated subgroup.
#[derive(Debug, Clone)]
pub struct SubgroupGraph<'g, T> {
    group: &'g FreeGroup<T>,

    /// Union-find parents. Folding only ever merges, never splits.
    parent: Vec<Vertex>,

    /// Deterministic transitions between root vertices, both orientations.
    transitions: HashMap<(Vertex, Symbol<T>), Vertex>,
}

impl<'g, T: Label> SubgroupGraph<'g, T> {
    /// Builds the folded graph of the subgroup generated by `generators`.
    ///
    /// Words reducing to the identity contribute nothing.
    pub fn new<'a, I>(group: &'g FreeGroup<T>, generators: I) -> Result<Self, NielsenError>
    where
        I: IntoIterator<Item = &'a Word<T>>,
        T: 'a,
    {
        let mut parent = vec![BASE];
        let mut edges: Vec<(Vertex, Symbol<T>, Vertex)> = Vec::new();

        for generator in generators {
            let reduced = freely_reduced(group, generator)?;
            if group.is_identity(&reduced) {
                continue;
            }

            let mut from = BASE;
            for (i, symbol) in reduced.iter().enumerate() {
                let to = if i + 1 == reduced.len() {
                    BASE
                } else {
                    parent.push(parent.len());
                    parent.len() - 1
                };
                let inverse = group.inverse_symbol(symbol)?.clone();
                edges.push((from, symbol.clone(), to));
                edges.push((to, inverse, from));
                from = to;
            }
        }

        let transitions = fold(&mut parent, &edges);
        Ok(Self {
            group,
            parent,
            transitions,
        })
    }

    /// Returns true if `word` is an element of the subgroup.
    pub fn contains(&self, word: &Word<T>) -> Result<bool, NielsenError> {
        let reduced = freely_reduced(self.group, word)?;
        if self.group.is_identity(&reduced) {
            return Ok(true);
        }

        let base = self.root(BASE);
        let mut current = base;
        for symbol in &reduced {
            match self.transitions.get(&(current, symbol.clone())) {
                Some(&next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(current == base)
    }

    /// Returns the number of vertices left after folding.
    pub fn vertex_count(&self) -> usize {
        (0..self.parent.len())
            .filter(|&v| self.parent[v] == v)
            .count()
    }

    /// Returns the number of undirected edges left after folding.
    pub fn edge_count(&self) -> usize {
        self.transitions.len() / 2
    }

    /// Returns the rank of the subgroup: the size of any free basis.
    pub fn rank(&self) -> usize {
        self.edge_count() + 1 - self.vertex_count()
    }

    fn root(&self, mut vertex: Vertex) -> Vertex {
        while self.parent[vertex] != vertex {
            vertex = self.parent[vertex];
        }
        vertex
    }
}

/// Merges vertices until every (vertex, symbol) pair has a single target,
/// then returns the resulting transition table over root vertices.
///
/// Each pass rebuilds the table from scratch; a pass that merges nothing
/// leaves a consistent table behind.
fn fold<T: Label>(
    parent: &mut [Vertex],
    edges: &[(Vertex, Symbol<T>, Vertex)],
) -> HashMap<(Vertex, Symbol<T>), Vertex> {
    loop {
        let mut transitions = HashMap::default();
        let mut merged = false;

        for (from, symbol, to) in edges {
            let from = find(parent, *from);
            let to = find(parent, *to);
            match transitions.entry((from, symbol.clone())) {
                Entry::Vacant(e) => {
                    e.insert(to);
                }
                Entry::Occupied(e) => {
                    let other = find(parent, *e.get());
                    if other != to {
                        union(parent, other, to);
                        merged = true;
                    }
                }
            }
        }

        if !merged {
            return transitions;
        }
    }
}

fn find(parent: &mut [Vertex], vertex: Vertex) -> Vertex {
    let mut root = vertex;
    while parent[root] != root {
        root = parent[root];
    }
    let mut current = vertex;
    while parent[current] != root {
        let next = parent[current];
        parent[current] = root;
        current = next;
    }
    root
}

/// The smaller index survives, so the base vertex is always its own root.
fn union(parent: &mut [Vertex], a: Vertex, b: Vertex) {
    let (a, b) = (find(parent, a), find(parent, b));
    if a < b {
        parent[b] = a;
    } else if b < a {
        parent[a] = b;
    }
}

/// Returns true if `left` and `right` generate the same subgroup.
pub fn generates_same_subgroup<'a, T, L, R>(
    group: &FreeGroup<T>,
    left: L,
    right: R,
) -> Result<bool, NielsenError>
where
    T: Label + 'a,
    L: IntoIterator<Item = &'a Word<T>>,
    R: IntoIterator<Item = &'a Word<T>>,
{
    let left: Vec<&Word<T>> = left.into_iter().collect();
    let right: Vec<&Word<T>> = right.into_iter().collect();

    let left_graph = SubgroupGraph::new(group, left.iter().copied())?;
    for word in &right {
        if !left_graph.contains(word)? {
            return Ok(false);
        }
    }

    let right_graph = SubgroupGraph::new(group, right.iter().copied())?;
    for word in &left {
        if !right_graph.contains(word)? {
            return Ok(false);
        }
    }
    Ok(true)
}
