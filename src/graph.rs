//! Dependency graph between emitted type names and the order they are
//! declared in.
//!
//! Ordering is a depth-first post-order walk: nodes are visited in the order
//! they were first registered and each node's dependencies in the order they
//! were first added. For acyclic graphs every dependency is emitted before
//! its dependents. In a multi-node cycle the edge that closes the cycle is
//! skipped, so one member of the cycle is declared before a type it names.

use indexmap::{IndexMap, IndexSet};
use tracing::{trace, warn};

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// node -> the nodes it depends on
    nodes: IndexMap<String, IndexSet<String>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`. Registering an existing node keeps its position.
    pub fn add_node(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            trace!(node = name, "registered node");
            self.nodes.insert(name.to_string(), IndexSet::new());
        }
    }

    /// Record that `dependent` mentions `dependency`. Both ends are
    /// registered if needed; self-edges are ignored.
    pub fn add_dependency(&mut self, dependent: &str, dependency: &str) {
        self.add_node(dependent);
        if dependent == dependency {
            return;
        }
        self.add_node(dependency);
        if let Some(deps) = self.nodes.get_mut(dependent) {
            if deps.insert(dependency.to_string()) {
                trace!(dependent, dependency, "registered dependency");
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct dependencies of `name`, in the order they were added.
    pub fn dependencies_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.nodes
            .get(name)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    /// Every node exactly once, dependencies first.
    pub fn overall_order(&self) -> Vec<&str> {
        let mut state = vec![Visit::Unvisited; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());

        for index in 0..self.nodes.len() {
            self.visit(index, &mut state, &mut order);
        }

        order
    }

    /// Post-order walk from `root` with an explicit stack of
    /// `(node, next dependency position)` frames, so chain length is not
    /// bounded by the thread stack.
    fn visit<'a>(&'a self, root: usize, state: &mut [Visit], order: &mut Vec<&'a str>) {
        if state[root] != Visit::Unvisited {
            return;
        }
        state[root] = Visit::InProgress;
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (index, position) = *frame;
            let Some((name, deps)) = self.nodes.get_index(index) else {
                stack.pop();
                continue;
            };

            let Some(dep) = deps.get_index(position) else {
                state[index] = Visit::Done;
                order.push(name.as_str());
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let Some(dep_index) = self.nodes.get_index_of(dep) else {
                continue;
            };
            match state[dep_index] {
                Visit::Unvisited => {
                    state[dep_index] = Visit::InProgress;
                    stack.push((dep_index, 0));
                }
                Visit::InProgress => {
                    warn!(
                        dependent = name.as_str(),
                        dependency = dep.as_str(),
                        "dependency cycle; `{}` is declared after a type that references it",
                        dep
                    );
                }
                Visit::Done => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[&str], name: &str) -> usize {
        order.iter().position(|n| *n == name).unwrap()
    }

    #[test]
    fn dependencies_come_first() {
        let mut graph = DependencyGraph::new();
        graph.add_node("Order");
        graph.add_dependency("Order", "Pet");
        graph.add_node("Pet");
        graph.add_dependency("Pet", "Category");
        graph.add_dependency("Pet", "Tag");

        let order = graph.overall_order();
        assert_eq!(order, vec!["Category", "Tag", "Pet", "Order"]);
    }

    #[test]
    fn isolated_nodes_keep_registration_order() {
        let mut graph = DependencyGraph::new();
        for name in ["C", "A", "B"] {
            graph.add_node(name);
        }
        assert_eq!(graph.overall_order(), vec!["C", "A", "B"]);
    }

    #[test]
    fn self_edges_are_ignored() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Node", "Node");
        graph.add_dependency("Tree", "Node");

        assert_eq!(graph.dependencies_of("Node").count(), 0);
        assert_eq!(graph.overall_order(), vec!["Node", "Tree"]);
    }

    #[test]
    fn cycles_still_produce_every_node_once() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "B");
        graph.add_dependency("B", "C");
        graph.add_dependency("C", "A");
        graph.add_dependency("D", "A");

        let order = graph.overall_order();
        assert_eq!(order, vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn duplicate_edges_are_collapsed() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Order", "Pet");
        graph.add_dependency("Order", "Pet");
        assert_eq!(graph.dependencies_of("Order").collect::<Vec<_>>(), vec!["Pet"]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn acyclic_order_respects_every_edge() {
        let edges = [
            ("User", "Address"),
            ("Order", "User"),
            ("Order", "Item"),
            ("Item", "Product"),
            ("Product", "Category"),
            ("Invoice", "Order"),
            ("Invoice", "Address"),
        ];
        let mut graph = DependencyGraph::new();
        graph.add_node("Invoice");
        for (dependent, dependency) in edges {
            graph.add_dependency(dependent, dependency);
        }

        let order = graph.overall_order();
        assert_eq!(order.len(), graph.len());
        for (dependent, dependency) in edges {
            assert!(position(&order, dependency) < position(&order, dependent));
        }
    }

    #[test]
    fn long_chains_do_not_exhaust_the_stack() {
        let length = 100_000;
        let mut graph = DependencyGraph::new();
        for i in 0..length {
            graph.add_dependency(&format!("T{i}"), &format!("T{}", i + 1));
        }

        let order = graph.overall_order();
        assert_eq!(order.len(), length + 1);
        assert_eq!(order.first(), Some(&"T100000"));
        assert_eq!(order.last(), Some(&"T0"));
    }

    #[test]
    fn order_is_deterministic() {
        let build = || {
            let mut graph = DependencyGraph::new();
            graph.add_dependency("X", "Y");
            graph.add_dependency("Y", "X");
            graph.add_dependency("Z", "Y");
            graph
        };
        let first = build();
        let second = build();
        assert_eq!(first.overall_order(), second.overall_order());
    }
}
