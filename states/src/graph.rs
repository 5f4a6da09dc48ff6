use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first means the start node, last means the end node
    route: Vec<T>,
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.route.len();
        if len == 0 {
            return write!(f, "[]");
        }
        for item in &self.route[..len - 1] {
            write!(f, "{:?} -> ", item)?;
        }
        write!(f, "{:?}", self.route[len - 1])
    }
}

#[derive(Debug)]
pub struct Graph<Node, Edge = ()>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    routes: Vec<(Node, Edge, Node)>,

    route_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node, Edge> Default for Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node, Edge> Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),

            route_cache: BTreeMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            routes: Vec::with_capacity(capacity),

            route_cache: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: Node, to: Node, via: Edge) {
        self.routes.push((from, via, to));
        self.route_cache.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn cal_in_out(&self) -> BTreeMap<Node, (usize, usize)> {
        let mut in_out = BTreeMap::<Node, (usize, usize)>::new();

        for edge in self.routes.iter() {
            let (from, _via, to) = edge;

            let entry_from = in_out.entry(*from).or_insert((0, 0));
            entry_from.1 += 1;

            let entry_to = in_out.entry(*to).or_insert((0, 0));
            entry_to.0 += 1;
        }

        in_out
    }

    /// Orders every node that appears on a route so each node comes after
    /// all of the nodes it depends on.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_out = self.cal_in_out();
        let mut order = Vec::with_capacity(in_out.len());

        while !in_out.is_empty() {
            if let Some((&node, _)) = in_out.iter().find(|(_, deg)| deg.0 == 0) {
                in_out.remove(&node);
                order.push(node);

                for connected in self.direct_connected_nodes(node)? {
                    if let Some(entry) = in_out.get_mut(&connected) {
                        entry.0 -= 1;
                    }
                }
            } else {
                let keys: Vec<Node> = in_out.keys().copied().collect();
                let route = self.find_cycle(&keys).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route }));
            }
        }

        Ok(order)
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        // Iterative DFS to find cycle among the remaining nodes
        let mut visited = BTreeSet::new();
        // Set of nodes currently in the recursion stack (path)
        let mut path_set = BTreeSet::new();
        // The path itself, to reconstruct the cycle
        let mut path = Vec::new();

        // Stack for DFS: stores (node, neighbors_iterator)
        // Using Box<dyn Iterator> to handle the BTreeSet iterator type
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        for &start_node in nodes {
            if visited.contains(&start_node) {
                continue;
            }

            // Start DFS from start_node
            // Neighbors are collected into a Vec to manage the iterator easily
            let neighbors = self
                .direct_connected_nodes(start_node)
                .unwrap_or_default()
                .into_iter()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter();

            stack.push((start_node, neighbors));
            visited.insert(start_node);
            path_set.insert(start_node);
            path.push(start_node);

            while let Some((current_node, neighbors)) = stack.last_mut() {
                if let Some(neighbor) = neighbors.next() {
                    if path_set.contains(&neighbor) {
                        // Cycle found
                        // Extract the cycle from path
                        if let Some(pos) = path.iter().position(|&x| x == neighbor) {
                            let mut cycle = path[pos..].to_vec();
                            cycle.push(neighbor);
                            return Some(cycle);
                        }
                    } else if !visited.contains(&neighbor) {
                        // Visit new node
                        let next_neighbors = self
                            .direct_connected_nodes(neighbor)
                            .unwrap_or_default()
                            .into_iter()
                            .filter(|n| nodes.contains(n))
                            .collect::<Vec<_>>()
                            .into_iter();

                        visited.insert(neighbor);
                        path_set.insert(neighbor);
                        path.push(neighbor);
                        stack.push((neighbor, next_neighbors));
                    }
                } else {
                    // Backtrack
                    // Need to drop the borrow of stack first
                    let node_to_remove = *current_node;
                    stack.pop();
                    path_set.remove(&node_to_remove);
                    path.pop();
                }
            }
        }
        None
    }

    /// Every node that transitively depends on `node`.
    pub fn connected(&mut self, node: Node) -> impl Iterator<Item = &Node> {
        if !self.route_cache.contains_key(&node) {
            let collected = self.connected_nodes(node);
            self.route_cache.insert(node, collected);
        }
        self.route_cache.get(&node).into_iter().flatten()
    }

    fn direct_connected_nodes(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, _via, to) in self.routes.iter() {
            if from == &node {
                if collected.contains(to) {
                    return Err(TopologyError::DuplicateEdge(DepRoute {
                        route: vec![node, *to],
                    }));
                }
                collected.insert(*to);
            }
        }

        Ok(collected)
    }

    fn connected_nodes(&self, node: Node) -> BTreeSet<Node> {
        // Simple BFS
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::new();

        queue.push_back(node);

        while let Some(current) = queue.pop_front() {
            for (from, _via, to) in self.routes.iter() {
                if from == &current {
                    // already collected nodes are skipped, so a cycle cannot loop forever
                    if !collected.contains(to) {
                        collected.insert(*to);
                        queue.push_back(*to);
                    }
                }
            }
        }

        collected
    }
}
