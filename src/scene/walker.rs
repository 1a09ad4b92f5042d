use super::SceneGraph;
use crate::model::NodeId;
use std::collections::HashSet;

/// Collects every leaf reachable from `root`, depth first, children in
/// their listed order.
///
/// Nodes reachable through several parents are reported once and cycles
/// are cut, so the result never contains duplicates. A root without
/// children yields an empty sequence.
pub fn walk<G: SceneGraph + ?Sized>(graph: &G, root: NodeId) -> Vec<NodeId> {
    let mut leaves = Vec::new();
    let mut visited = HashSet::from([root]);
    let mut stack: Vec<NodeId> = graph.children(root).iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        let children = graph.children(id);
        if children.is_empty() {
            leaves.push(id);
        } else {
            stack.extend(children.iter().rev());
        }
    }

    leaves
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct Tree(HashMap<NodeId, Vec<NodeId>>);

    impl SceneGraph for Tree {
        fn root(&self) -> NodeId {
            1
        }

        fn children(&self, id: NodeId) -> &[NodeId] {
            self.0.get(&id).map_or(&[][..], Vec::as_slice)
        }
    }

    fn tree(edges: &[(NodeId, Vec<NodeId>)]) -> Tree {
        Tree(edges.iter().cloned().collect())
    }

    #[test]
    fn collects_leaves_depth_first() {
        let graph = tree(&[(1, vec![2, 5]), (2, vec![3, 4]), (5, vec![6])]);
        assert_eq!(walk(&graph, 1), vec![3, 4, 6]);
    }

    #[test]
    fn childless_root_yields_nothing() {
        let graph = tree(&[]);
        assert!(walk(&graph, 1).is_empty());
    }

    #[test]
    fn shared_and_cyclic_nodes_are_reported_once() {
        let graph = tree(&[(1, vec![2, 3]), (2, vec![4, 1]), (3, vec![4])]);
        assert_eq!(walk(&graph, 1), vec![4]);
    }

    #[test]
    fn walk_is_deterministic() {
        let graph = tree(&[(1, vec![2, 3, 4]), (3, vec![7, 8])]);
        assert_eq!(graph.walk(1), graph.walk(1));
        assert_eq!(graph.walk(1), vec![2, 7, 8, 4]);
    }
}
