use super::{PropertyService, SceneGraph};
use crate::error::{FetchError, LoadError};
use crate::model::{NodeId, PropertyBag};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    name: String,
    root: NodeId,
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: NodeId,
    #[serde(default)]
    children: Vec<NodeId>,
    #[serde(default)]
    bag: Option<PropertyBag>,
    /// Simulates a property service failure for this node.
    #[serde(default)]
    fetch_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct SnapshotNode {
    children: Vec<NodeId>,
    bag: Option<PropertyBag>,
    fetch_error: Option<String>,
}

/// A model exported from a viewer: hierarchy plus every node's properties.
///
/// Serves as both the [`SceneGraph`] and the [`PropertyService`] when no
/// live viewer is attached.
#[derive(Debug, Clone)]
pub struct SceneSnapshot {
    pub name: String,
    root: NodeId,
    nodes: HashMap<NodeId, SnapshotNode>,
}

impl SceneSnapshot {
    /// Empty model containing only its root.
    pub fn new(name: impl Into<String>, root: NodeId) -> Self {
        Self {
            name: name.into(),
            root,
            nodes: HashMap::from([(root, SnapshotNode::default())]),
        }
    }

    /// Adds a leaf under `parent`. Intermediate grouping nodes are created
    /// on demand when `parent` is not known yet.
    #[must_use]
    pub fn with_element(mut self, parent: NodeId, id: NodeId, bag: PropertyBag) -> Self {
        self.attach(parent, id);
        self.nodes.entry(id).or_default().bag = Some(bag);
        self
    }

    /// Adds a leaf whose property fetch always fails.
    #[must_use]
    pub fn with_failing_element(mut self, parent: NodeId, id: NodeId, message: &str) -> Self {
        self.attach(parent, id);
        self.nodes.entry(id).or_default().fetch_error = Some(message.to_string());
        self
    }

    fn attach(&mut self, parent: NodeId, id: NodeId) {
        if parent != self.root && !self.nodes.contains_key(&parent) {
            self.attach(self.root, parent);
        }
        let children = &mut self.nodes.entry(parent).or_default().children;
        if !children.contains(&id) {
            children.push(id);
        }
        self.nodes.entry(id).or_default();
    }

    /// Reads and validates a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::FileRead`] if the file cannot be read,
    /// [`LoadError::InvalidJson`] if it is not snapshot JSON and
    /// [`LoadError::InvalidSnapshot`] if the hierarchy is inconsistent.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(&path).map_err(|source| LoadError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let raw: RawSnapshot = serde_json::from_str(content)?;

        let mut nodes = HashMap::with_capacity(raw.nodes.len());
        for node in raw.nodes {
            let id = node.id;
            let previous = nodes.insert(
                id,
                SnapshotNode {
                    children: node.children,
                    bag: node.bag,
                    fetch_error: node.fetch_error,
                },
            );
            if previous.is_some() {
                return Err(invalid(format!("duplicate node id {id}")));
            }
        }

        if !nodes.contains_key(&raw.root) {
            return Err(invalid(format!("root node {} is not defined", raw.root)));
        }

        for (id, node) in &nodes {
            if let Some(missing) = node.children.iter().find(|c| !nodes.contains_key(c)) {
                return Err(invalid(format!(
                    "node {id} references undefined child {missing}"
                )));
            }
        }

        Ok(Self {
            name: raw.name,
            root: raw.root,
            nodes,
        })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

fn invalid(message: String) -> LoadError {
    LoadError::InvalidSnapshot { message }
}

impl SceneGraph for SceneSnapshot {
    fn root(&self) -> NodeId {
        self.root
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map_or(&[][..], |n| n.children.as_slice())
    }
}

impl PropertyService for SceneSnapshot {
    async fn fetch(&self, id: NodeId) -> Result<PropertyBag, FetchError> {
        let node = self.nodes.get(&id).ok_or(FetchError::NotFound { id })?;

        if let Some(message) = &node.fetch_error {
            return Err(FetchError::Service {
                id,
                message: message.clone(),
            });
        }

        node.bag.clone().ok_or(FetchError::NotFound { id })
    }
}
