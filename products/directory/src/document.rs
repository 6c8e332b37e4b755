//! The rendering surface the views draw into.
//!
//! [`Document`] is the only seam between the directory and whatever actually
//! displays it. [`MemoryDocument`] keeps nodes in insertion order and is what
//! the terminal front-end renders from.

use std::fmt;

use serde::Serialize;

use crate::employee::Employee;

/// Identifier of a node inside a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Display handle of a rendered card, unique among live cards only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardHandle(u32);

impl CardHandle {
    pub const PREFIX: &'static str = "employee-card-";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Accepts `4821` as well as `employee-card-4821`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let digits = raw.strip_prefix(Self::PREFIX).unwrap_or(raw);
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for CardHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardNode {
    pub handle: CardHandle,
    pub photo: String,
    pub name: String,
    pub email: String,
    pub location: String,
}

impl CardNode {
    pub fn new(handle: CardHandle, employee: &Employee) -> Self {
        let profile = employee.profile();
        Self {
            handle,
            photo: profile.photo.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            location: profile.location.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModalNode {
    pub photo: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub cell: String,
    pub address: String,
    pub birthday: String,
}

impl ModalNode {
    pub fn new(employee: &Employee) -> Self {
        let profile = employee.profile();
        Self {
            photo: profile.photo.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            location: profile.location.clone(),
            cell: profile.cell.clone(),
            address: profile.detailed_address.clone(),
            birthday: profile.birthday.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Card(CardNode),
    /// Full-screen backdrop behind a modal.
    Overlay,
    Modal(ModalNode),
}

pub trait Document {
    fn append(&mut self, node: Node) -> NodeId;

    /// Remove a node, returning it if it was present.
    fn remove(&mut self, id: NodeId) -> Option<Node>;
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    next_id: u64,
    nodes: Vec<(NodeId, Node)>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().map(|(_, node)| node)
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardNode> + '_ {
        self.nodes().filter_map(|node| match node {
            Node::Card(card) => Some(card),
            _ => None,
        })
    }

    pub fn overlay_count(&self) -> usize {
        self.nodes()
            .filter(|node| matches!(node, Node::Overlay))
            .count()
    }

    pub fn modals(&self) -> impl Iterator<Item = &ModalNode> + '_ {
        self.nodes().filter_map(|node| match node {
            Node::Modal(modal) => Some(modal),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Document for MemoryDocument {
    fn append(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push((id, node));
        id
    }

    fn remove(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|(node_id, _)| *node_id == id)?;
        Some(self.nodes.remove(index).1)
    }
}
