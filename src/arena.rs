//! Index-based node storage for linked sequences.
//!
//! Items are moved into a [`NodeArena`] once, at the start of a sort, and
//! stay at the same slot until the sort finishes. Successor links are
//! [`NodeId`]s into the arena rather than pointers, so relinking can never
//! dangle or alias, and a sequence is just the [`NodeId`] of its head.

use std::fmt;

/// A sort record: `key` decides the order, `value` travels with it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item<V> {
    pub key: u32,
    pub value: V,
}

impl<V> Item<V> {
    #[inline]
    pub fn new(key: u32, value: V) -> Self {
        Item { key, value }
    }
}

impl From<u32> for Item<u32> {
    /// Plain integer sorting: the key is its own payload.
    #[inline]
    fn from(key: u32) -> Self {
        Item { key, value: key }
    }
}

/// Slot index of a node in a [`NodeArena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug)]
struct Node<V> {
    item: Item<V>,
    next: Option<NodeId>,
}

/// Owns every node of a sort run.
#[derive(Debug)]
pub struct NodeArena<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Default for NodeArena<V> {
    fn default() -> Self {
        NodeArena { nodes: Vec::new() }
    }
}

impl<V> NodeArena<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Move `item` into a fresh, unlinked node.
    #[inline]
    pub fn insert(&mut self, item: Item<V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { item, next: None });
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn key(&self, id: NodeId) -> u32 {
        self.nodes[id.0].item.key
    }

    #[inline]
    pub fn item(&self, id: NodeId) -> &Item<V> {
        &self.nodes[id.0].item
    }

    /// Successor of `id`. Only meaningful once `id` has been linked by a
    /// concatenation or by a later append behind it.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    /// Point the successor of `id` at `next` (`None` terminates the chain).
    #[inline]
    pub fn link(&mut self, id: NodeId, next: Option<NodeId>) {
        self.nodes[id.0].next = next;
    }

    /// Iterate the chain starting at `head`.
    ///
    /// The walk stops after [`NodeArena::len`] steps even if the links form
    /// a cycle.
    pub fn walk(&self, head: Option<NodeId>) -> Walk<'_, V> {
        Walk {
            arena: self,
            cursor: head,
            remaining: self.nodes.len(),
        }
    }

    /// Consume the arena, returning the items of the chain at `head` in
    /// chain order. Nodes not reachable from `head` are dropped.
    pub fn into_chain(self, head: Option<NodeId>) -> Vec<Item<V>> {
        let order: Vec<usize> = {
            let mut order = Vec::with_capacity(self.nodes.len());
            let mut cursor = head;
            while let Some(id) = cursor {
                if order.len() == self.nodes.len() {
                    break;
                }
                order.push(id.0);
                cursor = self.nodes[id.0].next;
            }
            order
        };

        let mut slots: Vec<Option<Item<V>>> =
            self.nodes.into_iter().map(|node| Some(node.item)).collect();
        order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect()
    }
}

/// Iterator over the items of a chain, from [`NodeArena::walk`].
pub struct Walk<'a, V> {
    arena: &'a NodeArena<V>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, V> Iterator for Walk<'a, V> {
    type Item = &'a Item<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.arena.next(id);
        Some(self.arena.item(id))
    }
}
