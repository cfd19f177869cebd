//! Bucket queues and the concatenation that hooks them into one sequence.
//!
//! A [`BucketQueue`] only remembers its front and rear node; the nodes in
//! between are reached through the arena's successor links. Appending writes
//! the successor of the old rear and nothing else. In particular the new
//! rear's own successor is left as it was: the distribution pass reads it
//! right after the append to keep walking the previous sequence, and
//! [`hookup`] overwrites it before anything treats it as part of a bucket.
//!
//! [`hookup`] is Knuth's Algorithm H (TAOCP 5.2.5): link each non-empty
//! queue's rear to the next non-empty queue's front, skip empty queues, and
//! terminate the last rear.

use crate::arena::{NodeArena, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ends {
    front: NodeId,
    rear: NodeId,
}

/// FIFO of arena nodes with O(1) append.
///
/// Front and rear are stored together, so a queue is either empty or has
/// both ends. It cannot hold one without the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketQueue {
    ends: Option<Ends>,
    len: usize,
}

impl BucketQueue {
    #[inline]
    pub fn new() -> Self {
        BucketQueue::default()
    }

    /// Append `id` as the new rear.
    #[inline]
    pub fn append<V>(&mut self, arena: &mut NodeArena<V>, id: NodeId) {
        self.ends = Some(match self.ends {
            None => Ends { front: id, rear: id },
            Some(Ends { front, rear }) => {
                arena.link(rear, Some(id));
                Ends { front, rear: id }
            }
        });
        self.len += 1;
    }

    /// Forget the queued nodes. The nodes themselves stay in the arena.
    #[inline]
    pub fn clear(&mut self) {
        *self = BucketQueue::default();
    }

    #[inline]
    pub fn front(&self) -> Option<NodeId> {
        self.ends.map(|ends| ends.front)
    }

    #[inline]
    pub fn rear(&self) -> Option<NodeId> {
        self.ends.map(|ends| ends.rear)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }
}

/// Head and length of a linked sequence produced by [`hookup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chain {
    pub head: Option<NodeId>,
    pub len: usize,
}

/// Concatenate `queues` in index order into one terminated chain.
///
/// Each queue keeps its internal order, and queue `i` precedes queue `j`
/// for `i < j`, so the result is a stable refinement of the order the
/// queues were filled in. Returns an empty chain when every queue is empty.
pub fn hookup<V>(queues: &[BucketQueue], arena: &mut NodeArena<V>) -> Chain {
    let mut chain = Chain::default();
    let mut tail: Option<NodeId> = None;

    for queue in queues {
        let Some(Ends { front, rear }) = queue.ends else {
            continue;
        };
        match tail {
            Some(prev) => arena.link(prev, Some(front)),
            None => chain.head = Some(front),
        }
        tail = Some(rear);
        chain.len += queue.len;
    }

    if let Some(last) = tail {
        arena.link(last, None);
    }
    chain
}
