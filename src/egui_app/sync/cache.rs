//! # Client Cache
//!
//! Ordered, in-memory copy of the comment collection as last seen by the
//! client, plus any optimistic entries not yet acknowledged.
//!
//! Every entry carries a [`CommentKey`]. A `Pending` key holds a client-minted
//! [`TransientId`] that the server has never seen; a `Confirmed` key holds the
//! server's [`DurableId`]. Only confirmed entries expose a durable id, so an
//! update or delete can never be addressed with a transient one.

use std::collections::HashSet;
use std::fmt;

use crate::shared::{Comment, CommentDraft, DurableId};

/// Client-only identifier of an optimistic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransientId(u64);

impl TransientId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pending-{}", self.0)
    }
}

/// Identity of a cached record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentKey {
    /// Created locally, acknowledgment outstanding
    Pending(TransientId),
    /// Known to the server
    Confirmed(DurableId),
}

/// One rendered record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedComment {
    pub key: CommentKey,
    pub author: Option<String>,
    pub text: Option<String>,
}

impl CachedComment {
    fn confirmed(comment: Comment) -> Self {
        Self {
            key: CommentKey::Confirmed(comment.id),
            author: comment.author,
            text: comment.text,
        }
    }

    /// The id to address mutations with, if the record is confirmed
    pub fn durable_id(&self) -> Option<&DurableId> {
        match &self.key {
            CommentKey::Confirmed(id) => Some(id),
            CommentKey::Pending(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.key, CommentKey::Pending(_))
    }
}

/// The client's view of the collection
#[derive(Debug, Default)]
pub struct ClientCache {
    entries: Vec<CachedComment>,
    last_transient: u64,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CachedComment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_pending()).count()
    }

    pub fn get(&self, key: &CommentKey) -> Option<&CachedComment> {
        self.entries.iter().find(|entry| &entry.key == key)
    }

    /// Replace the whole cache with a server listing
    ///
    /// Optimistic entries are dropped. Repeated ids in the listing keep only
    /// their first occurrence.
    pub fn replace_all(&mut self, comments: Vec<Comment>) {
        let mut seen = HashSet::with_capacity(comments.len());
        let mut entries = Vec::with_capacity(comments.len());

        for comment in comments {
            if seen.insert(comment.id.clone()) {
                entries.push(CachedComment::confirmed(comment));
            } else {
                tracing::warn!("Server listed comment {} more than once", comment.id);
            }
        }

        self.entries = entries;
    }

    /// Append an optimistic entry and return its transient id
    pub fn insert_pending(&mut self, draft: &CommentDraft) -> TransientId {
        self.last_transient += 1;
        let id = TransientId(self.last_transient);
        self.entries.push(CachedComment {
            key: CommentKey::Pending(id),
            author: draft.author.clone(),
            text: draft.text.clone(),
        });
        id
    }

    /// Give a pending entry its durable id
    ///
    /// Returns `false` when the entry is gone (a refresh replaced it). If a
    /// refresh already delivered the durable record, the pending entry is
    /// dropped instead so the record appears once.
    pub fn promote(&mut self, transient: TransientId, durable: DurableId) -> bool {
        let Some(index) = self.position(&CommentKey::Pending(transient)) else {
            return false;
        };

        let durable_key = CommentKey::Confirmed(durable);
        if self.position(&durable_key).is_some() {
            self.entries.remove(index);
        } else {
            self.entries[index].key = durable_key;
        }
        true
    }

    /// Remove exactly the pending entry with this id
    pub fn remove_pending(&mut self, transient: TransientId) -> bool {
        match self.position(&CommentKey::Pending(transient)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    fn position(&self, key: &CommentKey) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key == key)
    }
}
