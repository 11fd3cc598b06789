//! # Reconciler
//!
//! Keeps the [`ClientCache`] in step with the server.
//!
//! The reconciler is owned by the UI thread. Network calls run as tokio tasks
//! and report back through an unbounded channel of [`SyncEvent`]s, which the
//! UI drains each frame with [`Reconciler::pump`]. All cache mutation happens
//! while applying an event, so the cache is never touched from two places.
//!
//! ## Rules
//!
//! - **Refresh** replaces the whole cache. Each request carries a sequence
//!   number; a response at or below the last applied number is discarded.
//! - **Create** is optimistic: a pending entry is appended at once. On failure
//!   exactly that entry is removed; on success it is promoted to its durable id.
//! - **Update / delete** are sent against a durable id and leave the cache
//!   alone; the next refresh shows the result.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::cache::{ClientCache, TransientId};
use super::scheduler::PollHandle;
use crate::egui_app::api::{ClientError, CommentApiClient};
use crate::shared::{
    Acknowledgment, Comment, CommentDraft, CommentPatch, CreateAcknowledgment,
    DeleteAcknowledgment, DurableId,
};

/// Completion or timer notification delivered to the UI thread
#[derive(Debug)]
pub enum SyncEvent {
    /// The refresh timer fired
    RefreshDue,
    RefreshCompleted {
        seq: u64,
        result: Result<Vec<Comment>, ClientError>,
    },
    CreateCompleted {
        transient: TransientId,
        result: Result<CreateAcknowledgment, ClientError>,
    },
    UpdateCompleted {
        id: DurableId,
        result: Result<Acknowledgment, ClientError>,
    },
    DeleteCompleted {
        id: DurableId,
        result: Result<DeleteAcknowledgment, ClientError>,
    },
}

/// Whether the cache reflects the server with nothing outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Settled,
    Pending,
}

/// Snapshot for the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncStatus {
    pub phase: SyncPhase,
    pub outstanding_writes: usize,
    pub last_refresh: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

pub struct Reconciler {
    api: CommentApiClient,
    runtime: Handle,
    cache: ClientCache,
    events_tx: UnboundedSender<SyncEvent>,
    events_rx: UnboundedReceiver<SyncEvent>,
    poller: Option<PollHandle>,
    issued_seq: u64,
    applied_seq: u64,
    outstanding_writes: usize,
    last_refresh: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl Reconciler {
    pub fn new(api: CommentApiClient, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            api,
            runtime,
            cache: ClientCache::new(),
            events_tx,
            events_rx,
            poller: None,
            issued_seq: 0,
            applied_seq: 0,
            outstanding_writes: 0,
            last_refresh: None,
            last_error: None,
        }
    }

    pub fn cache(&self) -> &ClientCache {
        &self.cache
    }

    pub fn status(&self) -> SyncStatus {
        let phase = if self.outstanding_writes > 0 || self.cache.pending_count() > 0 {
            SyncPhase::Pending
        } else {
            SyncPhase::Settled
        };

        SyncStatus {
            phase,
            outstanding_writes: self.outstanding_writes,
            last_refresh: self.last_refresh,
            last_error: self.last_error.clone(),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Start the refresh timer, replacing any running one
    pub fn start_polling(&mut self, interval: Duration) {
        self.stop_polling();
        self.poller = Some(PollHandle::spawn(&self.runtime, interval, self.events_tx.clone()));
    }

    pub fn stop_polling(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.cancel();
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PollHandle::is_active)
    }

    /// Issue a list request tagged with the next sequence number
    pub fn request_refresh(&mut self) -> u64 {
        self.issued_seq += 1;
        let seq = self.issued_seq;
        let api = self.api.clone();
        let events = self.events_tx.clone();

        self.runtime.spawn(async move {
            let result = api.list_comments().await;
            let _ = events.send(SyncEvent::RefreshCompleted { seq, result });
        });
        seq
    }

    /// Append a pending entry and send the create in the background
    pub fn create(&mut self, draft: CommentDraft) -> TransientId {
        let transient = self.cache.insert_pending(&draft);
        self.outstanding_writes += 1;
        tracing::debug!("Optimistically added {}", transient);

        let api = self.api.clone();
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.create_comment(&draft).await;
            let _ = events.send(SyncEvent::CreateCompleted { transient, result });
        });
        transient
    }

    /// Send a sparse update for a confirmed record
    pub fn update(&mut self, id: &DurableId, patch: CommentPatch) {
        self.outstanding_writes += 1;

        let id = id.clone();
        let api = self.api.clone();
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.update_comment(&id, &patch).await;
            let _ = events.send(SyncEvent::UpdateCompleted { id, result });
        });
    }

    /// Send a delete for a confirmed record
    pub fn delete(&mut self, id: &DurableId) {
        self.outstanding_writes += 1;

        let id = id.clone();
        let api = self.api.clone();
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = api.delete_comment(&id).await;
            let _ = events.send(SyncEvent::DeleteCompleted { id, result });
        });
    }

    /// Apply every event that has already arrived; returns how many
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event and apply it
    pub async fn process_next(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::RefreshDue => {
                self.request_refresh();
            }
            SyncEvent::RefreshCompleted { seq, result } => self.apply_refresh(seq, result),
            SyncEvent::CreateCompleted { transient, result } => {
                self.finish_write();
                self.apply_create(transient, result);
            }
            SyncEvent::UpdateCompleted { id, result } => {
                self.finish_write();
                match result {
                    Ok(_) => tracing::debug!("Comment {} updated", id),
                    Err(e) => self.report("Update failed", &e),
                }
            }
            SyncEvent::DeleteCompleted { id, result } => {
                self.finish_write();
                match result {
                    Ok(ack) if ack.deleted => tracing::debug!("Comment {} deleted", id),
                    Ok(_) => tracing::debug!("Comment {} was already gone", id),
                    Err(e) => self.report("Delete failed", &e),
                }
            }
        }
    }

    fn apply_refresh(&mut self, seq: u64, result: Result<Vec<Comment>, ClientError>) {
        if seq <= self.applied_seq {
            tracing::debug!(
                "Discarding stale refresh {} (already applied {})",
                seq,
                self.applied_seq
            );
            return;
        }

        match result {
            Ok(comments) => {
                self.applied_seq = seq;
                self.cache.replace_all(comments);
                self.last_refresh = Some(Utc::now());
            }
            Err(e) => self.report("Could not refresh comments", &e),
        }
    }

    fn apply_create(&mut self, transient: TransientId, result: Result<CreateAcknowledgment, ClientError>) {
        match result {
            Ok(ack) => {
                if !self.cache.promote(transient, ack.id.clone()) {
                    tracing::debug!("{} already replaced by refresh", transient);
                }
                tracing::info!("Comment {} created", ack.id);
            }
            Err(e) => {
                self.cache.remove_pending(transient);
                self.report("Comment could not be posted", &e);
            }
        }
    }

    fn finish_write(&mut self) {
        self.outstanding_writes = self.outstanding_writes.saturating_sub(1);
    }

    fn report(&mut self, context: &str, error: &ClientError) {
        if error.is_transient() {
            tracing::warn!("{}: {}", context, error);
        } else {
            tracing::info!("{}: {}", context, error);
        }
        self.last_error = Some(format!("{context}: {error}"));
    }
}
