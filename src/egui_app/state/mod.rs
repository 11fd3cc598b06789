use std::time::Duration;

use crate::egui_app::sync::{CachedComment, CommentKey, Reconciler};
use crate::shared::{CommentDraft, CommentPatch, DurableId};

/// Inline edit of one confirmed comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: DurableId,
    pub author_input: String,
    pub text_input: String,
    original_author: String,
    original_text: String,
}

impl EditDraft {
    /// Start editing `entry`; pending entries cannot be edited
    pub fn for_entry(entry: &CachedComment) -> Option<Self> {
        let id = entry.durable_id()?.clone();
        let author = entry.author.clone().unwrap_or_default();
        let text = entry.text.clone().unwrap_or_default();
        Some(Self {
            id,
            author_input: author.clone(),
            text_input: text.clone(),
            original_author: author,
            original_text: text,
        })
    }

    /// Sparse patch holding only the fields the user changed
    pub fn patch(&self) -> CommentPatch {
        let mut patch = CommentPatch::new();
        if self.author_input != self.original_author {
            patch = patch.author(self.author_input.clone());
        }
        if self.text_input != self.original_text {
            patch = patch.text(self.text_input.clone());
        }
        patch
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub reconciler: Reconciler,
    pub author_input: String,
    pub text_input: String,
    pub form_error: Option<String>,
    pub editing: Option<EditDraft>,
    poll_interval: Duration,
}

impl AppState {
    pub fn new(reconciler: Reconciler, poll_interval: Duration) -> Self {
        Self {
            reconciler,
            author_input: String::new(),
            text_input: String::new(),
            form_error: None,
            editing: None,
            poll_interval,
        }
    }

    /// Acquire the refresh timer for the lifetime of the comment view
    pub fn mount(&mut self) {
        self.reconciler.start_polling(self.poll_interval);
    }

    /// Release the refresh timer
    pub fn unmount(&mut self) {
        self.reconciler.stop_polling();
    }

    /// Apply finished network work; call once per frame
    pub fn tick(&mut self) -> usize {
        let applied = self.reconciler.pump();
        self.drop_vanished_edit();
        applied
    }

    /// An edit whose record a refresh removed has nothing left to save
    fn drop_vanished_edit(&mut self) {
        let Some(edit) = &self.editing else {
            return;
        };
        let key = CommentKey::Confirmed(edit.id.clone());
        if self.reconciler.cache().get(&key).is_none() {
            tracing::info!("Comment {} disappeared while being edited", edit.id);
            self.editing = None;
            self.form_error = Some("The comment being edited was removed".to_string());
        }
    }

    pub fn handle_submit(&mut self) {
        let author = self.author_input.trim();
        let text = self.text_input.trim();

        if author.is_empty() || text.is_empty() {
            self.form_error = Some("Author and comment are both required".to_string());
            return;
        }

        self.reconciler.create(CommentDraft::new(author, text));
        self.author_input.clear();
        self.text_input.clear();
        self.form_error = None;
    }

    pub fn begin_edit(&mut self, entry: &CachedComment) {
        self.editing = EditDraft::for_entry(entry);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn handle_save_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };

        let patch = edit.patch();
        if patch.is_empty() {
            tracing::debug!("Edit of {} changed nothing", edit.id);
            return;
        }
        self.reconciler.update(&edit.id, patch);
    }

    pub fn handle_delete(&mut self, id: &DurableId) {
        if self.editing.as_ref().is_some_and(|edit| &edit.id == id) {
            self.editing = None;
        }
        self.reconciler.delete(id);
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.unmount();
    }
}
