//! "Copied" feedback for the result viewer's copy button.
//!
//! Each copy bumps a generation counter and arms a revert timer for that
//! generation. Only the timer for the latest copy may revert, so copying
//! twice in quick succession keeps the label up for a full window.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

/// How long the "Copied" label stays up.
pub const COPIED_RESET_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    /// Record a successful copy. Returns the generation to pass to `expire`.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Revert the label if no newer copy happened since `generation`.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.copied = false;
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn label(&self) -> &'static str {
        if self.copied { "Copied" } else { "Copy" }
    }
}

/// Somewhere a `CopyFeedback` can be updated in place.
pub trait FeedbackStore {
    /// Run `f` against the feedback. `None` once the owner is disposed.
    fn update_feedback<R>(&self, f: impl FnOnce(&mut CopyFeedback) -> R) -> Option<R>;
}

impl FeedbackStore for RwSignal<CopyFeedback> {
    fn update_feedback<R>(&self, f: impl FnOnce(&mut CopyFeedback) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FeedbackStore for std::cell::RefCell<CopyFeedback> {
    fn update_feedback<R>(&self, f: impl FnOnce(&mut CopyFeedback) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Await `write`, show "Copied", wait out the reset window via `sleep`,
/// then revert unless a newer copy took over.
///
/// # Errors
///
/// Returns the write error untouched; the label is left as it was.
pub async fn copy_and_revert<W, S, F>(feedback: &impl FeedbackStore, write: W, sleep: S) -> Result<(), String>
where
    W: Future<Output = Result<(), String>>,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    write.await?;
    let Some(generation) = feedback.update_feedback(CopyFeedback::mark_copied) else {
        return Ok(());
    };
    sleep(Duration::from_millis(u64::from(COPIED_RESET_MS))).await;
    feedback.update_feedback(|f| f.expire(generation));
    Ok(())
}
