//! Link manager client core.
//!
//! The client is split the way the spec of the UI falls apart
//! naturally: a pure state container ([`state::LinkManagerState`]),
//! a typed HTTP client ([`api::LinkApi`]), and a controller
//! ([`LinkManager`]) that drives the request/reconcile flows and
//! reports outcomes through a fire-and-forget [`Notifier`] sink.
//!
//! The list only changes after a confirmed server response: no
//! optimistic updates, no retries, no request queuing.

pub mod api;
pub mod state;

pub use api::LinkApi;
pub use state::{favicon_url, needs_truncation, LinkForm, LinkManagerState};

use tracing::error;

/// Notification severity, mirroring the toast levels the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Info,
    Warning,
    Error,
}

/// Fire-and-forget notification sink. Rendering is external; the
/// core only calls into it.
pub trait Notifier {
    fn notify(&self, notice: Notice, message: &str);
}

/// Default sink that reports through tracing.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice, message: &str) {
        match notice {
            Notice::Success | Notice::Info => tracing::info!("{}", message),
            Notice::Warning => tracing::warn!("{}", message),
            Notice::Error => tracing::error!("{}", message),
        }
    }
}

/// Controller wiring state, API client, and notification sink.
pub struct LinkManager<N: Notifier> {
    pub state: LinkManagerState,
    api: LinkApi,
    notifier: N,
}

impl LinkManager<TracingNotifier> {
    /// Build a manager pointed at the configured API base URL.
    pub fn from_config() -> Self {
        let config = crate::config();
        Self::new(
            LinkApi::new(config.client.api_base_url.clone()),
            TracingNotifier,
        )
    }
}

impl<N: Notifier> LinkManager<N> {
    pub fn new(api: LinkApi, notifier: N) -> Self {
        Self {
            state: LinkManagerState::new(),
            api,
            notifier,
        }
    }

    /// Fetch the full list, replacing local state on success.
    /// On failure the list is emptied and an error string surfaced.
    pub async fn load(&mut self) {
        self.state.load_started();
        match self.api.list().await {
            Ok(links) => self.state.load_succeeded(links),
            Err(err) => {
                error!(error = %err, "Failed to fetch links");
                self.state
                    .load_failed("Failed to fetch links. Please try again later.");
            }
        }
    }

    /// Submit the form: update when an edit target is set, create
    /// otherwise. An invalid form blocks submission with a warning
    /// and issues no request.
    pub async fn submit(&mut self) {
        if !self.state.form.is_valid() {
            self.notifier.notify(Notice::Warning, "Title & URL are required");
            return;
        }

        match self.state.editing.clone() {
            Some(id) => match self.api.update(&id, &self.state.form).await {
                Ok(link) => {
                    self.state.apply_updated(link);
                    self.state.reset_form();
                    self.notifier.notify(Notice::Success, "Link updated");
                }
                Err(err) => {
                    error!(error = %err, "Failed to update link");
                    self.notifier.notify(Notice::Error, "Failed to save link");
                }
            },
            None => match self.api.create(&self.state.form).await {
                Ok(link) => {
                    self.state.apply_created(link);
                    self.state.reset_form();
                    self.notifier.notify(Notice::Success, "Link added");
                }
                Err(err) => {
                    error!(error = %err, "Failed to create link");
                    self.notifier.notify(Notice::Error, "Failed to save link");
                }
            },
        }
    }

    /// Delete the pending target, if any. The target is cleared
    /// afterward whether the request succeeded or not.
    pub async fn confirm_delete(&mut self) {
        let Some(target) = self.state.delete_target.clone() else {
            return;
        };

        match self.api.delete(&target).await {
            Ok(()) => {
                self.state.apply_deleted(&target);
                self.notifier.notify(Notice::Info, "Link deleted");
            }
            Err(err) => {
                error!(error = %err, "Failed to delete link");
                self.notifier.notify(Notice::Error, "Failed to delete link");
            }
        }

        self.state.clear_delete_target();
    }

    /// Record a click, merging the updated count into local state.
    pub async fn track_click(&mut self, id: &str) {
        match self.api.increment_click(id).await {
            Ok(Some(link)) => self.state.apply_updated(link),
            Ok(None) => {}
            Err(err) => {
                // Click tracking is best-effort; the navigation already happened.
                error!(error = %err, "Failed to update click count");
            }
        }
    }
}
