//! Link manager client state.
//!
//! An explicit state container with pure transition functions,
//! decoupled from rendering. Every UI-observable transition of the
//! single-page manager (load, submit, edit, delete confirmation,
//! search, expand/collapse) is a method here so it can be tested
//! without a network or a view layer.

use url::Url;

use crate::db::Link;

/// Collapsed descriptions longer than this are visually truncated
/// and get a toggle affordance.
pub const DESCRIPTION_PREVIEW_LIMIT: usize = 120;

/// The add/edit form's field values.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct LinkForm {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl LinkForm {
    /// Populate the form from an existing record.
    pub fn from_link(link: &Link) -> Self {
        Self {
            title: link.title.clone().unwrap_or_default(),
            url: link.url.clone(),
            description: link.description.clone().unwrap_or_default(),
        }
    }

    /// Presence check: title and url must be non-whitespace.
    /// The only validation in the system.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// Local UI state for the link manager.
#[derive(Debug, Default)]
pub struct LinkManagerState {
    /// In-memory list of links, as last confirmed by the server.
    pub links: Vec<Link>,
    /// True while the initial list fetch is in flight.
    pub loading: bool,
    /// User-visible load error, if the last fetch failed.
    pub error: Option<String>,
    /// Search/filter text.
    pub search: String,
    /// Add/edit form fields.
    pub form: LinkForm,
    /// Whether the add/edit modal is open.
    pub form_open: bool,
    /// Id of the record being edited, if any.
    pub editing: Option<String>,
    /// Id of the record pending delete confirmation, if any.
    pub delete_target: Option<String>,
    /// Id of the card expanded for full description view, if any.
    pub expanded: Option<String>,
}

impl LinkManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn load_succeeded(&mut self, links: Vec<Link>) {
        self.links = links;
        self.error = None;
        self.loading = false;
    }

    /// A failed load leaves the list empty and surfaces an error string.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.links.clear();
        self.error = Some(message.into());
        self.loading = false;
    }

    // ------------------------------------------------------------------
    // Form / submit
    // ------------------------------------------------------------------

    /// Open the modal with a blank form.
    pub fn open_form(&mut self) {
        self.reset_form();
        self.form_open = true;
    }

    /// Clear fields, clear the edit target, close the modal, and
    /// collapse any expanded card.
    pub fn reset_form(&mut self) {
        self.form = LinkForm::default();
        self.editing = None;
        self.form_open = false;
        self.expanded = None;
    }

    /// Populate the form from a record and mark it the edit target.
    pub fn begin_edit(&mut self, link: &Link) {
        self.form = LinkForm::from_link(link);
        self.editing = Some(link.id.clone());
        self.form_open = true;
        self.expanded = None;
    }

    /// Append a newly created record (confirmed by the server).
    pub fn apply_created(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Replace the matching record in place by id.
    pub fn apply_updated(&mut self, link: Link) {
        if let Some(existing) = self.links.iter_mut().find(|l| l.id == link.id) {
            *existing = link;
        }
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Mark a record as pending delete (does not delete yet).
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.delete_target = Some(id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    /// Remove a deleted record, collapsing it if it was expanded.
    pub fn apply_deleted(&mut self, id: &str) {
        self.links.retain(|l| l.id != id);
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        }
    }

    /// Always called after a confirm-delete attempt, success or not.
    pub fn clear_delete_target(&mut self) {
        self.delete_target = None;
    }

    // ------------------------------------------------------------------
    // Search / expand
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Pure local filter: a link is included iff the trimmed query is
    /// empty or a case-insensitive substring of its title, description,
    /// or url. No request is issued.
    pub fn filtered_links(&self) -> Vec<&Link> {
        let query = self.search.trim().to_lowercase();
        self.links
            .iter()
            .filter(|link| {
                query.is_empty()
                    || link
                        .title
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
                    || link
                        .description
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
                    || link.url.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Toggle the expanded card; only one card may be expanded at a time.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}

/// Whether a collapsed description needs a toggle affordance.
pub fn needs_truncation(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_PREVIEW_LIMIT
}

/// Derive a favicon-service URL from a link's url.
///
/// Uses the url's origin as the domain parameter; if parsing fails,
/// falls back to passing the raw string.
pub fn favicon_url(raw: &str) -> String {
    let domain = match Url::parse(raw) {
        Ok(parsed) => parsed.origin().ascii_serialization(),
        Err(_) => raw.to_string(),
    };
    format!("https://www.google.com/s2/favicons?sz=64&domain={}", domain)
}
