//! Top-level coordinator. All the state the original shell kept ambient
//! (auth flag, role, active tab, search text, zoom) lives here explicitly
//! and every mutation goes through a method.

mod notify;

pub use notify::{Notice, NoticeKind};


use anyhow::Result;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::assist::{self, AssistClient};
use crate::listing::{search, Category, Listing, ListingStatus, Shift};
use crate::pinmap::{cluster_with, PinKeying, PinLayout, ZoomLevel};
use crate::session::{Role, SessionStore};

/// Navigation surfaces available in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Map,
    List,
    Profile,
    Employer,
    Applications,
    Candidates,
}

/// How the browse surface renders listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Map,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A candidate's application to one listing.
#[derive(Debug, Clone)]
pub struct Application {
    pub id: Uuid,
    pub listing_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Employer-side form data for a new posting.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub organization: String,
    pub category: Category,
    /// Absent means "Negotiable".
    pub salary: Option<String>,
    pub shift: Shift,
    pub address: String,
    pub description: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("already applied to listing {0}")]
    AlreadyApplied(String),

    #[error("unknown listing {0}")]
    UnknownListing(String),
}

/// The marketplace shell: listings, session, and all UI-facing state.
pub struct App {
    session: SessionStore,
    listings: Vec<Listing>,
    zoom: ZoomLevel,
    keying: PinKeying,
    search_query: String,
    authenticated: bool,
    role: Role,
    active_tab: Tab,
    view_mode: ViewMode,
    applications: Vec<Application>,
    saved_ids: Vec<String>,
    notices: Vec<Notice>,
}

impl App {
    pub fn new(session: SessionStore, listings: Vec<Listing>) -> Self {
        Self {
            session,
            listings,
            zoom: ZoomLevel::default(),
            keying: PinKeying::default(),
            search_query: String::new(),
            authenticated: false,
            role: Role::Candidate,
            active_tab: Tab::Map,
            view_mode: ViewMode::Map,
            applications: Vec::new(),
            saved_ids: Vec::new(),
            notices: Vec::new(),
        }
    }

    // --- session -----------------------------------------------------

    /// Pick up a previously begun session from the store, if any.
    pub fn restore_session(&mut self) -> Result<()> {
        if let Some(role) = self.session.active_role()? {
            self.role = role;
            self.authenticated = true;
            self.sync_tab();
        }
        Ok(())
    }

    pub fn login(&mut self, role: Role) -> Result<()> {
        self.role = role;
        self.authenticated = true;
        self.session.begin_session(role)?;
        self.sync_tab();
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.authenticated = false;
        self.session.end_session()?;
        self.notices.clear();
        self.active_tab = Tab::Map;
        Ok(())
    }

    /// Switch role in place, keeping the session alive and pulling the
    /// active tab back onto a surface the new role can see.
    pub fn switch_role(&mut self, role: Role) -> Result<()> {
        self.role = role;
        if self.authenticated {
            self.session.set_role(role)?;
        }
        self.sync_tab();
        Ok(())
    }

    fn sync_tab(&mut self) {
        if !self.authenticated {
            return;
        }
        match self.role {
            Role::Employer => {
                if matches!(self.active_tab, Tab::Map | Tab::List | Tab::Applications) {
                    self.active_tab = Tab::Employer;
                }
            }
            Role::Candidate => {
                if matches!(self.active_tab, Tab::Employer | Tab::Candidates) {
                    self.active_tab = Tab::Map;
                }
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // --- navigation --------------------------------------------------

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // --- browse ------------------------------------------------------

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Listings matching the current search query, input order preserved.
    pub fn visible_listings(&self) -> Vec<&Listing> {
        search(&self.listings, &self.search_query)
    }

    /// Map layout for the visible listings at the current zoom.
    pub fn layout(&self) -> PinLayout<'_> {
        let visible = self.visible_listings();
        cluster_with(&visible, self.zoom, self.keying)
    }

    pub fn set_pin_keying(&mut self, keying: PinKeying) {
        self.keying = keying;
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    /// Clicking a cluster zooms one step in. No centering or panning.
    pub fn select_cluster(&mut self) {
        self.zoom_in();
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn listing(&self, listing_id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == listing_id)
    }

    // --- applications ------------------------------------------------

    /// Apply to a listing. One application per listing.
    pub fn apply(&mut self, listing_id: &str) -> Result<Uuid, AppError> {
        if self.listing(listing_id).is_none() {
            return Err(AppError::UnknownListing(listing_id.to_string()));
        }
        if self.applications.iter().any(|a| a.listing_id == listing_id) {
            return Err(AppError::AlreadyApplied(listing_id.to_string()));
        }

        let application = Application {
            id: Uuid::new_v4(),
            listing_id: listing_id.to_string(),
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };
        let id = application.id;
        self.applications.push(application);
        Ok(id)
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// Employer view: applications received for one posting.
    pub fn applications_for(&self, listing_id: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|a| a.listing_id == listing_id)
            .collect()
    }

    pub fn has_applied(&self, listing_id: &str) -> bool {
        self.applications.iter().any(|a| a.listing_id == listing_id)
    }

    // --- saved listings ----------------------------------------------

    pub fn toggle_save(&mut self, listing_id: &str) {
        if let Some(pos) = self.saved_ids.iter().position(|id| id == listing_id) {
            self.saved_ids.remove(pos);
        } else {
            self.saved_ids.push(listing_id.to_string());
        }
    }

    pub fn is_saved(&self, listing_id: &str) -> bool {
        self.saved_ids.iter().any(|id| id == listing_id)
    }

    pub fn saved_ids(&self) -> &[String] {
        &self.saved_ids
    }

    // --- employer portal ---------------------------------------------

    /// Publish a new posting. New listings go to the front of the feed.
    pub fn post_listing(&mut self, draft: ListingDraft) -> String {
        let listing = Listing {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            organization: draft.organization,
            category: draft.category,
            salary: draft.salary.unwrap_or_else(|| "Negotiable".to_string()),
            shift: draft.shift,
            distance_km: 0.0,
            address: draft.address,
            description: draft.description,
            requirements: draft.requirements,
            created_at: Utc::now(),
            status: ListingStatus::Open,
        };
        let id = listing.id.clone();
        self.listings.insert(0, listing);
        id
    }

    pub fn set_listing_status(
        &mut self,
        listing_id: &str,
        status: ListingStatus,
    ) -> Result<(), AppError> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == listing_id)
            .ok_or_else(|| AppError::UnknownListing(listing_id.to_string()))?;
        listing.status = status;
        Ok(())
    }

    // --- notifications -----------------------------------------------

    /// Push an AI-worded match alert for the first visible listing.
    ///
    /// Only fires for an authenticated candidate with a stored profile
    /// and at least one listing. Assist failures degrade to fixed copy.
    pub fn push_match_alert(&mut self, client: &AssistClient) -> Result<Option<&Notice>> {
        if !self.authenticated || self.role != Role::Candidate {
            return Ok(None);
        }
        let Some(profile) = self.session.load_profile()? else {
            return Ok(None);
        };
        let Some(listing) = self.listings.first() else {
            return Ok(None);
        };

        let message = assist::match_alert_or_fallback(client, &profile, listing);
        self.notices.push(Notice::job_alert(message, &listing.id));
        Ok(self.notices.last())
    }

    /// Employer-side notice that a posting received an application.
    pub fn push_application_notice(&mut self, listing_id: &str) -> Result<(), AppError> {
        let listing = self
            .listing(listing_id)
            .ok_or_else(|| AppError::UnknownListing(listing_id.to_string()))?;
        let notice = Notice::application_received(&listing.title, listing_id);
        self.notices.push(notice);
        Ok(())
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn unread_count(&self) -> usize {
        self.notices.iter().filter(|n| !n.read).count()
    }

    /// Mark one notice read. Returns false when the id is unknown.
    pub fn mark_read(&mut self, notice_id: Uuid) -> bool {
        match self.notices.iter_mut().find(|n| n.id == notice_id) {
            Some(notice) => {
                notice.read = true;
                true
            }
            None => false,
        }
    }

    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }
}
