// Public API exports
pub mod app;
pub mod assist;
pub mod listing;
pub mod pinmap;
pub mod profile;
pub mod session;

// Re-export main types for convenience
pub use app::{
    App, AppError, Application, ApplicationStatus, ListingDraft, Notice, NoticeKind, Tab, ViewMode,
};

pub use listing::{search, Category, Listing, ListingStatus, MarkerGlyph, Shift};

pub use pinmap::{
    cluster, cluster_with, position_of, Cluster, Pin, PinKeying, PinLayout, Position, ZoomLevel,
};

pub use assist::{AssistClient, AssistError, MAX_RECOMMENDATIONS};

pub use profile::{CandidateProfile, ExperienceEntry, Visibility};

pub use session::{Role, SessionStore};
