//! trigrid-engine: grid state engine for incident triage.
//!
//! Owns the record and selection stores plus the filter → sort → paginate
//! pipeline a rendering layer subscribes to. Rendering, dialog chrome, and
//! transports stay with the embedder.

pub mod column_layout;
pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod pubsub;
pub mod record_store;
pub mod selection;
pub mod sort;
pub mod user_search;

pub use column_layout::{
    default_column_widths, encode_column_widths, restore_column_widths, ColumnWidthLoadOutcome,
    COLUMN_WIDTH_STORAGE_KEY,
};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use filter::{ColumnFilter, FilterSet};
pub use pagination::{PageInfo, Paginator, DEFAULT_PAGE_SIZE};
pub use pipeline::{GridPage, GridPipeline, GridRow};
pub use pubsub::{Callback, Subscribers, SubscriptionId};
pub use record_store::RecordStore;
pub use selection::{SelectionSnapshot, SelectionStore};
pub use sort::SortState;
pub use user_search::{SearchGate, UserSearchModel};

/// Stable crate label used by bootstrap smoke tests.
#[must_use]
pub fn crate_label() -> &'static str {
    "trigrid-engine"
}
