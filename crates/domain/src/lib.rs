//! QueryLens Domain - Core types
//!
//! This crate defines the model behind the query parameter editor: parsing
//! a URL into ordered parameters, rebuilding it from edited rows, and
//! highlighting what changed against the baseline.
//! All types here are pure Rust with no I/O dependencies.

pub mod capabilities;
pub mod codec;
pub mod diff;
pub mod error;
pub mod id;
pub mod params;
pub mod settings;
pub mod state;

pub use capabilities::{Capabilities, ClipboardStrategy};
pub use codec::{ParsedUrl, build_url, has_pending_changes, load_url, load_url_checked};
pub use diff::{ParamDiff, PreviewSegment, diff_for_display, preview_text, render_preview};
pub use error::{DomainError, DomainResult};
pub use id::{RowId, generate_id_v7};
pub use params::{Placement, QueryParam, QueryParams, Row, Rows};
pub use settings::{DEFAULT_DEVTOOLS_ENDPOINT, EditorSettings};
pub use state::SessionPhase;
