//! Domain types shared across the curio client layer.
//!
//! Defines the read projection ([`Work`]), the write intents
//! ([`WorkCreate`], [`WorkEdit`]) and their embedded value types
//! ([`AuthorCreate`], [`Tag`]), plus the typed entity ids. All models are
//! plain serde structs matching the backend's wire shapes; the
//! authoritative copies live behind the remote gateway.

pub mod error;
pub mod ids;
pub mod tag;
pub mod work;

pub use error::CoreError;
pub use ids::{parse_work_id, AuthorId, TagId, WorkId};
pub use tag::{normalize_tags, Tag};
pub use work::{AuthorCreate, Work, WorkCreate, WorkEdit};
