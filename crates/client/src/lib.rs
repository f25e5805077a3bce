//! Client layer of the curio archive.
//!
//! [`SearchController`] keeps a user-editable query synchronized with
//! asynchronous backend lookups, reconciling out-of-order completions so
//! the visible result set always belongs to the latest issued query.
//! [`RecordLoader`] is the one-shot boundary for loading and editing a
//! single work, translating gateway failures into status-coded errors a
//! routing layer can surface.

pub mod error;
pub mod events;
pub mod record;
pub mod search;

pub use error::LoadError;
pub use events::SearchEvent;
pub use record::RecordLoader;
pub use search::SearchController;
