//! Inverted index construction.
//!
//! Consumes the full document set once per rebuild and produces one
//! [`InvertedIndex`] per registered index name, bundled into an immutable
//! [`RelatednessSnapshot`].
//!
//! # Layout
//!
//! ```text
//! RelatednessSnapshot
//! ├── registry        (copy of the index definitions)
//! ├── documents[slot] (id, published, corpus position)
//! └── indices[i]      (aligned with registry order)
//!     └── keyword → {slot, slot, ...}
//! ```

mod inverted;
mod snapshot;

pub use inverted::{InvertedIndex, Postings};
pub use snapshot::{DocEntry, RelatednessSnapshot};
