//! Single-threaded, depth-first directory walk that is the sole producer
//! into the worker pool's work queue.

mod walker;

pub use walker::{enumerate, EnumeratedFile};
