// Catalogue: immutable assessment records, loaded once at startup.
// The index owns the records for the lifetime of the process; nothing
// downstream ever mutates them.

pub mod handlers;
pub mod index;
pub mod loader;
pub mod models;
