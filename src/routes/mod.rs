//! Request routing.
//!
//! The route table is plain data built once at startup. Dispatch parses the
//! raw request, finds the first entry whose method matches and whose alias
//! set contains the path verbatim, and runs its handler. Everything that does
//! not match, fails to parse, or names a missing file ends on the 404 page.

pub mod pages;
pub mod table;

pub use table::{Handler, RouteEntry, Router};
