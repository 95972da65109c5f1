// src/specs/mod.rs
//! # Page scraping specs
//!
//! Page-specific extraction lives here. A spec knows *where the data sits
//! in the HTML* and *how to pull it out tolerantly*; it never fetches,
//! caches or persists anything. That split keeps every spec testable
//! offline against captured fixtures.
//!
//! Conventions:
//! - case-insensitive tag detection via `core::html`, no full-document
//!   regexes;
//! - per-row failures are warnings, never fatal; only "nothing on the
//!   page looks like our data at all" aborts;
//! - heuristics are injectable (see [`ircc::TableSelector`]) so they can
//!   be swapped and unit-tested without a live page.
//!
//! The upstream page has changed shape repeatedly (a fixed table at
//! first, later a dynamically located content block). Treat a spec as a
//! best-effort adapter behind a stable interface, not a contract with
//! the site.

pub mod ircc;
