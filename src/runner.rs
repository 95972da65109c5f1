// src/runner.rs
//
// The whole pipeline, one straight line:
// fetch → extract → load prior → merge → save.

use std::path::Path;

use tracing::info;

use crate::core::net::Session;
use crate::error::ScrapeError;
use crate::params::{Params, IRCC_PAGE_URL};
use crate::specs::ircc;
use crate::store;

pub fn run(params: &Params) -> Result<(), ScrapeError> {
    let session = Session::new()?;
    let page = session.get(IRCC_PAGE_URL)?;
    process(&page, &params.out)?;
    Ok(())
}

/// Everything after the fetch. Extraction failure aborts before any
/// file is touched; the prior dataset survives a broken page untouched.
pub fn process(page: &str, out: &Path) -> Result<usize, ScrapeError> {
    let fresh = ircc::extract(page)?;
    info!(scraped = fresh.len(), "scraped rate records");

    let existing = store::load(out);
    let (merged, added) = store::merge(existing, fresh);
    store::save(out, &merged)?;

    info!(
        added,
        total = merged.len(),
        file = %out.display(),
        "dataset updated"
    );
    Ok(added)
}
