// src/params.rs
use std::path::PathBuf;

/// Mobile rendition of the IRCC page. Fewer layout tables than the
/// desktop one, but the extraction does not rely on that.
pub const IRCC_PAGE_URL: &str =
    "https://www.bnro.ro/Indicele-de-referin%C8%9Ba-pentru-creditele-consumatorilor--19492-Mobile.aspx";

pub const DEFAULT_OUT_FILE: &str = "./ircc.json";

/// The site occasionally serves an empty shell to clients it does not
/// recognize as browsers.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Params {
    pub out: PathBuf, // output JSON file
}

impl Params {
    pub fn new() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
