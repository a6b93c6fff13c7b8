//! Helpers for turning files found under the site root into cacheable URLs.

mod url;

pub use url::{make_asset_url, relative_key};
