pub mod site;

pub use crate::network::client::SiteClient;
pub use site::{ContentFetcher, Indexer, Site};
