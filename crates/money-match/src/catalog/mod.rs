//! Static site content: subsidy records, guide articles, and the news
//! banner feed, loaded wholesale from versioned JSON files.

pub mod domain;
mod store;

pub use domain::{BlogPost, ContentBlock, NewsItem, Sentiment, SubsidyRecord};
pub use store::{Catalog, CatalogError, RELATED_POST_LIMIT, RELATED_SUBSIDY_LIMIT};
