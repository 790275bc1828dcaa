use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::domain::{BlogPost, NewsItem, SubsidyRecord};
use crate::matching::engine::{related_items, RelatedContent};

/// How many sibling records a subsidy detail page shows.
pub const RELATED_SUBSIDY_LIMIT: usize = 3;
/// How many sibling guides a blog article shows.
pub const RELATED_POST_LIMIT: usize = 2;

const SUBSIDIES_FILE: &str = "subsidies.json";
const POSTS_FILE: &str = "blog-posts.json";
const NEWS_FILE: &str = "news.json";

/// Read-only store for the static site content, loaded once at startup.
#[derive(Debug)]
pub struct Catalog {
    subsidies: Vec<SubsidyRecord>,
    posts: Vec<BlogPost>,
    news: Vec<NewsItem>,
}

impl Catalog {
    /// Load the three dataset files from `dir`.
    ///
    /// `news.json` is a crawler artifact and may be missing; the catalog
    /// then starts with an empty banner. The other two files are required.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let subsidies: Vec<SubsidyRecord> = read_json(&dir.join(SUBSIDIES_FILE))?;
        let posts: Vec<BlogPost> = read_json(&dir.join(POSTS_FILE))?;

        let news_path = dir.join(NEWS_FILE);
        let news: Vec<NewsItem> = if news_path.exists() {
            read_json(&news_path)?
        } else {
            warn!(path = %news_path.display(), "news dataset missing, banner will be empty");
            Vec::new()
        };

        let catalog = Self::from_parts(subsidies, posts, news)?;
        info!(
            subsidies = catalog.subsidies.len(),
            posts = catalog.posts.len(),
            news = catalog.news.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Assemble a catalog from already-deserialized collections,
    /// enforcing id uniqueness per collection.
    pub fn from_parts(
        subsidies: Vec<SubsidyRecord>,
        posts: Vec<BlogPost>,
        news: Vec<NewsItem>,
    ) -> Result<Self, CatalogError> {
        ensure_unique_ids("subsidy", subsidies.iter().map(|record| record.id.as_str()))?;
        ensure_unique_ids("post", posts.iter().map(|post| post.id.as_str()))?;

        for post in &posts {
            for reference in post
                .content
                .iter()
                .filter_map(|block| block.related_subsidy())
            {
                if !subsidies.iter().any(|record| record.id == reference) {
                    warn!(post = %post.id, subsidy = %reference, "content block references unknown subsidy");
                }
            }
        }

        Ok(Self {
            subsidies,
            posts,
            news,
        })
    }

    pub fn subsidies(&self) -> &[SubsidyRecord] {
        &self.subsidies
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Posts for the guide index, most recent first. Ties keep dataset order.
    pub fn posts_newest_first(&self) -> Vec<&BlogPost> {
        let mut ordered: Vec<&BlogPost> = self.posts.iter().collect();
        ordered.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        ordered
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn subsidy(&self, id: &str) -> Option<&SubsidyRecord> {
        self.subsidies.iter().find(|record| record.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn related_subsidies(&self, current: &SubsidyRecord) -> Vec<&SubsidyRecord> {
        related_items(&self.subsidies, current, RELATED_SUBSIDY_LIMIT)
    }

    pub fn related_posts(&self, current: &BlogPost) -> Vec<&BlogPost> {
        related_items(&self.posts, current, RELATED_POST_LIMIT)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Errors raised while loading the static datasets.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

// Related-item scoring reads the same three fields on both content kinds.
impl RelatedContent for SubsidyRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl RelatedContent for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, category: &str, tags: &[&str]) -> SubsidyRecord {
        SubsidyRecord {
            id: id.to_string(),
            title: format!("{id} 지원"),
            category: category.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            summary: String::new(),
            target_text: String::new(),
            amount_text: String::new(),
            official_link: "https://www.gov.kr".to_string(),
        }
    }

    fn post(id: &str, day: u32) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: format!("{id} 가이드"),
            category: "청년".to_string(),
            tags: Vec::new(),
            summary: String::new(),
            content: Vec::new(),
            published_at: NaiveDate::from_ymd_opt(2026, 1, day).expect("valid date"),
            updated_at: NaiveDate::from_ymd_opt(2026, 1, day).expect("valid date"),
        }
    }

    #[test]
    fn duplicate_subsidy_id_is_rejected() {
        let result = Catalog::from_parts(
            vec![record("a", "청년", &[]), record("a", "노인", &[])],
            Vec::new(),
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { kind: "subsidy", .. })
        ));
    }

    #[test]
    fn lookup_misses_return_none() {
        let catalog = Catalog::from_parts(vec![record("a", "청년", &[])], Vec::new(), Vec::new())
            .expect("catalog builds");
        assert!(catalog.subsidy("a").is_some());
        assert!(catalog.subsidy("missing").is_none());
        assert!(catalog.post("missing").is_none());
    }

    #[test]
    fn posts_listed_newest_first() {
        let catalog = Catalog::from_parts(
            Vec::new(),
            vec![post("old", 5), post("new", 20), post("mid", 12)],
            Vec::new(),
        )
        .expect("catalog builds");

        let ordered: Vec<&str> = catalog
            .posts_newest_first()
            .iter()
            .map(|post| post.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["new", "mid", "old"]);
    }

    #[test]
    fn missing_dataset_file_is_a_read_error() {
        let result = Catalog::load(Path::new("/nonexistent/money-match-data"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
