//! Keyword scoring over the catalog.
//!
//! All three operations are pure functions over borrowed slices: no
//! state, no I/O, and every input produces a result (possibly empty).
//! Substring containment is the whole matching model; there is no
//! tokenization or stemming.

use super::facets::FilterSelection;
use crate::catalog::SubsidyRecord;

/// Filter the catalog by the home-page facet selection.
///
/// A record survives only if it matches every active facet (AND), where
/// matching a facet means any of its keywords appears inside any tag,
/// the category, or the title. With no active facet the whole catalog
/// comes back in its original order.
pub fn filter_by_facets<'a>(
    catalog: &'a [SubsidyRecord],
    selection: &FilterSelection,
) -> Vec<&'a SubsidyRecord> {
    let keyword_sets = selection.active_keyword_sets();
    if keyword_sets.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|record| {
            keyword_sets
                .iter()
                .all(|keywords| facet_matches(record, keywords))
        })
        .collect()
}

fn facet_matches(record: &SubsidyRecord, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        record.tags.iter().any(|tag| tag.contains(keyword))
            || record.category.contains(keyword)
            || record.title.contains(keyword)
    })
}

/// Rank the catalog against a flattened quiz keyword pool.
///
/// Each pool entry containing a match in the record's searchable text
/// scores one point; pool duplicates score independently. Records with
/// zero score drop out, the rest sort by score descending with catalog
/// order breaking ties. An empty pool falls back to the whole catalog.
pub fn match_by_keywords<'a>(
    catalog: &'a [SubsidyRecord],
    pool: &[&str],
) -> Vec<&'a SubsidyRecord> {
    if pool.is_empty() {
        return catalog.iter().collect();
    }

    let mut scored: Vec<(&SubsidyRecord, usize)> = catalog
        .iter()
        .filter_map(|record| {
            let blob = record.searchable_text();
            let score = pool
                .iter()
                .filter(|keyword| !keyword.is_empty() && blob.contains(**keyword))
                .count();
            (score > 0).then_some((record, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(record, _)| record).collect()
}

/// Fields the related-item ranking reads, shared by subsidies and posts.
pub trait RelatedContent {
    fn id(&self) -> &str;
    fn category(&self) -> &str;
    fn tags(&self) -> &[String];
}

/// Pick up to `limit` siblings for `current`, best scored first.
///
/// Category equality is worth 3 points and each shared tag 2. The slots
/// always fill up to `limit` when candidates exist, even at score zero;
/// `current` itself is never returned.
pub fn related_items<'a, T: RelatedContent>(
    catalog: &'a [T],
    current: &T,
    limit: usize,
) -> Vec<&'a T> {
    let mut scored: Vec<(&T, u32)> = catalog
        .iter()
        .filter(|candidate| candidate.id() != current.id())
        .map(|candidate| (candidate, relatedness(candidate, current)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(candidate, _)| candidate)
        .collect()
}

fn relatedness<T: RelatedContent>(candidate: &T, current: &T) -> u32 {
    let mut score = 0;
    if candidate.category() == current.category() {
        score += 3;
    }
    let shared_tags = candidate
        .tags()
        .iter()
        .filter(|tag| current.tags().contains(tag))
        .count() as u32;
    score + shared_tags * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::facets::{AgeBand, CurrentStatus, IncomeBand};

    fn record(id: &str, category: &str, tags: &[&str]) -> SubsidyRecord {
        SubsidyRecord {
            id: id.to_string(),
            title: format!("{id} 지원사업"),
            category: category.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            summary: String::new(),
            target_text: String::new(),
            amount_text: String::new(),
            official_link: "https://www.gov.kr".to_string(),
        }
    }

    #[test]
    fn and_semantics_across_active_facets() {
        let catalog = vec![
            record("r1", "청년", &["청년"]),
            record("r2", "노인", &["노인"]),
        ];

        let both = FilterSelection {
            age: Some(AgeBand::Youth),
            status: Some(CurrentStatus::Worker),
            income: None,
        };
        assert!(filter_by_facets(&catalog, &both).is_empty());

        let age_only = FilterSelection {
            age: Some(AgeBand::Youth),
            ..FilterSelection::default()
        };
        let matched = filter_by_facets(&catalog, &age_only);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "r1");
    }

    #[test]
    fn facet_keywords_search_tags_category_and_title_only() {
        let mut hidden = record("hidden", "기타", &["복지"]);
        hidden.target_text = "저소득 가구 대상".to_string();

        let selection = FilterSelection {
            income: Some(IncomeBand::LowIncome),
            ..FilterSelection::default()
        };
        // "저소득" only occurs in target_text, which this path ignores.
        assert!(filter_by_facets(&[hidden], &selection).is_empty());
    }

    #[test]
    fn keyword_pool_scores_duplicates_independently() {
        let mut a = record("a", "청년", &[]);
        a.summary = "근로자 지원".to_string();
        let b = record("b", "노인", &[]);

        let pool = vec!["근로자", "근로자"];
        let catalog = [a, b];
        let ranked = match_by_keywords(&catalog, &pool);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "a");
    }

    #[test]
    fn keyword_ranking_is_stable_on_ties() {
        let mut first = record("first", "청년", &[]);
        first.summary = "취업 지원".to_string();
        let mut second = record("second", "청년", &[]);
        second.summary = "취업 장려".to_string();

        let catalog = [first, second];
        let ranked = match_by_keywords(&catalog, &["취업"]);
        let ids: Vec<&str> = ranked.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn empty_keywords_in_pool_are_ignored() {
        let catalog = vec![record("a", "청년", &[])];
        assert!(match_by_keywords(&catalog, &[""]).is_empty());
    }

    #[test]
    fn related_items_scoring_example() {
        let catalog = vec![
            record("a", "청년", &["장학금", "대출"]),
            record("b", "청년", &["대출"]),
            record("c", "노인", &["장학금"]),
        ];

        let related = related_items(&catalog, &catalog[0], 2);
        let ids: Vec<&str> = related.iter().map(|record| record.id.as_str()).collect();
        // b: 3 (category) + 2 (shared "대출") = 5; c: 2 (shared "장학금").
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn related_items_fill_up_to_limit_with_zero_scores() {
        let catalog = vec![
            record("a", "청년", &[]),
            record("b", "노인", &[]),
            record("c", "육아", &[]),
        ];

        let related = related_items(&catalog, &catalog[0], 3);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|record| record.id != "a"));
    }
}
