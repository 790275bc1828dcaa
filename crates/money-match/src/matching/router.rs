use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::engine::{filter_by_facets, match_by_keywords};
use super::facets::FilterSelection;
use super::quiz::QuizAnswers;
use crate::catalog::{BlogPost, Catalog, NewsItem, SubsidyRecord};

/// Router builder exposing the catalog and matching endpoints.
pub fn site_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/v1/subsidies", get(list_subsidies_handler))
        .route("/api/v1/subsidies/:subsidy_id", get(subsidy_detail_handler))
        .route("/api/v1/quiz/match", post(quiz_match_handler))
        .route("/api/v1/posts", get(list_posts_handler))
        .route("/api/v1/posts/:post_id", get(post_detail_handler))
        .route("/api/v1/news", get(news_handler))
        .with_state(catalog)
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchListResponse {
    pub(crate) total: usize,
    pub(crate) items: Vec<SubsidyRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubsidyDetailResponse {
    pub(crate) subsidy: SubsidyRecord,
    pub(crate) related: Vec<SubsidyRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostListResponse {
    pub(crate) total: usize,
    pub(crate) items: Vec<BlogPost>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostDetailResponse {
    pub(crate) post: BlogPost,
    pub(crate) related: Vec<BlogPost>,
}

pub(crate) async fn list_subsidies_handler(
    State(catalog): State<Arc<Catalog>>,
    Query(selection): Query<FilterSelection>,
) -> Json<MatchListResponse> {
    let matched = filter_by_facets(catalog.subsidies(), &selection);
    Json(MatchListResponse {
        total: matched.len(),
        items: matched.into_iter().cloned().collect(),
    })
}

pub(crate) async fn subsidy_detail_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(subsidy_id): Path<String>,
) -> Response {
    match catalog.subsidy(&subsidy_id) {
        Some(subsidy) => {
            let related = catalog
                .related_subsidies(subsidy)
                .into_iter()
                .cloned()
                .collect();
            let payload = SubsidyDetailResponse {
                subsidy: subsidy.clone(),
                related,
            };
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => not_found("subsidy not found"),
    }
}

pub(crate) async fn quiz_match_handler(
    State(catalog): State<Arc<Catalog>>,
    Json(answers): Json<QuizAnswers>,
) -> Json<MatchListResponse> {
    let pool = answers.keyword_pool();
    let matched = match_by_keywords(catalog.subsidies(), &pool);
    Json(MatchListResponse {
        total: matched.len(),
        items: matched.into_iter().cloned().collect(),
    })
}

pub(crate) async fn list_posts_handler(
    State(catalog): State<Arc<Catalog>>,
) -> Json<PostListResponse> {
    let ordered = catalog.posts_newest_first();
    Json(PostListResponse {
        total: ordered.len(),
        items: ordered.into_iter().cloned().collect(),
    })
}

pub(crate) async fn post_detail_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(post_id): Path<String>,
) -> Response {
    match catalog.post(&post_id) {
        Some(post) => {
            let related = catalog.related_posts(post).into_iter().cloned().collect();
            let payload = PostDetailResponse {
                post: post.clone(),
                related,
            };
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => not_found("post not found"),
    }
}

pub(crate) async fn news_handler(State(catalog): State<Arc<Catalog>>) -> Json<Vec<NewsItem>> {
    Json(catalog.news().to_vec())
}

fn not_found(message: &str) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::facets::{AgeBand, CurrentStatus};
    use crate::matching::quiz::InterestArea;

    fn record(id: &str, category: &str, tags: &[&str], summary: &str) -> SubsidyRecord {
        SubsidyRecord {
            id: id.to_string(),
            title: format!("{id} 지원"),
            category: category.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            summary: summary.to_string(),
            target_text: String::new(),
            amount_text: String::new(),
            official_link: "https://www.gov.kr".to_string(),
        }
    }

    fn sample_catalog() -> Arc<Catalog> {
        let subsidies = vec![
            record("youth-rent", "청년", &["월세", "주거"], "청년 월세 지원"),
            record("senior-care", "노인", &["돌봄"], "어르신 돌봄 서비스"),
            record("youth-saving", "청년", &["저축", "주거"], "자산형성 지원"),
        ];
        let catalog =
            Catalog::from_parts(subsidies, Vec::new(), Vec::new()).expect("catalog builds");
        Arc::new(catalog)
    }

    #[tokio::test]
    async fn list_endpoint_filters_by_selection() {
        let catalog = sample_catalog();
        let selection = FilterSelection {
            age: Some(AgeBand::Youth),
            ..FilterSelection::default()
        };

        let Json(body) = list_subsidies_handler(State(catalog), Query(selection)).await;
        assert_eq!(body.total, 2);
        assert!(body.items.iter().all(|item| item.category == "청년"));
    }

    #[tokio::test]
    async fn list_endpoint_without_selection_returns_everything() {
        let catalog = sample_catalog();
        let Json(body) =
            list_subsidies_handler(State(catalog), Query(FilterSelection::default())).await;
        assert_eq!(body.total, 3);
        assert_eq!(body.items[0].id, "youth-rent");
    }

    #[tokio::test]
    async fn detail_endpoint_includes_related_records() {
        let catalog = sample_catalog();
        let response =
            subsidy_detail_handler(State(catalog), Path("youth-rent".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_subsidy_is_a_404() {
        let catalog = sample_catalog();
        let response = subsidy_detail_handler(State(catalog), Path("nope".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn quiz_endpoint_ranks_matches() {
        let catalog = sample_catalog();
        let answers = QuizAnswers {
            interest: vec![InterestArea::Housing],
            ..QuizAnswers::default()
        };

        let Json(body) = quiz_match_handler(State(catalog), Json(answers)).await;
        // "주거" and "월세" both hit youth-rent; youth-saving only shares "주거".
        assert_eq!(body.total, 2);
        assert_eq!(body.items[0].id, "youth-rent");
        assert_eq!(body.items[1].id, "youth-saving");
    }

    #[tokio::test]
    async fn empty_quiz_answers_fall_back_to_full_catalog() {
        let catalog = sample_catalog();
        let Json(body) = quiz_match_handler(State(catalog), Json(QuizAnswers::default())).await;
        assert_eq!(body.total, 3);
    }

    #[tokio::test]
    async fn filter_selection_that_matches_nothing_is_empty_not_an_error() {
        let catalog = sample_catalog();
        let selection = FilterSelection {
            age: Some(AgeBand::Senior),
            status: Some(CurrentStatus::Jobseeker),
            ..FilterSelection::default()
        };

        let Json(body) = list_subsidies_handler(State(catalog), Query(selection)).await;
        assert_eq!(body.total, 0);
    }
}
