//! Facet configuration, the quiz flow, and the keyword-scoring engine.
//!
//! The engine itself is three pure functions (`filter_by_facets`,
//! `match_by_keywords`, `related_items`); everything else here is the
//! static configuration those functions consume and the HTTP surface
//! that exposes them.

pub mod engine;
pub mod facets;
pub mod quiz;
pub mod router;

pub use engine::{filter_by_facets, match_by_keywords, related_items, RelatedContent};
pub use facets::{AgeBand, CurrentStatus, FilterSelection, IncomeBand};
pub use quiz::{
    AgeGroup, Employment, FamilyStatus, IncomeLevel, InterestArea, QuizAnswers, QuizSelection,
    QuizSession, QuizStep,
};
pub use router::site_router;
