use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A government subsidy program as presented on the site.
///
/// Records are immutable once loaded; `tags` keeps dataset order because
/// the tag chips render in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub target_text: String,
    pub amount_text: String,
    pub official_link: String,
}

impl SubsidyRecord {
    /// Single blob searched by the quiz matcher. Wider than the facet
    /// filter surface: includes target and summary text.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.tags.len() + 4);
        parts.push(&self.title);
        parts.push(&self.category);
        parts.extend(self.tags.iter().map(String::as_str));
        parts.push(&self.target_text);
        parts.push(&self.summary);
        parts.join(" ")
    }
}

/// Editorial guide article with ordered content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub content: Vec<ContentBlock>,
    #[serde(rename = "publishedAt")]
    pub published_at: NaiveDate,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
}

/// One block of article body text. `Section` blocks may point at a
/// subsidy record; a dangling id renders as plain text downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Intro {
        text: String,
    },
    Section {
        heading: String,
        text: String,
        #[serde(
            rename = "relatedSubsidy",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        related_subsidy: Option<String>,
    },
    Conclusion {
        text: String,
    },
}

impl ContentBlock {
    pub fn related_subsidy(&self) -> Option<&str> {
        match self {
            ContentBlock::Section {
                related_subsidy, ..
            } => related_subsidy.as_deref(),
            _ => None,
        }
    }
}

/// Headline scraped by the news crawler for the rolling banner.
///
/// `published` keeps the feed's original timestamp string untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn searchable_text_covers_every_matchable_field() {
        let record = SubsidyRecord {
            id: "youth-housing".to_string(),
            title: "청년 월세 지원".to_string(),
            category: "청년".to_string(),
            tags: vec!["월세".to_string(), "주거".to_string()],
            summary: "무주택 청년의 월세 부담을 덜어주는 사업".to_string(),
            target_text: "만19-34세 무주택 청년".to_string(),
            amount_text: "월 최대 20만원".to_string(),
            official_link: "https://www.gov.kr".to_string(),
        };

        let blob = record.searchable_text();
        assert!(blob.contains("청년 월세 지원"));
        assert!(blob.contains("주거"));
        assert!(blob.contains("만19-34세"));
        assert!(blob.contains("부담을 덜어주는"));
        // Amount text is display-only and never searched.
        assert!(!blob.contains("20만원"));
    }

    #[test]
    fn content_blocks_round_trip_from_dataset_shape() {
        let raw = r#"[
            { "type": "intro", "text": "들어가며" },
            {
                "type": "section",
                "heading": "신청 자격",
                "text": "자격 요건을 확인하세요.",
                "relatedSubsidy": "youth-housing"
            },
            { "type": "conclusion", "text": "마무리" }
        ]"#;

        let blocks: Vec<ContentBlock> = serde_json::from_str(raw).expect("blocks parse");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].related_subsidy(), None);
        assert_eq!(blocks[1].related_subsidy(), Some("youth-housing"));
        assert!(matches!(blocks[2], ContentBlock::Conclusion { .. }));
    }

    #[test]
    fn section_without_reference_parses() {
        let raw = r#"{ "type": "section", "heading": "개요", "text": "본문" }"#;
        let block: ContentBlock = serde_json::from_str(raw).expect("section parses");
        assert_eq!(block.related_subsidy(), None);
    }

    #[test]
    fn news_sentiment_uses_crawler_labels() {
        let raw = r#"{
            "title": "정부, 청년 지원 확대 발표",
            "link": "https://news.example.com/1",
            "published": "Mon, 13 Jan 2026 09:00:00 +0900",
            "summary": "지원 대상이 확대됩니다.",
            "sentiment": "positive"
        }"#;

        let item: NewsItem = serde_json::from_str(raw).expect("news item parses");
        assert_eq!(item.sentiment, Sentiment::Positive);
    }
}
