use serde::{Deserialize, Serialize};

/// Age bracket facet on the home-page filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Youth,
    Middle,
    Senior,
}

impl AgeBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Youth, Self::Middle, Self::Senior]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Youth => "청년 (19~34)",
            Self::Middle => "중장년",
            Self::Senior => "노인 (65+)",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Youth => &["청년", "만19-34세", "19~34"],
            Self::Middle => &["중장년", "중년", "장년"],
            Self::Senior => &["노인", "만65세", "어르신"],
        }
    }
}

/// Current-situation facet (study/work/parenting) on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentStatus {
    Jobseeker,
    Worker,
    Parent,
}

impl CurrentStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Jobseeker, Self::Worker, Self::Parent]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Jobseeker => "학생/구직자",
            Self::Worker => "직장인/소상공인",
            Self::Parent => "임신/육아",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Jobseeker => &["학생", "구직", "취업", "실업"],
            Self::Worker => &["직장인", "근로자", "소상공인", "자영업", "중소기업"],
            Self::Parent => &["임신", "육아", "출산", "부모", "아동", "난임"],
        }
    }
}

/// Income facet. `All` is the "not sure" option: it carries no keywords
/// and therefore never constrains the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBand {
    All,
    LowIncome,
}

impl IncomeBand {
    pub const fn ordered() -> [Self; 2] {
        [Self::All, Self::LowIncome]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "잘 모름 (전체)",
            Self::LowIncome => "저소득층",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::LowIncome => &["저소득", "기초수급", "차상위", "중위소득"],
        }
    }
}

/// The visitor's current home-page filter picks. Every field optional;
/// an empty selection means "show everything".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CurrentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<IncomeBand>,
}

impl FilterSelection {
    /// Keyword sets for every facet that actually constrains the result.
    /// Options with empty keyword sets (income `All`) never appear here.
    pub fn active_keyword_sets(&self) -> Vec<&'static [&'static str]> {
        let mut sets = Vec::new();
        if let Some(age) = self.age {
            push_active(&mut sets, age.keywords());
        }
        if let Some(status) = self.status {
            push_active(&mut sets, status.keywords());
        }
        if let Some(income) = self.income {
            push_active(&mut sets, income.keywords());
        }
        sets
    }
}

fn push_active(sets: &mut Vec<&'static [&'static str]>, keywords: &'static [&'static str]) {
    if !keywords.is_empty() {
        sets.push(keywords);
    }
}
