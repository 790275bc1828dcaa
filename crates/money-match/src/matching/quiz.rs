use serde::{Deserialize, Serialize};

/// The five quiz steps in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    Age,
    Employment,
    Family,
    Income,
    Interest,
}

impl QuizStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Age,
            Self::Employment,
            Self::Family,
            Self::Income,
            Self::Interest,
        ]
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::Age => "나이대가 어떻게 되시나요?",
            Self::Employment => "현재 어떤 상황이신가요?",
            Self::Family => "가족 상황을 알려주세요.",
            Self::Income => "소득 수준은 어느 정도인가요?",
            Self::Interest => "관심 있는 분야를 모두 선택하세요. (복수 선택)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Youth,
    Adult,
    Middle,
    Senior,
}

impl AgeGroup {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Youth => "19~34세 (청년)",
            Self::Adult => "35~44세",
            Self::Middle => "45~64세 (중장년)",
            Self::Senior => "65세 이상 (어르신)",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Youth => &["청년", "만19-34세", "만19", "만34", "19~34"],
            Self::Adult => &["근로자", "직장인"],
            Self::Middle => &["중장년", "중년", "장년", "만40", "만45", "만50"],
            Self::Senior => &["노인", "만65세", "어르신"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Employment {
    Jobseeker,
    Worker,
    SelfEmployed,
    Farmer,
}

impl Employment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jobseeker => "학생 / 구직 중",
            Self::Worker => "직장인 (회사원)",
            Self::SelfEmployed => "자영업 / 소상공인",
            Self::Farmer => "농업 / 어업 종사자",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Jobseeker => &["학생", "구직", "취업", "실업", "대학생"],
            Self::Worker => &["직장인", "근로자", "재직자"],
            Self::SelfEmployed => &["소상공인", "자영업", "소기업"],
            Self::Farmer => &["농업인", "어업인", "농어민"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyStatus {
    Single,
    Pregnant,
    Infant,
    None,
}

impl FamilyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "미혼 / 1인 가구",
            Self::Pregnant => "임신 중 / 출산 예정",
            Self::Infant => "영유아 자녀 양육 중",
            Self::None => "기타 (해당 없음)",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Single => &["1인가구", "단독", "청년"],
            Self::Pregnant => &["임신", "출산", "임산부", "난임"],
            Self::Infant => &["0-1세", "아동", "양육", "보육", "영유아", "8세미만"],
            Self::None => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    Low,
    Normal,
    Unknown,
}

impl IncomeLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "저소득 (기초수급 / 차상위)",
            Self::Normal => "일반 소득",
            Self::Unknown => "잘 모르겠음",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["저소득", "기초수급", "차상위", "중위소득", "기초생활"],
            Self::Normal => &[],
            Self::Unknown => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestArea {
    Housing,
    Education,
    Health,
    Finance,
}

impl InterestArea {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Housing => "주거 (전세/월세)",
            Self::Education => "교육 / 훈련",
            Self::Health => "의료 / 건강",
            Self::Finance => "금융 / 자산형성",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Housing => &["전세", "월세", "주거", "청약", "내집마련", "주택"],
            Self::Education => &["교육", "등록금", "훈련", "장학", "자기개발"],
            Self::Health => &["의료", "건강", "수술", "치료", "진료", "검진"],
            Self::Finance => &["금융", "저축", "대출", "자산형성", "장려금"],
        }
    }
}

/// The visitor's picks, one per single-select step plus the multi-select
/// interest list. Session-local and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default)]
    pub age: Option<AgeGroup>,
    #[serde(default)]
    pub employment: Option<Employment>,
    #[serde(default)]
    pub family: Option<FamilyStatus>,
    #[serde(default)]
    pub income: Option<IncomeLevel>,
    #[serde(default)]
    pub interest: Vec<InterestArea>,
}

impl QuizAnswers {
    /// Flatten every answered step's keywords into one pool.
    ///
    /// Duplicates are kept on purpose: a keyword configured under two
    /// steps scores twice when a record's text contains it.
    pub fn keyword_pool(&self) -> Vec<&'static str> {
        let mut pool = Vec::new();
        if let Some(age) = self.age {
            pool.extend_from_slice(age.keywords());
        }
        if let Some(employment) = self.employment {
            pool.extend_from_slice(employment.keywords());
        }
        if let Some(family) = self.family {
            pool.extend_from_slice(family.keywords());
        }
        if let Some(income) = self.income {
            pool.extend_from_slice(income.keywords());
        }
        for interest in &self.interest {
            pool.extend_from_slice(interest.keywords());
        }
        pool
    }
}

/// A single pick within a step, used to drive [`QuizSession::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSelection {
    Age(AgeGroup),
    Employment(Employment),
    Family(FamilyStatus),
    Income(IncomeLevel),
    Interest(InterestArea),
}

/// Transient quiz walkthrough state: the current step and the answers so
/// far. Created empty, mutated by user interaction, discarded on reset.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    step: usize,
    answers: QuizAnswers,
    completed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> QuizStep {
        QuizStep::ordered()[self.step]
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// (current 1-based step, total steps) for the progress bar.
    pub fn progress(&self) -> (usize, usize) {
        (self.step + 1, QuizStep::ordered().len())
    }

    /// Record a pick. Single-select steps overwrite the previous answer;
    /// interest toggles membership.
    pub fn select(&mut self, selection: QuizSelection) {
        match selection {
            QuizSelection::Age(value) => self.answers.age = Some(value),
            QuizSelection::Employment(value) => self.answers.employment = Some(value),
            QuizSelection::Family(value) => self.answers.family = Some(value),
            QuizSelection::Income(value) => self.answers.income = Some(value),
            QuizSelection::Interest(value) => {
                if let Some(position) = self
                    .answers
                    .interest
                    .iter()
                    .position(|picked| *picked == value)
                {
                    self.answers.interest.remove(position);
                } else {
                    self.answers.interest.push(value);
                }
            }
        }
    }

    /// Whether the current step has an answer and `next` may advance.
    pub fn can_proceed(&self) -> bool {
        match self.current_step() {
            QuizStep::Age => self.answers.age.is_some(),
            QuizStep::Employment => self.answers.employment.is_some(),
            QuizStep::Family => self.answers.family.is_some(),
            QuizStep::Income => self.answers.income.is_some(),
            QuizStep::Interest => !self.answers.interest.is_empty(),
        }
    }

    /// Advance to the next step, or mark the session complete on the last
    /// one. Returns false when the current step is unanswered.
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        if self.step + 1 < QuizStep::ordered().len() {
            self.step += 1;
        } else {
            self.completed = true;
        }
        true
    }

    pub fn back(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
