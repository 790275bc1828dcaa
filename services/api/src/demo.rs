use crate::infra::load_catalog;
use clap::{Args, ValueEnum};
use money_match::catalog::SubsidyRecord;
use money_match::config::AppConfig;
use money_match::error::AppError;
use money_match::matching::{
    filter_by_facets, match_by_keywords, AgeBand, AgeGroup, CurrentStatus, Employment,
    FamilyStatus, FilterSelection, IncomeBand, IncomeLevel, InterestArea, QuizAnswers,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Age bracket filter
    #[arg(long, value_enum)]
    pub(crate) age: Option<AgeBandArg>,
    /// Current-situation filter
    #[arg(long, value_enum)]
    pub(crate) status: Option<StatusArg>,
    /// Income filter ("all" never constrains)
    #[arg(long, value_enum)]
    pub(crate) income: Option<IncomeBandArg>,
    /// Override the dataset directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    #[arg(long, value_enum)]
    pub(crate) age: Option<AgeGroupArg>,
    #[arg(long, value_enum)]
    pub(crate) employment: Option<EmploymentArg>,
    #[arg(long, value_enum)]
    pub(crate) family: Option<FamilyArg>,
    #[arg(long, value_enum)]
    pub(crate) income: Option<IncomeLevelArg>,
    /// Interest areas (repeatable)
    #[arg(long, value_enum)]
    pub(crate) interest: Vec<InterestArg>,
    /// Override the dataset directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the dataset directory
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum AgeBandArg {
    Youth,
    Middle,
    Senior,
}

impl From<AgeBandArg> for AgeBand {
    fn from(value: AgeBandArg) -> Self {
        match value {
            AgeBandArg::Youth => Self::Youth,
            AgeBandArg::Middle => Self::Middle,
            AgeBandArg::Senior => Self::Senior,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum StatusArg {
    Jobseeker,
    Worker,
    Parent,
}

impl From<StatusArg> for CurrentStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Jobseeker => Self::Jobseeker,
            StatusArg::Worker => Self::Worker,
            StatusArg::Parent => Self::Parent,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum IncomeBandArg {
    All,
    LowIncome,
}

impl From<IncomeBandArg> for IncomeBand {
    fn from(value: IncomeBandArg) -> Self {
        match value {
            IncomeBandArg::All => Self::All,
            IncomeBandArg::LowIncome => Self::LowIncome,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum AgeGroupArg {
    Youth,
    Adult,
    Middle,
    Senior,
}

impl From<AgeGroupArg> for AgeGroup {
    fn from(value: AgeGroupArg) -> Self {
        match value {
            AgeGroupArg::Youth => Self::Youth,
            AgeGroupArg::Adult => Self::Adult,
            AgeGroupArg::Middle => Self::Middle,
            AgeGroupArg::Senior => Self::Senior,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum EmploymentArg {
    Jobseeker,
    Worker,
    SelfEmployed,
    Farmer,
}

impl From<EmploymentArg> for Employment {
    fn from(value: EmploymentArg) -> Self {
        match value {
            EmploymentArg::Jobseeker => Self::Jobseeker,
            EmploymentArg::Worker => Self::Worker,
            EmploymentArg::SelfEmployed => Self::SelfEmployed,
            EmploymentArg::Farmer => Self::Farmer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum FamilyArg {
    Single,
    Pregnant,
    Infant,
    None,
}

impl From<FamilyArg> for FamilyStatus {
    fn from(value: FamilyArg) -> Self {
        match value {
            FamilyArg::Single => Self::Single,
            FamilyArg::Pregnant => Self::Pregnant,
            FamilyArg::Infant => Self::Infant,
            FamilyArg::None => Self::None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum IncomeLevelArg {
    Low,
    Normal,
    Unknown,
}

impl From<IncomeLevelArg> for IncomeLevel {
    fn from(value: IncomeLevelArg) -> Self {
        match value {
            IncomeLevelArg::Low => Self::Low,
            IncomeLevelArg::Normal => Self::Normal,
            IncomeLevelArg::Unknown => Self::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum InterestArg {
    Housing,
    Education,
    Health,
    Finance,
}

impl From<InterestArg> for InterestArea {
    fn from(value: InterestArg) -> Self {
        match value {
            InterestArg::Housing => Self::Housing,
            InterestArg::Education => Self::Education,
            InterestArg::Health => Self::Health,
            InterestArg::Finance => Self::Finance,
        }
    }
}

pub(crate) fn run_filter(args: FilterArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.data, args.data_dir)?;

    let selection = FilterSelection {
        age: args.age.map(Into::into),
        status: args.status.map(Into::into),
        income: args.income.map(Into::into),
    };

    let matched = filter_by_facets(catalog.subsidies(), &selection);
    println!("맞춤 혜택 {}건", matched.len());
    render_records(&matched);
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.data, args.data_dir)?;

    let answers = QuizAnswers {
        age: args.age.map(Into::into),
        employment: args.employment.map(Into::into),
        family: args.family.map(Into::into),
        income: args.income.map(Into::into),
        interest: args.interest.into_iter().map(Into::into).collect(),
    };

    let pool = answers.keyword_pool();
    let matched = match_by_keywords(catalog.subsidies(), &pool);
    println!(
        "키워드 {}개로 지원금 {}건 발견",
        pool.len(),
        matched.len()
    );
    render_records(&matched);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.data, args.data_dir)?;

    println!("Money Match demo");
    println!(
        "Catalog: {} subsidies, {} guides, {} news items",
        catalog.subsidies().len(),
        catalog.posts().len(),
        catalog.news().len()
    );

    let selection = FilterSelection {
        age: Some(AgeBand::Youth),
        status: None,
        income: Some(IncomeBand::All),
    };
    let filtered = filter_by_facets(catalog.subsidies(), &selection);
    println!(
        "\nHome filter ({}): {}건",
        AgeBand::Youth.label(),
        filtered.len()
    );
    render_records(&filtered);

    let answers = QuizAnswers {
        age: Some(AgeGroup::Youth),
        employment: Some(Employment::Jobseeker),
        family: Some(FamilyStatus::Single),
        income: Some(IncomeLevel::Unknown),
        interest: vec![InterestArea::Housing, InterestArea::Finance],
    };
    let ranked = match_by_keywords(catalog.subsidies(), &answers.keyword_pool());
    println!("\nQuiz persona (청년 구직자, 주거/금융 관심): {}건", ranked.len());
    render_records(&ranked);

    if let Some(first) = catalog.subsidies().first() {
        let related = catalog.related_subsidies(first);
        println!("\nRelated to '{}':", first.title);
        render_records(&related);
    }

    Ok(())
}

fn render_records(records: &[&SubsidyRecord]) {
    for record in records {
        println!(
            "- [{}] {} | {}",
            record.category, record.title, record.amount_text
        );
    }
}
