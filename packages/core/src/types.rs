// ABOUTME: Core data model for naming requests and generated name results
// ABOUTME: Category-tagged requests, display labels, and the result card record

use serde::{Deserialize, Serialize};
use std::fmt;

/// What is being named. Selects the prompt template and which fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCategory {
    Person,
    Company,
    Brand,
    Pet,
}

impl NameCategory {
    pub const ALL: [NameCategory; 4] = [
        NameCategory::Person,
        NameCategory::Company,
        NameCategory::Brand,
        NameCategory::Pet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameCategory::Person => "person",
            NameCategory::Company => "company",
            NameCategory::Brand => "brand",
            NameCategory::Pet => "pet",
        }
    }

    /// Display label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            NameCategory::Person => "人名",
            NameCategory::Company => "公司名",
            NameCategory::Brand => "品牌名",
            NameCategory::Pet => "宠物名",
        }
    }

    /// What the `subject` field means for this category
    pub fn subject_label(&self) -> &'static str {
        match self {
            NameCategory::Person => "姓氏",
            NameCategory::Company => "行业关键词",
            NameCategory::Brand => "产品品类",
            NameCategory::Pet => "主人姓氏",
        }
    }

    pub fn uses_gender(&self) -> bool {
        matches!(self, NameCategory::Person | NameCategory::Pet)
    }
}

impl fmt::Display for NameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unisex];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
            Gender::Unisex => "中性",
        }
    }
}

/// Tone requested for the generated names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Classic,
    Modern,
    Poetic,
    Natural,
    Academic,
    Creative,
    Professional,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::Classic,
        Style::Modern,
        Style::Poetic,
        Style::Natural,
        Style::Academic,
        Style::Creative,
        Style::Professional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Style::Classic => "古风典雅",
            Style::Modern => "现代简约",
            Style::Poetic => "诗词出处",
            Style::Natural => "清新自然",
            Style::Academic => "博学睿智",
            Style::Creative => "创意新颖",
            Style::Professional => "专业稳重",
        }
    }

    /// Styles that lean on the model's creativity rather than convention
    pub fn is_creative(&self) -> bool {
        matches!(self, Style::Poetic | Style::Creative)
    }
}

/// Category-specific part of a request. Each variant carries only the fields
/// that mean something for that category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum NamingTarget {
    Person {
        /// Surname
        subject: String,
        gender: Gender,
        #[serde(
            rename = "birthYear",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        birth_year: Option<u32>,
    },
    Company {
        /// Industry keyword
        subject: String,
    },
    Brand {
        /// Product category
        subject: String,
    },
    Pet {
        /// Owner surname
        subject: String,
        gender: Gender,
    },
}

impl NamingTarget {
    pub fn category(&self) -> NameCategory {
        match self {
            NamingTarget::Person { .. } => NameCategory::Person,
            NamingTarget::Company { .. } => NameCategory::Company,
            NamingTarget::Brand { .. } => NameCategory::Brand,
            NamingTarget::Pet { .. } => NameCategory::Pet,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            NamingTarget::Person { subject, .. }
            | NamingTarget::Company { subject }
            | NamingTarget::Brand { subject }
            | NamingTarget::Pet { subject, .. } => subject,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match self {
            NamingTarget::Person { gender, .. } | NamingTarget::Pet { gender, .. } => Some(*gender),
            NamingTarget::Company { .. } | NamingTarget::Brand { .. } => None,
        }
    }

    pub fn birth_year(&self) -> Option<u32> {
        match self {
            NamingTarget::Person { birth_year, .. } => *birth_year,
            _ => None,
        }
    }
}

/// A complete naming request as submitted from the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRequest {
    #[serde(flatten)]
    pub target: NamingTarget,
    pub style: Style,
    /// Free-text preferences, passed to the model verbatim
    #[serde(default)]
    pub preferences: String,
}

impl NamingRequest {
    pub fn new(target: NamingTarget, style: Style) -> Self {
        Self {
            target,
            style,
            preferences: String::new(),
        }
    }

    pub fn person(
        surname: impl Into<String>,
        gender: Gender,
        birth_year: Option<u32>,
        style: Style,
    ) -> Self {
        Self::new(
            NamingTarget::Person {
                subject: surname.into(),
                gender,
                birth_year,
            },
            style,
        )
    }

    pub fn company(industry: impl Into<String>, style: Style) -> Self {
        Self::new(
            NamingTarget::Company {
                subject: industry.into(),
            },
            style,
        )
    }

    pub fn brand(product: impl Into<String>, style: Style) -> Self {
        Self::new(
            NamingTarget::Brand {
                subject: product.into(),
            },
            style,
        )
    }

    pub fn pet(owner_surname: impl Into<String>, gender: Gender, style: Style) -> Self {
        Self::new(
            NamingTarget::Pet {
                subject: owner_surname.into(),
                gender,
            },
            style,
        )
    }

    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = preferences.into();
        self
    }

    pub fn category(&self) -> NameCategory {
        self.target.category()
    }

    pub fn subject(&self) -> &str {
        self.target.subject()
    }
}

/// One generated name candidate, rendered as a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameResult {
    pub full_name: String,
    pub meaning: String,
    /// Literary, historical or design provenance; absent when none applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Symbolic tags such as five-phase elements or brand traits
    pub elements: Vec<String>,
    pub analysis: String,
}
