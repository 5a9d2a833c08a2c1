//! Typed Field Access
//!
//! Queries name columns through [`Field`] instead of string lookups. Each
//! field has a [`FieldKind`] that decides which operations accept it:
//! grouping operations read a [`Level`], numeric operations read an `f64`.

use crate::catalog::ProductCatalog;
use crate::category::{AgeCategory, FitnessCategory};
use crate::error::QueryError;
use crate::features::EnrichedRecord;
use dataset::{Gender, MaritalStatus};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a field's values may be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Labels with no arithmetic meaning
    Categorical,
    /// Integer counts and codes: groupable and numeric
    Discrete,
    /// Real-valued measurements: numeric only
    Continuous,
}

/// Column of an enriched record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Product,
    Age,
    Gender,
    Education,
    MaritalStatus,
    Usage,
    Fitness,
    Income,
    Miles,
    #[serde(rename = "Product_price")]
    ProductPrice,
    #[serde(rename = "Fitness_category")]
    FitnessCategory,
    #[serde(rename = "Age_category")]
    AgeCategory,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Product,
        Field::Age,
        Field::Gender,
        Field::Education,
        Field::MaritalStatus,
        Field::Usage,
        Field::Fitness,
        Field::Income,
        Field::Miles,
        Field::ProductPrice,
        Field::FitnessCategory,
        Field::AgeCategory,
    ];

    /// Column name as it appears in the source and in reports
    pub fn name(&self) -> &'static str {
        match self {
            Field::Product => "Product",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Education => "Education",
            Field::MaritalStatus => "MaritalStatus",
            Field::Usage => "Usage",
            Field::Fitness => "Fitness",
            Field::Income => "Income",
            Field::Miles => "Miles",
            Field::ProductPrice => "Product_price",
            Field::FitnessCategory => "Fitness_category",
            Field::AgeCategory => "Age_category",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Product
            | Field::Gender
            | Field::MaritalStatus
            | Field::FitnessCategory
            | Field::AgeCategory => FieldKind::Categorical,
            Field::Age | Field::Education | Field::Usage | Field::Fitness | Field::ProductPrice => {
                FieldKind::Discrete
            }
            Field::Income | Field::Miles => FieldKind::Continuous,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() != FieldKind::Categorical
    }

    pub fn is_groupable(&self) -> bool {
        self.kind() != FieldKind::Continuous
    }

    /// Every field usable in numeric operations, in column order
    pub fn numeric() -> impl Iterator<Item = Field> {
        Self::ALL.into_iter().filter(Field::is_numeric)
    }

    /// Reject fields that cannot be grouped on
    pub fn require_groupable(self) -> Result<Field, QueryError> {
        if self.is_groupable() {
            Ok(self)
        } else {
            Err(QueryError::TypeMismatch {
                field: self.name(),
                expected: "categorical or discrete",
            })
        }
    }

    /// Reject fields without a numeric value
    pub fn require_numeric(self) -> Result<Field, QueryError> {
        if self.is_numeric() {
            Ok(self)
        } else {
            Err(QueryError::TypeMismatch {
                field: self.name(),
                expected: "numeric",
            })
        }
    }

    /// Grouping level of a record; `None` for continuous fields
    pub fn level(&self, row: &EnrichedRecord) -> Option<Level> {
        let record = &row.record;
        let level = match self {
            Field::Product => Level::Product(record.product_code.clone()),
            Field::Gender => Level::Gender(record.gender),
            Field::MaritalStatus => Level::MaritalStatus(record.marital_status),
            Field::FitnessCategory => Level::FitnessCategory(row.derived.fitness_category),
            Field::AgeCategory => Level::AgeCategory(row.derived.age_category),
            Field::Age => Level::Integer(i64::from(record.age)),
            Field::Education => Level::Integer(i64::from(record.education_years)),
            Field::Usage => Level::Integer(i64::from(record.usage_per_week)),
            Field::Fitness => Level::Integer(i64::from(record.fitness_self_rating)),
            Field::ProductPrice => Level::Integer(i64::from(row.derived.price)),
            Field::Income | Field::Miles => return None,
        };
        Some(level)
    }

    /// Numeric value of a record; `None` for categorical fields
    pub fn value(&self, row: &EnrichedRecord) -> Option<f64> {
        let record = &row.record;
        let value = match self {
            Field::Age => f64::from(record.age),
            Field::Education => f64::from(record.education_years),
            Field::Usage => f64::from(record.usage_per_week),
            Field::Fitness => f64::from(record.fitness_self_rating),
            Field::Income => record.income,
            Field::Miles => record.miles_per_week,
            Field::ProductPrice => f64::from(row.derived.price),
            Field::Product
            | Field::Gender
            | Field::MaritalStatus
            | Field::FitnessCategory
            | Field::AgeCategory => return None,
        };
        Some(value)
    }

    /// Every level this field can take, sorted, when that set is fixed by a
    /// catalog or an enumeration. Other discrete fields have no closed domain.
    pub fn domain(&self, catalog: &ProductCatalog) -> Option<Vec<Level>> {
        let mut levels: Vec<Level> = match self {
            Field::Product => catalog
                .codes()
                .map(|code| Level::Product(code.to_string()))
                .collect(),
            Field::ProductPrice => catalog
                .entries()
                .iter()
                .map(|entry| Level::Integer(i64::from(entry.price)))
                .collect(),
            Field::Gender => Gender::ALL.into_iter().map(Level::Gender).collect(),
            Field::MaritalStatus => MaritalStatus::ALL
                .into_iter()
                .map(Level::MaritalStatus)
                .collect(),
            Field::FitnessCategory => FitnessCategory::ALL
                .into_iter()
                .map(Level::FitnessCategory)
                .collect(),
            Field::AgeCategory => AgeCategory::ALL.into_iter().map(Level::AgeCategory).collect(),
            _ => return None,
        };
        levels.sort();
        levels.dedup();
        Some(levels)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = QueryError;

    /// Parses column names case-insensitively, ignoring `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|field| normalize(field.name()) == wanted)
            .ok_or_else(|| QueryError::UnknownField(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Value of a groupable field.
///
/// Levels of one field compare in their natural order: product codes
/// alphabetically, enumerations in declaration (bin) order, integers
/// numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Product(String),
    Gender(Gender),
    MaritalStatus(MaritalStatus),
    FitnessCategory(FitnessCategory),
    AgeCategory(AgeCategory),
    Integer(i64),
}

impl Level {
    pub fn product(code: impl Into<String>) -> Self {
        Level::Product(code.into())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Product(code) => f.write_str(code),
            Level::Gender(gender) => f.write_str(gender.label()),
            Level::MaritalStatus(status) => f.write_str(status.label()),
            Level::FitnessCategory(category) => f.write_str(category.label()),
            Level::AgeCategory(category) => f.write_str(category.label()),
            Level::Integer(value) => write!(f, "{value}"),
        }
    }
}

// Serialized as its label so levels can key JSON objects
impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Gender> for Level {
    fn from(gender: Gender) -> Self {
        Level::Gender(gender)
    }
}

impl From<MaritalStatus> for Level {
    fn from(status: MaritalStatus) -> Self {
        Level::MaritalStatus(status)
    }
}

impl From<FitnessCategory> for Level {
    fn from(category: FitnessCategory) -> Self {
        Level::FitnessCategory(category)
    }
}

impl From<AgeCategory> for Level {
    fn from(category: AgeCategory) -> Self {
        Level::AgeCategory(category)
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Level::Integer(value)
    }
}
