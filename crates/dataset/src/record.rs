//! Customer Purchase Record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source columns, in the order the original export writes them
pub const COLUMNS: [&str; 9] = [
    "Product",
    "Age",
    "Gender",
    "Education",
    "MaritalStatus",
    "Usage",
    "Fitness",
    "Income",
    "Miles",
];

/// Customer gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Customer marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Partnered,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 2] = [MaritalStatus::Single, MaritalStatus::Partnered];

    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Partnered => "Partnered",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One customer purchase observation as read from the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Product model code (e.g. KP281)
    #[serde(rename = "Product")]
    pub product_code: String,
    /// Age in years
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    /// Years of education
    #[serde(rename = "Education")]
    pub education_years: u32,
    #[serde(rename = "MaritalStatus")]
    pub marital_status: MaritalStatus,
    /// Planned sessions per week
    #[serde(rename = "Usage")]
    pub usage_per_week: u32,
    /// Self-rated fitness, 1 (poor) to 5 (excellent)
    #[serde(rename = "Fitness")]
    pub fitness_self_rating: u8,
    /// Annual income
    #[serde(rename = "Income")]
    pub income: f64,
    /// Expected miles per week
    #[serde(rename = "Miles")]
    pub miles_per_week: f64,
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}
