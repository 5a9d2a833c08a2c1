//! Fitness and Age Categories

use crate::error::EnrichError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal label for the 1-5 fitness self-rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FitnessCategory {
    #[serde(rename = "Poor Shape")]
    PoorShape,
    #[serde(rename = "Bad Shape")]
    BadShape,
    #[serde(rename = "Average Shape")]
    AverageShape,
    #[serde(rename = "Good Shape")]
    GoodShape,
    #[serde(rename = "Excellent Shape")]
    ExcellentShape,
}

impl FitnessCategory {
    pub const ALL: [FitnessCategory; 5] = [
        FitnessCategory::PoorShape,
        FitnessCategory::BadShape,
        FitnessCategory::AverageShape,
        FitnessCategory::GoodShape,
        FitnessCategory::ExcellentShape,
    ];

    /// Map a self-rating onto its label
    pub fn from_rating(rating: u8) -> Result<Self, EnrichError> {
        match rating {
            1 => Ok(FitnessCategory::PoorShape),
            2 => Ok(FitnessCategory::BadShape),
            3 => Ok(FitnessCategory::AverageShape),
            4 => Ok(FitnessCategory::GoodShape),
            5 => Ok(FitnessCategory::ExcellentShape),
            other => Err(EnrichError::InvalidFitnessRating(other)),
        }
    }

    /// The rating this label was derived from
    pub fn rating(&self) -> u8 {
        match self {
            FitnessCategory::PoorShape => 1,
            FitnessCategory::BadShape => 2,
            FitnessCategory::AverageShape => 3,
            FitnessCategory::GoodShape => 4,
            FitnessCategory::ExcellentShape => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessCategory::PoorShape => "Poor Shape",
            FitnessCategory::BadShape => "Bad Shape",
            FitnessCategory::AverageShape => "Average Shape",
            FitnessCategory::GoodShape => "Good Shape",
            FitnessCategory::ExcellentShape => "Excellent Shape",
        }
    }
}

impl fmt::Display for FitnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age bin edges. Bins are closed on the right, and the lowest bin also
/// includes its lower edge: `[0,21]`, `(21,35]`, `(35,45]`, `(45,60]`.
pub const AGE_BIN_EDGES: [u32; 5] = [0, 21, 35, 45, 60];

/// Ordered, non-overlapping age bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "Teen (0-21)")]
    Teen,
    #[serde(rename = "Adult (22-35)")]
    Adult,
    #[serde(rename = "Mid-age (36-45)")]
    MidAge,
    #[serde(rename = "Towards old-age (>46)")]
    TowardsOldAge,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 4] = [
        AgeCategory::Teen,
        AgeCategory::Adult,
        AgeCategory::MidAge,
        AgeCategory::TowardsOldAge,
    ];

    /// Place an age into its bin
    pub fn from_age(age: u32) -> Result<Self, EnrichError> {
        Self::ALL
            .into_iter()
            .find(|category| category.contains(age))
            .ok_or(EnrichError::UnboundedAge {
                age,
                min: AGE_BIN_EDGES[0],
                max: AGE_BIN_EDGES[AGE_BIN_EDGES.len() - 1],
            })
    }

    /// Inclusive integer bounds of this bin
    pub fn bounds(&self) -> (u32, u32) {
        let i = *self as usize;
        let lower = if i == 0 {
            AGE_BIN_EDGES[0]
        } else {
            AGE_BIN_EDGES[i] + 1
        };
        (lower, AGE_BIN_EDGES[i + 1])
    }

    pub fn contains(&self, age: u32) -> bool {
        let (lower, upper) = self.bounds();
        (lower..=upper).contains(&age)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeCategory::Teen => "Teen (0-21)",
            AgeCategory::Adult => "Adult (22-35)",
            AgeCategory::MidAge => "Mid-age (36-45)",
            AgeCategory::TowardsOldAge => "Towards old-age (>46)",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fitness_labels() {
        assert_eq!(
            FitnessCategory::from_rating(5).unwrap().label(),
            "Excellent Shape"
        );
        assert_eq!(FitnessCategory::from_rating(1).unwrap(), FitnessCategory::PoorShape);
        assert_eq!(
            FitnessCategory::from_rating(0),
            Err(EnrichError::InvalidFitnessRating(0))
        );
        assert!(FitnessCategory::from_rating(6).is_err());
    }

    #[test]
    fn test_fitness_rating_round_trip() {
        for category in FitnessCategory::ALL {
            assert_eq!(FitnessCategory::from_rating(category.rating()), Ok(category));
        }
    }

    #[test]
    fn test_age_bin_edges() {
        assert_eq!(AgeCategory::from_age(0), Ok(AgeCategory::Teen));
        assert_eq!(AgeCategory::from_age(21), Ok(AgeCategory::Teen));
        assert_eq!(AgeCategory::from_age(22), Ok(AgeCategory::Adult));
        assert_eq!(AgeCategory::from_age(35), Ok(AgeCategory::Adult));
        assert_eq!(AgeCategory::from_age(36), Ok(AgeCategory::MidAge));
        assert_eq!(AgeCategory::from_age(45), Ok(AgeCategory::MidAge));
        assert_eq!(AgeCategory::from_age(46), Ok(AgeCategory::TowardsOldAge));
        assert_eq!(AgeCategory::from_age(60), Ok(AgeCategory::TowardsOldAge));
    }

    #[test]
    fn test_age_above_last_bin() {
        assert_eq!(
            AgeCategory::from_age(61),
            Err(EnrichError::UnboundedAge {
                age: 61,
                min: 0,
                max: 60
            })
        );
    }

    #[test]
    fn test_bounds() {
        assert_eq!(AgeCategory::Teen.bounds(), (0, 21));
        assert_eq!(AgeCategory::Adult.bounds(), (22, 35));
        assert_eq!(AgeCategory::MidAge.bounds(), (36, 45));
        assert_eq!(AgeCategory::TowardsOldAge.bounds(), (46, 60));
    }

    #[test]
    fn test_labels_serialize() {
        // Labels double as the serialized form
        for category in AgeCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    proptest! {
        #[test]
        fn prop_every_supported_age_in_exactly_one_bin(age in 0u32..=60) {
            let hits = AgeCategory::ALL.iter().filter(|c| c.contains(age)).count();
            prop_assert_eq!(hits, 1);
        }

        #[test]
        fn prop_ages_above_sixty_rejected(age in 61u32..10_000) {
            let is_unbounded = matches!(
                AgeCategory::from_age(age),
                Err(EnrichError::UnboundedAge { .. })
            );
            prop_assert!(is_unbounded);
        }
    }
}
