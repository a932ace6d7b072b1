use serde::{Deserialize, Serialize};

/// Evaluation categories for a résumé/JD comparison
///
/// A closed ordinal set; the wire value is the kebab-case code the backend
/// stores in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchCategory {
    Poor,
    BelowAverage,
    Average,
    Solid,
    Perfect,
}

impl MatchCategory {
    /// Wire code stored in the dataset
    pub fn code(&self) -> &'static str {
        match self {
            MatchCategory::Poor => "poor",
            MatchCategory::BelowAverage => "below-average",
            MatchCategory::Average => "average",
            MatchCategory::Solid => "solid",
            MatchCategory::Perfect => "perfect",
        }
    }

    /// Human-readable label for the category selector
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchCategory::Poor => "Poor match",
            MatchCategory::BelowAverage => "Below Average match",
            MatchCategory::Average => "Average/Decent match",
            MatchCategory::Solid => "Solid/Good match",
            MatchCategory::Perfect => "Perfect match",
        }
    }

    /// All categories in ordinal order
    pub fn all() -> Vec<MatchCategory> {
        vec![
            MatchCategory::Poor,
            MatchCategory::BelowAverage,
            MatchCategory::Average,
            MatchCategory::Solid,
            MatchCategory::Perfect,
        ]
    }

    /// Parse a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "poor" => Some(MatchCategory::Poor),
            "below-average" => Some(MatchCategory::BelowAverage),
            "average" => Some(MatchCategory::Average),
            "solid" => Some(MatchCategory::Solid),
            "perfect" => Some(MatchCategory::Perfect),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for category in MatchCategory::all() {
            assert_eq!(MatchCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(MatchCategory::from_code("excellent"), None);
    }

    #[test]
    fn test_serialized_as_code() {
        let json = serde_json::to_string(&MatchCategory::BelowAverage).unwrap();
        assert_eq!(json, "\"below-average\"");
        let parsed: MatchCategory = serde_json::from_str("\"solid\"").unwrap();
        assert_eq!(parsed, MatchCategory::Solid);
    }
}
