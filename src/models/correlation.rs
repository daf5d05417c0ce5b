use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ANALYSIS;

/// Qualitative bucket for |r|, ordered weakest to strongest.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum CorrelationStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl CorrelationStrength {
    pub fn classify(r: f64) -> Self {
        let thresholds = &ANALYSIS.correlation.strength;
        let magnitude = r.abs();
        if magnitude >= thresholds.strong {
            CorrelationStrength::Strong
        } else if magnitude >= thresholds.moderate {
            CorrelationStrength::Moderate
        } else if magnitude >= thresholds.weak {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::VeryWeak
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CorrelationStrength::VeryWeak => write!(f, "Very Weak"),
            CorrelationStrength::Weak => write!(f, "Weak"),
            CorrelationStrength::Moderate => write!(f, "Moderate"),
            CorrelationStrength::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::Display)]
pub enum CorrelationDirection {
    Positive,
    Negative,
    Neutral,
}

impl CorrelationDirection {
    pub fn of(r: Option<f64>) -> Self {
        match r {
            Some(r) if r > 0.0 => CorrelationDirection::Positive,
            Some(r) if r < 0.0 => CorrelationDirection::Negative,
            _ => CorrelationDirection::Neutral,
        }
    }
}

/// Full-range Pearson correlation and OLS fit of the index on gold.
///
/// Every statistic is optional: with fewer than two valid pairs nothing is
/// defined, and a zero-variance series leaves `r` (and whatever depends on it)
/// undefined rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSummary {
    pub r: Option<f64>,
    pub r_squared: Option<f64>,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub p_value: Option<f64>,
    pub strength: Option<CorrelationStrength>,
    pub direction: CorrelationDirection,
    /// Number of valid pairs the statistics were computed from.
    pub sample_size: usize,
}

impl CorrelationSummary {
    pub fn undefined(sample_size: usize) -> Self {
        CorrelationSummary {
            r: None,
            r_squared: None,
            slope: None,
            intercept: None,
            p_value: None,
            strength: None,
            direction: CorrelationDirection::Neutral,
            sample_size,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.r.is_some()
    }

    /// `None` when no p-value could be computed.
    pub fn is_significant(&self, alpha: f64) -> Option<bool> {
        self.p_value.map(|p| p < alpha)
    }

    /// Label such as "Strong Positive", or `None` if r is undefined.
    pub fn relationship(&self) -> Option<String> {
        self.strength
            .map(|strength| format!("{} {}", strength, self.direction))
    }
}
