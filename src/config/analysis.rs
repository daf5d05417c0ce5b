//! Analysis and computation configuration

/// One entry of the rolling-window selector
pub struct RollingWindowOption {
    pub label: &'static str,
    // Window length counted in data points (months for the monthly dataset)
    pub points: usize,
}

/// Settings for the rolling correlation panel
pub struct RollingSettings {
    pub windows: &'static [RollingWindowOption],
    pub default_window: usize,
    // Upper bound that keeps the O(n * W) rolling pass interactive
    pub max_window: usize,
}

/// Lower bounds on |r| for each strength bucket (literature-style cutoffs)
pub struct StrengthThresholds {
    pub strong: f64,
    pub moderate: f64,
    pub weak: f64,
}

/// Settings for the full-range correlation summary
pub struct CorrelationSettings {
    pub strength: StrengthThresholds,
    // p-values below this are reported as statistically significant
    pub significance_level: f64,
}

/// Minimum selection sizes below which a panel shows nothing
pub struct MinimumPoints {
    pub performance: usize,
    pub correlation: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub min_points: MinimumPoints,
    pub correlation: CorrelationSettings,
    pub rolling: RollingSettings,
}

impl AnalysisConfig {
    pub fn window_label(&self, points: usize) -> Option<&'static str> {
        self.rolling
            .windows
            .iter()
            .find(|w| w.points == points)
            .map(|w| w.label)
    }
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    min_points: MinimumPoints {
        performance: 2,
        // Correlation needs strictly more than two points
        correlation: 3,
    },

    correlation: CorrelationSettings {
        strength: StrengthThresholds {
            strong: 0.7,
            moderate: 0.4,
            weak: 0.2,
        },
        significance_level: 0.05,
    },

    rolling: RollingSettings {
        windows: &[
            RollingWindowOption { label: "3 months", points: 3 },
            RollingWindowOption { label: "6 months", points: 6 },
            RollingWindowOption { label: "12 months", points: 12 },
            RollingWindowOption { label: "24 months", points: 24 },
            RollingWindowOption { label: "36 months", points: 36 },
        ],
        default_window: 12,
        max_window: 36,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_one_of_the_choices() {
        assert_eq!(
            ANALYSIS.window_label(ANALYSIS.rolling.default_window),
            Some("12 months")
        );
        assert!(ANALYSIS.rolling.windows.iter().all(|w| w.points <= ANALYSIS.rolling.max_window));
        assert_eq!(ANALYSIS.window_label(7), None);
    }

    #[test]
    fn strength_thresholds_are_ordered() {
        let s = &ANALYSIS.correlation.strength;
        assert!(s.strong > s.moderate && s.moderate > s.weak && s.weak > 0.0);
    }
}
