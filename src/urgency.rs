//! Urgency Display Helpers
//!
//! Pure functions behind the scoring breakdown panel. Everything here is
//! presentational: the backend's `urgency_score` stays authoritative, and
//! the locally recomputed weighted total is shown next to it as a
//! human-auditable cross-check, never reconciled with it.

use crate::models::{UrgencyBreakdown, UrgencyLevel};

/// Four-tier emphasis classification of a 0–10 sub-score. Computed locally
/// per factor; independent of the backend-assigned `urgency_level`, and the
/// two may disagree.
pub fn score_tier(score: f64) -> UrgencyLevel {
    if score >= 8.0 {
        UrgencyLevel::Critical
    } else if score >= 6.0 {
        UrgencyLevel::High
    } else if score >= 4.0 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

/// Sum of every factor's weighted contribution, re-derived for the
/// verification table.
pub fn total_weighted_score(breakdown: &UrgencyBreakdown) -> f64 {
    breakdown.factors.values().map(|f| f.weighted_score).sum()
}

/// Badge/border color per level, matching the stylesheet tiers.
pub fn level_color(level: UrgencyLevel) -> &'static str {
    match level {
        UrgencyLevel::Critical => "#d32f2f",
        UrgencyLevel::High => "#f57c00",
        UrgencyLevel::Medium => "#fbc02d",
        UrgencyLevel::Low => "#388e3c",
        UrgencyLevel::Unknown => "#757575",
    }
}

/// `medical_emergency` → `Medical Emergency`.
pub fn format_factor_name(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrgencyFactor;
    use std::collections::BTreeMap;

    fn make_factor(weighted_score: f64) -> UrgencyFactor {
        UrgencyFactor {
            score: 5.0,
            weight: 0.2,
            weighted_score,
            reasoning: String::new(),
            indicators: Vec::new(),
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(score_tier(10.0), UrgencyLevel::Critical);
        assert_eq!(score_tier(8.0), UrgencyLevel::Critical);
        assert_eq!(score_tier(7.9), UrgencyLevel::High);
        assert_eq!(score_tier(6.0), UrgencyLevel::High);
        assert_eq!(score_tier(4.0), UrgencyLevel::Medium);
        assert_eq!(score_tier(3.9), UrgencyLevel::Low);
        assert_eq!(score_tier(0.0), UrgencyLevel::Low);
    }

    #[test]
    fn total_is_the_sum_of_weighted_scores() {
        // Six factors contributing 1.2 + 0.8 + 0.5 + 0.3 + 0.1 + 0.1 = 3.0,
        // regardless of what the backend rounded its final score to.
        let contributions = [1.2, 0.8, 0.5, 0.3, 0.1, 0.1];
        let factors: BTreeMap<String, UrgencyFactor> = contributions
            .iter()
            .enumerate()
            .map(|(i, &ws)| (format!("factor_{i}"), make_factor(ws)))
            .collect();
        let breakdown = UrgencyBreakdown {
            factors,
            reasoning: Vec::new(),
            recommendation: None,
        };
        assert!((total_weighted_score(&breakdown) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn total_of_no_factors_is_zero() {
        let breakdown = UrgencyBreakdown {
            factors: BTreeMap::new(),
            reasoning: Vec::new(),
            recommendation: None,
        };
        assert_eq!(total_weighted_score(&breakdown), 0.0);
    }

    #[test]
    fn factor_names_prettify() {
        assert_eq!(format_factor_name("medical_emergency"), "Medical Emergency");
        assert_eq!(format_factor_name("scale"), "Scale");
        assert_eq!(format_factor_name("time_of_day"), "Time Of Day");
    }
}
