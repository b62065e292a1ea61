//! Drug interaction reports.

use serde::{Deserialize, Serialize};

/// A single interaction between two or more medications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrugInteraction {
    /// Medications involved
    pub drugs: Vec<String>,
    pub description: String,
    /// "none" | "mild" | "moderate" | "severe"
    pub severity: String,
}

/// Interaction check result for a medication list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionReport {
    #[serde(default)]
    pub interactions: Vec<DrugInteraction>,
    /// Overall severity across all interactions
    pub severity: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl InteractionReport {
    /// Local heuristic used when the interaction service is unreachable:
    /// zero or one medication cannot interact; two or more yield a single
    /// generic "possible interaction" entry flagged for clinician review.
    pub fn heuristic(medications: &[String]) -> Self {
        if medications.len() <= 1 {
            return Self {
                interactions: Vec::new(),
                severity: "none".to_string(),
                recommendations: Vec::new(),
            };
        }
        Self {
            interactions: vec![DrugInteraction {
                drugs: medications.to_vec(),
                description: "Possible interaction between the listed medications.".to_string(),
                severity: "moderate".to_string(),
            }],
            severity: "moderate".to_string(),
            recommendations: vec![
                "Review this combination with the prescribing clinician.".to_string()
            ],
        }
    }

    /// Check if the report found no interactions.
    pub fn is_clear(&self) -> bool {
        self.interactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meds(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_heuristic_empty_list() {
        let report = InteractionReport::heuristic(&meds(&[]));
        assert!(report.is_clear());
        assert_eq!(report.severity, "none");
    }

    #[test]
    fn test_heuristic_single_medication() {
        let report = InteractionReport::heuristic(&meds(&["Lisinopril"]));
        assert!(report.is_clear());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_heuristic_two_medications() {
        let report = InteractionReport::heuristic(&meds(&["Warfarin", "Aspirin"]));
        assert_eq!(report.interactions.len(), 1);
        assert_eq!(report.interactions[0].drugs, meds(&["Warfarin", "Aspirin"]));
        assert_eq!(report.severity, "moderate");
        assert_eq!(report.recommendations.len(), 1);
    }
}
