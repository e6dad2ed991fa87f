//! API Data Transfer Types
//!
//! Typed counterparts of the backend response shapes. A field the backend
//! may omit is an `Option` here, so "missing" is part of the type rather
//! than a runtime surprise.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Envelope every endpoint wraps its payload in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Lifecycle of a crisis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CrisisStatus {
    Pending,
    Matched,
    Dispatched,
    Completed,
    Cancelled,
    /// Any status string this client does not know yet.
    #[serde(other)]
    #[default]
    Unknown,
}

impl CrisisStatus {
    /// Every status a dispatcher can move a request to.
    pub const ALL: &'static [CrisisStatus] = &[
        CrisisStatus::Pending,
        CrisisStatus::Matched,
        CrisisStatus::Dispatched,
        CrisisStatus::Completed,
        CrisisStatus::Cancelled,
    ];

    /// Wire value, matching the backend's lowercase vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            CrisisStatus::Pending => "pending",
            CrisisStatus::Matched => "matched",
            CrisisStatus::Dispatched => "dispatched",
            CrisisStatus::Completed => "completed",
            CrisisStatus::Cancelled => "cancelled",
            CrisisStatus::Unknown => "unknown",
        }
    }

    pub fn from_str(value: &str) -> Option<CrisisStatus> {
        CrisisStatus::ALL.iter().copied().find(|s| s.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            CrisisStatus::Pending => "PENDING",
            CrisisStatus::Matched => "MATCHED",
            CrisisStatus::Dispatched => "DISPATCHED",
            CrisisStatus::Completed => "COMPLETED",
            CrisisStatus::Cancelled => "CANCELLED",
            CrisisStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CrisisStatus::Pending => "status-pending",
            CrisisStatus::Matched => "status-matched",
            CrisisStatus::Dispatched => "status-dispatched",
            CrisisStatus::Completed => "status-completed",
            CrisisStatus::Cancelled => "status-cancelled",
            CrisisStatus::Unknown => "status-unknown",
        }
    }
}

/// Backend-assigned urgency classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    #[default]
    Unknown,
}

impl UrgencyLevel {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "LOW",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::Unknown => "UNKNOWN",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "urgency-low",
            UrgencyLevel::Medium => "urgency-medium",
            UrgencyLevel::High => "urgency-high",
            UrgencyLevel::Critical => "urgency-critical",
            UrgencyLevel::Unknown => "urgency-unknown",
        }
    }
}

/// Authenticated dispatcher profile, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token + profile pair persisted across page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// A reported need, enriched server-side with structured fields and a score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrisisRequest {
    pub id: i64,
    pub original_message: String,
    #[serde(default)]
    pub message_source: Option<String>,
    #[serde(default)]
    pub status: CrisisStatus,
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub urgency_score: f64,
    #[serde(default)]
    pub need_type: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by_name: Option<String>,
}

impl CrisisRequest {
    /// Creation timestamp formatted for display; falls back to the raw
    /// string when it is not RFC 3339.
    pub fn created_at_display(&self) -> Option<String> {
        self.created_at.as_ref().map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| raw.clone())
        })
    }
}

/// Entities and scoring the backend extracted from a submitted message.
/// Only ever part of a creation response; never refetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrgencyReport {
    #[serde(default)]
    pub need_type: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub urgency_score: f64,
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub urgency_reasoning: Option<String>,
    #[serde(default)]
    pub urgency_breakdown: Option<UrgencyBreakdown>,
}

/// Explainable decomposition of the urgency score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrgencyBreakdown {
    #[serde(default)]
    pub factors: BTreeMap<String, UrgencyFactor>,
    #[serde(default)]
    pub reasoning: Vec<ReasoningStep>,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrgencyFactor {
    pub score: f64,
    pub weight: f64,
    #[serde(rename = "weightedScore")]
    pub weighted_score: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReasoningStep {
    pub factor: String,
    pub impact: String,
    pub explanation: String,
    #[serde(default)]
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub timeline: String,
    pub priority: String,
}

/// Candidate pairing between a crisis need and an NGO-held resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceMatch {
    pub ngo_name: String,
    pub resource_name: String,
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub quantity_available: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Directory record for a registered NGO.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ngo {
    pub id: i64,
    pub ngo_name: String,
    #[serde(default)]
    pub darpan_id: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Directory record for an NGO-held resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceRecord {
    pub id: i64,
    pub resource_name: String,
    #[serde(default)]
    pub ngo_name: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub quantity_available: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// Match statistics the backend reports alongside a creation response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseStats {
    #[serde(default)]
    pub total_matches_found: u32,
}

/// Payload of `POST /crisis`: the stored record plus everything the
/// pipeline derived from the message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrisisCreated {
    pub crisis_request: CrisisRequest,
    pub extracted_entities: UrgencyReport,
    #[serde(default)]
    pub matches: Vec<ResourceMatch>,
    #[serde(default)]
    pub processing_time_ms: Option<u64>,
    #[serde(default)]
    pub database_stats: Option<DatabaseStats>,
}

/// Payload of `GET /crisis/:id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrisisDetail {
    pub crisis_request: CrisisRequest,
    #[serde(default)]
    pub matches: Vec<ResourceMatch>,
}

/// Dashboard list filter. An empty value means "no constraint" and is
/// never forwarded as a query parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrisisFilter {
    pub status: String,
    pub urgency_level: String,
    pub need_type: String,
}

impl CrisisFilter {
    /// Non-empty filter values as query pairs, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        if !self.urgency_level.is_empty() {
            pairs.push(("urgency_level", self.urgency_level.clone()));
        }
        if !self.need_type.is_empty() {
            pairs.push(("need_type", self.need_type.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_decodes() {
        let json = r#"{"success":true,"data":[{"id":7,"original_message":"Need 50 blankets","status":"pending","urgency_level":"high","urgency_score":7.2}]}"#;
        let resp: ApiResponse<Vec<CrisisRequest>> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert!(resp.message.is_none());
        let list = resp.data.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 7);
        assert_eq!(list[0].status, CrisisStatus::Pending);
        assert_eq!(list[0].urgency_level, UrgencyLevel::High);
        assert!(list[0].need_type.is_none());
    }

    #[test]
    fn envelope_failure_carries_message() {
        let json = r#"{"success":false,"message":"Invalid credentials"}"#;
        let resp: ApiResponse<Session> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn unknown_enum_values_do_not_fail_the_decode() {
        let json = r#"{"id":1,"original_message":"m","status":"triaged","urgency_level":"severe"}"#;
        let crisis: CrisisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(crisis.status, CrisisStatus::Unknown);
        assert_eq!(crisis.urgency_level, UrgencyLevel::Unknown);
        assert_eq!(crisis.urgency_score, 0.0);
    }

    #[test]
    fn creation_response_decodes_breakdown_and_matches() {
        let json = r#"{
            "crisis_request": {"id": 42, "original_message": "Doctor needed at MG Road", "status": "pending", "urgency_level": "critical", "urgency_score": 9.0},
            "extracted_entities": {
                "need_type": "medical",
                "location_text": "MG Road",
                "urgency_score": 9.0,
                "urgency_level": "critical",
                "urgency_reasoning": "Life-threatening emergency",
                "urgency_breakdown": {
                    "factors": {
                        "medical_emergency": {"score": 10.0, "weight": 0.3, "weightedScore": 3.0, "reasoning": "heart attack mentioned", "indicators": ["heart attack"]}
                    },
                    "reasoning": [
                        {"factor": "Medical Emergency", "impact": "High", "explanation": "explicit medical emergency", "indicators": ["heart attack"]}
                    ],
                    "recommendation": {"action": "Dispatch immediately", "timeline": "within 15 minutes", "priority": "P0"}
                }
            },
            "matches": [
                {"ngo_name": "Red Crescent", "resource_name": "Ambulance", "match_score": 92.5, "distance_km": 1.4}
            ],
            "processing_time_ms": 1840,
            "database_stats": {"total_matches_found": 4}
        }"#;
        let created: CrisisCreated = serde_json::from_str(json).unwrap();
        let breakdown = created.extracted_entities.urgency_breakdown.unwrap();
        let factor = &breakdown.factors["medical_emergency"];
        assert_eq!(factor.weighted_score, 3.0);
        assert_eq!(breakdown.reasoning.len(), 1);
        assert_eq!(breakdown.recommendation.unwrap().priority, "P0");
        assert_eq!(created.matches[0].match_score, 92.5);
        assert_eq!(created.database_stats.unwrap().total_matches_found, 4);
    }

    #[test]
    fn status_wire_values_round_trip() {
        for &status in CrisisStatus::ALL {
            assert_eq!(CrisisStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(CrisisStatus::from_str("unknown"), None);
        assert_eq!(CrisisStatus::from_str(""), None);
    }

    #[test]
    fn filter_skips_empty_values() {
        let filter = CrisisFilter {
            status: String::new(),
            urgency_level: "critical".into(),
            need_type: String::new(),
        };
        assert_eq!(filter.query_pairs(), vec![("urgency_level", "critical".to_string())]);
        assert!(CrisisFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn created_at_formats_rfc3339() {
        let crisis: CrisisRequest = serde_json::from_str(
            r#"{"id":1,"original_message":"m","created_at":"2026-08-01T14:30:00+05:30"}"#,
        )
        .unwrap();
        assert_eq!(crisis.created_at_display().as_deref(), Some("2026-08-01 14:30"));
    }

    #[test]
    fn created_at_falls_back_to_raw_string() {
        let crisis: CrisisRequest = serde_json::from_str(
            r#"{"id":1,"original_message":"m","created_at":"yesterday"}"#,
        )
        .unwrap();
        assert_eq!(crisis.created_at_display().as_deref(), Some("yesterday"));
    }
}
