//! The mayoral-candidate record kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityFilter, NewRecord, Predicate, SortOrder};
use crate::error::InvalidInputError;
use crate::types::RecordId;

/// A candidate for mayoral office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: RecordId,
    pub city_id: Option<i64>,
    pub full_name: Option<String>,
    pub ballot_name: Option<String>,
    pub party: Option<String>,
    pub office: Option<String>,
    pub candidacy_city: Option<String>,
    pub occupation: Option<String>,
    pub education_level: Option<String>,
    pub marital_status: Option<String>,
    pub birth_state: Option<String>,
    pub birth_city: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub endorsed: Option<bool>,
    pub elected: Option<bool>,
}

/// Creation shape for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewCandidate {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ballot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidacy_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endorsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elected: Option<bool>,
}

impl NewRecord for NewCandidate {
    fn validate(&self) -> Result<(), InvalidInputError> {
        if self.full_name.trim().is_empty() {
            return Err(InvalidInputError::MissingField { field: "full_name" });
        }
        Ok(())
    }
}

/// Partial-update shape for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ballot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidacy_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endorsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elected: Option<bool>,
}

impl CandidatePatch {
    /// True when no field is set, i.e. the patch would be a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Tri-state filter on the `elected` column: everyone, elected candidates
/// only, or non-elected candidates only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElectedFilter {
    /// No predicate; include every candidate.
    #[default]
    Any,
    /// Elected candidates only.
    Elected,
    /// Non-elected candidates only.
    NotElected,
}

impl ElectedFilter {
    /// Build from an optional boolean flag, the shape a CLI option has.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => ElectedFilter::Any,
            Some(true) => ElectedFilter::Elected,
            Some(false) => ElectedFilter::NotElected,
        }
    }
}

impl EntityFilter for ElectedFilter {
    fn predicates(&self) -> Vec<Predicate> {
        match self {
            ElectedFilter::Any => Vec::new(),
            ElectedFilter::Elected => vec![Predicate { field: "elected", equals: "true".into() }],
            ElectedFilter::NotElected => {
                vec![Predicate { field: "elected", equals: "false".into() }]
            }
        }
    }
}

impl Entity for Candidate {
    const COLLECTION: &'static str = "candidates";
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "ballot_name",
        "full_name",
        "party",
        "office",
        "candidacy_city",
        "occupation",
        "education_level",
    ];

    type Insert = NewCandidate;
    type Patch = CandidatePatch;
    type Filter = ElectedFilter;

    fn sort() -> SortOrder {
        SortOrder::ascending("full_name")
    }

    fn id(&self) -> RecordId {
        self.id
    }
}
