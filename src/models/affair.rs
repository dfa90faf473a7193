// src/models/affair.rs

//! Affair identifiers and the record shape returned by the parliament service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Canonical 8-digit affair identifier: `20` + 2-digit year + 4-digit sequence.
///
/// Values are only created through `services::IdentifierNormalizer`, so every
/// instance satisfies the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AffairId(String);

impl AffairId {
    /// Wrap an already validated canonical string.
    pub(crate) fn from_canonical(canonical: String) -> Self {
        debug_assert!(Self::is_canonical(&canonical));
        Self(canonical)
    }

    /// Check the 8-digit `20YYNNNN` shape.
    pub fn is_canonical(s: &str) -> bool {
        s.len() == 8 && s.starts_with("20") && s.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AffairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AffairId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single affair as delivered by `GET /affairs/{id}?format=json`.
///
/// Only the fields used for reporting are modelled; everything else in the
/// payload is ignored and survives only in the raw cached text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffairRecord {
    /// Human-facing number (e.g. "21.2355")
    #[serde(default)]
    pub short_id: String,

    #[serde(default)]
    pub title: String,

    /// Last update, e.g. `2024-01-05T10:15:00Z`
    pub updated: String,

    #[serde(default)]
    pub state: AffairState,

    #[serde(default)]
    pub drafts: Vec<Draft>,
}

impl AffairRecord {
    /// Parse a raw JSON payload.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Whether the affair's process has concluded.
    pub fn is_done(&self) -> bool {
        self.state.done_key.as_deref() == Some("1")
    }

    /// Last resolution of the first draft's consultation, if any.
    ///
    /// The affair type is not consulted; multi-draft affairs only report
    /// draft 1.
    pub fn latest_resolution(&self) -> Option<&Resolution> {
        self.drafts
            .first()?
            .consultation
            .as_ref()?
            .resolutions
            .last()
    }
}

/// Processing state of an affair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffairState {
    /// `"1"` once the affair is done
    #[serde(default, deserialize_with = "string_or_number")]
    pub done_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub consultation: Option<Consultation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    #[serde(default)]
    pub resolutions: Vec<Resolution>,
}

/// A council resolution: status text plus ISO date-time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
}

// The service has been seen to emit `doneKey` both as "1" and as 1.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(if b { "1" } else { "0" }.to_string()),
        _ => None,
    })
}
