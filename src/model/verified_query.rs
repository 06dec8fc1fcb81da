//! Verified queries: pre-validated SQL paired with the question it answers.

use serde::{Deserialize, Serialize};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

use super::error::VerifiedQueryError;

/// Accepted shapes for `verified_at`.
///
/// Exactly two: an integer number of seconds since the Unix epoch, or an
/// all-digit string of the same. Anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimestampInput {
    Seconds(i64),
    Text(String),
}

impl From<i64> for TimestampInput {
    fn from(v: i64) -> Self {
        TimestampInput::Seconds(v)
    }
}

impl From<&str> for TimestampInput {
    fn from(v: &str) -> Self {
        TimestampInput::Text(v.to_string())
    }
}

/// Validate a `verified_at` input and normalize it to epoch seconds.
///
/// Integers must be representable as a calendar time; digit strings are
/// converted without a range check, matching the historical behavior.
pub fn parse_verified_at(input: TimestampInput) -> Result<i64, VerifiedQueryError> {
    match input {
        TimestampInput::Seconds(v) => {
            if chrono::DateTime::from_timestamp(v, 0).is_none() {
                return Err(VerifiedQueryError::BadTimestamp(v));
            }
            Ok(v)
        }
        TimestampInput::Text(s)
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) =>
        {
            s.parse::<i64>()
                .map_err(|_| VerifiedQueryError::BadTypeForVerifiedAt)
        }
        TimestampInput::Text(_) => Err(VerifiedQueryError::BadTypeForVerifiedAt),
    }
}

/// Validate a SQL string: non-blank and syntactically parseable.
fn validate_sql(sql: String) -> Result<String, VerifiedQueryError> {
    if sql.trim().is_empty() {
        return Err(VerifiedQueryError::SqlCannotBeEmpty);
    }
    Parser::parse_sql(&GenericDialect {}, &sql)
        .map_err(|e| VerifiedQueryError::InvalidSql(e.to_string()))?;
    Ok(sql)
}

/// A pre-validated SQL statement paired with the natural-language question it
/// answers.
///
/// Invalid SQL or a bad `verified_at` is rejected at construction (and at
/// deserialization), never deferred to use time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VerifiedQueryDoc")]
pub struct VerifiedQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Seconds since the Unix epoch when the query was verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub use_as_onboarding_question: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}

impl VerifiedQuery {
    /// Create a verified query from its SQL text, validating it.
    pub fn new(sql: impl Into<String>) -> Result<Self, VerifiedQueryError> {
        Ok(Self {
            name: None,
            question: None,
            verified_at: None,
            verified_by: None,
            use_as_onboarding_question: false,
            sql: Some(validate_sql(sql.into())?),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_verified_by(mut self, verified_by: impl Into<String>) -> Self {
        self.verified_by = Some(verified_by.into());
        self
    }

    pub fn with_onboarding(mut self, onboarding: bool) -> Self {
        self.use_as_onboarding_question = onboarding;
        self
    }

    /// Set `verified_at`, validating the input shape.
    pub fn with_verified_at(
        mut self,
        verified_at: impl Into<TimestampInput>,
    ) -> Result<Self, VerifiedQueryError> {
        self.verified_at = Some(parse_verified_at(verified_at.into())?);
        Ok(self)
    }
}

/// Raw document shape: deserialization routes through this and then through
/// the same validation as the constructors.
#[derive(Deserialize)]
struct VerifiedQueryDoc {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    verified_at: Option<TimestampInput>,
    #[serde(default)]
    verified_by: Option<String>,
    #[serde(default)]
    use_as_onboarding_question: bool,
    #[serde(default)]
    sql: Option<String>,
}

impl TryFrom<VerifiedQueryDoc> for VerifiedQuery {
    type Error = VerifiedQueryError;

    fn try_from(doc: VerifiedQueryDoc) -> Result<Self, Self::Error> {
        Ok(Self {
            name: doc.name,
            question: doc.question,
            verified_at: doc.verified_at.map(parse_verified_at).transpose()?,
            verified_by: doc.verified_by,
            use_as_onboarding_question: doc.use_as_onboarding_question,
            sql: doc.sql.map(validate_sql).transpose()?,
        })
    }
}
