//! Email capture for the "send me this report" flow.
//!
//! Delivery is pluggable through [`LeadSink`]. The only sink shipped here,
//! [`TracingLeadSink`], records the lead in the log and acknowledges it.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;
use tracing::info;

use crate::Comparison;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("email address is required")]
    MissingEmail,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("email pattern failed to compile: {0}")]
    Pattern(String),
}

/// A syntactically valid, trimmed email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// # Example
    ///
    /// ```
    /// use salary_core::lead::{EmailAddress, LeadError};
    ///
    /// assert_eq!(EmailAddress::parse(" ops@example.com ").unwrap().as_str(), "ops@example.com");
    /// assert_eq!(EmailAddress::parse(""), Err(LeadError::MissingEmail));
    /// ```
    pub fn parse(text: &str) -> Result<Self, LeadError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(LeadError::MissingEmail);
        }
        let pattern = EMAIL_PATTERN
            .as_ref()
            .map_err(|e| LeadError::Pattern(e.to_string()))?;
        if !pattern.is_match(trimmed) {
            return Err(LeadError::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A captured email address and the comparison it asked for, if one was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub email: EmailAddress,
    pub comparison: Option<Comparison>,
}

/// Destination for captured leads.
pub trait LeadSink {
    fn submit(
        &self,
        lead: &Lead,
    ) -> Result<(), LeadError>;
}

/// Logs each lead and reports success. No data leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLeadSink;

impl LeadSink for TracingLeadSink {
    fn submit(
        &self,
        lead: &Lead,
    ) -> Result<(), LeadError> {
        match &lead.comparison {
            Some(comparison) => info!(
                email = %lead.email,
                role = comparison.role_title(),
                salary = %comparison.us_salary(),
                "email captured"
            ),
            None => info!(email = %lead.email, "email captured"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_common_addresses() {
        for address in ["a@b.co", "first.last+tag@sub.example.org"] {
            assert_eq!(EmailAddress::parse(address).unwrap().as_str(), address);
        }
    }

    #[test]
    fn parse_rejects_malformed_addresses() {
        for address in ["plainaddress", "no-domain@", "@no-local.com", "two words@x.com", "a@b"] {
            assert_eq!(
                EmailAddress::parse(address),
                Err(LeadError::InvalidEmail(address.to_string())),
                "{address}"
            );
        }
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_PATTERN.as_ref().is_ok());
    }

    #[test]
    fn parse_treats_whitespace_as_missing() {
        assert_eq!(EmailAddress::parse("   "), Err(LeadError::MissingEmail));
    }

    #[test]
    fn tracing_sink_acknowledges_every_lead() {
        let lead = Lead {
            email: EmailAddress::parse("cfo@example.com").unwrap(),
            comparison: None,
        };

        assert_eq!(TracingLeadSink.submit(&lead), Ok(()));
    }
}
