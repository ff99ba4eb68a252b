//! Raw-item sanitizer.
//!
//! Absent or empty items become `"0"`. A string that is exactly one
//! non-digit character (anything outside `\p{Nd}`) becomes the empty
//! string. Everything else passes through untouched. The cleanup match
//! runs under a time budget.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use digitgrid_core::config::SanitizerConfig;
use digitgrid_core::constants::{EMPTY_ITEM_PLACEHOLDER, SANITIZER_REGEX_SIZE_LIMIT};
use digitgrid_core::errors::SanitizeError;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Exactly one character that is not a decimal digit.
const STRAY_SYMBOL_PATTERN: &str = r"^\D$";

static STRAY_SYMBOL: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    RegexBuilder::new(STRAY_SYMBOL_PATTERN)
        .size_limit(SANITIZER_REGEX_SIZE_LIMIT)
        .build()
});

/// Normalizes raw items before digit extraction.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    regex: Regex,
    budget: Duration,
}

impl Sanitizer {
    /// Create a sanitizer whose cleanup match must finish within `budget`.
    ///
    /// The regex engine matches in linear time, so the budget is checked
    /// once the match returns. A zero budget always times out.
    pub fn new(budget: Duration) -> Result<Self, SanitizeError> {
        let regex = STRAY_SYMBOL
            .as_ref()
            .map_err(|e| SanitizeError::InvalidPattern(e.to_string()))?
            .clone();
        Ok(Self { regex, budget })
    }

    pub fn from_config(config: &SanitizerConfig) -> Result<Self, SanitizeError> {
        Self::new(config.effective_pattern_timeout())
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Sanitize one raw item.
    ///
    /// Borrows from `raw` whenever the content passes through unchanged.
    pub fn sanitize<'a>(&self, raw: Option<&'a str>) -> Result<Cow<'a, str>, SanitizeError> {
        let s = match raw {
            None | Some("") => return Ok(Cow::Borrowed(EMPTY_ITEM_PLACEHOLDER)),
            Some(s) => s,
        };

        let start = Instant::now();
        let cleaned = self.regex.replace(s, "");
        let elapsed = start.elapsed();

        if elapsed >= self.budget {
            tracing::warn!(
                budget_ms = self.budget.as_millis() as u64,
                elapsed_us = elapsed.as_micros() as u64,
                input_len = s.len(),
                "sanitizer cleanup match over budget"
            );
            return Err(SanitizeError::PatternTimeout {
                budget_ms: self.budget.as_millis() as u64,
                elapsed_ms: elapsed.as_millis() as u64,
            });
        }

        Ok(cleaned)
    }
}
