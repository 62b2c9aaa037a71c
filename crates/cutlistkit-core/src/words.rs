//! Word matching
//!
//! Parts are classified by comparing user supplied word lists against a
//! component's name or material. Matching is a case-insensitive substring
//! test. A word prefixed with `-` excludes: if it matches, the subject is
//! rejected no matter which other words match, and no matter where the
//! exclusion sits in the list. `["part", "-partition"]` therefore flags
//! "Door Part" but not "Partition Wall".

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const EXCLUSION_PREFIX: char = '-';

/// Test a subject against a token list.
///
/// Tokens are scanned in order. A plain token that matches sets the
/// result unless an exclusion has already fired; an exclusion token that
/// matches clears the result and stays in force for the rest of the scan.
/// A bare `-` (or an empty token) is malformed and ignored.
pub fn matches<S: AsRef<str>>(tokens: &[S], subject: &str) -> bool {
    let subject = subject.to_lowercase();
    let mut found = false;
    let mut excluded = false;

    for token in tokens {
        let token = token.as_ref();
        let (exclude, word) = match token.strip_prefix(EXCLUSION_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        if word.is_empty() {
            continue;
        }
        if !subject.contains(&word.to_lowercase()) {
            continue;
        }
        if exclude {
            excluded = true;
            found = false;
        }
        if !excluded {
            found = true;
        }
    }

    found
}

/// An ordered list of match tokens
///
/// Deserializes from either a sequence of strings or a single phrase whose
/// words are separated by whitespace, which is how word lists are typed
/// into settings forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList(Vec<String>);

impl WordList {
    /// Build a list from individual tokens
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Split a phrase on whitespace
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(phrase.split_whitespace())
    }

    /// Test a subject against this list
    pub fn matches(&self, subject: &str) -> bool {
        matches(&self.0, subject)
    }

    /// True if either subject matches
    pub fn matches_any(&self, first: &str, second: &str) -> bool {
        self.matches(first) || self.matches(second)
    }

    /// Tokens that can never match (a bare `-` or an empty string)
    pub fn malformed(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|t| matches!(*t, "" | "-"))
    }

    /// The raw tokens
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'de> Deserialize<'de> for WordList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Phrase(String),
            Tokens(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Phrase(phrase) => Self::from_phrase(&phrase),
            Repr::Tokens(tokens) => Self::new(tokens),
        })
    }
}
