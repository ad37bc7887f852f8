//! Identifier canonicalization for names derived from declarations.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z])([a-z])").expect("acronym boundary pattern is valid"));
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("word boundary pattern is valid"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])|[\s\-_](\w)").expect("camel boundary pattern is valid"));

/// How a name taken from a class or field identifier is rendered.
///
/// Names written explicitly in annotations are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    #[default]
    Verbatim,
    SnakeCase,
    CamelCase,
}

impl NamingStrategy {
    pub fn apply(self, identifier: &str) -> String {
        match self {
            NamingStrategy::Verbatim => identifier.to_string(),
            NamingStrategy::SnakeCase => snake_case(identifier),
            NamingStrategy::CamelCase => camel_case(identifier),
        }
    }
}

/// `UserProfile` -> `user_profile`, `HTTPRequest` -> `http_request`.
pub fn snake_case(s: &str) -> String {
    // ABc -> A_Bc
    let s = ACRONYM_BOUNDARY.replace_all(s, "${1}_${2}${3}");
    // aC -> a_C
    let s = WORD_BOUNDARY.replace_all(&s, "${1}_${2}");
    s.to_lowercase()
}

/// `UserProfile` -> `userProfile`, `user_profile` -> `userProfile`.
pub fn camel_case(s: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(s, |caps: &regex::Captures<'_>| {
            if let Some(next) = caps.get(2) {
                next.as_str().to_uppercase()
            } else {
                caps.get(1).map(|first| first.as_str().to_lowercase()).unwrap_or_default()
            }
        })
        .into_owned()
}
