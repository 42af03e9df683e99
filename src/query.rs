// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query preprocessing and the `field:value` mini-grammar.
//!
//! | input | scope | matching |
//! |---|---|---|
//! | `title:moon` | titles, titlesPinyin | value starts with `moon` |
//! | `creator:hanser` | creators.name, creators.namePinyin | contains |
//! | `alias:chalili` | creators.aliases, creators.aliasesPinyin | contains |
//! | `info:崩坏` | relatedInfo, relatedInfoPinyin | contains |
//! | anything else | every field | fuzzy |
//!
//! Only the first colon splits, so `info:a:b` searches related info for `a:b`.
//! An unknown field such as `year:1999` is not an error: the whole text,
//! colon included, becomes an ordinary fuzzy query.

use std::fmt;

use tracing::debug;

use crate::fuzzy::{levenshtein_within, FieldKey, MatchMode};

/// Where a query is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryScope {
    /// Unscoped fuzzy search over every field.
    Any,
    TitlePrefix,
    Creator,
    Alias,
    Info,
}

impl QueryScope {
    const FIELDS: [(&'static str, QueryScope); 4] = [
        ("title", QueryScope::TitlePrefix),
        ("creator", QueryScope::Creator),
        ("alias", QueryScope::Alias),
        ("info", QueryScope::Info),
    ];

    /// Scope for a (lowercased) field token, if it is one we know.
    pub fn from_field(field: &str) -> Option<Self> {
        Self::FIELDS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|&(_, scope)| scope)
    }

    /// Field token this scope is written with, `None` for [`QueryScope::Any`].
    pub fn field(self) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|(_, scope)| *scope == self)
            .map(|&(name, _)| name)
    }

    /// Keys to search, or `None` for every key.
    pub fn keys(self) -> Option<&'static [FieldKey]> {
        match self {
            QueryScope::Any => None,
            QueryScope::TitlePrefix => Some(&[FieldKey::Titles, FieldKey::TitlesPinyin]),
            QueryScope::Creator => Some(&[FieldKey::CreatorName, FieldKey::CreatorNamePinyin]),
            QueryScope::Alias => Some(&[FieldKey::CreatorAliases, FieldKey::CreatorAliasesPinyin]),
            QueryScope::Info => Some(&[FieldKey::RelatedInfo, FieldKey::RelatedInfoPinyin]),
        }
    }

    pub fn mode(self) -> MatchMode {
        match self {
            QueryScope::Any => MatchMode::Fuzzy,
            QueryScope::TitlePrefix => MatchMode::Prefix,
            QueryScope::Creator | QueryScope::Alias | QueryScope::Info => MatchMode::Include,
        }
    }
}

/// A normalized query, ready for the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub scope: QueryScope,
    /// Trimmed, lowercased search text (the value part for scoped queries).
    pub text: String,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope.field() {
            Some(field) => write!(f, "{}:{}", field, self.text),
            None => f.write_str(&self.text),
        }
    }
}

/// Trim, lowercase and parse a raw query.
///
/// `None` means "no search": blank input, or a known field with nothing after
/// the colon.
pub fn preprocess(raw: &str) -> Option<Query> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    let Some((field, value)) = text.split_once(':') else {
        return Some(Query {
            scope: QueryScope::Any,
            text,
        });
    };

    let field = field.trim();
    match QueryScope::from_field(field) {
        Some(scope) => {
            let value = value.trim();
            if value.is_empty() {
                debug!(field, "structured query without a value");
                return None;
            }
            Some(Query {
                scope,
                text: value.to_string(),
            })
        }
        None => {
            let did_you_mean = QueryScope::FIELDS
                .iter()
                .map(|(name, _)| *name)
                .find(|name| levenshtein_within(field, name, 1));
            debug!(field, ?did_you_mean, "unknown query field; searching the raw text");
            Some(Query {
                scope: QueryScope::Any,
                text,
            })
        }
    }
}
