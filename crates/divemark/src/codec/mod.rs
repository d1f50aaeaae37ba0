//! Share-token codecs.
//!
//! Two wire shapes name the same state. The compact form packs the dragon
//! bitmask and the three mark coordinates into one hex run under the `s`
//! key. The query form spells marks out as JSON pairs under `a`/`b`/`c`
//! with dragon indices under `d`. Decoding never fails: each field that
//! cannot be read falls back on its own, leaving the rest intact.

mod compact;
mod query;

use crate::arena::ArenaSpec;
use crate::geometry::Point;
use crate::marks::{MARK_COUNT, MarkSet};
use crate::selection::SlotSet;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// An encoded configuration, ready to ride in a URL fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

/// The complete shareable state: which dragons are picked and where the
/// marks sit.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub dragons: SlotSet,
    pub marks: [Point; MARK_COUNT],
}

impl Configuration {
    /// Fresh-session state: nothing picked, marks on their home row.
    pub fn initial(spec: &ArenaSpec) -> Self {
        Self {
            dragons: SlotSet::empty(),
            marks: *MarkSet::home_row(spec).positions(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    /// `s=` followed by the dragon mask and three six-digit hex blocks.
    #[default]
    #[strum(serialize = "Compact", serialize = "s")]
    Compact,
    /// `a=[x,y]&b=[x,y]&c=[x,y]&d=0,3,5`.
    #[strum(serialize = "Query", serialize = "q")]
    Query,
}

impl TokenFormat {
    /// The format `text` would decode under: anything carrying a non-empty
    /// `s` value reads as compact, everything else as query pairs. A bare
    /// `s=` counts as absent.
    pub fn detect(text: &str) -> Self {
        match last_value(&scan_pairs(text), "s").filter(|v| !v.is_empty()) {
            Some(_) => Self::Compact,
            None => Self::Query,
        }
    }

    pub fn encode(self, config: &Configuration, spec: &ArenaSpec) -> Token {
        let body = match self {
            Self::Compact => compact::encode(config, spec),
            Self::Query => query::encode(config),
        };
        Token::new(body)
    }
}

/// Decodes `text` into a configuration, detecting the format. A leading
/// `#` or `?` is stripped first. Every token decodes to something; fields
/// that cannot be read take their documented defaults.
pub fn decode(text: &str, spec: &ArenaSpec) -> Configuration {
    let pairs = scan_pairs(text);
    match last_value(&pairs, "s").filter(|v| !v.is_empty()) {
        Some(hex) => compact::decode(hex, spec),
        None => query::decode(&pairs, spec),
    }
}

fn scan_pairs(text: &str) -> Vec<(&str, &str)> {
    let text = text.strip_prefix('#').unwrap_or(text);
    let text = text.strip_prefix('?').unwrap_or(text);
    text.split('&')
        .filter_map(|chunk| chunk.split_once('='))
        .collect()
}

/// Duplicate keys resolve to the last occurrence, as if the pairs had been
/// folded into a map.
fn last_value<'a>(pairs: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    pairs.iter().rev().find(|(k, _)| *k == key).map(|&(_, v)| v)
}
