// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for observation summary tables.
//!
//! An observation table records the metadata of the raw exposure groups that
//! make up one observing programme: science frames, darks, flats, arcs,
//! tellurics. It lives on disk as a plain-text file, one record per line,
//! ten whitespace-separated columns:
//!
//! ```text
//! # Targetname          rootname  band grism  datatype applyto     filerange exptime LNRS rdmode
//! SDSSJ000429.46-002142.8 S20130719 HK   HK     Science  None        496-499   90.0    6    faint
//! SDSSJ000429.46-002142.8 S20130719 HK   HK     Dark     Science,Arc 592-595   90.0    1    faint
//! ```
//!
//! There is no quoting or escaping; column values must not themselves
//! contain whitespace.

mod record;
mod table;

mod error;

pub use error::*;
pub use record::ObsRecord;
pub use table::ObsTable;

use std::str::FromStr;

use itertools::Itertools;
use strum::IntoEnumIterator;

/// The fixed header line written at the top of every observation table. Any
/// line starting with '#' is ignored when a table is read.
pub const TITLEBAR: &str =
    "# Targetname\t\trootname\tband\tgrism\tdatatype\tapplyto\tfilerange\texptime\tLNRS\trdmode";

/// The ten columns of an observation table, in serialization order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
pub enum Field {
    #[strum(serialize = "targetname")]
    Targetname,

    #[strum(serialize = "rootname")]
    Rootname,

    #[strum(serialize = "band")]
    Band,

    #[strum(serialize = "grism")]
    Grism,

    #[strum(serialize = "datatype")]
    Datatype,

    #[strum(serialize = "applyto")]
    Applyto,

    #[strum(serialize = "filerange")]
    Filerange,

    #[strum(serialize = "exptime")]
    Exptime,

    #[strum(serialize = "lnrs")]
    Lnrs,

    #[strum(serialize = "rdmode")]
    Rdmode,
}

/// How a [`Criterion`] compares its value against a record's field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString,
)]
pub enum MatchMode {
    /// The field's serialized text must equal the criterion value.
    #[strum(serialize = "equals")]
    Equals,

    /// The criterion value must be a substring of the field's serialized
    /// text. This is the useful mode for the comma-joined `applyto` column.
    #[strum(serialize = "contains")]
    Contains,
}

/// One selection constraint on an observation record. A record is selected
/// by [`ObsTable::select`] iff it satisfies *all* supplied criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub field: Field,
    pub value: String,
    pub mode: MatchMode,
}

impl Criterion {
    /// Does `record` satisfy this criterion? A record whose field is unset
    /// never matches.
    pub fn matches(&self, record: &ObsRecord) -> bool {
        match record.field_text(self.field) {
            Some(text) => match self.mode {
                MatchMode::Equals => text.as_ref() == self.value.as_str(),
                MatchMode::Contains => text.contains(self.value.as_str()),
            },
            None => false,
        }
    }
}

impl FromStr for Criterion {
    type Err = ParseCriterionError;

    /// Parse `field=value` (equals) or `field~value` (contains).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (idx, sep) = s
            .char_indices()
            .find(|&(_, c)| c == '=' || c == '~')
            .ok_or_else(|| ParseCriterionError::MissingSeparator(s.to_string()))?;
        let field = Field::from_str(&s[..idx])
            .map_err(|_| ParseCriterionError::UnknownField(s[..idx].to_string()))?;
        let mode = match sep {
            '=' => MatchMode::Equals,
            _ => MatchMode::Contains,
        };
        Ok(Criterion {
            field,
            value: s[idx + 1..].to_string(),
            mode,
        })
    }
}

lazy_static::lazy_static! {
    pub static ref FIELDS_COMMA_SEPARATED: String = Field::iter().join(", ");
}
