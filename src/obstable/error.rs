// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use super::{Field, FIELDS_COMMA_SEPARATED};

/// Errors associated with parsing one line of an observation table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRecordError {
    #[error("Expected {expected} whitespace-separated fields on a table line, but found {got}")]
    WrongTokenCount { expected: usize, got: usize },

    #[error("Error converting the {field} field '{token}' to a float")]
    ParseFloat { field: Field, token: String },

    #[error("Error converting the {field} field '{token}' to an integer")]
    ParseInt { field: Field, token: String },
}

/// Errors associated with serializing an observation record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatRecordError {
    #[error("Cannot format a record whose {0} field is unset")]
    UnsetField(Field),
}

/// Errors associated with parsing a selection criterion.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCriterionError {
    #[error("Criterion '{0}' has no '=' (equals) or '~' (contains) separator")]
    MissingSeparator(String),

    #[error("'{0}' is not an observation-table column; must be one of: {}", *FIELDS_COMMA_SEPARATED)]
    UnknownField(String),
}

/// Errors associated with reading an observation table from disk. Malformed
/// data lines are not represented here; those are skipped during a table
/// load, and only file-level problems propagate.
#[derive(Error, Debug)]
pub enum ReadTableError {
    #[error("No filename given, and this table is not associated with one")]
    NoFilename,

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with writing an observation table to disk.
#[derive(Error, Debug)]
pub enum WriteTableError {
    #[error("No filename given, and this table is not associated with one")]
    NoFilename,

    #[error("File {} exists and overwriting was not allowed", .0.display())]
    WontClobber(PathBuf),

    #[error(transparent)]
    Format(#[from] FormatRecordError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
