// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all obstable-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use crate::filerange::FilerangeParseError;
use crate::obstable::{FormatRecordError, ParseCriterionError, ReadTableError, WriteTableError};

/// The *only* publicly visible error from the obstable binary.
#[derive(Error, Debug)]
pub enum ObstableError {
    #[error(transparent)]
    ReadTable(#[from] ReadTableError),

    #[error(transparent)]
    WriteTable(#[from] WriteTableError),

    #[error(transparent)]
    FormatRecord(#[from] FormatRecordError),

    #[error(transparent)]
    Criterion(#[from] ParseCriterionError),

    #[error(transparent)]
    Filerange(#[from] FilerangeParseError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
