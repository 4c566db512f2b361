// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse "filerange" expressions into file numbers.
//!
//! A filerange is the compact textual encoding of a set of integer file
//! numbers used in the `filerange` column of an observation table, e.g.
//! `"210-214"`, `"215"`, `"216,217"`, `"218-221,223-225"`.


use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilerangeParseError {
    /// A token like "1-2-3"; only one '-' per token is allowed.
    #[error("Filerange token '{0}' has more than two range boundaries")]
    TooManyBounds(String),

    #[error("Error converting '{0}' in a filerange to an integer")]
    ParseInt(String),
}

/// Expand a filerange expression into the file numbers it names.
///
/// Tokens are comma-separated; a token is either a bare integer or an
/// inclusive ascending range `a-b`. Numbers are returned in the order the
/// expression gives them; duplicates are not removed. A reversed range
/// (`"221-218"`) expands to nothing, matching how these tables have always
/// been read.
pub fn parse_filerange(expr: &str) -> Result<Vec<u32>, FilerangeParseError> {
    let parse_int = |token: &str| -> Result<u32, FilerangeParseError> {
        token
            .trim()
            .parse()
            .map_err(|_| FilerangeParseError::ParseInt(token.to_string()))
    };

    let mut filenumbers = vec![];
    for token in expr.split(',') {
        let boundaries: Vec<&str> = token.split('-').collect();
        match boundaries.as_slice() {
            [single] => filenumbers.push(parse_int(single)?),
            [first, last] => filenumbers.extend(parse_int(first)?..=parse_int(last)?),
            _ => return Err(FilerangeParseError::TooManyBounds(token.to_string())),
        }
    }

    Ok(filenumbers)
}
