// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;

use crate::{filerange::parse_filerange, ObstableError};

/// Expand a filerange expression into the file numbers it names, one per
/// line.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// The filerange expression, e.g. '218-221,223-225'.
    #[clap(name = "FILERANGE")]
    filerange: String,
}

impl ExpandArgs {
    pub fn run(&self) -> Result<(), ObstableError> {
        for filenumber in parse_filerange(&self.filerange)? {
            println!("{filenumber}");
        }
        Ok(())
    }
}
