// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;

use crate::{obstable::ObsTable, ObstableError};

/// Print an observation table to stdout.
#[derive(Parser, Debug)]
pub struct PrintArgs {
    /// Path to the observation table.
    #[clap(name = "TABLE", parse(from_os_str))]
    table: PathBuf,

    /// Render space-padded fixed-width columns instead of the on-disk tabbed
    /// format.
    #[clap(short, long)]
    pretty: bool,
}

impl PrintArgs {
    pub fn run(&self) -> Result<(), ObstableError> {
        let mut table = ObsTable::new();
        table.read_table_from(&self.table)?;
        let text = if self.pretty {
            table.to_pretty_text()?
        } else {
            table.to_text()?
        };
        print!("{text}");
        Ok(())
    }
}
