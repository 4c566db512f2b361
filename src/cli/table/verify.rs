// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify observation table files.

use std::path::{Path, PathBuf};

use clap::Parser;
use itertools::Itertools;
use log::info;

use crate::{obstable::ObsTable, ObstableError};

/// Verify that observation tables can be read by obstable.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Path to the observation table(s) to be verified.
    #[clap(name = "TABLES", parse(from_os_str))]
    tables: Vec<PathBuf>,
}

impl VerifyArgs {
    /// Run [verify] with these arguments.
    pub fn run(&self) -> Result<(), ObstableError> {
        verify(&self.tables)
    }
}

/// Read and print stats out for each input table. If a table couldn't be
/// read, print the error, and continue trying to read the other tables.
fn verify<P: AsRef<Path>>(tables: &[P]) -> Result<(), ObstableError> {
    if tables.is_empty() {
        info!("No observation tables were supplied!");
        std::process::exit(1);
    }

    for table_path in tables {
        let table_path = table_path.as_ref();
        info!("{}:", table_path.display());

        let mut table = ObsTable::new();
        if let Err(e) = table.read_table_from(table_path) {
            info!("{}", e);
            info!("");
            continue;
        }

        let num_targets = table
            .records()
            .iter()
            .filter_map(|r| r.targetname.as_deref())
            .unique()
            .count();
        info!("    {} record(s), {num_targets} distinct target(s)", table.len());
        let counts = table
            .datatype_counts()
            .into_iter()
            .map(|(datatype, count)| format!("{count} {datatype}"))
            .join(", ");
        if !counts.is_empty() {
            info!("    Datatypes: {counts}");
        }
        info!("");
    }

    Ok(())
}
