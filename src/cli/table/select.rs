// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    obstable::{Criterion, ObsTable, FIELDS_COMMA_SEPARATED, TITLEBAR},
    ObstableError,
};

lazy_static::lazy_static! {
    static ref CRITERIA_HELP: String = format!(
        "Criteria of the form 'field=value' (equals) or 'field~value' (contains); a record is selected when it satisfies all of them. Recognised fields: {}",
        *FIELDS_COMMA_SEPARATED
    );
}

/// Print the records of an observation table that satisfy all given
/// criteria.
#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Path to the observation table.
    #[clap(name = "TABLE", parse(from_os_str))]
    table: PathBuf,

    #[clap(name = "CRITERIA", help = CRITERIA_HELP.as_str())]
    criteria: Vec<String>,
}

impl SelectArgs {
    pub fn run(&self) -> Result<(), ObstableError> {
        let criteria = self
            .criteria
            .iter()
            .map(|c| c.parse::<Criterion>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = ObsTable::new();
        table.read_table_from(&self.table)?;

        println!("{TITLEBAR}");
        for record in table.select(&criteria) {
            println!("{}", record.format_line()?);
        }
        Ok(())
    }
}
