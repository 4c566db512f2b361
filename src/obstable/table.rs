// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The observation table itself.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use strum::IntoEnumIterator;

use super::{Criterion, Field, FormatRecordError, ObsRecord, ReadTableError, WriteTableError, TITLEBAR};

/// An ordered collection of [`ObsRecord`]s, optionally bound to a file on
/// disk. Record order is insertion order and is preserved on write.
///
/// A table bound to a file replaces its in-memory records wholesale whenever
/// it (re-)reads that file; merging two tables is a caller concern, done by
/// feeding one table's records to the other's [`ObsTable::add_records`].
#[derive(Debug, Clone, Default)]
pub struct ObsTable {
    records: Vec<ObsRecord>,
    filename: Option<PathBuf>,
}

impl ObsTable {
    /// Create an empty table with no associated file.
    pub fn new() -> ObsTable {
        ObsTable::default()
    }

    /// Create a table seeded with records, with no associated file.
    pub fn from_records<I: IntoIterator<Item = ObsRecord>>(records: I) -> ObsTable {
        ObsTable {
            records: records.into_iter().collect(),
            filename: None,
        }
    }

    /// Create a table bound to `path`. If the file exists its records are
    /// loaded; if it does not, the table starts empty and the file is
    /// created by the first write. I/O errors other than not-found
    /// propagate.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<ObsTable, ReadTableError> {
        let path = path.into();
        let exists = path.exists();
        let mut table = ObsTable {
            records: vec![],
            filename: Some(path),
        };
        if exists {
            table.read_table()?;
        }
        Ok(table)
    }

    /// The file this table is bound to, if any.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// The records, in table order.
    pub fn records(&self) -> &[ObsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record.
    pub fn add_record(&mut self, record: ObsRecord) {
        self.records.push(record);
    }

    /// Append records in order.
    pub fn add_records<I: IntoIterator<Item = ObsRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    /// Re-read the bound file, replacing the in-memory records. Errors with
    /// [`ReadTableError::NoFilename`] if the table is not bound to a file.
    /// Returns the number of records loaded.
    pub fn read_table(&mut self) -> Result<usize, ReadTableError> {
        match self.filename.clone() {
            Some(path) => self.read_table_from(path),
            None => Err(ReadTableError::NoFilename),
        }
    }

    /// Read `path`, replacing the in-memory records. Comment lines (leading
    /// '#') are ignored, and data lines that do not parse are skipped so
    /// that a hand-edited or pretty-printed table still loads its valid
    /// records; failure to open or read the file itself propagates. Returns
    /// the number of records loaded.
    pub fn read_table_from<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ReadTableError> {
        let path = path.as_ref();
        let mut buf = BufReader::new(File::open(path)?);
        self.records.clear();

        let mut line = String::new();
        let mut num_skipped: usize = 0;
        while buf.read_line(&mut line)? > 0 {
            if !line.starts_with('#') && !line.trim().is_empty() {
                match line.parse::<ObsRecord>() {
                    Ok(record) => self.records.push(record),
                    Err(e) => {
                        // Probably a title bar that lost its '#' to pretty
                        // formatting.
                        debug!("{}: skipping line that did not parse: {e}", path.display());
                        num_skipped += 1;
                    }
                }
            }
            line.clear();
        }

        debug!(
            "Read {} record(s) from {} ({num_skipped} line(s) skipped)",
            self.records.len(),
            path.display()
        );
        Ok(self.records.len())
    }

    /// Write the table to its bound file. Errors with
    /// [`WriteTableError::NoFilename`] if the table is not bound to a file.
    pub fn write_table(&self, clobber: bool) -> Result<(), WriteTableError> {
        match &self.filename {
            Some(path) => self.write_table_to(path.clone(), clobber),
            None => Err(WriteTableError::NoFilename),
        }
    }

    /// Write the title bar and one line per record to `path`. With `clobber`
    /// false, an existing file is an error and is left untouched; the
    /// records are also fully serialized before the file is created, so an
    /// unserializable record never truncates a previous table.
    pub fn write_table_to<P: AsRef<Path>>(
        &self,
        path: P,
        clobber: bool,
    ) -> Result<(), WriteTableError> {
        let path = path.as_ref();
        if !clobber && path.exists() {
            return Err(WriteTableError::WontClobber(path.to_path_buf()));
        }

        trace!("Attempting to write observation table to {}", path.display());
        let text = self.to_text()?;
        let mut f = File::create(path)?;
        f.write_all(text.as_bytes())?;
        f.flush()?;
        info!(
            "Wrote observation table ({} records) to {}",
            self.records.len(),
            path.display()
        );
        Ok(())
    }

    /// The records satisfying *all* of `criteria`, in table order. Empty
    /// criteria select everything.
    pub fn select(&self, criteria: &[Criterion]) -> Vec<&ObsRecord> {
        self.records
            .iter()
            .filter(|record| criteria.iter().all(|c| c.matches(record)))
            .collect()
    }

    /// Record counts keyed by `datatype`. Records with an unset `datatype`
    /// are counted under `<unset>`.
    pub fn datatype_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            let datatype = record.datatype.as_deref().unwrap_or("<unset>");
            *counts.entry(datatype.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Render the table exactly as it is written to disk: title bar plus one
    /// tab-separated line per record, each newline-terminated.
    pub fn to_text(&self) -> Result<String, FormatRecordError> {
        let mut out = String::new();
        out.push_str(TITLEBAR);
        out.push('\n');
        for record in &self.records {
            out.push_str(&record.format_line()?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Render the table as space-padded fixed-width columns, for human eyes.
    /// The pretty form still reads back (the header keeps its '#'), but the
    /// on-disk format written by [`ObsTable::write_table`] stays tabbed.
    pub fn to_pretty_text(&self) -> Result<String, FormatRecordError> {
        const HEADERS: [&str; 10] = [
            "# Targetname",
            "rootname",
            "band",
            "grism",
            "datatype",
            "applyto",
            "filerange",
            "exptime",
            "LNRS",
            "rdmode",
        ];

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let mut row = Vec::with_capacity(HEADERS.len());
            for field in Field::iter() {
                row.push(
                    record
                        .field_text(field)
                        .ok_or(FormatRecordError::UnsetField(field))?
                        .into_owned(),
                );
            }
            rows.push(row);
        }

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let header_row: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        let mut out = String::new();
        for row in std::iter::once(&header_row).chain(rows.iter()) {
            let mut line = String::new();
            for (cell, &width) in row.iter().zip(&widths) {
                if !line.is_empty() {
                    line.push_str("  ");
                }
                line.push_str(&format!("{cell:<width$}"));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        Ok(out)
    }
}
