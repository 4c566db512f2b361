// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One line of an observation table.

use std::borrow::Cow;
use std::str::FromStr;

use super::{Field, FormatRecordError, ParseRecordError};

/// The metadata of one exposure group: one line of an observation table.
///
/// Every field is optional so that a record can be assembled piecemeal, but
/// serialization requires all ten to be set. No validation is done on the
/// string fields; the column vocabulary (`datatype`, `applyto`, ...) is
/// open, and the literal `"None"` in `applyto` is an ordinary value meaning
/// "calibrates nothing", not an unset marker.
///
/// Equality and ordering compare the ten fields elementwise, in column
/// order.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct ObsRecord {
    /// Name of the science target, e.g. `SDSSJ000429.46-002142.8`.
    pub targetname: Option<String>,

    /// Date-coded root name for the dataset, e.g. `S20130719`.
    pub rootname: Option<String>,

    /// Name of the filter band, e.g. `HK`.
    pub band: Option<String>,

    /// Name of the grism, e.g. `HK`.
    pub grism: Option<String>,

    /// Type of data: `Science`, `Dark`, `Flat`, `Arc`, `Telluric`, ...
    pub datatype: Option<String>,

    /// Comma-joined datatypes this record calibrates, e.g. `Science,Arc`,
    /// or the literal `None`.
    pub applyto: Option<String>,

    /// Filerange expression naming the constituent file numbers, e.g.
    /// `496-499` (see [`crate::filerange`]).
    pub filerange: Option<String>,

    /// Exposure time in seconds.
    pub exptime: Option<f64>,

    /// Number of non-destructive reads. The headers under-report this by 2
    /// when it is greater than 1, but the table only needs the values to
    /// match between records, so the header value is used as-is.
    pub lnrs: Option<u32>,

    /// Read mode, e.g. `faint`, `bright`.
    pub rdmode: Option<String>,
}

impl ObsRecord {
    /// Serialize this record as one tab-separated table line. `exptime` is
    /// written with exactly one fractional digit and `lnrs` as a bare
    /// integer. Errors with the name of the first unset field.
    pub fn format_line(&self) -> Result<String, FormatRecordError> {
        let get = |v: &Option<String>, field: Field| -> Result<String, FormatRecordError> {
            v.clone().ok_or(FormatRecordError::UnsetField(field))
        };

        Ok(format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.1}\t{}\t{}",
            get(&self.targetname, Field::Targetname)?,
            get(&self.rootname, Field::Rootname)?,
            get(&self.band, Field::Band)?,
            get(&self.grism, Field::Grism)?,
            get(&self.datatype, Field::Datatype)?,
            get(&self.applyto, Field::Applyto)?,
            get(&self.filerange, Field::Filerange)?,
            self.exptime
                .ok_or(FormatRecordError::UnsetField(Field::Exptime))?,
            self.lnrs.ok_or(FormatRecordError::UnsetField(Field::Lnrs))?,
            get(&self.rdmode, Field::Rdmode)?,
        ))
    }

    /// The serialized text of one field, or `None` if it is unset. Numeric
    /// fields render exactly as [`ObsRecord::format_line`] writes them
    /// (`90.0`, `6`), so selection criteria have a single matching domain.
    pub fn field_text(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Targetname => self.targetname.as_deref().map(Cow::Borrowed),
            Field::Rootname => self.rootname.as_deref().map(Cow::Borrowed),
            Field::Band => self.band.as_deref().map(Cow::Borrowed),
            Field::Grism => self.grism.as_deref().map(Cow::Borrowed),
            Field::Datatype => self.datatype.as_deref().map(Cow::Borrowed),
            Field::Applyto => self.applyto.as_deref().map(Cow::Borrowed),
            Field::Filerange => self.filerange.as_deref().map(Cow::Borrowed),
            Field::Exptime => self.exptime.map(|e| Cow::Owned(format!("{e:.1}"))),
            Field::Lnrs => self.lnrs.map(|l| Cow::Owned(l.to_string())),
            Field::Rdmode => self.rdmode.as_deref().map(Cow::Borrowed),
        }
    }
}

impl FromStr for ObsRecord {
    type Err = ParseRecordError;

    /// Parse one table line: exactly ten whitespace-separated tokens,
    /// assigned positionally. `exptime` and `lnrs` must parse as numbers;
    /// no other validation is done.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
        if tokens.len() != 10 {
            return Err(ParseRecordError::WrongTokenCount {
                expected: 10,
                got: tokens.len(),
            });
        }

        let exptime: f64 = tokens[7].parse().map_err(|_| ParseRecordError::ParseFloat {
            field: Field::Exptime,
            token: tokens[7].to_string(),
        })?;
        let lnrs: u32 = tokens[8].parse().map_err(|_| ParseRecordError::ParseInt {
            field: Field::Lnrs,
            token: tokens[8].to_string(),
        })?;

        Ok(ObsRecord {
            targetname: Some(tokens[0].to_string()),
            rootname: Some(tokens[1].to_string()),
            band: Some(tokens[2].to_string()),
            grism: Some(tokens[3].to_string()),
            datatype: Some(tokens[4].to_string()),
            applyto: Some(tokens[5].to_string()),
            filerange: Some(tokens[6].to_string()),
            exptime: Some(exptime),
            lnrs: Some(lnrs),
            rdmode: Some(tokens[9].to_string()),
        })
    }
}
