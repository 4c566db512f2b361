// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Observation-table bookkeeping for near-infrared spectroscopy data reduction.

The observation table is the flat-text ledger of a reduction run: one line
per exposure group, recording which raw files belong to the group, what kind
of data it holds, and which other groups it calibrates. This crate owns that
format; the reduction scripts that consume it live elsewhere.
 */

pub mod cli;
pub mod filerange;
pub mod obstable;

// Re-exports.
pub use cli::ObstableError;
pub use filerange::parse_filerange;
pub use obstable::{ObsRecord, ObsTable};
