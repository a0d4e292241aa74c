//! # Result Rendering
//!
//! Text output is meant for people at the prompt; JSON output is one object
//! per line for programmatic callers.

use anum::domain::{Classified, PropertyName, PropertySet};
use anum::request::{ErrorKind, ParseError};
use clap::ValueEnum;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::io::{self, Write};

/// Width the property names are aligned to in a single-number report.
const NAME_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: ErrorKind,
    message: &'a str,
}

/// A single-number report: `{"value":7,"properties":{"even":false,"odd":true,...}}`.
#[derive(Serialize)]
struct ReportLine {
    value: u64,
    properties: Listing,
}

/// Every catalog property mapped to whether it holds, in catalog order.
struct Listing(PropertySet);

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PropertyName::ALL.len()))?;
        for (name, holds) in self.0.listing() {
            map.serialize_entry(&name, &holds)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct TruncatedLine {
    truncated: bool,
    examined: u64,
    missing: u64,
}

/// Writes results in one [`Format`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: Format,
    width: usize,
}

impl Renderer {
    pub const fn new(format: Format, width: usize) -> Self {
        Self { format, width }
    }

    pub const fn format(&self) -> Format {
        self.format
    }

    /// Full report of one number: every catalog property with its truth value.
    pub fn single(&self, out: &mut impl Write, classified: &Classified) -> io::Result<()> {
        match self.format {
            Format::Text => {
                writeln!(out, "Properties of {}", classified.value)?;
                for (name, holds) in classified.properties.listing() {
                    writeln!(out, "{:>NAME_WIDTH$}: {holds}", name.as_str())?;
                }
                writeln!(out)
            },
            Format::Json => {
                let report = ReportLine { value: classified.value, properties: Listing(classified.properties) };
                json_line(out, &report)
            },
        }
    }

    /// One line of a range or search.
    pub fn row(&self, out: &mut impl Write, classified: &Classified) -> io::Result<()> {
        match self.format {
            Format::Text => writeln!(out, "{classified:>width$}", width = self.width),
            Format::Json => json_line(out, classified),
        }
    }

    /// Closes a range listing.
    pub fn batch_end(&self, out: &mut impl Write) -> io::Result<()> {
        match self.format {
            Format::Text => writeln!(out),
            Format::Json => Ok(()),
        }
    }

    pub fn error(&self, out: &mut impl Write, err: &ParseError) -> io::Result<()> {
        match self.format {
            Format::Text => {
                writeln!(out, "{err}")?;
                writeln!(out)
            },
            Format::Json => {
                let message = err.to_string();
                json_line(out, &ErrorLine { error: err.kind(), message: &message })
            },
        }
    }

    /// Notes a search cut short by the scan limit.
    pub fn truncated(&self, out: &mut impl Write, examined: u64, missing: u64) -> io::Result<()> {
        match self.format {
            Format::Text => {
                writeln!(
                    out,
                    "Search stopped after examining {examined} numbers; {missing} more not found."
                )?;
                writeln!(out)
            },
            Format::Json => json_line(out, &TruncatedLine { truncated: true, examined, missing }),
        }
    }
}

fn json_line(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
