//! CSV export of search results
//!
//! One row per document: `(source, query, abstract)`.

use std::io::{self, Write};
use std::str::FromStr;

use crate::types::{Document, SearchResult};

/// Header of the standard export
pub const STANDARD_HEADER: &str = "Source,Query,Abstract";

/// Header of the legacy four-column export
pub const LEGACY_HEADER: &str = "Company,Query,Results,Key People";

/// Export layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Three named columns, quoted fields, one `\n` after every line
    #[default]
    Standard,
    /// Four columns with an always-empty last one; fields are written as
    /// is and lines are only separated by `\n`
    Legacy,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(ExportFormat::Standard),
            "legacy" => Ok(ExportFormat::Legacy),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

/// Write the header and one row per document
pub fn write_csv<'a, W, I>(
    writer: &mut W,
    query: &str,
    documents: I,
    format: ExportFormat,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Document>,
{
    match format {
        ExportFormat::Standard => {
            writeln!(writer, "{}", STANDARD_HEADER)?;
            let query = escape_field(query);
            for doc in documents {
                writeln!(
                    writer,
                    "{},{},{}",
                    escape_field(&doc.source),
                    query,
                    escape_field(&doc.abstract_text)
                )?;
            }
        }
        ExportFormat::Legacy => {
            write!(writer, "{}", LEGACY_HEADER)?;
            for doc in documents {
                write!(writer, "\n{},{},{},", doc.source, query, doc.abstract_text)?;
            }
        }
    }
    Ok(())
}

/// Export every document of a result to a CSV string
pub fn export_csv(result: &SearchResult, format: ExportFormat) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, &result.query, &result.documents, format)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Quote a field when it contains a separator, a quote or a line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
