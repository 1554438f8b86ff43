//! Text, CSV and Markdown output for truth tables

use super::TruthTable;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output layout for [`TruthTable::write_table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableFormat {
    /// Space-padded columns separated by `|`, with a dashed header rule
    #[default]
    Text,
    /// Comma-separated values with a header line
    Csv,
    /// GitHub-flavoured Markdown table
    Markdown,
}

fn cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl TruthTable {
    /// Write this table to any `Write` implementation
    ///
    /// `to_table_string` and `to_table_file` both delegate here.
    pub fn write_table<W: Write>(&self, writer: &mut W, format: TableFormat) -> io::Result<()> {
        let columns = self.columns();
        match format {
            TableFormat::Text => {
                let widths: Vec<usize> = columns
                    .iter()
                    .map(|c| c.chars().count().max(cell(false).len()))
                    .collect();

                let header: Vec<String> = columns
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| format!("{:<w$}", c, w = w))
                    .collect();
                writeln!(writer, "{}", header.join(" | ").trim_end())?;

                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                writeln!(writer, "{}", rule.join("-+-"))?;

                for row in self.rows() {
                    let cells: Vec<String> = row
                        .values()
                        .iter()
                        .chain(std::iter::once(&row.result()))
                        .zip(&widths)
                        .map(|(v, w)| format!("{:<w$}", cell(*v), w = w))
                        .collect();
                    writeln!(writer, "{}", cells.join(" | ").trim_end())?;
                }
            }
            TableFormat::Csv => {
                writeln!(writer, "{}", columns.join(","))?;
                for row in self.rows() {
                    let cells: Vec<&str> = row
                        .values()
                        .iter()
                        .chain(std::iter::once(&row.result()))
                        .map(|v| cell(*v))
                        .collect();
                    writeln!(writer, "{}", cells.join(","))?;
                }
            }
            TableFormat::Markdown => {
                writeln!(writer, "| {} |", columns.join(" | "))?;
                let rule: Vec<&str> = columns.iter().map(|_| "---").collect();
                writeln!(writer, "|{}|", rule.join("|"))?;
                for row in self.rows() {
                    let cells: Vec<&str> = row
                        .values()
                        .iter()
                        .chain(std::iter::once(&row.result()))
                        .map(|v| cell(*v))
                        .collect();
                    writeln!(writer, "| {} |", cells.join(" | "))?;
                }
            }
        }
        Ok(())
    }

    /// Render this table to a string
    pub fn to_table_string(&self, format: TableFormat) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_table(&mut buffer, format)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write this table to a file
    ///
    /// Writes through a `BufWriter` without building the whole string first.
    pub fn to_table_file<P: AsRef<Path>>(&self, path: P, format: TableFormat) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_table(&mut writer, format)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_table_string(TableFormat::Text).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
