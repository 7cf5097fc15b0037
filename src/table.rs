use std::io::Write;

use anyhow::Context;
use clap::ValueEnum;
use vessel::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
  Csv,
  Json,
}

pub fn write_table<W: Write>(rows: &[TableRow], format: Format, mut writer: W) -> anyhow::Result<()> {
  match format {
    Format::Csv => {
      let mut csv = csv::Writer::from_writer(writer);

      for row in rows {
        csv.serialize(row).context("failed to write table row")?;
      }

      csv.flush().context("failed to flush table")?;
    },
    Format::Json => {
      serde_json::to_writer_pretty(&mut writer, rows).context("failed to write table")?;
      writeln!(writer)?;
    },
  }

  Ok(())
}
