use chrono::{Local, NaiveDate};
use csv::{QuoteStyle, WriterBuilder};
use genescope_core::record::{GeneRecord, RecordField};

use crate::FormatError;

pub const EXPORT_FILE_PREFIX: &str = "TE_Alzheimers_Search_Results";

/// Serialize records to CSV: fixed header row, every field quoted,
/// absent values written as `""`.
pub fn to_delimited_text<'a, I>(records: I) -> Result<String, FormatError>
where
    I: IntoIterator<Item = &'a GeneRecord>,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        return Err(FormatError::EmptyExport);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(RecordField::ALL.iter().map(|f| f.label()))?;

    let mut rows = 0usize;
    for record in records {
        writer.write_record(
            RecordField::ALL
                .iter()
                .map(|f| record.get(*f).unwrap_or_default()),
        )?;
        rows += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::Io(e.into_error()))?;
    tracing::debug!(rows, "exported records as CSV");

    String::from_utf8(bytes).map_err(|e| FormatError::InvalidPayload(e.to_string()))
}

/// `TE_Alzheimers_Search_Results_YYYY-MM-DD.csv` for the given date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

pub fn export_file_name_today() -> String {
    export_file_name(Local::now().date_naive())
}
