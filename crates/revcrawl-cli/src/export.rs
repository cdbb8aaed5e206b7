//! JSON-lines export of collected records.
//!
//! The hotel identity columns are constant per crawl and belong to the
//! exporter, not the extraction core: every row is the record's fields
//! plus `hotel` and `place`.

use std::io::Write;

use serde::Serialize;

use revcrawl_core::ReviewRecord;

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(flatten)]
    record: &'a ReviewRecord,
    hotel: &'a str,
    place: &'a str,
}

/// Writes one JSON object per record to `writer`.
pub fn write_jsonl<W: Write>(
    mut writer: W,
    records: &[ReviewRecord],
    hotel: &str,
    place: &str,
) -> anyhow::Result<()> {
    for record in records {
        let row = ExportRow {
            record,
            hotel,
            place,
        };
        serde_json::to_writer(&mut writer, &row)?;
        writeln!(writer)?;
    }
    Ok(())
}
