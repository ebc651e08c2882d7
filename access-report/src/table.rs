use std::str::FromStr;

use crate::{
    error::Error,
    models::{LogRecord, RawRecord},
};

/// Parsed records in file order with integer `status` and `size` columns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordTable {
    records: Vec<LogRecord>,
}

impl RecordTable {
    /// Casts the numeric columns of every raw record. The first value that
    /// does not fit aborts construction; an empty input yields an empty table.
    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Self, Error> {
        let records = raw
            .into_iter()
            .map(cast_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }
}

fn cast_record(raw: RawRecord) -> Result<LogRecord, Error> {
    let status = cast_field(raw.line_number, "status", &raw.status)?;
    let size = cast_field(raw.line_number, "size", &raw.size)?;
    Ok(LogRecord {
        ip: raw.ip.as_str().into(),
        user: raw.user,
        time: raw.time,
        request: raw.request,
        status,
        size,
    })
}

fn cast_field<T>(line_number: usize, field: &'static str, value: &str) -> Result<T, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| Error::InvalidField {
        line_number,
        field,
        value: value.to_string(),
        source,
    })
}
