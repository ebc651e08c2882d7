use indexmap::IndexMap;

use crate::{invariants::ClientAddress, models::LogRecord, table::RecordTable};

pub const NOT_FOUND: u16 = 404;
pub const DEFAULT_TOP_N: usize = 10;

/// Records answered with `code`, in file order.
pub fn with_status(table: &RecordTable, code: u16) -> impl Iterator<Item = &LogRecord> {
    table.iter().filter(move |r| r.status == code)
}

pub fn count_by_status(table: &RecordTable, code: u16) -> usize {
    with_status(table, code).count()
}

/// Request count per address, highest first. Equal counts keep the order in
/// which the addresses first show up in the table.
pub fn top_addresses(table: &RecordTable, n: usize) -> Vec<(ClientAddress, usize)> {
    let mut counts: IndexMap<&ClientAddress, usize> = IndexMap::new();
    for record in table.iter() {
        *counts.entry(&record.ip).or_default() += 1;
    }
    let mut entries: Vec<_> = counts
        .into_iter()
        .map(|(ip, count)| (ip.clone(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub not_found: usize,
    pub top_addresses: Vec<(ClientAddress, usize)>,
}

impl Summary {
    pub fn compute(table: &RecordTable, top_n: usize) -> Self {
        Self {
            not_found: count_by_status(table, NOT_FOUND),
            top_addresses: top_addresses(table, top_n),
        }
    }

    pub fn top_address(&self) -> Option<&(ClientAddress, usize)> {
        self.top_addresses.first()
    }
}
