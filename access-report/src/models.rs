use crate::invariants::ClientAddress;

/// Named groups captured from one matching line, before any casting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line_number: usize,
    pub ip: String,
    pub user: String,
    pub time: String,
    pub request: String,
    pub status: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub ip: ClientAddress,
    pub user: String,
    pub time: String,
    pub request: String,
    pub status: u16,
    pub size: u64,
}
