use derive_more::{AsRef, Debug, Display};

/// Client address as captured from the log. Four digit runs separated by
/// dots; not checked against IPv4 octet ranges.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct ClientAddress(String);

impl ClientAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ClientAddress {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}
