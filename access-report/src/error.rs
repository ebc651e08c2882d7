use std::{io, num::ParseIntError, path::PathBuf};

use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[display("line {line_number}: {field} value {value:?} is not a valid integer: {source}")]
    InvalidField {
        line_number: usize,
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[display("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}
