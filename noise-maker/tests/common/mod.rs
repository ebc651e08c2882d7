/// Line layout accepted by `access-report` (access-report/src/parser.rs,
/// `LOG_PATTERN`). Keep in sync with that parser.
pub const ACCESS_LOG_PATTERN: &str = r#"^(?P<ip>\d+\.\d+\.\d+\.\d+)\s+-\s+(?P<user>\w+)\s+\[(?P<time>[^\]]+)\]\s+"(?P<request>[^"]+)"\s+(?P<status>\d+)\s+(?P<size>\d+)"#;
