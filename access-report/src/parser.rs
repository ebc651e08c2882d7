use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::{error::Error, models::RawRecord};

// 127.0.0.1 - frank [10/Oct/2023:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 404 2326
static LOG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<ip>\d+\.\d+\.\d+\.\d+)\s+-\s+(?P<user>\w+)\s+\[(?P<time>[^\]]+)\]\s+"(?P<request>[^"]+)"\s+(?P<status>\d+)\s+(?P<size>\d+)"#,
    )
    .expect("valid log pattern")
});

/// Matches a single line; anything after the size column is ignored.
pub fn parse_line(line_number: usize, line: &str) -> Option<RawRecord> {
    let caps = LOG_PATTERN.captures(line)?;
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
    Some(RawRecord {
        line_number,
        ip: group("ip")?,
        user: group("user")?,
        time: group("time")?,
        request: group("request")?,
        status: group("status")?,
        size: group("size")?,
    })
}

/// Parses every line of `reader`, silently dropping the ones that do not
/// match. `path` is only used for error reporting.
pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<RawRecord>, Error> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(record) = parse_line(idx + 1, &line) {
            records.push(record);
        }
    }
    Ok(records)
}

pub fn parse_file(path: &Path) -> Result<Vec<RawRecord>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), path)
}

#[cfg(test)]
mod test {
    use super::*;
    use asserting::{expectations::IsEqualTo, prelude::*};
    use std::io::{Cursor, Write};

    fn parse_str(input: &str) -> Vec<RawRecord> {
        parse_reader(Cursor::new(input), Path::new("inline.log")).unwrap()
    }

    #[test]
    fn parse_line_valid() {
        let line =
            r#"127.0.0.1 - frank [10/Oct/2023:13:55:36] "GET /apache_pb.gif HTTP/1.0" 404 2326"#;
        assert_that!(parse_line(1, line))
            .is_some()
            .mapping(|o| o.unwrap())
            .expecting(IsEqualTo {
                expected: RawRecord {
                    line_number: 1,
                    ip: "127.0.0.1".into(),
                    user: "frank".into(),
                    time: "10/Oct/2023:13:55:36".into(),
                    request: "GET /apache_pb.gif HTTP/1.0".into(),
                    status: "404".into(),
                    size: "2326".into(),
                },
            });
    }

    #[test]
    fn parse_line_keeps_timezone_in_raw_time() {
        let line = r#"10.1.2.3 - alice [01/Jun/1995:00:00:59 -0600] "GET /index.html HTTP/1.1" 200 271"#;
        let record = parse_line(7, line).unwrap();
        assert_that!(record.time.as_str()).is_equal_to("01/Jun/1995:00:00:59 -0600");
        assert_that!(record.line_number).is_equal_to(7);
    }

    #[test]
    fn parse_line_ignores_trailing_text() {
        let line = r#"10.1.2.3 - bob [x] "GET / HTTP/1.1" 200 12 "-" "curl/8.0""#;
        let record = parse_line(1, line).unwrap();
        assert_that!(record.size.as_str()).is_equal_to("12");
    }

    #[test]
    fn parse_line_rejects_foreign_lines() {
        let lines = [
            // dash is not a word character
            r#"202.32.92.47 - - [01/Jun/1995:00:00:59 -0600] "GET /~scottp/publish.html" 200 271"#,
            r#"10.0.0.1 - bob 01/Jun/1995:00:00:59 "GET / HTTP/1.1" 200 271"#,
            r#"10.0.0.1 - bob [01/Jun/1995:00:00:59] GET / HTTP/1.1 200 271"#,
            r#"localhost - bob [01/Jun/1995:00:00:59] "GET / HTTP/1.1" 200 271"#,
            r#"10.0.0.1 - bob [01/Jun/1995:00:00:59] "GET / HTTP/1.1" 200 -"#,
            r#"{"ts":"2025-07-25T23:59:59Z","level":"INFO","msg":"Cache miss"}"#,
            "",
        ];
        for line in lines {
            assert_that!(parse_line(1, line)).is_none();
        }
    }

    #[test]
    fn parse_line_requires_match_at_line_start() {
        let line = r#"junk 127.0.0.1 - frank [t] "GET / HTTP/1.0" 404 1"#;
        assert_that!(parse_line(1, line)).is_none();
    }

    #[test]
    fn parse_reader_skips_unmatched_lines_and_numbers_from_one() {
        let input = concat!(
            "10.0.0.1 - a [t1] \"GET / HTTP/1.1\" 200 10\n",
            "garbage line\n",
            "10.0.0.2 - b [t2] \"GET /x HTTP/1.1\" 404 0\r\n",
        );
        let records = parse_str(input);
        assert_that!(records.len()).is_equal_to(2);
        assert_that!(records[0].line_number).is_equal_to(1);
        assert_that!(records[1].line_number).is_equal_to(3);
        assert_that!(records[1].size.as_str()).is_equal_to("0");
    }

    #[test]
    fn parse_reader_never_returns_more_records_than_lines() {
        let input = "1.1.1.1 - u [t] \"GET\" 200 1\nnope\n\n1.1.1.1 - u [t] \"GET\" 200 1\n";
        let records = parse_str(input);
        assert!(records.len() <= input.lines().count());
        assert_that!(records.len()).is_equal_to(2);
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"192.168.0.9 - carol [t] "POST /login HTTP/1.1" 401 88"#).unwrap();
        writeln!(file, "not a log line").unwrap();
        let records = parse_file(file.path()).unwrap();
        assert_that!(records.len()).is_equal_to(1);
        assert_that!(records[0].ip.as_str()).is_equal_to("192.168.0.9");
    }

    #[test]
    fn parse_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.log");
        let err = parse_file(&missing).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("absent.log"));
    }

    #[test]
    fn parse_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"10.0.0.1 - a [t] \"GET\" 200 1\n\xff\xfe\n";
        let err = parse_reader(Cursor::new(bytes), Path::new("bin.log")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
