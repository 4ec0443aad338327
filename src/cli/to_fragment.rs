use crate::{fragment::ToXml, row::Row};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

/// Opens the CSV at `input` and writes its fragment to `output`.
///
/// The file stays open only for the duration of the scan.
pub fn csv_to_fragment(input: &Path, output: impl Write) -> Result<usize, Error> {
    let file = File::open(input).map_err(|source| Error::CannotOpen {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("Opened `{}`", input.display());

    let count = convert(BufReader::new(file), output)?;
    info!("Converted {} rows from `{}`", count, input.display());
    Ok(count)
}

/// Writes one fragment line per input line, in input order, and returns how
/// many were written.
///
/// Lines are handled as bytes, so input in any ASCII-compatible encoding
/// comes out in that same encoding. Stops at the first bad line. Whatever was
/// written before it stays written.
pub fn convert(mut input: impl BufRead, mut output: impl Write) -> Result<usize, Error> {
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let line_no = count + 1;
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::CannotRead { line_no, source })?;
        if read == 0 {
            break;
        }

        let line = strip_line_ending(&buf);
        let row = Row::parse(line).map_err(|source| Error::InvalidRow { line_no, source })?;

        let entry = row.to_entry();
        debug!("line {}: {}", line_no, entry.kind());
        entry
            .write_xml(&mut output)
            .map_err(|source| Error::CannotWrite { source })?;
        count += 1;
    }

    Ok(count)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not open `{}`", path.display())]
    CannotOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not read line {line_no}")]
    CannotRead {
        line_no: usize,
        source: std::io::Error,
    },
    #[error("Invalid row on line {line_no}")]
    InvalidRow {
        line_no: usize,
        source: crate::row::Error,
    },
    #[error("Could not write fragment")]
    CannotWrite { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<usize, Error>, String) {
        let mut out = vec![];
        let res = convert(Cursor::new(input), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn converts_all_three_shapes() {
        let input = "\"Menus\",\nopen,\"Open\"\n,\"First\"\n,\"Second\"\nsave, \"Save as…\" \n";
        let (res, out) = run(input);
        assert_eq!(res.unwrap(), 5);
        assert_eq!(
            out,
            "<!-- Menus -->\n\
             <string name=open>Open</string>\n\
             <item>First</item>\n\
             <item>Second</item>\n\
             <string name=save>Save as…</string>\n"
        );
    }

    #[test]
    fn crlf_line_endings() {
        let (res, out) = run("a,\"A\"\r\n,\"B\"\r\n");
        assert_eq!(res.unwrap(), 2);
        assert_eq!(out, "<string name=a>A</string>\n<item>B</item>\n");
    }

    #[test]
    fn latin1_passes_through() {
        let mut out = vec![];
        let res = convert(Cursor::new(&b"ok,\"fine\"\nsave,\"Enregistr\xe9\"\n"[..]), &mut out);
        assert_eq!(res.unwrap(), 2);
        assert_eq!(
            out,
            &b"<string name=ok>fine</string>\n<string name=save>Enregistr\xe9</string>\n"[..]
        );
    }

    #[test]
    fn last_line_without_newline() {
        let (res, out) = run("a,\"A\"\n,\"B\"");
        assert_eq!(res.unwrap(), 2);
        assert_eq!(out, "<string name=a>A</string>\n<item>B</item>\n");
    }

    #[test]
    fn bare_comma_is_an_empty_comment() {
        let (res, out) = run(",\n,\"\"\n");
        assert_eq!(res.unwrap(), 2);
        assert_eq!(out, "<!--  -->\n<!--  -->\n");
    }

    #[test]
    fn empty_input() {
        let (res, out) = run("");
        assert_eq!(res.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn keeps_output_before_bad_row() {
        let (res, out) = run("a,\"A\"\njusttext\nb,\"B\"\n");
        match res {
            Err(Error::InvalidRow {
                line_no: 2,
                source: crate::row::Error::MalformedRow { line },
            }) => assert_eq!(line, "justtext"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(out, "<string name=a>A</string>\n");
    }

    #[test]
    fn blank_line_is_malformed() {
        let (res, _) = run("a,\"A\"\n\n");
        assert!(matches!(res, Err(Error::InvalidRow { line_no: 2, .. })));
    }

    #[test]
    fn unquoted_value() {
        let (res, out) = run("a,Hello\n");
        assert!(matches!(
            res,
            Err(Error::InvalidRow {
                line_no: 1,
                source: crate::row::Error::MalformedValue { .. }
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let res = csv_to_fragment(&path, std::io::sink());
        assert!(matches!(res, Err(Error::CannotOpen { .. })));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.csv");
        std::fs::write(&path, "title,\"Dasher\"\n").unwrap();

        let mut out = vec![];
        assert_eq!(csv_to_fragment(&path, &mut out).unwrap(), 1);
        assert_eq!(out, b"<string name=title>Dasher</string>\n");
    }
}
