//! Line-file persistence: one `<word> <meaning>` line per entry.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use typed_builder::TypedBuilder;

use crate::error::Result;

/// How lines in the backing file are split into word and meaning.
/// The word runs up to the first delimiter; everything after it is the
/// meaning and may itself contain delimiters.
#[derive(TypedBuilder, Debug, Clone)]
pub struct LineFormat {
    #[builder(default = ' ')]
    delimiter: char,
}

impl LineFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let split = line.find(self.delimiter)?;
        let (word, rest) = line.split_at(split);
        Some((word, &rest[self.delimiter.len_utf8()..]))
    }
}

/// Handle on the backing dictionary file. Reads the initial batch at
/// startup and appends one line per interactive add.
pub struct Store {
    path: PathBuf,
    format: LineFormat,
}

impl Store {
    pub fn open<P: Into<PathBuf>>(path: P) -> Store {
        Store::with_format(path, LineFormat::builder().build())
    }

    pub fn with_format<P: Into<PathBuf>>(path: P, format: LineFormat) -> Store {
        Store {
            path: path.into(),
            format,
        }
    }

    /// Reads all (word, meaning) pairs from the backing file. Lines
    /// without a delimiter are skipped, as are empty lines. A missing
    /// file yields an empty batch so a fresh dictionary starts empty.
    pub fn load(&self) -> Result<Vec<(String, String)>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut pairs = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some((word, meaning)) = self.format.parse_line(&line) {
                pairs.push((word.to_string(), meaning.to_string()));
            }
        }
        Ok(pairs)
    }

    /// Appends a single entry line, creating the file if needed.
    pub fn append(&self, word: &str, meaning: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}{}{}", word, self.format.delimiter, meaning)?;
        Ok(())
    }
}
