use crate::package_graph::domain::PackageRecord;
use tracing::{debug, trace};

/// Separator between package blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// IndexParser service for the APKINDEX text format
///
/// The index is a sequence of blocks separated by a blank line. Each line of
/// a block is `<key>:<value>` with a single-character key:
///
/// | key | field | key | field |
/// |-----|-------|-----|-------|
/// | `P` | name | `o` | origin |
/// | `V` | version | `m` | maintainer |
/// | `A` | architecture | `t` | build timestamp |
/// | `S` | size | `c` | commit |
/// | `I` | installed size | `T` | description |
/// | `D` | dependencies | `U` | url |
/// | `p` | provides | `L` | license |
///
/// Parsing is lenient and never fails: unknown keys are ignored, bad numbers
/// keep their default, and blocks without both `P` and `V` are dropped.
pub struct IndexParser;

impl IndexParser {
    /// Parses raw index text into package records, in order of appearance.
    pub fn parse(content: &str) -> Vec<PackageRecord> {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for block in content.split(BLOCK_SEPARATOR) {
            if block.trim().is_empty() {
                continue;
            }

            match Self::parse_block(block) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    trace!(block = %block.lines().next().unwrap_or_default(), "dropping block without name or version");
                }
            }
        }

        debug!(records = records.len(), dropped, "parsed package index");
        records
    }

    /// Parses one block; `None` when the identity fields are missing.
    fn parse_block(block: &str) -> Option<PackageRecord> {
        let mut draft = RecordDraft::default();

        for line in block.split('\n') {
            let (key, value) = line.split_once(':').unwrap_or((line, ""));
            let value = value.trim();

            match key {
                "P" => draft.name = value.to_string(),
                "V" => draft.version = value.to_string(),
                "A" => draft.architecture = value.to_string(),
                "S" => draft.size = parse_size(value),
                "I" => draft.installed_size = parse_size(value),
                "D" => draft.dependencies = split_tokens(value),
                "p" => draft.provides = split_tokens(value),
                "o" => draft.origin = value.to_string(),
                "m" => draft.maintainer = value.to_string(),
                "t" => draft.timestamp = parse_leading_int(value),
                "c" => draft.commit = Some(value.to_string()),
                "T" => draft.description = value.to_string(),
                "U" => draft.url = value.to_string(),
                "L" => draft.license = value.to_string(),
                _ => {}
            }
        }

        draft.into_record()
    }
}

/// Fields collected while reading a block
#[derive(Default)]
struct RecordDraft {
    name: String,
    version: String,
    architecture: String,
    size: u64,
    installed_size: u64,
    dependencies: Vec<String>,
    provides: Vec<String>,
    origin: String,
    maintainer: String,
    timestamp: Option<i64>,
    commit: Option<String>,
    description: String,
    url: String,
    license: String,
}

impl RecordDraft {
    fn into_record(self) -> Option<PackageRecord> {
        let mut record = PackageRecord::new(self.name, self.version)?
            .with_architecture(self.architecture)
            .with_size(self.size)
            .with_installed_size(self.installed_size)
            .with_dependencies(self.dependencies)
            .with_provides(self.provides)
            .with_origin(self.origin)
            .with_maintainer(self.maintainer)
            .with_description(self.description)
            .with_url(self.url)
            .with_license(self.license);

        if let Some(timestamp) = self.timestamp {
            record = record.with_timestamp(timestamp);
        }
        if let Some(commit) = self.commit {
            record = record.with_commit(commit);
        }
        Some(record)
    }
}

/// Splits a `D:`/`p:` value on single spaces, dropping empty tokens
fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Byte counts: negative or unparseable values fall back to 0
fn parse_size(value: &str) -> u64 {
    parse_leading_int(value)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

/// Reads an optionally signed run of leading decimal digits ("123abc" is 123).
fn parse_leading_int(value: &str) -> Option<i64> {
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
