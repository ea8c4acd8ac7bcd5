use hashline_core::Algorithm;
use serde::Serialize;
use std::io::Write;

use crate::DigestRecord;

/// Writes one JSON object per digest.
#[derive(Debug, Default)]
pub struct JsonlWriter {
    include_blocks: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry<'a> {
    algorithm: Algorithm,
    path: &'a str,
    bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<u64>,
    digest: String,
}

impl JsonlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the padded block count in every entry.
    pub fn include_blocks(mut self, include_blocks: bool) -> Self {
        self.include_blocks = include_blocks;
        self
    }

    /// Render records as a JSON Lines string.
    pub fn render(&self, records: &[DigestRecord]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, records)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSON Lines output to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, records: &[DigestRecord]) -> anyhow::Result<()> {
        for record in records {
            let entry = Entry {
                algorithm: record.algorithm,
                path: &record.path,
                bytes: record.bytes,
                blocks: self.include_blocks.then_some(record.blocks),
                digest: record.hex(),
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::record;

    #[test]
    fn entry_fields() {
        let output = JsonlWriter::new()
            .render(&[record(Algorithm::Sha256, "abc.txt", b"abc")])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["Algorithm"], "sha256");
        assert_eq!(parsed["Path"], "abc.txt");
        assert_eq!(parsed["Bytes"], 3);
        assert_eq!(
            parsed["Digest"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(parsed.get("Blocks").is_none());
    }

    #[test]
    fn blocks_included_on_request() {
        let output = JsonlWriter::new()
            .include_blocks(true)
            .render(&[record(Algorithm::Sha512, "zeros", &[0; 200])])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["Blocks"], 2);
        assert_eq!(parsed["Algorithm"], "sha512");
    }

    #[test]
    fn every_line_is_valid_json() {
        let records = vec![
            record(Algorithm::Sha256, "a \"quoted\" name", b"a"),
            record(Algorithm::Sha512, "b", b"b"),
        ];
        let output = JsonlWriter::new().render(&records).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
            assert!(parsed.is_ok(), "Invalid JSON: {line}");
        }
    }
}
