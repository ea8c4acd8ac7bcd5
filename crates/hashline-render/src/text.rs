use std::io::Write;

use crate::DigestRecord;

/// Writes `<hex>  <path>` lines, the layout `sha256sum` and `sha512sum` use.
#[derive(Debug, Default)]
pub struct TextWriter {
    tagged: bool,
}

impl TextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the BSD tagged layout instead: `SHA256 (<path>) = <hex>`.
    pub fn tagged(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    pub fn render(&self, records: &[DigestRecord]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, records)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(&self, writer: &mut dyn Write, records: &[DigestRecord]) -> anyhow::Result<()> {
        for record in records {
            if self.tagged {
                writeln!(
                    writer,
                    "{} ({}) = {}",
                    record.algorithm.as_str().to_ascii_uppercase(),
                    record.path,
                    record.hex()
                )?;
            } else {
                writeln!(writer, "{}  {}", record.hex(), record.path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::record;
    use hashline_core::Algorithm;

    #[test]
    fn plain_line_layout() {
        let output = TextWriter::new()
            .render(&[record(Algorithm::Sha256, "data/abc.txt", b"abc")])
            .unwrap();
        assert_eq!(
            output,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  data/abc.txt\n"
        );
    }

    #[test]
    fn tagged_line_layout() {
        let output = TextWriter::new()
            .tagged(true)
            .render(&[record(Algorithm::Sha512, "empty", b"")])
            .unwrap();
        assert!(output.starts_with("SHA512 (empty) = cf83e1357eefb8bd"));
        assert!(output.ends_with("a538327af927da3e\n"));
    }

    #[test]
    fn one_line_per_record() {
        let records = vec![
            record(Algorithm::Sha256, "a", b"a"),
            record(Algorithm::Sha512, "b", b"b"),
        ];
        let output = TextWriter::new().render(&records).unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn no_records_renders_nothing() {
        assert_eq!(TextWriter::new().render(&[]).unwrap(), "");
    }
}
