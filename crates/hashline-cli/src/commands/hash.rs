use crate::Cli;
use crate::input::read_message;
use crate::progress::BarProgress;
use anyhow::Result;
use hashline_render::{DigestRecord, JsonlWriter, TextWriter};
use std::io;
use std::path::Path;
use tracing::info;

pub fn run(cli: &Cli, path: &Path) -> Result<()> {
    let message = read_message(path)?;
    let algorithm = cli.algorithm();
    let blocks = algorithm.block_count(message.len() as u64);

    info!(%algorithm, blocks, "hashing {}", path.display());

    let digest = if cli.show_progress() {
        let mut bar = BarProgress::new(blocks)?;
        let digest = algorithm.digest_with_progress(&message, &mut bar);
        bar.finish();
        digest?
    } else {
        algorithm.digest(&message)?
    };

    let record = DigestRecord {
        algorithm,
        path: path.display().to_string(),
        bytes: message.len() as u64,
        blocks,
        digest,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        JsonlWriter::new()
            .include_blocks(true)
            .write_to(&mut out, &[record])?;
    } else {
        TextWriter::new()
            .tagged(cli.tag)
            .write_to(&mut out, &[record])?;
    }

    Ok(())
}
