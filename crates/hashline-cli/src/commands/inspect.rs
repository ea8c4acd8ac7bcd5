use crate::Cli;
use crate::input::read_message;
use anyhow::Result;
use hashline_core::{Algorithm, Padding, Sha256, Sha512, Variant};
use std::path::Path;

/// Bytes of a block shown per output row.
const ROW_BYTES: usize = 32;

pub fn run(cli: &Cli, path: &Path) -> Result<()> {
    let message = read_message(path)?;

    match cli.algorithm() {
        Algorithm::Sha256 => report::<Sha256>(path, &message),
        Algorithm::Sha512 => report::<Sha512>(path, &message),
    }
}

fn report<V: Variant>(path: &Path, message: &[u8]) -> Result<()> {
    let padding = Padding::<V>::new(message)?;
    let first = padding.first_padding_block();
    let tail = padding.try_collect_blocks_from(first)?;

    println!("File: {}", path.display());
    println!("Algorithm: {}", V::ALGORITHM);
    println!(
        "Message: {} bytes ({} bits)",
        padding.message_len(),
        padding.bit_len()
    );
    println!("Block size: {} bytes", V::BLOCK_LEN);
    println!("Blocks: {}", padding.block_count());
    println!(
        "Padding: 1 marker byte, {} zero bytes, {}-byte length field",
        padding.zero_len(),
        V::LENGTH_FIELD_LEN
    );
    println!(
        "Length field spills into extra block: {}",
        if padding.spills() { "yes" } else { "no" }
    );
    println!();

    println!("Padded blocks:");
    for (index, block) in tail.iter().enumerate() {
        let index = first + index;
        println!("  #{index}");
        for row in block.as_bytes().chunks(ROW_BYTES) {
            println!("    {}", hex::encode(row));
        }
    }

    Ok(())
}
