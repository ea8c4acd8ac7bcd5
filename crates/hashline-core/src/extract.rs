use crate::compress::ChainingValue;
use crate::variant::Variant;
use crate::word::Word;

/// Serializes the final chaining value, all eight words, big-endian.
pub fn extract<V: Variant>(state: &ChainingValue<V::Word>) -> V::Output {
    let mut out = V::ZERO_OUTPUT;
    for (word, bytes) in state
        .iter()
        .zip(out.as_mut().chunks_exact_mut(V::Word::BYTES))
    {
        word.write_be(bytes);
    }
    out
}
