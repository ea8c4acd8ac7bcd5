//! Published SHA-2 test vectors, padding boundaries, and cross-checks against the `sha2` crate.

use hashline_core::{Algorithm, Padding, Sha256, Sha512, Variant, digest, sha256, sha512};
use hex_literal::hex;
use proptest::prelude::*;
use sha2::Digest;

const TWO_BLOCK_256: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

// --- SHA-256 ---

#[test]
fn sha256_empty() {
    assert_eq!(
        sha256(b"").unwrap(),
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
}

#[test]
fn sha256_abc() {
    assert_eq!(
        sha256(b"abc").unwrap(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
}

#[test]
fn sha256_two_blocks() {
    assert_eq!(Padding::<Sha256>::new(TWO_BLOCK_256).unwrap().block_count(), 2);
    assert_eq!(
        sha256(TWO_BLOCK_256).unwrap(),
        hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
    );
}

#[test]
fn sha256_million_a() {
    let message = vec![b'a'; 1_000_000];
    assert_eq!(
        sha256(&message).unwrap(),
        hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
    );
}

// --- SHA-512 ---

#[test]
fn sha512_empty() {
    assert_eq!(
        sha512(b"").unwrap(),
        hex!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
            "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        )
    );
}

#[test]
fn sha512_abc() {
    assert_eq!(
        sha512(b"abc").unwrap(),
        hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
}

#[test]
fn sha512_two_blocks() {
    assert_eq!(Padding::<Sha512>::new(TWO_BLOCK_512).unwrap().block_count(), 2);
    assert_eq!(
        sha512(TWO_BLOCK_512).unwrap(),
        hex!(
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018"
            "501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
        )
    );
}

#[test]
fn sha512_million_a() {
    let message = vec![b'a'; 1_000_000];
    assert_eq!(
        sha512(&message).unwrap(),
        hex!(
            "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb"
            "de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
        )
    );
}

// --- Padding boundaries ---

fn check_boundary<V: Variant>(len: usize, expected_blocks: usize, expect_spill: bool) {
    let message: Vec<u8> = (0..len).map(|i| i as u8).collect();
    let padding = Padding::<V>::new(&message).unwrap();
    assert_eq!(padding.block_count(), expected_blocks, "{len} bytes");
    assert_eq!(padding.spills(), expect_spill, "{len} bytes");
    assert_eq!(padding.padded_len() % V::BLOCK_LEN, 0);

    let ours = digest::<V>(&message).unwrap();
    let reference = match V::ALGORITHM {
        Algorithm::Sha256 => sha2::Sha256::digest(&message).to_vec(),
        Algorithm::Sha512 => sha2::Sha512::digest(&message).to_vec(),
    };
    assert_eq!(ours.as_ref(), &reference[..], "{len} bytes");
}

#[test]
fn sha256_block_size_minus_9() {
    check_boundary::<Sha256>(64 - 9, 1, false);
}

#[test]
fn sha256_block_size_minus_8_spills() {
    check_boundary::<Sha256>(64 - 8, 2, true);
}

#[test]
fn sha256_block_size_minus_1() {
    check_boundary::<Sha256>(64 - 1, 2, true);
}

#[test]
fn sha256_exact_block() {
    check_boundary::<Sha256>(64, 2, false);
}

#[test]
fn sha512_block_size_minus_17() {
    check_boundary::<Sha512>(128 - 17, 1, false);
}

#[test]
fn sha512_block_size_minus_16_spills() {
    check_boundary::<Sha512>(128 - 16, 2, true);
}

#[test]
fn sha512_block_size_minus_9() {
    check_boundary::<Sha512>(128 - 9, 2, true);
}

#[test]
fn sha512_block_size_minus_1() {
    check_boundary::<Sha512>(128 - 1, 2, true);
}

#[test]
fn every_length_up_to_three_blocks() {
    for len in 0..=3 * 128 {
        let message = vec![0xa5u8; len];
        assert_eq!(
            &sha256(&message).unwrap()[..],
            &sha2::Sha256::digest(&message)[..],
            "sha256 of {len} bytes"
        );
        assert_eq!(
            &sha512(&message).unwrap()[..],
            &sha2::Sha512::digest(&message)[..],
            "sha512 of {len} bytes"
        );
    }
}

// --- Runtime dispatch ---

#[test]
fn algorithm_dispatch_matches_generic_entry_points() {
    let message = b"hashline";
    assert_eq!(
        Algorithm::Sha256.digest(message).unwrap(),
        sha256(message).unwrap().to_vec()
    );
    assert_eq!(
        Algorithm::Sha512.digest(message).unwrap(),
        sha512(message).unwrap().to_vec()
    );
}

proptest! {
    #[test]
    fn sha256_matches_reference(message in proptest::collection::vec(any::<u8>(), 0..600)) {
        let ours = sha256(&message).unwrap();
        prop_assert_eq!(&ours[..], &sha2::Sha256::digest(&message)[..]);
    }

    #[test]
    fn sha512_matches_reference(message in proptest::collection::vec(any::<u8>(), 0..600)) {
        let ours = sha512(&message).unwrap();
        prop_assert_eq!(&ours[..], &sha2::Sha512::digest(&message)[..]);
    }

    #[test]
    fn digest_is_deterministic_and_fixed_size(message in proptest::collection::vec(any::<u8>(), 0..300)) {
        for algorithm in Algorithm::ALL {
            let first = algorithm.digest(&message).unwrap();
            let second = algorithm.digest(&message).unwrap();
            prop_assert_eq!(first.len(), algorithm.digest_len());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn block_count_formula(len in 0usize..2000) {
        let message = vec![0u8; len];
        let sha256_blocks = Padding::<Sha256>::new(&message).unwrap().blocks().count();
        let sha512_blocks = Padding::<Sha512>::new(&message).unwrap().blocks().count();
        prop_assert_eq!(sha256_blocks, (len + 1 + 8).div_ceil(64));
        prop_assert_eq!(sha512_blocks, (len + 1 + 16).div_ceil(128));
    }
}
