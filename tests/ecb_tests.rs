#![cfg(feature = "test-vectors")]

// Known-answer vectors from FIPS-197 (Appendices B and C.1), NIST SP 800-38A (F.1.1) and
// the AESAVS GFSbox set (Appendix B).

use aesbreak::{
    Block, Cipher, Key, KeySchedule, Result, decrypt_block, decrypt_ecb_serial, encrypt_block,
    encrypt_ecb_parallel, encrypt_ecb_partitioned, encrypt_ecb_serial,
};
use hex_literal::hex;

struct BlockVector {
    key: [u8; 16],
    plaintext: Block,
    ciphertext: Block,
}

const BLOCK_VECTORS: &[BlockVector] = &[
    // FIPS-197 Appendix B
    BlockVector {
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("3243f6a8885a308d313198a2e0370734"),
        ciphertext: hex!("3925841d02dc09fbdc118597196a0b32"),
    },
    // FIPS-197 Appendix C.1
    BlockVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    // AESAVS GFSbox
    BlockVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("f34481ec3cc627bacd5dc3fb08f273e6"),
        ciphertext: hex!("0336763e966d92595a567cc9ce537f5e"),
    },
    BlockVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("9798c4640bad75c7c3227db910174e72"),
        ciphertext: hex!("a9a1631bf4996954ebc093957b234589"),
    },
    BlockVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("96ab5c2ff612d9dfaae8c31f30c42168"),
        ciphertext: hex!("ff4f8391a6a40ca5b25d23bedd44a597"),
    },
];

const SP800_38A_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");

const SP800_38A_PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

const SP800_38A_CIPHERTEXT: [u8; 64] = hex!(
    "3ad77bb40d7a3660a89ecaf32466ef97"
    "f5d3d58503b9699de785895a96fdbaaf"
    "43b1cd7f598ece23881b00e3ed030688"
    "7b0c785e27e8ad3f8223207104725dd4"
);

#[test]
fn block_known_answers() -> Result<()> {
    for (i, v) in BLOCK_VECTORS.iter().enumerate() {
        let schedule = KeySchedule::new(&Key::try_from_slice(&v.key)?);

        let ct = encrypt_block(&v.plaintext, schedule.round_keys());
        assert_eq!(ct, v.ciphertext, "vector {i}: encrypt mismatch");

        let pt = decrypt_block(&v.ciphertext, schedule.round_keys());
        assert_eq!(pt, v.plaintext, "vector {i}: decrypt mismatch");
    }
    Ok(())
}

#[test]
fn ecb_known_answer_all_paths() -> Result<()> {
    let schedule = KeySchedule::new(&Key::try_from_slice(&SP800_38A_KEY)?);

    let mut serial = SP800_38A_PLAINTEXT;
    encrypt_ecb_serial(&mut serial, &schedule)?;
    assert_eq!(serial, SP800_38A_CIPHERTEXT, "serial encrypt mismatch");

    let mut parallel = SP800_38A_PLAINTEXT;
    encrypt_ecb_parallel(&mut parallel, &schedule)?;
    assert_eq!(parallel, SP800_38A_CIPHERTEXT, "parallel encrypt mismatch");

    for workers in 1..=5 {
        let mut partitioned = SP800_38A_PLAINTEXT;
        encrypt_ecb_partitioned(&mut partitioned, &schedule, workers)?;
        assert_eq!(
            partitioned, SP800_38A_CIPHERTEXT,
            "{workers} worker encrypt mismatch"
        );
    }

    let mut decrypted = SP800_38A_CIPHERTEXT;
    decrypt_ecb_serial(&mut decrypted, &schedule)?;
    assert_eq!(decrypted, SP800_38A_PLAINTEXT, "decrypt mismatch");
    Ok(())
}

#[test]
fn padded_ecb_known_answer() -> Result<()> {
    let cipher = Cipher::new(&Key::try_from_slice(&SP800_38A_KEY)?);
    let ciphertext = cipher.encrypt_ecb(&SP800_38A_PLAINTEXT)?;

    // aligned input gains a full padding block after the four vector blocks
    assert_eq!(ciphertext.len(), 80);
    assert_eq!(ciphertext[..64], SP800_38A_CIPHERTEXT);

    let mut pad_block = [16u8; 16];
    cipher.encrypt_blocks(&mut pad_block)?;
    assert_eq!(ciphertext[64..], pad_block);

    assert_eq!(cipher.decrypt_ecb(&ciphertext)?, SP800_38A_PLAINTEXT);
    Ok(())
}
