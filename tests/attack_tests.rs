use aesbreak::{ByteAtATime, ChosenCipherSet, EcbSuffixOracle, Error, Key, Result};

#[test]
fn recovers_hello_with_random_key() -> Result<()> {
    let oracle = EcbSuffixOracle::new(b"hello".to_vec())?;
    let secret = ByteAtATime::discover(&oracle)?.recover_secret()?;
    assert_eq!(secret, b"hello");
    Ok(())
}

#[test]
fn independent_oracles_do_not_interfere() -> Result<()> {
    let first = EcbSuffixOracle::new(b"first secret".to_vec())?;
    let second = EcbSuffixOracle::new(b"a rather longer second secret!".to_vec())?;

    let attack_first = ByteAtATime::new(&first, 16)?;
    let attack_second = ByteAtATime::new(&second, 16)?;

    assert_eq!(attack_second.recover_secret()?, b"a rather longer second secret!");
    assert_eq!(attack_first.recover_secret()?, b"first secret");
    Ok(())
}

#[test]
fn reference_table_is_reusable() -> Result<()> {
    let oracle = EcbSuffixOracle::with_key(&Key::random()?, b"reused table".to_vec());
    let attack = ByteAtATime::new(&oracle, 16)?;

    let table = attack.chosen_ciphers()?;
    assert_eq!(table, ChosenCipherSet::build(&oracle, 16)?);
    assert_eq!(attack.recover_secret_with(&table)?, b"reused table");
    assert_eq!(attack.recover_secret_with(&table)?, b"reused table");
    Ok(())
}

#[test]
fn table_from_another_key_fails_at_first_byte() -> Result<()> {
    let secret = b"same secret".to_vec();
    let oracle = EcbSuffixOracle::new(secret.clone())?;
    let other = EcbSuffixOracle::new(secret)?;

    let stale = ChosenCipherSet::build(&other, 16)?;
    let attack = ByteAtATime::new(&oracle, 16)?;

    assert!(matches!(
        attack.recover_secret_with(&stale),
        Err(Error::NoCandidate { position: 0 })
    ));
    Ok(())
}

#[test]
fn counts_oracle_queries() -> Result<()> {
    let oracle = EcbSuffixOracle::new(b"hi".to_vec())?;
    let attack = ByteAtATime::new(&oracle, 16)?;
    let secret = attack.recover_secret()?;

    assert_eq!(secret, b"hi");
    // 16 reference queries plus at most 256 guesses for each of the 4 bytes tried
    assert!(oracle.queries() > 16);
    assert!(oracle.queries() <= 16 + 4 * 256);
    Ok(())
}
