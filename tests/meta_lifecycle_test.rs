use wallet_meta::{resolve_coin_type, CoinType, CryptoType, Meta, MetaError, MetaKey};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn test_wallet_lifecycle() {
    init_logging();

    // Generation: the wallet layer stamps identity and derivation state.
    let mut meta = Meta::create(CoinType::Bitcoin, "deterministic");
    meta.set_filename("2026_08_wallet.wlt");
    meta.set_label("cold storage");
    meta.set_seed("abandon abandon abandon abandon abandon abandon abandon about");
    meta.set_last_seed("8d4c3f1a");
    log::info!("created wallet metadata: {:?}", meta);

    assert!(!meta.is_encrypted().unwrap());
    assert_eq!(meta.coin().unwrap(), Some(CoinType::Bitcoin));

    // Snapshot before locking; the snapshot must not observe the mutations.
    let snapshot = meta.clone();

    // Lock: erase plaintext, then record what the crypto layer produced.
    meta.erase_seeds();
    meta.set_encrypted(
        CryptoType::from(CryptoType::SCRYPT_CHACHA20POLY1305),
        "aGVhdmlseS1lbmNyeXB0ZWQ=",
    );

    assert!(meta.is_encrypted().unwrap());
    assert_eq!(meta.seed(), "");
    assert_eq!(meta.last_seed(), "");
    assert_eq!(meta.secrets(), "aGVhdmlseS1lbmNyeXB0ZWQ=");
    assert_eq!(snapshot.seed(), "abandon abandon abandon abandon abandon abandon abandon about");
    assert!(!snapshot.is_encrypted().unwrap());

    // Unlock: the crypto layer decrypts the blob, the wallet layer restores
    // plaintext from it.
    meta.set_decrypted();
    meta.set_seed(snapshot.seed());
    meta.set_last_seed(snapshot.last_seed());

    assert!(!meta.is_encrypted().unwrap());
    assert!(meta.crypto_type().is_empty());
    assert_eq!(meta.secrets(), "");
    assert_eq!(meta, snapshot);
}

#[test]
fn test_bip44_wallet_round_trips_through_persistence() {
    init_logging();

    let mut meta = Meta::create(CoinType::Skycoin, "bip44");
    meta.set_version("0.4");
    meta.set_bip44_coin(8000);
    meta.set_seed_passphrase("correct horse battery staple");
    meta.set_accounts_hash("2f7c49e3");

    // The persistence layer serializes the record verbatim and reads it back.
    let serialized = serde_json::to_string(&meta).unwrap();
    let restored: Meta = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored, meta);
    assert_eq!(restored.bip44_coin().unwrap(), Some(8000));
    assert_eq!(restored.seed_passphrase(), "correct horse battery staple");
    assert_eq!(restored.find(MetaKey::AccountsHash), Some("2f7c49e3"));

    // A watch-only sibling never sets bip44Coin; absence survives the trip.
    let mut watch_only = Meta::create(CoinType::Skycoin, "xpub");
    watch_only.set_xpub("xpub661MyMwAqRbcF");
    let restored: Meta =
        serde_json::from_str(&serde_json::to_string(&watch_only).unwrap()).unwrap();
    assert_eq!(restored.bip44_coin().unwrap(), None);
    assert_eq!(restored.xpub(), "xpub661MyMwAqRbcF");
}

#[test]
fn test_untrusted_coin_names_are_normalized_before_storage() {
    init_logging();

    // User input goes through the resolver, and only the canonical form is
    // ever stored.
    let coin = resolve_coin_type("SKY").unwrap();
    let mut meta = Meta::new();
    meta.set_coin(coin);
    assert_eq!(meta.find(MetaKey::Coin), Some("skycoin"));
    assert_eq!(meta.coin().unwrap(), Some(CoinType::Skycoin));

    assert_eq!(
        resolve_coin_type("eth").unwrap_err(),
        MetaError::InvalidCoinType("eth".to_string())
    );
}
