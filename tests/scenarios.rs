//! End-to-end sign/verify scenarios at the public API.
use merkle_ots::hash::Blake2b256;
use merkle_ots::merkle::MerkleTree;
use merkle_ots::ots::OneTimeKey;
use merkle_ots::{Config, Error, HashSigScheme, PublicRoot, Seed};

#[test]
fn height_4_w16() {
    let scheme = HashSigScheme::new(Config::new(4, 16));
    let kp = scheme.generate_keypair();
    let root = kp.public_root();

    assert_eq!(root.as_bytes().len(), 32);
    assert_eq!(kp.capacity(), 16);

    let message = b"hello, post-quantum world";
    let sig = kp.sign(message).unwrap();
    assert_eq!(sig.leaf_index(), 0);
    assert_eq!(sig.auth_path().len(), 4);
    assert_eq!(sig.chain_outputs().len(), 64);
    assert!(scheme.verify(&root, message, &sig));
}

#[test]
fn height_3_w4_until_exhaustion() {
    let scheme = HashSigScheme::new(Config::new(3, 4));
    let kp = scheme.generate_keypair();
    let root = kp.public_root();

    for i in 0..8u32 {
        let message = format!("message {}", i);
        let sig = kp.sign(message.as_bytes()).unwrap();
        assert_eq!(sig.leaf_index(), i);
        assert_eq!(sig.chain_outputs().len(), 133);
        assert!(scheme.verify(&root, message.as_bytes(), &sig));
    }

    assert_eq!(
        kp.sign(b"ninth").unwrap_err(),
        Error::KeyExhausted { capacity: 8 }
    );
    assert_eq!(kp.leaf_cursor(), 8);
    assert_eq!(kp.remaining_signatures(), 0);
}

#[test]
fn height_0_single_leaf() {
    let scheme = HashSigScheme::new(Config::new(0, 16));
    let seed = [0x5au8; 32];
    let kp = scheme.keypair_from_seed(Seed::from_bytes(seed));
    let root = kp.public_root();

    let only_leaf = OneTimeKey::derive::<Blake2b256>(&Seed::from_bytes(seed), 0, scheme.params())
        .public_digest::<Blake2b256>(scheme.params());
    assert_eq!(root.to_digest(), only_leaf);
    assert_eq!(kp.capacity(), 1);

    let sig = kp.sign(b"single").unwrap();
    assert!(sig.auth_path().is_empty());
    assert!(scheme.verify(&root, b"single", &sig));
    assert!(kp.sign(b"again").is_err());
}

#[test]
fn leaf_indices_are_sequential_and_unique() {
    let scheme = HashSigScheme::new(Config::new(3, 16));
    let kp = scheme.generate_keypair();

    let indices: Vec<u32> = (0..8)
        .map(|i| kp.sign(&[i as u8, 0xaa, 0xbb]).unwrap().leaf_index())
        .collect();
    assert_eq!(indices, (0..8).collect::<Vec<u32>>());
    assert!(kp.is_exhausted());
}

#[test]
fn remaining_signatures_counts_down() {
    let scheme = HashSigScheme::new(Config::new(3, 16));
    let kp = scheme.generate_keypair();
    assert_eq!(kp.remaining_signatures(), 8);
    kp.sign(b"msg1").unwrap();
    assert_eq!(kp.remaining_signatures(), 7);
    kp.sign(b"msg2").unwrap();
    assert_eq!(kp.remaining_signatures(), 6);
}

#[test]
fn signature_cap_reserves_leaves() {
    let scheme = HashSigScheme::new(Config::new(3, 16).with_max_signatures(3));
    let kp = scheme.generate_keypair();
    let root = kp.public_root();
    assert_eq!(kp.capacity(), 3);
    assert_eq!(kp.tree().leaves(), 8);

    for _ in 0..3 {
        let sig = kp.sign(b"capped").unwrap();
        assert!(scheme.verify(&root, b"capped", &sig));
    }
    assert!(kp.sign(b"capped").is_err());
}

#[test]
fn cross_message_and_wrong_root() {
    let scheme = HashSigScheme::new(Config::new(3, 16));
    let kp = scheme.generate_keypair();
    let root = kp.public_root();

    let sig1 = kp.sign(b"first message").unwrap();
    let sig2 = kp.sign(b"second message").unwrap();
    assert!(scheme.verify(&root, b"first message", &sig1));
    assert!(scheme.verify(&root, b"second message", &sig2));
    assert!(!scheme.verify(&root, b"second message", &sig1));
    assert!(!scheme.verify(&root, b"first message", &sig2));

    let mut wrong = root.to_digest();
    wrong[0] ^= 0xff;
    assert!(!scheme.verify(&PublicRoot::from(wrong), b"first message", &sig1));

    let other = scheme.generate_keypair().public_root();
    assert!(!scheme.verify(&other, b"first message", &sig1));
}

#[test]
fn parameter_mismatch_fails_closed() {
    let signer = HashSigScheme::new(Config::new(3, 16));
    let kp = signer.generate_keypair();
    let root = kp.public_root();
    let sig = kp.sign(b"params").unwrap();

    assert!(!HashSigScheme::new(Config::new(3, 4)).verify(&root, b"params", &sig));
    assert!(!HashSigScheme::new(Config::new(4, 16)).verify(&root, b"params", &sig));
}

#[test]
fn normalised_config_still_signs() {
    // Height above the maximum would be slow to build, so only check the base.
    let scheme = HashSigScheme::new(Config::new(2, 7));
    assert_eq!(scheme.params().chain_count(), 64);
    let kp = scheme.generate_keypair();
    let sig = kp.sign(b"w defaults to 16").unwrap();
    assert!(scheme.verify(&kp.public_root(), b"w defaults to 16", &sig));
}

#[test]
fn tree_matches_independent_build() {
    let scheme = HashSigScheme::new(Config::new(2, 4));
    let seed = [0x11u8; 32];
    let kp = scheme.keypair_from_seed(Seed::from_bytes(seed));

    let leaves: Vec<_> = (0..4)
        .map(|i| {
            OneTimeKey::derive::<Blake2b256>(&Seed::from_bytes(seed), i, scheme.params())
                .public_digest::<Blake2b256>(scheme.params())
        })
        .collect();
    let tree = MerkleTree::from_leaves::<Blake2b256>(&leaves);
    assert_eq!(kp.public_root().to_digest(), tree.root());
}
