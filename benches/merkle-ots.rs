#[macro_use]
extern crate criterion;
use criterion::Criterion;
use merkle_ots::{Config, HashSigScheme, Seed};

fn bench_keygen(height: u32, w: u32, c: &mut Criterion) {
    let scheme = HashSigScheme::new(Config::new(height, w));
    c.bench_function(
        format!("KeyGen with height: {}, w: {}", height, w).as_str(),
        |b| {
            b.iter(|| {
                scheme.keypair_from_seed(Seed::from_bytes([0u8; 32]));
            })
        },
    );
}

fn bench_sign(height: u32, w: u32, c: &mut Criterion) {
    // A fresh key per iteration, so criterion never runs the key out of leaves.
    let scheme = HashSigScheme::new(Config::new(height, w));
    let msg = [0u8; 256];
    c.bench_function(
        format!("Signature with height: {}, w: {}", height, w).as_str(),
        |b| {
            b.iter_batched(
                || scheme.keypair_from_seed(Seed::from_bytes([0u8; 32])),
                |kp| kp.sign(&msg).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        },
    );
}

fn bench_verify(height: u32, w: u32, c: &mut Criterion) {
    let scheme = HashSigScheme::new(Config::new(height, w));
    let kp = scheme.keypair_from_seed(Seed::from_bytes([0u8; 32]));
    let pk = kp.public_root();
    let msg = [0u8; 256];
    let signature = kp.sign(&msg).unwrap();
    c.bench_function(
        format!("Signature verification with height: {}, w: {}", height, w).as_str(),
        |b| {
            b.iter(|| {
                assert!(scheme.verify(&pk, &msg, &signature));
            })
        },
    );
}

fn keygen_h4_w16(c: &mut Criterion) {
    bench_keygen(4, 16, c)
}
fn keygen_h4_w4(c: &mut Criterion) {
    bench_keygen(4, 4, c)
}
fn keygen_h8_w16(c: &mut Criterion) {
    bench_keygen(8, 16, c)
}
fn keygen_h10_w16(c: &mut Criterion) {
    bench_keygen(10, 16, c)
}

fn sign_h4_w16(c: &mut Criterion) {
    bench_sign(4, 16, c)
}
fn sign_h4_w4(c: &mut Criterion) {
    bench_sign(4, 4, c)
}

fn verify_h10_w16(c: &mut Criterion) {
    bench_verify(10, 16, c)
}
fn verify_h10_w4(c: &mut Criterion) {
    bench_verify(10, 4, c)
}

criterion_group!(
    keygen_benches,
    keygen_h4_w16,
    keygen_h4_w4,
    keygen_h8_w16,
    keygen_h10_w16,
);

criterion_group!(
    keyopts_benches,
    sign_h4_w16,
    sign_h4_w4,
    verify_h10_w16,
    verify_h10_w4
);

criterion_main!(keygen_benches, keyopts_benches);
