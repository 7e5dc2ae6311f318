use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hashcash_core::{leading_zero_bits, DigestAlgorithm, Stamp, StampDate, Version};
use hashcash_digest::SoftwareDigest;
use hashcash_search::{find_suffix, SearchControl};

fn bench_stamp(bits: u32) -> Stamp {
    let mut stamp = Stamp::new(
        Version::V1,
        bits,
        StampDate::parse("260114120000").expect("valid date"),
    );
    stamp.resource = Some("bench@example.com".into());
    stamp.salt = "benchsalt".into();
    stamp
}

fn value_counter(c: &mut Criterion) {
    let mut digest = [0u8; 20];
    digest[3] = 0x01;
    c.bench_function("leading_zero_bits/sha1", |b| {
        b.iter(|| leading_zero_bits(black_box(&digest)))
    });
}

fn search(c: &mut Criterion) {
    let provider = SoftwareDigest::new();
    let control = SearchControl::default();

    for (name, algorithm) in [
        ("sha1", DigestAlgorithm::Sha1),
        ("sha256", DigestAlgorithm::Sha256),
        ("blake3", DigestAlgorithm::Blake3),
    ] {
        let stamp = bench_stamp(12);
        c.bench_function(&format!("find_suffix/{name}/12bits"), |b| {
            b.iter(|| {
                find_suffix(black_box(&stamp), 12, 8, algorithm, &provider, &control)
                    .expect("12-bit search succeeds")
            })
        });
    }
}

criterion_group!(benches, value_counter, search);
criterion_main!(benches);
