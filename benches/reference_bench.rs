use criterion::{Criterion, black_box, criterion_group, criterion_main};

use zahlref::*;

fn bench_checksums(c: &mut Criterion) {
    c.bench_function("mod10_check_digit_26", |b| {
        b.iter(|| mod10_check_digit(black_box("21000000000313947143000901")))
    });

    c.bench_function("mod97_check_digits_21", |b| {
        b.iter(|| mod97_check_digits(black_box("539007547034123456789")))
    });
}

fn bench_parse_amount(c: &mut Criterion) {
    c.bench_function("parse_amount_swiss", |b| {
        b.iter(|| parse_amount(black_box("CHF 12'345'678.90")))
    });

    c.bench_function("parse_amount_continental", |b| {
        b.iter(|| parse_amount(black_box("€ 12.345.678,90")))
    });
}

fn bench_build_instruction(c: &mut Criterion) {
    let draft = InstructionDraft {
        amount_text: "CHF 1'234.56".into(),
        currency: "CHF".into(),
        scheme: "QRR".into(),
        account: "CH44 3100 0123 4567 8901 2".into(),
        preset_reference: None,
        document_id: "RE-2024-017".into(),
        remittance: Some("Beratung Juni".into()),
    };

    c.bench_function("build_instruction_qrr", |b| {
        b.iter(|| build_instruction(black_box(&draft)))
    });
}

criterion_group!(
    benches,
    bench_checksums,
    bench_parse_amount,
    bench_build_instruction
);
criterion_main!(benches);
