use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vercheck_semver::{compare_semantic_versions, parse_semantic_version, Requirement, Semver, Version};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.2",
        "4",
        "2020.4.20",
        "1.2.3-rc.11.test",
        "1.2.3-alpha.beta+exp.sha.5114f85",
        "1.2.3.4.5garbage",
    ];

    c.bench_function("parse_semantic_version", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parse_semantic_version(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-rc.2", "1.0.0-rc.10"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.2.3-rc.11", "1.2.3-rc.11.test"),
    ];
    let parsed: Vec<(Version<'_>, Version<'_>)> = cases
        .iter()
        .map(|&(a, b)| (Version::parse(a).expect("parse"), Version::parse(b).expect("parse")))
        .collect();

    c.bench_function("compare_semantic_versions", |b| {
        b.iter(|| {
            for (v1, v2) in &parsed {
                black_box(compare_semantic_versions(black_box(v1), black_box(v2)));
            }
        })
    });
}

fn bench_requirement_matches(c: &mut Criterion) {
    let requirements = ["=1.2.3", "@1.2.3-rc.2", "~1.2.3", "^1.2.3", ">1.2.3"];
    let candidates = ["1.2.3", "1.2.3-rc.10", "1.2.9", "1.9.0", "2.0.0-alpha", "0.9.9"];

    let requirements: Vec<Requirement<'_>> = requirements
        .iter()
        .map(|r| Requirement::parse(r).expect("parse requirement"))
        .collect();
    let candidates: Vec<Version<'_>> = candidates
        .iter()
        .map(|v| Version::parse(v).expect("parse version"))
        .collect();

    c.bench_function("requirement_matches", |b| {
        b.iter(|| {
            for requirement in &requirements {
                for candidate in &candidates {
                    black_box(requirement.matches(black_box(candidate)));
                }
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0",
        "0.1",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "1.2.3-rc.10",
        "1.2.3-rc.2",
        "50.2",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)));
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_compare,
    bench_requirement_matches,
    bench_sort
);
criterion_main!(benches);
