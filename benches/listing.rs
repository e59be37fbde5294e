// benches/listing.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use acervo::{
    data::{self, ProjectFilter},
    specs::Project,
};

const NAMES: [&str; 6] = ["Ana", "Érica", "bruno", "Carlos Silva", "Óscar", "J. Silva"];

fn synthetic(n: usize) -> Vec<Project> {
    (0..n)
        .map(|i| Project {
            id: i.to_string(),
            ano: (2015 + i % 10).to_string(),
            titulo: format!("{} estudo de caso {}", NAMES[i % NAMES.len()], i),
            autor: NAMES[(i * 7) % NAMES.len()].to_string(),
            orientador: NAMES[(i * 3) % NAMES.len()].to_string(),
            palavras_chave: String::from("estruturas, drenagem, concreto"),
            ..Default::default()
        })
        .collect()
}

fn bench_listing(c: &mut Criterion) {
    let projects = synthetic(2_000);

    c.bench_function("sort_projects_2k", |b| {
        b.iter(|| {
            let mut ps = projects.clone();
            data::sort_projects(black_box(&mut ps));
            black_box(ps.len())
        })
    });

    let term = ProjectFilter { term: String::from("silva"), ..Default::default() };
    c.bench_function("filter_term_2k", |b| {
        b.iter(|| black_box(data::filter_projects(black_box(&projects), &term).len()))
    });

    let combined = ProjectFilter {
        year: String::from("2020"),
        advisor: String::from("Ana"),
        term: String::from("concreto"),
        ..Default::default()
    };
    c.bench_function("filter_combined_2k", |b| {
        b.iter(|| black_box(data::filter_projects(black_box(&projects), &combined).len()))
    });

    c.bench_function("project_options_2k", |b| {
        b.iter(|| black_box(data::project_options(black_box(&projects)).authors.len()))
    });
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
