use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use k_index::{Conjunction, Document, Event, Expression, Indexer, ResultSet};

const DOCUMENT_COUNT: usize = 1_000;

fn targeting_documents() -> Vec<Document<String>> {
    (0..DOCUMENT_COUNT)
        .map(|i| {
            Document::new(vec![
                Conjunction::new(vec![
                    Expression::one_of("exchange_id".to_string(), vec![(i % 7) as i64]),
                    Expression::one_of("country".to_string(), vec!["CA", "US"]),
                    Expression::none_of("deal_ids".to_string(), vec![format!("deal-{}", i % 13)]),
                ]),
                Conjunction::new(vec![Expression::one_of(
                    "segment_ids".to_string(),
                    vec![(i % 31) as i64, (i % 17) as i64],
                )]),
            ])
        })
        .collect()
}

fn an_event() -> Event<String> {
    let mut builder = Event::builder();
    builder.with_integer("exchange_id".to_string(), 3);
    builder.with_string("country".to_string(), "CA");
    builder.with_strings("deal_ids".to_string(), &["deal-3", "deal-7"]);
    builder.with_integers("segment_ids".to_string(), &[5, 12]);
    builder.build()
}

pub fn create(c: &mut Criterion) {
    let documents = targeting_documents();
    c.bench_function("create", |b| {
        b.iter_batched(
            || documents.clone(),
            |documents| std::hint::black_box(Indexer::create(&documents).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

pub fn retrieve(c: &mut Criterion) {
    let documents = targeting_documents();
    let indexer = Indexer::create(&documents).unwrap();
    let event = an_event();
    c.bench_function("retrieve", |b| {
        b.iter_batched(
            ResultSet::new,
            |mut result| {
                indexer.retrieve(&mut result, &event);
                std::hint::black_box(result)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, create, retrieve);
criterion_main!(benches);
