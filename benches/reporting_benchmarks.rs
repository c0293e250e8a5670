//! Performance benchmarks for the employee registry.
//!
//! Covers report generation over in-memory snapshots of increasing size and
//! the full HTTP path for the dashboard endpoint.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use employee_registry::api::{AppState, create_router};
use employee_registry::models::{EmployeeFields, EmployeeId, EmployeeRecord};
use employee_registry::reporting::{dashboard_report, summary_report};
use employee_registry::store::{EmployeeStore, InMemoryStore};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const DEPARTMENTS: [&str; 8] = [
    "engineering",
    "finance",
    "legal",
    "marketing",
    "operations",
    "research",
    "sales",
    "support",
];

fn fields(i: usize) -> EmployeeFields {
    EmployeeFields {
        first_name: format!("First{i}"),
        last_name: format!("Last{i}"),
        email: format!("employee{i}@example.com"),
        salary: Decimal::new(4_000_000 + (i as i64 * 7919) % 9_000_000, 2),
        department_id: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
        role_id: format!("role_{}", i % 5),
    }
}

fn create_snapshot(count: usize) -> Vec<EmployeeRecord> {
    (0..count)
        .map(|i| EmployeeRecord::new(EmployeeId::new(), fields(i)))
        .collect()
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");

    for count in [10usize, 1_000, 10_000] {
        let snapshot = create_snapshot(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("summary", count), &snapshot, |b, records| {
            b.iter(|| summary_report(black_box(records)))
        });

        group.bench_with_input(
            BenchmarkId::new("dashboard", count),
            &snapshot,
            |b, records| b.iter(|| dashboard_report(black_box(records))),
        );
    }

    group.finish();
}

fn bench_dashboard_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");

    let store = Arc::new(InMemoryStore::new(false));
    for i in 0..1_000 {
        store.create(fields(i)).expect("Failed to seed store");
    }
    let router = create_router(AppState::new(store));

    c.bench_function("dashboard_endpoint_1000", |b| {
        b.to_async(&runtime).iter(|| async {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/dashboard/report")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_reports, bench_dashboard_endpoint);
criterion_main!(benches);
