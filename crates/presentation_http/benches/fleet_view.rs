//! Benchmarks for the fleet view and the dashboard endpoints
//!
//! Fleet sizes are synthetic; the HTTP benches run against the built-in mock
//! fleet with an in-memory identity provider.

#![allow(clippy::expect_used)]

use std::{sync::Arc, time::Duration};

use application::{AuthService, FleetService};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use domain::{StatusFilter, Train, TrainId, TrainStatus, fixtures, fleet_view, route_model};
use infrastructure::{AppConfig, FixtureTrainSource, InMemoryIdentityProvider};
use presentation_http::{routes::create_router, state::AppState};
use secrecy::SecretString;
use tokio::runtime::Runtime;

fn synthetic_fleet(size: usize) -> Vec<Train> {
    let statuses = [TrainStatus::OnTime, TrainStatus::Delayed, TrainStatus::Halted];
    (0..size)
        .map(|i| {
            Train::new(
                i.to_string(),
                format!("TN-{i:05}"),
                format!("Express {i}"),
                statuses[i % statuses.len()],
            )
        })
        .collect()
}

async fn create_benchmark_state() -> AppState {
    let fleet_service = FleetService::load(Arc::new(FixtureTrainSource::mock()))
        .await
        .expect("mock fleet should load");
    let provider = Arc::new(InMemoryIdentityProvider::new(6, 16));

    AppState {
        fleet_service: Arc::new(fleet_service),
        auth_service: Arc::new(AuthService::new(provider)),
        config: Arc::new(AppConfig::default()),
    }
}

/// Benchmark filter, counts and overrides at growing fleet sizes
fn bench_fleet_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("fleet_view");
    group.measurement_time(Duration::from_secs(5));

    for size in [10, 100, 1000] {
        let trains = synthetic_fleet(size);
        let target = TrainId::new((size / 2).to_string());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filter", size), &trains, |b, trains| {
            b.iter(|| fleet_view::filter(trains, "express 4", StatusFilter::Only(TrainStatus::Delayed)));
        });

        group.bench_with_input(BenchmarkId::new("count_by_status", size), &trains, |b, trains| {
            b.iter(|| fleet_view::count_by_status(trains, TrainStatus::Halted));
        });

        group.bench_with_input(BenchmarkId::new("halt", size), &trains, |b, trains| {
            b.iter(|| fleet_view::halt(trains, &target));
        });
    }

    group.finish();
}

/// Benchmark the route model over the display fallback route
fn bench_route_model(c: &mut Criterion) {
    let route = fixtures::fallback_route("06:00", "18:00");
    let stations = route.stations();

    let mut group = c.benchmark_group("route_model");

    group.bench_function("compute_position", |b| {
        b.iter(|| route_model::compute_position(stations).expect("route is non-empty"));
    });

    group.bench_function("classify_stations", |b| {
        b.iter(|| route_model::classify_stations(stations).expect("route is non-empty"));
    });

    group.bench_function("derive_distance_markers", |b| {
        b.iter(|| route_model::derive_distance_markers(stations).expect("route is non-empty"));
    });

    group.finish();
}

/// Benchmark the HTTP handler layer
fn bench_http_handler(c: &mut Criterion) {
    let rt = Runtime::new().expect("Failed to create runtime");

    let (server, token) = rt.block_on(async {
        let state = create_benchmark_state().await;
        let session = state
            .auth_service
            .signup("bench@rail.example", &SecretString::from("bench-secret".to_string()))
            .await
            .expect("signup should succeed");
        let server =
            axum_test::TestServer::new(create_router(state)).expect("Failed to create server");
        (server, session.token.to_string())
    });

    let mut group = c.benchmark_group("http_handler");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(10));

    // Health endpoint (baseline for HTTP overhead)
    group.bench_function("health_endpoint", |b| {
        b.to_async(&rt).iter(|| async { server.get("/health").await });
    });

    group.bench_function("list_trains_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            server
                .get("/v1/trains")
                .add_query_param("status", "delayed")
                .authorization_bearer(&token)
                .await
        });
    });

    group.bench_function("route_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            server
                .get("/v1/trains/1/route")
                .authorization_bearer(&token)
                .await
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fleet_view, bench_route_model, bench_http_handler);
criterion_main!(benches);
