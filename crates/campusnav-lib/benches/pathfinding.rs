use campusnav_lib::{find_path, load_map, plan_route, Graph, RouteRequest, TravelMode};
use chrono::NaiveTime;
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_map.json")
}

static GRAPH: Lazy<Graph> = Lazy::new(|| load_map(&fixture_path()).expect("fixture loads"));
static MORNING: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"));
static WHEELCHAIR_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Reception", "Room 318A")
        .with_mode(TravelMode::Wheelchair)
        .at(*MORNING)
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;
    let clock = *MORNING;

    c.bench_function("find_path_reception_318a", |b| {
        b.iter(|| {
            let outcome = find_path(graph, "Reception", "Room 318A", TravelMode::Normal, clock)
                .expect("known nodes");
            black_box(outcome.total_time_seconds())
        });
    });

    c.bench_function("find_path_stairs_mode_cs", |b| {
        b.iter(|| {
            let outcome = find_path(
                graph,
                "Reception",
                "Computer Science",
                TravelMode::StairsFavoring,
                clock,
            )
            .expect("known nodes");
            black_box(outcome.total_distance_meters())
        });
    });

    c.bench_function("plan_route_wheelchair_with_directions", |b| {
        let request = &*WHEELCHAIR_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.directions.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
