use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use townpass_tracker::geo;
use townpass_tracker::models::{GeoPoint, Station};

/// Synthesize a station grid around Taipei, roughly the size of the real
/// YouBike feed (~1400 stations).
fn synthetic_feed(count: usize) -> Vec<Station> {
    (0..count)
        .map(|i| {
            let row = (i / 40) as f64;
            let col = (i % 40) as f64;
            serde_json::from_value(json!({
                "sno": format!("5001{i:05}"),
                "sna": format!("YouBike2.0_Bench{i}"),
                "sarea": "中正區",
                "latitude": 24.95 + row * 0.005,
                "longitude": 121.45 + col * 0.004,
                "available_rent_bikes": (i % 20) as u32,
                "available_return_bikes": ((i + 7) % 20) as u32,
                "act": "1"
            }))
            .expect("synthetic station")
        })
        .collect()
}

fn benchmark_geo_scans(c: &mut Criterion) {
    let feed = synthetic_feed(1400);
    let rider = GeoPoint::new(25.0478, 121.5170);

    let mut group = c.benchmark_group("geo_scans");

    group.bench_function("nearest_1400_stations", |b| {
        b.iter(|| geo::nearest(black_box(&rider), black_box(&feed)))
    });

    group.bench_function("within_radius_1km_capped_10", |b| {
        b.iter(|| geo::within_radius(black_box(&rider), black_box(&feed), 1000.0, 10))
    });

    group.finish();
}

criterion_group!(benches, benchmark_geo_scans);
criterion_main!(benches);
