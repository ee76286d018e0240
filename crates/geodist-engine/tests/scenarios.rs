//! End-to-end scenarios for both engines on hand-built grids.

use geodist_core::GridShape;
use geodist_engine::{
    geodesic2d_fast_marching, geodesic2d_raster_scan, geodesic3d_fast_marching,
    geodesic3d_raster_scan, CostModel, FastMarching, GeodesicTransform, RasterScan,
};
use geodist_space::{Connectivity, Spacing};
use geodist_test_utils::FixtureBuilder;

const SQRT2: f32 = std::f32::consts::SQRT_2;

fn corner_seed(n: usize) -> Vec<u8> {
    let mut s = vec![0u8; n];
    s[0] = 1;
    s
}

// ── 5x5 constant grid, seed at (0, 0) ───────────────────────────

#[test]
fn fast_marching_5x5_matches_octile_distance() {
    let d = geodesic2d_fast_marching(&[1.0; 25], &corner_seed(25), 5, 5).unwrap();
    for r in 0usize..5 {
        for c in 0usize..5 {
            let diag = r.min(c) as f32;
            let straight = r.abs_diff(c) as f32;
            let expected = diag * SQRT2 + straight;
            let got = d[r * 5 + c];
            assert!(
                (got - expected).abs() < 1e-5,
                "({r},{c}): got {got}, expected {expected}"
            );
        }
    }
    assert!((d[24] - 5.656_854).abs() < 1e-5);
}

#[test]
fn raster_scan_5x5_more_iterations_never_worse() {
    let fm = geodesic2d_fast_marching(&[1.0; 25], &corner_seed(25), 5, 5).unwrap();
    let one = geodesic2d_raster_scan(&[1.0; 25], &corner_seed(25), 5, 5, 0.0, 1).unwrap();
    let ten = geodesic2d_raster_scan(&[1.0; 25], &corner_seed(25), 5, 5, 0.0, 10).unwrap();
    assert!(ten[24] <= one[24]);
    assert!((ten[24] - fm[24]).abs() <= (one[24] - fm[24]).abs());
    for i in 0..25 {
        assert!(ten[i] <= one[i], "cell {i}");
    }
}

#[test]
fn no_seeds_gives_all_infinity_for_every_entry_point() {
    let image2 = [0.5f32; 12];
    let seeds2 = [0u8; 12];
    let image3 = [0.5f32; 24];
    let seeds3 = [0u8; 24];
    let outputs = [
        geodesic2d_fast_marching(&image2, &seeds2, 3, 4).unwrap(),
        geodesic2d_raster_scan(&image2, &seeds2, 3, 4, 1.0, 3).unwrap(),
        geodesic3d_fast_marching(&image3, &seeds3, 2, 3, 4).unwrap(),
        geodesic3d_raster_scan(&image3, &seeds3, 2, 3, 4, 1.0, 3).unwrap(),
    ];
    for out in outputs {
        assert!(out.iter().all(|&d| d == f32::INFINITY));
    }
}

// ── Intensity barriers ──────────────────────────────────────────

#[test]
fn wall_forces_detour_through_gap() {
    // 7x7, seed on the left at (3, 0), wall at column 3 open only at row 6.
    let f = FixtureBuilder::new_2d(7, 7)
        .wall(3, 6, 100.0)
        .with_seed(&[3, 0]);
    let (map, _) = FastMarching::default()
        .transform(&f.image_view(), &f.seed_view())
        .unwrap();

    let behind = map.get(&[3, 6]).unwrap();
    let open_side = map.get(&[3, 0]).unwrap() + 6.0;
    assert!(behind > open_side, "behind wall {behind} vs open {open_side}");
    // The detour via the gap is far cheaper than crossing the wall.
    assert!(behind < 100.0);
    assert_eq!(map.get(&[3, 0]), Some(0.0));
}

#[test]
fn ring_separates_inside_from_outside() {
    let f = FixtureBuilder::new_2d(21, 21)
        .ring(5.0, 7.0)
        .with_seed(&[10, 10]);
    let engine = FastMarching::builder().lambda(20.0).build().unwrap();
    let (map, _) = engine.transform(&f.image_view(), &f.seed_view()).unwrap();

    let inside = map.get(&[10, 14]).unwrap();
    let outside = map.get(&[10, 19]).unwrap();
    // Crossing the ring twice costs at least 2 * lambda.
    assert!(inside < 5.0);
    assert!(outside > 40.0);
}

#[test]
fn convex_lambda_one_reaches_uniform_region_for_free() {
    let f = FixtureBuilder::new_2d(4, 4).constant(2.0).with_seed(&[0, 0]);
    let engine = RasterScan::builder()
        .cost_model(CostModel::Convex)
        .lambda(1.0)
        .build()
        .unwrap();
    let (map, _) = engine.transform(&f.image_view(), &f.seed_view()).unwrap();
    assert!(map.as_slice().iter().all(|&d| d == 0.0));
}

// ── Spacing ─────────────────────────────────────────────────────

#[test]
fn anisotropic_spacing_scales_axes() {
    let spacing = Spacing::new_2d(2.0, 0.5).unwrap();
    let fm = FastMarching::builder()
        .connectivity(Connectivity::Four)
        .spacing(spacing)
        .build()
        .unwrap();
    let f = FixtureBuilder::new_2d(4, 4).constant(0.0).with_seed(&[0, 0]);
    let (map, _) = fm.transform(&f.image_view(), &f.seed_view()).unwrap();
    assert_eq!(map.get(&[3, 0]), Some(6.0));
    assert_eq!(map.get(&[0, 3]), Some(1.5));
    assert_eq!(map.get(&[3, 3]), Some(7.5));
}

#[test]
fn spacing_for_wrong_rank_is_rejected() {
    let fm = FastMarching::builder()
        .spacing(Spacing::new_2d(1.0, 1.0).unwrap())
        .build()
        .unwrap();
    let f = FixtureBuilder::new_3d(2, 2, 2).constant(0.0).with_seed(&[0, 0, 0]);
    assert!(fm.transform(&f.image_view(), &f.seed_view()).is_err());
}

// ── 3D ──────────────────────────────────────────────────────────

#[test]
fn three_d_constant_grid_matches_chamfer_distance() {
    let n = 4 * 4 * 4;
    let d = geodesic3d_fast_marching(&vec![1.0; n], &corner_seed(n), 4, 4, 4).unwrap();
    let shape = GridShape::new_3d(4, 4, 4).unwrap();
    let s3 = 3f32.sqrt();
    for i in 0..n {
        let c = shape.coord_of(i).unwrap();
        let mut a = [c[0], c[1], c[2]];
        a.sort_unstable();
        // Shortest 26-connected lattice path: corner, edge, then face steps.
        let expected = a[0] as f32 * s3 + (a[1] - a[0]) as f32 * SQRT2 + (a[2] - a[1]) as f32;
        assert!(
            (d[i] - expected).abs() < 1e-4,
            "{c:?}: got {}, expected {expected}",
            d[i]
        );
    }
}

#[test]
fn three_d_raster_converges_to_fast_marching() {
    let f = FixtureBuilder::new_3d(5, 6, 7).random(11, 4.0, 2);
    let (exact, _) = FastMarching::default()
        .transform(&f.image_view(), &f.seed_view())
        .unwrap();
    let rs = RasterScan::builder().iterations(30).build().unwrap();
    let (approx, _) = rs.transform(&f.image_view(), &f.seed_view()).unwrap();
    geodist_test_utils::assert_distances_close(approx.as_slice(), exact.as_slice(), 1e-4);
}

#[test]
fn engines_are_usable_as_trait_objects() {
    let engines: Vec<Box<dyn GeodesicTransform>> = vec![
        Box::new(FastMarching::default()),
        Box::new(RasterScan::default()),
    ];
    let f = FixtureBuilder::new_2d(6, 6).ramp(0.5).with_seed(&[5, 5]);
    for e in &engines {
        let (map, metrics) = e.transform(&f.image_view(), &f.seed_view()).unwrap();
        assert_eq!(map.get(&[5, 5]), Some(0.0), "{}", e.name());
        assert_eq!(metrics.reached, 36, "{}", e.name());
        assert_eq!(metrics.cells, 36);
        assert_eq!(metrics.seeds, 1);
    }
}
