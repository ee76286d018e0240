//! Property tests comparing both engines against the reference solver and
//! against each other on random grids.

use geodist_engine::{CostModel, EdgeCost, FastMarching, GeodesicTransform, RasterScan};
use geodist_space::{Connectivity, NeighbourTable, Spacing};
use geodist_test_utils::{assert_distances_close, reference_distances, Fixture, FixtureBuilder};
use proptest::prelude::*;

fn arb_connectivity() -> impl Strategy<Value = Connectivity> {
    prop_oneof![
        Just(Connectivity::Four),
        Just(Connectivity::Eight),
        Just(Connectivity::Six),
        Just(Connectivity::Eighteen),
        Just(Connectivity::TwentySix),
    ]
}

/// A random fixture whose rank matches `connectivity`.
fn fixture_for(connectivity: Connectivity, dims: (usize, usize, usize), rng: u64) -> Fixture {
    let (d, r, c) = dims;
    let builder = if connectivity.ndim() == 2 {
        FixtureBuilder::new_2d(r, c)
    } else {
        FixtureBuilder::new_3d(d, r, c)
    };
    builder.random(rng, 5.0, 3)
}

fn fast_marching(connectivity: Connectivity, lambda: f32) -> FastMarching {
    FastMarching::builder()
        .connectivity(connectivity)
        .lambda(lambda)
        .build()
        .unwrap()
}

fn raster_scan(connectivity: Connectivity, lambda: f32, iterations: u32) -> RasterScan {
    RasterScan::builder()
        .connectivity(connectivity)
        .lambda(lambda)
        .iterations(iterations)
        .build()
        .unwrap()
}

fn run(engine: &dyn GeodesicTransform, f: &Fixture) -> Vec<f32> {
    let (map, _) = engine.transform(&f.image_view(), &f.seed_view()).unwrap();
    map.into_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn fast_marching_matches_reference(
        connectivity in arb_connectivity(),
        dims in (1usize..5, 1usize..8, 1usize..8),
        rng in any::<u64>(),
        lambda in 0.0f32..3.0,
    ) {
        let f = fixture_for(connectivity, dims, rng);
        let got = run(&fast_marching(connectivity, lambda), &f);

        let table = NeighbourTable::new(connectivity, Spacing::unit_for(connectivity)).unwrap();
        let cost = EdgeCost::new(CostModel::Geodesic, lambda).unwrap();
        let expected = reference_distances(&f.shape, &table, &f.image, &f.seeds, |s, a, b| {
            cost.cost(s, a, b)
        });
        assert_distances_close(&got, &expected, 1e-5);
    }

    #[test]
    fn raster_scan_never_undercuts_fast_marching(
        connectivity in arb_connectivity(),
        dims in (1usize..5, 1usize..8, 1usize..8),
        rng in any::<u64>(),
        lambda in 0.0f32..3.0,
        iterations in 1u32..4,
    ) {
        let f = fixture_for(connectivity, dims, rng);
        let exact = run(&fast_marching(connectivity, lambda), &f);
        let approx = run(&raster_scan(connectivity, lambda, iterations), &f);
        for (i, (&a, &e)) in approx.iter().zip(&exact).enumerate() {
            prop_assert!(a >= e - 1e-4 * e.max(1.0), "cell {}: raster {} < exact {}", i, a, e);
        }
    }

    #[test]
    fn raster_scan_is_monotone_in_iterations(
        connectivity in arb_connectivity(),
        dims in (1usize..5, 1usize..8, 1usize..8),
        rng in any::<u64>(),
        iterations in 1u32..5,
    ) {
        let f = fixture_for(connectivity, dims, rng);
        let fewer = run(&raster_scan(connectivity, 1.0, iterations), &f);
        let more = run(&raster_scan(connectivity, 1.0, iterations + 1), &f);
        for (i, (&m, &l)) in more.iter().zip(&fewer).enumerate() {
            prop_assert!(m <= l, "cell {}: {} iterations gave {}, {} gave {}", i, iterations + 1, m, iterations, l);
        }
    }

    #[test]
    fn seeds_are_zero_and_distances_non_negative(
        connectivity in arb_connectivity(),
        dims in (1usize..5, 1usize..8, 1usize..8),
        rng in any::<u64>(),
    ) {
        let f = fixture_for(connectivity, dims, rng);
        let engines: [Box<dyn GeodesicTransform>; 2] = [
            Box::new(fast_marching(connectivity, 1.0)),
            Box::new(raster_scan(connectivity, 1.0, 2)),
        ];
        for engine in &engines {
            let d = run(engine.as_ref(), &f);
            for (i, (&v, &s)) in d.iter().zip(&f.seeds).enumerate() {
                if s != 0 {
                    prop_assert_eq!(v, 0.0, "seed cell {} in {}", i, engine.name());
                } else {
                    prop_assert!(v >= 0.0, "cell {} negative in {}", i, engine.name());
                }
            }
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical(
        connectivity in arb_connectivity(),
        dims in (1usize..5, 1usize..8, 1usize..8),
        rng in any::<u64>(),
    ) {
        let f = fixture_for(connectivity, dims, rng);
        let fm = fast_marching(connectivity, 1.0);
        let rs = raster_scan(connectivity, 1.0, 3);
        let a: Vec<u32> = run(&fm, &f).iter().map(|v| v.to_bits()).collect();
        let b: Vec<u32> = run(&fm, &f).iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(a, b);
        let a: Vec<u32> = run(&rs, &f).iter().map(|v| v.to_bits()).collect();
        let b: Vec<u32> = run(&rs, &f).iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn constant_grid_reduces_to_spatial_distance() {
    // With uniform intensity the geodesic term vanishes for any lambda.
    let f = FixtureBuilder::new_2d(9, 9).constant(3.0).with_seed(&[4, 4]);
    let table = NeighbourTable::new(Connectivity::Eight, Spacing::unit_2d()).unwrap();
    let spatial = reference_distances(&f.shape, &table, &f.image, &f.seeds, |s, _, _| s);
    for lambda in [0.0, 1.0, 7.5] {
        let got = run(&fast_marching(Connectivity::Eight, lambda), &f);
        assert_distances_close(&got, &spatial, 1e-6);
    }
}
