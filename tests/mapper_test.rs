use fisheye_dewarp::grid::PixelGrid;
use fisheye_dewarp::{DewarpParams, ProjectionKind, RadialMapper, init_dewarp_map};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn params(fov: f64, pfov: f64, projection: ProjectionKind) -> DewarpParams {
    DewarpParams::new(fov, pfov, projection).unwrap()
}

#[test]
fn test_4x4_linear_corner() {
    let p = params(180.0, 120.0, ProjectionKind::Linear);
    let grid = PixelGrid::new(4, 4);
    let mapper = RadialMapper::new(&grid, &p);

    let dim_f = 32.0f64.sqrt();
    let expected_ofocinv = 1.0 / (dim_f / (2.0 * (60.0f64).to_radians().tan()));
    assert!((mapper.ofocinv - expected_ofocinv).abs() < 1e-12);
    assert!((mapper.ofocinv - 0.6123724356957942).abs() < 1e-12);
    assert!((mapper.ifoc - 1.8006326323142123).abs() < 1e-12);
    assert_eq!((mapper.xcenter, mapper.ycenter), (1.5, 1.5));

    let (xs, ys) = mapper.map_point(0, 0);
    assert!((xs - 0.3353130993105544).abs() < 1e-6);
    assert!((ys - 0.3353130993105544).abs() < 1e-6);

    let maps = init_dewarp_map(4, 4, &p);
    assert!((maps.xs.get(0, 0) as f64 - 0.3353130993105544).abs() < 1e-6);
    assert!((maps.ys.get(0, 0) as f64 - 0.3353130993105544).abs() < 1e-6);
}

#[test]
fn test_4x4_corner_for_each_projection() {
    let expected = [
        (ProjectionKind::Linear, 0.3353130993105544),
        (ProjectionKind::EqualArea, 0.2509912431538659),
        (ProjectionKind::Orthographic, -0.08481163138612269),
        (ProjectionKind::Stereographic, 0.5156414530388804),
    ];
    for (kind, value) in expected {
        let maps = init_dewarp_map(4, 4, &params(180.0, 120.0, kind));
        let x = maps.xs.get(0, 0) as f64;
        assert!((x - value).abs() < 1e-6, "{}: got {}, expected {}", kind, x, value);
    }
}

#[test]
fn test_center_pixel_maps_to_origin() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for kind in ProjectionKind::ALL {
        for _ in 0..10 {
            let fov = rng.random_range(1.0..=180.0);
            let pfov = rng.random_range(1.0..179.0);
            let maps = init_dewarp_map(9, 9, &params(fov, pfov, kind));
            assert_eq!(maps.xs.get(4, 4), 0.0);
            assert_eq!(maps.ys.get(4, 4), 0.0);
        }
    }
}

#[test]
fn test_maps_are_finite() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut cases = vec![(180.0, 179.999), (180.0, 1e-3), (1e-3, 120.0), (1e-3, 179.999)];
    for _ in 0..20 {
        cases.push((rng.random_range(1e-3..=180.0), rng.random_range(1e-3..179.999)));
    }
    for kind in ProjectionKind::ALL {
        for &(fov, pfov) in &cases {
            let maps = init_dewarp_map(16, 12, &params(fov, pfov, kind));
            assert!(
                maps.xs.as_slice().iter().chain(maps.ys.as_slice()).all(|v| v.is_finite()),
                "{} fov={} pfov={}",
                kind,
                fov,
                pfov
            );
        }
    }
}

#[test]
fn test_map_shape_and_stride() {
    let maps = init_dewarp_map(7, 3, &DewarpParams::default());
    assert_eq!(maps.xs.shape(), (7, 3));
    assert_eq!(maps.ys.shape(), (7, 3));
    assert_eq!(maps.xs.stride(), 7);
    assert_eq!(maps.xs.as_slice().len(), 21);

    let mapper = RadialMapper::new(&PixelGrid::new(7, 3), &DewarpParams::default());
    let (grid_i, grid_j) = PixelGrid::new(7, 3).meshgrid();
    for (idx, (i, j)) in grid_i.into_iter().zip(grid_j).enumerate() {
        let (x, y) = mapper.map_point(i, j);
        assert_eq!(maps.xs.as_slice()[idx], x as f32);
        assert_eq!(maps.ys.as_slice()[idx], y as f32);
    }
}

#[test]
fn test_square_region_symmetry() {
    for kind in ProjectionKind::ALL {
        let p = params(180.0, 120.0, kind);
        let maps = init_dewarp_map(8, 8, &p);
        for row in 0..8 {
            for col in 0..8 {
                assert!((maps.xs.get(col, row) - maps.ys.get(row, col)).abs() < 1e-5);
            }
        }

        let mapper = RadialMapper::new(&PixelGrid::new(9, 9), &p);
        for k in 1..5 {
            let (x1, y1) = mapper.map_point(4 + k, 4);
            let (x2, y2) = mapper.map_point(4, 4 + k);
            assert!((y1 - 4.0).abs() < 1e-9);
            assert!((x2 - 4.0).abs() < 1e-9);
            assert!(((x1 - 4.0) - (y2 - 4.0)).abs() < 1e-9);
        }
    }
}

#[test]
fn test_radius_is_monotonic() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for kind in ProjectionKind::ALL {
        for _ in 0..10 {
            let fov = rng.random_range(1.0..=180.0);
            let pfov = rng.random_range(1.0..179.0);
            let mapper = RadialMapper::new(&PixelGrid::new(101, 101), &params(fov, pfov, kind));
            let mut last = 0.0;
            for col in 51..101 {
                let (x, y) = mapper.map_point(col, col);
                let rr = (x - 50.0).hypot(y - 50.0);
                assert!(rr >= last, "{} fov={} pfov={} col={}", kind, fov, pfov, col);
                last = rr;
            }
        }
    }
}

#[test]
fn test_projections_differ() {
    let maps: Vec<_> = ProjectionKind::ALL
        .iter()
        .map(|kind| init_dewarp_map(10, 10, &params(160.0, 100.0, *kind)))
        .collect();
    for a in 0..maps.len() {
        for b in a + 1..maps.len() {
            assert_ne!(maps[a].xs, maps[b].xs);
        }
    }
}
