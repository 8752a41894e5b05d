use crate::geom::{
    MobiusSurface, ParametricSampler, StripError, StripParameters, Surface, Tolerance,
};

fn sampler(radius: f64, width: f64, resolution: usize) -> ParametricSampler {
    ParametricSampler::new(StripParameters::new(radius, width, resolution)).unwrap()
}

#[test]
fn grid_endpoints_and_spacing() {
    let s = sampler(3.0, 1.0, 9);
    let grid = s.grid();

    assert_eq!(grid.u().len(), 9);
    assert_eq!(grid.v().len(), 9);
    assert_eq!(grid.u()[0], 0.0);
    assert_eq!(grid.u()[8], std::f64::consts::TAU);
    assert_eq!(grid.v()[0], -0.5);
    assert_eq!(grid.v()[8], 0.5);
    assert_eq!(grid.du(), std::f64::consts::TAU / 8.0);
    assert_eq!(grid.dv(), 1.0 / 8.0);

    let tol = Tolerance::new(1e-12);
    for pair in grid.u().windows(2) {
        assert!(tol.approx_eq_f64(pair[1] - pair[0], grid.du()));
    }
    for pair in grid.v().windows(2) {
        assert!(tol.approx_eq_f64(pair[1] - pair[0], grid.dv()));
    }
}

#[test]
fn construction_rejects_resolution_below_two() {
    for resolution in [0, 1] {
        let err = ParametricSampler::new(StripParameters::new(3.0, 1.0, resolution)).unwrap_err();
        assert!(matches!(err, StripError::InvalidResolution { .. }));
    }
}

#[test]
fn positions_match_parametric_equations() {
    let s = sampler(2.5, 0.8, 7);
    let positions = s.sample_positions();
    let grid = s.grid();
    let tol = Tolerance::new(1e-12);

    assert_eq!(positions.x.shape(), (7, 7));
    for (i, &v) in grid.v().iter().enumerate() {
        for (j, &u) in grid.u().iter().enumerate() {
            let ring = 2.5 + v * (u / 2.0).cos();
            assert!(tol.approx_eq_f64(positions.x.get(i, j).unwrap(), ring * u.cos()));
            assert!(tol.approx_eq_f64(positions.y.get(i, j).unwrap(), ring * u.sin()));
            assert!(tol.approx_eq_f64(positions.z.get(i, j).unwrap(), v * (u / 2.0).sin()));
        }
    }
}

#[test]
fn derivative_field_matches_closed_form() {
    let s = sampler(3.0, 1.0, 6);
    let field = s.sample_derivatives();
    let grid = s.grid();
    let tol = Tolerance::new(1e-12);

    assert_eq!(field.shape(), (6, 6));
    for (i, &v) in grid.v().iter().enumerate() {
        for (j, &u) in grid.u().iter().enumerate() {
            let ring = 3.0 + v * (u / 2.0).cos();
            let x_u = -ring * u.sin() - (v / 2.0) * (u / 2.0).sin() * u.cos();
            let y_u = ring * u.cos() - (v / 2.0) * (u / 2.0).sin() * u.sin();
            let z_u = (v / 2.0) * (u / 2.0).cos();

            assert!(tol.approx_eq_f64(field.x_u.get(i, j).unwrap(), x_u));
            assert!(tol.approx_eq_f64(field.y_u.get(i, j).unwrap(), y_u));
            assert!(tol.approx_eq_f64(field.z_u.get(i, j).unwrap(), z_u));
            assert!(tol.approx_eq_f64(field.x_v.get(i, j).unwrap(), (u / 2.0).cos() * u.cos()));
            assert!(tol.approx_eq_f64(field.y_v.get(i, j).unwrap(), (u / 2.0).cos() * u.sin()));
            assert!(tol.approx_eq_f64(field.z_v.get(i, j).unwrap(), (u / 2.0).sin()));
        }
    }
}

#[test]
fn boundary_partials_equal_the_outer_rows_of_the_field() {
    let s = sampler(3.0, 1.0, 11);
    let field = s.sample_derivatives();
    let last = 10;

    let upper = s.sample_u_partials_along(0.5);
    let lower = s.sample_u_partials_along(-0.5);
    assert_eq!(upper.len(), 11);

    for j in 0..11 {
        let (du_upper, _) = field.partials_at(last, j).unwrap();
        let (du_lower, _) = field.partials_at(0, j).unwrap();
        assert_eq!(upper[j], du_upper);
        assert_eq!(lower[j], du_lower);
    }
}

#[test]
fn sampler_surface_reflects_parameters() {
    let s = sampler(4.0, 2.0, 3);
    assert_eq!(*s.surface(), MobiusSurface::new(4.0, 2.0));
    assert_eq!(s.surface().domain_v(), (-1.0, 1.0));
    assert_eq!(s.params().resolution, 3);
}

#[test]
fn degenerate_inputs_still_sample() {
    for (radius, width) in [(0.0, 1.0), (3.0, 0.0), (-2.0, -1.0)] {
        let s = sampler(radius, width, 5);
        assert!(s.sample_positions().x.is_finite());
        assert!(s.sample_derivatives().x_u.is_finite());
    }
}
