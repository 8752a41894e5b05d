use crate::geom::{
    ParametricSampler, ScalarGrid, StripParameters, Tolerance, area_element_field,
    integrate_area_elements, surface_area, surface_area_from_derivatives,
};

fn area(radius: f64, width: f64, resolution: usize) -> f64 {
    let sampler = ParametricSampler::new(StripParameters::new(radius, width, resolution)).unwrap();
    surface_area(&sampler)
}

#[test]
fn default_strip_area_baseline() {
    let tol = Tolerance::new(1e-9);
    assert!(tol.approx_eq_relative(area(3.0, 1.0, 100), 18.871_537_590_437_743));
}

#[test]
fn area_converges_as_resolution_grows() {
    let estimates: Vec<f64> = [25, 50, 100, 200].iter().map(|&n| area(3.0, 1.0, n)).collect();
    let steps: Vec<f64> = estimates.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

    assert!(steps[0] > steps[1]);
    assert!(steps[1] > steps[2]);
    assert!(steps[2] < 1e-5);
}

#[test]
fn area_approaches_band_area_for_narrow_strips() {
    // A thin strip is close to a band of length 2πR and width w.
    let narrow = area(3.0, 0.01, 100);
    let band = std::f64::consts::TAU * 3.0 * 0.01;
    assert!((narrow - band).abs() / band < 1e-3);

    assert!(area(3.0, 1e-6, 50) < 1e-4);
    assert_eq!(area(3.0, 0.0, 10), 0.0);
}

#[test]
fn negative_width_mirrors_positive_width() {
    let tol = Tolerance::new(1e-12);
    assert!(tol.approx_eq_relative(area(3.0, -1.0, 40), area(3.0, 1.0, 40)));
}

#[test]
fn coarsest_resolution_is_finite() {
    let a = area(3.0, 1.0, 2);
    assert!(a.is_finite());
    assert!(a > 0.0);
}

#[test]
fn integration_runs_along_v_then_u() {
    // Rows are v, columns are u; the field is linear in u so the rule is exact.
    let values = vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
    let grid = ScalarGrid::from_row_major(3, 3, values).unwrap();
    let result = integrate_area_elements(&grid, 1.0, 0.5);
    assert!(Tolerance::DEFAULT.approx_eq_f64(result, 2.0));
}

#[test]
fn reused_derivatives_give_the_same_area() {
    let sampler = ParametricSampler::new(StripParameters::new(1.0, 0.5, 50)).unwrap();
    let derivatives = sampler.sample_derivatives();
    let reused = surface_area_from_derivatives(&sampler, &derivatives);
    assert_eq!(reused, surface_area(&sampler));
    assert!(Tolerance::new(1e-9).approx_eq_relative(reused, 3.149_917_995_070_201));
}

#[test]
fn area_elements_on_centre_row_equal_radius() {
    let sampler = ParametricSampler::new(StripParameters::new(3.0, 1.0, 9)).unwrap();
    let elements = area_element_field(&sampler.sample_derivatives());
    let tol = Tolerance::new(1e-12);

    assert_eq!(elements.shape(), (9, 9));
    for &value in elements.row(4).unwrap() {
        assert!(tol.approx_eq_f64(value, 3.0));
    }
    assert!(elements.as_slice().iter().all(|&e| e >= 0.0));
}
