use mobius_engine::StripEngine;
use mobius_engine::geom::{StripError, StripParameters, build_mesh};
use mobius_engine::strip::MobiusStrip;

#[test]
fn strip_rejects_resolution_below_two() {
    for resolution in [0, 1] {
        let err = MobiusStrip::new(3.0, 1.0, resolution).unwrap_err();
        assert_eq!(
            err,
            StripError::InvalidResolution {
                resolution,
                min: StripParameters::MIN_RESOLUTION
            }
        );
    }
    assert!(MobiusStrip::new(3.0, 1.0, 2).is_ok());
}

#[test]
fn error_message_names_the_resolution() {
    let err = MobiusStrip::new(3.0, 1.0, 1).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("at least 2"), "{message}");
    assert!(message.contains("got 1"), "{message}");
}

#[test]
fn mesh_components_share_the_strip_resolution() {
    let strip = MobiusStrip::new(3.0, 1.0, 30).expect("valid strip");
    let (x, y, z) = strip.mesh().components();
    assert_eq!(x.shape(), (30, 30));
    assert_eq!(y.shape(), (30, 30));
    assert_eq!(z.shape(), (30, 30));
    assert!(x.is_finite() && y.is_finite() && z.is_finite());
}

#[test]
fn stored_mesh_matches_a_fresh_build() {
    let strip = MobiusStrip::new(2.0, 0.5, 12).expect("valid strip");
    assert_eq!(strip.mesh(), &build_mesh(strip.sampler()));
}

#[test]
fn default_parameters_describe_the_reference_strip() {
    let strip = MobiusStrip::from_parameters(StripParameters::default()).expect("defaults");
    let params = strip.parameters();
    assert_eq!((params.radius, params.width, params.resolution), (3.0, 1.0, 100));
}

#[test]
fn report_matches_individual_estimates() {
    let strip = MobiusStrip::new(3.0, 1.0, 64).expect("valid strip");
    let report = strip.report();
    assert_eq!(report.resolution, 64);
    assert_eq!(report.surface_area, strip.surface_area());
    assert_eq!(report.edge_length, strip.edge_length());
    assert_eq!(report.edge_length, strip.boundary_lengths().total());
}

#[test]
fn profile_without_metrics_feature_has_no_timings() {
    let strip = MobiusStrip::new(3.0, 1.0, 16).expect("valid strip");
    let (report, timings) = strip.profile();
    assert!(report.surface_area > 0.0);
    if cfg!(feature = "mesh_engine_metrics") {
        assert!(timings.is_some());
    } else {
        assert!(timings.is_none());
    }
}

#[test]
fn triangle_mesh_is_valid() {
    let strip = MobiusStrip::new(3.0, 1.0, 20).expect("valid strip");
    let mesh = strip.triangle_mesh();
    mesh.validate().expect("valid triangle mesh");
    assert_eq!(mesh.vertex_count(), 400);
    assert_eq!(mesh.triangle_count(), 19 * 19 * 2);
}

#[test]
fn engine_matches_native_strip() {
    let engine = StripEngine::new(3.0, 1.0, 100).expect("engine");
    let strip = MobiusStrip::new(3.0, 1.0, 100).expect("strip");
    assert_eq!(engine.surface_area(), strip.surface_area());
    assert_eq!(engine.edge_length(), strip.edge_length());
    assert_eq!(engine.resolution(), 100);
}

#[test]
fn engine_rejects_invalid_resolution() {
    assert!(StripEngine::new(3.0, 1.0, 1).is_err());
}

#[test]
fn degenerate_geometry_is_not_an_error() {
    for (radius, width) in [(0.0, 1.0), (3.0, 0.0), (-3.0, 1.0), (3.0, -1.0)] {
        let strip = MobiusStrip::new(radius, width, 10).expect("degenerate strip");
        assert!(strip.surface_area().is_finite());
        assert!(strip.edge_length().is_finite());
    }
}
