use approx::assert_relative_eq;
use polycurve_rs::{pt, ContourCollection, ContourError, FromPath, GeometryFault, PathStream};

#[test]
fn test_complete_workflow() {
    // A rounded shape: cubic arch, straight side, quadratic back towards start
    let mut path = PathStream::new();
    path.move_to(pt!(50, 200))
        .cubic_to(pt!(100, 50), pt!(200, 50), pt!(250, 200))
        .line_to(pt!(250, 250))
        .quad_to(pt!(150, 300), pt!(50, 250))
        .close();

    let contours = ContourCollection::from_path(&path.view()).unwrap();
    assert_eq!(contours.len(), 1);

    let contour = &contours[0];
    assert!(contour.is_closed());
    let degrees: Vec<usize> = contour.iter().map(|c| c.degree()).collect();
    assert_eq!(degrees, vec![3, 1, 2, 1]);

    // consecutive segments meet
    for pair in contour.segments().windows(2) {
        let end = pair[0].at(1.0);
        let start = pair[1].at(0.0);
        assert_relative_eq!(end.x, start.x, epsilon = 1e-9);
        assert_relative_eq!(end.y, start.y, epsilon = 1e-9);
    }

    // and the synthesized closing line returns to the start
    let last = contour.end().unwrap();
    assert_relative_eq!(last.x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(last.y, 200.0, epsilon = 1e-9);

    // apex of the symmetric arch
    let arch = &contour[0];
    let apex = arch.at(0.5);
    assert_relative_eq!(apex.x, 150.0, epsilon = 1e-9);
    assert_relative_eq!(apex.y, 87.5, epsilon = 1e-9);
    let tangent = arch.tangent(0.5);
    assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(tangent.y, 0.0, epsilon = 1e-9);
    let normal = arch.normal(0.5);
    assert_relative_eq!(normal.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(normal.y, 1.0, epsilon = 1e-9);
}

#[test]
fn test_raw_stream_from_host() {
    // MOVE, QUAD, ON, CLOSE as raw host codes
    let path = PathStream::from_raw(
        &[0, 2, 1, 4],
        vec![pt!(0, 0), pt!(5, 5), pt!(10, 0), pt!(f64::NAN, f64::NAN)],
    );
    let contours = ContourCollection::try_from(&path).unwrap();

    assert_eq!(contours.len(), 1);
    assert_eq!(contours.segment_count(), 2);
    assert_eq!(
        contours[0][0].coefficients(),
        &[pt!(0, 0), pt!(10, 10), pt!(0, -10)]
    );
    assert_eq!(contours[0][1].coefficients(), &[pt!(10, 0), pt!(-10, 0)]);
}

#[test]
fn test_error_leaves_no_partial_result() {
    let mut path = PathStream::new();
    path.move_to(pt!(0, 0))
        .line_to(pt!(10, 0))
        .line_to(pt!(10, 10))
        .close()
        .quad_to(pt!(1, 1), pt!(2, 2));

    let result = ContourCollection::try_from(&path);
    assert_eq!(
        result,
        Err(ContourError::InvalidGeometry {
            index: Some(4),
            fault: GeometryFault::NoCurrentPoint
        })
    );
}

#[test]
fn test_owned_iteration() {
    let mut path = PathStream::new();
    path.move_to(pt!(0, 0))
        .line_to(pt!(1, 0))
        .close()
        .move_to(pt!(2, 2))
        .line_to(pt!(3, 2));

    let contours = ContourCollection::try_from(&path).unwrap();
    let closed: Vec<bool> = contours.iter().map(|c| c.is_closed()).collect();
    assert_eq!(closed, vec![true, false]);

    let segments: Vec<_> = contours.into_iter().flat_map(|c| c.into_iter()).collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2].at(1.0), pt!(3, 2));
}
