use scatterscope::data::drag::{DragKind, DragSession};
use scatterscope::data::viewport::{DomainChange, Viewport, ZoomTransform};
use scatterscope::{Axis, Domain, DragSensitivity, PixelPoint, PlotSize, Point, ZoomLimits};

fn viewport() -> Viewport {
    let mut vp = Viewport::new(
        PlotSize {
            width: 900.0,
            height: 450.0,
        },
        ZoomLimits::default(),
    );
    vp.set_loaded_domains(Domain::new(0.0, 110.0), Domain::new(-5.0, 45.0));
    vp
}

fn assert_close(a: f32, b: f32, tol: f32) {
    assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
}

#[test]
fn inverse_projection_round_trips_under_any_transform() {
    let transforms = [
        ZoomTransform::IDENTITY,
        ZoomTransform::new(2.5, -100.0, 13.0),
        ZoomTransform::new(0.3, 40.0, 0.0),
        ZoomTransform::new(50.0, -2000.0, -7.0),
    ];
    for transform in transforms {
        let mut vp = viewport();
        vp.apply_zoom(transform);
        for px in [0.0f32, 1.5, 250.0, 449.0, 899.0] {
            for py in [0.0f32, 100.25, 449.0] {
                let pixel = PixelPoint::new(px, py);
                let back = vp.project(vp.inverse_project(pixel));
                assert_close(back.x, pixel.x, 1e-2);
                assert_close(back.y, pixel.y, 1e-2);
            }
        }
    }
}

#[test]
fn round_trip_holds_after_axis_drags() {
    let mut vp = viewport();
    let sens = DragSensitivity::default();
    let mut drag = DragSession::begin(&vp, Axis::Y, DragKind::Rescale, PixelPoint::new(0.0, 100.0));
    drag.on_move(&mut vp, PixelPoint::new(0.0, 160.0), &sens);
    drag.end(&mut vp);
    vp.zoom_at(PixelPoint::new(300.0, 200.0), 3.0);

    let pixel = PixelPoint::new(123.0, 321.0);
    let back = vp.project(vp.inverse_project(pixel));
    assert_close(back.x, pixel.x, 1e-2);
    assert_close(back.y, pixel.y, 1e-2);
}

#[test]
fn zoom_never_touches_the_y_domain() {
    let mut vp = viewport();
    let y_before = *vp.axis(Axis::Y);
    let p = Point::new(30.0, 20.0);
    let py_before = vp.project(p).y;

    vp.apply_zoom(ZoomTransform::new(4.0, -250.0, 99.0));
    vp.zoom_at(PixelPoint::new(450.0, 10.0), 0.5);
    vp.pan_by(-30.0, 80.0);

    assert_eq!(*vp.axis(Axis::Y), y_before);
    assert_eq!(vp.project(p).y, py_before);
}

#[test]
fn zoom_scale_is_clamped() {
    let mut vp = viewport();
    vp.apply_zoom(ZoomTransform::new(1000.0, 0.0, 0.0));
    assert_eq!(vp.zoom().scale, 50.0);
    vp.apply_zoom(ZoomTransform::new(0.0, 0.0, 0.0));
    assert_eq!(vp.zoom().scale, 0.0001);

    let mut vp = viewport();
    for _ in 0..20 {
        vp.zoom_at(PixelPoint::new(100.0, 100.0), 10.0);
    }
    assert_eq!(vp.zoom().scale, 50.0);
}

#[test]
fn wheel_zoom_keeps_the_anchor_fixed() {
    let mut vp = viewport();
    let anchor = PixelPoint::new(300.0, 200.0);
    let under = vp.inverse_project(anchor);
    vp.zoom_at(anchor, 2.0);
    assert_close(vp.project(under).x, anchor.x, 1e-3);
}

#[test]
fn reset_x_drops_horizontal_zoom_only() {
    let mut vp = viewport();
    vp.apply_zoom(ZoomTransform::new(3.0, -120.0, 17.0));
    vp.rescale_domain(Axis::X, Domain::new(5.0, 50.0), DomainChange::Live);

    vp.reset_axis(Axis::X);
    assert_eq!(vp.zoom(), ZoomTransform::new(1.0, 0.0, 17.0));
    assert_eq!(vp.domain(Axis::X), Domain::new(0.0, 110.0));
}

#[test]
fn reset_y_keeps_zoom() {
    let mut vp = viewport();
    let zoom = ZoomTransform::new(2.0, -50.0, 0.0);
    vp.apply_zoom(zoom);
    vp.rescale_domain(Axis::Y, Domain::new(0.0, 1.0), DomainChange::Live);
    vp.reset_axis(Axis::Y);
    assert_eq!(vp.zoom(), zoom);
    assert_eq!(vp.domain(Axis::Y), Domain::new(-5.0, 45.0));
}

#[test]
fn rescale_drag_is_asymmetric_between_axes() {
    let sens = DragSensitivity::default();

    let mut vp = viewport();
    let mut drag = DragSession::begin(&vp, Axis::X, DragKind::Rescale, PixelPoint::new(100.0, 0.0));
    assert!(drag.on_move(&mut vp, PixelPoint::new(110.0, 0.0), &sens));
    assert_eq!(vp.domain(Axis::X), Domain::new(-5.0, 115.0));
    assert_eq!(vp.domain(Axis::Y), Domain::new(-5.0, 45.0));

    let mut vp = viewport();
    let mut drag = DragSession::begin(&vp, Axis::Y, DragKind::Rescale, PixelPoint::new(0.0, 100.0));
    assert!(drag.on_move(&mut vp, PixelPoint::new(0.0, 110.0), &sens));
    assert_eq!(vp.domain(Axis::Y), Domain::new(-6.0, 46.0));
    assert_eq!(vp.domain(Axis::X), Domain::new(0.0, 110.0));
}

#[test]
fn rescale_is_relative_to_the_drag_start() {
    let sens = DragSensitivity::default();
    let mut vp = viewport();
    let mut drag = DragSession::begin(&vp, Axis::X, DragKind::Rescale, PixelPoint::new(100.0, 0.0));
    drag.on_move(&mut vp, PixelPoint::new(120.0, 0.0), &sens);
    drag.on_move(&mut vp, PixelPoint::new(104.0, 0.0), &sens);
    assert_eq!(vp.domain(Axis::X), Domain::new(-2.0, 112.0));
}

#[test]
fn collapsing_drag_is_ignored() {
    let sens = DragSensitivity::default();
    let mut vp = viewport();
    let mut drag = DragSession::begin(&vp, Axis::X, DragKind::Rescale, PixelPoint::new(200.0, 0.0));
    // -110 px * 0.5 would shrink [0, 110] to [55, 55].
    assert!(!drag.on_move(&mut vp, PixelPoint::new(90.0, 0.0), &sens));
    assert_eq!(vp.domain(Axis::X), Domain::new(0.0, 110.0));
}

#[test]
fn pan_drag_follows_the_pointer() {
    let sens = DragSensitivity::default();
    let mut vp = viewport();
    let mut drag = DragSession::begin(&vp, Axis::X, DragKind::Pan, PixelPoint::new(0.0, 0.0));
    // A tenth of the width shifts the domain by a tenth of its span.
    drag.on_move(&mut vp, PixelPoint::new(90.0, 0.0), &sens);
    let d = vp.domain(Axis::X);
    assert!((d.min + 11.0).abs() < 1e-9);
    assert!((d.max - 99.0).abs() < 1e-9);
}

#[test]
fn only_drags_move_the_reset_target() {
    let sens = DragSensitivity::default();
    let mut vp = viewport();

    vp.rescale_domain(Axis::Y, Domain::new(1.0, 2.0), DomainChange::Live);
    assert_eq!(vp.axis(Axis::Y).original, Domain::new(-5.0, 45.0));

    let mut drag = DragSession::begin(&vp, Axis::Y, DragKind::Rescale, PixelPoint::new(0.0, 0.0));
    drag.on_move(&mut vp, PixelPoint::new(0.0, 10.0), &sens);
    let dragged = drag.end(&mut vp);
    assert_eq!(vp.axis(Axis::Y).original, dragged);
    assert_eq!(vp.axis(Axis::Y).loaded, Domain::new(-5.0, 45.0));

    vp.rescale_domain(Axis::Y, Domain::new(7.0, 8.0), DomainChange::Live);
    vp.reset_axis(Axis::Y);
    assert_eq!(vp.domain(Axis::Y), dragged);
}

#[test]
fn misordered_or_nan_zoom_limits_still_clamp() {
    let swapped = ZoomLimits {
        min_scale: 50.0,
        max_scale: 0.5,
        ..ZoomLimits::default()
    };
    let mut vp = Viewport::new(PlotSize::default(), swapped);
    vp.set_loaded_domains(Domain::new(0.0, 110.0), Domain::new(-5.0, 45.0));
    vp.zoom_at(PixelPoint::new(100.0, 0.0), 1e9);
    assert_eq!(vp.zoom().scale, 50.0);
    vp.apply_zoom(ZoomTransform::new(0.0, 0.0, 0.0));
    assert_eq!(vp.zoom().scale, 0.5);

    let nan_min = ZoomLimits {
        min_scale: f64::NAN,
        max_scale: 4.0,
        ..ZoomLimits::default()
    };
    let mut vp = Viewport::new(PlotSize::default(), nan_min);
    vp.set_loaded_domains(Domain::new(0.0, 110.0), Domain::new(-5.0, 45.0));
    vp.apply_zoom(ZoomTransform::new(0.0, 10.0, 0.0));
    assert_eq!(vp.zoom().scale, 0.0001);
    let pixel = PixelPoint::new(10.0, 10.0);
    let back = vp.project(vp.inverse_project(pixel));
    assert!(back.x.is_finite() && back.y.is_finite());
}
