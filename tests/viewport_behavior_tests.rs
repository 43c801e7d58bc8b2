use conversion_chart::core::{ViewportCommand, ViewportController, ViewportPolicy, ViewportWindow};

fn controller(total: usize) -> ViewportController {
    ViewportController::new(total, ViewportPolicy::default())
}

#[test]
fn controller_starts_on_full_range() {
    assert_eq!(controller(20).window(), ViewportWindow::new(0, 19));
    assert_eq!(controller(0).window(), ViewportWindow::new(0, 0));
}

#[test]
fn zoom_in_from_full_twenty_points_centers_sixteen() {
    let mut viewport = controller(20);

    assert!(viewport.zoom_in());

    assert_eq!(viewport.window(), ViewportWindow::new(2, 17));
    assert_eq!(viewport.window().length(), 16);
}

#[test]
fn repeated_zoom_in_settles_on_min_points() {
    let mut viewport = controller(20);
    for _ in 0..10 {
        viewport.zoom_in();
    }

    let window = viewport.window();
    assert_eq!(window.length(), 5);
    assert!(!viewport.zoom_in());
    assert_eq!(viewport.window(), window);
}

#[test]
fn zoom_out_returns_to_full_and_then_stops() {
    let mut viewport = controller(20);
    viewport.zoom_in();
    viewport.zoom_in();

    assert!(viewport.zoom_out());
    assert!(viewport.zoom_out());
    assert_eq!(viewport.window(), ViewportWindow::full(20));
    assert!(!viewport.zoom_out());
}

#[test]
fn pan_uses_a_third_of_the_window_and_keeps_length() {
    let mut viewport = controller(30);
    viewport.restore_window(ViewportWindow::new(10, 18));

    assert!(viewport.pan_right());
    assert_eq!(viewport.window(), ViewportWindow::new(13, 21));

    assert!(viewport.pan_left());
    assert!(viewport.pan_left());
    assert_eq!(viewport.window(), ViewportWindow::new(7, 15));
}

#[test]
fn pan_step_is_at_least_one() {
    let policy = ViewportPolicy {
        min_points: 2,
        step: 1,
    };
    let mut viewport = ViewportController::new(10, policy);
    viewport.restore_window(ViewportWindow::new(4, 5));

    viewport.pan_right();

    assert_eq!(viewport.window(), ViewportWindow::new(5, 6));
}

#[test]
fn pan_clamps_at_both_edges() {
    let mut viewport = controller(12);
    viewport.restore_window(ViewportWindow::new(0, 5));
    assert!(!viewport.pan_left());
    assert_eq!(viewport.window(), ViewportWindow::new(0, 5));

    viewport.restore_window(ViewportWindow::new(6, 11));
    assert!(!viewport.pan_right());
    assert_eq!(viewport.window(), ViewportWindow::new(6, 11));
}

#[test]
fn full_window_ignores_pan() {
    let mut viewport = controller(9);
    assert!(!viewport.pan_left());
    assert!(!viewport.pan_right());
    assert_eq!(viewport.window(), ViewportWindow::full(9));
}

#[test]
fn resize_resets_only_when_total_changes() {
    let mut viewport = controller(20);
    viewport.zoom_in();

    assert!(!viewport.resize(20));
    assert_eq!(viewport.window(), ViewportWindow::new(2, 17));

    assert!(viewport.resize(3));
    assert_eq!(viewport.window(), ViewportWindow::new(0, 2));
    assert_eq!(viewport.total_points(), 3);
}

#[test]
fn corrupt_window_is_healed_before_the_command() {
    let mut viewport = controller(20);
    viewport.restore_window(ViewportWindow::new(7, 7));

    viewport.apply(ViewportCommand::PanRight);

    assert_eq!(viewport.window(), ViewportWindow::full(20));
}

#[test]
fn fewer_points_than_min_points_cannot_zoom() {
    let mut viewport = controller(3);
    assert!(!viewport.zoom_in());
    assert!(!viewport.zoom_out());
    assert_eq!(viewport.window(), ViewportWindow::new(0, 2));
}

#[test]
fn empty_sequence_stays_at_origin() {
    let mut viewport = controller(0);
    for command in [
        ViewportCommand::ZoomIn,
        ViewportCommand::ZoomOut,
        ViewportCommand::PanLeft,
        ViewportCommand::PanRight,
        ViewportCommand::Reset,
    ] {
        viewport.apply(command);
        assert_eq!(viewport.window(), ViewportWindow::new(0, 0));
    }
}

#[test]
fn single_point_sequence_is_stable() {
    let mut viewport = controller(1);
    assert!(!viewport.zoom_in());
    assert!(!viewport.pan_left());
    assert_eq!(viewport.window(), ViewportWindow::new(0, 0));
}
