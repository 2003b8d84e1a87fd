//! End-to-end launch scheduling tests against the headless host.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use swoop_animation::{
    FlightFrame, HeadlessHost, LaunchConfig, LaunchError, Launcher, RenderFn,
};
use swoop_core::{Point, Rect, Size, TargetRegistry};

fn fixture() -> (Arc<HeadlessHost>, TargetRegistry, Launcher) {
    let host = Arc::new(HeadlessHost::new());
    let registry = TargetRegistry::new();
    let launcher = Launcher::new(host.clone(), Arc::new(registry.clone()));
    (host, registry, launcher)
}

fn capture() -> (Arc<Mutex<Vec<FlightFrame>>>, impl FnMut(usize) -> RenderFn) {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&frames);
    let factory = move |_index: usize| -> RenderFn {
        let sink = Arc::clone(&sink);
        Box::new(move |frame| sink.lock().unwrap().push(frame))
    };
    (frames, factory)
}

#[tokio::test(start_paused = true)]
async fn launch_resolves_at_the_upper_bound_not_before() {
    let (_host, _registry, launcher) = fixture();
    let (_frames, factory) = capture();

    let start = tokio::time::Instant::now();
    launcher
        .launch(
            Point::ZERO,
            Point::new(100.0, 100.0),
            LaunchConfig::default().duration_ms(500).items_delay_ms(50),
            factory,
        )
        .await;
    let elapsed = start.elapsed();

    // duration + (repeat_count + 1) * items_delay = 500 + 2 * 50
    assert!(elapsed >= Duration::from_millis(550), "resolved early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(600), "resolved late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn repeat_launch_mounts_one_overlay_per_item() {
    let (host, _registry, launcher) = fixture();
    let (_frames, factory) = capture();

    let start = tokio::time::Instant::now();
    launcher
        .launch(
            Point::ZERO,
            Point::new(50.0, 0.0),
            LaunchConfig::default()
                .duration_ms(500)
                .repeat(3)
                .items_delay_ms(100),
            factory,
        )
        .await;

    assert_eq!(host.total_mounted(), 3);
    // 500 + (3 + 1) * 100
    assert!(start.elapsed() >= Duration::from_millis(900));
}

#[tokio::test]
async fn unresolvable_origin_fails_before_destination_is_checked() {
    let (host, registry, launcher) = fixture();
    let (_frames, factory) = capture();

    // Neither target resolves; the origin failure must win
    let origin = registry.register(Rect::ZERO);
    let destination = registry.register(Rect::ZERO);
    registry.remove(origin);
    registry.remove(destination);

    let result = launcher
        .launch_from_targets(origin, destination, LaunchConfig::default(), factory)
        .await;

    assert_eq!(result, Err(LaunchError::OriginNotFound));
    assert_eq!(host.total_mounted(), 0);
}

#[tokio::test]
async fn unresolvable_destination_fails_without_mounting() {
    let (host, registry, launcher) = fixture();
    let (_frames, factory) = capture();

    let origin = registry.register(Rect::new(Point::new(10.0, 10.0), Size::new(8.0, 8.0)));
    let destination = registry.register(Rect::ZERO);
    registry.remove(destination);

    let result = launcher
        .launch_from_targets(origin, destination, LaunchConfig::default(), factory)
        .await;

    assert_eq!(result, Err(LaunchError::DestinationNotFound));
    assert_eq!(host.total_mounted(), 0);
}

#[tokio::test(start_paused = true)]
async fn resolvable_targets_delegate_to_point_launch() {
    let (host, registry, launcher) = fixture();
    let (_frames, factory) = capture();

    let origin = registry.register(Rect::new(Point::new(0.0, 0.0), Size::new(8.0, 8.0)));
    let destination = registry.register(Rect::new(Point::new(200.0, 40.0), Size::new(8.0, 8.0)));

    let result = launcher
        .launch_from_targets(origin, destination, LaunchConfig::default(), factory)
        .await;

    assert_eq!(result, Ok(()));
    assert_eq!(host.total_mounted(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn frames_flow_while_the_host_ticks() {
    let (host, _registry, launcher) = fixture();
    let (frames, factory) = capture();
    host.start_background(240);

    // control_range 0 keeps the arc on the chord, making x monotone
    launcher
        .launch(
            Point::ZERO,
            Point::new(100.0, 0.0),
            LaunchConfig::default()
                .duration_ms(700)
                .items_delay_ms(0)
                .control_range(0.0),
            factory,
        )
        .await;
    host.stop_background();

    let frames = frames.lock().unwrap();
    assert!(!frames.is_empty(), "host never delivered a frame");
    for pair in frames.windows(2) {
        assert!(pair[1].position.x >= pair[0].position.x, "x regressed");
    }
    for frame in frames.iter() {
        assert!((0.0..=1.0).contains(&frame.scale));
        assert!((0.0..=100.0).contains(&frame.position.x));
    }
}
