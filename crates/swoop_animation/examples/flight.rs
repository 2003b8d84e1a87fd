//! Console demo: fly three staggered items from a product card to a cart
//! badge through the headless host, printing each rendered frame.
//!
//! Run with `RUST_LOG=debug cargo run --example flight` to see the
//! scheduling trace as well.

use std::sync::Arc;
use swoop_animation::{HeadlessHost, LaunchConfig, Launcher};
use swoop_core::{Point, Rect, Size, TargetRegistry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = TargetRegistry::new();
    let product = registry.register(Rect::new(Point::new(40.0, 620.0), Size::new(64.0, 64.0)));
    let cart = registry.register(Rect::new(Point::new(320.0, 24.0), Size::new(32.0, 32.0)));

    let host = Arc::new(HeadlessHost::new());
    host.start_background(30);

    let launcher = Launcher::new(host.clone(), Arc::new(registry));
    let config = LaunchConfig::default()
        .duration_ms(1200)
        .repeat(3)
        .items_delay_ms(120);

    launcher
        .launch_from_targets(product, cart, config, |index| {
            Box::new(move |frame| {
                println!(
                    "item {index}: ({:7.2}, {:7.2})  scale {:.2}",
                    frame.position.x, frame.position.y, frame.scale
                );
            })
        })
        .await?;

    host.stop_background();
    Ok(())
}
