//! Text scene demo
//!
//! Builds a small HUD out of text nodes on the headless rasterizer, jitters
//! the labels for a few ticks and tears everything down again.
//!
//! Usage: `text_demo [config.toml|config.ron]`

use rand::Rng;
use scene_text::foundation::logging;
use scene_text::prelude::*;
use thiserror::Error;

const TICKS: u32 = 6;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

fn main() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(&path)?,
        None => SceneConfig::default(),
    };
    logging::init_with_filter(&config.log_filter);

    log::info!("Creating text scene...");
    let mut scene = Scene::new(HeadlessRasterizer::new(), &config);
    let hud = scene.create_group("hud");

    let score = scene.add_text(TextNodeDesc::new(10.0, 10.0, "score: 0"));
    let lives = scene.add_text(TextNodeDesc::new(10.0, 30.0, "lives: 3"));
    let banner = scene.add_text(
        TextNodeDesc::new(200.0, 150.0, "READY").with_style(TextStyle::new().with_font("bold 32pt Arial")),
    );

    for id in [score, lives, banner] {
        if let Some(node) = scene.node_mut(id) {
            node.events_mut().on_removed_from_group.subscribe(|event| {
                log::info!("{:?} left group {:?}", event.node, event.group);
            })?;
        }
        scene.add_to_group(id, hud)?;
    }

    let mut rng = rand::thread_rng();
    let mut points = 0_u32;

    for tick in 0..TICKS {
        if let Some(node) = scene.node_mut(banner) {
            if rng.gen_bool(0.5) {
                node.position.x += rng.gen_range(-2.0..2.0);
                node.position.y += rng.gen_range(-2.0..2.0);
            }
            node.set_angle(node.angle() + 15.0);
        }

        // Points only change on even ticks, odd ticks write the same text
        if tick % 2 == 0 {
            points += 10;
        }
        if let Some(node) = scene.node_mut(score) {
            let rendered = node.set_content(&format!("score: {points}"));
            log::debug!("Tick {tick}: score re-rendered = {rendered}");
        }

        let dirty = scene.update();
        log::info!("Tick {tick}: {dirty} of {} nodes moved", scene.len());
    }

    if let Some(node) = scene.node(banner) {
        let bounds = node.bounds();
        log::info!(
            "Banner at ({:.1}, {:.1}), angle {:.1}, {}x{} px",
            node.position.x,
            node.position.y,
            node.angle(),
            bounds.width,
            bounds.height
        );
    }

    let destroyed = scene.destroy_all()?;
    log::info!("Destroyed {destroyed} text nodes");
    Ok(())
}
