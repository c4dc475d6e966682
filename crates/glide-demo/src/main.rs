//! Console demo driving the tween engine with a fixed-step frame loop.
//!
//! Scenarios (pick with `glide.toml`, `GLIDE_SCENARIO`, or the first CLI
//! argument):
//! - `slide`: a 2D position easing across the screen
//! - `pulse`: an infinite yoyo scale loop (runs for the configured frames)
//! - `sequence`: move, then fade, chaining a third step from a callback

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use glide_config::GlideConfig;
use glide_core::easing::Easing;
use glide_core::manager::TweenManager;
use glide_core::target::{SharedValue, TargetHandle};
use glide_core::tween::Tween;
use glide_core::types::{LoopMode, TweenCategory};
use glide_core::value::Vec2;

fn main() -> Result<()> {
    let mut config = GlideConfig::load_or_default();
    config.merge_with_env();

    let filter = config
        .log
        .filter
        .clone()
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let scenario = std::env::args()
        .nth(1)
        .or_else(|| config.demo.scenario.clone())
        .unwrap_or_else(|| "sequence".to_string());

    let frame_step = config.playback.frame_step.unwrap_or(1.0 / 60.0);
    let frames = config.demo.frames.unwrap_or(180);
    let time_scale = config.playback.time_scale.unwrap_or(1.0);

    tracing::info!(%scenario, frame_step, frames, "starting demo");

    match scenario.as_str() {
        "slide" => run_slide(frame_step, frames, time_scale),
        "pulse" => run_pulse(frame_step, frames, time_scale),
        "sequence" => run_sequence(frame_step, frames, time_scale),
        other => bail!("unknown scenario `{other}` (try slide, pulse, sequence)"),
    }
}

/// A single eased 2D move.
fn run_slide(frame_step: f32, frames: u32, time_scale: f32) -> Result<()> {
    let mut manager = TweenManager::new();
    let position = SharedValue::shared(Vec2::ZERO);

    let id = manager.create_container(1, LoopMode::Restart, time_scale);
    let container = manager
        .container_mut(id)
        .expect("container was just created");
    container.append(
        Tween::new(
            TargetHandle::from_sink(&position),
            Vec2::ZERO,
            Vec2::new(320.0, 180.0),
            2.0,
        )
        .with_category(TweenCategory::Move)
        .with_easing(Easing::CubicInOut)
        .into_unit(),
    );

    for frame in 0..frames {
        manager.update(frame_step);
        let p = position.borrow().get();
        println!("frame {frame:3}  position ({:7.2}, {:7.2})", p.x, p.y);
        if manager.is_empty() {
            break;
        }
    }
    Ok(())
}

/// An infinite yoyo scale loop.
fn run_pulse(frame_step: f32, frames: u32, time_scale: f32) -> Result<()> {
    let mut manager = TweenManager::new();
    let scale = SharedValue::shared(1.0_f32);

    let id = manager.create_container(0, LoopMode::Yoyo, time_scale);
    let container = manager
        .container_mut(id)
        .expect("container was just created");
    container.append(
        Tween::new(TargetHandle::from_sink(&scale), 1.0, 1.5, 0.5)
            .with_category(TweenCategory::Scale)
            .with_easing(Easing::SineInOut)
            .into_unit(),
    );

    for frame in 0..frames {
        manager.update(frame_step);
        println!("frame {frame:3}  scale {:5.3}", scale.borrow().get());
    }
    Ok(())
}

/// Move, then fade; the fade's completion chains a final snap-back move.
fn run_sequence(frame_step: f32, frames: u32, time_scale: f32) -> Result<()> {
    let mut manager = TweenManager::new();
    let position = SharedValue::shared(Vec2::ZERO);
    let opacity = SharedValue::shared(1.0_f32);

    let id = manager.create_container(1, LoopMode::Restart, time_scale);
    let container = manager
        .container_mut(id)
        .expect("container was just created");

    container.append(
        Tween::new(
            TargetHandle::from_sink(&position),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            1.0,
        )
        .with_category(TweenCategory::Move)
        .with_easing(Easing::QuadOut)
        .into_unit(),
    );

    let return_target = position.clone();
    container.append(
        Tween::new(TargetHandle::from_sink(&opacity), 1.0, 0.0, 0.5)
            .with_category(TweenCategory::Fade)
            .on_end(move |_, scheduler| {
                tracing::info!("fade finished; chaining snap-back");
                scheduler.append_sequence(
                    Tween::new(
                        TargetHandle::from_sink(&return_target),
                        Vec2::new(100.0, 0.0),
                        Vec2::ZERO,
                        0.5,
                    )
                    .with_category(TweenCategory::Move)
                    .with_easing(Easing::BackOut)
                    .into_unit(),
                    2,
                );
            })
            .into_unit(),
    );

    for frame in 0..frames {
        manager.update(frame_step);
        let p = position.borrow().get();
        println!(
            "frame {frame:3}  position ({:7.2}, {:6.2})  opacity {:5.3}",
            p.x,
            p.y,
            opacity.borrow().get()
        );
        if manager.is_empty() {
            tracing::info!(frame, "sequence complete");
            break;
        }
    }
    Ok(())
}
