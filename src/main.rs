//! AR-Measure Demo.
//!
//! Treibt den Messkern mit dem simulierten Provider: ein Input-Thread
//! liefert Taps, ein UI-Thread empfängt die Labels, der Haupt-Thread rendert.

use anyhow::Context;
use ar_measure::core::DisplayRotation;
use ar_measure::{FrameOutcome, LabelEvent, LogSink, MeasureOptions, MeasurementController};
use ar_measure::SimulatedProvider;
use glam::Vec2;
use std::thread;
use std::time::Duration;

/// Frame-Takt der Demo (~30 FPS).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
/// Anzahl gerenderter Frames.
const DEMO_FRAMES: u32 = 90;
/// Viewport des simulierten Geräts (Hochformat).
const VIEWPORT: (u32, u32) = (1080, 1920);

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("AR-Measure Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MeasureOptions::config_path();
        let options = MeasureOptions::load_from_file(&config_path);

        let provider = SimulatedProvider::new().with_floor(2.0);
        let mut controller = MeasurementController::start(provider, options)
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        controller
            .resume()
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        controller.set_viewport(VIEWPORT.0, VIEWPORT.1, DisplayRotation::Rotation0);

        // UI-Thread: Labels kommen vom Frame-Thread per Channel
        let (label_tx, label_rx) = crossbeam_channel::unbounded::<LabelEvent>();
        let ui = thread::Builder::new()
            .name("ui".into())
            .spawn(move || {
                for event in label_rx {
                    match event {
                        LabelEvent::Show { text, screen_pos, .. } => log::info!(
                            "Label: {} bei ({:.0}, {:.0})",
                            text,
                            screen_pos.x,
                            screen_pos.y
                        ),
                        LabelEvent::Hide => log::info!("Label ausgeblendet"),
                    }
                }
            })
            .context("UI-Thread konnte nicht gestartet werden")?;

        // Input-Thread: geskriptete Taps (Mitte, oben, dann ein dritter Tap)
        let taps = controller.tap_sender();
        let input = thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                let script = [
                    (10, Vec2::new(540.0, 960.0)),
                    (25, Vec2::new(540.0, 560.0)),
                    (60, Vec2::new(300.0, 1200.0)),
                ];
                let mut frame = 0;
                for (at_frame, pos) in script {
                    thread::sleep(FRAME_INTERVAL * (at_frame - frame));
                    frame = at_frame;
                    if !taps.enqueue(pos) {
                        break;
                    }
                }
            })
            .context("Input-Thread konnte nicht gestartet werden")?;

        let mut sink = LogSink::new().with_label_channel(label_tx);
        for _ in 0..DEMO_FRAMES {
            match controller.tick(&mut sink) {
                FrameOutcome::NoSession => break,
                FrameOutcome::Drawn(_) | FrameOutcome::Paused | FrameOutcome::Faulted => {}
            }
            thread::sleep(FRAME_INTERVAL);
        }

        if input.join().is_err() {
            log::warn!("Input-Thread ist abgestürzt");
        }

        let stats = controller.stats();
        controller.teardown();
        drop(sink);
        if ui.join().is_err() {
            log::warn!("UI-Thread ist abgestürzt");
        }

        log::info!(
            "Demo beendet: {} Frames ({} fehlerhaft), {} Taps, {} Anker gesetzt, {} ersetzt",
            stats.frames,
            stats.faulted_frames,
            stats.taps_consumed,
            stats.anchors_placed,
            stats.anchors_replaced
        );
        Ok(())
    }
}
