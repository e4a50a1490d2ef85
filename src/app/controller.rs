//! Mess-Controller: verarbeitet einmal pro gerendertem Frame Tap, Anker und Label.

use super::events::{FrameOutcome, FrameReport};
use super::render_scene;
use super::session::{self, SessionError};
use super::state::{FrameStats, MeasurementPhase};
use super::tap_queue::{TapQueue, TapSender};
use super::use_cases;
use crate::core::{
    AnchorSet, AnchorSnapshot, DisplayGeometry, DisplayRotation, ProviderError, SessionConfig,
    TrackingProvider,
};
use crate::render::{self, RenderSink};
use crate::shared::{FrameScene, MeasureOptions};
use anyhow::Context;
use glam::Vec2;

/// Besitzt Provider, Anker-Set und Tap-Queue einer Mess-Session.
///
/// Wird beim Session-Start erstellt und explizit per [`teardown`](Self::teardown)
/// (oder Drop) abgebaut. Alle Methoden außer der Tap-Übergabe laufen auf dem
/// Frame-Thread; der Controller hat keinen eigenen Takt.
pub struct MeasurementController<P: TrackingProvider> {
    provider: P,
    anchors: AnchorSet<P::Anchor>,
    taps: TapQueue,
    options: MeasureOptions,
    config: SessionConfig,
    viewport: Option<DisplayGeometry>,
    pending_display: Option<DisplayGeometry>,
    open: bool,
    running: bool,
    phase: MeasurementPhase,
    stats: FrameStats,
}

impl<P: TrackingProvider> MeasurementController<P> {
    /// Startet eine Session: Verfügbarkeit prüfen, Provider konfigurieren.
    ///
    /// Das Tracking läuft erst nach [`resume`](Self::resume).
    pub fn start(mut provider: P, options: MeasureOptions) -> Result<Self, SessionError> {
        let config = session::open(&mut provider, &options.session)?;
        log::info!("Mess-Session gestartet");

        Ok(Self {
            provider,
            anchors: AnchorSet::new(),
            taps: TapQueue::new(),
            options,
            config,
            viewport: None,
            pending_display: None,
            open: true,
            running: false,
            phase: MeasurementPhase::NoAnchors,
            stats: FrameStats::default(),
        })
    }

    /// Setzt das Tracking fort. Die Display-Geometrie wird im nächsten Frame erneut gesetzt.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        if !self.open {
            return Err(SessionError::Closed);
        }
        session::resume(&mut self.provider)?;
        self.running = true;
        self.pending_display = self.viewport;
        log::info!("AR-Session fortgesetzt");
        Ok(())
    }

    /// Pausiert das Tracking; Ticks liefern bis zum Resume `Paused`.
    pub fn pause(&mut self) {
        if self.open && self.running {
            self.provider.pause();
            self.running = false;
            log::info!("AR-Session pausiert");
        }
    }

    /// Merkt eine geänderte Viewport-Geometrie für den nächsten Frame vor.
    pub fn set_viewport(&mut self, width: u32, height: u32, rotation: DisplayRotation) {
        let geometry = DisplayGeometry {
            rotation,
            width,
            height,
        };
        if self.viewport != Some(geometry) {
            self.viewport = Some(geometry);
            self.pending_display = Some(geometry);
        }
    }

    /// Producer-Handle für den Input-Thread.
    pub fn tap_sender(&self) -> TapSender {
        self.taps.sender()
    }

    /// Reiht einen Tap direkt ein.
    pub fn enqueue_tap(&self, screen_pos: Vec2) {
        self.taps.enqueue(screen_pos);
    }

    /// Verarbeitet einen Frame und übergibt die Szene an den Sink.
    ///
    /// Fehler werden an dieser Grenze abgefangen und geloggt: der Frame zeichnet
    /// dann nichts, der nächste Frame läuft normal.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> FrameOutcome {
        if !self.open {
            return FrameOutcome::NoSession;
        }
        if !self.running {
            return FrameOutcome::Paused;
        }

        match self.process_frame() {
            Ok((scene, report)) => {
                self.stats.frames += 1;
                render::submit(&scene, sink);
                if report.phase != self.phase {
                    log::debug!("Mess-Phase: {:?} → {:?}", self.phase, report.phase);
                    self.phase = report.phase;
                }
                FrameOutcome::Drawn(report)
            }
            Err(e) if is_session_closed(&e) => {
                log::info!("Provider wurde geschlossen, Session wird abgebaut");
                self.teardown();
                FrameOutcome::NoSession
            }
            Err(e) => {
                self.stats.frames += 1;
                self.stats.faulted_frames += 1;
                log::error!("Frame-Verarbeitung fehlgeschlagen: {:#}", e);
                FrameOutcome::Faulted
            }
        }
    }

    /// Baut Szene und Report eines Frames, ohne etwas zu zeichnen.
    fn process_frame(&mut self) -> anyhow::Result<(FrameScene, FrameReport)> {
        let provider = &mut self.provider;

        if let Some(geometry) = self.pending_display.take() {
            provider.set_display_geometry(geometry);
            log::debug!(
                "Display-Geometrie gesetzt: {}x{} ({:?})",
                geometry.width,
                geometry.height,
                geometry.rotation
            );
        }

        let (near, far) = self.options.clip_planes();
        let frame = provider
            .current_frame(near, far)
            .context("Frame-Update fehlgeschlagen")?;
        let tracking = frame.tracking_state.is_tracking();

        let placement = use_cases::placement::handle_pending_tap(
            &self.taps,
            &mut self.anchors,
            provider,
            tracking,
            &mut self.stats,
        )
        .context("Hit-Test fehlgeschlagen")?;

        let viewport = self.viewport.map(|geometry| geometry.size());
        let label =
            use_cases::measurement::label_for(&self.anchors, &frame, viewport, &self.options);
        let planes = if tracking {
            provider.tracked_planes()
        } else {
            Vec::new()
        };
        let scene = render_scene::build(&frame, &planes, &self.anchors, label, &self.options);

        let report = FrameReport {
            camera_tracking: frame.tracking_state,
            placement,
            label: scene.label.clone(),
            phase: MeasurementPhase::of(&self.anchors),
        };
        Ok((scene, report))
    }

    /// Baut die Session ab: Anker lösen, Taps verwerfen, Provider schließen.
    ///
    /// Idempotent. Spätere Ticks liefern `NoSession`.
    pub fn teardown(&mut self) {
        if !self.open {
            return;
        }
        let released = self.anchors.len();
        self.anchors.release_all();
        let dropped = self.taps.clear();
        self.provider.close();
        self.open = false;
        self.running = false;
        self.phase = MeasurementPhase::NoAnchors;
        log::info!(
            "Mess-Session beendet ({} Anker gelöst, {} Taps verworfen)",
            released,
            dropped
        );
    }

    /// Aktuelle Mess-Phase.
    pub fn phase(&self) -> MeasurementPhase {
        self.phase
    }

    /// Zähler seit Session-Start.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Anzahl lebender Anker (0–2).
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Read-only Schnappschüsse der Anker.
    pub fn anchor_snapshots(&self) -> Vec<AnchorSnapshot> {
        self.anchors.snapshots()
    }

    /// Anzahl wartender Taps.
    pub fn pending_taps(&self) -> usize {
        self.taps.len()
    }

    /// Tatsächlich angewendete Session-Konfiguration.
    pub fn session_config(&self) -> &SessionConfig {
        &self.config
    }

    /// Laufzeit-Optionen.
    pub fn options(&self) -> &MeasureOptions {
        &self.options
    }

    /// Gibt `true` zurück, solange die Session nicht abgebaut ist.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Gibt `true` zurück, wenn das Tracking läuft.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Zugriff auf den Provider (z.B. für Host-spezifische Abfragen).
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Veränderbarer Zugriff auf den Provider.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}

impl<P: TrackingProvider> Drop for MeasurementController<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn is_session_closed(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ProviderError>(),
        Some(ProviderError::SessionClosed)
    )
}
