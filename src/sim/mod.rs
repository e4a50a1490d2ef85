//! Simulierter Tracking-Provider für Demo, Tests und Benchmarks.
//!
//! Eine statische Szene aus Flächen und Feature-Points, eine frei setzbare
//! Kamera und skriptbare Fehlerfälle. Hit-Tests werden per Ray-Casting durch
//! die inverse View-Projektion berechnet.

mod anchor;
mod scene;

pub use anchor::SimAnchor;
pub use scene::{point_in_polygon, SimFeaturePoint, SimPlane, POINT_HIT_RADIUS};

use crate::core::{
    Availability, CameraConfig, CameraFacing, CameraFrame, DisplayGeometry, DisplayRotation,
    HitResult, PlaneSnapshot, Pose, ProviderError, SessionConfig, Trackable, TrackingProvider,
    TrackingState,
};
use anchor::AnchorShared;
use glam::{Mat4, Quat, Vec2, Vec3};
use std::collections::VecDeque;
use std::sync::Arc;

/// Vertikales Sichtfeld der simulierten Kamera (Grad).
pub const SIM_FOV_Y_DEG: f32 = 60.0;
/// Standard-Höhe der Kamera über dem Boden (Meter).
pub const SIM_CAMERA_HEIGHT: f32 = 1.5;

/// Treffer auf einer Fläche mit ID 1 an `position`, für geskriptete Hit-Tests.
pub fn plane_hit(position: Vec3, contains_hit: bool) -> HitResult {
    HitResult {
        pose: Pose::from_translation(position),
        distance: position.length(),
        trackable: Trackable::Plane {
            plane_id: 1,
            contains_hit,
            subsumed: false,
        },
    }
}

/// In-Memory-Provider ohne Sensorik.
#[derive(Debug)]
pub struct SimulatedProvider {
    availability: Availability,
    depth_supported: bool,
    camera_available: bool,
    camera_configs: Vec<CameraConfig>,
    applied_config: Option<SessionConfig>,
    active_camera: Option<CameraConfig>,
    display: Option<DisplayGeometry>,
    display_updates: usize,
    camera_pose: Pose,
    camera_tracking: TrackingState,
    clip: (f32, f32),
    planes: Vec<SimPlane>,
    points: Vec<SimFeaturePoint>,
    scripted_hits: VecDeque<Vec<HitResult>>,
    anchors: Vec<Arc<AnchorShared>>,
    next_anchor_id: u64,
    reject_next_anchor: bool,
    fail_next_frame: bool,
    hit_test_calls: usize,
    running: bool,
    closed: bool,
}

impl SimulatedProvider {
    /// Provider mit Rück- und Frontkamera; Kamera 1.5 m über dem Ursprung, Blick nach unten.
    pub fn new() -> Self {
        Self {
            availability: Availability::Installed,
            depth_supported: true,
            camera_available: true,
            camera_configs: vec![
                CameraConfig {
                    facing: CameraFacing::Back,
                    image_size: [640, 480],
                },
                CameraConfig {
                    facing: CameraFacing::Back,
                    image_size: [1920, 1080],
                },
                CameraConfig {
                    facing: CameraFacing::Front,
                    image_size: [1280, 720],
                },
            ],
            applied_config: None,
            active_camera: None,
            display: None,
            display_updates: 0,
            camera_pose: Pose::new(
                Vec3::new(0.0, SIM_CAMERA_HEIGHT, 0.0),
                Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            ),
            camera_tracking: TrackingState::Tracking,
            clip: (crate::shared::NEAR_CLIP, crate::shared::FAR_CLIP),
            planes: Vec::new(),
            points: Vec::new(),
            scripted_hits: VecDeque::new(),
            anchors: Vec::new(),
            next_anchor_id: 1,
            reject_next_anchor: false,
            fail_next_frame: false,
            hit_test_calls: 0,
            running: false,
            closed: false,
        }
    }

    // ── Builder ─────────────────────────────────────────────────────

    /// Setzt das Ergebnis der Verfügbarkeitsprüfung.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Provider ohne Tiefen-Unterstützung.
    pub fn without_depth(mut self) -> Self {
        self.depth_supported = false;
        self
    }

    /// Resume scheitert mit `CameraNotAvailable`.
    pub fn with_camera_unavailable(mut self) -> Self {
        self.camera_available = false;
        self
    }

    /// Ersetzt die angebotenen Kamera-Konfigurationen.
    pub fn with_camera_configs(mut self, configs: Vec<CameraConfig>) -> Self {
        self.camera_configs = configs;
        self
    }

    /// Fügt eine horizontale Bodenfläche (ID 1) am Ursprung hinzu.
    pub fn with_floor(mut self, half_extent: f32) -> Self {
        self.planes.push(SimPlane::horizontal(1, Vec3::ZERO, half_extent));
        self
    }

    // ── Skript-Steuerung ────────────────────────────────────────────

    pub fn set_camera_pose(&mut self, pose: Pose) {
        self.camera_pose = pose;
    }

    pub fn set_camera_tracking(&mut self, state: TrackingState) {
        self.camera_tracking = state;
    }

    pub fn add_plane(&mut self, plane: SimPlane) {
        self.planes.push(plane);
    }

    pub fn add_feature_point(&mut self, point: SimFeaturePoint) {
        self.points.push(point);
    }

    /// Der nächste Hit-Test liefert genau diese Treffer statt des Ray-Casts.
    pub fn push_hit_results(&mut self, hits: Vec<HitResult>) {
        self.scripted_hits.push_back(hits);
    }

    /// Setzt den Tracking-Zustand eines Ankers. `false`, wenn die ID unbekannt ist.
    pub fn set_anchor_tracking(&self, anchor_id: u64, state: TrackingState) -> bool {
        match self.anchors.iter().find(|a| a.id == anchor_id) {
            Some(shared) => {
                shared.set_tracking_state(state);
                true
            }
            None => false,
        }
    }

    pub fn set_all_anchor_tracking(&self, state: TrackingState) {
        for shared in &self.anchors {
            shared.set_tracking_state(state);
        }
    }

    /// Die nächste Anker-Erstellung wird abgelehnt.
    pub fn reject_next_anchor(&mut self) {
        self.reject_next_anchor = true;
    }

    /// Das nächste Frame-Update scheitert mit einem internen Fehler.
    pub fn fail_next_frame(&mut self) {
        self.fail_next_frame = true;
    }

    /// Schließt die Session von außen, ohne den Controller zu informieren.
    pub fn close_externally(&mut self) {
        self.closed = true;
        self.running = false;
    }

    // ── Inspektion ──────────────────────────────────────────────────

    /// Anzahl erstellter, noch nicht gelöster Anker.
    pub fn live_anchor_count(&self) -> usize {
        self.anchors.iter().filter(|a| !a.is_detached()).count()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn applied_config(&self) -> Option<SessionConfig> {
        self.applied_config
    }

    pub fn active_camera_config(&self) -> Option<CameraConfig> {
        self.active_camera
    }

    pub fn display_geometry(&self) -> Option<DisplayGeometry> {
        self.display
    }

    /// Anzahl der `set_display_geometry`-Aufrufe.
    pub fn display_updates(&self) -> usize {
        self.display_updates
    }

    pub fn hit_test_calls(&self) -> usize {
        self.hit_test_calls
    }

    // ── Intern ──────────────────────────────────────────────────────

    fn effective_display(&self) -> DisplayGeometry {
        self.display.unwrap_or(DisplayGeometry {
            rotation: DisplayRotation::Rotation0,
            width: 1080,
            height: 1920,
        })
    }

    fn view_matrix(&self) -> Mat4 {
        self.camera_pose.to_matrix().inverse()
    }

    fn projection_matrix(&self) -> Mat4 {
        let (near, far) = self.clip;
        Mat4::perspective_rh_gl(
            SIM_FOV_Y_DEG.to_radians(),
            self.effective_display().aspect(),
            near,
            far,
        )
    }

    /// Strahl von der Kamera durch den Screen-Punkt (Pixel, Ursprung oben links).
    fn screen_ray(&self, screen_pos: Vec2) -> (Vec3, Vec3) {
        let size = self.effective_display().size();
        let ndc = Vec2::new(
            screen_pos.x / size.x * 2.0 - 1.0,
            1.0 - screen_pos.y / size.y * 2.0,
        );
        let inverse = (self.projection_matrix() * self.view_matrix()).inverse();
        let far = inverse.project_point3(ndc.extend(1.0));
        let origin = self.camera_pose.translation;
        (origin, (far - origin).normalize_or_zero())
    }

    fn ensure_open(&self) -> Result<(), ProviderError> {
        if self.closed {
            Err(ProviderError::SessionClosed)
        } else {
            Ok(())
        }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingProvider for SimulatedProvider {
    type Anchor = SimAnchor;

    fn availability(&mut self) -> Availability {
        self.availability
    }

    fn supports_depth(&self) -> bool {
        self.depth_supported
    }

    fn configure(&mut self, config: &SessionConfig) -> Result<(), ProviderError> {
        self.ensure_open()?;
        self.applied_config = Some(*config);
        Ok(())
    }

    fn camera_configs(&self) -> Vec<CameraConfig> {
        self.camera_configs.clone()
    }

    fn set_camera_config(&mut self, config: &CameraConfig) -> Result<(), ProviderError> {
        self.ensure_open()?;
        if !self.camera_configs.contains(config) {
            return Err(ProviderError::Internal(format!(
                "Unbekannte Kamera-Konfiguration {}x{}",
                config.image_size[0], config.image_size[1]
            )));
        }
        self.active_camera = Some(*config);
        Ok(())
    }

    fn resume(&mut self) -> Result<(), ProviderError> {
        self.ensure_open()?;
        if !self.camera_available {
            return Err(ProviderError::CameraNotAvailable);
        }
        self.running = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.running = false;
    }

    fn set_display_geometry(&mut self, geometry: DisplayGeometry) {
        self.display = Some(geometry);
        self.display_updates += 1;
    }

    fn current_frame(
        &mut self,
        near_clip: f32,
        far_clip: f32,
    ) -> Result<CameraFrame, ProviderError> {
        self.ensure_open()?;
        if !self.running {
            return Err(ProviderError::Internal("Session ist pausiert".into()));
        }
        if std::mem::take(&mut self.fail_next_frame) {
            return Err(ProviderError::Internal("Simulierter Frame-Fehler".into()));
        }
        self.clip = (near_clip, far_clip);
        Ok(CameraFrame {
            camera_pose: self.camera_pose,
            tracking_state: self.camera_tracking,
            view_matrix: self.view_matrix(),
            projection_matrix: self.projection_matrix(),
        })
    }

    fn hit_test(&mut self, screen_pos: Vec2) -> Result<Vec<HitResult>, ProviderError> {
        self.ensure_open()?;
        self.hit_test_calls += 1;
        if let Some(hits) = self.scripted_hits.pop_front() {
            return Ok(hits);
        }
        if !self.camera_tracking.is_tracking() {
            return Ok(Vec::new());
        }
        let (origin, dir) = self.screen_ray(screen_pos);
        if dir == Vec3::ZERO {
            return Ok(Vec::new());
        }
        Ok(scene::cast_ray(origin, dir, &self.planes, &self.points))
    }

    fn tracked_planes(&self) -> Vec<PlaneSnapshot> {
        self.planes.iter().map(SimPlane::snapshot).collect()
    }

    fn create_anchor(&mut self, hit: &HitResult) -> Result<SimAnchor, ProviderError> {
        self.ensure_open()?;
        if std::mem::take(&mut self.reject_next_anchor) {
            return Err(ProviderError::AnchorRejected(
                "Anker-Limit des Providers erreicht".into(),
            ));
        }
        self.anchors.retain(|shared| !shared.is_detached());
        let shared = Arc::new(AnchorShared::new(self.next_anchor_id, hit.pose));
        self.next_anchor_id += 1;
        self.anchors.push(Arc::clone(&shared));
        Ok(SimAnchor::new(shared))
    }

    fn close(&mut self) {
        for shared in &self.anchors {
            shared.detach();
        }
        self.closed = true;
        self.running = false;
    }
}
