//! Session-Aufbau: Verfügbarkeit prüfen, Provider konfigurieren, Kamera wählen.

use crate::core::{
    Availability, CameraConfig, CameraFacing, DepthMode, ProviderError, SessionConfig,
    TrackingProvider,
};

/// Fehler, die die Mess-Session beenden und dem Nutzer angezeigt werden.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Gerät unterstützt den Tracking-Dienst nicht
    #[error("Dieses Gerät unterstützt kein AR-Tracking")]
    Unsupported,
    /// Installation des Tracking-Dienstes wurde angefordert
    #[error("Installation des AR-Dienstes angefordert")]
    InstallRequested,
    /// Kamera belegt oder nicht verfügbar
    #[error("Kamera ist nicht verfügbar")]
    CameraNotAvailable,
    /// Konfiguration oder Resume fehlgeschlagen
    #[error("AR-Session konnte nicht eingerichtet werden: {0}")]
    Configuration(String),
    /// Session ist bereits abgebaut
    #[error("AR-Session ist geschlossen")]
    Closed,
}

impl SessionError {
    /// Text für die Nutzer-Meldung (Toast o.ä.).
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Gibt `true` zurück, wenn der Start später erneut versucht werden sollte.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SessionError::InstallRequested)
    }

    fn from_provider(error: ProviderError) -> Self {
        match error {
            ProviderError::CameraNotAvailable => SessionError::CameraNotAvailable,
            ProviderError::SessionClosed => SessionError::Closed,
            other => SessionError::Configuration(other.to_string()),
        }
    }
}

/// Wählt die rückseitige Kamera-Konfiguration mit der größten Auflösung.
pub fn select_camera_config(configs: &[CameraConfig]) -> Option<CameraConfig> {
    configs
        .iter()
        .filter(|config| config.facing == CameraFacing::Back)
        .max_by_key(|config| config.pixel_count())
        .copied()
}

/// Passt die gewünschte Konfiguration an die Fähigkeiten des Providers an.
pub fn effective_config<P: TrackingProvider>(provider: &P, requested: &SessionConfig) -> SessionConfig {
    let mut config = *requested;
    if config.depth == DepthMode::Automatic && !provider.supports_depth() {
        log::info!("Tiefe wird nicht unterstützt, Depth-Mode deaktiviert");
        config.depth = DepthMode::Disabled;
    }
    config
}

/// Prüft Verfügbarkeit und konfiguriert den Provider.
///
/// Schlägt ein Schritt fehl, wird keine Session erstellt.
pub fn open<P: TrackingProvider>(
    provider: &mut P,
    requested: &SessionConfig,
) -> Result<SessionConfig, SessionError> {
    match provider.availability() {
        Availability::Installed => {}
        Availability::InstallRequested => {
            log::info!("AR-Dienst wird installiert, Session-Start zurückgestellt");
            return Err(SessionError::InstallRequested);
        }
        Availability::Unsupported => {
            log::error!("AR-Tracking auf diesem Gerät nicht unterstützt");
            return Err(SessionError::Unsupported);
        }
    }

    let config = effective_config(provider, requested);
    provider
        .configure(&config)
        .map_err(SessionError::from_provider)?;

    match select_camera_config(&provider.camera_configs()) {
        Some(camera) => {
            provider
                .set_camera_config(&camera)
                .map_err(SessionError::from_provider)?;
            log::info!(
                "Kamera-Konfiguration gewählt: {}x{}",
                camera.image_size[0],
                camera.image_size[1]
            );
        }
        None => log::info!("Keine rückseitige Kamera-Konfiguration, Provider-Standard bleibt"),
    }

    log::info!(
        "AR-Session konfiguriert (Flächen: {:?}, Tiefe: {:?}, Fokus: {:?})",
        config.plane_finding,
        config.depth,
        config.focus
    );
    Ok(config)
}

/// Setzt das Tracking fort und übersetzt Provider-Fehler.
pub fn resume<P: TrackingProvider>(provider: &mut P) -> Result<(), SessionError> {
    provider.resume().map_err(SessionError::from_provider)
}
