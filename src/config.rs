//! Surface and render configuration
//!
//! Persisted separately from the live simulation (which is never saved)
//! in LocalStorage on web builds.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::renderer::vertex::colors;

/// Presentation constants for the demo scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Full-surface background fill
    pub background: [f32; 4],
    /// Particle fill color
    pub particle: [f32; 4],
    /// Particle radius in surface units
    pub particle_radius: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            particle: colors::PARTICLE,
            particle_radius: PARTICLE_RADIUS,
        }
    }
}

/// Demo configuration: surface bounds, particle count, render style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Surface width in pixels (> 0, finite)
    pub width: f32,
    /// Surface height in pixels (> 0, finite)
    pub height: f32,
    /// Number of particles seeded at init and on reset
    pub particle_count: usize,
    /// Presentation constants
    pub style: RenderStyle,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            particle_count: PARTICLE_COUNT,
            style: RenderStyle::default(),
        }
    }
}

impl SimConfig {
    /// Config with explicit surface bounds, defaults elsewhere
    pub fn with_bounds(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validate surface bounds.
    ///
    /// Errors with [`Error::InvalidSurfaceBounds`] when either dimension is
    /// zero, negative, or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidSurfaceBounds(format!(
                "width must be finite and > 0, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(Error::InvalidSurfaceBounds(format!(
                "height must be finite and > 0, got {}",
                self.height
            )));
        }
        Ok(())
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "bounce_box_config";

    /// Load config from LocalStorage (WASM only); defaults when absent or invalid
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str::<SimConfig>(&json) {
                    if config.validate().is_ok() {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    log::warn!("Stored config has bad bounds, using defaults");
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, PARTICLE_COUNT);
    }

    #[test]
    fn rejects_non_positive_bounds() {
        assert!(SimConfig::with_bounds(0.0, 600.0).validate().is_err());
        assert!(SimConfig::with_bounds(800.0, -1.0).validate().is_err());
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(SimConfig::with_bounds(f32::NAN, 600.0).validate().is_err());
        assert!(
            SimConfig::with_bounds(800.0, f32::INFINITY)
                .validate()
                .is_err()
        );
    }
}
