// ============================================================================
// SIGNATURE PAD - Widget de captura de firma
// ============================================================================
// El widget en sí es externo; aquí solo se registra el componente global
// `signature-pad` con sus opciones de trazo.
// ============================================================================

use serde::{Deserialize, Serialize};

use super::{GlobalComponent, Plugin};
use crate::app::AppBuilder;
use crate::error::{AppError, AppResult};

pub const SIGNATURE_PAD_TAG: &str = "signature-pad";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureOptions {
    pub pen_color: String,
    pub background_color: String,
    pub min_width: f32,
    pub max_width: f32,
    pub throttle_ms: u32,
}

impl Default for SignatureOptions {
    fn default() -> Self {
        Self {
            pen_color: "black".to_string(),
            background_color: "rgba(0,0,0,0)".to_string(),
            min_width: 0.5,
            max_width: 2.5,
            throttle_ms: 16,
        }
    }
}

#[derive(Default)]
pub struct SignaturePadPlugin {
    options: SignatureOptions,
}

impl SignaturePadPlugin {
    pub fn with_options(options: SignatureOptions) -> Self {
        Self { options }
    }
}

impl Plugin for SignaturePadPlugin {
    fn name(&self) -> &'static str {
        SIGNATURE_PAD_TAG
    }

    fn install(&self, app: &mut AppBuilder) -> AppResult<()> {
        let o = &self.options;
        if o.min_width <= 0.0 || o.min_width > o.max_width {
            return Err(AppError::plugin(
                self.name(),
                format!("invalid stroke width {}..{}", o.min_width, o.max_width),
            ));
        }

        app.register_component(
            GlobalComponent::new(SIGNATURE_PAD_TAG)
                .with_attribute("pen-color", &o.pen_color)
                .with_attribute("background-color", &o.background_color)
                .with_attribute("min-width", o.min_width)
                .with_attribute("max-width", o.max_width)
                .with_attribute("throttle", o.throttle_ms),
        )
    }
}
