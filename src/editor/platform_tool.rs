//! Platform tool
//!
//! Sits between a "platform" request (toolbar button, palette entry or
//! shortcut) and the configuration panel. While configuring, a dimming
//! overlay covers the level viewport and the panel floats above it.
//!
//! ```text
//! Idle --activate()--> Activating --> Configuring --place()-----> Idle
//!                                          |        (emits PlacementConfigured)
//!                                          +--deactivate()--> Deactivating --> Idle
//! ```
//!
//! `deactivate` is idempotent and runs from every exit path: Escape, a
//! successful place, a fresh activation, entity selection, scene shutdown.

use macroquad::prelude::*;
use crate::ui::{theme, LayerHost, LayerId, Rect, Tool, ToolContext, UiContext};
use crate::world::PlatformConfig;
use super::platform_panel::{PanelResponse, PlatformPanel};
use super::EventQueue;

pub const PLATFORM_TOOL_ID: &str = "platform";

/// Dimming overlay layer (below the panel)
pub const LAYER_OVERLAY: LayerId = LayerId("platform.overlay");
/// Configuration panel layer
pub const LAYER_PANEL: LayerId = LayerId("platform.panel");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    Idle,
    Activating,
    Configuring,
    Deactivating,
}

/// What the tool reports to its owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformToolEvent {
    /// A panel control changed the configuration
    ConfigChanged(PlatformConfig),
    /// "Place" was pressed; the owner should start placement with this config
    PlacementConfigured(PlatformConfig),
}

/// Input-blocking dimmer over the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub rect: Rect,
}

/// Footprint of the platform that would be placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPreview {
    pub width: f32,
    pub height: f32,
}

impl PlacementPreview {
    fn from_config(config: &PlatformConfig) -> Self {
        let (width, height) = config.dimensions();
        Self { width, height }
    }
}

pub struct PlatformTool {
    state: ToolState,
    config: PlatformConfig,
    panel: PlatformPanel,
    overlay: Option<Overlay>,
    preview: Option<PlacementPreview>,
    /// Seconds after activation before another activation is accepted
    rearm_delay: f64,
    /// Re-entrancy guard: activation is refused until this time
    guard_until: Option<f64>,
    events: EventQueue<PlatformToolEvent>,
}

impl PlatformTool {
    pub fn new(rearm_delay: f64) -> Self {
        Self {
            state: ToolState::Idle,
            config: PlatformConfig::default(),
            panel: PlatformPanel::new(),
            overlay: None,
            preview: None,
            rearm_delay: rearm_delay.max(0.0),
            guard_until: None,
            events: EventQueue::new(),
        }
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn config(&self) -> PlatformConfig {
        self.config
    }

    pub fn panel(&self) -> &PlatformPanel {
        &self.panel
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn preview(&self) -> Option<&PlacementPreview> {
        self.preview.as_ref()
    }

    pub fn is_guarded(&self) -> bool {
        self.guard_until.is_some()
    }

    /// Per-frame upkeep: expire the re-arm guard and follow viewport resizes
    pub fn update(&mut self, now: f64, viewport: Rect) {
        if self.guard_until.is_some_and(|until| now >= until) {
            self.guard_until = None;
        }

        if self.state == ToolState::Configuring {
            if let Some(overlay) = self.overlay.as_mut() {
                if overlay.rect != viewport {
                    overlay.rect = viewport;
                    self.panel.center_in(viewport);
                }
            }
        }
    }

    /// Input pass: the panel gets the press first, then the overlay
    /// swallows anything else over the viewport.
    pub fn handle_input(&mut self, ctx: &mut UiContext) -> PanelResponse {
        if self.state != ToolState::Configuring {
            return PanelResponse::None;
        }
        let response = self.panel.handle_input(ctx);
        if let Some(overlay) = &self.overlay {
            ctx.block(&overlay.rect);
        }
        response
    }

    /// Adopt a configuration edited on the panel
    pub fn apply_change(&mut self, config: PlatformConfig) {
        if self.state != ToolState::Configuring {
            log::debug!("Platform tool: change ignored while {:?}", self.state);
            return;
        }
        self.config = config;
        if let Some(preview) = self.preview.as_mut() {
            *preview = PlacementPreview::from_config(&config);
        }
        self.events.send(PlatformToolEvent::ConfigChanged(config));
    }

    /// Hand the current configuration off for placement and close.
    /// Returns false when not configuring.
    pub fn place(&mut self, layers: &mut dyn LayerHost) -> bool {
        if self.state != ToolState::Configuring {
            log::warn!("Platform tool: place requested while {:?}", self.state);
            return false;
        }
        let config = self.panel.get_config();
        self.config = config;

        self.panel.hide();
        self.overlay = None;
        layers.remove(LAYER_OVERLAY);

        log::info!(
            "Platform tool: placing {} segment {} platform",
            config.segment_count,
            if config.is_vertical { "vertical" } else { "horizontal" }
        );
        self.events.send(PlatformToolEvent::PlacementConfigured(config));
        self.deactivate(layers);
        true
    }

    pub fn drain_events(&mut self) -> Vec<PlatformToolEvent> {
        self.events.take()
    }

    pub fn draw_overlay(&self) {
        if let Some(overlay) = &self.overlay {
            let r = overlay.rect;
            draw_rectangle(r.x, r.y, r.w, r.h, theme::OVERLAY_COLOR);
        }
    }

    pub fn draw_panel(&self) {
        self.panel.draw(self.preview.map(|p| (p.width, p.height)));
    }
}

impl Tool for PlatformTool {
    fn id(&self) -> &'static str {
        PLATFORM_TOOL_ID
    }

    fn label(&self) -> &'static str {
        "Platform"
    }

    fn active(&self) -> bool {
        self.state != ToolState::Idle
    }

    fn activate(&mut self, cx: &mut ToolContext<'_>) -> bool {
        if matches!(self.state, ToolState::Activating | ToolState::Configuring) {
            log::debug!("Platform tool: activate ignored, already {:?}", self.state);
            return false;
        }
        // Activation completes within one call, so this only bites if it ever spans frames
        if self.guard_until.is_some_and(|until| cx.now < until) {
            log::debug!("Platform tool: activate ignored, re-arm pending");
            return false;
        }
        self.do_activate(cx)
    }

    fn do_activate(&mut self, cx: &mut ToolContext<'_>) -> bool {
        // Leftovers from an interrupted session
        self.deactivate(cx.layers);
        self.state = ToolState::Activating;

        self.config = PlatformConfig::default();
        self.panel.update_config(self.config);
        self.overlay = Some(Overlay { rect: cx.viewport });
        self.preview = Some(PlacementPreview::from_config(&self.config));

        self.panel.center_in(cx.viewport);
        self.panel.show();

        cx.layers.raise(LAYER_OVERLAY);
        cx.layers.raise(LAYER_PANEL);

        self.guard_until = Some(cx.now + self.rearm_delay);
        self.state = ToolState::Configuring;
        log::info!("Platform tool: configuring");
        true
    }

    fn deactivate(&mut self, layers: &mut dyn LayerHost) -> bool {
        let was_active = self.active();
        if was_active {
            self.state = ToolState::Deactivating;
        }
        self.do_deactivate(layers);
        if was_active {
            log::info!("Platform tool: deactivated");
        }
        was_active
    }

    fn do_deactivate(&mut self, layers: &mut dyn LayerHost) -> bool {
        self.panel.hide();
        self.preview = None;
        self.overlay = None;
        layers.remove(LAYER_PANEL);
        layers.remove(LAYER_OVERLAY);
        self.guard_until = None;
        self.state = ToolState::Idle;
        true
    }
}
