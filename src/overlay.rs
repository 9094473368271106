//! Host overlay lifecycle
//!
//! The mapper only produces directives; displaying them is the host's
//! job. The host hands in a sink that knows how to overlay and revert
//! replacements, and `OverlayController` drives the enable/disable
//! lifecycle around it: enabling scans and applies the full directive
//! set, disabling clears exactly what was applied, and a text change
//! while enabled drops the old set and rescans.

use crate::directive::Directive;
use crate::mapper::Mapper;

/// Receives display directives from the controller
///
/// Implementations own all display state. `apply` overlays the given
/// replacements; `clear` reverts every replacement previously applied
/// through this sink and must leave unrelated display state alone.
pub trait DirectiveSink {
    fn apply(&mut self, directives: &[Directive]);
    fn clear(&mut self);
}

/// Lifecycle states for the host-facing controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Disabled,
    Enabled,
}

/// Drives the Disabled/Enabled lifecycle over a directive sink
pub struct OverlayController {
    mapper: Mapper,
    state: OverlayState,
    applied: Vec<Directive>,
}

impl OverlayController {
    /// Create a disabled controller around a compiled mapper
    pub fn new(mapper: Mapper) -> Self {
        Self {
            mapper,
            state: OverlayState::Disabled,
            applied: Vec::new(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Check whether the overlay is enabled
    pub fn is_enabled(&self) -> bool {
        self.state == OverlayState::Enabled
    }

    /// The directive set currently applied to the sink
    pub fn applied(&self) -> &[Directive] {
        &self.applied
    }

    /// Enable: scan the snapshot and hand the full directive set to
    /// the sink
    ///
    /// Activating while already enabled clears and rescans, which is
    /// also how hosts report a text change (see [`refresh`]).
    ///
    /// [`refresh`]: OverlayController::refresh
    pub fn activate<S: DirectiveSink>(&mut self, text: &str, sink: &mut S) -> &[Directive] {
        if self.is_enabled() {
            sink.clear();
        }
        self.applied = self.mapper.scan(text).collect();
        sink.apply(&self.applied);
        self.state = OverlayState::Enabled;
        &self.applied
    }

    /// Disable: clear the sink and return the ranges that were applied
    ///
    /// Deactivating while already disabled does nothing.
    pub fn deactivate<S: DirectiveSink>(&mut self, sink: &mut S) -> Vec<Directive> {
        if !self.is_enabled() {
            return Vec::new();
        }
        sink.clear();
        self.state = OverlayState::Disabled;
        std::mem::take(&mut self.applied)
    }

    /// The text changed: drop the old directive set and rescan
    ///
    /// A no-op while disabled; a disabled overlay has nothing to keep
    /// in sync.
    pub fn refresh<S: DirectiveSink>(&mut self, text: &str, sink: &mut S) -> &[Directive] {
        if !self.is_enabled() {
            return &[];
        }
        self.activate(text, sink)
    }
}
