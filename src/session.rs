//! Fixed-timestep session driver
//!
//! Hosts call `advance` once per rendered frame with the wall-clock delta.
//! The session converts that into whole simulation ticks, carrying the
//! remainder forward, and clears one-shot inputs after each tick. Events
//! raised by every tick of a frame are kept together for the host to read.

use crate::consts::*;
use crate::sim::{TickInput, WorldSetup, WorldState, tick};
use crate::tuning::{ConfigError, Tuning};

/// A running game: world state, pending input and the frame accumulator
#[derive(Debug, Clone)]
pub struct Session {
    state: WorldState,
    input: TickInput,
    accumulator: f32,
    /// Events raised outside a frame (start) survive the next `advance`
    carry_events: bool,
}

impl Session {
    /// Default island and tuning
    pub fn new(seed: u64) -> Self {
        Self::from_state(WorldState::new(seed))
    }

    /// Validate the config before building the world
    pub fn with_config(seed: u64, tuning: Tuning, setup: WorldSetup) -> Result<Self, ConfigError> {
        tuning.validate()?;
        setup.validate()?;
        Ok(Self::from_state(WorldState::with_config(seed, tuning, setup)))
    }

    /// Parse optional JSON overrides for tuning and setup
    pub fn from_json(
        seed: u64,
        tuning: Option<&str>,
        setup: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let tuning = match tuning {
            Some(json) => Tuning::from_json(json)?,
            None => Tuning::default(),
        };
        let setup = match setup {
            Some(json) => WorldSetup::from_json(json)?,
            None => WorldSetup::default(),
        };
        Self::with_config(seed, tuning, setup)
    }

    fn from_state(state: WorldState) -> Self {
        Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
            carry_events: false,
        }
    }

    /// Ready -> Playing
    pub fn start(&mut self) {
        self.state.start();
        self.carry_events = true;
    }

    /// Back to the start screen with the initial world
    pub fn restart(&mut self) {
        self.state.restart();
        self.input = TickInput::default();
        self.accumulator = 0.0;
        self.carry_events = false;
    }

    /// Run as many fixed ticks as the frame delta covers. Returns the tick count.
    ///
    /// Afterwards `events` holds exactly what this frame's ticks raised, and
    /// `camera_kick` their summed recoil.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !std::mem::take(&mut self.carry_events) {
            self.state.events.clear();
        }

        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        let mut kick = 0.0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
            kick += self.state.camera_kick;

            // Clear one-shot inputs after processing
            self.input.clear_triggers();
        }
        self.state.camera_kick = kick;
        substeps
    }

    /// Read-only view of the world for rendering
    pub fn snapshot(&self) -> &WorldState {
        &self.state
    }

    /// Serialized snapshot for hosts across an FFI boundary
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }

    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// Input for the next tick; one-shot flags stay set until a tick consumes them
    pub fn input_mut(&mut self) -> &mut TickInput {
        &mut self.input
    }
}
