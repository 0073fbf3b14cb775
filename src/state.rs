use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::models::{ActiveSimulation, Scenario, SimEvent, SimulationReport};

pub const SPEEDS: [f64; 4] = [0.5, 1.0, 2.0, 4.0];

pub fn is_supported_speed(value: f64) -> bool {
    SPEEDS.contains(&value)
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulationSnapshot {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub active: Option<ActiveSimulation>,
    #[serde(default)]
    pub report: Option<SimulationReport>,
    #[serde(default)]
    pub paused: bool,
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_speed() -> f64 {
    1.0
}

// Security events are newest-first by contract, checked in validate().
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SecuritySnapshot {
    #[serde(default)]
    pub events: Vec<SimEvent>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    pub simulation: SimulationSnapshot,
    #[serde(default)]
    pub security: SecuritySnapshot,
}

impl DashboardSnapshot {
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for scenario in &self.simulation.scenarios {
            if !ids.insert(scenario.id.as_str()) {
                return Err(Error::DuplicateScenarioId(scenario.id.clone()));
            }
        }

        if let Some(active) = &self.simulation.active {
            if active.current_step > active.steps.len() {
                return Err(Error::StepOutOfRange {
                    step: active.current_step,
                    total: active.steps.len(),
                });
            }
        }

        if !is_supported_speed(self.simulation.speed) {
            return Err(Error::InvalidSpeed(self.simulation.speed));
        }

        for pair in self.security.events.windows(2) {
            if pair[1].timestamp > pair[0].timestamp {
                return Err(Error::EventsOutOfOrder);
            }
        }

        Ok(())
    }
}

// An active simulation wins over a lingering report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageState {
    ScenarioSelect,
    Active,
    Completed,
}

impl PageState {
    pub fn of(simulation: &SimulationSnapshot) -> Self {
        if simulation.active.is_some() {
            PageState::Active
        } else if simulation.report.is_some() {
            PageState::Completed
        } else {
            PageState::ScenarioSelect
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageState::ScenarioSelect => write!(f, "scenario-select"),
            PageState::Active => write!(f, "active"),
            PageState::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    TogglePause,
    Stop,
    SetSpeed(f64),
    SlowMotion,
    FastForward,
    Start(String),
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SimCommand {
    Pause,
    Resume,
    Stop,
    SetSpeed(f64),
    Start(String),
    Reset,
}

pub fn dispatch(simulation: &SimulationSnapshot, action: ControlAction) -> Result<SimCommand> {
    match action {
        ControlAction::TogglePause => {
            require_active(simulation)?;
            if simulation.paused {
                Ok(SimCommand::Resume)
            } else {
                Ok(SimCommand::Pause)
            }
        }
        ControlAction::Stop => {
            require_active(simulation)?;
            Ok(SimCommand::Stop)
        }
        ControlAction::SetSpeed(value) => {
            require_active(simulation)?;
            if !is_supported_speed(value) {
                return Err(Error::InvalidSpeed(value));
            }
            Ok(SimCommand::SetSpeed(value))
        }
        ControlAction::SlowMotion => {
            require_active(simulation)?;
            Ok(SimCommand::SetSpeed(0.5))
        }
        ControlAction::FastForward => {
            require_active(simulation)?;
            Ok(SimCommand::SetSpeed(2.0))
        }
        ControlAction::Start(scenario_id) => {
            if simulation.active.is_some() {
                return Err(Error::SimulationRunning);
            }
            if !simulation.scenarios.iter().any(|s| s.id == scenario_id) {
                return Err(Error::UnknownScenario(scenario_id));
            }
            Ok(SimCommand::Start(scenario_id))
        }
        ControlAction::Reset => {
            if simulation.report.is_none() {
                return Err(Error::NoReport);
            }
            Ok(SimCommand::Reset)
        }
    }
}

fn require_active(simulation: &SimulationSnapshot) -> Result<()> {
    if simulation.active.is_none() {
        return Err(Error::NoActiveSimulation);
    }
    Ok(())
}
