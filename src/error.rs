use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    SnapshotIo(String),
    #[error("{0}")]
    SnapshotParse(String),
    #[error("unsupported snapshot format '{0}'")]
    UnsupportedSnapshotFormat(String),
    #[error("duplicate scenario id '{0}'")]
    DuplicateScenarioId(String),
    #[error("current step {step} exceeds {total} scenario steps")]
    StepOutOfRange { step: usize, total: usize },
    #[error("unsupported speed {0} (expected one of 0.5, 1, 2, 4)")]
    InvalidSpeed(f64),
    #[error("security events must be newest-first")]
    EventsOutOfOrder,
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
    #[error("a simulation is already running")]
    SimulationRunning,
    #[error("no active simulation")]
    NoActiveSimulation,
    #[error("no simulation results available")]
    NoReport,
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
