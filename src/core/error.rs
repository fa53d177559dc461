use thiserror::Error;

/// Every rejected game action ends up here.
///
/// All variants mean "invalid operation or argument"; the variant tells the caller
/// which precondition failed so it can re-check with the matching `can_*` predicate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("step count must be positive, got {steps}")]
    NonPositiveSteps { steps: i32 },
    #[error("action needs {required} action points but only {available} remain")]
    InsufficientActionPoints { required: u32, available: u32 },
    #[error("direction {0} is not a finite angle in [0, 2π)")]
    InvalidDirection(f64),
    #[error("coordinate ({x}, {y}) is not a number")]
    InvalidCoordinate { x: f64, y: f64 },
    #[error("radius {radius} is below the minimum of {minimum}")]
    InvalidRadius { radius: f64, minimum: f64 },
    #[error("cannot jump while facing downward (direction {0})")]
    JumpFacingDown(f64),
    #[error("time {time} lies outside the jump's flight time of {flight_time}")]
    TimeOutsideFlight { time: f64, flight_time: f64 },
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("invalid name {0:?}")]
    InvalidName(String),
    #[error("no worm with handle {0}")]
    UnknownWorm(u32),
    #[error("no team named {0:?}")]
    UnknownTeam(String),
    #[error("team {0:?} already exists")]
    DuplicateTeam(String),
    #[error("team limit of {0} reached")]
    TooManyTeams(usize),
    #[error("invalid terrain: {0}")]
    InvalidTerrain(String),
    #[error("worm cannot fall: it already rests against terrain")]
    CannotFall,
    #[error("worm cannot shoot from inside impassable terrain")]
    ShooterObstructed,
    #[error("no location adjacent to terrain fits radius {0}")]
    NoAdjacentLocation(f64),
    #[error("game cannot start without worms")]
    NoWorms,
    #[error("game has not started")]
    GameNotStarted,
}

pub type ModelResult<T> = Result<T, ModelError>;
