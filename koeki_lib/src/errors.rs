use crate::vouchers::{Phase, Section};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Str(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{section} fields cannot be edited in the {phase} phase")]
    Locked { section: Section, phase: Phase },

    #[error("{0} is not a designated net asset account")]
    UnknownDesignatedTarget(String),
}
