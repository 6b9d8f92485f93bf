use thiserror::Error;

use ba_core::{CoreError, UnitId};

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("candidate {0} has no position in the layout")]
    UnknownUnit(UnitId),

    #[error(transparent)]
    Param(#[from] CoreError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
