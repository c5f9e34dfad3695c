use thiserror::Error;

use crate::api::ItemId;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport geometry: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown timeline item: {0}")]
    UnknownItem(ItemId),
}
