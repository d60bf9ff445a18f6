use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GamificationError {
    #[error("activity must earn at least one point")]
    NoPoints,

    #[error("point total would overflow")]
    PointsOverflow,
}
