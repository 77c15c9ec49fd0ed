/// Errors raised by the game core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An action vector that does not have exactly one slot set
    InvalidAction { slots: [u8; 3] },
    /// A configuration that cannot describe a playable board
    InvalidConfig(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidAction { slots } => write!(
                f,
                "Invalid action vector {:?}: expected exactly one slot set to 1",
                slots
            ),
            GameError::InvalidConfig(reason) => write!(f, "Invalid game config: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InvalidAction { slots: [1, 1, 0] };
        assert_eq!(
            err.to_string(),
            "Invalid action vector [1, 1, 0]: expected exactly one slot set to 1"
        );

        let err = GameError::InvalidConfig("block_size must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid game config: block_size must be positive"
        );
    }
}
