pub type TrajectResult<T> = Result<T, TrajectError>;

#[derive(thiserror::Error, Debug)]
pub enum TrajectError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrajectError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(TrajectError::parse("x").to_string().contains("parse error:"));
        assert!(
            TrajectError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = TrajectError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
