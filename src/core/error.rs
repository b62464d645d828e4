use thiserror::Error;

/// Errors raised by the ranking engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A field the requested computation needs is absent from a profile
    #[error("Malformed input: profile {profile_id} is missing {field}")]
    MalformedInput {
        profile_id: String,
        field: &'static str,
    },
}

impl MatchError {
    pub fn missing(profile_id: &str, field: &'static str) -> Self {
        MatchError::MalformedInput {
            profile_id: profile_id.to_string(),
            field,
        }
    }
}
