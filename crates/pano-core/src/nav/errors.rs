use crate::errors::PanoError;

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("No tab groups exist")]
    EmptyList,

    #[error("No group matching '{selector}'")]
    NotFound { selector: String },

    #[error("Cannot switch to group '{title}': group has no tabs")]
    CannotSwitch { title: String },

    #[error("Invalid group selector '{input}'")]
    InvalidSelector { input: String },

    #[error("Empty group selector")]
    EmptySelector,
}

impl PanoError for NavError {
    fn error_code(&self) -> &'static str {
        match self {
            NavError::EmptyList => "GROUP_LIST_EMPTY",
            NavError::NotFound { .. } => "GROUP_NOT_FOUND",
            NavError::CannotSwitch { .. } => "GROUP_CANNOT_SWITCH",
            NavError::InvalidSelector { .. } => "INVALID_SELECTOR",
            NavError::EmptySelector => "EMPTY_SELECTOR",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
