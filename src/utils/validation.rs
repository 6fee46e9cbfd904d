use crate::utils::error::{Result, SwapError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SwapError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_case_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('\0') {
        return Err(SwapError::Config {
            message: format!("{} contains null bytes", field_name),
        });
    }

    if value.ends_with('/') || value.ends_with('\\') {
        return Err(SwapError::Config {
            message: format!("{} must not end with a path separator", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("case name", "channel").is_ok());
        assert!(validate_non_empty_string("case name", "").is_err());
        assert!(validate_non_empty_string("case name", "   ").is_err());
    }

    #[test]
    fn test_validate_case_name() {
        assert!(validate_case_name("case name", "channel").is_ok());
        assert!(validate_case_name("case name", "runs/channel").is_ok());
        assert!(validate_case_name("case name", "runs/").is_err());
        assert!(validate_case_name("case name", "bad\0case").is_err());
    }
}
