use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(
    entity: &str,
    field: &str,
    value: &'a Option<T>,
) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| SiteError::config(entity, field, "is required but missing"))
}

pub fn validate_non_empty_string(entity: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::config(
            entity,
            field,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(entity: &str, field: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(SiteError::config(entity, field, "needs at least one entry"));
    }
    Ok(())
}

/// Rendering keys come from these values, so a repeat would give two
/// elements the same identity.
pub fn validate_unique<'a, I>(entity: &str, field: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(SiteError::config(
                entity,
                field,
                format!("contains duplicate key `{}`", value),
            ));
        }
    }
    Ok(())
}

pub fn validate_email(entity: &str, field: &str, email: &str) -> Result<()> {
    validate_non_empty_string(entity, field, email)?;

    let invalid = |reason: String| SiteError::config(entity, field, reason);

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid(format!("`{}` must contain exactly one '@'", email))),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(invalid(format!(
            "`{}` needs both a mailbox and a domain",
            email
        )));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid(format!("`{}` contains whitespace", email)));
    }

    Url::parse(&format!("mailto:{}", email))
        .map(|_| ())
        .map_err(|e| invalid(format!("`{}` is not a mail target: {}", email, e)))
}

/// Blank optional strings behave exactly like absent ones.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("contact", "email", "john.doe@example.com").is_ok());
        assert!(validate_email("contact", "email", "").is_err());
        assert!(validate_email("contact", "email", "john.doe").is_err());
        assert!(validate_email("contact", "email", "a@b@c").is_err());
        assert!(validate_email("contact", "email", "@example.com").is_err());
        assert!(validate_email("contact", "email", "john@").is_err());
        assert!(validate_email("contact", "email", "john doe@example.com").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("skills", "category", ["Frontend", "Backend"]).is_ok());

        let err = validate_unique("skills", "category", ["Frontend", "Frontend"]).unwrap_err();
        assert!(err.to_string().contains("duplicate key `Frontend`"));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        let missing: Option<String> = None;

        assert_eq!(
            validate_required_field("portfolio", "name", &present).unwrap(),
            "x"
        );
        assert!(validate_required_field("portfolio", "name", &missing).is_err());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" https://example.com ".to_string())),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_non_empty_list() {
        let empty: Vec<String> = vec![];
        assert!(validate_non_empty_list("project `X`", "technologies", &empty).is_err());
        assert!(validate_non_empty_list("project `X`", "technologies", &["Rust"]).is_ok());
    }
}
