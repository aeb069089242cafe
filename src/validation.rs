use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid regex"));

static MODULE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~/-]+$").expect("valid regex"));

static GO_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("valid regex"));

/// Validate a project name: a letter followed by letters, digits, `_` or `-`.
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::for_field("ProjectName", name, "must not be empty"));
    }
    if !PROJECT_NAME.is_match(name) {
        return Err(ValidationError::for_field(
            "ProjectName",
            name,
            "must start with a letter and contain only letters, digits, '_' or '-'",
        ));
    }
    Ok(())
}

/// Validate a Go module path such as `github.com/acme/shop`.
pub fn validate_module_path(path: &str) -> Result<(), ValidationError> {
    let invalid = |message: &str| Err(ValidationError::for_field("ModuleName", path, message));

    if path.is_empty() {
        return invalid("must not be empty");
    }
    if !MODULE_PATH.is_match(path) {
        return invalid("may only contain letters, digits and '.', '_', '~', '/', '-'");
    }
    if path.starts_with('/') || path.ends_with('/') {
        return invalid("must not start or end with '/'");
    }
    if path.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return invalid("must not contain empty, '.' or '..' segments");
    }
    Ok(())
}

/// Validate a Go version such as `1.22` or `1.22.3`.
pub fn validate_go_version(version: &str) -> Result<(), ValidationError> {
    if !GO_VERSION.is_match(version) {
        return Err(ValidationError::for_field(
            "GoVersion",
            version,
            "must look like MAJOR.MINOR or MAJOR.MINOR.PATCH",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_project_names() {
        for name in ["shop", "my-shop", "my_shop2", "A"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_project_names() {
        for name in ["", "9lives", "-shop", "my shop", "shop/api", "café"] {
            let err = validate_project_name(name).unwrap_err();
            assert_eq!(err.field.as_deref(), Some("ProjectName"));
        }
    }

    #[test]
    fn accepts_valid_module_paths() {
        for path in ["shop", "github.com/acme/shop", "example.com/a_b/c-d/v2"] {
            assert!(validate_module_path(path).is_ok(), "{path} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_module_paths() {
        for path in ["", "/shop", "shop/", "a//b", "a/../b", "has space", "a\\b"] {
            let err = validate_module_path(path).unwrap_err();
            assert_eq!(err.field.as_deref(), Some("ModuleName"), "{path}");
        }
    }

    #[test]
    fn validates_go_versions() {
        assert!(validate_go_version("1.22").is_ok());
        assert!(validate_go_version("1.22.3").is_ok());
        for version in ["", "1", "go1.22", "1.22.x"] {
            let err = validate_go_version(version).unwrap_err();
            assert_eq!(err.field.as_deref(), Some("GoVersion"));
        }
    }
}
