/// Parse and validate a profile name.
///
/// Profile names key a TOML table (`[profiles.<name>]`), so they are limited
/// to ASCII letters, digits, `-`, and `_`.
///
/// # Errors
///
/// Returns an error message if the name is empty or has other characters.
pub fn parse_profile(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Profile name cannot be empty".to_string());
    }

    if let Some(c) = s
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(format!(
            "Profile name can only contain letters, numbers, '-' or '_' (found '{c}' in '{s}')"
        ));
    }

    Ok(s.to_string())
}

/// Parse and validate a project name.
///
/// The name lands in `package.json`, so it cannot start with `.` or `_`
/// and is limited to ASCII letters, digits, `-`, and `_`.
///
/// # Errors
///
/// Returns an error message for empty names, names with a leading `.` or
/// `_`, and names with other characters.
pub fn parse_project_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }

    if s.starts_with('.') || s.starts_with('_') {
        return Err(format!("Project name cannot start with '.' or '_' (got '{s}')"));
    }

    if let Some(c) = s
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(format!(
            "Project name can only contain letters, numbers, '-' or '_' (found '{c}' in '{s}')"
        ));
    }

    Ok(s.to_string())
}
