//! Case conversion between snake_case, camelCase and PascalCase
//!
//! These are total functions: malformed input (empty strings,
//! consecutive underscores, pure uppercase) degrades to a best-effort
//! result rather than an error.

/// Convert a snake_case string to camelCase.
///
/// The first word is lowercased, every following word is capitalized.
/// Empty segments from consecutive underscores contribute nothing.
pub fn to_camel(snake_str: &str) -> String {
    let mut segments = snake_str.split('_').filter(|segment| !segment.is_empty());
    let mut result = String::with_capacity(snake_str.len());
    if let Some(first) = segments.next() {
        result.extend(first.chars().flat_map(char::to_lowercase));
    }
    for segment in segments {
        result.push_str(&capitalize(segment));
    }
    result
}

/// Convert a snake_case string to PascalCase.
pub fn to_pascal(snake_str: &str) -> String {
    snake_str
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a camelCase or PascalCase string to snake_case.
///
/// A separator is inserted before each uppercase letter that follows a
/// lowercase letter or digit, so `createObject` and `CreateObject`
/// normalize identically.
pub fn to_snake(camel_str: &str) -> String {
    let mut result = String::with_capacity(camel_str.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in camel_str.chars() {
        if c.is_uppercase() {
            if prev_lower_or_digit {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
            result.push(c);
        }
    }
    result
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_to_camel() {
        assert_eq!(to_camel("create_object"), "createObject");
        assert_eq!(to_camel("enable_addon"), "enableAddon");
        assert_eq!(to_camel("x"), "x");
    }

    #[test]
    fn snake_to_pascal() {
        assert_eq!(to_pascal("create_object"), "CreateObject");
        assert_eq!(to_pascal("vrm_export_options"), "VrmExportOptions");
    }

    #[test]
    fn camel_and_pascal_to_snake() {
        assert_eq!(to_snake("createObject"), "create_object");
        assert_eq!(to_snake("CreateObject"), "create_object");
        assert_eq!(to_snake("enableAddon"), "enable_addon");
    }

    #[test]
    fn conversion_chains_are_idempotent_on_snake_input() {
        for s in ["create_object", "enable_addon", "edit_mesh_vertices", "export"] {
            assert_eq!(to_snake(&to_pascal(s)), s);
            assert_eq!(to_snake(&to_camel(s)), s);
        }
    }

    #[test]
    fn malformed_input_degrades_gracefully() {
        assert_eq!(to_camel(""), "");
        assert_eq!(to_pascal(""), "");
        assert_eq!(to_snake(""), "");
        assert_eq!(to_camel("create__object"), "createObject");
        assert_eq!(to_snake("ABC"), "abc");
    }
}
