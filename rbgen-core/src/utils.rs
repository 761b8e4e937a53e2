//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Empty segments produced by leading, trailing or doubled underscores are
/// dropped.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => std::iter::once(c.to_ascii_uppercase()).chain(chars).collect(),
            }
        })
        .collect()
}

/// Lowercase the first character and prefix every later uppercase character
/// with an underscore (e.g., "MyService" -> "my_service").
///
/// This is the transformation used to derive file names from constant names.
pub fn underscore(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i == 0 {
            result.extend(c.to_lowercase());
        } else if c.is_uppercase() {
            result.push('_');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Uppercase the first character only (e.g., "point" -> "Point").
///
/// Only ASCII letters change case; ruby constants must start with `A-Z`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => std::iter::once(c.to_ascii_uppercase()).chain(chars).collect(),
    }
}

/// Uppercase every character (e.g., "user_id" -> "USER_ID").
pub fn upcase(s: &str) -> String {
    s.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("__a__b_"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("MyService"), "my_service");
        assert_eq!(underscore("Ping_args"), "ping_args");
        assert_eq!(underscore("PingArgs"), "ping_args");
        assert_eq!(underscore("tutorial"), "tutorial");
        assert_eq!(underscore("HTTP"), "h_t_t_p");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("point"), "Point");
        assert_eq!(capitalize("my_struct"), "My_struct");
        assert_eq!(capitalize("RED"), "RED");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_non_ascii_first_letter_is_kept() {
        // char::to_uppercase would expand 'ß' to "SS"
        assert_eq!(capitalize("ßtate"), "ßtate");
        assert_eq!(capitalize("élan"), "élan");
        assert_eq!(to_pascal_case("ßtate_élan"), "ßtateélan");
        assert_eq!(to_pascal_case("a_ßb"), "Aßb");
    }

    #[test]
    fn test_upcase() {
        assert_eq!(upcase("user_id"), "USER_ID");
        assert_eq!(upcase("Name"), "NAME");
    }
}
