//! Conversions between parameter names and command-line option names
//!
//! Parameters are declared in camelCase (`nonInteractive`) and typed on the
//! command line in kebab-case (`--non-interactive`).

/// Convert a camelCase parameter name to its kebab-case option name
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a kebab-case option name to its camelCase parameter name
pub fn kebab_to_camel(option: &str) -> String {
    let mut out = String::with_capacity(option.len());
    let mut upper_next = false;
    for c in option.chars() {
        if c == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_known_names() {
        assert_eq!(camel_to_kebab("nonInteractive"), "non-interactive");
        assert_eq!(camel_to_kebab("abiPath"), "abi-path");
        assert_eq!(camel_to_kebab("unit"), "unit");
        assert_eq!(kebab_to_camel("non-interactive"), "nonInteractive");
        assert_eq!(kebab_to_camel("abi-path"), "abiPath");
    }

    #[test]
    fn stray_dashes_are_dropped() {
        assert_eq!(kebab_to_camel("-unit"), "unit");
        assert_eq!(kebab_to_camel("unit-"), "unit");
    }

    proptest! {
        #[test]
        fn lowercase_camel_names_map_back(name in "[a-z]{1,8}([A-Z][a-z]{1,8}){0,3}") {
            prop_assert_eq!(kebab_to_camel(&camel_to_kebab(&name)), name);
        }
    }
}
