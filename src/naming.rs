//! Identifier transforms for emitted type and property names.

use clap::ValueEnum;

/// How property keys are written into object bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PropertyTransform {
    /// Keep the key as declared.
    #[default]
    #[value(name = "normal")]
    Normal,
    /// Lower-case the first character, or the whole key when it has no
    /// lowercase characters at all (`ID` becomes `id`).
    #[value(name = "firstCaseLower")]
    FirstCaseLower,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingPolicy {
    pub transform_property: PropertyTransform,
    /// Convert definition keys to PascalCase type names.
    pub change_type_case: bool,
}

impl NamingPolicy {
    pub fn new(transform_property: PropertyTransform, change_type_case: bool) -> Self {
        Self {
            transform_property,
            change_type_case,
        }
    }

    pub fn type_name(&self, raw: &str) -> String {
        resolve_type_name(raw, self)
    }

    pub fn property_name(&self, raw: &str) -> String {
        resolve_property_name(raw, self)
    }
}

pub fn resolve_type_name(raw: &str, policy: &NamingPolicy) -> String {
    if policy.change_type_case {
        to_pascal_case(raw)
    } else {
        raw.to_string()
    }
}

pub fn resolve_property_name(raw: &str, policy: &NamingPolicy) -> String {
    match policy.transform_property {
        PropertyTransform::Normal => raw.to_string(),
        PropertyTransform::FirstCaseLower => first_case_lower(raw),
    }
}

fn first_case_lower(raw: &str) -> String {
    if !raw.chars().any(char::is_lowercase) {
        return raw.to_lowercase();
    }

    let mut chars = raw.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Split on non-alphanumeric separators and lower-to-upper transitions,
/// upper-case each word's first character and keep the rest as written.
pub fn to_pascal_case(s: &str) -> String {
    let words = split_words(s);
    if words.is_empty() {
        return s.to_string();
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for part in s.split(|c: char| !c.is_alphanumeric()) {
        let mut start = 0;
        let mut prev: Option<char> = None;
        for (i, c) in part.char_indices() {
            if let Some(p) = prev {
                if p.is_lowercase() && c.is_uppercase() {
                    words.push(&part[start..i]);
                    start = i;
                }
            }
            prev = Some(c);
        }
        if start < part.len() {
            words.push(&part[start..]);
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower() -> NamingPolicy {
        NamingPolicy::new(PropertyTransform::FirstCaseLower, false)
    }

    #[test]
    fn normal_policy_passes_through() {
        let policy = NamingPolicy::default();
        assert_eq!(policy.type_name("pet_order"), "pet_order");
        assert_eq!(policy.property_name("UserId"), "UserId");
    }

    #[test]
    fn first_case_lower() {
        assert_eq!(lower().property_name("UserId"), "userId");
        assert_eq!(lower().property_name("name"), "name");
        assert_eq!(lower().property_name(""), "");
    }

    #[test]
    fn all_caps_keys_are_fully_lowered() {
        assert_eq!(lower().property_name("ID"), "id");
        assert_eq!(lower().property_name("URL_2"), "url_2");
    }

    #[test]
    fn pascal_case_type_names() {
        let policy = NamingPolicy::new(PropertyTransform::Normal, true);
        assert_eq!(policy.type_name("pet"), "Pet");
        assert_eq!(policy.type_name("pet_order"), "PetOrder");
        assert_eq!(policy.type_name("petOrder"), "PetOrder");
        assert_eq!(policy.type_name("api-response"), "ApiResponse");
        assert_eq!(policy.type_name("HTTPResponse"), "HTTPResponse");
        assert_eq!(policy.type_name("v2 user"), "V2User");
        assert_eq!(policy.type_name("__"), "__");
    }

    #[test]
    fn resolution_is_deterministic() {
        let policy = NamingPolicy::new(PropertyTransform::FirstCaseLower, true);
        for key in ["pet_order", "ID", "someValue", "Ünïcode-name"] {
            assert_eq!(
                resolve_type_name(key, &policy),
                resolve_type_name(key, &policy)
            );
            assert_eq!(
                resolve_property_name(key, &policy),
                resolve_property_name(key, &policy)
            );
        }
    }
}
