/// Swagger primitive type names and the Flow types they map to.
pub const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("string", "string"),
    ("integer", "number"),
    ("number", "number"),
    ("boolean", "boolean"),
];

/// Look up the Flow type for a swagger primitive. `None` means the
/// primitive is unmapped and the caller must fail.
pub fn flow_primitive(name: &str) -> Option<&'static str> {
    PRIMITIVE_TYPES
        .iter()
        .find(|(swagger, _)| *swagger == name)
        .map(|(_, flow)| *flow)
}
