use swagger_to_flow::{NamingPolicy, PropertyTransform, convert_schema, convert_schema_with_naming};

fn main() {
    // Example 1: Single definition
    let schema1 = r#"{
        "definitions": {
            "Person": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "age": { "type": "integer" },
                    "isStudent": { "type": "boolean" }
                }
            }
        }
    }"#;

    println!("=== Example 1: Single Definition ===");
    println!("{}\n", convert_schema(schema1).unwrap());

    // Example 2: References are declared before the types that use them
    let schema2 = r##"{
        "definitions": {
            "Order": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "pet": { "$ref": "#/definitions/Pet" }
                }
            },
            "Pet": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "photoUrls": { "type": "array", "items": { "type": "string" } },
                    "tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } }
                }
            },
            "Tag": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" }
                }
            }
        }
    }"##;

    println!("=== Example 2: References ===");
    println!("{}\n", convert_schema(schema2).unwrap());

    // Example 3: Naming transforms
    let schema3 = r#"{
        "definitions": {
            "api_response": {
                "type": "object",
                "properties": {
                    "ID": { "type": "integer" },
                    "Message": { "type": "string" }
                }
            }
        }
    }"#;

    let naming = NamingPolicy::new(PropertyTransform::FirstCaseLower, true);
    println!("=== Example 3: Naming Transforms ===");
    println!("{}\n", convert_schema_with_naming(schema3, naming).unwrap());

    // Example 4: Unsupported constructs fail instead of degrading
    let schema4 = r#"{
        "definitions": {
            "Status": { "type": "string", "enum": ["available", "sold"] }
        }
    }"#;

    println!("=== Example 4: Unsupported Definition ===");
    match convert_schema(schema4) {
        Ok(output) => println!("{}\n", output),
        Err(err) => println!("error: {}\n", err),
    }
}
