//! `pubid generate` command.

use serde_json::Value;

use crate::context::ServiceContext;
use crate::mapping::Mapping;
use crate::public_id::PublicId;

/// Builds a mapping from an optional JSON object and `KEY=VALUE` pairs.
///
/// # Errors
///
/// Returns an error string if the JSON is not an object, a pair has no `=`
/// or an empty key, or a key is given more than once.
pub fn parse_mapping(attributes: &[String], json: Option<&str>) -> Result<Mapping, String> {
    let mut mapping = match json {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => Mapping::from(object),
            Ok(_) => return Err("--json must be a JSON object".to_string()),
            Err(e) => return Err(format!("Failed to parse --json: {e}")),
        },
        None => Mapping::new(),
    };

    for pair in attributes {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Attribute '{pair}' is not in KEY=VALUE form"))?;
        if key.is_empty() {
            return Err(format!("Attribute '{pair}' has an empty key"));
        }
        if mapping.insert(key, value).is_some() {
            return Err(format!("Attribute '{key}' given more than once"));
        }
    }
    Ok(mapping)
}

/// Derive the public ID for the given attributes with the context's
/// active generator.
///
/// # Errors
///
/// Returns an error string if the attributes are malformed or generation
/// fails.
pub fn derive(
    ctx: &ServiceContext,
    attributes: &[String],
    json: Option<&str>,
) -> Result<PublicId, String> {
    let mapping = parse_mapping(attributes, json)?;
    ctx.get_active_generator().generate_public_id(&mapping).map_err(|e| e.to_string())
}

/// Execute the `generate` command.
///
/// # Errors
///
/// Returns an error string if derivation fails.
pub fn run(ctx: &ServiceContext, attributes: &[String], json: Option<&str>) -> Result<(), String> {
    let id = derive(ctx, attributes, json)?;
    println!("{id}");
    Ok(())
}
