//! Dotted-path helpers shared by the validator, the preview projector and
//! the document model.
//!
//! Paths address nested values with `.` separators and `[index]` suffixes
//! for array entries, e.g. `sectionHeader.mainHeading.regularText` or
//! `contentParagraphs[2].text`.

use serde_json::Value;

use super::types::SchemaError;

/// Resolves a dotted path through a JSON value.
///
/// Missing intermediates resolve to `None` rather than an error, so callers
/// can treat unresolved paths as soft misses.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        let (key, indices) = parse_segment(segment)?;
        if !key.is_empty() {
            current = current.get(key)?;
        }
        for idx in indices {
            current = current.get(idx)?;
        }
    }
    Some(current)
}

/// Sets a value at a dotted path, creating intermediate objects as needed.
///
/// Array segments (`items[3]`) only resolve into arrays that already exist
/// and are long enough; the engine never fabricates array entries.
pub fn set_path(root: &mut Value, path: &str, value: Value) -> Result<(), SchemaError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.is_empty() || path.is_empty() {
        return Err(SchemaError::InvalidData("Empty field path".to_string()));
    }

    let mut current = root;
    for (pos, segment) in segments.iter().enumerate() {
        let last = pos == segments.len() - 1;
        let (key, indices) = parse_segment(segment).ok_or_else(|| {
            SchemaError::InvalidData(format!("Malformed path segment '{segment}' in '{path}'"))
        })?;
        if key.is_empty() {
            return Err(SchemaError::InvalidData(format!(
                "Malformed path segment '{segment}' in '{path}'"
            )));
        }

        if indices.is_empty() {
            let map = current.as_object_mut().ok_or_else(|| {
                SchemaError::InvalidData(format!("Path '{path}' traverses a non-object value"))
            })?;
            if last {
                map.insert(key.to_string(), value);
                return Ok(());
            }
            current = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        } else {
            let map = current.as_object_mut().ok_or_else(|| {
                SchemaError::InvalidData(format!("Path '{path}' traverses a non-object value"))
            })?;
            let mut target = map.get_mut(key).ok_or_else(|| {
                SchemaError::InvalidData(format!("Array '{key}' does not exist in '{path}'"))
            })?;
            for idx in indices {
                target = target.get_mut(idx).ok_or_else(|| {
                    SchemaError::InvalidData(format!("Index {idx} out of bounds in '{path}'"))
                })?;
            }
            if last {
                *target = value;
                return Ok(());
            }
            current = target;
        }
    }
    Ok(())
}

/// Joins a parent path and a field name into a dotted path.
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Appends an array index to a path: `items` + 2 -> `items[2]`.
pub fn index_path(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}

/// Splits one path segment into its key and trailing indices.
///
/// `items[1][2]` parses to `("items", [1, 2])`. Returns `None` when the
/// bracket syntax is malformed.
fn parse_segment(segment: &str) -> Option<(&str, Vec<usize>)> {
    match segment.find('[') {
        None => Some((segment, Vec::new())),
        Some(bracket) => {
            let key = &segment[..bracket];
            let mut indices = Vec::new();
            let mut rest = &segment[bracket..];
            while !rest.is_empty() {
                if !rest.starts_with('[') {
                    return None;
                }
                let close = rest.find(']')?;
                let idx: usize = rest[1..close].parse().ok()?;
                indices.push(idx);
                rest = &rest[close + 1..];
            }
            Some((key, indices))
        }
    }
}
