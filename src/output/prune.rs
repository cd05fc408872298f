use serde_json::Value;

/// Removes every object key whose value is `null`, at any depth.
///
/// Only `null` goes: empty strings, empty arrays and `false` stay. Array
/// elements are never removed, but objects inside arrays are pruned too.
pub fn prune_nulls(v: &mut Value) {
    match v {
        Value::Object(map) => {
            map.retain(|_, val| !val.is_null());
            for val in map.values_mut() {
                prune_nulls(val);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                prune_nulls(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_nested_nulls_only() {
        let mut v = json!({
            "a": null,
            "b": "",
            "c": [],
            "d": [{"x": null, "y": 1}, null],
            "e": {"f": null, "g": false}
        });
        prune_nulls(&mut v);
        assert_eq!(
            v,
            json!({"b": "", "c": [], "d": [{"y": 1}, null], "e": {"g": false}})
        );
    }
}
