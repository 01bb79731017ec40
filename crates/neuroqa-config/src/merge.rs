/// Recursively deep-merge `overlay` into `base`.
///
/// - Tables merge recursively per-field.
/// - Scalars and arrays from the overlay **replace** the base value.
pub fn deep_merge(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                if let Some(base_val) = base_table.get_mut(key) {
                    deep_merge(base_val, overlay_val);
                } else {
                    base_table.insert(key.clone(), overlay_val.clone());
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> toml::Value {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn test_tables_merge_per_field() {
        let mut base = parse(
            r#"
            [logging]
            level = "info"
            format = "compact"
            "#,
        );
        let overlay = parse(
            r#"
            [logging]
            level = "debug"
            "#,
        );
        deep_merge(&mut base, &overlay);

        assert_eq!(base["logging"]["level"].as_str(), Some("debug"));
        assert_eq!(base["logging"]["format"].as_str(), Some("compact"));
    }

    #[test]
    fn test_arrays_replace() {
        let mut base = parse(r#"directives = ["a=debug", "b=info"]"#);
        let overlay = parse(r#"directives = ["c=trace"]"#);
        deep_merge(&mut base, &overlay);

        let arr = base["directives"].as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0].as_str(), Some("c=trace"));
    }

    #[test]
    fn test_new_keys_are_added() {
        let mut base = parse("[service]\n");
        let overlay = parse(
            r#"
            [ui]
            theme = "light"
            "#,
        );
        deep_merge(&mut base, &overlay);
        assert_eq!(base["ui"]["theme"].as_str(), Some("light"));
    }
}
