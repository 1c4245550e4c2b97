#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::{Path, PathBuf};

    use serde_json::{Value, json};

    use crate::types::ConfigMap;

    /// The application settings file most tests load.
    pub fn app_settings() -> Value {
        json!({
            "HTTPPort": 8000,
            "Env": "dev",
            "Logger": {
                "Level": "Notice",
                "File": "/tmp/config.out"
            }
        })
    }

    pub fn app_settings_map() -> ConfigMap {
        match app_settings() {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    /// Write `content` as JSON to `{dir}/{name}` and return the full path.
    pub fn write_json(dir: &Path, name: &str, content: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(content).unwrap()).unwrap();
        path
    }

    #[test]
    fn settings_fixture_is_an_object() {
        let map = app_settings_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["Logger"]["Level"], "Notice");
    }
}
