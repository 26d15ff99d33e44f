use std::collections::BTreeMap;

/// String keyed user configuration, persisted by the implementor.
pub trait ConfigStore {
    /// Empty string when the key was never written.
    fn read_string_config_value_for_key(&self, key: &str) -> String;
    fn save_user_config_value(&mut self, key: &str, value: &str);

    fn read_bool_config_value_for_key(&self, key: &str, default: bool) -> bool {
        match self.read_string_config_value_for_key(key).as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        }
    }

    fn set_bool_config_value_for_key(&mut self, key: &str, value: bool) {
        self.save_user_config_value(key, if value { "true" } else { "false" });
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryConfigStore {
    pub values: BTreeMap<String, String>,
}

impl ConfigStore for MemoryConfigStore {
    fn read_string_config_value_for_key(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    fn save_user_config_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
