/// Read access to named configuration values.
///
/// Implementations decide where values come from: the process environment
/// in production, an in-memory map in tests. Absent keys are reported as
/// `None`; the loader maps them to empty strings.
pub trait SettingsSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Looks a key up, falling back to the empty string.
    fn get_or_default(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapSource(HashMap<String, String>);

    impl SettingsSource for MapSource {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn should_return_the_value_when_the_key_is_present() {
        let source = MapSource(HashMap::from([(
            "OPENAI_MODEL_NAME".to_string(),
            "gpt-test".to_string(),
        )]));

        assert_eq!(source.get_or_default("OPENAI_MODEL_NAME"), "gpt-test");
    }

    #[test]
    fn should_fall_back_to_the_empty_string_when_the_key_is_absent() {
        let source = MapSource(HashMap::new());

        assert_eq!(source.get_or_default("OPENAI_MODEL_NAME"), "");
    }
}
