use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const KEY_FREQUENCY: &str = "frequency";
const KEY_TITLE: &str = "title";

/// One entry of a favorites list.
///
/// The JSON object read from the list file is kept as-is and written back
/// as-is. `frequency` and `title` are read through accessors, so an entry
/// whose fields have unexpected types or are missing still round-trips with
/// every key and value intact (keys come back in sorted order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteStation {
    fields: Map<String, Value>,
}

impl FavoriteStation {
    /// `frequency` is in kHz (e.g. 104_300 for 104.3 MHz).
    pub fn new(frequency: u32, title: impl Into<String>) -> Self {
        let mut station = Self::default();
        station.set_frequency(frequency);
        station.set_title(title);
        station
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Frequency in kHz, if present and a non-negative integer that fits.
    pub fn frequency(&self) -> Option<u32> {
        self.fields
            .get(KEY_FREQUENCY)
            .and_then(Value::as_u64)
            .and_then(|f| u32::try_from(f).ok())
    }

    pub fn set_frequency(&mut self, frequency: u32) {
        self.fields.insert(KEY_FREQUENCY.to_string(), frequency.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get(KEY_TITLE).and_then(Value::as_str)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.fields
            .insert(KEY_TITLE.to_string(), Value::String(title.into()));
    }

    /// Label for list rows: the title, or the frequency in MHz when untitled.
    pub fn display(&self) -> String {
        match (self.title().map(str::trim), self.frequency()) {
            (Some(title), _) if !title.is_empty() => title.to_string(),
            (_, Some(freq)) => format!("{:.1} MHz", freq as f64 / 1000.0),
            _ => "?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> FavoriteStation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_prefers_title() {
        let s = FavoriteStation::new(104_300, "Radio Rock");
        assert_eq!(s.display(), "Radio Rock");
    }

    #[test]
    fn test_display_falls_back_to_frequency() {
        let s = FavoriteStation::new(104_300, "  ");
        assert_eq!(s.display(), "104.3 MHz");
        assert_eq!(FavoriteStation::default().display(), "?");
    }

    #[test]
    fn test_missing_fields_stay_missing() {
        let s = parse(json!({ "name": "NoFreq" }));
        assert_eq!(s.frequency(), None);
        assert_eq!(s.title(), None);
        assert_eq!(serde_json::to_value(&s).unwrap(), json!({ "name": "NoFreq" }));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let raw = json!({ "frequency": 88_000, "title": "Jazz", "rds": "JAZZFM", "pinned": true });
        let s = parse(raw.clone());
        assert_eq!(s.frequency(), Some(88_000));
        assert_eq!(s.get("rds"), Some(&json!("JAZZFM")));
        assert_eq!(serde_json::to_value(&s).unwrap(), raw);
    }

    #[test]
    fn test_odd_frequency_is_kept_but_not_interpreted() {
        for raw in [json!(104.3), json!(-1), json!("fast"), json!(u64::MAX)] {
            let s = parse(json!({ "frequency": raw.clone() }));
            assert_eq!(s.frequency(), None, "{}", raw);
            assert_eq!(s.get("frequency"), Some(&raw));
        }
    }

    #[test]
    fn test_setters_overwrite_in_place() {
        let mut s = parse(json!({ "frequency": "x", "extra": 1 }));
        s.set_frequency(99_100);
        s.set_title("Set");
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({ "frequency": 99_100, "title": "Set", "extra": 1 })
        );
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<FavoriteStation>(json!([1, 2])).is_err());
    }
}
