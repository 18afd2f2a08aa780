use std::collections::HashMap;

/// The bag of known quantities handed to a calculator, keyed by variable name.
///
/// All values are SI. A variable counts as *missing* when it was never
/// inserted or holds NaN; `0.0` is an ordinary, present value.
///
/// # Example
/// ```
/// use rs_kinematics::calculators::Values;
///
/// let values = Values::from([("linear_velocity", 0.0), ("angular_velocity", 2.0), ("period", f64::NAN)]);
/// assert_eq!(values.get("linear_velocity"), Some(0.0));
/// assert!(!values.contains("period"));
/// assert!(!values.contains("radius"));
/// assert_eq!(values.supplied(), vec!["angular_velocity", "linear_velocity"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: HashMap<String, f64>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.entries.insert(name.into(), value)
    }

    /// Inserts `value` when it is `Some`. Form fields left blank arrive as `None`.
    pub fn insert_optional(&mut self, name: impl Into<String>, value: Option<f64>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.entries.remove(name)
    }

    /// Returns the value when present and not NaN.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied().filter(|value| !value.is_nan())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the stored value, or NaN when missing so that the result of a
    /// formula evaluated with a missing input is itself NaN.
    pub fn value(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(f64::NAN)
    }

    /// Names of the present variables, sorted.
    pub fn supplied(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, value)| !value.is_nan())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Values {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
