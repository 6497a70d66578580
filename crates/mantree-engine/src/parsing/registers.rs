use std::collections::HashMap;

/// Register holding the fill mode: 1 while filling, 0 in no-fill mode.
pub const FILL_MODE: &str = ".u";
/// Register mirroring the inter-paragraph spacing, in em.
pub const PARAGRAPH_DISTANCE: &str = "PD";

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterValue {
    Number(i64),
    Text(String),
}

impl RegisterValue {
    /// The value as it appears when interpolated with `\n`.
    pub fn interpolate(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Numeric reading for conditions; text registers are parsed when they can be.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n as f64),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Named number registers set with `.nr` or by the interpreter itself.
#[derive(Debug, Clone, Default)]
pub struct Registers {
    values: HashMap<String, RegisterValue>,
}

impl Registers {
    pub fn get(&self, name: &str) -> Option<&RegisterValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: RegisterValue) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Interpolated value, or the empty string for an unset register.
    pub fn interpolate(&self, name: &str) -> String {
        self.get(name)
            .map(RegisterValue::interpolate)
            .unwrap_or_default()
    }
}
