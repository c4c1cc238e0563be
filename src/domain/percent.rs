use serde::{Deserialize, Deserializer, Serialize};

/// Integer occupancy percentage, clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const fn new(val: u8) -> Self {
        let v = if val > 100 { 100 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The collector already bounds its output, but the feed is external
        // input and gets clamped rather than rejected.
        let raw = u8::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_above_hundred() {
        assert_eq!(Percent::new(101).value(), 100);
        assert_eq!(Percent::new(255).value(), 100);
        assert_eq!(Percent::new(55).value(), 55);
    }

    #[test]
    fn deserializes_plain_number() {
        let p: Percent = serde_json::from_str("42").unwrap();
        assert_eq!(p.value(), 42);
        let p: Percent = serde_json::from_str("140").unwrap();
        assert_eq!(p.value(), 100);
    }
}
