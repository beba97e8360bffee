use strum::{FromRepr, IntoStaticStr};

/// Result of a single shot. The discriminant is the wire value used in
/// both the stored JSON and the CSV exchange format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum Shot {
    #[default]
    #[strum(serialize = "MISS")]
    Miss = 0,
    #[strum(serialize = "HIT")]
    Hit = 1,
}

impl Shot {
    /// Accepts only 0 and 1; anything else (including negatives) is `None`.
    pub fn from_value(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Shot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(Shot::from_value(0), Some(Shot::Miss));
        assert_eq!(Shot::from_value(1), Some(Shot::Hit));
        assert_eq!(Shot::from_value(2), None);
        assert_eq!(Shot::from_value(-1), None);
        assert_eq!(Shot::from_value(257), None);
    }

    #[test]
    fn test_value_and_name() {
        assert_eq!(Shot::Hit.value(), 1);
        assert_eq!(Shot::Miss.value(), 0);
        assert_eq!(Shot::Hit.to_string(), "HIT");
        assert!(Shot::Hit.is_hit());
        assert!(!Shot::default().is_hit());
    }
}
