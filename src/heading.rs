use crate::error::{ComponentError, ComponentResult};

/// Heading element, h1 to h6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Rejects anything outside 1..=6
    pub fn new(level: i64) -> ComponentResult<Self> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            _ => Err(ComponentError::InvalidHeadingLevel { level }),
        }
    }

    /// Resolve an optional caller level against a default
    pub fn or_default(level: Option<i64>, default: u8) -> ComponentResult<Self> {
        Self::new(level.unwrap_or(i64::from(default)))
    }

    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl TryFrom<i64> for HeadingLevel {
    type Error = ComponentError;

    fn try_from(level: i64) -> ComponentResult<Self> {
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_levels() {
        let tags: Vec<&str> = (1..=6)
            .map(|l| HeadingLevel::new(l).unwrap().tag())
            .collect();
        assert_eq!(tags, vec!["h1", "h2", "h3", "h4", "h5", "h6"]);
    }

    #[test]
    fn test_out_of_range_levels_rejected() {
        for level in [0, 7, -1, 100] {
            assert_eq!(
                HeadingLevel::new(level),
                Err(ComponentError::InvalidHeadingLevel { level })
            );
        }
    }

    #[test]
    fn test_or_default() {
        assert_eq!(HeadingLevel::or_default(None, 2).unwrap(), HeadingLevel::H2);
        assert_eq!(HeadingLevel::or_default(Some(4), 2).unwrap(), HeadingLevel::H4);
    }
}
