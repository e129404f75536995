use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde::de;

use crate::error::LayoutError;

/// A `width:height` proportion that every tile in the grid must keep.
///
/// Parsed from strings of the form `"16:9"`; both parts must be positive
/// integers. Serialized back to the same string form.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    pub const SIXTEEN_NINE: AspectRatio = AspectRatio {
        width: 16,
        height: 9,
    };
    pub const FOUR_THREE: AspectRatio = AspectRatio {
        width: 4,
        height: 3,
    };
    pub const TWO_THREE: AspectRatio = AspectRatio {
        width: 2,
        height: 3,
    };
    pub const TWO_ONE: AspectRatio = AspectRatio {
        width: 2,
        height: 1,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::invalid_aspect_ratio(
                format!("{width}:{height}"),
                "both parts must be greater than zero",
            ));
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SIXTEEN_NINE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width, height)) = s.split_once(':') else {
            return Err(LayoutError::invalid_aspect_ratio(
                s,
                "missing ':' separator",
            ));
        };

        let width = width.trim().parse::<u32>().map_err(|_| {
            LayoutError::invalid_aspect_ratio(s, "width part is not a positive integer")
        })?;

        let height = height.trim().parse::<u32>().map_err(|_| {
            LayoutError::invalid_aspect_ratio(s, "height part is not a positive integer")
        })?;

        Self::new(width, height)
    }
}

impl Serialize for AspectRatio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for AspectRatio {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "AspectRatio".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "pattern": "^[0-9]+:[0-9]+$"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ratios() {
        assert_eq!(
            "16:9".parse::<AspectRatio>().unwrap(),
            AspectRatio::SIXTEEN_NINE
        );
        assert_eq!(
            "4:3".parse::<AspectRatio>().unwrap(),
            AspectRatio::FOUR_THREE
        );
        assert_eq!(
            " 2 : 3 ".parse::<AspectRatio>().unwrap(),
            AspectRatio::TWO_THREE
        );
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = "16".parse::<AspectRatio>().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidAspectRatio { .. }));
    }

    #[test]
    fn test_parse_non_numeric_parts() {
        assert!("a:b".parse::<AspectRatio>().is_err());
        assert!("16:".parse::<AspectRatio>().is_err());
        assert!(":9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert!("0:9".parse::<AspectRatio>().is_err());
        assert!("16:0".parse::<AspectRatio>().is_err());
        assert!("-16:9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(AspectRatio::new(0, 1).is_err());
        assert!(AspectRatio::new(1, 0).is_err());
        assert!(AspectRatio::new(16, 9).is_ok());
    }

    #[test]
    fn test_ratio_value() {
        assert!((AspectRatio::SIXTEEN_NINE.ratio() - 16.0 / 9.0).abs() < f64::EPSILON);
        assert!((AspectRatio::TWO_ONE.ratio() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for ratio in [
            AspectRatio::SIXTEEN_NINE,
            AspectRatio::FOUR_THREE,
            AspectRatio::TWO_THREE,
            AspectRatio::TWO_ONE,
        ] {
            assert_eq!(ratio.to_string().parse::<AspectRatio>().unwrap(), ratio);
        }
    }

    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&AspectRatio::SIXTEEN_NINE).unwrap();
        assert_eq!(json, r#""16:9""#);

        let parsed: AspectRatio = serde_json::from_str(r#""4:3""#).unwrap();
        assert_eq!(parsed, AspectRatio::FOUR_THREE);

        assert!(serde_json::from_str::<AspectRatio>(r#""16""#).is_err());
    }
}
