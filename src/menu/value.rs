use std::fmt;

use crate::ui::color::ON_OFF_LABELS;

/// A closed variant type for everything a menu entry can bind to.
///
/// Equality is per-tag; comparing values of different tags is always `false`
/// (derived `PartialEq` gives us that by construction), which turns the
/// type-erased cast failures of a `dyn Any` approach into ordinary branches.
#[derive(Clone, Debug, PartialEq)]
pub enum TaggedValue {
    Int(i32),
    UInt(u32),
    Float(f32),
    Bool(bool),
    Text(String),
    /// Packed 0xRRGGBB color swatch.
    Color(u32),
}

impl TaggedValue {
    /// Tag name for diagnostics.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::UInt(_) => "UInt",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::Text(_) => "Text",
            Self::Color(_) => "Color",
        }
    }

    #[inline(always)]
    pub const fn same_tag(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Int(_), Self::Int(_))
                | (Self::UInt(_), Self::UInt(_))
                | (Self::Float(_), Self::Float(_))
                | (Self::Bool(_), Self::Bool(_))
                | (Self::Text(_), Self::Text(_))
                | (Self::Color(_), Self::Color(_))
        )
    }

    /// Generated display label for tags that have a canonical stringification.
    ///
    /// `Color` has none (swatches carry explicit labels); callers that
    /// auto-generate labels treat `None` as a contract violation.
    pub fn default_label(&self, suffix: &str) -> Option<String> {
        let base = match self {
            Self::Text(s) => s.clone(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Bool(v) => ON_OFF_LABELS[usize::from(*v)].to_string(),
            Self::Color(_) => return None,
        };
        Some(base + suffix)
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => f.write_str(ON_OFF_LABELS[usize::from(*v)]),
            Self::Text(s) => f.write_str(s),
            Self::Color(c) => write!(f, "0x{c:06X}"),
        }
    }
}

impl From<i32> for TaggedValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for TaggedValue {
    fn from(v: u32) -> Self {
        Self::UInt(v)
    }
}

impl From<f32> for TaggedValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for TaggedValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for TaggedValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for TaggedValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::TaggedValue;

    #[test]
    fn cross_tag_comparison_is_always_false() {
        assert_ne!(TaggedValue::Int(1), TaggedValue::UInt(1));
        assert_ne!(TaggedValue::Int(0), TaggedValue::Bool(false));
        assert_ne!(TaggedValue::Color(0xFF0000), TaggedValue::UInt(0xFF0000));
    }

    #[test]
    fn same_tag_comparison_uses_value() {
        assert_eq!(TaggedValue::Int(7), TaggedValue::Int(7));
        assert_ne!(TaggedValue::Int(7), TaggedValue::Int(8));
        assert_eq!(
            TaggedValue::Text("abc".into()),
            TaggedValue::Text("abc".into())
        );
    }

    #[test]
    fn default_labels_per_tag() {
        assert_eq!(
            TaggedValue::Int(5).default_label("%").as_deref(),
            Some("5%")
        );
        assert_eq!(
            TaggedValue::Bool(true).default_label("").as_deref(),
            Some("On")
        );
        assert_eq!(
            TaggedValue::Bool(false).default_label("").as_deref(),
            Some("Off")
        );
        assert_eq!(
            TaggedValue::Text("Next".into()).default_label("").as_deref(),
            Some("Next")
        );
        assert!(TaggedValue::Color(0x112233).default_label("").is_none());
    }

    #[test]
    fn display_formats_colors_as_hex() {
        assert_eq!(TaggedValue::Color(0xAB01FF).to_string(), "0xAB01FF");
    }
}
