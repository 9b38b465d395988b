use super::level::LogLevel;
use clap::ValueEnum;
use std::fmt;

const DARK_TEXT: Rgb = Rgb(0x1f, 0x1f, 0x1f);
const LIGHT_TEXT: Rgb = Rgb(0xdd, 0xdd, 0xdd);

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Visual attributes the host applies for one style key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub background: Rgb,
    pub foreground: Rgb,
    pub bold: bool,
    /// Marker color for the scrollbar overview, only set on thin styles
    pub ruler: Option<Rgb>,
}

/// Colors a filter rule can be painted with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum FilterColor {
    Yellow,
    Red,
    #[value(name = "darkred")]
    DarkRed,
    Pink,
    #[default]
    Blue,
    Black,
    Orange,
    White,
    Green,
    Purple,
}

impl FilterColor {
    pub const ALL: [FilterColor; 10] = [
        FilterColor::Yellow,
        FilterColor::Red,
        FilterColor::DarkRed,
        FilterColor::Pink,
        FilterColor::Blue,
        FilterColor::Black,
        FilterColor::Orange,
        FilterColor::White,
        FilterColor::Green,
        FilterColor::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FilterColor::Yellow => "yellow",
            FilterColor::Red => "red",
            FilterColor::DarkRed => "darkred",
            FilterColor::Pink => "pink",
            FilterColor::Blue => "blue",
            FilterColor::Black => "black",
            FilterColor::Orange => "orange",
            FilterColor::White => "white",
            FilterColor::Green => "green",
            FilterColor::Purple => "purple",
        }
    }

    /// Key of the style used for the rest of a highlighted line
    pub fn thin_key(&self) -> String {
        format!("{}Bg", self.name())
    }

    /// Key of the style used for the matched text itself
    pub fn bold_key(&self) -> String {
        format!("{}BoldBg", self.name())
    }

    pub fn icon(&self) -> String {
        format!("square_{}", self.name())
    }

    /// Background pair as (thin, bold)
    fn backgrounds(&self) -> (Rgb, Rgb) {
        match self {
            FilterColor::Yellow => (Rgb(0xff, 0xdd, 0x57), Rgb(0xe2, 0xc0, 0x38)),
            FilterColor::Red => (Rgb(0xff, 0x7d, 0x7d), Rgb(0xf5, 0x67, 0x67)),
            FilterColor::DarkRed => (Rgb(0xad, 0x10, 0x10), Rgb(0x77, 0x00, 0x00)),
            FilterColor::Pink => (Rgb(0xff, 0x8e, 0xe3), Rgb(0xfd, 0x7b, 0xdd)),
            FilterColor::Blue => (Rgb(0x9e, 0x9d, 0xff), Rgb(0x8d, 0x8b, 0xff)),
            FilterColor::Black => (Rgb(0x18, 0x18, 0x18), Rgb(0x11, 0x11, 0x11)),
            FilterColor::Orange => (Rgb(0xe9, 0xa8, 0x5e), Rgb(0xda, 0x8e, 0x37)),
            FilterColor::White => (Rgb(0xec, 0xec, 0xec), Rgb(0xd3, 0xd3, 0xd3)),
            FilterColor::Green => (Rgb(0xbc, 0xff, 0x7d), Rgb(0x96, 0xdf, 0x52)),
            FilterColor::Purple => (Rgb(0xc6, 0x83, 0xfd), Rgb(0xa7, 0x61, 0xe0)),
        }
    }

    fn foreground(&self) -> Rgb {
        match self {
            FilterColor::DarkRed | FilterColor::Black => LIGHT_TEXT,
            _ => DARK_TEXT,
        }
    }
}

impl fmt::Display for FilterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every style key the engine can emit, as a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightStyle {
    Thin(FilterColor),
    Bold(FilterColor),
    Level(LogLevel),
}

impl HighlightStyle {
    /// Resolve an opaque color key; unknown keys have no style
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(level) = LogLevel::ALL.into_iter().find(|l| l.color_key() == key) {
            return Some(HighlightStyle::Level(level));
        }
        FilterColor::ALL.into_iter().find_map(|color| {
            if color.thin_key() == key {
                Some(HighlightStyle::Thin(color))
            } else if color.bold_key() == key {
                Some(HighlightStyle::Bold(color))
            } else {
                None
            }
        })
    }

    pub fn key(&self) -> String {
        match self {
            HighlightStyle::Thin(color) => color.thin_key(),
            HighlightStyle::Bold(color) => color.bold_key(),
            HighlightStyle::Level(level) => level.color_key().to_string(),
        }
    }

    pub fn spec(&self) -> StyleSpec {
        match self {
            HighlightStyle::Thin(color) => {
                let (thin, bold) = color.backgrounds();
                StyleSpec {
                    background: thin,
                    foreground: color.foreground(),
                    bold: false,
                    ruler: Some(bold),
                }
            }
            HighlightStyle::Bold(color) => StyleSpec {
                background: color.backgrounds().1,
                foreground: color.foreground(),
                bold: true,
                ruler: None,
            },
            HighlightStyle::Level(level) => StyleSpec {
                background: level.background(),
                foreground: DARK_TEXT,
                bold: true,
                ruler: None,
            },
        }
    }
}
