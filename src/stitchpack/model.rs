use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Low byte of a stitch command. Higher bits carry thread/needle data and are
/// preserved as-is in [`Stitch::command`].
pub const COMMAND_MASK: i32 = 0xFF;

/// One needle movement, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stitch {
    pub x: i32,
    pub y: i32,
    /// Raw command integer, passed through without interpretation
    pub command: i32,
}

impl Stitch {
    pub fn new(x: i32, y: i32, command: i32) -> Self {
        Self { x, y, command }
    }

    /// Named classification of the command's low byte, if it is a known one.
    pub fn kind(&self) -> Option<StitchCommand> {
        StitchCommand::from_raw(self.command)
    }
}

impl From<(i32, i32, i32)> for Stitch {
    fn from((x, y, command): (i32, i32, i32)) -> Self {
        Self { x, y, command }
    }
}

/// The commonly used embroidery instructions.
///
/// This is for reporting only. Containers store whatever integer the
/// embroidery library produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StitchCommand {
    Stitch,
    Jump,
    Trim,
    Stop,
    End,
    ColorChange,
    SequinMode,
    SequinEject,
    NeedleSet,
    Slow,
    Fast,
}

impl StitchCommand {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw & COMMAND_MASK {
            0 => Some(Self::Stitch),
            1 => Some(Self::Jump),
            2 => Some(Self::Trim),
            3 => Some(Self::Stop),
            4 => Some(Self::End),
            5 => Some(Self::ColorChange),
            6 => Some(Self::SequinMode),
            7 => Some(Self::SequinEject),
            9 => Some(Self::NeedleSet),
            0x0B => Some(Self::Slow),
            0x0C => Some(Self::Fast),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stitch => "stitch",
            Self::Jump => "jump",
            Self::Trim => "trim",
            Self::Stop => "stop",
            Self::End => "end",
            Self::ColorChange => "color-change",
            Self::SequinMode => "sequin-mode",
            Self::SequinEject => "sequin-eject",
            Self::NeedleSet => "needle-set",
            Self::Slow => "slow",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for StitchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// RGB color
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Thread metadata. Every field is optional; absence is `None`, never an
/// empty string. Threads are positional within a pattern.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    /// Usually the shade name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    /// Non-finite weights have no JSON form and are skipped like absent ones
    #[serde(default, skip_serializing_if = "is_absent_weight")]
    pub weight: Option<f64>,
}

fn is_absent_weight(weight: &Option<f64>) -> bool {
    !weight.is_some_and(f64::is_finite)
}

impl Thread {
    pub fn with_color(hex_color: impl Into<String>) -> Self {
        Self {
            hex_color: Some(hex_color.into()),
            ..Default::default()
        }
    }

    /// Parses `hex_color` as `#rrggbb` or `rrggbb`.
    pub fn rgb(&self) -> Option<Color> {
        let hex = self.hex_color.as_deref()?;
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Color {
            r: (value >> 16 & 0xFF) as u8,
            g: (value >> 8 & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        })
    }
}

/// Axis-aligned extent of a pattern's stitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }
}

/// Stitches plus threads: everything a container carries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pattern {
    pub stitches: Vec<Stitch>,
    pub threads: Vec<Thread>,
}

impl Pattern {
    pub fn new(stitches: Vec<Stitch>, threads: Vec<Thread>) -> Self {
        Self { stitches, threads }
    }

    /// `None` for a pattern without stitches.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.stitches.first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for stitch in &self.stitches[1..] {
            bounds.min_x = bounds.min_x.min(stitch.x);
            bounds.min_y = bounds.min_y.min(stitch.y);
            bounds.max_x = bounds.max_x.max(stitch.x);
            bounds.max_y = bounds.max_y.max(stitch.y);
        }
        Some(bounds)
    }

    /// Counts stitches per command. Unknown commands are keyed by `None`.
    pub fn command_histogram(&self) -> BTreeMap<Option<StitchCommand>, usize> {
        let mut histogram = BTreeMap::new();
        for stitch in &self.stitches {
            *histogram.entry(stitch.kind()).or_insert(0) += 1;
        }
        histogram
    }
}
