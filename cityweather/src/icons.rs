//! Condition icons: text lookup, layered ASCII art, and emoji fallback
//!
//! weatherapi.com reports conditions as free text ("Patchy light drizzle",
//! "Moderate or heavy rain with thunder"). The lookup matches keywords in
//! priority order so the most severe part of the phrase wins; anything
//! unrecognised gets [`Icon::Unknown`].

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Rows of every icon's art.
pub const ICON_HEIGHT: u16 = 5;

// ============================================================================
// Lookup
// ============================================================================

/// Icon categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Clear,
    PartlyCloudy,
    Cloudy,
    Haze,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

/// Checked top to bottom; first keyword found in the condition text wins.
const KEYWORDS: &[(&str, Icon)] = &[
    ("thunder", Icon::Thunderstorm),
    ("drizzle", Icon::Drizzle),
    ("snow", Icon::Snow),
    ("sleet", Icon::Snow),
    ("blizzard", Icon::Snow),
    ("ice", Icon::Snow),
    ("rain", Icon::Rain),
    ("shower", Icon::Rain),
    ("fog", Icon::Haze),
    ("mist", Icon::Haze),
    ("haze", Icon::Haze),
    ("partly", Icon::PartlyCloudy),
    ("cloud", Icon::Cloudy),
    ("overcast", Icon::Cloudy),
    ("clear", Icon::Clear),
    ("sunny", Icon::Clear),
];

impl Icon {
    pub fn from_condition(text: &str) -> Self {
        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Unknown)
    }

    /// Emoji representation for when the art doesn't fit
    pub fn emoji(self) -> &'static str {
        match self {
            Icon::Clear => "\u{2600}\u{fe0f}",
            Icon::PartlyCloudy => "\u{26c5}",
            Icon::Cloudy => "\u{2601}\u{fe0f}",
            Icon::Haze => "\u{1f32b}\u{fe0f}",
            Icon::Drizzle => "\u{1f326}\u{fe0f}",
            Icon::Rain => "\u{1f327}\u{fe0f}",
            Icon::Snow => "\u{2744}\u{fe0f}",
            Icon::Thunderstorm => "\u{26c8}\u{fe0f}",
            Icon::Unknown => "\u{1f321}\u{fe0f}",
        }
    }

    /// Colored art for this icon
    pub fn art(self) -> Text<'static> {
        composite_layers(&layers(self))
    }
}

// ============================================================================
// Art - one grid per layer, spaces are transparent
// ============================================================================

mod art {
    pub const SUN: &[&str] = &[
        r"    \   /    ",
        r"     .-.     ",
        r"  - (   ) -  ",
        r"     `-'     ",
        r"    /   \    ",
    ];

    pub const SUN_BEHIND: &[&str] = &[
        r"   \  /      ",
        r" _ /''       ",
        r"   \_        ",
        r"   /         ",
        r"             ",
    ];

    pub const CLOUD_LOW: &[&str] = &[
        r"             ",
        r"      .-.    ",
        r"     (   ).  ",
        r"    (___(__) ",
        r"             ",
    ];

    pub const CLOUD_BACK: &[&str] = &[
        r"     .--.    ",
        r"  .-(    ).  ",
        r" (___.__)__) ",
        r"             ",
        r"             ",
    ];

    pub const CLOUD_FRONT: &[&str] = &[
        r"             ",
        r"             ",
        r"      .--.   ",
        r"   .-(    ). ",
        r"  (___.__)__)",
    ];

    pub const CLOUD_HIGH: &[&str] = &[
        r"     .-.     ",
        r"    (   ).   ",
        r"   (___(__)  ",
        r"             ",
        r"             ",
    ];

    pub const HAZE: &[&str] = &[
        r"             ",
        r" _ - _ - _ - ",
        r"  _ - _ - _  ",
        r" _ - _ - _ - ",
        r"             ",
    ];

    pub const DRIZZLE: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"    ,  ,  ,  ",
        r"     ,  ,    ",
    ];

    pub const RAIN: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"   ' ' ' '   ",
        r"  ' ' ' '    ",
    ];

    pub const SNOW: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"   *  *  *   ",
        r"    *  *  *  ",
    ];

    pub const BOLT: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"     _/      ",
        r"      /      ",
    ];

    pub const UNKNOWN: &[&str] = &[
        r"    .-.      ",
        r"     __)     ",
        r"    (        ",
        r"     `-'     ",
        r"      *      ",
    ];
}

/// A single art layer with its content and color
struct IconLayer {
    lines: &'static [&'static str],
    color: Color,
}

fn layers(icon: Icon) -> Vec<IconLayer> {
    let cloud_gray = Color::Rgb(160, 160, 175);
    match icon {
        Icon::Clear => vec![IconLayer {
            lines: art::SUN,
            color: Color::Yellow,
        }],
        Icon::PartlyCloudy => vec![
            IconLayer {
                lines: art::SUN_BEHIND,
                color: Color::Yellow,
            },
            IconLayer {
                lines: art::CLOUD_LOW,
                color: Color::Rgb(200, 200, 210),
            },
        ],
        Icon::Cloudy => vec![
            IconLayer {
                lines: art::CLOUD_BACK,
                color: Color::Rgb(120, 120, 140),
            },
            IconLayer {
                lines: art::CLOUD_FRONT,
                color: Color::Rgb(170, 170, 185),
            },
        ],
        Icon::Haze => vec![IconLayer {
            lines: art::HAZE,
            color: Color::Rgb(180, 180, 190),
        }],
        Icon::Drizzle => vec![
            IconLayer {
                lines: art::CLOUD_HIGH,
                color: cloud_gray,
            },
            IconLayer {
                lines: art::DRIZZLE,
                color: Color::Rgb(130, 170, 200),
            },
        ],
        Icon::Rain => vec![
            IconLayer {
                lines: art::CLOUD_HIGH,
                color: cloud_gray,
            },
            IconLayer {
                lines: art::RAIN,
                color: Color::Rgb(80, 140, 200),
            },
        ],
        Icon::Snow => vec![
            IconLayer {
                lines: art::CLOUD_HIGH,
                color: cloud_gray,
            },
            IconLayer {
                lines: art::SNOW,
                color: Color::Rgb(200, 220, 255),
            },
        ],
        Icon::Thunderstorm => vec![
            IconLayer {
                lines: art::CLOUD_HIGH,
                color: Color::Rgb(120, 120, 140),
            },
            IconLayer {
                lines: art::BOLT,
                color: Color::Yellow,
            },
        ],
        Icon::Unknown => vec![IconLayer {
            lines: art::UNKNOWN,
            color: Color::Gray,
        }],
    }
}

/// Composite layers into Text; later layers are drawn on top
fn composite_layers(layers: &[IconLayer]) -> Text<'static> {
    let rows = layers.iter().map(|l| l.lines.len()).max().unwrap_or(0);
    let width = layers
        .iter()
        .flat_map(|l| l.lines.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut result = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let top = layers.iter().rev().find_map(|layer| {
                let ch = layer.lines.get(row)?.chars().nth(col)?;
                (ch != ' ').then_some((ch, layer.color))
            });
            let (ch, color) = top.unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        result.push(Line::from(spans));
    }

    Text::from(result)
}
