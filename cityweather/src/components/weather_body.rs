use artbox::{
    Alignment as ArtAlignment, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::city_header::{HEADER_OVERHEAD, gradient_colors};
use super::{Component, ERROR_ICON, CityHeader, CityHeaderProps};
use crate::action::Action;
use crate::icons::{ICON_HEIGHT, Icon};
use crate::state::{AppState, LoadState, WeatherSnapshot, format_celsius};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Fixed rows: blank + blank + condition + two detail rows + stale note.
const LAYOUT_FIXED: u16 = 6;

/// Text cap tiers: (header_cap, temp_cap).
/// terminus(6), miniwi(4), plain(1); header caps include HEADER_OVERHEAD.
const TEXT_TIERS: [(u16, u16); 3] = [
    (6 + HEADER_OVERHEAD, 6),
    (4 + HEADER_OVERHEAD, 4),
    (1 + HEADER_OVERHEAD, 1),
];

struct LayoutSizing {
    /// Whether the ASCII icon fits; otherwise an emoji takes one row
    art: bool,
    icon_h: u16,
    header_cap: u16,
    temp_cap: u16,
}

/// Fit the icon art by progressively shrinking text caps.
/// Only falls to emoji when the art doesn't fit even with plain text.
fn compute_layout(area_height: u16) -> LayoutSizing {
    for &(hcap, tcap) in &TEXT_TIERS {
        let budget = area_height.saturating_sub(hcap + tcap + LAYOUT_FIXED);
        if budget >= ICON_HEIGHT {
            return LayoutSizing {
                art: true,
                icon_h: ICON_HEIGHT,
                header_cap: hcap,
                temp_cap: tcap,
            };
        }
    }
    let (hcap, tcap) = TEXT_TIERS[0];
    LayoutSizing {
        art: false,
        icon_h: 1,
        header_cap: hcap,
        temp_cap: tcap,
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let sizing = compute_layout(area.height);

        match WeatherView::from_state(props.state) {
            WeatherView::Ready { snapshot, stale } => {
                render_ready(frame, area, props.state, snapshot, stale, &sizing);
            }
            WeatherView::Loading => {
                render_placeholder(frame, area, props.state, &sizing, "Loading...");
            }
            WeatherView::Empty => render_placeholder_hint(frame, area, props.state, &sizing),
            WeatherView::Failed => render_failed(frame, area),
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let name = state.header_name();
    let subtitle = match (&state.load, &state.snapshot) {
        (LoadState::Loading, _) => "Fetching current conditions".to_string(),
        (_, Some(snapshot)) => snapshot.country.clone(),
        (_, None) => String::new(),
    };
    let temperature = match state.load {
        LoadState::Loading => None,
        _ => state.snapshot.as_ref().map(|s| s.temp_c),
    };

    let mut header = CityHeader;
    header.render(
        frame,
        area,
        CityHeaderProps {
            name: &name,
            subtitle: &subtitle,
            temperature,
            is_animating: state.loading_anim_active(),
            tick_count: state.tick_count,
        },
    );
}

fn make_layout(area: Rect, sizing: &LayoutSizing) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(sizing.header_cap),
        Constraint::Length(1),
        Constraint::Length(sizing.icon_h),
        Constraint::Length(1),
        Constraint::Max(sizing.temp_cap),
        Constraint::Length(1), // condition
        Constraint::Length(1), // feels like / humidity
        Constraint::Length(1), // wind / visibility
        Constraint::Length(1), // stale note
    ])
    .flex(Flex::Center)
    .split(area)
}

/// "Feels Like 33.0°C   Humidity 55%" and "Wind 12 km/h   Visibility 10 km"
pub fn detail_lines(snapshot: &WeatherSnapshot) -> [String; 2] {
    [
        format!(
            "Feels Like {}   Humidity {}%",
            format_celsius(snapshot.feelslike_c),
            snapshot.humidity
        ),
        format!(
            "Wind {} km/h   Visibility {} km",
            snapshot.wind_kph, snapshot.vis_km
        ),
    ]
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &WeatherSnapshot,
    stale: bool,
    sizing: &LayoutSizing,
) {
    let chunks = make_layout(area, sizing);

    render_header(frame, chunks[0], state);

    let icon = Icon::from_condition(&snapshot.condition);
    if sizing.art {
        frame.render_widget(
            Paragraph::new(icon.art()).alignment(Alignment::Center),
            chunks[2],
        );
    } else {
        frame.render_widget(Paragraph::new(Line::from(icon.emoji()).centered()), chunks[2]);
    }

    let temp_text = format_celsius(snapshot.temp_c);
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_fill(snapshot.temp_c));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[4]);

    let condition = Line::from(vec![Span::styled(
        snapshot.condition.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[5]);

    let [first, second] = detail_lines(snapshot);
    for (text, chunk) in [(first, chunks[6]), (second, chunks[7])] {
        let line = Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))).centered();
        frame.render_widget(Paragraph::new(line), chunk);
    }

    if stale {
        let note = Line::from(Span::styled(
            "Showing last known conditions",
            Style::default().fg(Color::Rgb(200, 150, 100)).italic(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(note), chunks[8]);
    }
}

fn render_placeholder(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    sizing: &LayoutSizing,
    message: &str,
) {
    let chunks = make_layout(area, sizing);
    render_header(frame, chunks[0], state);

    let msg = Line::from(vec![Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[5]);
}

fn render_placeholder_hint(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    sizing: &LayoutSizing,
) {
    let chunks = make_layout(area, sizing);
    render_header(frame, chunks[0], state);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[5]);
}

/// Errored with nothing to fall back on
fn render_failed(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // label
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "No weather to show",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("/", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}

// ============================================================================
// Helpers
// ============================================================================

/// What the body shows; at most one of loading indicator and snapshot.
enum WeatherView<'a> {
    Ready {
        snapshot: &'a WeatherSnapshot,
        stale: bool,
    },
    Loading,
    Empty,
    Failed,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match (&state.load, &state.snapshot) {
            (LoadState::Loading, _) => WeatherView::Loading,
            (_, Some(snapshot)) => WeatherView::Ready {
                snapshot,
                stale: state.is_stale(),
            },
            (LoadState::Idle, None) => WeatherView::Empty,
            (LoadState::Loaded | LoadState::Errored, None) => WeatherView::Failed,
        }
    }
}

fn temperature_fill(celsius: f32) -> Fill {
    let (start, end) = gradient_colors(Some(celsius));
    Fill::Linear(LinearGradient::horizontal(start, end))
}
