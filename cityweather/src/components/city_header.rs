use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

/// FIGlet city name over a one-line subtitle
pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    pub name: &'a str,
    /// Country, or a status line while nothing is loaded
    pub subtitle: &'a str,
    pub temperature: Option<f32>,
    /// Sweep a highlight across the name (loading indicator)
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Rows below the FIGlet name: spacer + subtitle.
pub const HEADER_OVERHEAD: u16 = 2;

type Rgb = (u8, u8, u8);

/// (exclusive upper bound °C, left color, right color), coldest first
const TEMP_BANDS: [(f32, Rgb, Rgb); 5] = [
    (0.0, (150, 200, 255), (200, 230, 255)),
    (15.0, (100, 180, 255), (150, 220, 200)),
    (25.0, (100, 200, 150), (255, 220, 100)),
    (35.0, (255, 180, 80), (255, 120, 80)),
    (f32::INFINITY, (255, 100, 80), (255, 60, 60)),
];

const NO_DATA: (Rgb, Rgb) = ((180, 180, 180), (220, 220, 220));

/// How far the sweep pulls toward white at its peak
const SWEEP_STRENGTH: f32 = 0.6;

fn rgb((r, g, b): Rgb) -> ArtColor {
    ArtColor::rgb(r, g, b)
}

/// Gradient endpoints for a temperature; gray when there is none
pub(crate) fn gradient_colors(temp: Option<f32>) -> (ArtColor, ArtColor) {
    let (left, right) = temp
        .and_then(|t| {
            TEMP_BANDS
                .iter()
                .find(|(upper, _, _)| t < *upper)
                .map(|&(_, left, right)| (left, right))
        })
        .unwrap_or(NO_DATA);
    (rgb(left), rgb(right))
}

/// Position (0.0..1.0) of the sweep highlight at `tick_count`
fn sweep_position(tick_count: u32) -> f32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % cycle) as f32 / cycle as f32
}

fn name_fill(colors: (ArtColor, ArtColor), sweep: Option<f32>) -> Fill {
    let (left, right) = colors;
    match sweep {
        Some(pos) if pos > 0.0 && pos < 1.0 => {
            let glow = left
                .interpolate(right, pos)
                .interpolate(ArtColor::rgb(255, 255, 255), SWEEP_STRENGTH);
            let stops = vec![
                ColorStop::new(0.0, left),
                ColorStop::new(pos, glow),
                ColorStop::new(1.0, right),
            ];
            Fill::Linear(LinearGradient::new(5.0, stops))
        }
        _ => Fill::Linear(LinearGradient::horizontal(left, right)),
    }
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [name_area, _, subtitle_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let sweep = props
            .is_animating
            .then(|| sweep_position(props.tick_count));
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(name_fill(gradient_colors(props.temperature), sweep));
        frame.render_widget(ArtBox::new(&renderer, props.name), name_area);

        let subtitle =
            Line::styled(props.subtitle.to_string(), Style::default().fg(Color::DarkGray))
                .centered();
        frame.render_widget(Paragraph::new(subtitle), subtitle_area);
    }
}
