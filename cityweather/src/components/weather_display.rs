use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main weather display component
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') | KeyCode::Char('s') => Some(Action::SearchOpen),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('x') if props.state.error.is_some() => Some(Action::ErrorDismiss),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Error banner
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        if let Some(message) = props.state.error_message() {
            render_banner(frame, chunks[0], message);
        }

        let mut body = WeatherBody;
        body.render(frame, chunks[1], WeatherBodyProps { state: props.state });

        let mut hints = vec![
            StatusBarHint::new("/", "search"),
            StatusBarHint::new("r", "refresh"),
        ];
        if props.state.error.is_some() {
            hints.push(StatusBarHint::new("x", "dismiss"));
        }
        hints.push(StatusBarHint::new("q", "quit"));

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_banner(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::raw(format!("{ERROR_ICON} ")),
        Span::styled(message.to_string(), Style::default().bold()),
    ])
    .centered();
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::White).bg(Color::Rgb(180, 50, 50))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FETCH_FAILED_MESSAGE, TransientError};
    use tui_dispatch::testing::*;

    fn with_error() -> AppState {
        AppState {
            error: Some(TransientError {
                id: 1,
                message: FETCH_FAILED_MESSAGE.into(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_handle_event_search() {
        let mut component = WeatherDisplay;
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("/")), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::SearchOpen);
    }

    #[test]
    fn test_handle_event_dismiss_only_with_error() {
        let mut component = WeatherDisplay;

        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };
        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("x")), props)
            .into_iter()
            .collect();
        actions.assert_empty();

        let state = with_error();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };
        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("x")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::ErrorDismiss);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = WeatherDisplay;
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_error_banner() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay;
        let state = with_error();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains(FETCH_FAILED_MESSAGE));
        assert!(output.contains("dismiss"));
    }
}
