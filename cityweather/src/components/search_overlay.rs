use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, TextInput, TextInputProps,
    TextInputStyle, centered_rect,
};

use super::Component;
use crate::action::Action;

const PLACEHOLDER: &str = "Enter city name...";

/// Horizontal offsets cycled through while the box shakes
const SHAKE_OFFSETS: [i16; 4] = [0, -2, 0, 2];
/// Ticks each shake offset is held
const SHAKE_STEP_TICKS: u32 = 3;

pub struct SearchOverlay {
    input: TextInput,
    modal: Modal,
    was_open: bool,
}

pub struct SearchOverlayProps<'a> {
    pub input: &'a str,
    pub is_focused: bool,
    /// Empty-submission cue is running
    pub shaking: bool,
    pub tick_count: u32,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }
}

/// Column offset for the shake cue at `tick_count`
pub fn shake_offset(tick_count: u32) -> i16 {
    let step = (tick_count / SHAKE_STEP_TICKS) as usize % SHAKE_OFFSETS.len();
    SHAKE_OFFSETS[step]
}

fn shift_x(area: Rect, offset: i16, bounds: Rect) -> Rect {
    let max_x = bounds.right().saturating_sub(area.width);
    let x = (area.x as i32 + offset as i32).clamp(bounds.x as i32, max_x as i32) as u16;
    Rect { x, ..area }
}

impl Component<Action> for SearchOverlay {
    type Props<'a> = SearchOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchClose],
            KeyCode::Enter => return vec![(props.on_submit)(props.input.to_string())],
            _ => {}
        }

        // All other keys go to the input
        let input_props = TextInputProps {
            value: props.input,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 8 {
            return;
        }

        let SearchOverlay { input, modal, .. } = self;
        let mut modal_area = centered_rect(50, 7, area);
        if props.shaking {
            modal_area = shift_x(modal_area, shake_offset(props.tick_count), area);
        }
        let input_bg = if props.shaking {
            Color::Rgb(120, 40, 40)
        } else {
            Color::Rgb(50, 50, 60)
        };

        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(3), // Input
                Constraint::Length(1), // Hint
            ])
            .split(content_area);

            let input_props = TextInputProps {
                value: props.input,
                placeholder: PLACEHOLDER,
                is_focused: props.is_focused,
                style: TextInputStyle {
                    base: BaseStyle {
                        border: None,
                        padding: Padding::all(1),
                        bg: Some(input_bg),
                        fg: None,
                    },
                    placeholder_style: None,
                    cursor_style: None,
                },
                on_change: props.on_change,
                on_submit: props.on_submit,
                on_cursor_move: Some(|_| Action::Render),
            };
            input.render(frame, chunks[0], input_props);

            let hint = Line::styled(
                "Enter to search, Esc to cancel",
                Style::default().fg(Color::DarkGray),
            )
            .centered();
            frame.render_widget(Paragraph::new(hint), chunks[1]);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::default(),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::SearchClose,
                render_content: &mut render_content,
            },
        );
    }
}
