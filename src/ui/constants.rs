use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};

pub const CANDIDATE_CARD_WIDTH: u16 = 36;
pub const CANDIDATE_CARD_HEIGHT: u16 = 12;
pub const MAX_POPUP_MESSAGES: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct UiKey;

impl UiKey {
    pub const ESC: KeyCode = KeyCode::Esc;
    pub const CONFIRM: KeyCode = KeyCode::Enter;
    pub const NEXT_SELECTION: KeyCode = KeyCode::Down;
    pub const PREVIOUS_SELECTION: KeyCode = KeyCode::Up;
    pub const PICK_LEFT: KeyCode = KeyCode::Left;
    pub const PICK_RIGHT: KeyCode = KeyCode::Right;
    pub const PICK_FIRST: KeyCode = KeyCode::Char('1');
    pub const PICK_SECOND: KeyCode = KeyCode::Char('2');
    pub const REFRESH: KeyCode = KeyCode::Char('R');
    pub const RANKING: KeyCode = KeyCode::Char('K');
    pub const TOGGLE_RANKING_SCOPE: KeyCode = KeyCode::Char('A');
    pub const BACK: KeyCode = KeyCode::Backspace;
}

const DEFAULT_STYLE: Style = Style::new();

pub struct UiStyle;

impl UiStyle {
    pub const DEFAULT: Style = DEFAULT_STYLE;
    pub const SELECTED: Style = DEFAULT_STYLE.bg(Color::Rgb(70, 70, 86));
    pub const UNSELECTABLE: Style = DEFAULT_STYLE.fg(Color::DarkGray);
    pub const ERROR: Style = DEFAULT_STYLE.fg(Color::Red);
    pub const HEADER: Style = DEFAULT_STYLE.fg(Color::LightBlue);
    pub const HIGHLIGHT: Style = DEFAULT_STYLE.fg(Color::Rgb(118, 213, 192));
    pub const OK: Style = DEFAULT_STYLE.fg(Color::Green);
    pub const WARNING: Style = DEFAULT_STYLE.fg(Color::Yellow);
    pub const WINNER: Style = DEFAULT_STYLE
        .fg(Color::Rgb(255, 215, 0))
        .add_modifier(Modifier::BOLD);
}

pub struct UiText;

impl UiText {
    pub const OK: &'static str = "Ok";
    pub const BYE: &'static str = "Bye: this candidate advances.";
    pub const BYE_HINT: &'static str = "Pick the candidate on the left to continue.";
    pub const NO_TOURNAMENTS: &'static str = "No tournaments yet.";
    pub const NO_COMMENTS: &'static str = "No comments yet. Be the first!";
    pub const LOADING: &'static str = "Loading...";
}
