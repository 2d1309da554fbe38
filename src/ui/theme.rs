use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0x71, 0x59, 0xc1);

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::White)
    .bg(ACCENT)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const LOADING: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const BORDER: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const LINK: Style = Style::new().fg(ACCENT);

pub const LABEL: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Gray)
    .add_modifier(Modifier::BOLD);

pub const ISSUE_AUTHOR: Style = Style::new().fg(Color::Yellow);

pub const FILTER_ACTIVE: Style = Style::new()
    .fg(Color::White)
    .bg(ACCENT)
    .add_modifier(Modifier::BOLD);

pub const BUTTON: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

pub const BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);
