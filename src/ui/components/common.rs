use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Border color for the focused panel
pub const FOCUSED_COLOR: Color = Color::Cyan;
/// Border color for unfocused panels
pub const UNFOCUSED_COLOR: Color = Color::Gray;

/// Creates a rounded panel block, highlighted when focused
pub fn create_panel_block<'a>(title: String, focused: bool) -> Block<'a> {
    let color = if focused { FOCUSED_COLOR } else { UNFOCUSED_COLOR };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
}

/// Creates an input field, with a visual cursor while focused and a dimmed placeholder when empty
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    let block = create_panel_block(format!(" {} ", field_title), focused);

    let mut spans = Vec::new();
    if input_buffer.is_empty() && !focused {
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(input_buffer, Style::default().fg(Color::White)));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }

    Paragraph::new(Line::from(spans)).block(block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across panels
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const TAB_FOCUS: InstructionShortcut = ("Tab", Color::Cyan, " next field");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " add");
    pub const CTRL_Y_ADD_COPY: InstructionShortcut = ("^Y", Color::Green, " add & copy");
    pub const MOVE: InstructionShortcut = ("K/J", Color::Yellow, " move");
    pub const COPY: InstructionShortcut = ("c", Color::Cyan, " copy");
    pub const COPY_ALL: InstructionShortcut = ("y", Color::Cyan, " copy schedule");
    pub const DELETE: InstructionShortcut = ("d", Color::Red, " delete");
    pub const HELP: InstructionShortcut = ("F1", Color::Magenta, " help");
    pub const QUIT: InstructionShortcut = ("^C", Color::Red, " quit");
}
