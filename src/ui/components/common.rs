use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// A bordered, centred button label. Focused buttons are drawn highlighted.
pub fn create_button<'a>(label: &'a str, focused: bool) -> Paragraph<'a> {
    let (fg, border) = if focused {
        (Color::Black, Color::Cyan)
    } else {
        (Color::Cyan, Color::DarkGray)
    };
    let style = if focused {
        Style::default().fg(fg).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fg)
    };

    Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
}

/// Creates an input field block with a visual cursor at `cursor` (char index)
pub fn create_input_paragraph<'a>(input_buffer: &str, cursor: usize, field_title: &str) -> Paragraph<'a> {
    let before: String = input_buffer.chars().take(cursor).collect();
    let at = input_buffer.chars().nth(cursor);
    let after: String = input_buffer.chars().skip(cursor + 1).collect();

    let cursor_style = Style::default().fg(Color::Black).bg(Color::White);
    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(at.map(String::from).unwrap_or_else(|| " ".to_string()), cursor_style),
        Span::raw(after),
    ]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(line)
        .block(input_block)
        .style(Style::default().fg(Color::White))
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

/// Common instruction shortcuts
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ESC_BACK: InstructionShortcut = ("Esc", Color::Red, " Back");
}
