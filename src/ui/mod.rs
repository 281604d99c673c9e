mod achievements_panel;
mod counter_panel;
mod notifications;

use crate::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let size = frame.size();

    // Split vertically: header, counter card, achievements, footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(9), // Counter card
            Constraint::Min(7),    // Achievements
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(frame, v_chunks[0]);
    counter_panel::draw_counter_panel(frame, v_chunks[1], state);
    achievements_panel::draw_achievements_panel(frame, v_chunks[2], state);
    draw_footer(frame, v_chunks[3]);

    // Unlock popups render last so they sit on top of everything
    notifications::draw_notifications(frame, size, state);
}

/// Draws the bakery header banner
fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "D O N U T   C O U N T E R",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Vintage Bakery • Est. 1952",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Draws the key hint footer
fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::styled(" Eat a donut  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::styled(" Reset  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
