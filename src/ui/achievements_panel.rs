use crate::achievements::ALL_ACHIEVEMENTS;
use crate::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the achievement list: one row per catalog entry with icon, title,
/// description, and progress toward the target.
pub fn draw_achievements_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" 🏆 Bakery Achievements ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    for (i, def) in ALL_ACHIEVEMENTS.iter().enumerate() {
        let unlocked = state.unlocked[i];
        let highlighted = state.is_newly_unlocked(def.id);

        let title_style = if highlighted {
            // Freshly unlocked: stands out until its popup window closes
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if unlocked {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let detail_style = if unlocked {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let marker = if unlocked { def.icon } else { "🔒" };

        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", marker)),
            Span::styled(def.title, title_style),
            Span::styled(format!(" — {}", def.description), detail_style),
            Span::styled(
                format!("  [{}/{}]", state.donut_count.min(def.target), def.target),
                detail_style,
            ),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
