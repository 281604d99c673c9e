use crate::achievements::get_achievement_def;
use crate::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const POPUP_WIDTH: u16 = 36;
const POPUP_HEIGHT: u16 = 4;

/// Draws one popup per pending unlock, stacked in the top-right corner.
/// Popups that would overflow the bottom of the frame are skipped.
pub fn draw_notifications(frame: &mut Frame, area: Rect, state: &GameState) {
    if state.notifications.is_empty() {
        return;
    }

    let width = POPUP_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);

    for (i, notification) in state.notifications.iter().enumerate() {
        let y = area.y + 1 + (i as u16) * POPUP_HEIGHT;
        if y + POPUP_HEIGHT > area.y + area.height {
            break;
        }

        let def = get_achievement_def(notification.id);
        let popup = Rect::new(x, y, width, POPUP_HEIGHT);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines = vec![
            Line::from(Span::styled(
                "🏆 Achievement unlocked!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} {}", def.icon, def.title),
                Style::default().fg(Color::White),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
