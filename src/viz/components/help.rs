use ratatui::{prelude::*, widgets::*};

use crate::viz::util::centered;

fn entry(key: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::from(key).light_cyan().bold(),
        Span::raw(" : "),
        Span::raw(text),
    ])
}

pub fn render_help(area: Rect, buf: &mut Buffer, selected_tab: usize) {
    let lines = vec![
        entry("  q  ", "Quit"),
        entry("  h  ", "Toggle help popup"),
        entry(" Tab ", "Switch tabs"),
        entry("  m  ", "Start a manual game"),
        entry("  t  ", "Start training the agent"),
        entry("  s  ", "Stop training"),
        entry("  r  ", "Reset everything the agent learned"),
        entry("Enter", "Back to the menu after a game over"),
    ];

    let additional_lines = match selected_tab {
        0 => vec![entry("⬆ / ⬇", "Move the player in a manual game")],
        1 => vec![entry("⬅ / ➡", "Switch plots")],
        2 => vec![
            entry("  v  ", "Toggles target selector widget hidden/visible"),
            entry("  f  ", "Toggle focus on the selected target only"),
            entry("⬆ / ⬇", "Switch log target"),
            entry("⬅ / ➡", "Reduce/increase shown log messages by one level"),
            entry("- / +", "Reduce/increase captured log messages by one level"),
            entry("PgUp ", "Enter page mode and scroll up in log history"),
            entry("PgDn ", "Only in page mode, scroll down in log history"),
            entry(" Esc ", "Exit page mode and go back to scrolling mode"),
        ],
        _ => vec![],
    };

    let lines = [lines, additional_lines].concat();
    let popup = centered(area, 80, lines.len() as u16 + 4);

    Clear.render(popup, buf);

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::proportional(1))
                .title("Help"),
        )
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}
