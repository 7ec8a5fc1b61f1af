use ratatui::{prelude::*, widgets::*};

use crate::game::Telemetry;

/// Side panel with the controller's counters
pub struct Stats<'a> {
    telemetry: &'a Telemetry,
    obstacle_speed: f32,
}

impl<'a> Stats<'a> {
    pub fn new(telemetry: &'a Telemetry, obstacle_speed: f32) -> Self {
        Self {
            telemetry,
            obstacle_speed,
        }
    }
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::from(format!("{label:<14}")).light_cyan(),
        Span::raw(value),
    ])
}

impl Widget for Stats<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.telemetry;
        let lines = vec![
            row("Phase", t.phase.to_string()),
            row("Score", t.score.to_string()),
            row("Speed", format!("{:.2}", self.obstacle_speed)),
            Line::default(),
            row("High score", t.high_score.to_string()),
            Line::default(),
            row("Generation", t.generation.to_string()),
            row("Best AI", t.best_ai_score.to_string()),
            row("Epsilon", format!("{:.3}", t.epsilon)),
            row("Q-table size", t.q_table_size.to_string()),
        ];

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .padding(Padding::horizontal(1))
                    .title("Stats"),
            )
            .render(area, buf);
    }
}
