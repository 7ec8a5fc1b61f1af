use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Rectangle},
        *,
    },
};

use crate::{
    game::{self, FieldConfig, FrameResult, Mode},
    viz::util::centered,
};

/// The playing field drawn on a braille canvas, with an optional message on top
pub struct Arena<'a> {
    frame: &'a FrameResult,
    field: &'a FieldConfig,
    overlay: Option<Text<'a>>,
}

impl<'a> Arena<'a> {
    pub fn new(frame: &'a FrameResult, field: &'a FieldConfig) -> Self {
        Self {
            frame,
            field,
            overlay: None,
        }
    }

    pub fn overlay(mut self, text: Text<'a>) -> Self {
        self.overlay = Some(text);
        self
    }
}

/// Canvas coordinates grow upwards, the game's grow downwards
fn to_canvas(rect: &game::Rect, canvas_height: f32, color: Color) -> Rectangle {
    Rectangle {
        x: rect.x as f64,
        y: (canvas_height - rect.y - rect.height) as f64,
        width: rect.width as f64,
        height: rect.height as f64,
        color,
    }
}

impl Widget for Arena<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let telemetry = &self.frame.meta.telemetry;
        let player_color = match telemetry.phase.mode() {
            Some(Mode::Ai) => Color::Magenta,
            _ => Color::Blue,
        };
        let height = self.field.height;

        Canvas::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!("Arena ({})", telemetry.phase)),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, self.field.width as f64])
            .y_bounds([0.0, height as f64])
            .paint(|ctx| {
                for obstacle in &self.frame.obstacles {
                    ctx.draw(&to_canvas(&obstacle.rect, height, Color::Red));
                }
                ctx.draw(&to_canvas(&self.frame.player.rect, height, player_color));
                ctx.print(
                    2.0,
                    height as f64 - 2.0,
                    format!("Score: {}", self.frame.score).white().bold(),
                );
            })
            .render(area, buf);

        if let Some(text) = self.overlay {
            let width = text.width() as u16 + 6;
            let lines = text.height() as u16 + 2;
            let popup = centered(area, width, lines);
            Clear.render(popup, buf);
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_type(BorderType::Rounded))
                .render(popup, buf);
        }
    }
}
