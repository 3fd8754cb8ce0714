/// Wordle-specific renderer
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::renderer::GameRenderer;
use crate::games::wordle::feedback::Feedback;
use crate::games::wordle::game::WordleGame;
use crate::games::wordle::{MAX_ATTEMPTS, WORD_LENGTH};

pub struct WordleRenderer;

impl WordleRenderer {
    fn cell_style(feedback: Option<Feedback>, filled: bool) -> Style {
        let style = match feedback {
            Some(Feedback::Correct) => Style::default().bg(Color::Green).fg(Color::Black),
            Some(Feedback::Present) => Style::default().bg(Color::Yellow).fg(Color::Black),
            Some(Feedback::Absent) => Style::default().bg(Color::DarkGray).fg(Color::White),
            None if filled => Style::default().fg(Color::White),
            None => Style::default().fg(Color::DarkGray),
        };
        style.add_modifier(Modifier::BOLD)
    }

    fn grid_lines(game: &WordleGame) -> Vec<Line<'static>> {
        let state = game.state();
        (0..MAX_ATTEMPTS)
            .map(|row| {
                let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
                for col in 0..WORD_LENGTH {
                    if col > 0 {
                        spans.push(Span::raw(" "));
                    }
                    let letter = state.cell(row, col);
                    let text = format!(" {} ", letter.map_or('·', |c| c.to_ascii_uppercase()));
                    let style = Self::cell_style(game.revealed_feedback(row, col), letter.is_some());
                    spans.push(Span::styled(text, style));
                }
                Line::from(spans)
            })
            .collect()
    }

    fn status_line(game: &WordleGame) -> String {
        match game.outcome() {
            Some(outcome) => outcome.announcement(),
            None if game.state().is_active() => {
                format!("Attempt {}/{}", game.state().current_row() + 1, MAX_ATTEMPTS)
            }
            None => String::new(),
        }
    }
}

impl GameRenderer<WordleGame> for WordleRenderer {
    /// Pure rendering function - no game logic
    fn render(frame: &mut Frame, game: &WordleGame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(MAX_ATTEMPTS as u16 + 2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(Self::grid_lines(game))
                .alignment(Alignment::Center)
                .block(Block::default().title(" TERMLE ").borders(Borders::ALL)),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(Self::status_line(game))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Cyan)),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new("[A-Z] Type  [Backspace] Erase  [Enter] Submit  [Esc] Quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[2],
        );
    }
}
