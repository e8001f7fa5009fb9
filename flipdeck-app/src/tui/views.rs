use crate::tui::theme::*;
use flipdeck_core::{DeckSummary, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub enum RightPane<'a> {
    Idle,
    Notice(&'a str),
    Session(View<'a>),
}

pub fn draw_ui(f: &mut Frame, area: Rect, decks: &[DeckSummary], sel: usize, right: RightPane) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);
    draw_decks(f, chunks[0], decks, sel);
    draw_right(f, chunks[1], right);

    let foot = Paragraph::new(Line::from(vec![
        Span::raw(" ↑/k ↓/j select  "),
        Span::raw(" Enter start/next  "),
        Span::raw(" space flip  "),
        Span::raw(" q quit "),
    ]))
    .style(footer_style())
    .block(Block::default().borders(Borders::TOP));
    let fh = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    f.render_widget(foot, fh);
}

fn draw_decks(f: &mut Frame, area: Rect, decks: &[DeckSummary], sel: usize) {
    let items: Vec<_> = decks
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let label = format!("{} ({})", d.name, d.card_count);
            let s = if i == sel {
                Line::from(label).style(selected_style())
            } else {
                Line::from(label)
            };
            ListItem::new(s)
        })
        .collect();

    let title = Paragraph::new(Line::from(vec![Span::raw("My decks").style(title_style())]));
    let th = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    f.render_widget(title, th);

    let list_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(list, list_area);
}

fn draw_right(f: &mut Frame, area: Rect, pane: RightPane) {
    match pane {
        RightPane::Idle => {
            let p = Paragraph::new("Press Enter to start reviewing the selected deck.")
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Review").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        RightPane::Notice(msg) => {
            let p = Paragraph::new(msg)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Review").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        RightPane::Session(View::Finished) => {
            let text = vec![
                Line::from(Span::raw("All cards done!").style(title_style())),
                Line::from(""),
                Line::from("Press Enter to go back to your decks."),
            ];
            let p = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Review").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        RightPane::Session(View::Card {
            position,
            total,
            front,
            back,
            face_up,
        }) => {
            let frame = Block::default().title("Review").borders(Borders::ALL);
            let inner = Rect {
                x: area.x + 1,
                y: area.y + 1,
                width: area.width.saturating_sub(2),
                height: area.height.saturating_sub(2),
            };
            f.render_widget(frame, area);

            let counter = Paragraph::new(Line::from(
                Span::raw(format!("{position} / {total}")).style(counter_style()),
            ));
            f.render_widget(counter, inner);

            let face_area = Rect {
                x: inner.x,
                y: inner.y + 2,
                width: inner.width,
                height: inner.height.saturating_sub(2),
            };
            let (label, text) = if face_up { ("A: ", back) } else { ("Q: ", front) };
            let p = Paragraph::new(Line::from(vec![
                Span::raw(label).style(title_style()),
                Span::raw(text),
            ]))
            .wrap(Wrap { trim: true });
            f.render_widget(p, face_area);
        }
    }
}
