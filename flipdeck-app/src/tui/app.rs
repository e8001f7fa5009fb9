use crate::tui::{
    inputs::{map_event, Action},
    views::{self, RightPane},
};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flipdeck_core::{Advance, DeckStore, DeckSummary, ReviewSession};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct TuiApp {
    pub store: Arc<dyn DeckStore>,
    pub rt: Arc<Runtime>,
    owner: String,
    decks: Vec<DeckSummary>,
    sel: usize,
    session: Option<ReviewSession>,
    notice: Option<&'static str>,
}

impl TuiApp {
    pub fn new(store: Arc<dyn DeckStore>, rt: Arc<Runtime>, owner: String) -> Self {
        Self {
            store,
            rt,
            owner,
            decks: vec![],
            sel: 0,
            session: None,
            notice: None,
        }
    }

    fn load_decks(&mut self) {
        self.decks = self
            .rt
            .block_on(self.store.list_decks(&self.owner))
            .unwrap_or_default();
        self.sel = self.sel.min(self.decks.len().saturating_sub(1));
    }

    fn start_review(&mut self) {
        let Some(summary) = self.decks.get(self.sel) else {
            self.notice = Some("No decks yet. Import one with `flipdeck deck import`.");
            return;
        };
        let deck = match self
            .rt
            .block_on(self.store.load_deck(&self.owner, &summary.name))
        {
            Ok(d) => d,
            Err(_) => {
                self.notice = Some("Could not load that deck.");
                return;
            }
        };
        match ReviewSession::new(deck.cards) {
            Ok(s) => self.session = Some(s),
            Err(_) => self.notice = Some("This deck is empty."),
        }
    }

    // Advance the session; Exit means "back to the deck list".
    fn next_card(&mut self) {
        let Some(s) = self.session.as_mut() else {
            return;
        };
        if let Advance::Exit = s.advance() {
            self.session = None;
            self.load_decks();
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.load_decks();

        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let right = if let Some(s) = &self.session {
                    RightPane::Session(s.current_view())
                } else if let Some(msg) = self.notice {
                    RightPane::Notice(msg)
                } else {
                    RightPane::Idle
                };
                views::draw_ui(f, f.size(), &self.decks, self.sel, right);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let ev = event::read()?;
                match map_event(ev) {
                    Action::Quit => break,
                    Action::Up => {
                        if self.session.is_none() {
                            self.notice = None;
                            self.sel = self.sel.saturating_sub(1);
                        }
                    }
                    Action::Down => {
                        if self.session.is_none() && self.sel + 1 < self.decks.len() {
                            self.notice = None;
                            self.sel += 1;
                        }
                    }
                    Action::Enter => {
                        self.notice = None;
                        if self.session.is_some() {
                            self.next_card();
                        } else {
                            self.start_review();
                        }
                    }
                    Action::Next => {
                        self.notice = None;
                        self.next_card();
                    }
                    Action::Flip => {
                        if let Some(s) = self.session.as_mut() {
                            s.flip();
                        }
                    }
                    Action::None => {}
                }
            }
        }
        Ok(())
    }
}
