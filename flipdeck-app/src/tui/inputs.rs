use crossterm::event::{Event, KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Quit,
    Up,
    Down,
    Enter,
    Flip,
    Next,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, .. }) = ev {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Enter => Action::Enter,
            KeyCode::Char(' ') | KeyCode::Char('f') => Action::Flip,
            KeyCode::Char('n') => Action::Next,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
