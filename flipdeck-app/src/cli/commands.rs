use crate::cli::opts::*;

use anyhow::{bail, Context, Result};
use flipdeck_core::{
    parse_cards, render_cards, Advance, CoreError, CredentialStore, Deck, DeckStore,
    ReviewSession, View,
};
use flipdeck_json::JsonStore;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    let store = open_store(args.data_dir.clone()).await?;
    match args.cmd {
        Command::User(cmd) => user_cmd(store, cmd).await,
        Command::Deck(cmd) => deck_cmd(store, cmd).await,
        Command::Review(cmd) => review_cmd(store, cmd).await,
        // main routes the TUI before reaching here
        Command::Tui(_) => unreachable!(),
    }
}

pub async fn open_store(data_dir: Option<PathBuf>) -> Result<Arc<JsonStore>> {
    let store = match data_dir {
        Some(dir) => {
            JsonStore::open_with(dir.join("flipdeck.json"), dir.join("backups"), 10).await?
        }
        None => JsonStore::open_default().await?,
    };
    Ok(Arc::new(store))
}

/// The login gate every deck/review command passes through.
pub async fn login(store: &JsonStore, auth: &AuthArgs) -> Result<String> {
    if !store.verify(&auth.user, &auth.password).await? {
        bail!("wrong user id or password");
    }
    Ok(auth.user.clone())
}

async fn user_cmd(store: Arc<JsonStore>, cmd: UserCmd) -> Result<()> {
    match cmd {
        UserCmd::Register { name, password } => {
            let name = name.trim().to_string();
            if name.is_empty() || password.is_empty() {
                bail!("user id and password must not be empty");
            }
            match store.create(&name, &password).await {
                Ok(()) => println!("registered {name}"),
                Err(CoreError::Conflict(_)) => bail!("user id {name} is already taken"),
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}

async fn deck_cmd(store: Arc<JsonStore>, cmd: DeckCmd) -> Result<()> {
    match cmd {
        DeckCmd::Import(a) => {
            let owner = login(&store, &a.auth).await?;
            let name = a.name.trim().to_string();
            if name.is_empty() {
                bail!("deck name must not be empty");
            }
            let text = std::fs::read_to_string(&a.file)
                .with_context(|| format!("reading {}", a.file.display()))?;
            let cards = parse_cards(&text);
            if cards.is_empty() {
                bail!("no valid card data found in {}", a.file.display());
            }
            let count = cards.len();
            store.save_deck(&owner, &Deck::new(name.clone(), cards)).await?;
            println!("{count} card(s) loaded, saved as {name}");
        }
        DeckCmd::List { auth } => {
            let owner = login(&store, &auth).await?;
            let decks = store.list_decks(&owner).await?;
            if decks.is_empty() {
                println!("no saved decks");
                return Ok(());
            }
            for d in decks {
                println!(
                    "{}\t{} card(s)\t{}",
                    d.name,
                    d.card_count,
                    d.created_at.format("%Y-%m-%d")
                );
            }
        }
        DeckCmd::Export { auth, name, path } => {
            let owner = login(&store, &auth).await?;
            let deck = store.load_deck(&owner, &name).await?;
            std::fs::write(&path, render_cards(&deck.cards))
                .with_context(|| format!("writing {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        DeckCmd::Rm { auth, name } => {
            let owner = login(&store, &auth).await?;
            store.delete_deck(&owner, &name).await?;
            println!("ok");
        }
    }
    Ok(())
}

async fn review_cmd(store: Arc<JsonStore>, cmd: ReviewCmd) -> Result<()> {
    let owner = login(&store, &cmd.auth).await?;
    let deck = store.load_deck(&owner, &cmd.deck).await?;

    let mut session = match ReviewSession::new(deck.cards) {
        Ok(s) => s,
        Err(CoreError::EmptyDeck) => bail!("deck {} has no cards to review", cmd.deck),
        Err(e) => return Err(e.into()),
    };

    loop {
        // the view borrows the session, so print first and mutate after
        let at_card = match session.current_view() {
            View::Card {
                position,
                total,
                front,
                back,
                face_up,
            } => {
                println!("\n[{position}/{total}]");
                if face_up {
                    println!("A: {back}");
                } else {
                    println!("Q: {front}");
                }
                true
            }
            View::Finished => {
                println!("\nAll cards done!");
                false
            }
        };

        if at_card {
            let line = read_line("[f=flip, enter=next, q=quit] ")?;
            match line.trim().to_lowercase().as_str() {
                "f" | "flip" => session.flip(),
                "q" | "quit" => return Ok(()),
                _ => {
                    session.advance();
                }
            }
        } else {
            let _ = read_line("[enter=back] ")?;
            if let Advance::Exit = session.advance() {
                return Ok(());
            }
        }
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    stdin().read_line(&mut s)?;
    Ok(s)
}
