use async_trait::async_trait;
use chrono::{DateTime, Utc};
use flipdeck_core::{Card, CoreError, CredentialStore, Deck, DeckStore, DeckSummary};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

pub mod paths;

const FILE_VERSION: u32 = 1;

#[derive(Clone, Serialize, Deserialize)]
struct UserRecord {
    name: String,
    password: String,
}

#[derive(Clone, Serialize, Deserialize)]
struct StoredDeck {
    owner: String,
    name: String,
    created_at: DateTime<Utc>,
    cards: Vec<Card>,
}

#[derive(Clone, Serialize, Deserialize)]
struct FileImage {
    version: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    users: Vec<UserRecord>,
    decks: Vec<StoredDeck>,
}

#[derive(Default, Clone)]
struct State {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    users: HashMap<String, String>,
    decks: HashMap<String, Vec<Deck>>,
}

impl State {
    fn new_empty() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            users: HashMap::new(),
            decks: HashMap::new(),
        }
    }

    fn to_image(&self) -> FileImage {
        FileImage {
            version: FILE_VERSION,
            created_at: self.created_at,
            updated_at: self.updated_at,
            users: self
                .users
                .iter()
                .map(|(name, password)| UserRecord {
                    name: name.clone(),
                    password: password.clone(),
                })
                .collect(),
            decks: self
                .decks
                .iter()
                .flat_map(|(owner, decks)| {
                    decks.iter().map(move |d| StoredDeck {
                        owner: owner.clone(),
                        name: d.name.clone(),
                        created_at: d.created_at,
                        cards: d.cards.clone(),
                    })
                })
                .collect(),
        }
    }

    fn from_image(img: FileImage) -> Self {
        let mut users = HashMap::new();
        for u in img.users {
            users.insert(u.name, u.password);
        }
        let mut decks: HashMap<String, Vec<Deck>> = HashMap::new();
        for d in img.decks {
            decks.entry(d.owner).or_default().push(Deck {
                name: d.name,
                created_at: d.created_at,
                cards: d.cards,
            });
        }
        Self {
            created_at: img.created_at,
            updated_at: img.updated_at,
            users,
            decks,
        }
    }
}

pub struct JsonStore {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
    state: RwLock<State>,
}

impl JsonStore {
    pub async fn open_default() -> Result<Self, CoreError> {
        let (file, backups) = paths::default_store_file();
        Self::open_with(file, backups, 10).await
    }

    pub async fn open_with(
        path: PathBuf,
        backups_dir: PathBuf,
        max_backups: usize,
    ) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        ensure_dir(&backups_dir)?;
        let state = load_or_init(&path).await?;
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
            state: RwLock::new(state),
        })
    }

    async fn save(&self) -> Result<(), CoreError> {
        let snapshot = {
            let mut s = self.state.write();
            s.updated_at = Utc::now();
            s.to_image()
        };
        let path = self.path.clone();
        let backups = self.backups_dir.clone();
        let keep = self.max_backups;

        // Join error -> CoreError, inner io::Error -> CoreError
        task::spawn_blocking(move || write_with_backup(&path, &backups, keep, &snapshot))
            .await
            .map_err(|_| CoreError::Storage("io"))?
            .map_err(|_| CoreError::Storage("io"))?;
        Ok(())
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), CoreError> {
    fs::create_dir_all(path).map_err(|_| CoreError::Storage("io"))
}

async fn load_or_init(path: &Path) -> Result<State, CoreError> {
    if path.exists() {
        let p = path.to_path_buf();
        let img: FileImage = task::spawn_blocking(move || {
            let mut f = fs::File::open(&p)?;
            let mut buf = String::new();
            f.read_to_string(&mut buf)?;
            let v = serde_json::from_str::<FileImage>(&buf)?;
            Ok::<FileImage, std::io::Error>(v)
        })
        .await
        .map_err(|_| CoreError::Storage("io"))
        .and_then(|r| r.map_err(|_| CoreError::Storage("io")))?;
        let mut st = State::from_image(img);
        st.updated_at = Utc::now();
        Ok(st)
    } else {
        let st = State::new_empty();
        let img = st.to_image();
        write_with_backup(path, &path.with_extension("backups"), 1, &img)
            .map_err(|_| CoreError::Storage("io"))?;
        Ok(st)
    }
}

fn write_with_backup(
    path: &Path,
    backups_dir: &Path,
    max_backups: usize,
    img: &FileImage,
) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir_all(backups_dir)?;

    let json = serde_json::to_vec_pretty(img).expect("serialize");
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    let _ = fs::remove_file(path);
    tmp.persist(path)?;

    // Backup rotation
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!("flipdeck-{ts}.json");
    let backup_path = backups_dir.join(backup_name);
    let mut btmp = NamedTempFile::new_in(backups_dir)?;
    btmp.write_all(&json)?;
    btmp.flush()?;
    let _ = fs::remove_file(&backup_path);
    btmp.persist(&backup_path)?;

    rotate_backups(backups_dir, max_backups)?;

    Ok(())
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    entries.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    if entries.len() > keep {
        for e in &entries[0..entries.len() - keep] {
            let _ = fs::remove_file(e.path());
        }
    }
    Ok(())
}

#[async_trait]
impl CredentialStore for JsonStore {
    async fn exists(&self, user: &str) -> Result<bool, CoreError> {
        Ok(self.state.read().users.contains_key(user))
    }

    async fn verify(&self, user: &str, password: &str) -> Result<bool, CoreError> {
        let s = self.state.read();
        Ok(s.users.get(user).map(|p| p == password).unwrap_or(false))
    }

    async fn create(&self, user: &str, password: &str) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            if s.users.contains_key(user) {
                return Err(CoreError::Conflict("user id already exists"));
            }
            s.users.insert(user.to_string(), password.to_string());
        }
        self.save().await
    }
}

#[async_trait]
impl DeckStore for JsonStore {
    async fn list_decks(&self, owner: &str) -> Result<Vec<DeckSummary>, CoreError> {
        let s = self.state.read();
        let mut v: Vec<DeckSummary> = s
            .decks
            .get(owner)
            .map(|ds| ds.iter().map(DeckSummary::of).collect())
            .unwrap_or_default();
        v.sort_by_key(|d| d.created_at);
        Ok(v)
    }

    async fn load_deck(&self, owner: &str, name: &str) -> Result<Deck, CoreError> {
        let s = self.state.read();
        s.decks
            .get(owner)
            .and_then(|ds| ds.iter().find(|d| d.name == name))
            .cloned()
            .ok_or(CoreError::NotFound("deck"))
    }

    async fn save_deck(&self, owner: &str, deck: &Deck) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            let ds = s.decks.entry(owner.to_string()).or_default();
            ds.retain(|d| d.name != deck.name);
            ds.push(deck.clone());
        }
        self.save().await
    }

    async fn delete_deck(&self, owner: &str, name: &str) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            let Some(ds) = s.decks.get_mut(owner) else {
                return Err(CoreError::NotFound("deck"));
            };
            let before = ds.len();
            ds.retain(|d| d.name != name);
            if ds.len() == before {
                return Err(CoreError::NotFound("deck"));
            }
        }
        self.save().await
    }
}
