use flipdeck_core::{Card, CoreError, CredentialStore, Deck, DeckStore, MemoryStore};

#[tokio::test]
async fn register_then_verify() {
    let store = MemoryStore::new();
    assert!(!store.exists("ann").await.unwrap());

    store.create("ann", "s3cret").await.unwrap();
    assert!(store.exists("ann").await.unwrap());
    assert!(store.verify("ann", "s3cret").await.unwrap());
    assert!(!store.verify("ann", "wrong").await.unwrap());
    assert!(!store.verify("bob", "s3cret").await.unwrap());
}

#[tokio::test]
async fn duplicate_user_conflicts() {
    let store = MemoryStore::new();
    store.create("ann", "a").await.unwrap();
    let err = store.create("ann", "b").await.err().expect("must conflict");
    assert!(matches!(err, CoreError::Conflict(_)));
}

#[tokio::test]
async fn save_list_load_delete() {
    let store = MemoryStore::new();
    let deck = Deck::new("Spanish", vec![Card::new("hola", "hello")]);
    store.save_deck("ann", &deck).await.unwrap();

    let listed = store.list_decks("ann").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Spanish");
    assert_eq!(listed[0].card_count, 1);

    let loaded = store.load_deck("ann", "Spanish").await.unwrap();
    assert_eq!(loaded, deck);

    store.delete_deck("ann", "Spanish").await.unwrap();
    assert!(store.list_decks("ann").await.unwrap().is_empty());
}

#[tokio::test]
async fn save_replaces_same_name() {
    let store = MemoryStore::new();
    let v1 = Deck::new("Spanish", vec![Card::new("hola", "hello")]);
    let v2 = Deck::new(
        "Spanish",
        vec![Card::new("hola", "hello"), Card::new("adios", "goodbye")],
    );
    store.save_deck("ann", &v1).await.unwrap();
    store.save_deck("ann", &v2).await.unwrap();

    let listed = store.list_decks("ann").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].card_count, 2);
}

#[tokio::test]
async fn decks_are_scoped_to_their_owner() {
    let store = MemoryStore::new();
    let deck = Deck::new("Spanish", vec![Card::new("hola", "hello")]);
    store.save_deck("ann", &deck).await.unwrap();

    assert!(store.list_decks("bob").await.unwrap().is_empty());
    let err = store.load_deck("bob", "Spanish").await.err().unwrap();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[tokio::test]
async fn delete_missing_deck_is_not_found() {
    let store = MemoryStore::new();
    let err = store.delete_deck("ann", "nope").await.err().unwrap();
    assert!(matches!(err, CoreError::NotFound(_)));
}
