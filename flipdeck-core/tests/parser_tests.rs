use flipdeck_core::{parse_cards, render_cards, Card};

#[test]
fn plain_two_field_lines() {
    let cards = parse_cards("hola,hello\nadios,goodbye\n");
    assert_eq!(
        cards,
        vec![Card::new("hola", "hello"), Card::new("adios", "goodbye")]
    );
}

#[test]
fn escaped_quotes_and_embedded_newline() {
    let cards = parse_cards("\"a\"\"b\",c\nd,\"e\nf\"");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0], Card::new("a\"b", "c"));
    assert_eq!(cards[1], Card::new("d", "e\nf"));
}

#[test]
fn line_without_delimiter_is_dropped() {
    let cards = parse_cards("justtext\na,b");
    assert_eq!(cards, vec![Card::new("a", "b")]);
}

#[test]
fn blank_lines_are_skipped() {
    let cards = parse_cards("a,b\n\n   \nc,d\n");
    assert_eq!(cards, vec![Card::new("a", "b"), Card::new("c", "d")]);
}

#[test]
fn empty_field_after_unescaping_is_dropped() {
    assert!(parse_cards("a,").is_empty());
    assert!(parse_cards(",b").is_empty());
    assert!(parse_cards("\"\",b").is_empty());
    // the quoted-empty back must not kill the neighbouring record
    let cards = parse_cards("a,\"\"\nc,d");
    assert_eq!(cards, vec![Card::new("c", "d")]);
}

#[test]
fn quoted_comma_before_the_delimiter() {
    let cards = parse_cards("\"a,b\",c");
    assert_eq!(cards, vec![Card::new("a,b", "c")]);
}

#[test]
fn unterminated_quote_at_end_of_input_is_discarded() {
    let cards = parse_cards("a,b\nc,\"open");
    assert_eq!(cards, vec![Card::new("a", "b")]);
}

#[test]
fn blank_line_inside_an_open_quote_is_kept() {
    let cards = parse_cards("a,\"x\n\ny\"");
    assert_eq!(cards, vec![Card::new("a", "x\n\ny")]);
}

#[test]
fn surrounding_whitespace_is_trimmed_outside_quotes_only() {
    let cards = parse_cards("  hola  ,  hello  ");
    assert_eq!(cards, vec![Card::new("hola", "hello")]);

    let cards = parse_cards("\" a \",b");
    assert_eq!(cards, vec![Card::new(" a ", "b")]);
}

#[test]
fn fields_of_several_records_share_one_quoted_run() {
    // four quotes on one line: balanced, one record
    let cards = parse_cards("\"q,1\",\"a,1\"");
    assert_eq!(cards, vec![Card::new("q,1", "a,1")]);
}

#[test]
fn render_parse_round_trip() {
    let deck = vec![
        Card::new("plain", "answer"),
        Card::new("a\"b", "c"),
        Card::new("comma, included", "and \"quotes\""),
        Card::new("multi\nline", "back\nhere"),
        Card::new(" padded ", "kept"),
    ];
    let text = render_cards(&deck);
    assert_eq!(parse_cards(&text), deck);
}

#[test]
fn garbage_never_errors() {
    assert!(parse_cards("").is_empty());
    assert!(parse_cards("\"").is_empty());
    assert!(parse_cards("\"\"\"").is_empty());
    assert!(parse_cards(",,,\n\"\n,").is_empty());
}
