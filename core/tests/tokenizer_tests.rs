use boolcore::tokenizer::{tokenize, Tokenizer};

#[test]
fn it_lowercases_and_splits_on_whitespace() {
    let words = tokenize("No dogs or foxes here,\tjust a QUICK cat.");
    assert_eq!(words, vec!["no", "dogs", "or", "foxes", "here,", "just", "a", "quick", "cat."]);
}

#[test]
fn it_is_deterministic() {
    let text = "Another document about a dog and a fox, quick quick!";
    assert_eq!(tokenize(text), tokenize(text));
    assert_eq!(Tokenizer::Words.tokenize(text), Tokenizer::Words.tokenize(text));
}

#[test]
fn words_mode_normalizes_unicode() {
    // full-width letters fold to ASCII under NFKC
    let words = Tokenizer::Words.tokenize("ＱＵＩＣＫ café's");
    assert_eq!(words, vec!["quick", "café's"]);
}

#[test]
fn empty_text_has_no_terms() {
    assert!(tokenize("   \n").is_empty());
    assert!(Tokenizer::Words.tokenize("... !!").is_empty());
}
