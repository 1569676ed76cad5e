#![no_main]
use dtdlex::{TokenKind, tokenize};
use libfuzzer_sys::fuzz_target;

fn lex(data: &[u8]) {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Lexing must never panic. On success, every token text is a slice of
    // the input and string contents never include their delimiters.
    let Ok(tokens) = tokenize(input) else {
        return;
    };
    for token in tokens {
        assert!(
            input.contains(token.text),
            "token text {:?} not found in input",
            token.text
        );
        if token.kind == TokenKind::String {
            let quoted_single = format!("'{}'", token.text);
            let quoted_double = format!("\"{}\"", token.text);
            assert!(
                input.contains(&quoted_single) || input.contains(&quoted_double),
                "string token {:?} lost its delimiters",
                token.text
            );
        }
    }
}

fuzz_target!(|data: &[u8]| lex(data));
