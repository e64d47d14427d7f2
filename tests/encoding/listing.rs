#[cfg(test)]
mod verify {
    use simpcalc::encoding::{encode, read_listing, write_listing, DecodingError};
    use simpcalc::language::{Token, TokenKind};
    use simpcalc::output::Transcript;
    use simpcalc::scanning;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    // the EndofFile line is padded out to the column, so compare without
    // trailing whitespace
    fn lines(listing: &str) -> Vec<&str> {
        listing
            .lines()
            .map(str::trim_end)
            .collect()
    }

    fn tokens(source: &str) -> Vec<Token> {
        let mut transcript = Transcript::new();
        scanning::scan(source, &mut transcript)
    }

    #[test]
    fn listing_layout() {
        let listing = write_listing(r#"x := 1; PRINT("a b");"#);

        assert_eq!(
            lines(&listing),
            vec![
                "Identifier       x",
                "Assign           :=",
                "Number           1",
                "Semicolon        ;",
                "Print            PRINT",
                "LeftParen        (",
                "String           \"a b\"",
                "RightParen       )",
                "Semicolon        ;",
                "EndofFile",
            ]
        );
        assert!(listing.ends_with("EndofFile        \n"));
    }

    #[test]
    fn lexical_errors_interleaved() {
        let listing = write_listing("a ! b");

        assert_eq!(
            lines(&listing),
            vec![
                "Identifier       a",
                "Lexical Error: Illegal character/character sequence",
                "Error",
                "Identifier       b",
                "EndofFile",
            ]
        );

        assert_eq!(
            read_listing(&listing),
            Ok(vec![
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::Identifier, "b"),
                Token::end(),
            ])
        );
    }

    #[test]
    fn round_trip_of_every_kind() {
        let source = trim(
            r#"
IF alpha_1 <= 3.14e-2 : PRINT("  spaced  out  ", -b); ELSE
    c := SQRT((d ** 2) * e / f) + g - h;
ENDIF;
IF a < b : ENDIF; IF a > b : ENDIF; IF a >= b : ENDIF;
IF a != b : ENDIF; IF a = b : ENDIF;
x := AND OR NOT
"#,
        );

        let scanned = tokens(source);
        let listing: String = scanned
            .iter()
            .map(|token| encode(token) + "\n")
            .collect();

        assert_eq!(read_listing(&listing), Ok(scanned.clone()));
        assert_eq!(read_listing(&write_listing(source)), Ok(scanned));
    }

    #[test]
    fn missing_end_is_supplied() {
        assert_eq!(
            read_listing("Identifier       x\n"),
            Ok(vec![Token::new(TokenKind::Identifier, "x"), Token::end()])
        );
        assert_eq!(read_listing(""), Ok(vec![Token::end()]));
    }

    #[test]
    fn reading_stops_at_end() {
        assert_eq!(
            read_listing("EndofFile\nIdentifier       x\n"),
            Ok(vec![Token::end()])
        );
    }

    #[test]
    fn tolerates_loose_whitespace() {
        assert_eq!(
            read_listing("\r\nNumber   42   \r\n\n  Plus +\nEndofFile\r\n"),
            Ok(vec![
                Token::new(TokenKind::Number, "42"),
                Token::new(TokenKind::Plus, "+"),
                Token::end(),
            ])
        );
    }

    #[test]
    fn rejects_unknown_lines() {
        assert_eq!(
            read_listing("Identifier       x\nWhatever         y\n"),
            Err(DecodingError::UnknownKind(2, "Whatever".to_string()))
        );
        assert_eq!(
            read_listing("String           oops\n")
                .unwrap_err()
                .to_string(),
            "line 1: string lexeme is not enclosed in quotes"
        );
    }
}
