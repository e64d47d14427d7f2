#[cfg(test)]
mod syntax {
    use std::path::Path;

    use simpcalc::language::{Token, TokenKind};
    use simpcalc::output::Transcript;
    use simpcalc::parsing::{check, ParsingError};

    /// Helper function to check that parsing fails with the expected kind of
    /// error, that exactly one diagnostic line is written for it, and that
    /// the valid-program line is absent.
    fn expect_error(content: &str, expected: ParsingError) {
        let mut transcript = Transcript::new();
        let result = check(Path::new("test.sc"), content, &mut transcript);

        let error = match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => error,
        };

        if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
            panic!(
                "Expected error type like {:?} but got: {:?} for input '{}'",
                expected, error, content
            );
        }

        let diagnostics: Vec<_> = transcript
            .lines()
            .iter()
            .filter(|line| **line == error.message())
            .collect();
        assert_eq!(diagnostics.len(), 1, "for input '{}'", content);

        assert_eq!(
            transcript
                .lines()
                .last(),
            Some(&error.message())
        );
        assert!(!transcript
            .lines()
            .iter()
            .any(|line| line.ends_with("is a valid SimpCalc program")));
    }

    fn anything() -> Token {
        Token::end()
    }

    #[test]
    fn missing_assign() {
        expect_error(
            "x 1;",
            ParsingError::Expected(TokenKind::Assign, anything()),
        );
    }

    #[test]
    fn missing_semicolon() {
        expect_error(
            "x := 1 y := 2;",
            ParsingError::Expected(TokenKind::Semicolon, anything()),
        );
    }

    #[test]
    fn missing_left_paren() {
        expect_error(
            "PRINT x;",
            ParsingError::Expected(TokenKind::LeftParen, anything()),
        );
    }

    #[test]
    fn sqrt_without_parenthesis() {
        expect_error(
            "x := SQRT 4;",
            ParsingError::Expected(TokenKind::LeftParen, anything()),
        );
    }

    #[test]
    fn unbalanced_parenthesis() {
        expect_error(
            "x := (1 + 2;",
            ParsingError::Expected(TokenKind::RightParen, anything()),
        );
    }

    #[test]
    fn trailing_else() {
        expect_error(
            "ELSE",
            ParsingError::Expected(TokenKind::EndofFile, anything()),
        );
    }

    #[test]
    fn incomplete_if() {
        expect_error("IF a < b : PRINT(a);", ParsingError::IncompleteIf(anything()));
    }

    #[test]
    fn endif_without_semicolon() {
        expect_error(
            "IF a < b : ENDIF",
            ParsingError::Expected(TokenKind::Semicolon, anything()),
        );
    }

    #[test]
    fn boolean_operator() {
        expect_error(
            "x := AND;",
            ParsingError::UnsupportedOperator(anything()),
        );
        expect_error(
            "PRINT(OR);",
            ParsingError::UnsupportedOperator(anything()),
        );
    }

    #[test]
    fn missing_operand() {
        expect_error("x := 1 + ;", ParsingError::SymbolExpected(anything()));
        expect_error("x := 2 ** ;", ParsingError::SymbolExpected(anything()));
        expect_error("x := - ;", ParsingError::SymbolExpected(anything()));
        expect_error("x := \"text\";", ParsingError::SymbolExpected(anything()));
    }

    #[test]
    fn relation_missing() {
        expect_error(
            "IF a + b : ENDIF;",
            ParsingError::MissingRelation(anything()),
        );
        expect_error(
            "IF a := b : ENDIF;",
            ParsingError::MissingRelation(anything()),
        );
    }

    #[test]
    fn nested_failure_reports_once() {
        expect_error(
            "IF a < b : IF c > d : x := ( ; ENDIF; ENDIF;",
            ParsingError::SymbolExpected(anything()),
        );
    }
}
