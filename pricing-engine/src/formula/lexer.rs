//! Formula tokenizer
//!
//! Accepts numeric literals, the variables `width`, `height` and `depth`
//! (case-insensitive), `+ - * / ( )` and whitespace. `×` is read as `*`.
//! Any other character is rejected before parsing starts.

use super::FormulaError;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Width,
    Height,
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(Decimal),
    Var(Variable),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' | '×' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &source[pos..end];
                let value = Decimal::from_str(literal)
                    .map_err(|_| FormulaError::InvalidNumber(literal.to_string()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let ident = &source[pos..end];
                let var = match ident.to_ascii_lowercase().as_str() {
                    "width" => Variable::Width,
                    "height" => Variable::Height,
                    "depth" => Variable::Depth,
                    _ => return Err(FormulaError::UnknownIdentifier(ident.to_string())),
                };
                tokens.push(Token::Var(var));
            }
            other => {
                return Err(FormulaError::DisallowedCharacter {
                    ch: other,
                    position: pos,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_expression() {
        let tokens = tokenize("(width - 36) / 2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Var(Variable::Width),
                Token::Minus,
                Token::Number(Decimal::from(36)),
                Token::RParen,
                Token::Slash,
                Token::Number(Decimal::from(2)),
            ]
        );
    }

    #[test]
    fn test_tokenize_times_sign_and_case() {
        let tokens = tokenize("Width×HEIGHT").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Var(Variable::Width),
                Token::Star,
                Token::Var(Variable::Height),
            ]
        );
    }

    #[test]
    fn test_tokenize_decimal_literal() {
        let tokens = tokenize("0.5*depth").unwrap();
        assert_eq!(tokens[0], Token::Number(Decimal::new(5, 1)));
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        for source in ["width; drop", "width % 2", "width ** 2 `ls`", "$width", "width,2"] {
            let err = tokenize(source).unwrap_err();
            assert!(
                matches!(err, FormulaError::DisallowedCharacter { .. }),
                "{source} -> {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_unknown_identifiers() {
        let err = tokenize("system(width)").unwrap_err();
        assert_eq!(err, FormulaError::UnknownIdentifier("system".to_string()));
    }

    #[test]
    fn test_rejects_malformed_number() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(err, FormulaError::InvalidNumber("1.2.3".to_string()));
    }
}
