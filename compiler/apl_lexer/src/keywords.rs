//! Reserved-word table.

use apl_ir::TokenKind;

/// Classify a word. `None` means it is an ordinary identifier.
///
/// Keywords are 2-6 bytes long, so anything outside that range is rejected
/// before comparing.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "fun" => Some(TokenKind::Function),
            "def" => Some(TokenKind::Def),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "elif" => Some(TokenKind::Elif),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
