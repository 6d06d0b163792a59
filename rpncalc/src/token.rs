use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static WHITE: &[char] = &[' ', '\n', '\r', '\t'];

#[derive(PartialEq, Debug, Clone)]
pub enum Token<'a> {
    Operand(f64),
    Operator(&'a str),
}

impl<'a> Token<'a> {
    /// Anything that reads as a decimal literal is an operand, the rest is
    /// left for operator lookup.
    pub fn classify(token: &'a str) -> Token<'a> {
        match scan_number(token).and_then(|lit| lit.parse::<f64>().ok()) {
            Some(num) => Token::Operand(num),
            None => Token::Operator(token),
        }
    }
}

// scan numbers like [+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?
// the whole token (minus surrounding whitespace) must be consumed
pub fn scan_number(token: &str) -> Option<String> {
    let mut scanner = Scanner::new(token.trim_matches(WHITE));
    // optional sign
    scanner.accept_any(&['+', '-']);
    let integer = scanner.skip_all(DIGITS);
    // fractional part may stand alone as long as it has digits
    if scanner.accept('.').is_some() {
        if !scanner.skip_all(DIGITS) && !integer {
            return None;
        }
    } else if !integer {
        return None;
    }
    // exponent needs at least one digit, else leave it unconsumed
    let backtrack = scanner.pos();
    if scanner.accept_any(&['e', 'E']).is_some() {
        scanner.accept_any(&['+', '-']);
        if !scanner.skip_all(DIGITS) {
            scanner.set_pos(backtrack);
        }
    }
    if !scanner.exhausted() {
        return None;
    }
    Some(scanner.view())
}
