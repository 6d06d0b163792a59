// Backtracking cursor over the characters of a single token.
// pos points at the last consumed char, -1 before the first one.
pub struct Scanner {
    buf: Vec<char>,
    pos: isize,
}

impl Scanner {
    pub fn new(src: &str) -> Scanner {
        Scanner { buf: src.chars().collect(), pos: -1 }
    }

    pub fn pos(&self) -> isize { self.pos }

    // only restores positions previously handed out by pos()
    pub fn set_pos(&mut self, pos: isize) {
        self.pos = pos;
    }

    pub fn peek(&self) -> Option<char> {
        self.buf.get((self.pos + 1) as usize).cloned()
    }

    pub fn exhausted(&self) -> bool {
        self.peek().is_none()
    }

    // Advance only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(&next) => {
                self.pos += 1;
                Some(next)
            }
            _ => None,
        }
    }

    pub fn accept(&mut self, what: char) -> Option<char> {
        self.accept_any(&[what])
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Everything consumed so far
    pub fn view(&self) -> String {
        self.buf[..(self.pos + 1) as usize].iter().collect()
    }
}
