/// A backtracking cursor over the source text.
///
/// Every recognizer either consumes input and succeeds, or leaves the cursor
/// where it was and fails. Callers that need to undo a longer sequence save
/// `pos()` and `reset` to it.
#[derive(Debug, Clone)]
pub(crate) struct Lexer<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[inline]
    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Consumes one character if it satisfies `predicate`.
    pub fn eat_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: Fn(char) -> bool,
    {
        match self.peek() {
            Some(c) if predicate(c) => {
                self.bump(c);
                Some(c)
            }
            _ => None,
        }
    }

    pub fn eat_char(&mut self, expected: char) -> bool {
        self.eat_if(|c| c == expected).is_some()
    }

    /// Consumes `s` if the input continues with it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            return true;
        }
        false
    }

    /// Consumes the longest run of characters satisfying `predicate` and
    /// returns it, or `None` without moving when the run would be empty.
    pub fn slice_while<P>(&mut self, predicate: P) -> Option<&'src str>
    where
        P: Fn(char) -> bool,
    {
        let from_off = self.pos;
        while self.eat_if(&predicate).is_some() {}

        if self.pos == from_off {
            return None;
        }
        Some(&self.src[from_off..self.pos])
    }

    /// One or more decimal digits.
    pub fn digits(&mut self) -> Option<&'src str> {
        self.slice_while(Self::is_digit)
    }

    /// Skips any whitespace, newlines included, and returns how many bytes
    /// were skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        self.slice_while(char::is_whitespace).map_or(0, str::len)
    }

    /// Skips ASCII spaces only and returns how many were skipped.
    pub fn skip_spaces(&mut self) -> usize {
        self.slice_while(|c| c == ' ').map_or(0, str::len)
    }

    pub fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    pub fn is_letter(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    pub fn is_id_part(c: char) -> bool {
        Self::is_letter(c) || Self::is_digit(c) || c == '_'
    }
}

#[cfg(test)]
mod test {
    use super::Lexer;

    #[test]
    fn digits_stop_at_non_digit() {
        let mut lexer = Lexer::new("1024x");
        assert_eq!(lexer.digits(), Some("1024"));
        assert_eq!(lexer.peek(), Some('x'));
        assert_eq!(lexer.digits(), None);
        assert_eq!(lexer.pos(), 4);
    }

    #[test]
    fn failed_recognizers_leave_cursor() {
        let mut lexer = Lexer::new("abc");
        assert!(!lexer.eat_str("abd"));
        assert!(lexer.eat_if(Lexer::is_digit).is_none());
        assert_eq!(lexer.pos(), 0);
        assert!(lexer.eat_str("ab"));
        assert_eq!(lexer.rest(), "c");
    }

    #[test]
    fn multibyte_symbols() {
        let mut lexer = Lexer::new("÷2");
        assert!(lexer.eat_char('÷'));
        assert_eq!(lexer.digits(), Some("2"));
        assert!(lexer.is_eof());
    }

    #[test]
    fn spaces_are_narrower_than_whitespace() {
        let mut lexer = Lexer::new("  \t\n x");
        assert_eq!(lexer.skip_spaces(), 2);
        assert_eq!(lexer.skip_spaces(), 0);
        assert_eq!(lexer.skip_whitespace(), 3);
        assert_eq!(lexer.peek(), Some('x'));
    }

    #[test]
    fn character_classes() {
        assert!(Lexer::is_digit('7'));
        assert!(!Lexer::is_digit('a'));
        assert!(Lexer::is_letter('Z'));
        assert!(!Lexer::is_letter('_'));
        assert!(!Lexer::is_letter('é'));
        assert!(Lexer::is_id_part('_'));
        assert!(Lexer::is_id_part('9'));
        assert!(!Lexer::is_id_part('-'));
    }
}
