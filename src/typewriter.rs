//! Typewriter effect as an iterator of growing prefixes.
//!
//! `Typewriter::new("Hola")` yields `""`, `"H"`, `"Ho"`, `"Hol"`, `"Hola"` and
//! then ends. Prefixes are cut on `char` boundaries so multi-byte text types
//! one visible character at a time.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Iterator over the prefixes of a text, from empty to complete.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    /// Byte offset of the next prefix end, or `None` once the full text was yielded.
    next_end: Option<usize>,
}

impl<'a> Typewriter<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, next_end: Some(0) }
    }

    /// The complete text being typed.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let end = self.next_end?;
        let prefix = &self.text[..end];
        self.next_end = self.text[end..]
            .chars()
            .next()
            .map(|c| end + c.len_utf8());
        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next_end {
            Some(end) => self.text[end..].chars().count() + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Typewriter<'_> {}

impl std::iter::FusedIterator for Typewriter<'_> {}
