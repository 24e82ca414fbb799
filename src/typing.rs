pub const TITLE_LINE_SELECTOR: &str = ".title-line";
pub const TYPING_INTERVAL_MS: u32 = 100;

pub fn line_start_delay_ms(index: usize, char_count: usize) -> u32 {
    let delay = (index as u64)
        .saturating_mul(char_count as u64)
        .saturating_mul(u64::from(TYPING_INTERVAL_MS));
    u32::try_from(delay).unwrap_or(u32::MAX)
}

#[derive(Clone, Debug)]
pub struct TypingLine {
    chars: Vec<char>,
    typed: usize,
}

impl TypingLine {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let next = self.chars.get(self.typed).copied()?;
        self.typed += 1;
        Some(next)
    }

    pub fn typed_text(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_start_after_previous_text_lengths() {
        assert_eq!(line_start_delay_ms(0, 12), 0);
        assert_eq!(line_start_delay_ms(1, 12), 1_200);
        assert_eq!(line_start_delay_ms(2, 5), 1_000);
    }

    #[test]
    fn huge_delays_saturate() {
        assert_eq!(line_start_delay_ms(usize::MAX, usize::MAX), u32::MAX);
    }

    #[test]
    fn line_types_one_char_at_a_time() {
        let mut line = TypingLine::new("Hé!");

        assert_eq!(line.char_count(), 3);
        assert_eq!(line.next_char(), Some('H'));
        assert_eq!(line.typed_text(), "H");
        assert_eq!(line.next_char(), Some('é'));
        assert_eq!(line.next_char(), Some('!'));
        assert_eq!(line.next_char(), None);
        assert_eq!(line.typed_text(), "Hé!");
    }
}
