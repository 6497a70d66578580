use serde::Serialize;

/// Typefaces a man page can select with `\f` or `.ft`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    #[default]
    Roman,
    Bold,
    Italic,
    BoldItalic,
    ConstantWidth,
}

impl Font {
    /// Resolves a troff font name or position number.
    ///
    /// `P` (previous) is not a font and is handled by [`FontState::select_named`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "R" | "1" => Some(Self::Roman),
            "B" | "2" => Some(Self::Bold),
            "I" | "3" => Some(Self::Italic),
            "BI" | "4" => Some(Self::BoldItalic),
            "C" | "CW" | "CR" | "CB" | "CI" | "CO" => Some(Self::ConstantWidth),
            _ => None,
        }
    }
}

/// Current and previous font, so that `\fP` can switch back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontState {
    current: Font,
    previous: Font,
}

impl FontState {
    pub fn current(&self) -> Font {
        self.current
    }

    pub fn select(&mut self, font: Font) {
        self.previous = self.current;
        self.current = font;
    }

    pub fn restore_previous(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    /// Applies a font name as written in markup. Unknown names fall back to roman.
    pub fn select_named(&mut self, name: &str) {
        if name == "P" || name.is_empty() {
            self.restore_previous();
            return;
        }
        match Font::from_name(name) {
            Some(font) => self.select(font),
            None => {
                log::debug!("unknown font {name:?}, using roman");
                self.select(Font::Roman);
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
