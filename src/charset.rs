#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub bar_filled: char,
    pub bar_empty: char,
    pub chart_axis: char,
    pub chart_bar: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            bar_filled: '#',
            bar_empty: '.',
            chart_axis: '|',
            chart_bar: '+',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            bar_filled: '\u{2588}',
            bar_empty: '\u{2591}',
            chart_axis: '\u{2502}',
            chart_bar: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
