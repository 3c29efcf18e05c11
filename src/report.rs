pub const DEFAULT_HISTOGRAM_WIDTH: usize = 15;
pub const DEFAULT_HISTOGRAM_MARKER: char = '*';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistogramStyle {
    /// Minimum column width the item name is left-aligned in.
    pub width: usize,
    pub marker: char,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_HISTOGRAM_WIDTH,
            marker: DEFAULT_HISTOGRAM_MARKER,
        }
    }
}

/// One `"<name> <count>"` line per entry. The backup file uses the same format.
pub fn render_list<'a, I>(entries: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = (&'a str, u64)>,
    I::IntoIter: 'a,
{
    entries
        .into_iter()
        .map(|(name, count)| format!("{} {}", name, count))
}

/// One line per entry: the padded name, a space, then `count` markers.
pub fn render_histogram<'a, I>(entries: I, style: HistogramStyle) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = (&'a str, u64)>,
    I::IntoIter: 'a,
{
    entries.into_iter().map(move |(name, count)| {
        let bar: String = std::iter::repeat(style.marker).take(count as usize).collect();
        format!("{:<width$} {}", name, bar, width = style.width)
    })
}
