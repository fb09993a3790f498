/// Rows the preview screen spends outside the document: a four-row header,
/// a four-row footer and the two border rows of the main panel.
pub const PREVIEW_CHROME_ROWS: usize = 10;
pub const MIN_VIEWPORT_HEIGHT: usize = 5;
pub const FALLBACK_VIEWPORT_HEIGHT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewWindow<'a> {
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub lines: Vec<&'a str>,
}

pub fn viewport_height(terminal_height: u16) -> usize {
    let height = usize::from(terminal_height).saturating_sub(PREVIEW_CHROME_ROWS);
    if height < MIN_VIEWPORT_HEIGHT {
        FALLBACK_VIEWPORT_HEIGHT
    } else {
        height
    }
}

pub fn clamp_scroll(offset: usize, line_count: usize) -> usize {
    if line_count == 0 {
        return 0;
    }
    offset.min(line_count - 1)
}

/// Slice of `text` visible at `offset`, clamped into the text first.
pub fn visible_window(text: &str, offset: usize, height: usize) -> PreviewWindow<'_> {
    let all: Vec<&str> = text.split('\n').collect();
    let total = all.len();
    let start = clamp_scroll(offset, total);
    let end = start.saturating_add(height).min(total);
    PreviewWindow {
        start,
        end,
        total,
        lines: all[start..end].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_terminals_fall_back_to_fixed_height() {
        assert_eq!(viewport_height(0), FALLBACK_VIEWPORT_HEIGHT);
        assert_eq!(viewport_height(14), FALLBACK_VIEWPORT_HEIGHT);
        assert_eq!(viewport_height(15), 5);
        assert_eq!(viewport_height(50), 40);
    }

    #[test]
    fn window_clamps_overshooting_offset_to_last_line() {
        let text = "a\nb\nc";
        let window = visible_window(text, 99, 10);
        assert_eq!(window.start, 2);
        assert_eq!(window.lines, vec!["c"]);
    }

    #[test]
    fn window_never_exceeds_viewport() {
        let text = (0..40).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let window = visible_window(&text, 3, 5);
        assert_eq!(window.lines.len(), 5);
        assert_eq!(window.lines[0], "3");
        assert_eq!(window.end, 8);
    }
}
