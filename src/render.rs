use crate::types::CuttingPattern;

const MAX_WIDTH: f64 = 80.0;

/// Renders one cutting pattern as a segmented ASCII bar. Cut segments carry
/// their length as a centered label; the waste tail is left blank.
pub fn render_pattern(pattern: &CuttingPattern) -> String {
    let scale = MAX_WIDTH / pattern.stock;
    let grid_w = (pattern.stock * scale).round() as usize;

    if grid_w == 0 {
        return String::new();
    }

    // Column of each cut boundary, plus the ends of the stock piece.
    let mut bounds = vec![0usize];
    let mut offset = 0.0;
    for &cut in &pattern.cuts {
        offset += cut;
        bounds.push(((offset * scale).round() as usize).min(grid_w));
    }

    let mut top = vec!['-'; grid_w + 1];
    let mut mid = vec![' '; grid_w + 1];
    let mut bottom = vec!['-'; grid_w + 1];

    for &b in bounds.iter().chain(std::iter::once(&grid_w)) {
        top[b] = '+';
        mid[b] = '|';
        bottom[b] = '+';
    }

    // Segment labels, skipped where the segment is too narrow.
    for (i, &cut) in pattern.cuts.iter().enumerate() {
        let (start, end) = (bounds[i], bounds[i + 1]);
        let label: Vec<char> = format!("{cut}").chars().collect();

        if end > start && end - start > label.len() + 1 {
            let pad = (end - start - label.len()) / 2;
            for (k, &ch) in label.iter().enumerate() {
                let x = start + pad + k;
                if x > start && x < end {
                    mid[x] = ch;
                }
            }
        }
    }

    let mut result = String::new();
    for row in [&top, &mid, &bottom] {
        let line: String = row.iter().collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_cut() {
        let pattern = CuttingPattern {
            stock: 10.0,
            cuts: vec![10.0],
        };
        let output = render_pattern(&pattern);
        assert!(output.contains('+'));
        assert!(output.contains('-'));
        assert!(output.contains('|'));
        assert!(output.contains("10"));
    }

    #[test]
    fn test_render_cuts_and_waste() {
        let pattern = CuttingPattern {
            stock: 11.0,
            cuts: vec![5.0, 2.0, 2.0, 2.0],
        };
        let output = render_pattern(&pattern);
        assert!(output.contains('5'));
        assert!(output.contains('2'));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_render_fractional_label() {
        let pattern = CuttingPattern {
            stock: 5.0,
            cuts: vec![2.5],
        };
        let output = render_pattern(&pattern);
        assert!(output.contains("2.5"));
    }

    #[test]
    fn test_render_narrow_segment_skips_label() {
        // 100 cuts of 1 on a stock of 100: under a character each, so no
        // labels, but the bar itself still renders.
        let pattern = CuttingPattern {
            stock: 100.0,
            cuts: vec![1.0; 100],
        };
        let output = render_pattern(&pattern);
        assert!(output.contains('+'));
        assert!(!output.contains('1'));
    }
}
