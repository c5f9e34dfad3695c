/// Measures the rendered width of a label, in pixels.
///
/// Hosts with access to real font metrics plug their own implementation; the
/// engine falls back to [`EstimatedTextMeasurer`].
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> f64,
{
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        self(text, font_size_px)
    }
}

/// Per-glyph width heuristic tuned for proportional sans-serif faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        estimate_label_text_width_px(text, font_size_px)
    }
}

#[must_use]
pub fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return 0.0;
    }
    let mut width_factor = 0.0;
    for ch in text.chars() {
        width_factor += match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' | '/' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        };
    }
    (width_factor * font_size_px).max(font_size_px)
}
