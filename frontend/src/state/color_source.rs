//! Slice colors for the donut chart.
//!
//! Colors come from a `ColorSource` so the page can draw random colors while
//! tests feed a fixed sequence.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub trait ColorSource {
    /// Next color as `#RRGGBB`.
    fn next_color(&mut self) -> String;
}

/// Build a `#RRGGBB` color from six uniform samples in `[0, 1)`.
pub fn color_from_samples<F>(mut sample: F) -> String
where
    F: FnMut() -> f64,
{
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        let index = ((sample() * 16.0).floor() as usize).min(15);
        color.push(HEX_DIGITS[index] as char);
    }
    color
}

/// Non-cryptographic random colors backed by the browser's `Math.random()`.
/// Repeats across calls are possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColorSource;

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> String {
        color_from_samples(js_sys::Math::random)
    }
}

/// Hands out a fixed list of colors in order, wrapping around at the end.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequenceColorSource {
    colors: Vec<String>,
    next: usize,
}

#[cfg(test)]
impl SequenceColorSource {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        Self { colors, next: 0 }
    }
}

#[cfg(test)]
impl ColorSource for SequenceColorSource {
    fn next_color(&mut self) -> String {
        if self.colors.is_empty() {
            return "#000000".to_string();
        }
        let color = self.colors[self.next % self.colors.len()].clone();
        self.next += 1;
        color
    }
}

/// Parse `#RRGGBB` into its channels.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    #[test]
    fn test_color_from_samples_maps_each_sample_to_one_digit() {
        let mut samples = vec![0.0, 0.0625, 0.5, 0.75, 0.9375, 0.999_999].into_iter();
        let color = color_from_samples(|| samples.next().unwrap());
        assert_eq!(color, "#018CFF");
    }

    #[test]
    fn test_color_from_samples_is_well_formed() {
        let mut x = 0.123_f64;
        for _ in 0..50 {
            let color = color_from_samples(|| {
                x = (x * 7.77).fract();
                x
            });
            assert!(is_hex_color(&color), "bad color {}", color);
        }
    }

    #[test]
    fn test_sample_of_one_is_clamped_to_f() {
        assert_eq!(color_from_samples(|| 1.0), "#FFFFFF");
    }

    #[test]
    fn test_sequence_source_wraps() {
        let mut source = SequenceColorSource::new(["#111111", "#222222"]);
        assert_eq!(source.next_color(), "#111111");
        assert_eq!(source.next_color(), "#222222");
        assert_eq!(source.next_color(), "#111111");
    }

    #[test]
    fn test_empty_sequence_source_falls_back_to_black() {
        let mut source = SequenceColorSource::new(Vec::<String>::new());
        assert_eq!(source.next_color(), "#000000");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#27AE60"), Some((0x27, 0xAE, 0x60)));
        assert_eq!(hex_to_rgb("#ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("27AE60"), None);
        assert_eq!(hex_to_rgb("#27AE6"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
    }
}
