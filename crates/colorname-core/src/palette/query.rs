//! Palette lookup functions
//!
//! Exact lookups by label or by color. Nearest-color search lives in
//! `colorname-match`.

use super::{Palette, ReferenceColor};
use crate::rgb::Rgb;
use std::collections::HashMap;

impl Palette {
    /// Find the first entry whose name matches `name`, ignoring case and
    /// surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &ReferenceColor)> {
        let wanted = name.trim();
        self.colors
            .iter()
            .enumerate()
            .find(|(_, c)| c.name().eq_ignore_ascii_case(wanted))
    }

    /// Index of the first entry with exactly this color.
    pub fn exact_index(&self, rgb: Rgb) -> Option<usize> {
        self.colors.iter().position(|c| c.rgb() == rgb)
    }

    /// Names that occur more than once, in order of first appearance.
    ///
    /// Duplicates are legal; this is a diagnostic for source data review.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for c in &self.colors {
            *counts.entry(c.name()).or_default() += 1;
        }

        let mut out = Vec::new();
        for c in &self.colors {
            let name = c.name();
            if counts.get(name).copied().unwrap_or(0) > 1 && !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::palette::{Palette, PaletteRow};
    use crate::rgb::Rgb;

    fn sample() -> Palette {
        Palette::load(vec![
            PaletteRow::new("Red", 255, 0, 0),
            PaletteRow::new("Crimson", 220, 20, 60),
            PaletteRow::new("red", 254, 0, 0),
            PaletteRow::new("Scarlet", 255, 0, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_name_first_seen() {
        let p = sample();
        let (idx, c) = p.find_by_name(" RED ").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(c.name(), "Red");
        assert!(p.find_by_name("blue").is_none());
    }

    #[test]
    fn test_exact_index_first_seen() {
        let p = sample();
        assert_eq!(p.exact_index(Rgb::new(255, 0, 0)), Some(0));
        assert_eq!(p.exact_index(Rgb::new(220, 20, 60)), Some(1));
        assert_eq!(p.exact_index(Rgb::new(1, 2, 3)), None);
    }

    #[test]
    fn test_duplicate_names() {
        let p = Palette::load(vec![
            PaletteRow::new("a", 0, 0, 0),
            PaletteRow::new("b", 1, 1, 1),
            PaletteRow::new("a", 2, 2, 2),
            PaletteRow::new("b", 3, 3, 3),
            PaletteRow::new("c", 4, 4, 4),
        ])
        .unwrap();
        assert_eq!(p.duplicate_names(), vec!["a", "b"]);
        assert!(sample().duplicate_names().is_empty());
    }
}
