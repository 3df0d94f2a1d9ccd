//! Chip Vocabulary and List
//!
//! Pure state behind the chip-style tag input: the fixed autocomplete
//! vocabulary, color resolution, prefix filtering, and the ordered chip list.

/// Display color category for a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipColor {
    Blue,
    Yellow,
    Red,
    Green,
}

impl ChipColor {
    /// CSS class used by the chip row and the suggestion dropdown
    pub fn css_class(self) -> &'static str {
        match self {
            ChipColor::Blue => "blue-chip",
            ChipColor::Yellow => "yellow-chip",
            ChipColor::Red => "red-chip",
            ChipColor::Green => "green-chip",
        }
    }
}

/// A labeled token in the chip editor
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub name: String,
    pub color: ChipColor,
}

/// The ten predefined suggestions offered by autocomplete
pub const ALL_CHIPS: &[(&str, ChipColor)] = &[
    ("Att:", ChipColor::Blue),
    ("Date:", ChipColor::Blue),
    ("Details:", ChipColor::Blue),
    ("Frame:", ChipColor::Blue),
    ("Text:", ChipColor::Blue),
    ("Split:", ChipColor::Yellow),
    ("SubStr:", ChipColor::Yellow),
    ("Up:", ChipColor::Yellow),
    ("Replace:", ChipColor::Yellow),
    ("&", ChipColor::Red),
];

/// Map a chip label to its display color. The lookup is exact and
/// case-sensitive; anything unknown (free text typed by the user) is green.
pub fn resolve_color(text: &str) -> ChipColor {
    match text {
        "Att:" | "Date:" | "Details:" | "Frame:" | "Text:" => ChipColor::Blue,
        "SubStr:" | "Split:" | "Up:" | "Replace:" => ChipColor::Yellow,
        "&" => ChipColor::Red,
        _ => ChipColor::Green,
    }
}

/// Case-insensitive prefix filter over the vocabulary. Empty input returns
/// every entry in its original order. Recomputed fresh on each keystroke.
pub fn filter_chips(input: &str) -> Vec<Chip> {
    let needle = input.to_lowercase();
    ALL_CHIPS
        .iter()
        .filter(|(name, _)| name.to_lowercase().starts_with(needle.as_str()))
        .map(|(name, color)| Chip {
            name: (*name).to_string(),
            color: *color,
        })
        .collect()
}

/// Ordered chip list. Insertion order is significant and duplicates are
/// allowed; chips live only as long as the dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChipList {
    chips: Vec<Chip>,
}

impl ChipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chip from raw typed input. Trims first; whitespace-only
    /// input appends nothing. The caller clears the input field either way.
    pub fn add(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.chips.push(Chip {
                name: trimmed.to_string(),
                color: resolve_color(trimmed),
            });
        }
    }

    /// Append a chip from an autocomplete selection
    pub fn select(&mut self, name: &str) {
        self.chips.push(Chip {
            name: name.to_string(),
            color: resolve_color(name),
        });
    }

    /// Remove the first chip equal to `chip`; no-op when absent
    pub fn remove(&mut self, chip: &Chip) {
        if let Some(pos) = self.chips.iter().position(|c| c == chip) {
            self.chips.remove(pos);
        }
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color_known_keywords() {
        for name in ["Att:", "Date:", "Details:", "Frame:", "Text:"] {
            assert_eq!(resolve_color(name), ChipColor::Blue);
        }
        for name in ["SubStr:", "Split:", "Up:", "Replace:"] {
            assert_eq!(resolve_color(name), ChipColor::Yellow);
        }
        assert_eq!(resolve_color("&"), ChipColor::Red);
    }

    #[test]
    fn test_resolve_color_defaults_to_green() {
        assert_eq!(resolve_color(""), ChipColor::Green);
        // lookup is case-sensitive
        assert_eq!(resolve_color("att:"), ChipColor::Green);
        assert_eq!(resolve_color("Total"), ChipColor::Green);
    }

    #[test]
    fn test_filter_empty_input_returns_full_vocabulary() {
        let chips = filter_chips("");
        assert_eq!(chips.len(), 10);
        assert_eq!(chips[0].name, "Att:");
        assert_eq!(chips[9].name, "&");
    }

    #[test]
    fn test_filter_is_case_insensitive_prefix() {
        let chips = filter_chips("up");
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].name, "Up:");
        assert_eq!(chips[0].color, ChipColor::Yellow);

        let names: Vec<_> = filter_chips("s").iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Split:", "SubStr:"]);

        // prefix match, not substring
        assert!(filter_chips("tr").is_empty());
    }

    #[test]
    fn test_add_trims_and_skips_blank() {
        let mut list = ChipList::new();
        list.add("   ");
        assert!(list.chips().is_empty());

        list.add("  Date:  ");
        assert_eq!(list.chips().len(), 1);
        assert_eq!(
            list.chips()[0],
            Chip {
                name: "Date:".to_string(),
                color: ChipColor::Blue,
            }
        );
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut list = ChipList::new();
        list.add("Frame:");
        let before = list.clone();

        list.add("Up:");
        let added = list.chips().last().cloned().unwrap();
        list.remove(&added);
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_first_duplicate_only() {
        let mut list = ChipList::new();
        list.select("&");
        list.select("Text:");
        list.select("&");

        list.remove(&Chip {
            name: "&".to_string(),
            color: ChipColor::Red,
        });
        assert_eq!(list.chips().len(), 2);
        assert_eq!(list.chips()[0].name, "Text:");
        assert_eq!(list.chips()[1].name, "&");

        // removing something absent is a no-op
        list.remove(&Chip {
            name: "missing".to_string(),
            color: ChipColor::Green,
        });
        assert_eq!(list.chips().len(), 2);
    }

    #[test]
    fn test_select_resolves_color() {
        let mut list = ChipList::new();
        list.select("Replace:");
        list.select("my custom tag");
        assert_eq!(list.chips()[0].color, ChipColor::Yellow);
        assert_eq!(list.chips()[1].color, ChipColor::Green);
    }
}
