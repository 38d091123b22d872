//! ASCII-art glyphs for weather conditions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Cloud,
    Rain,
    Snow,
    Thunder,
}

/// Checked in order, so "thunderstorm with light rain" is thunder, not rain.
const KEYWORDS: &[(&str, Glyph)] = &[
    ("thunder", Glyph::Thunder),
    ("snow", Glyph::Snow),
    ("rain", Glyph::Rain),
    ("sun", Glyph::Sun),
    ("clear", Glyph::Sun),
];

const SUN: &str = r"
      \   /
       .-.
    ‒ (   ) ‒
       .-.
      /   \
";

const CLOUD: &str = r"
        .--.
     .-(    ).
    (___.__)__)
";

const RAIN: &str = r"
        .--.
     .-(    ).
    (___.__)__)
     ʻ‚ʻ‚ʻ‚ʻ‚ʻ
";

const SNOW: &str = r"
        .--.
     .-(    ).
    (___.__)__)
     * * * * *
";

const THUNDER: &str = r"
        .--.
     .-(    ).
    (___.__)__)
         /_
          /
";

impl Glyph {
    /// Pick the glyph for a provider description; unknown conditions get a cloud.
    pub fn for_description(description: &str) -> Self {
        let lower = description.to_lowercase();

        KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, glyph)| *glyph)
            .unwrap_or(Glyph::Cloud)
    }

    pub fn art(&self) -> &'static str {
        match self {
            Glyph::Sun => SUN,
            Glyph::Cloud => CLOUD,
            Glyph::Rain => RAIN,
            Glyph::Snow => SNOW,
            Glyph::Thunder => THUNDER,
        }
    }
}
