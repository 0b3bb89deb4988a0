//! Label measurement with `fontdue`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use fontdue::{Font, FontSettings};

use super::providers::{FontFamily, FontStyle, LabelFont, TextMeasurer};

/// [`TextMeasurer`] backed by `fontdue` line metrics.
///
/// A label's preferred height is the font's ascent-to-descent span at the
/// requested size, rounded up. Faces are looked up by family and style; a
/// missing style falls back to the family's regular face, and a missing
/// family to the primary face.
pub struct FontdueMeasurer {
    primary: Font,
    faces: HashMap<(FontFamily, FontStyle), Font>,
}

impl FontdueMeasurer {
    pub fn new(primary: Font) -> Self {
        Self {
            primary,
            faces: HashMap::new(),
        }
    }

    /// Parses TTF/OTF bytes as the primary face.
    pub fn from_bytes(data: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::new(parse_font(data)?))
    }

    /// Reads and parses a font file as the primary face.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .with_context(|| format!("reading font file {}", path.display()))?;
        parse_font(&data)
            .with_context(|| format!("parsing font file {}", path.display()))
            .map(Self::new)
    }

    /// Registers a dedicated face for `family` in `style`.
    pub fn register(
        &mut self,
        family: FontFamily,
        style: FontStyle,
        data: &[u8],
    ) -> anyhow::Result<()> {
        let font =
            parse_font(data).with_context(|| format!("registering {family:?} {style:?}"))?;
        self.faces.insert((family, style), font);
        Ok(())
    }

    fn face_for(&self, font: &LabelFont) -> &Font {
        self.faces
            .get(&(font.family, font.style))
            .or_else(|| self.faces.get(&(font.family, FontStyle::Regular)))
            .unwrap_or(&self.primary)
    }
}

fn parse_font(data: &[u8]) -> anyhow::Result<Font> {
    Font::from_bytes(data, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("invalid font data: {e}"))
}

impl TextMeasurer for FontdueMeasurer {
    fn preferred_height(&self, _text: &str, font: &LabelFont) -> u32 {
        let px = font.size.max(1.0);
        match self.face_for(font).horizontal_line_metrics(px) {
            // descent is negative
            Some(lm) => (lm.ascent - lm.descent).ceil().max(1.0) as u32,
            None => px.ceil() as u32,
        }
    }
}

impl std::fmt::Debug for FontdueMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueMeasurer")
            .field("faces", &self.faces.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tabs_measure.rs"]
mod tests;
