//! Farbtypen für abgetastete Pixel: `Rgb` und die geordnete `SampleSet`.

use serde::{Deserialize, Serialize};

/// Ein RGB-Farbwert ohne Alpha.
///
/// Serialisiert als `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Erstellt eine Farbe aus den drei Kanälen.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Rot-Kanal
    pub fn r(self) -> u8 {
        self.0[0]
    }

    /// Grün-Kanal
    pub fn g(self) -> u8 {
        self.0[1]
    }

    /// Blau-Kanal
    pub fn b(self) -> u8 {
        self.0[2]
    }
}

/// Geordnete Farbproben entlang der Kurve (Index 0 = Kurvenanfang).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    colors: Vec<Rgb>,
}

impl SampleSet {
    /// Erstellt eine SampleSet aus bereits abgetasteten Farben.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Anzahl der Proben
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Gibt `true` zurück, wenn keine Proben vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Read-only Sicht auf alle Farben in Proben-Reihenfolge.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Iterator über alle Farben in Proben-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }
}

impl FromIterator<Rgb> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_serializes_as_plain_triple() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[test]
    fn sample_set_serializes_as_array_of_triples() {
        let set: SampleSet = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            "[[255,0,0],[0,0,255]]"
        );
    }
}
