//! Ausgabeformate einer SampleSet: CSS-Verlauf und RGB-Array.

use super::SampleSet;

/// Standard-Richtung des CSS-Verlaufs.
pub const DEFAULT_GRADIENT_DIRECTION: &str = "to right";

/// Baut einen CSS-`linear-gradient(...)` mit einem Farbstopp je Probe.
///
/// Keine Stopp-Positionen: der Verbraucher verteilt die Stopps gleichmäßig.
pub fn css_linear_gradient(samples: &SampleSet, direction: &str) -> String {
    let stops: Vec<String> = samples
        .iter()
        .map(|c| format!("rgb({}, {}, {})", c.r(), c.g(), c.b()))
        .collect();
    format!("linear-gradient({}, {})", direction, stops.join(", "))
}

/// Serialisiert die Proben als JSON-Array von `[r,g,b]`-Tripeln.
pub fn rgb_array_json(samples: &SampleSet) -> serde_json::Result<String> {
    serde_json::to_string(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgb;

    fn red_blue() -> SampleSet {
        SampleSet::new(vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)])
    }

    #[test]
    fn test_css_gradient_matches_browser_format() {
        assert_eq!(
            css_linear_gradient(&red_blue(), DEFAULT_GRADIENT_DIRECTION),
            "linear-gradient(to right, rgb(255, 0, 0), rgb(0, 0, 255))"
        );
    }

    #[test]
    fn test_css_gradient_custom_direction_keeps_order() {
        let samples = SampleSet::new(vec![
            Rgb::new(1, 2, 3),
            Rgb::new(4, 5, 6),
            Rgb::new(7, 8, 9),
        ]);
        assert_eq!(
            css_linear_gradient(&samples, "45deg"),
            "linear-gradient(45deg, rgb(1, 2, 3), rgb(4, 5, 6), rgb(7, 8, 9))"
        );
    }

    #[test]
    fn test_rgb_array_json() {
        assert_eq!(rgb_array_json(&red_blue()).unwrap(), "[[255,0,0],[0,0,255]]");
    }
}
