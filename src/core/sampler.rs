//! Sampler: gleichmäßig nach Bogenlänge verteilte Punkte entlang der
//! gerenderten Kurve und deren Farbwerte im Quellbild.

use glam::Vec2;

use super::overlay::display_to_pixel;
use super::{Curve, Rgb, SampleSet, SourceImage};
use crate::shared::spline_geometry::{flatten, ArcLengthTable, InterpolationStyle};

/// Mindestanzahl an Proben (Start- und Endpunkt).
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Ergebnis eines Abtastlaufs.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    /// Abtastpunkte in Anzeige-Koordinaten
    pub points: Vec<Vec2>,
    /// Farben in derselben Reihenfolge
    pub colors: SampleSet,
}

/// Parameter, mit denen die Kurve gerendert und abgetastet wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    /// Anzahl der Proben (mindestens 2)
    pub sample_count: usize,
    /// Interpolationsart der Kurve
    pub interpolation: InterpolationStyle,
    /// Dichte der Polyline je Kurvensegment
    pub samples_per_segment: usize,
}

/// Verteilt `count` Punkte gleichmäßig nach Bogenlänge über den Pfad.
///
/// Punkt `i` liegt bei `i / (count - 1) * total_length`, inklusive beider
/// Endpunkte. Leerer Pfad → leere Liste.
pub fn sample_path_points(path: &ArcLengthTable, count: usize) -> Vec<Vec2> {
    let count = count.max(MIN_SAMPLE_COUNT);
    let total = path.total_length();
    (0..count)
        .filter_map(|i| path.point_at_length(i as f32 / (count - 1) as f32 * total))
        .collect()
}

/// Liest die Farbe unter jedem Anzeigepunkt.
///
/// `extent` ist die aktuelle Overlay-Ausdehnung, gegen die skaliert wird.
pub fn sample_colors(image: &SourceImage, points: &[Vec2], extent: Vec2) -> SampleSet {
    points
        .iter()
        .map(|&point| {
            let [x, y] = display_to_pixel(point, extent, image.size());
            // display_to_pixel klemmt auf das Bild, daher immer Some
            image.pixel_rgb(x, y).unwrap_or_default()
        })
        .collect()
}

/// Rendert die Kurve und tastet sie ab.
///
/// `None` bei weniger als zwei Kontrollpunkten (kein Fehler).
pub fn sample_curve(
    curve: &Curve,
    image: &SourceImage,
    extent: Vec2,
    settings: SamplerSettings,
) -> Option<CurveSamples> {
    if curve.len() < 2 {
        return None;
    }

    let polyline = flatten(
        &curve.positions(),
        settings.interpolation,
        settings.samples_per_segment,
    );
    let path = ArcLengthTable::new(polyline);
    let points = sample_path_points(&path, settings.sample_count);
    let colors = sample_colors(image, &points, extent);

    Some(CurveSamples { points, colors })
}

/// Liefert die Farbe eines einzelnen Anzeigepunkts (Statusleiste/Pipette).
pub fn color_at(image: &SourceImage, point: Vec2, extent: Vec2) -> Option<Rgb> {
    let [x, y] = display_to_pixel(point, extent, image.size());
    image.pixel_rgb(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{Rgba, RgbaImage};

    fn settings(count: usize, style: InterpolationStyle) -> SamplerSettings {
        SamplerSettings {
            sample_count: count,
            interpolation: style,
            samples_per_segment: 32,
        }
    }

    fn red_blue_image() -> SourceImage {
        let mut pixels = RgbaImage::new(2, 1);
        pixels.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        pixels.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        SourceImage::from_rgba(pixels, "red-blue").unwrap()
    }

    fn wavy_curve() -> Curve {
        Curve::from_positions([
            Vec2::new(10.0, 80.0),
            Vec2::new(60.0, 20.0),
            Vec2::new(120.0, 90.0),
            Vec2::new(190.0, 30.0),
        ])
    }

    #[test]
    fn test_sample_count_and_endpoints() {
        let curve = wavy_curve();
        for count in [2usize, 3, 7, 50, 200] {
            let polyline = flatten(&curve.positions(), InterpolationStyle::CatmullRom, 32);
            let path = ArcLengthTable::new(polyline);
            let points = sample_path_points(&path, count);

            assert_eq!(points.len(), count);
            assert!(points[0].distance(Vec2::new(10.0, 80.0)) < 1e-3);
            assert!(points[count - 1].distance(Vec2::new(190.0, 30.0)) < 1e-3);
        }
    }

    #[test]
    fn test_samples_are_equally_spaced_by_arc_length() {
        let polyline = flatten(&wavy_curve().positions(), InterpolationStyle::Natural, 32);
        let path = ArcLengthTable::new(polyline.clone());
        let count = 9;
        let spacing = path.total_length() / (count - 1) as f32;

        // Bogenlänge jedes Probepunkts über die Projektion auf die Polyline
        let arc_position = |p: Vec2| -> f32 {
            let mut running = 0.0;
            let mut best = (f32::MAX, 0.0);
            for w in polyline.windows(2) {
                let seg = w[1] - w[0];
                let len = seg.length();
                let t = if len > 0.0 {
                    ((p - w[0]).dot(seg) / (len * len)).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let d = p.distance(w[0] + seg * t);
                if d < best.0 {
                    best = (d, running + t * len);
                }
                running += len;
            }
            best.1
        };

        let points = sample_path_points(&path, count);
        for pair in points.windows(2) {
            let gap = arc_position(pair[1]) - arc_position(pair[0]);
            assert_relative_eq!(gap, spacing, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_fewer_than_two_points_is_noop() {
        let image = red_blue_image();
        let curve = Curve::from_positions([Vec2::new(5.0, 5.0)]);
        let extent = Vec2::new(100.0, 50.0);
        assert!(sample_curve(&curve, &image, extent, settings(10, InterpolationStyle::CatmullRom)).is_none());
        assert!(sample_curve(&Curve::new(), &image, extent, settings(10, InterpolationStyle::CatmullRom)).is_none());
    }

    #[test]
    fn test_red_blue_end_to_end() {
        let image = red_blue_image();
        let extent = Vec2::new(100.0, 50.0);
        let curve = Curve::from_positions([Vec2::new(0.0, 25.0), Vec2::new(100.0, 25.0)]);

        let result = sample_curve(&curve, &image, extent, settings(2, InterpolationStyle::CatmullRom))
            .unwrap();
        assert_eq!(
            result.colors.colors(),
            &[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_sampling_is_idempotent() {
        let image = red_blue_image();
        let extent = Vec2::new(200.0, 100.0);
        let curve = wavy_curve();
        let s = settings(25, InterpolationStyle::CatmullRom);

        let first = sample_curve(&curve, &image, extent, s).unwrap();
        let second = sample_curve(&curve, &image, extent, s).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_length_path_samples_one_spot() {
        let image = red_blue_image();
        let curve = Curve::from_positions([Vec2::new(80.0, 10.0), Vec2::new(80.0, 10.0)]);
        let result = sample_curve(
            &curve,
            &image,
            Vec2::new(100.0, 50.0),
            settings(4, InterpolationStyle::Linear),
        )
        .unwrap();
        assert_eq!(result.points.len(), 4);
        assert!(result.colors.iter().all(|&c| c == Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_color_at_uses_live_extent() {
        let image = red_blue_image();
        let point = Vec2::new(60.0, 0.0);
        assert_eq!(color_at(&image, point, Vec2::new(100.0, 50.0)), Some(Rgb::new(0, 0, 255)));
        assert_eq!(color_at(&image, point, Vec2::new(200.0, 50.0)), Some(Rgb::new(255, 0, 0)));
    }
}
