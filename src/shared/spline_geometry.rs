//! Reine Geometrie-Funktionen für die gerenderte Kurve.
//!
//! Layer-neutral: wird von `core::sampler`, `app` und der UI genutzt, ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Interpolationsart der Kurve durch die Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationStyle {
    /// Zentripetale Catmull-Rom-Spline (α = 0.5)
    #[default]
    CatmullRom,
    /// Natürlicher kubischer Spline (zweite Ableitung an den Enden = 0)
    Natural,
    /// Gerade Segmente zwischen den Punkten
    Linear,
}

impl InterpolationStyle {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [InterpolationStyle; 3] = [Self::CatmullRom, Self::Natural, Self::Linear];

    /// Anzeigename für die UI
    pub fn label(self) -> &'static str {
        match self {
            Self::CatmullRom => "Catmull-Rom",
            Self::Natural => "Natural spline",
            Self::Linear => "Linear",
        }
    }
}

/// Exponent der Knotenabstände (0.5 = zentripetal).
const CATMULL_ROM_ALPHA: f32 = 0.5;

/// Abstände unterhalb dieser Schwelle gelten als doppelter Punkt.
const KNOT_EPSILON: f32 = 1e-6;

/// Punkt auf einer kubischen Bézier-Kurve (t ∈ [0, 1]).
pub fn cubic_bezier_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * c1 + 3.0 * u * t * t * c2 + t * t * t * p3
}

/// Knotenabstand `|b - a|^α` und dessen Quadrat `|b - a|^2α`.
fn knot_spacing(a: Vec2, b: Vec2) -> (f32, f32) {
    let l_2a = a.distance_squared(b).powf(CATMULL_ROM_ALPHA);
    (l_2a.sqrt(), l_2a)
}

/// Bézier-Kontrollpunkte des zentripetalen Catmull-Rom-Segments p1 → p2.
///
/// Fehlt ein Nachbar (`None`) oder fällt er mit dem Segmentende zusammen,
/// liegt der zugehörige Kontrollpunkt auf dem Segmentende.
pub fn catmull_rom_controls(
    p0: Option<Vec2>,
    p1: Vec2,
    p2: Vec2,
    p3: Option<Vec2>,
) -> (Vec2, Vec2) {
    let (l12_a, l12_2a) = knot_spacing(p1, p2);

    let c1 = match p0.map(|p0| (p0, knot_spacing(p0, p1))) {
        Some((p0, (l01_a, l01_2a))) if l01_a > KNOT_EPSILON => {
            let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
            let n = 3.0 * l01_a * (l01_a + l12_a);
            (p1 * a - p0 * l12_2a + p2 * l01_2a) / n
        }
        _ => p1,
    };

    let c2 = match p3.map(|p3| (p3, knot_spacing(p2, p3))) {
        Some((p3, (l23_a, l23_2a))) if l23_a > KNOT_EPSILON => {
            let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
            let m = 3.0 * l23_a * (l23_a + l12_a);
            (p2 * b + p1 * l23_2a - p3 * l12_2a) / m
        }
        _ => p2,
    };

    (c1, c2)
}

/// Gerade Linie mit `samples_per_segment + 1` Punkten.
fn straight_segment(a: Vec2, b: Vec2, samples_per_segment: usize) -> Vec<Vec2> {
    (0..=samples_per_segment)
        .map(|i| a.lerp(b, i as f32 / samples_per_segment as f32))
        .collect()
}

/// Berechnet eine dichte Punktliste entlang einer zentripetalen Catmull-Rom-Spline durch `points`.
///
/// Rand-Segmente haben keinen äußeren Nachbarn; dort liegt der Kontrollpunkt
/// auf dem Endpunkt, die Kurve läuft also ohne Überschwingen in ihn hinein.
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn catmull_rom_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let samples_per_segment = samples_per_segment.max(1);
    if points.len() < 2 {
        return points.to_vec();
    }
    if points.len() == 2 {
        // Gerade Linie, kein Spline nötig
        return straight_segment(points[0], points[1], samples_per_segment);
    }

    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        let p0 = seg.checked_sub(1).map(|i| points[i]);
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = points.get(seg + 2).copied();
        let (c1, c2) = catmull_rom_controls(p0, p1, p2, p3);

        let steps = if seg == n - 2 {
            samples_per_segment + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples_per_segment
        };

        for i in 0..steps {
            let t = i as f32 / samples_per_segment as f32;
            result.push(cubic_bezier_point(p1, c1, c2, p2, t));
        }
    }

    result
}

/// Zweite Ableitungen eines natürlichen kubischen Splines (uniforme Parameter).
///
/// Löst `M[i-1] + 4·M[i] + M[i+1] = 6·(P[i+1] - 2·P[i] + P[i-1])` mit
/// `M[0] = M[n-1] = 0` per Thomas-Algorithmus, komponentenweise auf `Vec2`.
fn natural_second_derivatives(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    let mut m = vec![Vec2::ZERO; n];
    if n < 3 {
        return m;
    }

    let k = n - 2;
    let mut c_prime = vec![0.0f32; k];
    let mut d_prime = vec![Vec2::ZERO; k];

    for j in 0..k {
        let i = j + 1;
        let rhs = 6.0 * (points[i + 1] - 2.0 * points[i] + points[i - 1]);
        if j == 0 {
            c_prime[0] = 0.25;
            d_prime[0] = rhs * 0.25;
        } else {
            let denom = 4.0 - c_prime[j - 1];
            c_prime[j] = 1.0 / denom;
            d_prime[j] = (rhs - d_prime[j - 1]) / denom;
        }
    }

    m[k] = d_prime[k - 1];
    for j in (0..k - 1).rev() {
        m[j + 1] = d_prime[j] - c_prime[j] * m[j + 2];
    }
    m
}

/// Dichte Punktliste entlang eines natürlichen kubischen Splines durch `points`.
pub fn natural_spline_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let samples_per_segment = samples_per_segment.max(1);
    if points.len() < 2 {
        return points.to_vec();
    }
    if points.len() == 2 {
        return straight_segment(points[0], points[1], samples_per_segment);
    }

    let n = points.len();
    let m = natural_second_derivatives(points);
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        let (p1, p2) = (points[seg], points[seg + 1]);
        let (m1, m2) = (m[seg], m[seg + 1]);

        let steps = if seg == n - 2 {
            samples_per_segment + 1
        } else {
            samples_per_segment
        };

        for i in 0..steps {
            let t = i as f32 / samples_per_segment as f32;
            let u = 1.0 - t;
            result.push(
                u * p1 + t * p2 + ((u * u * u - u) * m1 + (t * t * t - t) * m2) / 6.0,
            );
        }
    }

    result
}

/// Berechnet die gerenderte Kurve als dichte Polyline.
pub fn flatten(points: &[Vec2], style: InterpolationStyle, samples_per_segment: usize) -> Vec<Vec2> {
    match style {
        InterpolationStyle::CatmullRom => catmull_rom_chain(points, samples_per_segment),
        InterpolationStyle::Natural => natural_spline_chain(points, samples_per_segment),
        InterpolationStyle::Linear => points.to_vec(),
    }
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Polyline mit kumulierten Bogenlängen für Abfragen "Punkt bei Länge s".
#[derive(Debug, Clone, Default)]
pub struct ArcLengthTable {
    points: Vec<Vec2>,
    cumulative: Vec<f32>,
}

impl ArcLengthTable {
    /// Baut die Tabelle über eine Polyline.
    pub fn new(points: Vec<Vec2>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut running = 0.0f32;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                running += points[i - 1].distance(*point);
            }
            cumulative.push(running);
        }
        Self { points, cumulative }
    }

    /// Die zugrundeliegende Polyline
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Gesamtlänge der Polyline
    pub fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Punkt bei Bogenlänge `length`, begrenzt auf `[0, total_length]`.
    ///
    /// `None` nur bei leerer Polyline.
    pub fn point_at_length(&self, length: f32) -> Option<Vec2> {
        let first = *self.points.first()?;
        let total = self.total_length();
        if total <= 0.0 || length <= 0.0 {
            return Some(first);
        }
        let length = length.min(total);

        // Erster Index mit kumulierter Länge >= length (>= 1, da cumulative[0] = 0 < length)
        let index = self
            .cumulative
            .partition_point(|&c| c < length)
            .min(self.points.len() - 1);
        let (start, end) = (self.points[index - 1], self.points[index]);
        let segment_start = self.cumulative[index - 1];
        let segment_length = self.cumulative[index] - segment_start;
        if segment_length <= 0.0 {
            return Some(end);
        }
        Some(start.lerp(end, (length - segment_start) / segment_length))
    }
}
