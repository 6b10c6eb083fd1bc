//! Kurvenmodell: geordnete, veränderbare Liste von Kontrollpunkten.
//!
//! Jeder Punkt trägt eine stabile ID, damit Selektion und Rendering
//! unabhängig von seiner Position in der Liste bleiben.

use glam::Vec2;
use rand::Rng;

/// Horizontaler Teiler für die Startpunkte: Punkt `i` liegt bei `i * width / 7`.
const DEFAULT_POINT_X_DIVISOR: f32 = 7.0;

/// Stabile Kennung eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kontrollpunkt in Anzeige-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Stabile ID
    pub id: PointId,
    /// Position im Overlay (Pixel, Ursprung oben links)
    pub position: Vec2,
}

/// Geordnete Kontrollpunkte; die Reihenfolge bestimmt die Kurvenform.
#[derive(Debug, Clone, Default)]
pub struct Curve {
    points: Vec<ControlPoint>,
    next_id: u64,
}

impl Curve {
    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            next_id: 1,
        }
    }

    /// Erstellt eine Kurve aus Positionen in gegebener Reihenfolge.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> Self {
        let mut curve = Self::new();
        for position in positions {
            curve.push(position);
        }
        curve
    }

    /// Erstellt die Startkurve für ein frisch geladenes Bild.
    ///
    /// `count` Punkte bei `x = i * width / 7` (i = 1..=count), jeweils mit
    /// zufälliger Höhe im Band `band` (Anteile der Overlay-Höhe).
    pub fn with_default_points<R: Rng + ?Sized>(
        overlay_size: Vec2,
        count: usize,
        band: [f32; 2],
        rng: &mut R,
    ) -> Self {
        let low = band[0].clamp(0.0, 1.0);
        let high = band[1].clamp(low, 1.0);

        Self::from_positions((1..=count).map(|i| {
            let x = i as f32 * overlay_size.x / DEFAULT_POINT_X_DIVISOR;
            let fraction = low + rng.gen::<f32>() * (high - low);
            Vec2::new(x.min(overlay_size.x), fraction * overlay_size.y)
        }))
    }

    /// Hängt einen Punkt an und gibt seine ID zurück.
    pub fn push(&mut self, position: Vec2) -> PointId {
        let id = PointId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.points.push(ControlPoint { id, position });
        id
    }

    /// Alle Punkte in Kurvenreihenfolge
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Positionen in Kurvenreihenfolge
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Anzahl der Punkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt per ID
    pub fn get(&self, id: PointId) -> Option<&ControlPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Listenindex eines Punkts
    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// ID am Listenindex
    pub fn id_at(&self, index: usize) -> Option<PointId> {
        self.points.get(index).map(|p| p.id)
    }

    /// Setzt die Position eines Punkts. `false` wenn die ID unbekannt ist.
    pub fn set_position(&mut self, id: PointId, position: Vec2) -> bool {
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(point) => {
                point.position = position;
                true
            }
            None => false,
        }
    }

    /// Entfernt einen Punkt und liefert seinen früheren Index.
    pub fn remove(&mut self, id: PointId) -> Option<(usize, ControlPoint)> {
        let index = self.index_of(id)?;
        Some((index, self.points.remove(index)))
    }

    /// Sucht den nächstgelegenen Punkt innerhalb von `radius`.
    ///
    /// Bei gleichem Abstand gewinnt der spätere Punkt (er liegt obenauf).
    pub fn hit_test(&self, position: Vec2, radius: f32) -> Option<PointId> {
        let mut best: Option<(f32, PointId)> = None;
        for point in &self.points {
            let distance = point.position.distance(position);
            if distance > radius {
                continue;
            }
            match best {
                Some((best_distance, _)) if distance > best_distance => {}
                _ => best = Some((distance, point.id)),
            }
        }
        best.map(|(_, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ids_stay_stable_across_removal() {
        let mut curve = Curve::new();
        let a = curve.push(Vec2::new(0.0, 0.0));
        let b = curve.push(Vec2::new(10.0, 0.0));
        let c = curve.push(Vec2::new(20.0, 0.0));

        curve.remove(b);
        let d = curve.push(Vec2::new(30.0, 0.0));

        assert_ne!(d, b, "IDs werden nicht wiederverwendet");
        assert_eq!(curve.index_of(a), Some(0));
        assert_eq!(curve.index_of(c), Some(1));
        assert_eq!(curve.index_of(d), Some(2));
    }

    #[test]
    fn test_set_position_unknown_id() {
        let mut curve = Curve::from_positions([Vec2::ZERO]);
        assert!(!curve.set_position(PointId(999), Vec2::ONE));
        assert_eq!(curve.positions(), vec![Vec2::ZERO]);
    }

    #[test]
    fn test_hit_test_radius_and_nearest() {
        let curve = Curve::from_positions([Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]);
        assert_eq!(curve.hit_test(Vec2::new(3.0, 0.0), 5.0), curve.id_at(0));
        assert_eq!(curve.hit_test(Vec2::new(15.0, 0.0), 30.0), curve.id_at(1));
        assert_eq!(curve.hit_test(Vec2::new(100.0, 0.0), 30.0), None);
    }

    #[test]
    fn test_hit_test_tie_prefers_later_point() {
        let curve = Curve::from_positions([Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]);
        assert_eq!(curve.hit_test(Vec2::new(10.0, 0.0), 30.0), curve.id_at(1));
    }

    #[test]
    fn test_default_points_layout() {
        let mut rng = StdRng::seed_from_u64(42);
        let size = Vec2::new(700.0, 400.0);
        let curve = Curve::with_default_points(size, 4, [0.1, 0.9], &mut rng);

        assert_eq!(curve.len(), 4);
        for (i, point) in curve.points().iter().enumerate() {
            assert!((point.position.x - (i as f32 + 1.0) * 100.0).abs() < 1e-3);
            assert!(point.position.y >= 40.0 && point.position.y <= 360.0);
        }
    }

    #[test]
    fn test_default_points_degenerate_band() {
        let mut rng = StdRng::seed_from_u64(1);
        let curve = Curve::with_default_points(Vec2::new(70.0, 10.0), 2, [0.5, 0.2], &mut rng);
        for point in curve.points() {
            assert!((point.position.y - 5.0).abs() < 1e-4);
        }
    }
}
