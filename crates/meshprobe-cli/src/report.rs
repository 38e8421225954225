//! Query results as printable and JSON-serializable records.

use std::fmt;

use meshprobe_kernel::{Aabb3, CastSides, SurfacePoint};
use meshprobe_math::Point3;
use serde::Serialize;

/// Which containment test produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsideVariant {
    Reference,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsideReport {
    pub point: [f64; 3],
    pub variant: InsideVariant,
    pub inside: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceReport {
    pub point: [f64; 3],
    pub normal: [f64; 3],
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosestReport {
    pub point: [f64; 3],
    pub sides: CastSides,
    /// `None` when no triangle was hit.
    pub closest: Option<SurfaceReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsReport {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoReport {
    pub vertices: usize,
    pub triangles: usize,
    /// `None` for a mesh without vertices.
    pub local_bounds: Option<BoundsReport>,
    pub world_bounds: Option<BoundsReport>,
}

fn coords(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

impl InsideReport {
    pub fn new(point: &Point3, variant: InsideVariant, inside: bool) -> Self {
        Self {
            point: coords(point),
            variant,
            inside,
        }
    }
}

impl ClosestReport {
    pub fn new(point: &Point3, sides: CastSides, found: Option<SurfacePoint>) -> Self {
        Self {
            point: coords(point),
            sides,
            closest: found.map(|hit| SurfaceReport {
                point: coords(&hit.point),
                normal: [hit.normal.x, hit.normal.y, hit.normal.z],
                distance: hit.distance,
            }),
        }
    }
}

impl BoundsReport {
    pub fn from_aabb(aabb: &Aabb3) -> Option<Self> {
        (!aabb.is_empty()).then(|| Self {
            min: coords(&aabb.min),
            max: coords(&aabb.max),
        })
    }
}

struct Xyz<'a>(&'a [f64; 3]);

impl fmt::Display for Xyz<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl fmt::Display for InsideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.inside { "inside" } else { "outside" };
        let variant = match self.variant {
            InsideVariant::Reference => "reference",
            InsideVariant::Fast => "fast",
        };
        write!(f, "{} is {verdict} ({variant} test)", Xyz(&self.point))
    }
}

impl fmt::Display for ClosestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides = match self.sides {
            CastSides::Front => "front",
            CastSides::Both => "both",
        };
        match &self.closest {
            Some(hit) => write!(
                f,
                "closest to {} ({sides}): {} at distance {}, normal {}",
                Xyz(&self.point),
                Xyz(&hit.point),
                hit.distance,
                Xyz(&hit.normal)
            ),
            None => write!(f, "closest to {} ({sides}): no triangle hit", Xyz(&self.point)),
        }
    }
}

impl fmt::Display for InfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices:  {}", self.vertices)?;
        writeln!(f, "Triangles: {}", self.triangles)?;
        for (label, bounds) in [("Local", &self.local_bounds), ("World", &self.world_bounds)] {
            match bounds {
                Some(b) => writeln!(f, "{label} bounds: {} .. {}", Xyz(&b.min), Xyz(&b.max))?,
                None => writeln!(f, "{label} bounds: empty")?,
            }
        }
        Ok(())
    }
}
