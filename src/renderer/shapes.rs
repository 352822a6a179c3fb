//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::canvas::Region;
use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(region: Region, color: [f32; 4]) -> Vec<Vertex> {
    let Region { x, y, w, h } = region;

    // Two triangles
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_emits_two_triangles_covering_corners() {
        let vertices = rect(Region::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(vertices.len(), 6);

        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
    }

    #[test]
    fn circle_vertices_lie_on_center_or_rim() {
        let center = Vec2::new(5.0, -3.0);
        let vertices = circle(center, 2.0, [1.0; 4], 16);
        assert_eq!(vertices.len(), 16 * 3);

        for v in &vertices {
            let d = (Vec2::from(v.position) - center).length();
            assert!(d < 0.001 || (d - 2.0).abs() < 0.001);
        }
    }
}
