use nalgebra::Vector2;

use crate::model::Line;


/// Half-width of the visible mathematical range, in units. Both panels
/// show [-10, 10] on both axes.
pub const VIEW_HALF_EXTENT: f32 = 10.0;


/// Maps mathematical coordinates to pixels inside one panel rect.
/// Origin at the rect center, fixed scale, y flipped so that positive
/// mathematical y points up on screen.
pub struct PlaneMapper {
    origin: egui::Pos2,
    scale: f32,
}

impl PlaneMapper {
    pub fn new(rect: egui::Rect) -> Self {
        Self {
            origin: rect.center(),
            scale: rect.width().min(rect.height()) / (2.0 * VIEW_HALF_EXTENT),
        }
    }

    pub fn to_screen(&self, v: Vector2<f64>) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + v.x as f32 * self.scale,
            self.origin.y - v.y as f32 * self.scale,
        )
    }
}


pub fn draw_grid_2d(painter: &egui::Painter, mapper: &PlaneMapper, color: egui::Color32, size: i32) {
    let stroke = egui::Stroke::new(1.0, color);
    let s = size as f64;

    for i in -size..=size {
        let t = i as f64;
        painter.line_segment([mapper.to_screen(Vector2::new(t, -s)), mapper.to_screen(Vector2::new(t, s))], stroke);
        painter.line_segment([mapper.to_screen(Vector2::new(-s, t)), mapper.to_screen(Vector2::new(s, t))], stroke);
    }
}


pub fn draw_axes_2d(painter: &egui::Painter, mapper: &PlaneMapper) {
    let s = egui::Stroke::new(1.0, egui::Color32::from_gray(110));
    let e = VIEW_HALF_EXTENT as f64;
    painter.line_segment([mapper.to_screen(Vector2::new(-e, 0.0)), mapper.to_screen(Vector2::new(e, 0.0))], s);
    painter.line_segment([mapper.to_screen(Vector2::new(0.0, -e)), mapper.to_screen(Vector2::new(0.0, e))], s);
}


pub fn draw_arrow(painter: &egui::Painter, start: egui::Pos2, end: egui::Pos2, width: f32, color: egui::Color32) {
    let vec = end - start;
    let len = vec.length();
    if len < 1.0 { return; }

    // Main shaft
    painter.line_segment([start, end], egui::Stroke::new(width, color));

    // Arrow head (triangle)
    let head_len = (len * 0.15).clamp(5.0, 15.0);
    let dir = vec / len;
    let perp = egui::vec2(-dir.y, dir.x) * (head_len * 0.4);

    let tip = end;
    let base = end - dir * head_len;

    painter.add(egui::Shape::convex_polygon(
        vec![tip, base + perp, base - perp],
        color,
        egui::Stroke::NONE,
    ));
}


/// Draws the segment of `line` spanned by its stored extent.
pub fn draw_line_2d(painter: &egui::Painter, mapper: &PlaneMapper, line: &Line, color: egui::Color32) {
    let (start, end) = line.endpoints();
    painter.line_segment(
        [mapper.to_screen(start), mapper.to_screen(end)],
        egui::Stroke::new(2.0, color),
    );
}


pub fn draw_dashed_segment(painter: &egui::Painter, start: egui::Pos2, end: egui::Pos2, color: egui::Color32) {
    painter.extend(egui::Shape::dashed_line(
        &[start, end],
        egui::Stroke::new(1.5, color),
        6.0,
        5.0,
    ));
}


pub fn draw_point_marker(painter: &egui::Painter, pos: egui::Pos2, color: egui::Color32) {
    painter.circle_filled(pos, 4.0, color);
}


pub fn draw_ring_marker(painter: &egui::Painter, pos: egui::Pos2, color: egui::Color32) {
    painter.circle_stroke(pos, 6.5, egui::Stroke::new(2.0, color));
}


pub fn draw_label(painter: &egui::Painter, pos: egui::Pos2, text: &str, color: egui::Color32) {
    painter.text(
        pos + egui::vec2(8.0, -6.0),
        egui::Align2::LEFT_BOTTOM,
        text,
        egui::FontId::proportional(14.0),
        color,
    );
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mapper() -> PlaneMapper {
        PlaneMapper::new(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(400.0, 400.0),
        ))
    }

    #[test]
    fn origin_maps_to_rect_center() {
        let p = mapper().to_screen(Vector2::zeros());
        assert_abs_diff_eq!(p.x, 200.0);
        assert_abs_diff_eq!(p.y, 200.0);
    }

    #[test]
    fn unit_point_maps_with_fixed_scale() {
        // 400 px over a 20-unit range: 20 px per unit.
        let p = mapper().to_screen(Vector2::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 220.0);
        assert_abs_diff_eq!(p.y, 180.0);
    }

    #[test]
    fn increasing_math_y_decreases_pixel_y() {
        let m = mapper();
        let mut last = f32::INFINITY;
        for i in -10..=10 {
            let p = m.to_screen(Vector2::new(0.0, i as f64));
            assert!(p.y < last);
            last = p.y;
        }
    }

    #[test]
    fn mapping_is_injective_over_the_visible_grid() {
        let m = mapper();
        let mut seen = Vec::new();
        for x in -10..=10 {
            for y in -10..=10 {
                let p = m.to_screen(Vector2::new(x as f64, y as f64));
                assert!(!seen.contains(&(p.x.to_bits(), p.y.to_bits())));
                seen.push((p.x.to_bits(), p.y.to_bits()));
            }
        }
    }

    #[test]
    fn non_square_rect_uses_the_smaller_dimension() {
        let m = PlaneMapper::new(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(600.0, 400.0),
        ));
        // 400 px / 20 units again, centered at (300, 200).
        let p = m.to_screen(Vector2::new(10.0, 0.0));
        assert_abs_diff_eq!(p.x, 500.0);
        assert_abs_diff_eq!(p.y, 200.0);
    }
}
