use crate::sprite::Sprite;

/// Axis-aligned bounding box test between two placed sprites.
///
/// Each sprite occupies `x..x + width` by `y..y + height`, the same footprint
/// [`draw_sprite`](crate::draw::draw_sprite) paints. Boxes that only share an
/// edge do not overlap.
pub fn overlaps(a: &Sprite, xa: i32, ya: i32, b: &Sprite, xb: i32, yb: i32) -> bool {
    let (xa, ya, xb, yb) = (xa as i64, ya as i64, xb as i64, yb as i64);
    let (wa, ha) = (a.width() as i64, a.height() as i64);
    let (wb, hb) = (b.width() as i64, b.height() as i64);

    xa < xb + wb && xa + wa > xb && ya < yb + hb && ya + ha > yb
}
