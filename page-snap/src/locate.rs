use crate::{LayoutGeometry, PageSnapError};

/// Returns the index of the item whose center is closest to the viewport's center.
///
/// `offset_x` is the scroll offset in the geometry's coordinate space. On an exact tie between two
/// neighbouring centers the right-hand item wins. Offsets past the last item clamp to
/// `item_count - 1`; offsets before the first item resolve to `0`.
pub fn locate(
    offset_x: f64,
    viewport_width: f64,
    geometry: &LayoutGeometry,
    item_count: usize,
) -> Result<usize, PageSnapError> {
    if item_count == 0 {
        pwarn!("locate: empty row");
        return Err(PageSnapError::EmptyRow);
    }
    check_viewport_width(viewport_width)?;

    let center = offset_x + viewport_width / 2.0;
    let page = nearest_index(geometry, center, item_count - 1);
    ptrace!(offset_x, viewport_width, item_count, page, "locate");
    Ok(page)
}

pub(crate) fn check_viewport_width(viewport_width: f64) -> Result<(), PageSnapError> {
    if viewport_width.is_finite() && viewport_width > 0.0 {
        return Ok(());
    }
    pwarn!(viewport_width, "rejected viewport width");
    Err(PageSnapError::InvalidViewportWidth {
        width: viewport_width,
    })
}

/// Nearest item to `center` among `0..=last`.
///
/// The estimate is closed-form; the two bounded loops only correct float rounding at item
/// boundaries, so the result matches a left-to-right scan for the first center strictly right of
/// `center`.
fn nearest_index(geometry: &LayoutGeometry, center: f64, last: usize) -> usize {
    if last == 0 {
        return 0;
    }

    // `as` saturates (NaN -> 0), so this is safe for any input.
    let estimate = (center - geometry.item_width() / 2.0) / geometry.pitch();
    let mut right = if estimate > 0.0 {
        (estimate as usize).saturating_add(1).clamp(1, last)
    } else {
        1
    };

    while right > 1 && geometry.center_x(right - 1) > center {
        right -= 1;
    }
    while right < last && geometry.center_x(right) <= center {
        right += 1;
    }
    if geometry.center_x(right) <= center {
        return last;
    }

    let left = right - 1;
    let left_distance = distance(geometry.center_x(left), center);
    let right_distance = distance(geometry.center_x(right), center);
    if left_distance < right_distance {
        left
    } else {
        right
    }
}

fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}
