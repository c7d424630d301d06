// Example: locate the centered card and resolve a few releases.
use page_snap::{GestureState, PagingOptions, locate, resolve_snap};

fn main() -> Result<(), page_snap::PageSnapError> {
    let opts = PagingOptions::flow_layout_default();
    let geometry = opts.geometry()?;
    let viewport_width = 390.0;

    for off in [-100.0, 100.0, 1_535.0, 4_330.0] {
        let page = locate(off, viewport_width, &geometry, opts.count)?;
        println!("offset={off} page={page}");
    }

    let viewport = opts.viewport(1_535.0, viewport_width);
    for velocity in [0.0, 0.2, 1.5, -1.5] {
        let snap = resolve_snap(GestureState::new(velocity, 1_535.0), &viewport, &geometry)?;
        println!("velocity={velocity} -> {snap:?}");
    }
    Ok(())
}
