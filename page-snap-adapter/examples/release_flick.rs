// Example: a host scroll view feeding a controller (drag, flick, settle).
use page_snap::{GestureState, PagingOptions};
use page_snap_adapter::Controller;

fn main() {
    let mut c = Controller::new(PagingOptions::flow_layout_default()).with_on_page_change(Some(
        |_: &Controller, page: usize| println!("current page: {page}"),
    ));
    c.on_viewport_width(390.0);

    // Simulate a drag from the first card to just past the second one.
    let mut off = -100.0;
    while off < 300.0 {
        c.on_scroll(off);
        off += 25.0;
    }

    // The finger lifts with a quick rightward flick.
    let target = c.on_release(GestureState::new(1.8, 620.0));
    println!("rest at {target} ({:?})", c.last_snap());

    // The host animates there and keeps reporting offsets.
    c.on_scroll(target);
    println!("settled on page {:?}", c.current_page());
}
