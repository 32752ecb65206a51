use overlay_wm::{DockZone, FloatRect, MemoryStore, PointerEvent, StaticHost, WindowManager, WindowOptions};

fn manager() -> WindowManager {
    // 1280x800 host with the default 64px bottom bar: a 1280x736 viewport.
    WindowManager::with_defaults(StaticHost::new(1280, 800), MemoryStore::new())
}

#[test]
fn drag_to_left_edge_docks_and_drag_away_restores_size() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(500, 500, 300, 200));

    wm.handle_pointer(PointerEvent::down(600, 510));
    wm.handle_pointer(PointerEvent::moved(5, 510));
    let preview = wm.snap_preview().unwrap();
    assert_eq!(preview.zone, DockZone::Left);
    assert_eq!(preview.rect, FloatRect::new(0, 0, 640, 736));
    wm.handle_pointer(PointerEvent::up(5, 510));

    let docked = wm.state("w").unwrap();
    assert_eq!(docked.docked, Some(DockZone::Left));
    assert_eq!(docked.rect, FloatRect::new(0, 0, 640, 736));
    assert_eq!(docked.pre_dock, Some(FloatRect::new(500, 500, 300, 200)));

    wm.handle_pointer(PointerEvent::down(320, 10));
    let undocked = wm.state("w").unwrap();
    assert_eq!(undocked.docked, None);
    assert_eq!(undocked.pre_dock, None);
    assert_eq!(undocked.rect, FloatRect::new(170, 0, 300, 200));

    wm.handle_pointer(PointerEvent::moved(700, 300));
    wm.handle_pointer(PointerEvent::up(700, 300));
    let moved = wm.state("w").unwrap().rect;
    assert_eq!((moved.width, moved.height), (300, 200));
    assert_eq!(moved.x + 150, 700);
    assert_eq!(moved.y, 290);
}

#[test]
fn corners_win_over_edges() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(500, 300, 300, 200));
    wm.handle_pointer(PointerEvent::down(600, 310));
    wm.handle_pointer(PointerEvent::moved(1275, 730));
    assert_eq!(wm.snap_preview().map(|p| p.zone), Some(DockZone::BottomRight));
    wm.handle_pointer(PointerEvent::up(1275, 730));
    assert_eq!(
        wm.state("w").unwrap().rect,
        FloatRect::new(640, 368, 640, 368)
    );
}

#[test]
fn top_zone_docks_without_maximizing() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(200, 200, 300, 200));
    assert!(wm.dock("w", DockZone::Top));
    let state = wm.state("w").unwrap();
    assert_eq!(state.docked, Some(DockZone::Top));
    assert!(!state.maximized);
    assert_eq!(state.rect, FloatRect::new(0, 0, 1280, 736));
}

#[test]
fn dock_keeps_first_snapshot_and_undock_restores_size() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(200, 200, 300, 200));
    wm.dock("w", DockZone::Left);
    wm.dock("w", DockZone::TopRight);
    let state = wm.state("w").unwrap();
    assert_eq!(state.docked, Some(DockZone::TopRight));
    assert_eq!(state.pre_dock, Some(FloatRect::new(200, 200, 300, 200)));

    assert!(wm.undock("w"));
    let state = wm.state("w").unwrap();
    assert_eq!((state.rect.width, state.rect.height), (300, 200));
    assert_eq!((state.rect.x, state.rect.y), (640, 0));
    assert!(!wm.undock("w"));
}

#[test]
fn dragging_above_the_viewport_clamps_to_zero() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(400, 100, 300, 200));
    wm.handle_pointer(PointerEvent::down(500, 110));
    wm.handle_pointer(PointerEvent::moved(500, 50));
    assert_eq!(wm.state("w").unwrap().rect.y, 40);
    wm.handle_pointer(PointerEvent::moved(500, 5));
    assert_eq!(wm.state("w").unwrap().rect.y, 0);
    assert_eq!(wm.snap_preview().map(|p| p.zone), Some(DockZone::Top));
    // Leaving the zone before release drops the preview.
    wm.handle_pointer(PointerEvent::moved(500, 200));
    assert!(wm.snap_preview().is_none());
    wm.handle_pointer(PointerEvent::up(500, 200));
    let state = wm.state("w").unwrap();
    assert_eq!(state.docked, None);
    assert_eq!(state.rect.y, 190);
}

#[test]
fn windows_snap_to_neighbour_edges() {
    let mut wm = manager();
    wm.create(WindowOptions::new("a").geometry(100, 100, 400, 300));
    wm.create(WindowOptions::new("b").geometry(700, 100, 200, 150));
    wm.handle_pointer(PointerEvent::down(750, 110));
    // Left edge would land at 508, within 15px of a's right edge.
    wm.handle_pointer(PointerEvent::moved(558, 213));
    let rect = wm.state("b").unwrap().rect;
    assert_eq!((rect.x, rect.y), (500, 203));
    wm.handle_pointer(PointerEvent::up(558, 213));
}
