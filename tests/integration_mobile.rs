use overlay_wm::{MemoryStore, PointerEvent, StaticHost, WindowManager, WindowOptions};

fn phone() -> WindowManager {
    WindowManager::with_defaults(StaticHost::new(500, 900), MemoryStore::new())
}

#[test]
fn swiping_the_header_down_dismisses_the_sheet() {
    let mut wm = phone();
    assert!(wm.is_mobile());
    wm.create(WindowOptions::new("w").title("Filters").content("options"));
    assert!(wm.mobile().is_open());
    assert!(wm.mobile().overlay_visible());
    assert!(wm.window("w").is_none(), "no floating window in mobile mode");

    let sheet = wm.mobile_sheet_rect().unwrap();
    assert_eq!(sheet.height, 450);
    assert_eq!(sheet.y, 450);

    wm.handle_pointer(PointerEvent::down(250, 460));
    wm.handle_pointer(PointerEvent::moved(250, 610));
    assert_eq!(wm.mobile_sheet_rect().map(|r| r.y), Some(600));
    wm.handle_pointer(PointerEvent::up(250, 610));

    assert!(!wm.mobile().is_open());
    assert!(!wm.mobile().overlay_visible());
    assert!(!wm.is_visible("w"));
    assert_eq!(wm.get_all(), vec!["w".to_string()]);
}

#[test]
fn opening_another_panel_replaces_the_open_one() {
    let mut wm = phone();
    wm.create(WindowOptions::new("a"));
    wm.create(WindowOptions::new("b"));
    assert_eq!(wm.mobile().open_id(), Some("b"));
    wm.show("a");
    assert_eq!(wm.mobile().open_id(), Some("a"));
    wm.create(WindowOptions::new("b"));
    assert_eq!(wm.mobile().open_id(), Some("b"));
}

#[test]
fn mobile_user_agent_widens_the_breakpoint() {
    let host = StaticHost::new(900, 1200)
        .with_user_agent("Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)");
    let mut wm = WindowManager::with_defaults(host.clone(), MemoryStore::new());
    assert!(wm.is_mobile());
    wm.create(WindowOptions::new("sheet"));
    assert!(wm.mobile().contains("sheet"));

    host.set_size(1100, 1200);
    assert!(!wm.is_mobile());
    wm.create(WindowOptions::new("floating"));
    assert!(wm.window("floating").is_some());
}
