use std::cell::RefCell;
use std::rc::Rc;

use overlay_wm::{
    CloseDecision, FloatRect, FrameId, MemoryStore, PointerEvent, StaticHost, WindowManager,
    WindowOptions,
};

fn manager() -> WindowManager {
    WindowManager::with_defaults(StaticHost::new(1280, 800), MemoryStore::new())
}

#[test]
fn double_click_titlebar_restores_and_maximize_is_repeatable() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(200, 150, 400, 300));
    wm.maximize("w");
    let maximized = wm.state("w").unwrap();
    assert!(maximized.maximized);
    assert_eq!(maximized.rect, FloatRect::new(0, 0, 1280, 736));

    for _ in 0..2 {
        wm.handle_pointer(PointerEvent::down(300, 10));
        wm.handle_pointer(PointerEvent::up(300, 10));
    }
    let restored = wm.state("w").unwrap();
    assert!(!restored.maximized);
    assert_eq!(restored.rect, FloatRect::new(200, 150, 400, 300));
    assert_eq!(restored.pre_maximize, None);

    wm.maximize("w");
    assert_eq!(wm.state("w").unwrap().rect, maximized.rect);
}

#[test]
fn titlebar_controls_minimize_and_dock_button_restores() {
    let mut wm = manager();
    let minimized = Rc::new(RefCell::new(0));
    let seen = minimized.clone();
    wm.create(
        WindowOptions::new("w")
            .title("Logs")
            .geometry(100, 100, 400, 300)
            .on_minimize(move |_| *seen.borrow_mut() += 1),
    );

    // Controls from the right: close, maximize, minimize (32px each).
    wm.handle_pointer(PointerEvent::down(420, 110));
    assert!(wm.state("w").unwrap().minimized);
    assert!(!wm.is_visible("w"));
    assert_eq!(*minimized.borrow(), 1);
    let entries = wm.minimize_dock().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "Logs");

    // Dock strip is the 64px bar under the viewport.
    wm.handle_pointer(PointerEvent::down(80, 760));
    let state = wm.state("w").unwrap();
    assert!(!state.minimized);
    assert!(state.visible);
    assert!(state.focused);
    assert!(wm.minimize_dock().is_empty());
}

#[test]
fn maximize_control_toggles() {
    let mut wm = manager();
    wm.create(WindowOptions::new("w").geometry(100, 100, 400, 300));
    wm.handle_pointer(PointerEvent::down(450, 110));
    assert!(wm.state("w").unwrap().maximized);
    // The control has moved with the maximized frame.
    wm.handle_pointer(PointerEvent::down(1230, 10));
    assert_eq!(wm.state("w").unwrap().rect, FloatRect::new(100, 100, 400, 300));
}

#[test]
fn close_can_be_cancelled() {
    let mut wm = manager();
    let allow = Rc::new(RefCell::new(false));
    let gate = allow.clone();
    wm.create(
        WindowOptions::new("w")
            .geometry(100, 100, 400, 300)
            .on_close(move |_| {
                if *gate.borrow() {
                    CloseDecision::Proceed
                } else {
                    CloseDecision::Cancel
                }
            }),
    );

    wm.handle_pointer(PointerEvent::down(490, 110));
    assert!(wm.contains("w"));
    assert!(wm.state("w").unwrap().visible);

    *allow.borrow_mut() = true;
    assert!(wm.close("w"));
    assert!(!wm.contains("w"));
    assert!(wm.stack().is_empty());
    assert!(!wm.close("w"));
}

#[test]
fn resizing_from_the_west_below_minimum_keeps_right_edge() {
    let mut wm = manager();
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let log = sizes.clone();
    wm.create(
        WindowOptions::new("w")
            .geometry(300, 200, 400, 300)
            .min_size(200, 150)
            .on_resize(move |_, w, h| log.borrow_mut().push((w, h))),
    );

    wm.handle_pointer(PointerEvent::down(300, 350));
    wm.handle_pointer(PointerEvent::moved(400, 350));
    assert_eq!(wm.state("w").unwrap().rect, FloatRect::new(400, 200, 300, 300));
    wm.handle_pointer(PointerEvent::moved(600, 350));
    let rect = wm.state("w").unwrap().rect;
    assert_eq!(rect, FloatRect::new(400, 200, 300, 300));
    assert_eq!(rect.right(), 700);
    wm.handle_pointer(PointerEvent::up(600, 350));
    assert_eq!(sizes.borrow().first(), Some(&(300, 300)));
}

#[test]
fn south_east_resize_clamps_at_minimum() {
    let mut wm = manager();
    wm.create(
        WindowOptions::new("w")
            .geometry(300, 200, 400, 300)
            .min_size(200, 150),
    );
    wm.handle_pointer(PointerEvent::down(700, 500));
    wm.handle_pointer(PointerEvent::moved(100, 100));
    wm.handle_pointer(PointerEvent::up(100, 100));
    assert_eq!(wm.state("w").unwrap().rect, FloatRect::new(300, 200, 200, 150));
}

#[test]
fn stack_depths_stay_contiguous_and_focus_is_unique() {
    let mut wm = manager();
    for (i, id) in ["a", "b", "c"].into_iter().enumerate() {
        let offset = 150 * i as i32;
        wm.create(WindowOptions::new(id).geometry(50 + offset, 50 + offset, 300, 200));
    }
    // Body click on "a" brings it forward.
    wm.handle_pointer(PointerEvent::down(100, 150));
    assert_eq!(wm.stack().topmost(), Some(&FrameId::window("a")));
    let mut depths: Vec<u32> = ["a", "b", "c"]
        .iter()
        .filter_map(|id| wm.depth(id))
        .collect();
    depths.sort();
    assert_eq!(depths, vec![1000, 1001, 1002]);
    assert_eq!(wm.depth("a"), Some(1002));
    let focused: Vec<String> = wm
        .windows()
        .filter(|w| w.is_focused())
        .map(|w| w.id().to_string())
        .collect();
    assert_eq!(focused, vec!["a".to_string()]);

    wm.close("b");
    let mut depths: Vec<u32> = ["a", "c"].iter().filter_map(|id| wm.depth(id)).collect();
    depths.sort();
    assert_eq!(depths, vec![1000, 1001]);
}

#[test]
fn handle_forwards_to_the_manager() {
    let mut wm = manager();
    let mut handle = wm.create(WindowOptions::new("w").geometry(10, 10, 300, 200));
    handle.set_title("Renamed").append_content("line");
    handle.move_to(40, 60);
    handle.resize(100, 100);
    let state = handle.state().unwrap();
    assert_eq!(state.title, "Renamed");
    assert_eq!(state.rect, FloatRect::new(40, 60, 200, 150));
    assert!(!handle.is_docked());
    assert!(handle.close());
    assert!(wm.get("w").is_none());
}
