use overlay_wm::{FloatRect, FrameId, MemoryStore, PointerEvent, StaticHost, WindowManager, WindowOptions};

fn manager() -> WindowManager {
    WindowManager::with_defaults(StaticHost::new(1280, 800), MemoryStore::new())
}

/// A at (100, 100), B at (200, 200), B dropped on A's titlebar.
fn merged_pair() -> WindowManager {
    let mut wm = manager();
    wm.create(WindowOptions::new("a").geometry(100, 100, 400, 300).content("alpha"));
    wm.create(WindowOptions::new("b").geometry(200, 200, 400, 300).content("beta"));
    assert!(wm.handle_pointer(PointerEvent::down(300, 218)));
    wm.handle_pointer(PointerEvent::moved(300, 118));
    assert_eq!(wm.merge_target(), Some(&FrameId::window("a")));
    wm.handle_pointer(PointerEvent::up(300, 118));
    wm
}

#[test]
fn dropping_on_titlebar_creates_group_with_target_geometry() {
    let wm = merged_pair();
    let group_id = wm.state("a").and_then(|s| s.tab_group).unwrap();
    assert_eq!(wm.state("b").and_then(|s| s.tab_group), Some(group_id));
    let group = wm.group(group_id).unwrap();
    assert_eq!(group.members(), ["a", "b"]);
    assert_eq!(group.active(), Some("b"));
    assert_eq!(group.rect(), FloatRect::new(100, 100, 400, 300));
    assert_eq!(group_id.to_string(), "tab-group-1");
    assert_eq!(wm.stack().to_vec(), vec![FrameId::Group(group_id)]);
    assert!(!wm.gesture_active());
}

#[test]
fn tearing_a_tab_frees_it_under_the_cursor_and_dissolves_the_pair() {
    let mut wm = merged_pair();
    let group_id = wm.state("a").and_then(|s| s.tab_group).unwrap();

    // Tab "a" sits at x 100..240 in the strip below the drag bar.
    wm.handle_pointer(PointerEvent::down(150, 140));
    assert_eq!(wm.group(group_id).unwrap().active(), Some("a"));
    wm.handle_pointer(PointerEvent::moved(150, 155));
    assert!(wm.group(group_id).is_some(), "below the tear threshold");
    wm.handle_pointer(PointerEvent::moved(150, 170));
    wm.handle_pointer(PointerEvent::up(150, 170));

    let a = wm.state("a").unwrap();
    assert_eq!(a.tab_group, None);
    assert_eq!(a.rect, FloatRect::new(-50, 150, 400, 300));
    assert_eq!(a.rect.x + a.rect.width as i32 / 2, 150);
    assert!(a.visible);

    assert!(wm.group(group_id).is_none());
    let b = wm.state("b").unwrap();
    assert_eq!(b.tab_group, None);
    assert_eq!(b.rect, FloatRect::new(100, 100, 400, 300));
    assert_eq!(wm.content("a").unwrap()[0].as_text(), Some("alpha"));
    assert_eq!(wm.content("b").unwrap()[0].as_text(), Some("beta"));
    assert_eq!(wm.stack().topmost(), Some(&FrameId::window("a")));
}

#[test]
fn detach_then_merge_restores_membership() {
    let mut wm = manager();
    for (i, id) in ["a", "b", "c"].into_iter().enumerate() {
        wm.create(WindowOptions::new(id).geometry(100 + 300 * i as i32, 100, 250, 200));
    }
    let group = wm.create_group("a", "b", None).unwrap();
    wm.add_to_group("c", group, false);

    assert!(wm.detach("b"));
    assert_eq!(wm.state("b").unwrap().rect.x, 130);
    assert_eq!(wm.group(group).unwrap().members(), ["a", "c"]);

    assert!(wm.merge("b", "a"));
    let g = wm.group(group).unwrap();
    let mut members = g.members().to_vec();
    members.sort();
    assert_eq!(members, ["a", "b", "c"]);
    assert_eq!(g.active(), Some("b"));
    assert!(!wm.is_visible("b"));
}

#[test]
fn closing_tabs_settles_the_group() {
    let mut wm = merged_pair();
    let group_id = wm.state("a").and_then(|s| s.tab_group).unwrap();
    wm.create(WindowOptions::new("c").geometry(700, 100, 300, 200));
    assert!(wm.add_to_group("c", group_id, true));

    assert!(wm.close_tab(group_id, "c"));
    let g = wm.group(group_id).unwrap();
    assert_eq!(g.members(), ["a", "b"]);
    assert_eq!(g.active(), Some("a"));

    assert!(wm.close_tab(group_id, "a"));
    assert!(wm.group(group_id).is_none());
    assert_eq!(wm.state("b").unwrap().tab_group, None);
    assert_eq!(wm.get_all(), vec!["b".to_string()]);
}

#[test]
fn group_close_button_closes_every_member() {
    let mut wm = merged_pair();
    // Close control sits at the right end of the drag bar.
    wm.handle_pointer(PointerEvent::down(490, 110));
    assert!(wm.get_all().is_empty());
    assert!(wm.groups().next().is_none());
    assert!(wm.stack().is_empty());
}

#[test]
fn group_bar_drag_moves_the_group() {
    let mut wm = merged_pair();
    let group_id = wm.state("a").and_then(|s| s.tab_group).unwrap();
    wm.handle_pointer(PointerEvent::down(200, 110));
    wm.handle_pointer(PointerEvent::moved(400, 310));
    wm.handle_pointer(PointerEvent::up(400, 310));
    assert_eq!(
        wm.group(group_id).unwrap().rect(),
        FloatRect::new(300, 300, 400, 300)
    );
}
