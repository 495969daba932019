use super::*;

#[test]
fn guards_unregister_on_drop() {
    let hub = EventHub::new();
    let a = hub.listen(ListenerKind::Scroll, "about");
    let b = hub.listen(ListenerKind::Scroll, "services");
    let c = hub.listen(ListenerKind::Pointer, "hero");
    assert_eq!(hub.count(ListenerKind::Scroll), 2);
    assert!(hub.is_listening("hero", ListenerKind::Pointer));
    assert!(!hub.is_listening("hero", ListenerKind::Scroll));
    drop(a);
    assert_eq!(hub.count(ListenerKind::Scroll), 1);
    drop(vec![b, c]);
    assert_eq!(hub.total(), 0);
}

#[test]
fn guard_outliving_hub_is_harmless() {
    let hub = EventHub::new();
    let g = hub.listen(ListenerKind::Frame, "globe");
    assert_eq!(g.kind(), ListenerKind::Frame);
    drop(hub);
    drop(g);
}

#[test]
fn clones_share_one_registry() {
    let hub = EventHub::new();
    let other = hub.clone();
    let _g = other.listen(ListenerKind::Resize, "page");
    assert_eq!(hub.count(ListenerKind::Resize), 1);
}
