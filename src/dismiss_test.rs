use super::*;
use crate::dom::MemoryDom;
use crate::runtime::ManualRuntime;

#[test]
fn node_fades_at_delay_and_is_removed_after_fade() {
    let dom = Rc::new(MemoryDom::new());
    let rt = Rc::new(ManualRuntime::new());
    let node = dom.add(dom.root(), "div", &[("class", "alert")]);

    schedule_dismiss(&dom, &rt, node, 1000, 300);

    rt.advance(999);
    assert_eq!(dom.style(node, "opacity"), None);

    rt.advance(1);
    assert_eq!(dom.style(node, "opacity").as_deref(), Some("0"));
    assert_eq!(dom.style(node, "transform").as_deref(), Some("translateY(-10px)"));
    assert!(dom.contains(node));

    rt.advance(299);
    assert!(dom.contains(node));
    rt.advance(1);
    assert!(!dom.contains(node));
    assert_eq!(rt.pending_timers(), 0);
}

#[test]
fn zero_fade_removes_in_same_tick() {
    let dom = Rc::new(MemoryDom::new());
    let rt = Rc::new(ManualRuntime::new());
    let node = dom.add(dom.root(), "div", &[]);
    schedule_dismiss(&dom, &rt, node, 10, 0);
    rt.advance(10);
    assert!(!dom.contains(node));
}
