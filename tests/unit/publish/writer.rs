use super::*;

#[test]
fn frames_are_grouped_by_symbol() {
    let mut w = InMemoryWriter::new();
    w.begin_symbol(ResourceId(0), "a").unwrap();
    w.write_frame(FrameRecord::default()).unwrap();
    w.write_frame(FrameRecord {
        label: Some("loop".to_owned()),
        entries: vec![],
    })
    .unwrap();
    w.end_symbol().unwrap();

    let sym = w.symbol("a").unwrap();
    assert_eq!(sym.id, ResourceId(0));
    assert_eq!(sym.frames.len(), 2);
    assert_eq!(sym.frames[1].label.as_deref(), Some("loop"));
    assert!(w.symbol("b").is_none());
}

#[test]
fn frame_outside_symbol_is_rejected() {
    let mut w = InMemoryWriter::new();
    assert!(w.write_frame(FrameRecord::default()).is_err());
}

#[test]
fn shape_lookup_by_id() {
    let mut w = InMemoryWriter::new();
    w.write_shape(ResourceId(3), ShapeGraphic::default()).unwrap();
    assert!(w.shape(ResourceId(3)).unwrap().is_empty());
    assert!(w.shape(ResourceId(4)).is_none());
}
