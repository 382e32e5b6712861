mod common;

use std::sync::Arc;

use common::test_image;
use tailor_core::face::Face;
use tailor_core::geometry::{Point, Size};
use tailor_core::overlay::{IdGenerator, Overlay, OverlayId, OverlayPatch, SequentialIds};
use tailor_core::store::OverlayStore;

fn overlay(ids: &mut SequentialIds) -> Overlay {
    Overlay::new(
        ids.next_id(),
        test_image(4, 4),
        Point::new(100.0, 100.0),
        Size::new(150.0, 150.0),
    )
}

fn ids_of(store: &OverlayStore, face: Face) -> Vec<OverlayId> {
    store.collection(face).iter().map(|o| o.id).collect()
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();

    let added: Vec<OverlayId> = (0..5)
        .map(|_| {
            let o = overlay(&mut ids);
            let id = o.id;
            store.add(Face::Front, o);
            id
        })
        .collect();

    assert_eq!(ids_of(&store, Face::Front), added);
    assert!(store.is_empty(Face::Back));
}

#[test]
fn test_ids_are_unique() {
    let mut ids = SequentialIds::starting_at(10);
    let mut store = OverlayStore::new();
    for face in [Face::Front, Face::Back, Face::Front, Face::Back, Face::Front] {
        store.add(face, overlay(&mut ids));
    }

    let mut all: Vec<OverlayId> = ids_of(&store, Face::Front);
    all.extend(ids_of(&store, Face::Back));
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);
}

#[test]
fn test_faces_are_independent() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    let front = overlay(&mut ids);
    let front_id = front.id;
    store.add(Face::Front, front);

    assert_eq!(ids_of(&store, Face::Front), vec![front_id]);
    assert!(ids_of(&store, Face::Back).is_empty());
}

#[test]
fn test_switching_face_does_not_alter_collections() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    store.add(Face::Front, overlay(&mut ids));
    store.add(Face::Back, overlay(&mut ids));
    let front = store.collection(Face::Front);
    let back = store.collection(Face::Back);

    store.set_active(Face::Back);
    store.set_active(Face::Front);
    store.set_active(Face::Back);

    assert!(Arc::ptr_eq(&front, &store.collection(Face::Front)));
    assert!(Arc::ptr_eq(&back, &store.collection(Face::Back)));
    assert_eq!(store.active(), Face::Back);
}

#[test]
fn test_remove_missing_id_is_noop() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    store.add(Face::Front, overlay(&mut ids));
    let before = store.collection(Face::Front);

    assert!(!store.remove(OverlayId(12345)));

    let after = store.collection(Face::Front);
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 1);
}

#[test]
fn test_remove_is_scoped_to_active_face() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    let back = overlay(&mut ids);
    let back_id = back.id;
    store.add(Face::Back, back);

    // Active face is front; the back overlay is not addressable.
    assert!(!store.remove(back_id));
    assert_eq!(store.len(Face::Back), 1);

    store.set_active(Face::Back);
    assert!(store.remove(back_id));
    assert!(store.is_empty(Face::Back));
}

#[test]
fn test_update_merges_only_given_fields() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    let o = overlay(&mut ids);
    let id = o.id;
    store.add(Face::Front, o);

    store.update(id, &OverlayPatch::position(Point::new(140.0, 90.0)));

    let updated = store.find(id).unwrap();
    assert_eq!(updated.position, Point::new(140.0, 90.0));
    assert_eq!(updated.size, Size::new(150.0, 150.0));
    assert!(updated.processed.is_none());
}

#[test]
fn test_update_clamps_size() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    let o = overlay(&mut ids);
    let id = o.id;
    store.add(Face::Front, o);

    store.update(id, &OverlayPatch::size(Size::new(-50.0, 3.0)));

    assert_eq!(store.find(id).unwrap().size, Size::new(20.0, 20.0));
}

#[test]
fn test_update_in_targets_named_face() {
    let mut ids = SequentialIds::default();
    let mut store = OverlayStore::new();
    let o = overlay(&mut ids);
    let id = o.id;
    store.add(Face::Back, o);

    assert!(store.update_in(Face::Back, id, &OverlayPatch::show_processed(true)));
    assert!(!store.update_in(Face::Front, id, &OverlayPatch::show_processed(false)));
    assert!(store.find_in(Face::Back, id).unwrap().show_processed);
}
