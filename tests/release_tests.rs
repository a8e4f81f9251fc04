// Host-side tests for model resource bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/release.rs"]
mod release;

use release::*;

#[test]
fn shared_materials_are_released_once() {
    // Four buttons sharing one group material, plus the chassis.
    let mut materials = ReleaseList::new();
    for (uuid, label) in [
        ("m-buttons", "button 1"),
        ("m-buttons", "button 2"),
        ("m-chassis", "chassis"),
        ("m-buttons", "button 3"),
        ("m-buttons", "button 4"),
    ] {
        materials.push(uuid.to_owned(), label);
    }
    assert_eq!(materials.len(), 2);
    assert_eq!(materials.into_items(), ["button 1", "chassis"]);
}

#[test]
fn push_reports_duplicates() {
    let mut geometries = ReleaseList::new();
    assert!(geometries.is_empty());
    assert!(geometries.push("g-1".to_owned(), 1));
    assert!(!geometries.push("g-1".to_owned(), 2));
    assert!(geometries.push("g-2".to_owned(), 3));
    assert_eq!(geometries.into_items(), vec![1, 3]);
}

#[test]
fn empty_model_releases_nothing() {
    let list: ReleaseList<()> = ReleaseList::new();
    assert!(list.is_empty());
    assert!(list.into_items().is_empty());
}
