//! Browser-side checks of the JS facade. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use sandcell_engine::World;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_steps_and_exposes_colors() {
    let mut world = World::new(8, 8).expect("valid dims");
    assert!(world.set_at_position(4, 0, "sand"));
    world.step();
    assert_eq!(world.frame(), 1);
    assert_eq!(world.colors_len(), 64);
    assert_eq!(world.core().grid().get(4, 1), Some(1));
}

#[wasm_bindgen_test]
fn facade_rejects_zero_sized_worlds() {
    assert!(World::new(0, 8).is_err());
}

#[wasm_bindgen_test]
fn facade_brush_paints_active_material() {
    let mut world = World::new(8, 8).expect("valid dims");
    world.set_active_material("wood".to_string());
    world.set_brush_radius(0);
    world.set_pointer(3, 3);
    world.set_deposit(true);
    world.step();
    assert_eq!(world.id_by_name("wood"), world.core().grid().get(3, 3));
}

#[wasm_bindgen_test]
fn canvas_constructor_seeds_the_starter_block() {
    let world = World::from_canvas(200, 100, 4).expect("valid dims");
    assert_eq!(world.width(), 50);
    assert_eq!(world.height(), 25);
    assert_eq!(world.particle_count(), 100);
}
