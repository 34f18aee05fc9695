use cellgrid_engine::World;

const PALETTE: &str = r#"[
    { "name": "sand", "category": "grain", "density": 3, "color": [220, 190, 90] },
    { "name": "water", "category": "liquid", "density": 2, "color": [40, 90, 220] }
]"#;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64);
    assert!(world.load_materials_json(PALETTE).is_ok());
    world.enable_perf_metrics(true);
    for row in 0..32 {
        for col in 0..128 {
            let name = if col % 2 == 0 { "sand" } else { "water" };
            world.place_cell(row, col, name);
        }
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.occupied_cells(), 128 * 32);
    assert!(stats.cells_processed() > 0);
    assert!(stats.cells_moved() > 0);
}

#[test]
fn perf_smoke_render() {
    let mut world = World::new(16, 16);
    assert!(world.load_materials_json(PALETTE).is_ok());
    for col in 0..16 {
        world.place_cell(0, col, "sand");
    }
    for _ in 0..2000 {
        if world.pending_updates() == 0 {
            break;
        }
        world.step();
    }
    world.render();
    assert_eq!(world.pixels_len(), 16 * 16);
    assert!(!world.pixels_ptr().is_null());
    // Every grain reached the floor
    assert!((0..16).all(|col| world.cell_name(15, col).as_deref() == Some("sand")));
}
