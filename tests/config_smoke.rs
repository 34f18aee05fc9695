use cellgrid_engine::{Category, Color, SimConfig, Simulation};

const WORLD_TXT: &str = "\
h:12
w:10
s:3
matter
n:sand
t:gr
d:3
c:220,190,90

n:water
t:l
d:2
c:40,90,220

n:stone
t:s
d:100
c:90,90,90

n:steam
t:g
d:1
c:230,230,240
";

#[test]
fn text_config_builds_a_running_simulation() {
    let config = SimConfig::parse(WORLD_TXT).unwrap();
    let mut sim = Simulation::from_config(&config);

    assert_eq!((sim.width(), sim.height(), sim.pixel_size()), (10, 12, 3));
    assert_eq!(sim.material_names(), vec!["sand", "water", "stone", "steam"]);

    sim.place_cell(0, 5, "sand");
    sim.place_cell(11, 0, "steam");
    for _ in 0..30 {
        sim.step();
    }
    assert_eq!(sim.get_cell(11, 5).map(|c| c.name()), Some("sand"));
    // Gas keeps drifting along the ceiling once it gets there
    assert!((0..10).any(|col| sim.get_cell(0, col).map(|c| c.name()) == Some("steam")));
}

#[test]
fn json_and_text_configs_agree() {
    let json = r#"{
        "width": 10, "height": 12, "pixelSize": 3,
        "materials": [
            { "name": "sand", "category": "grain", "density": 3, "color": [220, 190, 90] },
            { "name": "water", "category": "liquid", "density": 2, "color": [40, 90, 220] },
            { "name": "stone", "category": "solid", "density": 100, "color": [90, 90, 90] },
            { "name": "steam", "category": "gas", "density": 1, "color": [230, 230, 240] }
        ]
    }"#;
    assert_eq!(SimConfig::from_json(json).unwrap(), SimConfig::parse(WORLD_TXT).unwrap());
}

#[test]
fn material_fields_default_when_omitted() {
    let config = SimConfig::parse("w:4\nh:4\nmatter\nn:dust\n").unwrap();
    let dust = &config.materials[0];
    assert_eq!(dust.category, Category::Grain);
    assert_eq!(dust.density, 0);
    assert_eq!(dust.color, Color::rgb(0, 0, 0));
}

#[test]
fn broken_config_is_an_error_not_a_panic() {
    for text in ["w:wide\n", "matter\nn:a\nc:1,2\n", "matter\nn:a\njunk\n", "matter\nd:3\n"] {
        assert!(SimConfig::parse(text).is_err(), "accepted {:?}", text);
    }
}
