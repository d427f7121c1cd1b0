//! End-to-end take-offs for reference jobs.
//!
//! Run with: cargo test -p takeoff_core --test scenarios

use pretty_assertions::assert_eq;

use takeoff_core::inputs::{Application, BaseboardMaterial, Traffic};
use takeoff_core::result::SettingMethod;
use takeoff_core::{calculate, CoveringType, Environment, Inputs, TakeoffResult, TileMaterial, Unit};

fn quantities(result: &TakeoffResult) -> Vec<(&str, f64, Unit)> {
    result
        .items
        .iter()
        .map(|item| (item.name.as_str(), item.quantity, item.unit))
        .collect()
}

fn ceramic_floor() -> Inputs {
    let mut inputs = Inputs::new(CoveringType::Floor, Environment::Dry);
    inputs.tile_material = Some(TileMaterial::Ceramic);
    inputs.length_m = Some(3.0);
    inputs.width_m = Some(4.0);
    inputs.piece_length_cm = Some(45.0);
    inputs.piece_width_cm = Some(45.0);
    inputs.joint_mm = Some(3.0);
    inputs.waste_pct = Some(10.0);
    inputs
}

fn wall_marble(thickness_mm: f64) -> Inputs {
    let mut inputs = Inputs::new(CoveringType::Marble, Environment::Dry);
    inputs.application = Some(Application::Wall);
    inputs.length_m = Some(3.0);
    inputs.height_m = Some(2.5);
    inputs.wall_count = Some(1);
    inputs.piece_length_cm = Some(60.0);
    inputs.piece_width_cm = Some(30.0);
    inputs.piece_thickness_mm = Some(thickness_mm);
    inputs.unevenness_cm = Some(0.0);
    inputs.waste_pct = Some(10.0);
    inputs
}

#[test]
fn ceramic_floor_dry_room() {
    let result = calculate(&ceramic_floor()).unwrap();
    assert_eq!(result.header.area_m2, 12.0);
    assert_eq!(
        quantities(&result),
        vec![
            ("Ceramic floor tile 45x45 cm", 13.2, Unit::SquareMeters),
            ("Adhesive mortar ACI", 79.2, Unit::Kilograms),
            ("Cementitious grout type 1", 2.2, Unit::Kilograms),
            ("Spacers 3 mm", 198.0, Unit::Units),
            ("Leveling wedges", 198.0, Unit::Units),
        ]
    );
    assert_eq!(result.items[0].note.as_deref(), Some("4.94 pieces/m² · 66 pieces"));
}

#[test]
fn form_json_keys_are_accepted() {
    let inputs = Inputs::from_json(
        r#"{
            "revest": "FLOOR",
            "ambiente": "DRY",
            "pisoPlacaTipo": "CERAMIC",
            "compM": 3,
            "largM": 4,
            "pecaCompCm": 45,
            "pecaLargCm": 45,
            "juntaMm": 3,
            "sobraPct": 10
        }"#,
    )
    .unwrap();
    assert_eq!(inputs, ceramic_floor());

    let json = serde_json::to_value(calculate(&inputs).unwrap()).unwrap();
    assert_eq!(json["itens"][1]["item"], "Adhesive mortar ACI");
    assert_eq!(json["itens"][1]["unid"], "kg");
    assert_eq!(json["itens"][1]["qtd"], 79.2);
}

#[test]
fn marble_wall_double_gluing() {
    let result = calculate(&wall_marble(20.0)).unwrap();
    assert_eq!(result.header.setting_method, Some(SettingMethod::DoubleGluing));
    assert!(result.item("Adhesive mortar ACIII").is_some());
    assert!(result.item_starting_with("Sand (bed mortar").is_none());
    assert!(result.item_starting_with("Cement (bed mortar").is_none());
    assert!(result.item_starting_with("Cementitious grout").is_some());
}

#[test]
fn thick_marble_needs_bed() {
    let result = calculate(&wall_marble(25.0)).unwrap();
    assert_eq!(result.header.setting_method, Some(SettingMethod::SandCementBed));
    let sand = result.item("Sand (bed mortar 1:4)").unwrap();
    assert_eq!(sand.note.as_deref(), Some("Semi-dry bed 3 cm"));
    assert!(result.item("Cement (bed mortar 1:4)").is_some());
    assert!(result.item("Adhesive mortar ACIII").is_some());
}

#[test]
fn heavy_traffic_pavers() {
    let mut inputs = Inputs::new(CoveringType::InterlockingPaver, Environment::Dry);
    inputs.area_override_m2 = Some(50.0);
    inputs.traffic = Some(Traffic::Heavy);
    inputs.piece_length_cm = Some(20.0);
    inputs.piece_width_cm = Some(10.0);

    let result = calculate(&inputs).unwrap();
    let names = result.item_names();
    assert!(names.iter().any(|n| n.contains("sand")));
    assert!(names.contains(&"Reinforced concrete slab"));
    assert!(names.iter().any(|n| n.starts_with("Cement")));
    assert_eq!(result.item("Welded mesh").unwrap().quantity, 5.0);
    assert_eq!(result.item("Welded mesh").unwrap().unit, Unit::Sheets);
}

#[test]
fn ready_made_baseboard_pieces() {
    let mut inputs = ceramic_floor();
    inputs.baseboard_enabled = true;
    inputs.baseboard_height_cm = Some(7.0);
    inputs.baseboard_material = Some(BaseboardMaterial::ReadyPiece);
    inputs.baseboard_perimeter_auto = false;
    inputs.baseboard_perimeter_manual_m = Some(12.4);
    inputs.baseboard_piece_length_m = Some(1.2);

    let result = calculate(&inputs).unwrap();
    let baseboard = result.item("Baseboard (ready-made pieces)").unwrap();
    // ceil(12.4 x 1.1 / 1.2) = 12 pieces
    assert!(baseboard.note.as_deref().unwrap().contains("12 pieces of 1.2 m"));
    assert_eq!(baseboard.quantity, 1.01);
    assert_eq!(result.header.baseboard_area_m2, None);
}

#[test]
fn wet_bathroom_wall_tiles() {
    let mut inputs = Inputs::new(CoveringType::WallTile, Environment::Wet);
    inputs.tile_material = Some(TileMaterial::Porcelain);
    inputs.length_m = Some(2.0);
    inputs.height_m = Some(2.5);
    inputs.wall_count = Some(4);
    inputs.opening_m2 = Some(1.6);
    inputs.piece_length_cm = Some(30.0);
    inputs.piece_width_cm = Some(60.0);
    inputs.pieces_per_box = Some(8);
    inputs.waterproofing_enabled = true;

    let result = calculate(&inputs).unwrap();
    assert_eq!(result.header.area_m2, 18.4);
    assert_eq!(result.header.joint_mm, Some(1.5));
    assert_eq!(result.items[0].name, "Porcelain wall tile 30x60 cm");
    // 18.4 / 0.18 x 1.1 = 112.4 -> 113 -> 15 boxes of 8
    assert_eq!(
        result.items[0].note.as_deref(),
        Some("5.56 pieces/m² · 120 pieces · 15 boxes")
    );
    assert_eq!(result.item("Adhesive mortar ACII").unwrap().quantity, 141.7);
    // 3 kg/m² over the net wall area
    assert_eq!(result.item("Flexible cementitious waterproofing").unwrap().quantity, 55.2);
}
