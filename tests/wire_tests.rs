use broadside::service::{CellDto, FleetConfigDto};
use broadside::{Coord, Fleet, GameError, Orientation};
use serde_json::json;

#[test]
fn cells_round_trip_through_the_wire_shape() {
    for label in ["A1", "B7", "J10", "C10", "J1"] {
        let coord = Coord::parse(label).unwrap();
        assert_eq!(CellDto::from(coord).to_coord(), Ok(coord));
    }
}

#[test]
fn cell_payload_uses_row_letter_and_one_based_column() {
    let dto = CellDto::from(Coord::parse("B7").unwrap());
    assert_eq!(
        serde_json::to_value(&dto).unwrap(),
        json!({ "x": "B", "y": 7 })
    );
}

#[test]
fn off_vocabulary_cells_are_rejected_on_decode() {
    let dto = CellDto {
        x: "K".to_string(),
        y: 1,
    };
    assert_eq!(dto.to_coord(), Err(GameError::InvalidCoordinate));
    let dto = CellDto {
        x: "A".to_string(),
        y: 11,
    };
    assert_eq!(dto.to_coord(), Err(GameError::InvalidCoordinate));
}

#[test]
fn fleet_payload_matches_the_service_contract() {
    let fleet = Fleet::new()
        .try_place(Coord::parse("B7").unwrap(), 3, Orientation::Horizontal)
        .unwrap()
        .try_place(Coord::parse("C1").unwrap(), 2, Orientation::Vertical)
        .unwrap();
    let payload = FleetConfigDto::from(&fleet);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "ships": [
                { "x": "B", "y": 7, "size": 3, "direction": "HORIZONTAL" },
                { "x": "C", "y": 1, "size": 2, "direction": "VERTICAL" },
            ]
        })
    );

    let decoded: FleetConfigDto = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, payload);
}
