use std::io::Write;

use muster_data::{ArmyType, Dataset, DatasetError, UnitKind};

const UNITS_JSON: &str = r#"{
  "gondor_ranger": {
    "model_id": "gondor_ranger",
    "army_type": "Good",
    "army_list": "Minas Tirith",
    "name": "Gondor Ranger",
    "unit_type": "Warrior",
    "base_points": 8,
    "warband_size": 12,
    "options": [
      { "id": "spear", "name": "Spear", "points": 1 }
    ]
  },
  "theoden": {
    "model_id": "theoden",
    "army_type": "Good",
    "army_list": "Rohan",
    "name": "Théoden (plastic)",
    "unit_type": "Hero of Legend",
    "base_points": 95,
    "unique": true,
    "MWFW": [["Théoden", "3:3:2:2"]],
    "options": []
  },
  "morannon_orc": {
    "model_id": "morannon_orc",
    "army_type": "Evil (Legacy)",
    "army_list": "Mordor",
    "name": "Morannon Orc",
    "unit_type": "Warrior",
    "base_points": 7,
    "options": []
  }
}"#;

const SCENARIOS_JSON: &str = r#"{
  "data": [
    {
      "id": 12,
      "name": "Ambush at Amon Hen",
      "size": 30,
      "location": "amon_hen",
      "blurb": "Boromir stands alone against the Uruk-hai.",
      "date_age": 3,
      "date_year": 3019,
      "map_width": 48,
      "map_height": 48,
      "avg_rating": 4.2,
      "num_votes": 17,
      "sources": [
        { "id": 1, "title": "The Two Towers", "book": "TTT", "issue": null, "page": 42 }
      ]
    },
    {
      "id": 15,
      "name": "The Last Alliance",
      "size": 100,
      "location": "mordor",
      "blurb": "The great battle of the Second Age.",
      "date_age": 2,
      "date_year": 3441,
      "sources": []
    }
  ]
}"#;

const ROLES_JSON: &str = r#"{
  "12": [
    {
      "id": 1,
      "sort_order": 1,
      "suggested_points": 350,
      "roles": [
        {
          "id": 10,
          "name": "Boromir",
          "amount": 1,
          "sort_order": 1,
          "figures": [
            { "figure_id": 100, "name": "Boromir (Captain of the White Tower)" }
          ]
        }
      ]
    },
    {
      "id": 2,
      "sort_order": 2,
      "suggested_points": 400,
      "roles": []
    }
  ]
}"#;

fn write_dataset(dir: &std::path::Path, units: &str, scenarios: &str, roles: &str) {
    for (name, contents) in [
        ("units.json", units),
        ("scenarios.json", scenarios),
        ("scenario_roles.json", roles),
    ] {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }
}

#[test]
fn load_full_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), UNITS_JSON, SCENARIOS_JSON, ROLES_JSON);

    let dataset = Dataset::load(dir.path()).unwrap();

    assert_eq!(dataset.unit_count(), 3);
    let ranger = dataset.unit("gondor_ranger").unwrap();
    assert_eq!(ranger.name, "Gondor Ranger");
    assert_eq!(ranger.unit_type, UnitKind::Warrior);
    assert!(dataset.unit("balrog").is_none());

    let ambush = dataset.scenario(12).unwrap();
    assert_eq!(ambush.name, "Ambush at Amon Hen");
    assert_eq!(ambush.sources[0].title, "The Two Towers");

    let factions = dataset.factions(12);
    assert_eq!(factions.len(), 2);
    assert_eq!(factions[0].roles[0].figures[0].figure_id, 100);
    assert!(dataset.factions(999).is_empty());
}

#[test]
fn unit_queries() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), UNITS_JSON, SCENARIOS_JSON, ROLES_JSON);
    let dataset = Dataset::load(dir.path()).unwrap();

    let hits = dataset.search_units("THÉO");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].model_id, "theoden");

    assert_eq!(dataset.armies(), vec!["Minas Tirith", "Mordor", "Rohan"]);
    // Legacy evil lists count as Evil.
    assert_eq!(dataset.armies_by_type(ArmyType::Evil), vec!["Mordor"]);
}

#[test]
fn scenario_queries() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), UNITS_JSON, SCENARIOS_JSON, ROLES_JSON);
    let dataset = Dataset::load(dir.path()).unwrap();

    assert_eq!(dataset.search_scenarios("alliance").len(), 1);
    assert_eq!(dataset.search_scenarios("boromir").len(), 1); // blurb hit
    assert_eq!(dataset.scenarios_at("mordor").len(), 1);
    assert_eq!(dataset.locations(), vec!["amon_hen", "mordor"]);
    assert_eq!(dataset.sourcebooks(), vec!["The Two Towers"]);
}

#[test]
fn mismatched_unit_key_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let bad_units = UNITS_JSON.replace("\"model_id\": \"theoden\"", "\"model_id\": \"theodred\"");
    write_dataset(dir.path(), &bad_units, SCENARIOS_JSON, ROLES_JSON);

    match Dataset::load(dir.path()) {
        Err(DatasetError::Invalid { message, .. }) => assert!(message.contains("theodred")),
        Err(other) => panic!("expected Invalid, got {other:?}"),
        Ok(_) => panic!("expected Invalid, load succeeded"),
    }
}

#[test]
fn duplicate_scenario_id_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let bad = SCENARIOS_JSON.replace("\"id\": 15", "\"id\": 12");
    write_dataset(dir.path(), UNITS_JSON, &bad, ROLES_JSON);

    assert!(matches!(
        Dataset::load(dir.path()),
        Err(DatasetError::Invalid { .. })
    ));
}

#[test]
fn non_numeric_role_key_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let bad = ROLES_JSON.replace("\"12\":", "\"twelve\":");
    write_dataset(dir.path(), UNITS_JSON, SCENARIOS_JSON, &bad);

    assert!(matches!(
        Dataset::load(dir.path()),
        Err(DatasetError::Invalid { .. })
    ));
}

#[test]
fn zero_amount_role_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let bad = ROLES_JSON.replace("\"amount\": 1", "\"amount\": 0");
    write_dataset(dir.path(), UNITS_JSON, SCENARIOS_JSON, &bad);

    assert!(matches!(
        Dataset::load(dir.path()),
        Err(DatasetError::Invalid { .. })
    ));
}

#[test]
fn missing_directory() {
    assert!(matches!(
        Dataset::load(std::path::Path::new("/definitely/not/here")),
        Err(DatasetError::DirNotFound(_))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), "{ not json", SCENARIOS_JSON, ROLES_JSON);

    assert!(matches!(
        Dataset::load(dir.path()),
        Err(DatasetError::Parse { .. })
    ));
}
