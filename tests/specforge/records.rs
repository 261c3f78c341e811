//! Record generation over the users fixture.

use crate::users_loader;
use pretty_assertions::assert_eq;
use spec_core::GeneratedValue;
use spec_generator::RecordGenerator;

const SEED: u64 = 42;

#[test]
fn test_users_fixture_records() {
    let loader = users_loader(SEED);
    let mut generator = RecordGenerator::new(&loader).unwrap();
    assert_eq!(
        generator.field_names(),
        vec!["id", "user_id", "status", "tier", "score", "pet", "addresses"]
    );

    for record in generator.records(50) {
        let record = record.unwrap();
        assert_eq!(
            record.get_field("id"),
            Some(&GeneratedValue::Int64(record.index as i64 + 1))
        );

        let user_id = record.get_field("user_id").unwrap().as_str().unwrap();
        assert_eq!(user_id.len(), 36);
        assert_eq!(&user_id[14..15], "4");

        let tier = record.get_field("tier").unwrap().as_str().unwrap();
        assert!(["free", "pro", "enterprise"].contains(&tier));

        let score = record.get_field("score").unwrap().as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score));

        let pet = record.get_field("pet").unwrap().as_str().unwrap();
        assert!(["tabby", "siamese", "persian", "beagle", "collie"].contains(&pet));

        let addresses = record.get_field("addresses").unwrap().as_array().unwrap();
        assert!((1..=3).contains(&addresses.len()));
        for address in addresses {
            let address = address.as_object().unwrap();
            let street = address["street"].as_str().unwrap();
            let (number, name) = street.split_once(' ').unwrap();
            assert!(number.parse::<u32>().is_ok());
            assert!(["Main St", "High St", "Station Rd"].contains(&name));

            let location = address["location"].as_str().unwrap();
            let (long, lat) = location.split_once(',').unwrap();
            let long: f64 = long.parse().unwrap();
            let lat: f64 = lat.parse().unwrap();
            assert!((-10.0..=30.0).contains(&long));
            assert!((35.0..=60.0).contains(&lat));
        }
    }
}

#[test]
fn test_same_seed_same_records() {
    let first = users_loader(SEED);
    let second = users_loader(SEED);
    let a = RecordGenerator::new(&first).unwrap();
    let b = RecordGenerator::new(&second).unwrap();
    for i in [0, 1, 17, 999] {
        assert_eq!(a.record_at(i).unwrap(), b.record_at(i).unwrap());
    }
}

#[test]
fn test_different_seed_changes_random_fields() {
    let a = RecordGenerator::new(&users_loader(1)).unwrap();
    let b = RecordGenerator::new(&users_loader(2)).unwrap();
    let a = a.record_at(0).unwrap();
    let b = b.record_at(0).unwrap();
    assert_eq!(a.get_field("id"), b.get_field("id"));
    assert_ne!(a.get_field("user_id"), b.get_field("user_id"));
}

#[test]
fn test_field_group_records() {
    let loader = users_loader(SEED);
    let generator = RecordGenerator::for_group(&loader, "keys").unwrap();
    let record = generator.record_at(4).unwrap();
    let keys: Vec<&str> = record.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "user_id"]);
    assert_eq!(record.get_field("id"), Some(&GeneratedValue::Int64(5)));
}
