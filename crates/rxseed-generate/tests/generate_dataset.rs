use std::fs;
use std::path::PathBuf;

use rxseed_generate::{DatasetEngine, DatasetOptions, GenerationError};

const TABLES: [&str; 14] = [
    "Address",
    "Patient",
    "Physician",
    "Prescription",
    "MedicationItem",
    "Pharmacy",
    "Inventory",
    "Order",
    "OrderItem",
    "DeliveryPerson",
    "Delivery",
    "Supplier",
    "SupplyRecord",
    "Transaction",
];

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("rxseed_generate_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn run(label: &str, rows: u32, seed: Option<u64>) -> (PathBuf, rxseed_generate::DatasetReport) {
    let out_dir = temp_out_dir(label);
    let options = DatasetOptions {
        out_dir: out_dir.clone(),
        rows,
        seed,
    };
    let result = DatasetEngine::new(options).run().expect("run generation");
    (out_dir, result.report)
}

#[test]
fn run_writes_all_fourteen_tables_and_the_report() {
    let (out_dir, report) = run("all_tables", 20, Some(1));

    for table in TABLES {
        let path = out_dir.join(format!("{table}.csv"));
        assert!(path.is_file(), "missing {table}.csv");
    }
    assert!(out_dir.join("generation_report.json").is_file());

    assert_eq!(report.tables.len(), 14);
    assert_eq!(report.rows_total, 14 * 20);
    assert_eq!(report.seed, 1);
    for table in &report.tables {
        assert_eq!(table.rows, 20, "table {} row count", table.table);
        assert!(table.bytes_written > 0);
    }
    let bytes_sum: u64 = report.tables.iter().map(|t| t.bytes_written).sum();
    assert_eq!(report.bytes_written, bytes_sum);
}

#[test]
fn address_file_has_exact_header_and_dense_ids() {
    let (out_dir, _) = run("address", 20, Some(2));

    let contents = fs::read_to_string(out_dir.join("Address.csv")).expect("read Address.csv");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "AddressID,Street,City,State,ZipCode");

    for (index, line) in lines[1..].iter().enumerate() {
        let id = line.split(',').next().expect("first field");
        assert_eq!(id, (index + 1).to_string());
    }
}

#[test]
fn inventory_references_and_quantities_stay_in_range() {
    let (out_dir, _) = run("inventory", 20, Some(3));

    let mut reader = csv::Reader::from_path(out_dir.join("Inventory.csv")).expect("open file");
    let mut rows = 0;
    for record in reader.records() {
        let record = record.expect("read record");
        let pharmacy_id: u32 = record[1].parse().expect("PharmacyID");
        let medication_id: u32 = record[2].parse().expect("MedicationItemID");
        let quantity: u32 = record[3].parse().expect("Quantity");
        assert!((1..=20).contains(&pharmacy_id));
        assert!((1..=20).contains(&medication_id));
        assert!(quantity <= 100);
        rows += 1;
    }
    assert_eq!(rows, 20);
}

#[test]
fn every_written_field_is_non_empty() {
    let (out_dir, _) = run("non_empty", 10, Some(4));

    for table in TABLES {
        let path = out_dir.join(format!("{table}.csv"));
        let mut reader = csv::Reader::from_path(&path).expect("open file");
        let headers = reader.headers().expect("read header").clone();
        let mut rows = 0;
        for record in reader.records() {
            let record = record.expect("read record");
            assert_eq!(record.len(), headers.len(), "{table} arity");
            for field in record.iter() {
                assert!(!field.is_empty(), "{table} has an empty field");
            }
            rows += 1;
        }
        assert_eq!(rows, 10, "{table} row count");
    }
}

#[test]
fn same_seed_reproduces_the_dataset() {
    let (dir_a, _) = run("seed_a", 20, Some(77));
    let (dir_b, _) = run("seed_b", 20, Some(77));

    for table in TABLES {
        let file = format!("{table}.csv");
        let a = fs::read_to_string(dir_a.join(&file)).expect("read run A");
        let b = fs::read_to_string(dir_b.join(&file)).expect("read run B");
        assert_eq!(a, b, "{file} should be identical across seeded runs");
    }
}

#[test]
fn unseeded_run_records_its_seed() {
    let (out_dir, report) = run("unseeded", 5, None);

    let raw = fs::read_to_string(out_dir.join("generation_report.json")).expect("read report");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
    let seed = parsed
        .get("seed")
        .and_then(|value| value.as_u64())
        .expect("seed field");
    assert_eq!(seed, report.seed);
}

#[test]
fn zero_rows_yields_header_only_files() {
    let (out_dir, report) = run("zero_rows", 0, Some(5));

    assert_eq!(report.rows_total, 0);
    for table in TABLES {
        let contents =
            fs::read_to_string(out_dir.join(format!("{table}.csv"))).expect("read file");
        assert_eq!(contents.lines().count(), 1, "{table} should be header-only");
    }
}

#[test]
fn single_row_yields_exactly_one_data_line() {
    let (out_dir, _) = run("one_row", 1, Some(6));

    let contents = fs::read_to_string(out_dir.join("Patient.csv")).expect("read Patient.csv");
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn unwritable_out_dir_aborts_before_any_table() {
    let parent = temp_out_dir("unwritable");
    fs::create_dir_all(&parent).expect("create parent");
    let blocker = parent.join("blocker");
    fs::write(&blocker, b"not a directory").expect("write blocker file");

    let out_dir = blocker.join("nested");
    let options = DatasetOptions {
        out_dir: out_dir.clone(),
        rows: 20,
        seed: Some(7),
    };
    let err = DatasetEngine::new(options)
        .run()
        .expect_err("run must fail");
    assert!(matches!(err, GenerationError::Io(_)));
    assert!(!out_dir.exists());
}
