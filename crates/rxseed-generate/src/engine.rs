use std::path::PathBuf;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use rxseed_core::{
    Address, Delivery, DeliveryPerson, Inventory, MedicationItem, Order, OrderItem, Patient,
    Pharmacy, Physician, Prescription, Supplier, SupplyRecord, TableRow, Transaction,
};

use crate::errors::GenerationError;
use crate::model::{DatasetOptions, DatasetReport};
use crate::output::write_table;
use crate::pool::IdPool;
use crate::tables;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct DatasetResult {
    pub out_dir: PathBuf,
    pub report: DatasetReport,
}

/// Entry point for generating the full prescription-delivery dataset.
#[derive(Debug, Clone)]
pub struct DatasetEngine {
    options: DatasetOptions,
}

impl DatasetEngine {
    pub fn new(options: DatasetOptions) -> Self {
        Self { options }
    }

    /// Generate and write all 14 tables, then the run report.
    ///
    /// Tables are produced in dependency order so every reference field
    /// samples from the id pool of an already generated table. The first
    /// error aborts the run; files already written are left in place.
    pub fn run(&self) -> Result<DatasetResult, GenerationError> {
        let start = Instant::now();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let rows = self.options.rows;

        std::fs::create_dir_all(&self.options.out_dir)?;

        let mut report = DatasetReport::new(seed);
        info!(
            seed,
            rows,
            out_dir = %self.options.out_dir.display(),
            "dataset generation started"
        );

        let addresses = tables::addresses(&mut table_rng(seed, Address::TABLE), rows);
        self.write_step(&addresses, &mut report)?;
        let address_ids = IdPool::dense(addresses.len() as u32);

        let patients = tables::patients(&mut table_rng(seed, Patient::TABLE), rows, &address_ids)?;
        self.write_step(&patients, &mut report)?;
        let patient_ids = IdPool::dense(patients.len() as u32);

        let physicians = tables::physicians(&mut table_rng(seed, Physician::TABLE), rows);
        self.write_step(&physicians, &mut report)?;
        let physician_ids = IdPool::dense(physicians.len() as u32);

        let prescriptions = tables::prescriptions(
            &mut table_rng(seed, Prescription::TABLE),
            rows,
            &patient_ids,
            &physician_ids,
        )?;
        self.write_step(&prescriptions, &mut report)?;
        let prescription_ids = IdPool::dense(prescriptions.len() as u32);

        let medications =
            tables::medication_items(&mut table_rng(seed, MedicationItem::TABLE), rows);
        self.write_step(&medications, &mut report)?;
        let medication_ids = IdPool::dense(medications.len() as u32);

        let pharmacies = tables::pharmacies(&mut table_rng(seed, Pharmacy::TABLE), rows);
        self.write_step(&pharmacies, &mut report)?;
        let pharmacy_ids = IdPool::dense(pharmacies.len() as u32);

        let inventories = tables::inventories(
            &mut table_rng(seed, Inventory::TABLE),
            rows,
            &pharmacy_ids,
            &medication_ids,
        )?;
        self.write_step(&inventories, &mut report)?;

        let orders = tables::orders(
            &mut table_rng(seed, Order::TABLE),
            rows,
            &pharmacy_ids,
            &prescription_ids,
        )?;
        self.write_step(&orders, &mut report)?;
        let order_ids = IdPool::dense(orders.len() as u32);

        let order_items = tables::order_items(
            &mut table_rng(seed, OrderItem::TABLE),
            rows,
            &order_ids,
            &medication_ids,
        )?;
        self.write_step(&order_items, &mut report)?;

        let couriers = tables::delivery_people(&mut table_rng(seed, DeliveryPerson::TABLE), rows);
        self.write_step(&couriers, &mut report)?;
        let courier_ids = IdPool::dense(couriers.len() as u32);

        let deliveries = tables::deliveries(
            &mut table_rng(seed, Delivery::TABLE),
            rows,
            &order_ids,
            &courier_ids,
        )?;
        self.write_step(&deliveries, &mut report)?;

        let suppliers = tables::suppliers(&mut table_rng(seed, Supplier::TABLE), rows);
        self.write_step(&suppliers, &mut report)?;
        let supplier_ids = IdPool::dense(suppliers.len() as u32);

        let supply_records = tables::supply_records(
            &mut table_rng(seed, SupplyRecord::TABLE),
            rows,
            &supplier_ids,
            &pharmacy_ids,
            &medication_ids,
        )?;
        self.write_step(&supply_records, &mut report)?;

        let transactions =
            tables::transactions(&mut table_rng(seed, Transaction::TABLE), rows, &order_ids)?;
        self.write_step(&transactions, &mut report)?;

        report.duration_ms = start.elapsed().as_millis() as u64;
        let report_path = self.options.out_dir.join("generation_report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            tables = report.tables.len(),
            rows_total = report.rows_total,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "dataset generation completed"
        );

        Ok(DatasetResult {
            out_dir: self.options.out_dir.clone(),
            report,
        })
    }

    fn write_step<T: TableRow>(
        &self,
        rows: &[T],
        report: &mut DatasetReport,
    ) -> Result<(), GenerationError> {
        let path = self.options.out_dir.join(format!("{}.csv", T::TABLE));
        let bytes_written = write_table(&path, rows)?;
        report.record_table(T::TABLE, rows.len() as u64, bytes_written);
        info!(
            table = T::TABLE,
            rows = rows.len(),
            bytes_written,
            "table written"
        );
        Ok(())
    }
}

/// Derive a per-table rng so one table's content depends only on the run
/// seed and its own name, never on how many values other tables drew.
fn table_rng(seed: u64, table: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, table))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_table_seeds_differ() {
        let address = hash_seed(1, Address::TABLE);
        let patient = hash_seed(1, Patient::TABLE);
        assert_ne!(address, patient);
    }

    #[test]
    fn per_table_seeds_are_stable() {
        assert_eq!(hash_seed(7, "Order"), hash_seed(7, "Order"));
        assert_ne!(hash_seed(7, "Order"), hash_seed(8, "Order"));
    }
}
