//! Row synthesizers, one per output table.
//!
//! Every synthesizer produces `rows` records with dense 1-based surrogate
//! ids. Reference fields always sample from an explicit [`IdPool`] supplied
//! by the caller; a generator asked to sample from an empty pool fails with
//! [`GenerationError::EmptyIdPool`] instead of emitting malformed rows.

use rand::Rng;
use rand::seq::IndexedRandom;

use rxseed_core::{
    Address, Delivery, DeliveryPerson, Inventory, MedicationItem, Order, OrderItem, Patient,
    PaymentMethod, Pharmacy, Physician, Prescription, Supplier, SupplyRecord, TableRow,
    Transaction,
};

use crate::errors::GenerationError;
use crate::pool::IdPool;
use crate::providers;

pub fn addresses(rng: &mut impl Rng, rows: u32) -> Vec<Address> {
    (1..=rows)
        .map(|id| Address {
            address_id: id,
            street: providers::street_address(rng),
            city: providers::city(rng),
            state: providers::state_abbr(rng),
            zip_code: providers::zip_code(rng),
        })
        .collect()
}

pub fn patients(
    rng: &mut impl Rng,
    rows: u32,
    addresses: &IdPool,
) -> Result<Vec<Patient>, GenerationError> {
    if rows > 0 {
        addresses.ensure_non_empty(Patient::TABLE, "AddressID")?;
    }
    Ok((1..=rows)
        .map(|id| Patient {
            patient_id: id,
            address_id: addresses.sample(rng),
            first_name: providers::first_name(rng),
            last_name: providers::last_name(rng),
            email: providers::email(rng),
            contact_number: providers::phone_number(rng),
            previous_purchase: rng.random_bool(0.5),
            birth_date: providers::birth_date(rng),
        })
        .collect())
}

pub fn physicians(rng: &mut impl Rng, rows: u32) -> Vec<Physician> {
    (1..=rows)
        .map(|id| Physician {
            physician_id: id,
            name: providers::full_name(rng),
            specialty: providers::specialty(rng),
            phone_number: providers::phone_number(rng),
            visiting_hospital: providers::hospital(rng),
        })
        .collect()
}

pub fn prescriptions(
    rng: &mut impl Rng,
    rows: u32,
    patients: &IdPool,
    physicians: &IdPool,
) -> Result<Vec<Prescription>, GenerationError> {
    if rows > 0 {
        patients.ensure_non_empty(Prescription::TABLE, "PatientID")?;
        physicians.ensure_non_empty(Prescription::TABLE, "PhysicianID")?;
    }
    Ok((1..=rows)
        .map(|id| Prescription {
            prescription_id: id,
            patient_id: patients.sample(rng),
            physician_id: physicians.sample(rng),
            date_issued: providers::issued_date(rng),
            dosage: providers::dosage(rng),
        })
        .collect())
}

pub fn medication_items(rng: &mut impl Rng, rows: u32) -> Vec<MedicationItem> {
    (1..=rows)
        .map(|id| MedicationItem {
            medication_item_id: id,
            name: providers::medication_name(rng),
            description: providers::description(rng),
            side_effects: providers::side_effects(rng),
            expiry_date: providers::expiry_date(rng),
        })
        .collect()
}

pub fn pharmacies(rng: &mut impl Rng, rows: u32) -> Vec<Pharmacy> {
    (1..=rows)
        .map(|id| Pharmacy {
            pharmacy_id: id,
            shop_name: providers::company_name(rng),
            shop_street: providers::street_address(rng),
            shop_city: providers::city(rng),
            shop_state: providers::state_abbr(rng),
            shop_zip_code: providers::zip_code(rng),
            phone_number: providers::phone_number(rng),
        })
        .collect()
}

pub fn inventories(
    rng: &mut impl Rng,
    rows: u32,
    pharmacies: &IdPool,
    medications: &IdPool,
) -> Result<Vec<Inventory>, GenerationError> {
    if rows > 0 {
        pharmacies.ensure_non_empty(Inventory::TABLE, "PharmacyID")?;
        medications.ensure_non_empty(Inventory::TABLE, "MedicationItemID")?;
    }
    Ok((1..=rows)
        .map(|id| Inventory {
            inventory_id: id,
            pharmacy_id: pharmacies.sample(rng),
            medication_item_id: medications.sample(rng),
            quantity: rng.random_range(0..=100),
        })
        .collect())
}

pub fn orders(
    rng: &mut impl Rng,
    rows: u32,
    pharmacies: &IdPool,
    prescriptions: &IdPool,
) -> Result<Vec<Order>, GenerationError> {
    if rows > 0 {
        pharmacies.ensure_non_empty(Order::TABLE, "PharmacyID")?;
        prescriptions.ensure_non_empty(Order::TABLE, "PrescriptionID")?;
    }
    Ok((1..=rows)
        .map(|id| Order {
            order_id: id,
            pharmacy_id: pharmacies.sample(rng),
            prescription_id: prescriptions.sample(rng),
            order_date: providers::activity_date(rng),
            delivery_date: providers::activity_date(rng),
            total_price: providers::amount_between(rng, 10.0, 500.0),
        })
        .collect())
}

pub fn order_items(
    rng: &mut impl Rng,
    rows: u32,
    orders: &IdPool,
    medications: &IdPool,
) -> Result<Vec<OrderItem>, GenerationError> {
    if rows > 0 {
        orders.ensure_non_empty(OrderItem::TABLE, "OrderID")?;
        medications.ensure_non_empty(OrderItem::TABLE, "MedicationItemID")?;
    }
    Ok((1..=rows)
        .map(|id| OrderItem {
            order_item_id: id,
            order_id: orders.sample(rng),
            medication_item_id: medications.sample(rng),
            quantity: rng.random_range(1..=5),
            note: providers::note(rng),
        })
        .collect())
}

pub fn delivery_people(rng: &mut impl Rng, rows: u32) -> Vec<DeliveryPerson> {
    (1..=rows)
        .map(|id| DeliveryPerson {
            delivery_person_id: id,
            first_name: providers::first_name(rng),
            last_name: providers::last_name(rng),
            email: providers::email(rng),
            phone_number: providers::phone_number(rng),
        })
        .collect()
}

pub fn deliveries(
    rng: &mut impl Rng,
    rows: u32,
    orders: &IdPool,
    couriers: &IdPool,
) -> Result<Vec<Delivery>, GenerationError> {
    if rows > 0 {
        orders.ensure_non_empty(Delivery::TABLE, "OrderID")?;
        couriers.ensure_non_empty(Delivery::TABLE, "DeliveryPersonID")?;
    }
    Ok((1..=rows)
        .map(|id| Delivery {
            delivery_id: id,
            order_id: orders.sample(rng),
            delivery_person_id: couriers.sample(rng),
            dispatch_date: providers::activity_date(rng),
            delivery_date: providers::activity_date(rng),
        })
        .collect())
}

pub fn suppliers(rng: &mut impl Rng, rows: u32) -> Vec<Supplier> {
    (1..=rows)
        .map(|id| Supplier {
            supplier_id: id,
            first_name: providers::first_name(rng),
            last_name: providers::last_name(rng),
            phone_number: providers::phone_number(rng),
            email: providers::email(rng),
            street: providers::street_address(rng),
            city: providers::city(rng),
            state: providers::state_abbr(rng),
            zip_code: providers::zip_code(rng),
        })
        .collect()
}

pub fn supply_records(
    rng: &mut impl Rng,
    rows: u32,
    suppliers: &IdPool,
    pharmacies: &IdPool,
    medications: &IdPool,
) -> Result<Vec<SupplyRecord>, GenerationError> {
    if rows > 0 {
        suppliers.ensure_non_empty(SupplyRecord::TABLE, "SupplierID")?;
        pharmacies.ensure_non_empty(SupplyRecord::TABLE, "PharmacyID")?;
        medications.ensure_non_empty(SupplyRecord::TABLE, "MedicationItemID")?;
    }
    Ok((1..=rows)
        .map(|id| SupplyRecord {
            supply_record_id: id,
            supplier_id: suppliers.sample(rng),
            pharmacy_id: pharmacies.sample(rng),
            medication_item_id: medications.sample(rng),
            supply_date: providers::activity_date(rng),
            quantity: rng.random_range(1..=100),
        })
        .collect())
}

pub fn transactions(
    rng: &mut impl Rng,
    rows: u32,
    orders: &IdPool,
) -> Result<Vec<Transaction>, GenerationError> {
    if rows > 0 {
        orders.ensure_non_empty(Transaction::TABLE, "OrderID")?;
    }
    Ok((1..=rows)
        .map(|id| Transaction {
            transaction_id: id,
            order_id: orders.sample(rng),
            amount: providers::amount_between(rng, 10.0, 500.0),
            transaction_date: providers::activity_date(rng),
            payment_method: PaymentMethod::ALL
                .choose(rng)
                .copied()
                .unwrap_or(PaymentMethod::Cash),
        })
        .collect())
}
