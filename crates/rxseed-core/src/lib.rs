//! Canonical record types for the prescription-delivery dataset.
//!
//! This crate defines one strongly typed record per output table and the
//! [`TableRow`] contract the generation and CSV layers are written against.

pub mod records;

pub use records::{
    Address, Delivery, DeliveryPerson, Inventory, MedicationItem, Order, OrderItem, Patient,
    PaymentMethod, Pharmacy, Physician, Prescription, Supplier, SupplyRecord, TableRow,
    Transaction,
};
