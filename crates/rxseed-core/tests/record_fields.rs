use chrono::NaiveDate;

use rxseed_core::{
    Address, Delivery, DeliveryPerson, Inventory, MedicationItem, Order, OrderItem, Patient,
    PaymentMethod, Pharmacy, Physician, Prescription, Supplier, SupplyRecord, TableRow,
    Transaction,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn sample_order() -> Order {
    Order {
        order_id: 7,
        pharmacy_id: 3,
        prescription_id: 12,
        order_date: date(2023, 4, 18),
        delivery_date: date(2023, 4, 21),
        total_price: 149.5,
    }
}

#[test]
fn address_header_matches_contract() {
    assert_eq!(
        Address::HEADER,
        &["AddressID", "Street", "City", "State", "ZipCode"]
    );
    assert_eq!(Address::TABLE, "Address");
}

#[test]
fn every_record_matches_its_header_arity() {
    let address = Address {
        address_id: 1,
        street: "12 Main St".into(),
        city: "Boston".into(),
        state: "MA".into(),
        zip_code: "02115".into(),
    };
    assert_eq!(address.fields().len(), Address::HEADER.len());

    let patient = Patient {
        patient_id: 1,
        address_id: 4,
        first_name: "Ada".into(),
        last_name: "Byron".into(),
        email: "ada@example.com".into(),
        contact_number: "555-0100".into(),
        previous_purchase: true,
        birth_date: date(1987, 6, 5),
    };
    assert_eq!(patient.fields().len(), Patient::HEADER.len());

    let physician = Physician {
        physician_id: 1,
        name: "Grace Hopper".into(),
        specialty: "Cardiology".into(),
        phone_number: "555-0101".into(),
        visiting_hospital: "Boston General Hospital".into(),
    };
    assert_eq!(physician.fields().len(), Physician::HEADER.len());

    let prescription = Prescription {
        prescription_id: 1,
        patient_id: 1,
        physician_id: 1,
        date_issued: date(2024, 1, 2),
        dosage: "Take 1 tablet once daily".into(),
    };
    assert_eq!(prescription.fields().len(), Prescription::HEADER.len());

    let medication = MedicationItem {
        medication_item_id: 1,
        name: "Atorvastatin 20mg".into(),
        description: "Lipid-lowering agent.".into(),
        side_effects: "nausea; headache".into(),
        expiry_date: date(2026, 9, 1),
    };
    assert_eq!(medication.fields().len(), MedicationItem::HEADER.len());

    let pharmacy = Pharmacy {
        pharmacy_id: 1,
        shop_name: "Corner Pharmacy".into(),
        shop_street: "9 Elm St".into(),
        shop_city: "Salem".into(),
        shop_state: "MA".into(),
        shop_zip_code: "01970".into(),
        phone_number: "555-0102".into(),
    };
    assert_eq!(pharmacy.fields().len(), Pharmacy::HEADER.len());

    let inventory = Inventory {
        inventory_id: 1,
        pharmacy_id: 1,
        medication_item_id: 1,
        quantity: 42,
    };
    assert_eq!(inventory.fields().len(), Inventory::HEADER.len());

    assert_eq!(sample_order().fields().len(), Order::HEADER.len());

    let order_item = OrderItem {
        order_item_id: 1,
        order_id: 7,
        medication_item_id: 1,
        quantity: 2,
        note: "Refrigerate after opening.".into(),
    };
    assert_eq!(order_item.fields().len(), OrderItem::HEADER.len());

    let courier = DeliveryPerson {
        delivery_person_id: 1,
        first_name: "Sam".into(),
        last_name: "Reed".into(),
        email: "sam@example.com".into(),
        phone_number: "555-0103".into(),
    };
    assert_eq!(courier.fields().len(), DeliveryPerson::HEADER.len());

    let delivery = Delivery {
        delivery_id: 1,
        order_id: 7,
        delivery_person_id: 1,
        dispatch_date: date(2023, 4, 19),
        delivery_date: date(2023, 4, 21),
    };
    assert_eq!(delivery.fields().len(), Delivery::HEADER.len());

    let supplier = Supplier {
        supplier_id: 1,
        first_name: "Ona".into(),
        last_name: "Wells".into(),
        phone_number: "555-0104".into(),
        email: "ona@example.com".into(),
        street: "80 Dock Rd".into(),
        city: "Lowell".into(),
        state: "MA".into(),
        zip_code: "01850".into(),
    };
    assert_eq!(supplier.fields().len(), Supplier::HEADER.len());

    let supply_record = SupplyRecord {
        supply_record_id: 1,
        supplier_id: 1,
        pharmacy_id: 1,
        medication_item_id: 1,
        supply_date: date(2023, 2, 14),
        quantity: 60,
    };
    assert_eq!(supply_record.fields().len(), SupplyRecord::HEADER.len());

    let transaction = Transaction {
        transaction_id: 1,
        order_id: 7,
        amount: 149.5,
        transaction_date: date(2023, 4, 21),
        payment_method: PaymentMethod::Cash,
    };
    assert_eq!(transaction.fields().len(), Transaction::HEADER.len());
}

#[test]
fn dates_serialize_as_iso_days() {
    let order = sample_order();
    let fields = order.fields();
    assert_eq!(fields[3], "2023-04-18");
    assert_eq!(fields[4], "2023-04-21");
}

#[test]
fn money_serializes_with_two_decimals() {
    let order = sample_order();
    assert_eq!(order.fields()[5], "149.50");

    let transaction = Transaction {
        transaction_id: 2,
        order_id: 7,
        amount: 80.0,
        transaction_date: date(2023, 5, 1),
        payment_method: PaymentMethod::DebitCard,
    };
    assert_eq!(transaction.fields()[2], "80.00");
}

#[test]
fn payment_methods_form_a_closed_set() {
    let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();
    assert_eq!(labels, vec!["Credit Card", "Debit Card", "Cash"]);
}

#[test]
fn previous_purchase_serializes_as_bool_literal() {
    let patient = Patient {
        patient_id: 9,
        address_id: 2,
        first_name: "Lee".into(),
        last_name: "Park".into(),
        email: "lee@example.com".into(),
        contact_number: "555-0105".into(),
        previous_purchase: false,
        birth_date: date(1990, 12, 31),
    };
    assert_eq!(patient.fields()[6], "false");
    assert_eq!(patient.fields()[7], "1990-12-31");
}
