use chrono::NaiveDate;

/// Contract between a table's record type and the CSV layer.
///
/// `HEADER` fixes the column order; `fields` must return exactly one value
/// per header entry, in that order.
pub trait TableRow {
    /// Table name, also the output file stem (`Address` -> `Address.csv`).
    const TABLE: &'static str;
    /// Header field names in column order.
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

fn date_field(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn money_field(value: f64) -> String {
    format!("{value:.2}")
}

/// A postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub address_id: u32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl TableRow for Address {
    const TABLE: &'static str = "Address";
    const HEADER: &'static [&'static str] = &["AddressID", "Street", "City", "State", "ZipCode"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.address_id.to_string(),
            self.street.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip_code.clone(),
        ]
    }
}

/// A patient receiving prescriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub patient_id: u32,
    pub address_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub previous_purchase: bool,
    pub birth_date: NaiveDate,
}

impl TableRow for Patient {
    const TABLE: &'static str = "Patient";
    const HEADER: &'static [&'static str] = &[
        "PatientID",
        "AddressID",
        "FirstName",
        "LastName",
        "Email",
        "ContactNumber",
        "PreviousPurchase",
        "BirthDate",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.patient_id.to_string(),
            self.address_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.contact_number.clone(),
            self.previous_purchase.to_string(),
            date_field(self.birth_date),
        ]
    }
}

/// A prescribing physician.
#[derive(Debug, Clone, PartialEq)]
pub struct Physician {
    pub physician_id: u32,
    pub name: String,
    pub specialty: String,
    pub phone_number: String,
    pub visiting_hospital: String,
}

impl TableRow for Physician {
    const TABLE: &'static str = "Physician";
    const HEADER: &'static [&'static str] = &[
        "PhysicianID",
        "Name",
        "Specialty",
        "PhoneNumber",
        "VisitingHospital",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.physician_id.to_string(),
            self.name.clone(),
            self.specialty.clone(),
            self.phone_number.clone(),
            self.visiting_hospital.clone(),
        ]
    }
}

/// A prescription issued by a physician to a patient.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub prescription_id: u32,
    pub patient_id: u32,
    pub physician_id: u32,
    pub date_issued: NaiveDate,
    pub dosage: String,
}

impl TableRow for Prescription {
    const TABLE: &'static str = "Prescription";
    const HEADER: &'static [&'static str] = &[
        "PrescriptionID",
        "PatientID",
        "PhysicianID",
        "DateIssued",
        "Dosage",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.prescription_id.to_string(),
            self.patient_id.to_string(),
            self.physician_id.to_string(),
            date_field(self.date_issued),
            self.dosage.clone(),
        ]
    }
}

/// A medication product carried by pharmacies.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationItem {
    pub medication_item_id: u32,
    pub name: String,
    pub description: String,
    pub side_effects: String,
    pub expiry_date: NaiveDate,
}

impl TableRow for MedicationItem {
    const TABLE: &'static str = "MedicationItem";
    const HEADER: &'static [&'static str] = &[
        "MedicationItemID",
        "Name",
        "Description",
        "SideEffects",
        "ExpiryDate",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.medication_item_id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.side_effects.clone(),
            date_field(self.expiry_date),
        ]
    }
}

/// A pharmacy shop fulfilling orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Pharmacy {
    pub pharmacy_id: u32,
    pub shop_name: String,
    pub shop_street: String,
    pub shop_city: String,
    pub shop_state: String,
    pub shop_zip_code: String,
    pub phone_number: String,
}

impl TableRow for Pharmacy {
    const TABLE: &'static str = "Pharmacy";
    const HEADER: &'static [&'static str] = &[
        "PharmacyID",
        "ShopName",
        "ShopStreet",
        "ShopCity",
        "ShopState",
        "ShopZipCode",
        "PhoneNumber",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.pharmacy_id.to_string(),
            self.shop_name.clone(),
            self.shop_street.clone(),
            self.shop_city.clone(),
            self.shop_state.clone(),
            self.shop_zip_code.clone(),
            self.phone_number.clone(),
        ]
    }
}

/// Stock of one medication at one pharmacy.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub inventory_id: u32,
    pub pharmacy_id: u32,
    pub medication_item_id: u32,
    pub quantity: u32,
}

impl TableRow for Inventory {
    const TABLE: &'static str = "Inventory";
    const HEADER: &'static [&'static str] = &[
        "InventoryID",
        "PharmacyID",
        "MedicationItemID",
        "Quantity",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.inventory_id.to_string(),
            self.pharmacy_id.to_string(),
            self.medication_item_id.to_string(),
            self.quantity.to_string(),
        ]
    }
}

/// An order placed against a prescription at a pharmacy.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: u32,
    pub pharmacy_id: u32,
    pub prescription_id: u32,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub total_price: f64,
}

impl TableRow for Order {
    const TABLE: &'static str = "Order";
    const HEADER: &'static [&'static str] = &[
        "OrderID",
        "PharmacyID",
        "PrescriptionID",
        "OrderDate",
        "DeliveryDate",
        "TotalPrice",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.pharmacy_id.to_string(),
            self.prescription_id.to_string(),
            date_field(self.order_date),
            date_field(self.delivery_date),
            money_field(self.total_price),
        ]
    }
}

/// One medication line within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_item_id: u32,
    pub order_id: u32,
    pub medication_item_id: u32,
    pub quantity: u32,
    pub note: String,
}

impl TableRow for OrderItem {
    const TABLE: &'static str = "OrderItem";
    const HEADER: &'static [&'static str] = &[
        "OrderItemID",
        "OrderID",
        "MedicationItemID",
        "Quantity",
        "Note",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.order_item_id.to_string(),
            self.order_id.to_string(),
            self.medication_item_id.to_string(),
            self.quantity.to_string(),
            self.note.clone(),
        ]
    }
}

/// A courier delivering orders.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryPerson {
    pub delivery_person_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl TableRow for DeliveryPerson {
    const TABLE: &'static str = "DeliveryPerson";
    const HEADER: &'static [&'static str] = &[
        "DeliveryPersonID",
        "FirstName",
        "LastName",
        "Email",
        "PhoneNumber",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.delivery_person_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone_number.clone(),
        ]
    }
}

/// One delivery of an order by a courier.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub delivery_id: u32,
    pub order_id: u32,
    pub delivery_person_id: u32,
    pub dispatch_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl TableRow for Delivery {
    const TABLE: &'static str = "Delivery";
    const HEADER: &'static [&'static str] = &[
        "DeliveryID",
        "OrderID",
        "DeliveryPersonID",
        "DispatchDate",
        "DeliveryDate",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.delivery_id.to_string(),
            self.order_id.to_string(),
            self.delivery_person_id.to_string(),
            date_field(self.dispatch_date),
            date_field(self.delivery_date),
        ]
    }
}

/// A supplier restocking pharmacies.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub supplier_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl TableRow for Supplier {
    const TABLE: &'static str = "Supplier";
    const HEADER: &'static [&'static str] = &[
        "SupplierID",
        "FirstName",
        "LastName",
        "PhoneNumber",
        "Email",
        "Street",
        "City",
        "State",
        "ZipCode",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.supplier_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.phone_number.clone(),
            self.email.clone(),
            self.street.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip_code.clone(),
        ]
    }
}

/// One restocking shipment from a supplier to a pharmacy.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyRecord {
    pub supply_record_id: u32,
    pub supplier_id: u32,
    pub pharmacy_id: u32,
    pub medication_item_id: u32,
    pub supply_date: NaiveDate,
    pub quantity: u32,
}

impl TableRow for SupplyRecord {
    const TABLE: &'static str = "SupplyRecord";
    const HEADER: &'static [&'static str] = &[
        "SupplyRecordID",
        "SupplierID",
        "PharmacyID",
        "MedicationItemID",
        "SupplyDate",
        "Quantity",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.supply_record_id.to_string(),
            self.supplier_id.to_string(),
            self.pharmacy_id.to_string(),
            self.medication_item_id.to_string(),
            date_field(self.supply_date),
            self.quantity.to_string(),
        ]
    }
}

/// A payment against an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: u32,
    pub order_id: u32,
    pub amount: f64,
    pub transaction_date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl TableRow for Transaction {
    const TABLE: &'static str = "Transaction";
    const HEADER: &'static [&'static str] = &[
        "TransactionID",
        "OrderID",
        "Amount",
        "TransactionDate",
        "PaymentMethod",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.transaction_id.to_string(),
            self.order_id.to_string(),
            money_field(self.amount),
            date_field(self.transaction_date),
            self.payment_method.as_str().to_string(),
        ]
    }
}

/// Accepted payment methods for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Cash => "Cash",
        }
    }
}
