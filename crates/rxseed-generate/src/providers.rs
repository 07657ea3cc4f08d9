//! Category-specific fake value providers.
//!
//! Person, address, company, and free-text fields come from `fake` fakers;
//! domain vocabulary (specialties, medication names, dosage, side effects)
//! comes from curated word lists; dates are uniform draws from bounded
//! ranges anchored at a fixed base date so seeded runs stay reproducible.

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::IndexedRandom;

const SPECIALTIES: &[&str] = &[
    "Cardiology",
    "Dermatology",
    "Endocrinology",
    "Family Medicine",
    "Gastroenterology",
    "Neurology",
    "Oncology",
    "Pediatrics",
    "Psychiatry",
    "Rheumatology",
];

const HOSPITAL_SUFFIXES: &[&str] = &[
    "General Hospital",
    "Medical Center",
    "Memorial Hospital",
    "Community Clinic",
    "University Hospital",
];

const MEDICATION_STEMS: &[&str] = &[
    "Ator", "Lisin", "Metf", "Amlo", "Omepr", "Cetir", "Sertra", "Predni", "Azithro", "Levo",
];

const MEDICATION_ENDINGS: &[&str] = &[
    "vastatin",
    "opril",
    "ormin",
    "dipine",
    "azole",
    "izine",
    "line",
    "solone",
    "mycin",
    "floxacin",
];

const STRENGTHS_MG: &[u32] = &[5, 10, 20, 25, 50, 100, 250, 500];

const SIDE_EFFECTS: &[&str] = &[
    "nausea",
    "headache",
    "dizziness",
    "drowsiness",
    "dry mouth",
    "fatigue",
    "insomnia",
    "rash",
    "upset stomach",
    "blurred vision",
    "constipation",
    "loss of appetite",
];

const DOSE_AMOUNTS: &[&str] = &[
    "Take 1 tablet",
    "Take 2 tablets",
    "Take 1 capsule",
    "Take 5 ml",
    "Apply a thin layer",
];

const DOSE_SCHEDULES: &[&str] = &[
    "once daily",
    "twice daily",
    "every 6 hours",
    "every 8 hours",
    "with meals",
    "at bedtime",
    "as needed",
];

pub fn street_address(rng: &mut impl Rng) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

pub fn city(rng: &mut impl Rng) -> String {
    CityName().fake_with_rng(rng)
}

pub fn state_abbr(rng: &mut impl Rng) -> String {
    StateAbbr().fake_with_rng(rng)
}

pub fn zip_code(rng: &mut impl Rng) -> String {
    ZipCode().fake_with_rng(rng)
}

pub fn first_name(rng: &mut impl Rng) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name(rng: &mut impl Rng) -> String {
    LastName().fake_with_rng(rng)
}

pub fn full_name(rng: &mut impl Rng) -> String {
    Name().fake_with_rng(rng)
}

pub fn email(rng: &mut impl Rng) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn phone_number(rng: &mut impl Rng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn company_name(rng: &mut impl Rng) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn hospital(rng: &mut impl Rng) -> String {
    let city: String = CityName().fake_with_rng(rng);
    format!("{city} {}", pick(rng, HOSPITAL_SUFFIXES))
}

pub fn specialty(rng: &mut impl Rng) -> String {
    pick(rng, SPECIALTIES).to_string()
}

pub fn medication_name(rng: &mut impl Rng) -> String {
    let stem = pick(rng, MEDICATION_STEMS);
    let ending = pick(rng, MEDICATION_ENDINGS);
    let strength = STRENGTHS_MG.choose(rng).copied().unwrap_or(10);
    format!("{stem}{ending} {strength}mg")
}

pub fn side_effects(rng: &mut impl Rng) -> String {
    let count = rng.random_range(2..=3);
    SIDE_EFFECTS
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn dosage(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, DOSE_AMOUNTS), pick(rng, DOSE_SCHEDULES))
}

pub fn description(rng: &mut impl Rng) -> String {
    Sentence(6..12).fake_with_rng(rng)
}

pub fn note(rng: &mut impl Rng) -> String {
    Sentence(3..8).fake_with_rng(rng)
}

/// Anchor for every generated date range.
pub fn base_date() -> NaiveDate {
    ymd(2025, 1, 1)
}

/// Uniform date draw from `[min, max]`.
pub fn date_between(rng: &mut impl Rng, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    let span = (max - min).num_days().max(0);
    min + Duration::days(rng.random_range(0..=span))
}

pub fn birth_date(rng: &mut impl Rng) -> NaiveDate {
    date_between(rng, ymd(1940, 1, 1), ymd(2006, 12, 31))
}

/// Prescription issue dates fall within the year before the base date.
pub fn issued_date(rng: &mut impl Rng) -> NaiveDate {
    let base = base_date();
    date_between(rng, base - Duration::days(365), base)
}

/// Expiry dates fall up to three years past the base date.
pub fn expiry_date(rng: &mut impl Rng) -> NaiveDate {
    let base = base_date();
    date_between(rng, base, base + Duration::days(3 * 365))
}

/// Order, delivery, supply, and transaction dates fall within the current
/// half-decade.
pub fn activity_date(rng: &mut impl Rng) -> NaiveDate {
    date_between(rng, ymd(2020, 1, 1), base_date())
}

/// Two-decimal currency amount from `[min, max]`.
pub fn amount_between(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    let value = rng.random_range(min..=max);
    (value * 100.0).round() / 100.0
}

fn pick<'a>(rng: &mut impl Rng, values: &[&'a str]) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
