//! Outlet Model

use serde::{Deserialize, Serialize};

/// Outlet entity (门店)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlet {
    pub id: String,
    pub name: String,
    pub business_reg_no: String,
    pub trading_license: String,
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    pub postcode: String,
    pub state: String,
    pub contact_number: String,
    pub country_code: String,
    pub email: String,
    /// Logo as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create / update outlet payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletInput {
    pub name: String,
    pub business_reg_no: String,
    pub trading_license: String,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    pub postcode: String,
    pub state: String,
    pub contact_number: String,
    pub country_code: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Outlet {
    pub fn from_input(id: impl Into<String>, input: OutletInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            business_reg_no: input.business_reg_no,
            trading_license: input.trading_license,
            address1: input.address1,
            address2: input.address2.filter(|s| !s.is_empty()),
            address3: input.address3.filter(|s| !s.is_empty()),
            postcode: input.postcode,
            state: input.state,
            contact_number: input.contact_number,
            country_code: input.country_code,
            email: input.email,
            image: input.image.filter(|s| !s.is_empty()),
        }
    }
}

/// Malaysian states and federal territories offered by the outlet form
pub const STATES: &[&str] = &[
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Penang",
    "Perak",
    "Perlis",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
    "Kuala Lumpur",
    "Labuan",
    "Putrajaya",
];

/// Dialling code option for contact numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryCode {
    pub label: &'static str,
    pub value: &'static str,
}

/// Country codes offered by the outlet and profile forms
pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { label: "Malaysia (+60)", value: "+60" },
    CountryCode { label: "Singapore (+65)", value: "+65" },
    CountryCode { label: "Indonesia (+62)", value: "+62" },
    CountryCode { label: "Thailand (+66)", value: "+66" },
    CountryCode { label: "Philippines (+63)", value: "+63" },
];

/// Default dialling code for new forms
pub const DEFAULT_COUNTRY_CODE: &str = "+60";
