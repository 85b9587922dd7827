use serde::{Deserialize, Serialize};

/// Issuing company details printed on the document header.
///
/// Every field is free text and independently optional at the model level;
/// the validator requires name, email, and phone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub website: String,
    /// Name of the executive or representative signing the quote.
    pub executive: String,
    pub email: String,
    pub phone: String,
}

/// Receiving client details.
///
/// Same shape as [`CompanyInfo`] except for the contact person field; the
/// validator requires name and email only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub website: String,
    /// Person at the client who receives the document.
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}
