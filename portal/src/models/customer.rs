use serde::{Deserialize, Serialize};
use validator::Validate;

use super::field::{Field, InputKind};

pub const DEFAULT_COUNTRY: &str = "India";

/// File types accepted by the document upload controls.
pub const ACCEPTED_DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Distributor,
    Retailer,
    Dealer,
    Wholesaler,
}

impl CustomerType {
    pub const ALL: [CustomerType; 4] = [
        CustomerType::Distributor,
        CustomerType::Retailer,
        CustomerType::Dealer,
        CustomerType::Wholesaler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Distributor => "Distributor",
            CustomerType::Retailer => "Retailer",
            CustomerType::Dealer => "Dealer",
            CustomerType::Wholesaler => "Wholesaler",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A file picked in one of the upload controls.
///
/// Only the reference travels with the draft; the JSON payload has no room
/// for file content, so documents are never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: u64,
}

impl DocumentRef {
    pub fn new(file_name: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            size,
        }
    }

    pub fn has_accepted_extension(&self) -> bool {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| {
                ACCEPTED_DOCUMENT_EXTENSIONS
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false)
    }
}

/// A validated customer, shaped exactly as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CustomerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    #[validate(length(min = 1, message = "GST number is required"))]
    pub gst_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_plant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[validate(length(min = 1, message = "Contact name is required"))]
    pub contact_name: String,
    #[validate(length(min = 10, message = "Valid mobile number is required"))]
    pub mobile_number: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_mobile: Option<String>,
    #[validate(email(message = "Invalid email"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,

    pub doc_gst_cert: bool,
    pub doc_pan: bool,
    #[serde(skip)]
    pub gst_document: Option<DocumentRef>,
    #[serde(skip)]
    pub pan_document: Option<DocumentRef>,
}

impl CustomerRecord {
    pub fn has_documents(&self) -> bool {
        self.gst_document.is_some() || self.pan_document.is_some()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldKindError {
    #[error("{field} does not hold {expected}")]
    WrongKind {
        field: Field,
        expected: &'static str,
    },
}

/// The record being edited: every input exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub customer_code: String,
    pub name: String,
    pub customer_type: String,
    pub division: String,
    pub gst_number: String,
    pub pan_number: String,
    pub doc_gst_cert: bool,
    pub doc_pan: bool,
    pub gst_document: Option<DocumentRef>,
    pub pan_document: Option<DocumentRef>,
    pub contact_name: String,
    pub mobile_number: String,
    pub email: String,
    pub alt_mobile: String,
    pub alt_email: String,
    pub payment_terms: String,
    pub credit_limit: String,
    pub reconciliation_account: String,
    pub billing_plant: String,
    pub company_code: String,
    pub sales_org: String,
    pub distribution_channel: String,
    pub sales_district: String,
    pub sales_office: String,
    pub sales_group: String,
    pub sales_rep: String,
    pub address_line1: String,
    pub address_line2: String,
    pub pincode: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            customer_code: String::new(),
            name: String::new(),
            customer_type: String::new(),
            division: String::new(),
            gst_number: String::new(),
            pan_number: String::new(),
            doc_gst_cert: false,
            doc_pan: false,
            gst_document: None,
            pan_document: None,
            contact_name: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            alt_mobile: String::new(),
            alt_email: String::new(),
            payment_terms: String::new(),
            credit_limit: String::new(),
            reconciliation_account: String::new(),
            billing_plant: String::new(),
            company_code: String::new(),
            sales_org: String::new(),
            distribution_channel: String::new(),
            sales_district: String::new(),
            sales_office: String::new(),
            sales_group: String::new(),
            sales_rep: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            pincode: String::new(),
            city: String::new(),
            state: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

macro_rules! text_slots {
    ($($variant:ident => $slot:ident),* $(,)?) => {
        impl CustomerDraft {
            /// Current value of a string-backed input; `None` for flags and documents.
            pub fn text(&self, field: Field) -> Option<&str> {
                match field {
                    $(Field::$variant => Some(self.$slot.as_str()),)*
                    _ => None,
                }
            }

            fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
                match field {
                    $(Field::$variant => Some(&mut self.$slot),)*
                    _ => None,
                }
            }
        }
    };
}

text_slots! {
    CustomerCode => customer_code,
    Name => name,
    CustomerType => customer_type,
    Division => division,
    GstNumber => gst_number,
    PanNumber => pan_number,
    ContactName => contact_name,
    MobileNumber => mobile_number,
    Email => email,
    AltMobile => alt_mobile,
    AltEmail => alt_email,
    PaymentTerms => payment_terms,
    CreditLimit => credit_limit,
    ReconciliationAccount => reconciliation_account,
    BillingPlant => billing_plant,
    CompanyCode => company_code,
    SalesOrg => sales_org,
    DistributionChannel => distribution_channel,
    SalesDistrict => sales_district,
    SalesOffice => sales_office,
    SalesGroup => sales_group,
    SalesRep => sales_rep,
    AddressLine1 => address_line1,
    AddressLine2 => address_line2,
    Pincode => pincode,
    City => city,
    State => state,
    Country => country,
}

impl CustomerDraft {
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), FieldKindError> {
        let slot = self.text_slot_mut(field).ok_or(FieldKindError::WrongKind {
            field,
            expected: "text",
        })?;
        *slot = value.into();
        Ok(())
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::DocGstCert => Some(self.doc_gst_cert),
            Field::DocPan => Some(self.doc_pan),
            _ => None,
        }
    }

    pub fn set_flag(&mut self, field: Field, value: bool) -> Result<(), FieldKindError> {
        let slot = match field {
            Field::DocGstCert => &mut self.doc_gst_cert,
            Field::DocPan => &mut self.doc_pan,
            _ => {
                return Err(FieldKindError::WrongKind {
                    field,
                    expected: "a flag",
                })
            }
        };
        *slot = value;
        Ok(())
    }

    pub fn document(&self, field: Field) -> Option<&DocumentRef> {
        match field {
            Field::GstDocument => self.gst_document.as_ref(),
            Field::PanDocument => self.pan_document.as_ref(),
            _ => None,
        }
    }

    fn document_slot_mut(&mut self, field: Field) -> Result<&mut Option<DocumentRef>, FieldKindError> {
        match field {
            Field::GstDocument => Ok(&mut self.gst_document),
            Field::PanDocument => Ok(&mut self.pan_document),
            _ => Err(FieldKindError::WrongKind {
                field,
                expected: "a document",
            }),
        }
    }

    pub fn attach_document(&mut self, field: Field, document: DocumentRef) -> Result<(), FieldKindError> {
        *self.document_slot_mut(field)? = Some(document);
        Ok(())
    }

    pub fn detach_document(&mut self, field: Field) -> Result<Option<DocumentRef>, FieldKindError> {
        Ok(self.document_slot_mut(field)?.take())
    }

    /// Display value of any field, as a form input would show it.
    pub fn display_value(&self, field: Field) -> String {
        match field.spec().kind {
            InputKind::Checkbox => self.flag(field).unwrap_or(false).to_string(),
            InputKind::Document => self
                .document(field)
                .map(|d| d.file_name.clone())
                .unwrap_or_default(),
            _ => self.text(field).unwrap_or_default().to_string(),
        }
    }
}
