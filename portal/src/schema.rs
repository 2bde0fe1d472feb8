//! Validation of a customer draft.
//!
//! Every rule is evaluated on every submit; the caller gets either a typed
//! [`CustomerRecord`] or the complete set of field errors, never just the
//! first one.

use std::collections::BTreeMap;
use std::fmt;

use validator::{Validate, ValidationErrors};

use crate::models::{CustomerDraft, CustomerRecord, CustomerType, DocumentRef, Field};

pub const INVALID_CUSTOMER_TYPE: &str = "Invalid customer type";
pub const INVALID_CREDIT_LIMIT: &str = "Credit limit must be a number";
pub const INVALID_DOCUMENT: &str = "Document must be a PDF, JPG or PNG file";

/// One message per failing field, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// Keeps the first message recorded for a field.
    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    fn absorb(&mut self, errors: &ValidationErrors) {
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = Field::from_name(&name) else {
                tracing::warn!(field = %name, "Validation error for unknown field");
                continue;
            };
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                self.insert(field, message);
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_customer_type(raw: &str) -> Result<Option<CustomerType>, &'static str> {
    if raw.is_empty() {
        return Ok(None);
    }
    CustomerType::parse(raw).map(Some).ok_or(INVALID_CUSTOMER_TYPE)
}

fn parse_credit_limit(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(INVALID_CREDIT_LIMIT),
    }
}

fn check_document(document: Option<&DocumentRef>) -> Result<Option<DocumentRef>, &'static str> {
    match document {
        Some(doc) if !doc.has_accepted_extension() => Err(INVALID_DOCUMENT),
        other => Ok(other.cloned()),
    }
}

/// Turns a draft into a record, or reports every field that fails.
pub fn validate(draft: &CustomerDraft) -> Result<CustomerRecord, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_type = parse_customer_type(&draft.customer_type).unwrap_or_else(|msg| {
        errors.insert(Field::CustomerType, msg);
        None
    });
    let credit_limit = parse_credit_limit(&draft.credit_limit).unwrap_or_else(|msg| {
        errors.insert(Field::CreditLimit, msg);
        None
    });
    let gst_document = check_document(draft.gst_document.as_ref()).unwrap_or_else(|msg| {
        errors.insert(Field::GstDocument, msg);
        None
    });
    let pan_document = check_document(draft.pan_document.as_ref()).unwrap_or_else(|msg| {
        errors.insert(Field::PanDocument, msg);
        None
    });

    let record = CustomerRecord {
        customer_code: optional(&draft.customer_code),
        name: draft.name.clone(),
        customer_type,
        gst_number: draft.gst_number.clone(),
        pan_number: optional(&draft.pan_number),
        billing_plant: optional(&draft.billing_plant),
        company_code: optional(&draft.company_code),
        sales_org: optional(&draft.sales_org),
        distribution_channel: optional(&draft.distribution_channel),
        division: optional(&draft.division),
        address_line1: draft.address_line1.clone(),
        address_line2: optional(&draft.address_line2),
        pincode: draft.pincode.clone(),
        city: draft.city.clone(),
        state: draft.state.clone(),
        country: optional(&draft.country),
        contact_name: draft.contact_name.clone(),
        mobile_number: draft.mobile_number.clone(),
        email: draft.email.clone(),
        alt_mobile: optional(&draft.alt_mobile),
        alt_email: optional(&draft.alt_email),
        reconciliation_account: optional(&draft.reconciliation_account),
        payment_terms: optional(&draft.payment_terms),
        credit_limit,
        sales_district: optional(&draft.sales_district),
        sales_office: optional(&draft.sales_office),
        sales_group: optional(&draft.sales_group),
        sales_rep: optional(&draft.sales_rep),
        doc_gst_cert: draft.doc_gst_cert,
        doc_pan: draft.doc_pan,
        gst_document,
        pan_document,
    };

    if let Err(e) = record.validate() {
        errors.absorb(&e);
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}
