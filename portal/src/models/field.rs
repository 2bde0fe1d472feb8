use std::fmt;

/// Form sections, in the order the create-customer page lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    BasicDetails,
    Contact,
    Finance,
    SalesLocation,
    Address,
    Documents,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::BasicDetails,
        Section::Contact,
        Section::Finance,
        Section::SalesLocation,
        Section::Address,
        Section::Documents,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::BasicDetails => "Basic Details",
            Section::Contact => "Contact Information",
            Section::Finance => "Finance Details",
            Section::SalesLocation => "Sales & Location",
            Section::Address => "Address",
            Section::Documents => "Documents",
        }
    }

    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| f.spec().section == self)
    }
}

/// How a field is edited. Selects carry `(value, label)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Select(&'static [(&'static str, &'static str)]),
    Checkbox,
    Document,
}

impl InputKind {
    /// Kinds whose draft value is held as a string.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            InputKind::Text | InputKind::Email | InputKind::Number | InputKind::Select(_)
        )
    }
}

pub const CUSTOMER_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select Type"),
    ("Distributor", "Distributor"),
    ("Retailer", "Retailer"),
    ("Dealer", "Dealer"),
    ("Wholesaler", "Wholesaler"),
];

pub const DIVISION_OPTIONS: &[(&str, &str)] = &[
    ("", "Select Brand"),
    ("DIV01", "Lux Cozi (DIV01)"),
    ("DIV02", "ONN (DIV02)"),
    ("DIV03", "PYNK (DIV03)"),
    ("DIV04", "Parker (DIV04)"),
    ("DIV05", "Mozzee (DIV05)"),
];

/// Static description of one customer attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, shared by the JSON payload and the HTML input.
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: InputKind,
    /// Shows the "Required" marker next to the label.
    pub marked_required: bool,
    pub placeholder: &'static str,
}

/// Every attribute of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CustomerCode,
    Name,
    CustomerType,
    Division,
    ContactName,
    MobileNumber,
    Email,
    AltMobile,
    AltEmail,
    PaymentTerms,
    CreditLimit,
    ReconciliationAccount,
    BillingPlant,
    CompanyCode,
    SalesOrg,
    DistributionChannel,
    SalesDistrict,
    SalesOffice,
    SalesGroup,
    SalesRep,
    AddressLine1,
    AddressLine2,
    Pincode,
    City,
    State,
    Country,
    GstNumber,
    PanNumber,
    DocGstCert,
    DocPan,
    GstDocument,
    PanDocument,
}

impl Field {
    pub const ALL: [Field; 32] = [
        Field::CustomerCode,
        Field::Name,
        Field::CustomerType,
        Field::Division,
        Field::ContactName,
        Field::MobileNumber,
        Field::Email,
        Field::AltMobile,
        Field::AltEmail,
        Field::PaymentTerms,
        Field::CreditLimit,
        Field::ReconciliationAccount,
        Field::BillingPlant,
        Field::CompanyCode,
        Field::SalesOrg,
        Field::DistributionChannel,
        Field::SalesDistrict,
        Field::SalesOffice,
        Field::SalesGroup,
        Field::SalesRep,
        Field::AddressLine1,
        Field::AddressLine2,
        Field::Pincode,
        Field::City,
        Field::State,
        Field::Country,
        Field::GstNumber,
        Field::PanNumber,
        Field::DocGstCert,
        Field::DocPan,
        Field::GstDocument,
        Field::PanDocument,
    ];

    pub fn spec(&self) -> FieldSpec {
        use InputKind::*;
        use Section::*;

        let (name, label, section, kind, marked_required, placeholder) = match self {
            Field::CustomerCode => ("customer_code", "Customer Code", BasicDetails, Text, true, "e.g. CUST2001"),
            Field::Name => ("name", "Name", BasicDetails, Text, true, "Distributor / Customer name"),
            Field::CustomerType => ("customer_type", "Type", BasicDetails, Select(CUSTOMER_TYPE_OPTIONS), false, ""),
            Field::Division => ("division", "Division / Brand", BasicDetails, Select(DIVISION_OPTIONS), false, ""),
            Field::ContactName => ("contact_name", "Contact Person", Contact, Text, true, "Contact full name"),
            Field::MobileNumber => ("mobile_number", "Mobile", Contact, Text, true, "+91xxxxxxxxxx"),
            Field::Email => ("email", "Email", Contact, Email, true, "contact@company.com"),
            Field::AltMobile => ("alt_mobile", "Alt Mobile", Contact, Text, false, "Optional"),
            Field::AltEmail => ("alt_email", "Alt Email", Contact, Email, false, "Optional"),
            Field::PaymentTerms => ("payment_terms", "Payment Terms", Finance, Text, false, "NET30 / NET45"),
            Field::CreditLimit => ("credit_limit", "Credit Limit", Finance, Number, false, "Numeric (optional)"),
            Field::ReconciliationAccount => ("reconciliation_account", "Reconciliation Account", Finance, Text, false, "FI Reconciliation account"),
            Field::BillingPlant => ("billing_plant", "Billing Plant", SalesLocation, Text, false, "PLT01"),
            Field::CompanyCode => ("company_code", "Company Code", SalesLocation, Text, false, "LUX"),
            Field::SalesOrg => ("sales_org", "Sales Org", SalesLocation, Text, false, "LUX_IN"),
            Field::DistributionChannel => ("distribution_channel", "Distribution Channel", SalesLocation, Text, false, "RETAIL"),
            Field::SalesDistrict => ("sales_district", "Sales District", SalesLocation, Text, false, "ASM area"),
            Field::SalesOffice => ("sales_office", "Sales Office", SalesLocation, Text, false, "Optional"),
            Field::SalesGroup => ("sales_group", "Sales Group", SalesLocation, Text, false, "Optional"),
            Field::SalesRep => ("sales_rep", "Sales Rep", SalesLocation, Text, false, "ASM name / code"),
            Field::AddressLine1 => ("address_line1", "Address Line 1", Address, Text, true, "Street, building, area"),
            Field::AddressLine2 => ("address_line2", "Address Line 2", Address, Text, false, "Optional"),
            Field::Pincode => ("pincode", "Pincode", Address, Text, true, "700001"),
            Field::City => ("city", "City", Address, Text, true, "Kolkata"),
            Field::State => ("state", "State", Address, Text, true, "West Bengal"),
            Field::Country => ("country", "Country", Address, Text, false, "India"),
            Field::GstNumber => ("gst_number", "GST Number", Documents, Text, true, "e.g. 27AABCT1234G1Z0"),
            Field::PanNumber => ("pan_number", "PAN Number", Documents, Text, false, "Optional"),
            Field::DocGstCert => ("doc_gst_cert", "GST Certificate", Documents, Checkbox, false, ""),
            Field::DocPan => ("doc_pan", "PAN Document", Documents, Checkbox, false, ""),
            Field::GstDocument => ("gst_document", "Upload GST Document", Documents, Document, false, "GST Certificate (.pdf, .jpg, .png)"),
            Field::PanDocument => ("pan_document", "Upload PAN Document", Documents, Document, false, "PAN Document (.pdf, .jpg, .png)"),
        };

        FieldSpec {
            name,
            label,
            section,
            kind,
            marked_required,
            placeholder,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
