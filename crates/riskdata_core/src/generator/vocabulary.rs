//! Fixed vocabularies for the categorical record fields.

/// Hospitals records are attributed to.
pub const HOSPITALS: [&str; 8] = [
    "Fortis Healthcare",
    "Apollo Hospitals",
    "Max Healthcare",
    "Manipal Hospitals",
    "AIIMS",
    "Medanta",
    "Narayana Health",
    "Columbia Asia",
];

/// Cities records are attributed to.
pub const LOCATIONS: [&str; 8] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
];

/// Medical specialties.
pub const SPECIALTIES: [&str; 8] = [
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Oncology",
    "Pediatrics",
    "Surgery",
    "Emergency",
    "Internal Medicine",
];

/// Fraud categories.
pub const CATEGORIES: [&str; 7] = [
    "Billing Irregularities",
    "Diagnostic Anomalies",
    "Treatment Patterns",
    "Medication Discrepancies",
    "Documentation Issues",
    "Provider Behavior",
    "Patient Demographics",
];
