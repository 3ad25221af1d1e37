//! Roster record model and loading.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tui::TableRow;

/// Error type for roster loading failures.
#[derive(Debug)]
pub enum RosterError {
    /// Roster file could not be read.
    Io(std::io::Error),
    /// Roster file is not a valid JSON array of records.
    Parse(serde_json::Error),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "failed to read roster file: {}", e),
            RosterError::Parse(e) => write!(f, "failed to parse roster file: {}", e),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(e) => Some(e),
            RosterError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::Io(e)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        RosterError::Parse(e)
    }
}

/// A single roster entry (one table row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub city: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub joined: NaiveDate,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_active() -> bool {
    true
}

impl TableRow for UserRecord {
    fn column_count() -> usize {
        7
    }

    fn headers() -> Vec<&'static str> {
        vec!["NAME", "EMAIL", "PHONE", "ROLE", "CITY", "JOINED", "ST"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.role.clone(),
            self.city.clone(),
            self.joined.format("%Y-%m-%d").to_string(),
            if self.active { "A" } else { "-" }.to_string(),
        ]
    }
}

impl UserRecord {
    /// Column widths for the table view (JOINED is `%Y-%m-%d`, 10 chars).
    pub fn widths() -> Vec<u16> {
        vec![18, 28, 14, 10, 14, 10, 2]
    }
}

/// Loads records from a JSON file containing an array of [`UserRecord`].
pub fn load_records(path: &Path) -> Result<Vec<UserRecord>, RosterError> {
    let data = fs::read_to_string(path)?;
    let records: Vec<UserRecord> = serde_json::from_str(&data)?;
    Ok(records)
}

/// Built-in sample roster, used when no roster file is given.
pub fn demo_records() -> Vec<UserRecord> {
    let entries: &[(&str, &str, &str, &str, &str, bool, (i32, u32, u32))] = &[
        ("Asha Nair", "asha.nair@example.com", "+91 98400 11001", "admin", "Chennai", true, (2023, 1, 12)),
        ("Bharat Rao", "bharat.rao@example.com", "+91 98400 11002", "user", "Mumbai", true, (2023, 2, 3)),
        ("Chitra Iyer", "chitra.iyer@example.com", "+91 98400 11003", "user", "Chennai", true, (2023, 2, 19)),
        ("Deepak Sharma", "deepak.sharma@example.com", "+91 98400 11004", "staff", "Delhi", false, (2023, 3, 7)),
        ("Esha Patel", "esha.patel@example.com", "+91 98400 11005", "user", "Mumbai", true, (2023, 4, 1)),
        ("Farhan Khan", "farhan.khan@example.com", "+91 98400 11006", "user", "Delhi", true, (2023, 4, 22)),
        ("Gita Menon", "gita.menon@example.com", "+91 98400 11007", "staff", "Chennai", true, (2023, 5, 14)),
        ("Hari Kumar", "hari.kumar@example.com", "+91 98400 11008", "user", "Mysore", false, (2023, 6, 2)),
        ("Indira Das", "indira.das@example.com", "+91 98400 11009", "user", "Delhi", true, (2023, 6, 28)),
        ("Jay Singh", "jay.singh@example.com", "+91 98400 11010", "user", "Mumbai", true, (2023, 7, 9)),
        ("Kavya Reddy", "kavya.reddy@example.com", "+91 98400 11011", "admin", "Chennai", true, (2023, 8, 17)),
        ("Lakshmi Pillai", "lakshmi.pillai@example.com", "+91 98400 11012", "user", "Mysore", true, (2023, 9, 5)),
        ("Mohan Gupta", "mohan.gupta@example.com", "+91 98400 11013", "user", "Delhi", false, (2023, 9, 30)),
        ("Nisha Verma", "nisha.verma@example.com", "+91 98400 11014", "staff", "Mumbai", true, (2023, 10, 21)),
        ("Om Prakash", "om.prakash@example.com", "+91 98400 11015", "user", "Chennai", true, (2023, 11, 11)),
        ("Priya Joshi", "priya.joshi@example.com", "+91 98400 11016", "user", "Mysore", true, (2023, 12, 1)),
        ("Qadir Ahmed", "qadir.ahmed@example.com", "+91 98400 11017", "user", "Delhi", true, (2024, 1, 15)),
        ("Ravi Shankar", "ravi.shankar@example.com", "+91 98400 11018", "user", "Mumbai", false, (2024, 2, 8)),
        ("Sita Raman", "sita.raman@example.com", "+91 98400 11019", "staff", "Chennai", true, (2024, 3, 3)),
        ("Tara Bose", "tara.bose@example.com", "+91 98400 11020", "user", "Mysore", true, (2024, 3, 27)),
    ];

    entries
        .iter()
        .map(|&(name, email, phone, role, city, active, (y, m, d))| UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            role: role.to_string(),
            city: city.to_string(),
            active,
            // Dates in the table above are all valid.
            joined: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        })
        .collect()
}
