use crate::error::CfResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One sales transaction. Rows have no identity beyond their position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Segment")]
    pub segment: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Discount Band")]
    pub discount_band: String,
    #[serde(rename = "Units Sold")]
    pub units_sold: u32,
    #[serde(rename = "Sales")]
    pub sales: f64,
}

impl Record {
    pub fn new(
        segment: &str,
        country: &str,
        product: &str,
        discount_band: &str,
        units_sold: u32,
        sales: f64,
    ) -> Self {
        Self {
            segment: segment.to_string(),
            country: country.to_string(),
            product: product.to_string(),
            discount_band: discount_band.to_string(),
            units_sold,
            sales,
        }
    }

    // f64 has no Eq/Hash, so rows are keyed on the raw bits of `sales`.
    fn dedup_key(&self) -> (&str, &str, &str, &str, u32, u64) {
        (
            &self.segment,
            &self.country,
            &self.product,
            &self.discount_band,
            self.units_sold,
            self.sales.to_bits(),
        )
    }
}

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Government", "USA", "Product A", "10%", 100, 10000.0),
        Record::new("Midmarket", "Canada", "Product B", "15%", 150, 15000.0),
        Record::new("Enterprise", "UK", "Product C", "20%", 200, 20000.0),
        Record::new("Government", "Germany", "Product D", "25%", 250, 25000.0),
        Record::new("Enterprise", "Australia", "Product E", "30%", 300, 30000.0),
        Record::new("Midmarket", "USA", "Product F", "15%", 120, 12000.0),
        Record::new("Enterprise", "Canada", "Product G", "10%", 180, 18000.0),
        Record::new("Government", "Germany", "Product H", "20%", 220, 22000.0),
        Record::new("Midmarket", "Australia", "Product I", "25%", 290, 28000.0),
    ]
}

/// Drops rows identical in every field to an earlier row. First occurrence
/// wins and relative order is kept.
pub fn dedup_records(records: Vec<Record>) -> Vec<Record> {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let mut kept = Vec::with_capacity(before);
    for record in &records {
        if seen.insert(record.dedup_key()) {
            kept.push(record.clone());
        }
    }

    if kept.len() < before {
        debug!("Dropped {} duplicate rows", before - kept.len());
    }
    kept
}

pub fn records_from_reader<R: Read>(reader: R) -> CfResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    Ok(records)
}

pub fn load_records_csv<P: AsRef<Path>>(path: P) -> CfResult<Vec<Record>> {
    let path = path.as_ref();
    debug!("Loading records from {}", path.display());
    let file = File::open(path)?;
    records_from_reader(file)
}
