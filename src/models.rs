//! Records read from the cosign dataset

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a bill inside a cell.
///
/// The loader stores bill numbers as integers, but nothing downstream
/// depends on that; only the number of identifiers matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BillId {
    Number(i64),
    Text(String),
}

impl From<i64> for BillId {
    fn from(n: i64) -> Self {
        BillId::Number(n)
    }
}

impl From<&str> for BillId {
    fn from(s: &str) -> Self {
        BillId::Text(s.to_string())
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillId::Number(n) => write!(f, "{}", n),
            BillId::Text(s) => f.write_str(s),
        }
    }
}

/// One cell of the co-sponsorship adjacency matrix.
///
/// `position` is `"{source}_{target}"` with 1-based member ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub position: String,

    /// Running counter kept by the loader. Not used for the edge weight.
    #[serde(default)]
    pub count: i64,

    /// Required: a cell without its bill list is a decode error
    #[serde(rename = "billNumbers")]
    pub bill_numbers: Vec<BillId>,
}

impl Cell {
    pub fn new<I, B>(position: &str, bills: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BillId>,
    {
        let bill_numbers: Vec<BillId> = bills.into_iter().map(Into::into).collect();
        Self {
            position: position.to_string(),
            count: bill_numbers.len() as i64,
            bill_numbers,
        }
    }

    /// Edge weight: number of shared bills
    pub fn weight(&self) -> usize {
        self.bill_numbers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_cell_from_loader_document() {
        let document = doc! {
            "_id": bson::oid::ObjectId::new(),
            "position": "12_40",
            "count": 3,
            "billNumbers": [101, 2044, 7],
        };
        let cell: Cell = bson::from_document(document).unwrap();

        assert_eq!(cell.position, "12_40");
        assert_eq!(cell.count, 3);
        assert_eq!(cell.weight(), 3);
        assert_eq!(cell.bill_numbers[0], BillId::Number(101));
    }

    #[test]
    fn test_cell_accepts_text_bill_ids_without_count() {
        let cell: Cell =
            bson::from_document(doc! { "position": "1_2", "billNumbers": ["HR1", "HR2"] })
                .unwrap();
        assert_eq!(cell.count, 0);
        assert_eq!(cell.bill_numbers, vec![BillId::from("HR1"), BillId::from("HR2")]);
    }

    #[test]
    fn test_cell_requires_bill_numbers() {
        let bare = bson::from_document::<Cell>(doc! { "position": "3_4" });
        assert!(bare.is_err());
    }

    #[test]
    fn test_bill_id_display() {
        assert_eq!(BillId::Number(42).to_string(), "42");
        assert_eq!(BillId::from("HR7").to_string(), "HR7");
    }
}
