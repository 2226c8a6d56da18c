//! Single-record view with previous/next browsing.
//!
//! Browsing follows the table's current row order, so "next" is the row
//! shown below the current one in the grid.

use serde_json::Value;

use crate::model::ResultSet;
use crate::schema;
use crate::view::RowCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDetail {
    order: Vec<usize>,
    position: usize,
}

impl ObjectDetail {
    /// Open on `row_index`. `None` when the row is not part of `order`.
    pub fn open(order: &[usize], row_index: usize) -> Option<Self> {
        let position = order.iter().position(|&r| r == row_index)?;
        Some(Self {
            order: order.to_vec(),
            position,
        })
    }

    /// Open on the row whose primary key equals `pk`.
    pub fn for_pk(data: &ResultSet, order: &[usize], pk: &Value) -> Option<Self> {
        let pk_col = data.cols.iter().position(schema::is_pk)?;
        let row_index = order
            .iter()
            .copied()
            .find(|&row| pk_matches(data.cell(row, pk_col), pk))?;
        Self::open(order, row_index)
    }

    pub fn row_index(&self) -> usize {
        self.order[self.position]
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    pub fn has_next(&self) -> bool {
        self.position + 1 < self.order.len()
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Column/value pairs of the current record.
    pub fn fields(&self, data: &ResultSet) -> Vec<RowCell> {
        let row = self.row_index();
        data.cols
            .iter()
            .enumerate()
            .map(|(i, column)| RowCell {
                column: column.clone(),
                value: data.cell(row, i).clone(),
            })
            .collect()
    }

    /// Primary key of the current record, if the result has a PK column.
    pub fn pk_value<'a>(&self, data: &'a ResultSet) -> Option<&'a Value> {
        let pk_col = data.cols.iter().position(schema::is_pk)?;
        Some(data.cell(self.row_index(), pk_col))
    }
}

/// Keys compare as numbers when both sides are numeric, so `"12"` finds `12`.
fn pk_matches(cell: &Value, pk: &Value) -> bool {
    if cell == pk {
        return true;
    }
    let as_number = |v: &Value| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    matches!((as_number(cell), as_number(pk)), (Some(a), Some(b)) if a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::schema::TYPE_PK;
    use serde_json::json;

    fn orders() -> ResultSet {
        ResultSet::new(
            vec![
                Column::new("ID", "type/Integer").with_semantic_type(TYPE_PK),
                Column::new("TOTAL", "type/Float"),
            ],
            vec![
                vec![json!(9676), json!(150.5)],
                vec![json!(10874), json!(160.0)],
                vec![json!(11246), json!(170.25)],
            ],
        )
    }

    #[test]
    fn test_browse_by_pk() {
        let data = orders();
        let order = vec![0, 1, 2];
        let mut detail = ObjectDetail::for_pk(&data, &order, &json!(9676)).unwrap();
        assert_eq!(detail.pk_value(&data), Some(&json!(9676)));
        assert!(!detail.has_previous());
        assert!(!detail.previous());

        assert!(detail.next());
        assert_eq!(detail.pk_value(&data), Some(&json!(10874)));
        assert!(detail.next());
        assert_eq!(detail.pk_value(&data), Some(&json!(11246)));
        assert!(!detail.has_next());
        assert!(!detail.next());

        assert!(detail.previous());
        assert!(detail.previous());
        assert_eq!(detail.pk_value(&data), Some(&json!(9676)));
    }

    #[test]
    fn test_browsing_follows_sort_order() {
        let mut detail = ObjectDetail::open(&[2, 0, 1], 0).unwrap();
        assert!(detail.has_previous() && detail.has_next());
        detail.next();
        assert_eq!(detail.row_index(), 1);
    }

    #[test]
    fn test_pk_string_matches_number() {
        let data = orders();
        let detail = ObjectDetail::for_pk(&data, &[0, 1, 2], &json!("11246")).unwrap();
        assert_eq!(detail.row_index(), 2);
        assert!(ObjectDetail::for_pk(&data, &[0, 1, 2], &json!(1)).is_none());
    }

    #[test]
    fn test_fields() {
        let data = orders();
        let detail = ObjectDetail::open(&[0, 1, 2], 1).unwrap();
        let fields = detail.fields(&data);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].column.name, "TOTAL");
        assert_eq!(fields[1].value, json!(160.0));
    }

    #[test]
    fn test_open_unknown_row() {
        assert!(ObjectDetail::open(&[0, 1], 7).is_none());
    }
}
