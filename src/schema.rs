use std::collections::HashMap;

use tracing::warn;

// Field types known to the view engine. Categorical fields hold text values
// but are compared and filtered as closed vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Numeric,
    Categorical,
    Text,
    Date,
}

// A scalar cell value. Dates are ISO-8601 strings, so lexicographic order is
// chronological order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(f64),
    Text(String),
    Date(String),
}

impl Value {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Value::Num(v) => format!("{}", v),
            Value::Text(s) => s.clone(),
            Value::Date(s) => s.clone(),
        }
    }

    pub fn matches_type(&self, ftype: FieldType) -> bool {
        matches!(
            (self, ftype),
            (Value::Num(_), FieldType::Numeric)
                | (Value::Text(_), FieldType::Text)
                | (Value::Text(_), FieldType::Categorical)
                | (Value::Date(_), FieldType::Date)
        )
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub ftype: FieldType,
    pub searchable: bool,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, ftype: FieldType) -> Self {
        FieldSpec {
            name: name.to_string(),
            label: label.to_string(),
            ftype,
            searchable: false,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

// Column schema, validated once at construction. Field lookups after that are
// the only way operations may reference a field.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let mut deduped: Vec<FieldSpec> = Vec::with_capacity(fields.len());
        for f in fields {
            if deduped.iter().any(|d| d.name == f.name) {
                warn!("Duplicate field \"{}\" in schema, keeping the first", f.name);
                continue;
            }
            deduped.push(f);
        }
        Schema { fields: deduped }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.searchable)
    }
}

// One row of domain data. The id doubles as a regular "id" field so search,
// sort and export treat it like any other column.
#[derive(Debug, Clone)]
pub struct Record {
    id: String,
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new(id: &str) -> Self {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), Value::Text(id.to_string()));
        Record {
            id: id.to_string(),
            fields,
        }
    }

    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_rendering() {
        assert_eq!(Value::Num(2500000.0).render(), "2500000");
        assert_eq!(Value::Num(2.3).render(), "2.3");
        assert_eq!(Value::Text("Premium".into()).render(), "Premium");
        assert_eq!(Value::Date("2024-01-15".into()).render(), "2024-01-15");
    }

    #[test]
    fn type_checks() {
        assert!(Value::Num(1.0).matches_type(FieldType::Numeric));
        assert!(Value::Text("x".into()).matches_type(FieldType::Categorical));
        assert!(!Value::Text("x".into()).matches_type(FieldType::Numeric));
        assert!(!Value::Date("2024-01-15".into()).matches_type(FieldType::Text));
    }

    #[test]
    fn schema_drops_duplicate_fields() {
        let schema = Schema::new(vec![
            FieldSpec::new("age", "Age", FieldType::Numeric),
            FieldSpec::new("age", "Age again", FieldType::Text),
        ]);
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.field("age").unwrap().ftype, FieldType::Numeric);
    }

    #[test]
    fn record_id_is_a_field() {
        let r = Record::new("1000001").field("name", Value::Text("Mukamana Grace".into()));
        assert_eq!(r.get("id"), Some(&Value::Text("1000001".into())));
        assert_eq!(r.id(), "1000001");
    }
}
