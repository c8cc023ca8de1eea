use serde::{Deserialize, Serialize};

/// An entry in the shopping list as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

/// Request body for creating or updating an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
}

/// Raw add/edit form submission. Both fields stay optional so that a
/// missing field becomes a validation flash instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub quantity: Option<String>,
}

/// Field values used to pre-fill a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub id: Option<i64>,
    pub name: String,
    pub quantity: String,
}

impl From<Item> for ItemDraft {
    fn from(item: Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name,
            quantity: item.quantity.to_string(),
        }
    }
}

impl ItemForm {
    /// Keep what the user typed so a failed submission can be redisplayed
    pub fn to_draft(&self, id: Option<i64>) -> ItemDraft {
        ItemDraft {
            id,
            name: self.name.clone().unwrap_or_default(),
            quantity: self.quantity.clone().unwrap_or_default(),
        }
    }

    /// Validate the submission and turn it into an outbound request body
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let quantity = self.quantity.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() || quantity.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let quantity: i64 = quantity.parse().map_err(|_| ValidationError::NotANumber)?;
        if quantity < 1 {
            return Err(ValidationError::NotPositive);
        }

        Ok(NewItem {
            name: name.to_string(),
            quantity,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    NotANumber,
    NotPositive,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "Both name and quantity are required"),
            ValidationError::NotANumber => write!(f, "Quantity must be a number"),
            ValidationError::NotPositive => write!(f, "Quantity must be at least 1"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, quantity: Option<&str>) -> ItemForm {
        ItemForm {
            name: name.map(String::from),
            quantity: quantity.map(String::from),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let item = form(Some("  Milk "), Some(" 2")).validate().unwrap();
        assert_eq!(item, NewItem { name: "Milk".to_string(), quantity: 2 });
    }

    #[test]
    fn blank_fields_are_missing() {
        assert_eq!(form(Some(""), Some("2")).validate(), Err(ValidationError::MissingField));
        assert_eq!(form(Some("   "), Some("2")).validate(), Err(ValidationError::MissingField));
        assert_eq!(form(Some("Milk"), None).validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn quantity_must_be_a_positive_integer() {
        assert_eq!(form(Some("Milk"), Some("two")).validate(), Err(ValidationError::NotANumber));
        assert_eq!(form(Some("Milk"), Some("1.5")).validate(), Err(ValidationError::NotANumber));
        assert_eq!(form(Some("Milk"), Some("0")).validate(), Err(ValidationError::NotPositive));
    }

    #[test]
    fn item_decodes_from_backend_json() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":1,"name":"Milk","quantity":2}]"#).unwrap();
        assert_eq!(items, vec![Item { id: 1, name: "Milk".to_string(), quantity: 2 }]);
    }
}
