//! Attribute Form State
//!
//! Pure state behind the create/edit dialog: the editable fields, validation,
//! and submit payload assembly. Kept out of the view layer so it can be
//! tested directly.

use crate::models::{Attribute, AttributeSubmit};

/// Editable dialog fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeForm {
    /// Set when editing an existing attribute, None when creating
    pub attribute_id: Option<i64>,
    pub name: String,
    pub function_name: String,
    pub template_id: Option<i64>,
}

impl AttributeForm {
    /// Blank form for create mode, or fields copied from the record being
    /// edited
    pub fn seeded(attribute: Option<&Attribute>) -> Self {
        match attribute {
            Some(attr) => Self {
                attribute_id: Some(attr.id),
                name: attr.name.clone(),
                function_name: attr.function_name.clone(),
                template_id: Some(attr.template.id),
            },
            None => Self::default(),
        }
    }

    /// A form is submittable once it has a name and a real template id.
    /// Length limits and uniqueness are enforced server-side.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.template_id.map_or(false, |id| id > 0)
    }

    /// Assemble the dialog result from current state. Does not re-check
    /// `is_valid`; the submit button is disabled while the form is invalid
    /// and that is the only gate.
    pub fn submit(&self) -> AttributeSubmit {
        AttributeSubmit {
            function_name: self.function_name.clone(),
            name: self.name.clone(),
            template_id: self.template_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, Template};

    fn sample_attribute() -> Attribute {
        Attribute {
            id: 5,
            name: "Foo".to_string(),
            function_name: "bar".to_string(),
            template: Template {
                id: 2,
                name: "Label A4".to_string(),
            },
        }
    }

    #[test]
    fn test_blank_form_for_create_mode() {
        let form = AttributeForm::seeded(None);
        assert_eq!(form.attribute_id, None);
        assert_eq!(form.name, "");
        assert_eq!(form.function_name, "");
        assert_eq!(form.template_id, None);
    }

    #[test]
    fn test_seeded_from_existing_record() {
        let attr = sample_attribute();
        let form = AttributeForm::seeded(Some(&attr));
        assert_eq!(form.attribute_id, Some(5));
        assert_eq!(form.name, "Foo");
        assert_eq!(form.function_name, "bar");
        assert_eq!(form.template_id, Some(2));
    }

    #[test]
    fn test_validity() {
        let mut form = AttributeForm::seeded(None);
        assert!(!form.is_valid());

        form.name = "Foo".to_string();
        assert!(!form.is_valid());

        form.template_id = Some(0);
        assert!(!form.is_valid());
        form.template_id = Some(-3);
        assert!(!form.is_valid());
        form.template_id = Some(1);
        assert!(form.is_valid());

        form.name.clear();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_submit_does_not_gate_on_validity() {
        let form = AttributeForm::seeded(None);
        assert!(!form.is_valid());
        let result = form.submit();
        assert_eq!(result.function_name, "");
        assert_eq!(result.name, "");
        assert_eq!(result.template_id, None);
    }

    #[test]
    fn test_seed_then_submit_round_trip() {
        let form = AttributeForm::seeded(Some(&sample_attribute()));
        let result = form.submit();
        assert_eq!(result.function_name, "bar");
        assert_eq!(result.name, "Foo");
        assert_eq!(result.template_id, Some(2));
    }
}
