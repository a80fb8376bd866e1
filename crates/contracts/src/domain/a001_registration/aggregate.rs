use super::error::RegistrationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Form fields
// ============================================================================

/// Scalar fields of the registration form, addressed by their HTML `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Category,
    SubCategory,
    Name,
    Address,
    Experience,
    Phone,
}

impl FormField {
    /// Value of the control's `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Category => "category",
            FormField::SubCategory => "subCategory",
            FormField::Name => "name",
            FormField::Address => "address",
            FormField::Experience => "experience",
            FormField::Phone => "phone",
        }
    }

    pub fn all() -> [FormField; 6] {
        [
            FormField::Category,
            FormField::SubCategory,
            FormField::Name,
            FormField::Address,
            FormField::Experience,
            FormField::Phone,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.name() == name)
    }
}

impl std::str::FromStr for FormField {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RegistrationError::UnknownField(s.to_string()))
    }
}

// ============================================================================
// Form record
// ============================================================================

/// Text values entered into the registration form.
///
/// `Default` is the canonical empty record shown after a profession change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub category: String,
    pub sub_category: String,
    pub name: String,
    pub address: String,
    pub experience: String,
    pub phone: String,
}

impl RegistrationForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Category => &self.category,
            FormField::SubCategory => &self.sub_category,
            FormField::Name => &self.name,
            FormField::Address => &self.address,
            FormField::Experience => &self.experience,
            FormField::Phone => &self.phone,
        }
    }

    /// Overwrite one field. Other fields are left as they are; in particular
    /// changing the category keeps the current sub category.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Category => &mut self.category,
            FormField::SubCategory => &mut self.sub_category,
            FormField::Name => &mut self.name,
            FormField::Address => &mut self.address,
            FormField::Experience => &mut self.experience,
            FormField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_controls() {
        let names: Vec<&str> = FormField::all().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["category", "subCategory", "name", "address", "experience", "phone"]
        );
        for field in FormField::all() {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_parse_unknown_field() {
        assert_eq!(
            "images".parse::<FormField>(),
            Err(RegistrationError::UnknownField("images".to_string()))
        );
        assert_eq!("phone".parse::<FormField>(), Ok(FormField::Phone));
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut form = RegistrationForm::default();
        form.set(FormField::Category, "Specialist");
        form.set(FormField::SubCategory, "Cardiology");
        form.set(FormField::Category, "Surgeon");

        assert_eq!(form.get(FormField::Category), "Surgeon");
        assert_eq!(form.get(FormField::SubCategory), "Cardiology");
        assert_eq!(form.name, "");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_serializes_with_control_names() {
        let mut form = RegistrationForm::default();
        form.set(FormField::SubCategory, "Audit");
        let json = serde_json::to_value(&form).unwrap();

        assert_eq!(json["subCategory"], "Audit");
        assert_eq!(json["experience"], "");
    }
}
