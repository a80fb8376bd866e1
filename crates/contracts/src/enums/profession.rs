use serde::{Deserialize, Serialize};

/// Professions offered in the header dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Doctor,
    Lawyer,
    Engineer,
    Teacher,
    Accountant,
    Consultant,
    Designer,
    Developer,
}

impl Profession {
    /// Label shown in the dropdown and used as the option value
    pub fn label(&self) -> &'static str {
        match self {
            Profession::Doctor => "Doctor",
            Profession::Lawyer => "Lawyer",
            Profession::Engineer => "Engineer",
            Profession::Teacher => "Teacher",
            Profession::Accountant => "Accountant",
            Profession::Consultant => "Consultant",
            Profession::Designer => "Designer",
            Profession::Developer => "Developer",
        }
    }

    /// All professions in dropdown order
    pub fn all() -> [Profession; 8] {
        [
            Profession::Doctor,
            Profession::Lawyer,
            Profession::Engineer,
            Profession::Teacher,
            Profession::Accountant,
            Profession::Consultant,
            Profession::Designer,
            Profession::Developer,
        ]
    }

    /// Parse from the option value. Empty or unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
