//! Staff and patient roles, and which dashboard sections each may open.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Receptionist,
    Doctor,
    Accountant,
    Manager,
    Executive,
}

/// A dashboard area of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Patient,
    Reception,
    Doctor,
    Accounting,
    Management,
    Executive,
    Profile,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Patient => "My Care",
            Section::Reception => "Reception",
            Section::Doctor => "Doctor",
            Section::Accounting => "Accounting",
            Section::Management => "Management",
            Section::Executive => "Executive",
            Section::Profile => "Profile",
        }
    }
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Receptionist => "Receptionist",
            Role::Doctor => "Doctor",
            Role::Accountant => "Accountant",
            Role::Manager => "Manager",
            Role::Executive => "Executive",
        }
    }

    /// Landing section after login.
    pub fn home(&self) -> Section {
        match self {
            Role::Patient => Section::Patient,
            Role::Receptionist => Section::Reception,
            Role::Doctor => Section::Doctor,
            Role::Accountant => Section::Accounting,
            Role::Manager => Section::Management,
            Role::Executive => Section::Executive,
        }
    }

    /// Sections shown in the navbar, home first. Profile is always last.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Role::Patient => &[Section::Patient, Section::Profile],
            Role::Receptionist => &[Section::Reception, Section::Profile],
            Role::Doctor => &[Section::Doctor, Section::Profile],
            Role::Accountant => &[Section::Accounting, Section::Profile],
            Role::Manager => &[
                Section::Management,
                Section::Reception,
                Section::Accounting,
                Section::Profile,
            ],
            Role::Executive => &[
                Section::Executive,
                Section::Management,
                Section::Accounting,
                Section::Profile,
            ],
        }
    }

    pub fn can_access(&self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_reaches_home_and_profile() {
        for role in [
            Role::Patient,
            Role::Receptionist,
            Role::Doctor,
            Role::Accountant,
            Role::Manager,
            Role::Executive,
        ] {
            assert!(role.can_access(role.home()), "{role:?}");
            assert!(role.can_access(Section::Profile), "{role:?}");
            assert_eq!(role.sections()[0], role.home());
        }
    }

    #[test]
    fn test_clinical_sections_are_restricted() {
        assert!(!Role::Patient.can_access(Section::Doctor));
        assert!(!Role::Accountant.can_access(Section::Patient));
        assert!(!Role::Executive.can_access(Section::Doctor));
        assert!(Role::Manager.can_access(Section::Reception));
        assert!(Role::Executive.can_access(Section::Accounting));
    }

    #[test]
    fn test_role_wire_format() {
        let role: Role = serde_json::from_str("\"receptionist\"").unwrap();
        assert_eq!(role, Role::Receptionist);
        assert_eq!(serde_json::to_string(&Role::Executive).unwrap(), "\"executive\"");
    }
}
