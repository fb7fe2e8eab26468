//! Registration form field catalogue and change events

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Radio,
    Select,
    Checkbox,
}

/// Every field of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Email,
    Age,
    Gender,
    Role,
    AcceptTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Age,
        FieldName::Gender,
        FieldName::Role,
        FieldName::AcceptTerms,
    ];

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Role => "Role",
            Self::AcceptTerms => "Accept Terms",
        }
    }

    /// Form-level name of the field (used in logs)
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Role => "role",
            Self::AcceptTerms => "acceptTerms",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::FullName | Self::Email => FieldKind::Text,
            Self::Age => FieldKind::Number,
            Self::Gender => FieldKind::Radio,
            Self::Role => FieldKind::Select,
            Self::AcceptTerms => FieldKind::Checkbox,
        }
    }

    /// Whether the field accepts typed characters
    pub fn is_typed(self) -> bool {
        matches!(self.kind(), FieldKind::Text | FieldKind::Number)
    }
}

/// Radio options for the gender field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Next radio option; an unset group selects the first option
    pub fn next(current: Option<Self>) -> Self {
        match current {
            None | Some(Self::Female) => Self::Male,
            Some(Self::Male) => Self::Female,
        }
    }

    /// Previous radio option; an unset group selects the last option
    pub fn prev(current: Option<Self>) -> Self {
        match current {
            None | Some(Self::Male) => Self::Female,
            Some(Self::Female) => Self::Male,
        }
    }
}

/// Select options for the role field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Placeholder shown while no role is chosen. It cannot be selected.
    pub const PLACEHOLDER: &'static str = "Select Role";

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Admin => "Admin",
        }
    }

    /// Next option (wraps). The placeholder is skipped.
    pub fn next(current: Option<Self>) -> Self {
        match current {
            None | Some(Self::Admin) => Self::Student,
            Some(Self::Student) => Self::Teacher,
            Some(Self::Teacher) => Self::Admin,
        }
    }

    /// Previous option (wraps). The placeholder is skipped.
    pub fn prev(current: Option<Self>) -> Self {
        match current {
            None | Some(Self::Student) => Self::Admin,
            Some(Self::Teacher) => Self::Student,
            Some(Self::Admin) => Self::Teacher,
        }
    }
}

/// A change event for exactly one field.
///
/// The checkbox variant carries the new checked state; every other variant
/// carries the raw text or selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    FullName(String),
    Email(String),
    Age(String),
    Gender(Gender),
    Role(Role),
    AcceptTerms(bool),
}

impl FieldChange {
    /// The field this change targets
    pub fn field(&self) -> FieldName {
        match self {
            Self::FullName(_) => FieldName::FullName,
            Self::Email(_) => FieldName::Email,
            Self::Age(_) => FieldName::Age,
            Self::Gender(_) => FieldName::Gender,
            Self::Role(_) => FieldName::Role,
            Self::AcceptTerms(_) => FieldName::AcceptTerms,
        }
    }
}

/// Whether `c` may be typed into a numeric input
pub fn is_numeric_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}
