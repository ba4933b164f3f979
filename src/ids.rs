//! Typed identifiers.

/// Declare a transparent string identifier newtype.
///
/// # Example
///
/// ```
/// use symptom_wizard::string_id;
///
/// string_id! {
///     /// Identifier of a pharmacy branch.
///     pub struct BranchId;
/// }
///
/// let id = BranchId::new("kl-central");
/// assert_eq!(id.as_str(), "kl-central");
/// assert_eq!(id.to_string(), "kl-central");
/// ```
#[macro_export]
macro_rules! string_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Reference-data id of a body part, e.g. `head`.
    pub struct BodyPartId;
}

string_id! {
    /// Reference-data id of a symptom, e.g. `chest-pain`.
    pub struct SymptomId;
}

string_id! {
    /// Reference-data id of a medication.
    pub struct MedicationId;
}

string_id! {
    /// Id of a session record issued by the store.
    pub struct SessionId;
}

string_id! {
    /// Id of an order record issued by the store.
    pub struct OrderId;
}

string_id! {
    /// Id of an assessment-log entry issued by the store.
    pub struct AssessmentLogId;
}

/// Fresh random document id, as issued by the in-memory store.
pub(crate) fn generate() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
