/// Defines a model struct along with its string ID type.
///
/// Every model gets an `id` and a `created` timestamp on top of its own fields,
/// read-only getters, and an owned-pattern builder. Models are immutable once
/// built, so no setters are generated.
#[macro_export]
macro_rules! converter_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $($fields:tt)*
        }
        $id:ident
        $builder:ident

    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[cfg_attr(feature = "with_serde", serde(transparent))]
        pub struct $id(String);

        impl $id {
            pub fn new<T: Into<String>>(id: T) -> Self {
                Self(id.into())
            }

            /// Create a new random (v4 uuid) ID.
            pub fn create() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Return a string ref for this ID
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::convert::From<$id> for String {
            fn from(id: $id) -> Self {
                let $id(val) = id;
                val
            }
        }

        impl std::convert::From<String> for $id {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<&str> for $id {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, derive_builder::Builder)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub")]
        pub struct $name {
            id: $id,
            $($fields)*
            created: chrono::DateTime<chrono::Utc>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    }
}
