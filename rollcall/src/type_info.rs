//! Late-bound type identity for registrations.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type's identity and display name, captured at registration time.
///
/// Both fields are function pointers rather than values so that
/// registrations stay const-constructible and can be submitted through
/// `inventory`; the id and name are resolved when discovery runs.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: fn() -> TypeId,
    name: fn() -> &'static str,
}

impl TypeInfo {
    /// Capture the identity of `T`.
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>,
            name: std::any::type_name::<T>,
        }
    }

    /// The captured `TypeId`.
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// The captured type name.
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeInfo").field(&self.name()).finish()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
