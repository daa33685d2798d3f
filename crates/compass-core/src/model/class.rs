//! Classes and their members.

use std::{fmt, str::FromStr};

use crate::model::{ElementKind, PackageId, element::ElementMeta, element::impl_uml_element};

/// The flavour of a class-like element.
///
/// The string forms match the type names used by the diagram editor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Class,
    AbstractClass,
    Interface,
    Enumeration,
}

impl FromStr for ClassKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Class" => Ok(Self::Class),
            "AbstractClass" => Ok(Self::AbstractClass),
            "Interface" => Ok(Self::Interface),
            "Enumeration" => Ok(Self::Enumeration),
            _ => Err("Unsupported class kind"),
        }
    }
}

impl From<ClassKind> for &'static str {
    fn from(val: ClassKind) -> Self {
        match val {
            ClassKind::Class => "Class",
            ClassKind::AbstractClass => "AbstractClass",
            ClassKind::Interface => "Interface",
            ClassKind::Enumeration => "Enumeration",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A typed attribute of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmlAttribute {
    name: String,
    attribute_type: String,
    meta: ElementMeta,
}

impl UmlAttribute {
    /// Create an attribute with its declared type name. The type may be empty.
    pub fn new(name: impl Into<String>, attribute_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute_type: attribute_type.into(),
            meta: ElementMeta::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute_type(&self) -> &str {
        &self.attribute_type
    }
}

impl_uml_element!(UmlAttribute, ElementKind::Attribute);

/// A method of a class: name, return type, and parameter type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmlMethod {
    name: String,
    return_type: String,
    parameters: Vec<String>,
    meta: ElementMeta,
}

impl UmlMethod {
    /// Create a method with its return type and ordered parameter types.
    pub fn new<P, S>(name: impl Into<String>, return_type: impl Into<String>, parameters: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            meta: ElementMeta::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Parameter type names in declaration order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Render the method as `name(p1, p2): ret`.
    pub fn signature(&self) -> String {
        let mut signature = format!("{}({})", self.name, self.parameters.join(", "));
        if !self.return_type.is_empty() {
            signature.push_str(": ");
            signature.push_str(&self.return_type);
        }
        signature
    }
}

impl_uml_element!(UmlMethod, ElementKind::Method);

/// A class, abstract class, interface, or enumeration.
///
/// A class exclusively owns its attributes and methods. Its package is a
/// back-reference filled in when the class is registered with a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmlClass {
    name: String,
    class_kind: ClassKind,
    attributes: Vec<UmlAttribute>,
    methods: Vec<UmlMethod>,
    package: Option<PackageId>,
    meta: ElementMeta,
}

impl UmlClass {
    /// Create a class without members.
    pub fn new(name: impl Into<String>, class_kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            class_kind,
            attributes: Vec::new(),
            methods: Vec::new(),
            package: None,
            meta: ElementMeta::default(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, attribute: UmlAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a method.
    pub fn with_method(mut self, method: UmlMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_kind(&self) -> ClassKind {
        self.class_kind
    }

    pub fn attributes(&self) -> &[UmlAttribute] {
        &self.attributes
    }

    pub fn methods(&self) -> &[UmlMethod] {
        &self.methods
    }

    /// The package this class was registered with, if any.
    pub fn package(&self) -> Option<PackageId> {
        self.package
    }

    pub(crate) fn set_package(&mut self, package: PackageId) {
        self.package = Some(package);
    }

    pub(crate) fn clear_package(&mut self) {
        self.package = None;
    }

    pub(crate) fn attribute_mut(&mut self, index: usize) -> Option<&mut UmlAttribute> {
        self.attributes.get_mut(index)
    }

    pub(crate) fn method_mut(&mut self, index: usize) -> Option<&mut UmlMethod> {
        self.methods.get_mut(index)
    }

    /// Borrow the attribute at `index` together with this class as its owner.
    pub fn attribute(&self, index: usize) -> Option<MemberRef<'_, UmlAttribute>> {
        self.attributes
            .get(index)
            .map(|member| MemberRef::new(self, member))
    }

    /// Borrow the method at `index` together with this class as its owner.
    pub fn method(&self, index: usize) -> Option<MemberRef<'_, UmlMethod>> {
        self.methods
            .get(index)
            .map(|member| MemberRef::new(self, member))
    }

    /// Iterate over attributes paired with this class as their owner.
    pub fn attribute_refs(&self) -> impl Iterator<Item = MemberRef<'_, UmlAttribute>> {
        self.attributes
            .iter()
            .map(move |member| MemberRef::new(self, member))
    }

    /// Iterate over methods paired with this class as their owner.
    pub fn method_refs(&self) -> impl Iterator<Item = MemberRef<'_, UmlMethod>> {
        self.methods
            .iter()
            .map(move |member| MemberRef::new(self, member))
    }
}

impl_uml_element!(UmlClass, ElementKind::Class);

/// A class member borrowed together with its owning class.
///
/// The owner is a non-owning back-reference that is always present: a
/// `MemberRef` can only be obtained from the class that owns the member.
#[derive(Debug)]
pub struct MemberRef<'d, T> {
    owner: &'d UmlClass,
    member: &'d T,
}

impl<T> Clone for MemberRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MemberRef<'_, T> {}

impl<'d, T> MemberRef<'d, T> {
    fn new(owner: &'d UmlClass, member: &'d T) -> Self {
        Self { owner, member }
    }

    /// The class that owns this member.
    pub fn owner(&self) -> &'d UmlClass {
        self.owner
    }

    /// The member itself.
    pub fn member(&self) -> &'d T {
        self.member
    }
}
