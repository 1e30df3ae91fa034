//! Compiled program elements.
//!
//! Elements form a tree rooted at packages: package -> class -> nested class
//! or member. This is the view the host compiler gives of symbols it has
//! already resolved, whether they come from a prebuilt dependency or from
//! attributing the current unit.

use rustc_hash::FxHashMap;

/// Handle into an `ElementArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Class,
    Field,
    Method,
}

/// Compile-time constant value of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstantValue {
    Int(i32),
    Long(i64),
    Bool(bool),
    Str(String),
}

#[derive(Clone, Debug)]
pub struct Element {
    pub kind: ElementKind,
    /// Simple name; for packages the full dotted package name.
    pub simple_name: String,
    /// Absent only for packages.
    pub enclosing: Option<ElementId>,
    /// Enclosed elements in declaration order.
    pub enclosed: Vec<ElementId>,
    pub constant: Option<ConstantValue>,
}

#[derive(Debug, Default)]
pub struct ElementArena {
    elements: Vec<Element>,
    packages: FxHashMap<String, ElementId>,
    classes: FxHashMap<String, ElementId>,
}

impl ElementArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    fn alloc(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        if let Some(parent) = element.enclosing
            && let Some(parent) = self.elements.get_mut(parent.index())
        {
            parent.enclosed.push(id);
        }
        self.elements.push(element);
        id
    }

    /// Returns the package element for `name`, creating it on first use.
    /// The empty name is the unnamed package.
    pub fn add_package(&mut self, name: &str) -> ElementId {
        if let Some(id) = self.find_package(name) {
            return id;
        }
        let id = self.alloc(Element {
            kind: ElementKind::Package,
            simple_name: name.to_string(),
            enclosing: None,
            enclosed: Vec::new(),
            constant: None,
        });
        self.packages.insert(name.to_string(), id);
        id
    }

    /// Adds a class under a package or (as a nested class) under another class.
    pub fn add_class(&mut self, enclosing: ElementId, name: &str) -> ElementId {
        let id = self.alloc(Element {
            kind: ElementKind::Class,
            simple_name: name.to_string(),
            enclosing: Some(enclosing),
            enclosed: Vec::new(),
            constant: None,
        });
        let qualified = self.qualified_name(id);
        self.classes.insert(qualified, id);
        id
    }

    pub fn add_field(
        &mut self,
        class: ElementId,
        name: &str,
        constant: Option<ConstantValue>,
    ) -> ElementId {
        self.alloc(Element {
            kind: ElementKind::Field,
            simple_name: name.to_string(),
            enclosing: Some(class),
            enclosed: Vec::new(),
            constant,
        })
    }

    pub fn add_method(&mut self, class: ElementId, name: &str) -> ElementId {
        self.alloc(Element {
            kind: ElementKind::Method,
            simple_name: name.to_string(),
            enclosing: Some(class),
            enclosed: Vec::new(),
            constant: None,
        })
    }

    /// Finds a class by canonical name (`com.app.R`, `com.app.R.layout`).
    pub fn find_class(&self, qualified_name: &str) -> Option<ElementId> {
        self.classes.get(qualified_name).copied()
    }

    pub fn find_package(&self, name: &str) -> Option<ElementId> {
        self.packages.get(name).copied()
    }

    #[inline]
    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.get(id).map(|e| e.kind)
    }

    #[inline]
    pub fn simple_name(&self, id: ElementId) -> &str {
        self.get(id).map(|e| e.simple_name.as_str()).unwrap_or("")
    }

    #[inline]
    pub fn enclosing(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.enclosing)
    }

    pub fn enclosed(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|e| e.enclosed.as_slice()).unwrap_or(&[])
    }

    /// The integer constant of a field, if it has one.
    pub fn int_constant(&self, id: ElementId) -> Option<i32> {
        let element = self.get(id)?;
        if element.kind != ElementKind::Field {
            return None;
        }
        match element.constant {
            Some(ConstantValue::Int(value)) => Some(value),
            _ => None,
        }
    }

    /// Nearest class containing `id`, or `id` itself when it is a class.
    /// Packages have no enclosing class.
    pub fn enclosing_class(&self, id: ElementId) -> Option<ElementId> {
        let mut current = Some(id);
        while let Some(cur) = current {
            match self.kind(cur)? {
                ElementKind::Class => return Some(cur),
                ElementKind::Package => return None,
                ElementKind::Field | ElementKind::Method => current = self.enclosing(cur),
            }
        }
        None
    }

    /// Nearest enclosing package.
    pub fn package_of(&self, id: ElementId) -> Option<ElementId> {
        let mut current = Some(id);
        while let Some(cur) = current {
            if self.kind(cur)? == ElementKind::Package {
                return Some(cur);
            }
            current = self.enclosing(cur);
        }
        None
    }

    /// Dot-joined name from the package down. Members of the unnamed package
    /// carry no leading dot.
    pub fn qualified_name(&self, id: ElementId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let Some(element) = self.get(cur) else {
                break;
            };
            if !element.simple_name.is_empty() {
                parts.push(element.simple_name.as_str());
            }
            current = element.enclosing;
        }
        parts.reverse();
        parts.join(".")
    }
}
