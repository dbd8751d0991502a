//! Lexical environments.
//!
//! An [`Environment`] is a shared handle to a [`Scope`]. Function calls
//! create a scope whose parent is the closure's captured environment, so
//! closures keep their defining scope alive for as long as they exist.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Object;

/// Failure of [`Scope::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No scope in the chain binds the name.
    Undefined,
}

/// Single-threaded shared, mutable cell.
///
/// All scope allocation goes through [`LocalScope::new`]. Not `Send`: the
/// evaluator runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// Bindings of one scope plus its enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind in this scope, replacing any binding of the same name here.
    #[inline]
    pub fn define(&mut self, name: String, value: Object) {
        self.bindings.insert(name, value);
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Replace the innermost existing binding of `name`.
    pub fn assign(&mut self, name: &str, value: Object) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }

    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Names bound directly in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

// Values may hold closures over this very scope; print names only.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.local_names())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Shared handle to a scope chain.
///
/// Cloning is cheap and yields a handle to the same scope.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Fresh top-level environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// New empty scope enclosed by `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(outer.scope.clone())),
        }
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        self.scope.borrow().lookup(name)
    }

    /// Bind in this scope (the `def` rule).
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.scope.borrow_mut().define(name.into(), value);
    }

    /// Rebind where `name` is already bound.
    pub fn assign(&self, name: &str, value: Object) -> Result<(), AssignError> {
        self.scope.borrow_mut().assign(name, value)
    }

    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().contains_local(name)
    }

    pub fn local_names(&self) -> Vec<String> {
        self.scope.borrow().local_names()
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Environment").field(&*self.scope.borrow()).finish()
    }
}
