//! Ordered parameter storage.
//!
//! A `ParameterList` owns its parameters in an arena and hands out copyable
//! `ParamId` handles on registration. Iteration order is insertion order,
//! which is also the display row order in the property tree.

use std::ops::{Index, IndexMut};
use std::slice;

use super::parameter::Parameter;

/// Stable handle to a parameter within one `ParameterList`.
///
/// Handles are plain positions into the owning list's arena; they are only
/// meaningful for the list that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamId(usize);

impl ParamId {
    /// Returns the position of this parameter in display order.
    pub fn position(&self) -> usize {
        self.0
    }
}

/// Ordered collection of parameters defining display/iteration order.
///
/// There is no duplicate detection and no name-based lookup; consumers
/// iterate by position, matching GUI row binding. Registrants keep the
/// `ParamId` returned by [`push`](Self::push) to read and write their own
/// parameters later.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterList {
    params: Vec<Parameter>,
}

impl ParameterList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Appends a parameter and returns its handle.
    pub fn push(&mut self, param: Parameter) -> ParamId {
        let id = ParamId(self.params.len());
        self.params.push(param);
        id
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters are registered.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the parameter behind `id`, if the handle belongs to this list.
    pub fn get(&self, id: ParamId) -> Option<&Parameter> {
        self.params.get(id.0)
    }

    /// Returns the parameter behind `id` mutably.
    pub fn get_mut(&mut self, id: ParamId) -> Option<&mut Parameter> {
        self.params.get_mut(id.0)
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    /// Iterates parameters mutably in insertion order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Parameter> {
        self.params.iter_mut()
    }
}

impl Index<ParamId> for ParameterList {
    type Output = Parameter;

    fn index(&self, id: ParamId) -> &Parameter {
        &self.params[id.0]
    }
}

impl IndexMut<ParamId> for ParameterList {
    fn index_mut(&mut self, id: ParamId) -> &mut Parameter {
        &mut self.params[id.0]
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParameterList {
    type Item = &'a mut Parameter;
    type IntoIter = slice::IterMut<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
