//! The ordered filter pipeline and its command surface.
//!
//! [`FilterPipeline`] owns the sequence of selected filters together
//! with their parameter values. Insertion order is application order is
//! the order the service executes filters in; serialization never
//! reorders. Every mutation is an explicit command so the UI layer can
//! stay a thin adapter from DOM events to calls on this type.

use std::collections::BTreeMap;

use crate::catalog::FilterKind;
use crate::types::{FilterInvocation, PipelineError};

/// One occurrence of a filter in the pipeline.
///
/// Parameter values are stored positionally against the filter's static
/// [`ParameterSpec`](crate::types::ParameterSpec) list, so an entry can
/// never carry a stray or missing parameter: the value set is the spec
/// set by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineEntry {
    kind: FilterKind,
    values: Vec<i64>,
}

impl PipelineEntry {
    /// Create an entry with every parameter at its default value.
    #[must_use]
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            values: kind.params().iter().map(|spec| spec.default).collect(),
        }
    }

    /// The filter this entry invokes.
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Current value of the named parameter, if the filter declares it.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<i64> {
        let position = self
            .kind
            .params()
            .iter()
            .position(|spec| spec.name == name)?;
        self.values.get(position).copied()
    }

    /// Parameter `(spec, value)` pairs in declaration order, for
    /// rendering the entry's control panel.
    pub fn parameters(&self) -> impl Iterator<Item = (&'static crate::types::ParameterSpec, i64)> {
        self.kind.params().iter().zip(self.values.iter().copied())
    }

    /// Overwrite one parameter, clamping into the spec's range.
    ///
    /// Returns the value actually stored so the caller's readout can
    /// reflect clamping.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownParameter`] when the filter does
    /// not declare `name`.
    pub fn set_parameter(&mut self, name: &str, value: i64) -> Result<i64, PipelineError> {
        let position = self
            .kind
            .params()
            .iter()
            .position(|spec| spec.name == name)
            .ok_or_else(|| PipelineError::UnknownParameter {
                filter: self.kind.key(),
                name: name.to_owned(),
            })?;
        let clamped = self.kind.params()[position].clamp(value);
        self.values[position] = clamped;
        Ok(clamped)
    }

    /// The wire representation of this entry.
    ///
    /// `params` is `None` (and therefore absent from the JSON) for
    /// parameterless filters.
    #[must_use]
    pub fn to_invocation(&self) -> FilterInvocation {
        let params = if self.values.is_empty() {
            None
        } else {
            Some(
                self.parameters()
                    .map(|(spec, value)| (spec.name.to_owned(), value))
                    .collect::<BTreeMap<_, _>>(),
            )
        };
        FilterInvocation {
            name: self.kind.key().to_owned(),
            params,
        }
    }
}

/// The ordered, parameterized list of selected filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    entries: Vec<PipelineEntry>,
}

impl FilterPipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a new entry seeded with default parameter values.
    ///
    /// Returns the new entry's index. Duplicate kinds are permitted and
    /// produce distinct entries with independently owned parameters;
    /// the toggle-driven UI avoids duplicates by consulting
    /// [`contains`](Self::contains) before calling this.
    pub fn add(&mut self, kind: FilterKind) -> usize {
        self.entries.push(PipelineEntry::new(kind));
        self.entries.len() - 1
    }

    /// Remove every entry of the given kind, returning how many were
    /// removed. Removing an absent kind is a no-op, not an error.
    pub fn remove(&mut self, kind: FilterKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.kind() != kind);
        before - self.entries.len()
    }

    /// Remove the entry at `index`, returning whether anything was
    /// removed. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pipeline has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry invokes the given filter.
    #[must_use]
    pub fn contains(&self, kind: FilterKind) -> bool {
        self.index_of(kind).is_some()
    }

    /// Index of the first entry of the given kind, if any.
    #[must_use]
    pub fn index_of(&self, kind: FilterKind) -> Option<usize> {
        self.entries.iter().position(|entry| entry.kind() == kind)
    }

    /// The entries in application order.
    #[must_use]
    pub fn entries(&self) -> &[PipelineEntry] {
        &self.entries
    }

    /// Current value of one parameter of the entry at `index`.
    #[must_use]
    pub fn parameter(&self, index: usize, name: &str) -> Option<i64> {
        self.entries.get(index)?.parameter(name)
    }

    /// Overwrite one parameter of the entry at `index`, clamping into
    /// the declared range, and return the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoSuchEntry`] for an out-of-range index
    /// and [`PipelineError::UnknownParameter`] for a name the entry's
    /// filter does not declare.
    pub fn set_parameter(
        &mut self,
        index: usize,
        name: &str,
        value: i64,
    ) -> Result<i64, PipelineError> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(PipelineError::NoSuchEntry(index))?;
        entry.set_parameter(name, value)
    }

    /// Wire representation for the apply endpoint.
    ///
    /// Order matches pipeline order exactly; the service applies
    /// filters in this literal sequence.
    #[must_use]
    pub fn serialize_for_apply(&self) -> Vec<FilterInvocation> {
        self.collect_invocations()
    }

    /// Wire representation for the code-export endpoint.
    ///
    /// Structurally identical to
    /// [`serialize_for_apply`](Self::serialize_for_apply), kept
    /// separate because the two endpoints are different collaborators.
    #[must_use]
    pub fn serialize_for_export(&self) -> Vec<FilterInvocation> {
        self.collect_invocations()
    }

    fn collect_invocations(&self) -> Vec<FilterInvocation> {
        self.entries
            .iter()
            .map(PipelineEntry::to_invocation)
            .collect()
    }
}
